use crate::error::OperatorError;
use std::{cmp::Ordering, fmt::Debug, hash::Hash, str::FromStr};

/// Precedence tiers, from lowest to highest. Only used to order operator
/// values relative to each other; nothing is parsed with it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Precedence {
    /// `pos`, `neg`, `add` and `sub`.
    Additive = 0,
    /// `mul`, `matmul`, `truediv`, `floordiv` and `mod`.
    Multiplicative = 1,
    /// `pow`.
    Power = 2,
    /// `abs`.
    Absolute = 3,
}

impl Precedence {
    /// Integer rank, higher binds tighter.
    pub const fn rank(self) -> u8 {
        self as u8
    }
}

/// Behavior shared by all operator catalogs.
///
/// Operators are ordered by precedence only. Distinct operators of the same
/// tier (`add` and `sub`, say) are neither less nor greater than each other,
/// which is why catalogs implement [`PartialOrd`] but not [`Ord`]. Use
/// [`Operator::cmp_precedence`] or [`sort_by_precedence`] where a total
/// comparison is needed.
pub trait Operator:
    Copy + Eq + Hash + Debug + PartialOrd + FromStr<Err = OperatorError> + 'static
{
    /// Name of the catalog, e.g. `"arithmetical"`.
    const CATALOG: &'static str;

    /// Every operator of the catalog in declaration order.
    fn all() -> &'static [Self];
    /// Canonical concise name, e.g. `"add"`.
    fn name(self) -> &'static str;
    /// Number of operands the operator consumes.
    fn arity(self) -> usize;
    fn precedence(self) -> Precedence;

    fn from_name(name: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|operator| operator.name() == name)
    }
    fn is_unary(self) -> bool {
        self.arity() == 1
    }
    fn is_binary(self) -> bool {
        self.arity() == 2
    }
    /// Compares precedence tiers only, so distinct operators of the same tier
    /// compare as [`Ordering::Equal`].
    fn cmp_precedence(self, other: Self) -> Ordering {
        self.precedence().cmp(&other.precedence())
    }
    /// `true` if `self` binds at most as tightly as `other`. Unlike `<=`, this
    /// also holds for distinct operators of the same tier.
    fn precedes_or_ties(self, other: Self) -> bool {
        self.precedence() <= other.precedence()
    }
    /// `true` if `self` binds at least as tightly as `other`, the rank-only
    /// counterpart of `>=`.
    fn succeeds_or_ties(self, other: Self) -> bool {
        self.precedence() >= other.precedence()
    }
}

/// Sorts operators from lowest to highest precedence. The sort is stable:
/// operators of the same tier keep their relative input order.
pub fn sort_by_precedence<O: Operator>(operators: &mut [O]) {
    operators.sort_by_key(|operator| operator.precedence());
}

/// Shared [`PartialOrd`] logic of the catalogs: an operator is only equal to
/// itself, other operators of its tier are unordered.
pub(crate) fn partial_cmp_by_precedence<O: Operator>(left: O, right: O) -> Option<Ordering> {
    match left.cmp_precedence(right) {
        Ordering::Equal if left == right => Some(Ordering::Equal),
        Ordering::Equal => None,
        ordering => Some(ordering),
    }
}
