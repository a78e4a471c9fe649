//! Arithmetic and algebraic operators as first-class values.
//!
//! Each operator is a variant of a closed, `Copy` enum: it can be applied to
//! operands, knows its canonical name and arity, and is ordered by
//! precedence. Equality and hashing are by variant, so operators work as
//! set members and map keys, for example as gate labels of a circuit.
//!
//! ```
//! use operators::{algebraical::{ADD, MUL, POW}, sort_by_precedence};
//! use std::collections::HashSet;
//!
//! let mut gates = vec![POW, MUL, ADD];
//! sort_by_precedence(&mut gates);
//! assert_eq!(format!("{gates:?}"), "[add_, mul_, pow_]");
//!
//! let set: HashSet<_> = [ADD, ADD, ADD].into_iter().collect();
//! assert_eq!(set.len(), 1);
//! ```

pub mod algebraical;
pub mod arithmetical;
mod catalog;
pub mod error;
pub mod number;
pub mod operand;
pub mod precedence;
#[cfg(any(test, feature = "test"))]
pub mod test_helper;

pub use algebraical::Algebraical;
pub use arithmetical::Arithmetical;
pub use error::{OperandError, OperatorError};
pub use number::Number;
pub use operand::{Algebraic, Arithmetic};
pub use precedence::{Operator, Precedence, sort_by_precedence};

#[cfg(test)]
mod test {
    use super::*;
    use proptest::prelude::*;
    use std::{
        cmp::Ordering,
        collections::hash_map::DefaultHasher,
        hash::{Hash, Hasher},
    };

    fn hash_of<T: Hash>(value: T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    fn algebraical() -> impl Strategy<Value = Algebraical> {
        prop::sample::select(Algebraical::ALL)
    }

    proptest! {
        #[test]
        fn test_equality_is_consistent_with_hashing(a in algebraical(), b in algebraical()) {
            prop_assert_eq!(a, a);
            prop_assert_eq!(a == b, b == a);
            prop_assert_eq!(a == b, a.name() == b.name());
            if a == b {
                prop_assert_eq!(hash_of(a), hash_of(b));
            }
        }

        #[test]
        fn test_order_follows_rank(a in algebraical(), b in algebraical()) {
            let (rank_a, rank_b) = (a.precedence().rank(), b.precedence().rank());
            prop_assert_eq!(a < b, rank_a < rank_b);
            prop_assert_eq!(a > b, rank_a > rank_b);
            prop_assert_eq!(a.precedes_or_ties(b), rank_a <= rank_b);
            prop_assert_eq!(a.succeeds_or_ties(b), rank_a >= rank_b);
            prop_assert_eq!(a <= b, a < b || a == b);
            if a != b && rank_a == rank_b {
                prop_assert_eq!(a.partial_cmp(&b), None);
                prop_assert_eq!(a.cmp_precedence(b), Ordering::Equal);
            }
        }

        #[test]
        fn test_sorted_by_rank(mut operators in prop::collection::vec(algebraical(), 0..20)) {
            sort_by_precedence(&mut operators);
            prop_assert!(operators.windows(2).all(|pair| !(pair[0] > pair[1])));
        }

        #[test]
        fn test_floor_division_identity(a in -1000i64..1000, b in -50i64..50) {
            prop_assume!(b != 0);
            let quotient = Arithmetical::FloorDiv.apply([a, b]).unwrap();
            let remainder = Arithmetical::Mod.apply([a, b]).unwrap();
            prop_assert_eq!(quotient * b + remainder, a);
            prop_assert!(remainder == 0 || (remainder < 0) == (b < 0));
            prop_assert!(remainder.abs() < b.abs());
        }

        #[test]
        fn test_arity_is_enforced(operator in algebraical(), count in 0usize..5) {
            let result = operator.apply(vec![1i64; count]);
            if count == operator.arity() {
                let rejected = matches!(result, Err(OperatorError::ArityMismatch { .. }));
                prop_assert!(!rejected, "{:?} rejected {} operand(s)", operator, count);
            } else {
                prop_assert_eq!(
                    result,
                    Err(OperatorError::ArityMismatch {
                        operator: operator.name(),
                        expected: operator.arity(),
                        found: count,
                    })
                );
            }
        }
    }

    #[test]
    fn test_catalogs_agree() {
        for &op in Arithmetical::ALL {
            let name = op.name();
            let counterpart: Algebraical = name.parse().unwrap();
            assert_eq!(counterpart.arity(), op.arity());
            assert_eq!(counterpart.precedence(), op.precedence());
        }
        let extra: Vec<_> = Algebraical::ALL
            .iter()
            .filter(|op| Arithmetical::from_name(op.name()).is_none())
            .collect();
        assert_eq!(extra, vec![&Algebraical::MatMul]);
    }
}
