//! The `operator_catalog!` macro stamps out a closed operator enum together
//! with its name/arity/precedence tables, dispatch to the operand trait,
//! ordering, formatting and parsing. Both [`Arithmetical`](crate::arithmetical::Arithmetical)
//! and [`Algebraical`](crate::algebraical::Algebraical) are instances of it.

use crate::error::OperatorError;

/// Takes exactly one operand out of `arguments`.
pub(crate) fn unary_operand<T>(
    operator: &'static str,
    arguments: impl IntoIterator<Item = T>,
) -> Result<T, OperatorError> {
    let mut arguments = arguments.into_iter();
    match (arguments.next(), arguments.next()) {
        (Some(operand), None) => Ok(operand),
        (first, second) => Err(arity_mismatch(
            operator,
            1,
            supplied([first.is_some(), second.is_some()]) + arguments.count(),
        )),
    }
}

/// Takes exactly two operands out of `arguments`.
pub(crate) fn binary_operands<T>(
    operator: &'static str,
    arguments: impl IntoIterator<Item = T>,
) -> Result<(T, T), OperatorError> {
    let mut arguments = arguments.into_iter();
    match (arguments.next(), arguments.next(), arguments.next()) {
        (Some(left), Some(right), None) => Ok((left, right)),
        (first, second, third) => Err(arity_mismatch(
            operator,
            2,
            supplied([first.is_some(), second.is_some(), third.is_some()]) + arguments.count(),
        )),
    }
}

fn supplied<const N: usize>(taken: [bool; N]) -> usize {
    taken.into_iter().filter(|&taken| taken).count()
}

fn arity_mismatch(operator: &'static str, expected: usize, found: usize) -> OperatorError {
    tracing::debug!(operator, expected, found, "rejecting call with wrong number of operands");
    OperatorError::ArityMismatch {
        operator,
        expected,
        found,
    }
}

macro_rules! operator_catalog {
    (
        $(#[$meta:meta])*
        $vis:vis enum $catalog:ident ($catalog_name:literal): $operand:ident {
            unary {
                $(
                    $(#[$unary_meta:meta])*
                    $unary:ident / $unary_const:ident => $unary_name:literal, $unary_tier:ident, $unary_method:ident;
                )*
            }
            binary {
                $(
                    $(#[$binary_meta:meta])*
                    $binary:ident / $binary_const:ident => $binary_name:literal, $binary_tier:ident, $binary_method:ident;
                )*
            }
        }
    ) => {
        $(#[$meta])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(rename_all = "lowercase")]
        $vis enum $catalog {
            $( $(#[$unary_meta])* $unary, )*
            $( $(#[$binary_meta])* $binary, )*
        }

        $(
            $(#[$unary_meta])*
            $vis const $unary_const: $catalog = $catalog::$unary;
        )*
        $(
            $(#[$binary_meta])*
            $vis const $binary_const: $catalog = $catalog::$binary;
        )*

        impl $catalog {
            /// Every operator of the catalog in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$unary,)* $(Self::$binary,)*];

            /// Typical concise names for operators.
            pub const NAMES: &'static [(Self, &'static str)] = &[
                $((Self::$unary, $unary_name),)*
                $((Self::$binary, $binary_name),)*
            ];

            /// Arities of operators.
            pub const ARITIES: &'static [(Self, usize)] = &[
                $((Self::$unary, 1),)*
                $((Self::$binary, 2),)*
            ];

            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$unary => $unary_name,)*
                    $(Self::$binary => $binary_name,)*
                }
            }

            pub const fn arity(self) -> usize {
                match self {
                    $(Self::$unary => 1,)*
                    $(Self::$binary => 2,)*
                }
            }

            pub const fn precedence(self) -> $crate::precedence::Precedence {
                match self {
                    $(Self::$unary => $crate::precedence::Precedence::$unary_tier,)*
                    $(Self::$binary => $crate::precedence::Precedence::$binary_tier,)*
                }
            }

            /// Applies the operator to `arguments`, which must contain exactly
            /// [`arity`](Self::arity) operands.
            pub fn apply<T, I>(self, arguments: I) -> Result<T, $crate::error::OperatorError>
            where
                T: $crate::operand::$operand,
                I: IntoIterator<Item = T>,
            {
                #[allow(unused_imports)]
                use $crate::operand::{Algebraic as _, Arithmetic as _};

                let name = self.name();
                let result = match self {
                    $(
                        Self::$unary => {
                            $crate::catalog::unary_operand(name, arguments)?.$unary_method()
                        }
                    )*
                    $(
                        Self::$binary => {
                            let (left, right) = $crate::catalog::binary_operands(name, arguments)?;
                            left.$binary_method(right)
                        }
                    )*
                };
                result.map_err(|error| {
                    tracing::trace!(operator = name, %error, "operand rejected operation");
                    error.into()
                })
            }
        }

        impl $crate::precedence::Operator for $catalog {
            const CATALOG: &'static str = $catalog_name;

            fn all() -> &'static [Self] {
                Self::ALL
            }
            fn name(self) -> &'static str {
                $catalog::name(self)
            }
            fn arity(self) -> usize {
                $catalog::arity(self)
            }
            fn precedence(self) -> $crate::precedence::Precedence {
                $catalog::precedence(self)
            }
        }

        impl PartialOrd for $catalog {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                $crate::precedence::partial_cmp_by_precedence(*self, *other)
            }
        }

        impl std::fmt::Display for $catalog {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}_", self.name())
            }
        }

        impl std::fmt::Debug for $catalog {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}_", self.name())
            }
        }

        impl std::str::FromStr for $catalog {
            type Err = $crate::error::OperatorError;

            fn from_str(name: &str) -> Result<Self, Self::Err> {
                <Self as $crate::precedence::Operator>::from_name(name)
                    .ok_or_else(|| $crate::error::OperatorError::UnknownName(name.to_owned()))
            }
        }
    };
}

pub(crate) use operator_catalog;
