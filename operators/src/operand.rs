//! Operand traits. An operator is only a dispatcher; what `add` or `matmul`
//! actually mean is decided by the type it is applied to.
//!
//! Every method defaults to [`OperandError::Unsupported`], so a type only
//! implements the operations it has.

use crate::error::{OperandError, OperandResult};

/// Operations available to the [`Arithmetical`](crate::arithmetical::Arithmetical)
/// catalog.
pub trait Arithmetic: Sized {
    fn op_pos(self) -> OperandResult<Self> {
        Err(OperandError::unsupported::<Self>("pos"))
    }
    fn op_neg(self) -> OperandResult<Self> {
        Err(OperandError::unsupported::<Self>("neg"))
    }
    fn op_abs(self) -> OperandResult<Self> {
        Err(OperandError::unsupported::<Self>("abs"))
    }
    fn op_add(self, rhs: Self) -> OperandResult<Self> {
        let _ = rhs;
        Err(OperandError::unsupported::<Self>("add"))
    }
    fn op_sub(self, rhs: Self) -> OperandResult<Self> {
        let _ = rhs;
        Err(OperandError::unsupported::<Self>("sub"))
    }
    fn op_mul(self, rhs: Self) -> OperandResult<Self> {
        let _ = rhs;
        Err(OperandError::unsupported::<Self>("mul"))
    }
    /// Exact division.
    fn op_truediv(self, rhs: Self) -> OperandResult<Self> {
        let _ = rhs;
        Err(OperandError::unsupported::<Self>("truediv"))
    }
    /// Division rounded towards negative infinity.
    fn op_floordiv(self, rhs: Self) -> OperandResult<Self> {
        let _ = rhs;
        Err(OperandError::unsupported::<Self>("floordiv"))
    }
    /// Remainder of [`Arithmetic::op_floordiv`]; it takes the sign of `rhs`.
    fn op_mod(self, rhs: Self) -> OperandResult<Self> {
        let _ = rhs;
        Err(OperandError::unsupported::<Self>("mod"))
    }
    fn op_pow(self, rhs: Self) -> OperandResult<Self> {
        let _ = rhs;
        Err(OperandError::unsupported::<Self>("pow"))
    }
}

/// Operations available to the [`Algebraical`](crate::algebraical::Algebraical)
/// catalog: everything arithmetic plus an alternative multiplication whose
/// meaning (composition, concatenation, ...) belongs to the operand type.
pub trait Algebraic: Arithmetic {
    fn op_matmul(self, rhs: Self) -> OperandResult<Self> {
        let _ = rhs;
        Err(OperandError::unsupported::<Self>("matmul"))
    }
}

fn overflow(operation: &'static str) -> OperandError {
    OperandError::Overflow { operation }
}

macro_rules! signed_arithmetic {
    ($($int:ty),*) => {$(
        impl Arithmetic for $int {
            fn op_pos(self) -> OperandResult<Self> {
                Ok(self)
            }
            fn op_neg(self) -> OperandResult<Self> {
                self.checked_neg().ok_or_else(|| overflow("neg"))
            }
            fn op_abs(self) -> OperandResult<Self> {
                self.checked_abs().ok_or_else(|| overflow("abs"))
            }
            fn op_add(self, rhs: Self) -> OperandResult<Self> {
                self.checked_add(rhs).ok_or_else(|| overflow("add"))
            }
            fn op_sub(self, rhs: Self) -> OperandResult<Self> {
                self.checked_sub(rhs).ok_or_else(|| overflow("sub"))
            }
            fn op_mul(self, rhs: Self) -> OperandResult<Self> {
                self.checked_mul(rhs).ok_or_else(|| overflow("mul"))
            }
            fn op_truediv(self, rhs: Self) -> OperandResult<Self> {
                if rhs == 0 {
                    return Err(OperandError::DivisionByZero);
                }
                let quotient = self.checked_div(rhs).ok_or_else(|| overflow("truediv"))?;
                if self.wrapping_rem(rhs) != 0 {
                    return Err(OperandError::Inexact { operation: "truediv" });
                }
                Ok(quotient)
            }
            fn op_floordiv(self, rhs: Self) -> OperandResult<Self> {
                if rhs == 0 {
                    return Err(OperandError::DivisionByZero);
                }
                // `MIN / -1` is the only overflowing case and is caught here.
                let quotient = self.checked_div(rhs).ok_or_else(|| overflow("floordiv"))?;
                if self % rhs != 0 && ((self < 0) != (rhs < 0)) {
                    Ok(quotient - 1)
                } else {
                    Ok(quotient)
                }
            }
            fn op_mod(self, rhs: Self) -> OperandResult<Self> {
                if rhs == 0 {
                    return Err(OperandError::DivisionByZero);
                }
                let remainder = self.wrapping_rem(rhs);
                if remainder != 0 && ((remainder < 0) != (rhs < 0)) {
                    Ok(remainder + rhs)
                } else {
                    Ok(remainder)
                }
            }
            fn op_pow(self, rhs: Self) -> OperandResult<Self> {
                if rhs < 0 {
                    return Err(OperandError::NegativeExponent);
                }
                // These bases never overflow, whatever the size of the exponent.
                match self {
                    0 if rhs > 0 => return Ok(0),
                    1 => return Ok(1),
                    -1 => return Ok(if rhs % 2 == 0 { 1 } else { -1 }),
                    _ => {}
                }
                let exponent = u32::try_from(rhs).map_err(|_| overflow("pow"))?;
                self.checked_pow(exponent).ok_or_else(|| overflow("pow"))
            }
        }

        impl Algebraic for $int {}
    )*};
}

macro_rules! unsigned_arithmetic {
    ($($uint:ty),*) => {$(
        impl Arithmetic for $uint {
            fn op_pos(self) -> OperandResult<Self> {
                Ok(self)
            }
            fn op_neg(self) -> OperandResult<Self> {
                // Only zero has an unsigned negation.
                self.checked_neg().ok_or_else(|| overflow("neg"))
            }
            fn op_abs(self) -> OperandResult<Self> {
                Ok(self)
            }
            fn op_add(self, rhs: Self) -> OperandResult<Self> {
                self.checked_add(rhs).ok_or_else(|| overflow("add"))
            }
            fn op_sub(self, rhs: Self) -> OperandResult<Self> {
                self.checked_sub(rhs).ok_or_else(|| overflow("sub"))
            }
            fn op_mul(self, rhs: Self) -> OperandResult<Self> {
                self.checked_mul(rhs).ok_or_else(|| overflow("mul"))
            }
            fn op_truediv(self, rhs: Self) -> OperandResult<Self> {
                if rhs == 0 {
                    return Err(OperandError::DivisionByZero);
                }
                if self % rhs != 0 {
                    return Err(OperandError::Inexact { operation: "truediv" });
                }
                Ok(self / rhs)
            }
            fn op_floordiv(self, rhs: Self) -> OperandResult<Self> {
                self.checked_div(rhs).ok_or(OperandError::DivisionByZero)
            }
            fn op_mod(self, rhs: Self) -> OperandResult<Self> {
                self.checked_rem(rhs).ok_or(OperandError::DivisionByZero)
            }
            fn op_pow(self, rhs: Self) -> OperandResult<Self> {
                match self {
                    0 if rhs > 0 => return Ok(0),
                    1 => return Ok(1),
                    _ => {}
                }
                let exponent = u32::try_from(rhs).map_err(|_| overflow("pow"))?;
                self.checked_pow(exponent).ok_or_else(|| overflow("pow"))
            }
        }

        impl Algebraic for $uint {}
    )*};
}

macro_rules! float_arithmetic {
    ($($float:ty),*) => {$(
        impl Arithmetic for $float {
            fn op_pos(self) -> OperandResult<Self> {
                Ok(self)
            }
            fn op_neg(self) -> OperandResult<Self> {
                Ok(-self)
            }
            fn op_abs(self) -> OperandResult<Self> {
                Ok(self.abs())
            }
            fn op_add(self, rhs: Self) -> OperandResult<Self> {
                Ok(self + rhs)
            }
            fn op_sub(self, rhs: Self) -> OperandResult<Self> {
                Ok(self - rhs)
            }
            fn op_mul(self, rhs: Self) -> OperandResult<Self> {
                Ok(self * rhs)
            }
            fn op_truediv(self, rhs: Self) -> OperandResult<Self> {
                if rhs == 0.0 {
                    return Err(OperandError::DivisionByZero);
                }
                Ok(self / rhs)
            }
            fn op_floordiv(self, rhs: Self) -> OperandResult<Self> {
                if rhs == 0.0 {
                    return Err(OperandError::DivisionByZero);
                }
                let remainder = self % rhs;
                let mut quotient = (self - remainder) / rhs;
                if remainder != 0.0 && ((rhs < 0.0) != (remainder < 0.0)) {
                    quotient -= 1.0;
                }
                if quotient == 0.0 {
                    return Ok((0.0 as $float).copysign(self / rhs));
                }
                // `(self - remainder) / rhs` is integral up to rounding error.
                let floor = quotient.floor();
                Ok(if quotient - floor > 0.5 { floor + 1.0 } else { floor })
            }
            fn op_mod(self, rhs: Self) -> OperandResult<Self> {
                if rhs == 0.0 {
                    return Err(OperandError::DivisionByZero);
                }
                let remainder = self % rhs;
                if remainder == 0.0 {
                    Ok((0.0 as $float).copysign(rhs))
                } else if (remainder < 0.0) != (rhs < 0.0) {
                    Ok(remainder + rhs)
                } else {
                    Ok(remainder)
                }
            }
            fn op_pow(self, rhs: Self) -> OperandResult<Self> {
                Ok(self.powf(rhs))
            }
        }

        impl Algebraic for $float {}
    )*};
}

signed_arithmetic!(i8, i16, i32, i64, i128, isize);
unsigned_arithmetic!(u8, u16, u32, u64, u128, usize);
float_arithmetic!(f32, f64);

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_signed_floor_division() {
        assert_eq!(7i64.op_floordiv(2), Ok(3));
        assert_eq!((-7i64).op_floordiv(2), Ok(-4));
        assert_eq!(7i64.op_floordiv(-2), Ok(-4));
        assert_eq!((-7i64).op_floordiv(-2), Ok(3));
        assert_eq!((-8i64).op_floordiv(2), Ok(-4));
        assert_eq!(i64::MIN.op_floordiv(-1), Err(overflow("floordiv")));
        assert_eq!(1i64.op_floordiv(0), Err(OperandError::DivisionByZero));
    }

    #[test]
    fn test_signed_modulus_takes_sign_of_divisor() {
        assert_eq!(7i32.op_mod(4), Ok(3));
        assert_eq!((-7i32).op_mod(2), Ok(1));
        assert_eq!(7i32.op_mod(-2), Ok(-1));
        assert_eq!((-7i32).op_mod(-2), Ok(-1));
        assert_eq!(i32::MIN.op_mod(-1), Ok(0));
        assert_eq!(3i32.op_mod(0), Err(OperandError::DivisionByZero));
    }

    #[test]
    fn test_integer_true_division_must_be_exact() {
        assert_eq!(4i64.op_truediv(2), Ok(2));
        assert_eq!(
            3i64.op_truediv(2),
            Err(OperandError::Inexact {
                operation: "truediv"
            })
        );
        assert_eq!(9u8.op_truediv(3), Ok(3));
        assert_eq!(
            9u8.op_truediv(2),
            Err(OperandError::Inexact {
                operation: "truediv"
            })
        );
    }

    #[test]
    fn test_integer_power() {
        assert_eq!(2i64.op_pow(3), Ok(8));
        assert_eq!(2i64.op_pow(-1), Err(OperandError::NegativeExponent));
        assert_eq!(2i8.op_pow(7), Err(overflow("pow")));
        assert_eq!(3u32.op_pow(2), Ok(9));
        assert_eq!(0i64.op_pow(0), Ok(1));
    }

    #[test]
    fn test_power_of_trivial_bases_with_huge_exponents() {
        assert_eq!(1i64.op_pow(1 << 40), Ok(1));
        assert_eq!((-1i64).op_pow(1 << 40), Ok(1));
        assert_eq!((-1i64).op_pow((1 << 40) + 1), Ok(-1));
        assert_eq!(0i64.op_pow(1 << 40), Ok(0));
        assert_eq!(1u64.op_pow(u64::MAX), Ok(1));
        assert_eq!(0u64.op_pow(u64::MAX), Ok(0));
        assert_eq!(0u64.op_pow(0), Ok(1));
        assert_eq!(2i64.op_pow(1 << 40), Err(overflow("pow")));
    }

    #[test]
    fn test_unsigned_negation_and_absolute_value() {
        assert_eq!(0u64.op_neg(), Ok(0));
        assert_eq!(1u64.op_neg(), Err(overflow("neg")));
        assert_eq!(5u64.op_abs(), Ok(5));
        assert_eq!(1u64.op_sub(2), Err(overflow("sub")));
    }

    #[test]
    fn test_float_floor_division_and_modulus() {
        assert_eq!(7.5f64.op_floordiv(2.0), Ok(3.0));
        assert_eq!((-7.5f64).op_floordiv(2.0), Ok(-4.0));
        assert_eq!((-7.5f64).op_mod(2.0), Ok(0.5));
        assert_eq!(7.5f64.op_mod(-2.0), Ok(-0.5));
        // Naively flooring `1.0 / 0.1` would give `10.0`.
        assert_eq!(1.0f64.op_floordiv(0.1), Ok(9.0));
        assert_eq!(1.0f64.op_truediv(0.0), Err(OperandError::DivisionByZero));
        assert_eq!(1.0f64.op_mod(0.0), Err(OperandError::DivisionByZero));
    }

    #[test]
    fn test_primitives_do_not_combine() {
        assert_eq!(
            1i64.op_matmul(2),
            Err(OperandError::Unsupported {
                operation: "matmul",
                operand: "i64",
            })
        );
    }
}
