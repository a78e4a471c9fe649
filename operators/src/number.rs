use crate::{
    error::{OperandError, OperandResult},
    operand::{Algebraic, Arithmetic},
};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// A dynamically typed number. Operations on two integers stay integral
/// where the result is an integer, anything involving a float is computed
/// in floating point.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    /// Signed integer value of 64 bits.
    Int(i64),
    /// Floating point value of 64 bits.
    Float(f64),
}

impl Number {
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(value) => value as f64,
            Number::Float(value) => value,
        }
    }
    pub fn is_int(self) -> bool {
        matches!(self, Number::Int(_))
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => a == b,
            (a, b) => a.as_f64() == b.as_f64(),
        }
    }
}

impl Default for Number {
    fn default() -> Self {
        Number::Int(0)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Int(value)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::Int(value.into())
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl Display for Number {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(value) => write!(f, "{value}"),
            Number::Float(value) => write!(f, "{value:?}"),
        }
    }
}

/// Applies `$op` on both integers or, if any side is a float, on both sides
/// promoted to floats.
macro_rules! promoting_helper {
    ($left:expr, $right:expr, $op:ident) => {{
        match ($left, $right) {
            (Number::Int(left), Number::Int(right)) => left.$op(right).map(Number::Int),
            (left, right) => left.as_f64().$op(right.as_f64()).map(Number::Float),
        }
    }};
}

impl Arithmetic for Number {
    fn op_pos(self) -> OperandResult<Self> {
        Ok(self)
    }
    fn op_neg(self) -> OperandResult<Self> {
        match self {
            Number::Int(value) => value.op_neg().map(Number::Int),
            Number::Float(value) => value.op_neg().map(Number::Float),
        }
    }
    fn op_abs(self) -> OperandResult<Self> {
        match self {
            Number::Int(value) => value.op_abs().map(Number::Int),
            Number::Float(value) => value.op_abs().map(Number::Float),
        }
    }
    fn op_add(self, rhs: Self) -> OperandResult<Self> {
        promoting_helper!(self, rhs, op_add)
    }
    fn op_sub(self, rhs: Self) -> OperandResult<Self> {
        promoting_helper!(self, rhs, op_sub)
    }
    fn op_mul(self, rhs: Self) -> OperandResult<Self> {
        promoting_helper!(self, rhs, op_mul)
    }
    fn op_truediv(self, rhs: Self) -> OperandResult<Self> {
        // An exact integer quotient stays integral, which keeps precision
        // beyond 2^53; everything else is real division.
        if let (Number::Int(left), Number::Int(right)) = (self, rhs) {
            if let Ok(quotient) = left.op_truediv(right) {
                return Ok(Number::Int(quotient));
            }
        }
        self.as_f64().op_truediv(rhs.as_f64()).map(Number::Float)
    }
    fn op_floordiv(self, rhs: Self) -> OperandResult<Self> {
        promoting_helper!(self, rhs, op_floordiv)
    }
    fn op_mod(self, rhs: Self) -> OperandResult<Self> {
        promoting_helper!(self, rhs, op_mod)
    }
    fn op_pow(self, rhs: Self) -> OperandResult<Self> {
        match (self, rhs) {
            (Number::Int(base), Number::Int(exponent)) if exponent < 0 => {
                if base == 0 {
                    return Err(OperandError::DivisionByZero);
                }
                (base as f64).op_pow(exponent as f64).map(Number::Float)
            }
            (left, right) => promoting_helper!(left, right, op_pow),
        }
    }
}

impl Algebraic for Number {}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_mixed_operands_promote_to_float() {
        assert_eq!(Number::Int(1).op_add(Number::Float(0.5)), Ok(Number::Float(1.5)));
        assert!(Number::Int(1).op_add(Number::Int(2)).is_ok_and(Number::is_int));
        assert!(!Number::Int(1).op_add(Number::Float(2.0)).is_ok_and(Number::is_int));
    }

    #[test]
    fn test_true_division_is_real_division() {
        assert_eq!(Number::Int(4).op_truediv(Number::Int(2)), Ok(Number::Int(2)));
        assert_eq!(Number::Int(3).op_truediv(Number::Int(2)), Ok(Number::Float(1.5)));
        assert_eq!(
            Number::Int(3).op_truediv(Number::Int(0)),
            Err(OperandError::DivisionByZero)
        );
    }

    #[test]
    fn test_exact_integer_division_keeps_precision() {
        let large = (1i64 << 60) + 2;
        let halved = Number::Int(large).op_truediv(Number::Int(2));
        assert!(matches!(halved, Ok(Number::Int(value)) if value == (1 << 59) + 1));

        let quotient = Number::Int(i64::MAX).op_truediv(Number::Int(1));
        assert!(matches!(quotient, Ok(Number::Int(i64::MAX))));

        // `MIN / -1` has no integer result and falls back to real division.
        let quotient = Number::Int(i64::MIN).op_truediv(Number::Int(-1));
        assert!(matches!(quotient, Ok(Number::Float(value)) if value == -(i64::MIN as f64)));
    }

    #[test]
    fn test_integer_power_with_negative_exponent() {
        assert_eq!(Number::Int(2).op_pow(Number::Int(3)), Ok(Number::Int(8)));
        assert_eq!(Number::Int(2).op_pow(Number::Int(-1)), Ok(Number::Float(0.5)));
        assert_eq!(
            Number::Int(0).op_pow(Number::Int(-1)),
            Err(OperandError::DivisionByZero)
        );
    }

    #[test]
    fn test_integer_overflow_is_reported() {
        assert_eq!(
            Number::Int(i64::MAX).op_add(Number::Int(1)),
            Err(OperandError::Overflow { operation: "add" })
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Number::Int(3).to_string(), "3");
        assert_eq!(Number::Float(3.0).to_string(), "3.0");
        assert_eq!(Number::Float(0.25).to_string(), "0.25");
    }

    #[test]
    fn test_serde_untagged() -> Result<(), serde_json::Error> {
        assert_eq!(serde_json::to_string(&Number::Int(7))?, "7");
        assert_eq!(serde_json::to_string(&Number::Float(1.5))?, "1.5");
        let parsed: Vec<Number> = serde_json::from_str("[1, 2.5, -3]")?;
        assert!(parsed[0].is_int());
        assert_eq!(parsed, vec![Number::Int(1), Number::Float(2.5), Number::Int(-3)]);
        Ok(())
    }
}
