use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
/// Public error type for anything that can go wrong when looking up or
/// applying an operator.
pub enum OperatorError {
    #[error("operator `{operator}` expects {expected} operand(s), got {found}")]
    ArityMismatch {
        operator: &'static str,
        expected: usize,
        found: usize,
    },
    #[error(transparent)]
    Operand(#[from] OperandError),
    #[error("unknown operator name: {0:?}")]
    UnknownName(String),
    #[error("operator `{operator}` is not part of the {catalog} catalog")]
    NotInCatalog {
        operator: &'static str,
        catalog: &'static str,
    },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
/// An error raised by the operand layer, that is, by the type the operator
/// is applied to rather than by the operator itself.
pub enum OperandError {
    #[error("operation `{operation}` is not supported for operands of type `{operand}`")]
    Unsupported {
        operation: &'static str,
        operand: &'static str,
    },
    #[error("division by zero")]
    DivisionByZero,
    #[error("overflow in operation `{operation}`")]
    Overflow { operation: &'static str },
    #[error("operation `{operation}` has no exact result in the operand type")]
    Inexact { operation: &'static str },
    #[error("negative exponent")]
    NegativeExponent,
}

impl OperandError {
    pub fn unsupported<T: ?Sized>(operation: &'static str) -> Self {
        Self::Unsupported {
            operation,
            operand: std::any::type_name::<T>(),
        }
    }
}

pub type OperandResult<T> = Result<T, OperandError>;
