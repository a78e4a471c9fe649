//! Algebraic operators, typically associated with algebraic structures and
//! algebraic circuits. The catalog is the arithmetic one plus `matmul`, an
//! alternative multiplication whose meaning is left to the operand type.

use crate::{arithmetical::Arithmetical, catalog::operator_catalog, error::OperatorError};

operator_catalog! {
    /// The algebraic operators. Operands must implement
    /// [`Algebraic`](crate::operand::Algebraic).
    pub enum Algebraical("algebraical"): Algebraic {
        unary {
            /// Identity operator.
            Pos / POS => "pos", Additive, op_pos;
            /// Negation operator.
            Neg / NEG => "neg", Additive, op_neg;
            /// Absolute value operator.
            Abs / ABS => "abs", Absolute, op_abs;
        }
        binary {
            /// Addition operator.
            Add / ADD => "add", Additive, op_add;
            /// Subtraction operator.
            Sub / SUB => "sub", Additive, op_sub;
            /// Multiplication operator.
            Mul / MUL => "mul", Multiplicative, op_mul;
            /// Alternative multiplication operator.
            MatMul / MATMUL => "matmul", Multiplicative, op_matmul;
            /// Division operator.
            TrueDiv / TRUEDIV => "truediv", Multiplicative, op_truediv;
            /// Integer division operator.
            FloorDiv / FLOORDIV => "floordiv", Multiplicative, op_floordiv;
            /// Modulus operator.
            Mod / MOD => "mod", Multiplicative, op_mod;
            /// Exponentiation operator.
            Pow / POW => "pow", Power, op_pow;
        }
    }
}

impl From<Arithmetical> for Algebraical {
    fn from(operator: Arithmetical) -> Self {
        match operator {
            Arithmetical::Pos => Algebraical::Pos,
            Arithmetical::Neg => Algebraical::Neg,
            Arithmetical::Abs => Algebraical::Abs,
            Arithmetical::Add => Algebraical::Add,
            Arithmetical::Sub => Algebraical::Sub,
            Arithmetical::Mul => Algebraical::Mul,
            Arithmetical::TrueDiv => Algebraical::TrueDiv,
            Arithmetical::FloorDiv => Algebraical::FloorDiv,
            Arithmetical::Mod => Algebraical::Mod,
            Arithmetical::Pow => Algebraical::Pow,
        }
    }
}

impl TryFrom<Algebraical> for Arithmetical {
    type Error = OperatorError;

    fn try_from(operator: Algebraical) -> Result<Self, Self::Error> {
        match operator {
            Algebraical::Pos => Ok(Arithmetical::Pos),
            Algebraical::Neg => Ok(Arithmetical::Neg),
            Algebraical::Abs => Ok(Arithmetical::Abs),
            Algebraical::Add => Ok(Arithmetical::Add),
            Algebraical::Sub => Ok(Arithmetical::Sub),
            Algebraical::Mul => Ok(Arithmetical::Mul),
            Algebraical::TrueDiv => Ok(Arithmetical::TrueDiv),
            Algebraical::FloorDiv => Ok(Arithmetical::FloorDiv),
            Algebraical::Mod => Ok(Arithmetical::Mod),
            Algebraical::Pow => Ok(Arithmetical::Pow),
            Algebraical::MatMul => Err(OperatorError::NotInCatalog {
                operator: operator.name(),
                catalog: "arithmetical",
            }),
        }
    }
}
