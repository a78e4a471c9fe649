//! Arithmetic operators as callable, immutable, hashable and sortable values.
//!
//! ```
//! use operators::arithmetical::{ADD, MUL, POW, Arithmetical};
//!
//! assert_eq!(ADD.apply([1, 2]), Ok(3));
//! assert_eq!(MUL.name(), "mul");
//! assert_eq!(MUL.arity(), 2);
//! assert!(POW > MUL);
//! assert_eq!(Arithmetical::Mul, MUL);
//! ```

use crate::catalog::operator_catalog;

operator_catalog! {
    /// The arithmetic operators. Operands must implement
    /// [`Arithmetic`](crate::operand::Arithmetic).
    pub enum Arithmetical("arithmetical"): Arithmetic {
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
