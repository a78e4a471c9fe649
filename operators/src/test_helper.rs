//! This module is only available if compiling with the `test` feature.
//! It provides operand fixtures for testing and benchmarking purposes.

use crate::operand::{Algebraic, Arithmetic};
use crate::error::OperandResult;
use std::fmt::{self, Display, Formatter};

/// Elements of a free magma over string labels: `matmul` builds a node out
/// of its two operands and nothing else is supported.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Free {
    Leaf(String),
    Node(Box<Free>, Box<Free>),
}

impl Free {
    pub fn leaf<T: Into<String>>(label: T) -> Self {
        Free::Leaf(label.into())
    }
    pub fn node(left: Free, right: Free) -> Self {
        Free::Node(Box::new(left), Box::new(right))
    }
}

impl Display for Free {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Free::Leaf(label) => write!(f, "{label}"),
            Free::Node(left, right) => write!(f, "({left} @ {right})"),
        }
    }
}

impl Arithmetic for Free {}

impl Algebraic for Free {
    fn op_matmul(self, rhs: Self) -> OperandResult<Self> {
        Ok(Free::node(self, rhs))
    }
}
