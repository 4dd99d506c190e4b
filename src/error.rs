//! Errors produced by vector operations.

use crate::num::{Scalar, ScalarKind};
use std::fmt;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, VectorError>;

/// The concrete type of a vector: its scalar kind and dimension. A dimension
/// of one denotes a bare scalar of the kind.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct VectorType {
    pub kind: ScalarKind,
    pub dimension: usize,
}

#[derive(Error, Clone, Debug, PartialEq)]
pub enum VectorError {
    #[error("Expected an operand of type {expected}, found {found}")]
    TypeMismatch {
        expected: VectorType,
        found: VectorType,
    },

    #[error("Cannot divide by {divisor}, which is or has a zero component")]
    DivisionByZero { divisor: String },

    #[error("Cannot {operation}")]
    InvalidOperation { operation: &'static str },

    #[error("Expected {expected} components, found {found}")]
    InvalidArgument { expected: usize, found: usize },
}

impl VectorType {
    pub const fn new(kind: ScalarKind, dimension: usize) -> Self {
        Self { kind, dimension }
    }

    /// The type of a `Vector<S, N>`.
    pub const fn of<S: Scalar, const N: usize>() -> Self {
        Self::new(S::KIND, N)
    }
}

impl fmt::Display for VectorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.dimension == 1 {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{}{}", self.kind, self.dimension)
        }
    }
}

impl VectorError {
    pub(crate) fn type_mismatch(expected: VectorType, found: VectorType) -> Self {
        log::trace!("Rejected {found} operand where {expected} was expected");
        Self::TypeMismatch { expected, found }
    }

    pub(crate) fn division_by_zero(divisor: impl fmt::Display) -> Self {
        let divisor = divisor.to_string();
        log::trace!("Rejected division by {divisor}");
        Self::DivisionByZero { divisor }
    }

    pub(crate) fn invalid_operation(operation: &'static str) -> Self {
        log::trace!("Rejected attempt to {operation}");
        Self::InvalidOperation { operation }
    }

    pub(crate) fn invalid_argument(expected: usize, found: usize) -> Self {
        log::trace!("Rejected {found} components where {expected} were expected");
        Self::InvalidArgument { expected, found }
    }
}
