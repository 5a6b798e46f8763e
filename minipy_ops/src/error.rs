//! Dispatch error types
//!
//! A dispatch failure is the one way an operator can reject its operands.
//! Failures raised by the native primitive an operator delegated to pass
//! through unchanged.

use std::fmt;

use minipy_runtime::{RuntimeError, Tag};
use thiserror::Error;

use crate::op::Operator;

/// Operand tags presented to an operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signature {
    Unary(Tag),
    Binary(Tag, Tag),
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Signature::Unary(t) => write!(f, "({})", t),
            Signature::Binary(l, r) => write!(f, "({}, {})", l, r),
        }
    }
}

/// No rule exists for this operator and these operand tags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchFailure {
    pub operator: Operator,
    pub operands: Signature,
}

impl fmt::Display for DispatchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.operands {
            Signature::Binary(l, r) => write!(
                f,
                "unsupported operand type(s) for {}: '{}' and '{}'",
                self.operator, l, r
            ),
            Signature::Unary(t) if self.operator.is_symbolic() => {
                write!(f, "bad operand type for unary {}: '{}'", self.operator, t)
            }
            Signature::Unary(t) => {
                write!(f, "bad operand type for {}(): '{}'", self.operator, t)
            }
        }
    }
}

impl std::error::Error for DispatchFailure {}

/// Error returned by every dispatcher entry point
#[derive(Debug, Error)]
pub enum DispatchError {
    /// Operand tags have no rule for the operator
    #[error("TypeError: {0}")]
    Dispatch(#[from] DispatchFailure),

    /// The delegated native primitive failed
    #[error(transparent)]
    Native(#[from] RuntimeError),
}

impl DispatchError {
    /// The dispatch failure, if this is one
    pub fn failure(&self) -> Option<&DispatchFailure> {
        match self {
            DispatchError::Dispatch(failure) => Some(failure),
            DispatchError::Native(_) => None,
        }
    }

    pub fn is_dispatch_failure(&self) -> bool {
        self.failure().is_some()
    }
}

/// Result type alias for dispatcher operations
pub type DispatchResult<T> = Result<T, DispatchError>;
