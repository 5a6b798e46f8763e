//! Runtime error types for native primitives
//!
//! Primitives assume their caller already checked operand tags, but they
//! still verify them and report a mismatch instead of misbehaving.

use thiserror::Error;

/// Native runtime error type
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// Operand of the wrong tag reached a primitive
    #[error("TypeError: {0}")]
    TypeError(String),

    /// Integer result or shift count out of range
    #[error("OverflowError: {0}")]
    OverflowError(String),

    /// Integer division or modulo by zero
    #[error("ZeroDivisionError: integer division or modulo by zero")]
    DivisionByZero,

    /// Output stream failure
    #[error("IOError: {0}")]
    Io(#[from] std::io::Error),
}

impl RuntimeError {
    /// Create a type error
    pub fn type_error<S: Into<String>>(msg: S) -> Self {
        RuntimeError::TypeError(msg.into())
    }

    /// Create an overflow error
    pub fn overflow_error<S: Into<String>>(msg: S) -> Self {
        RuntimeError::OverflowError(msg.into())
    }
}

/// Result type alias for native primitives
pub type RuntimeResult<T> = Result<T, RuntimeError>;
