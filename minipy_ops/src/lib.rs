//! minipy operator dispatcher
//!
//! The operator-semantics layer of the runtime. Given already-evaluated
//! values, each entry point picks the native primitive for the operand
//! tags, promoting `int` to `float` where the operator allows it:
//!
//! - Arithmetic: `add`, `sub`, `mul`, `div`, `rem`
//! - Shifts and bitwise: `lshift`, `rshift`, `bitor`, `bitand`, `bitxor`, `invert`
//! - Unary: `plus`, `minus`, `not`
//! - Equality: `eq`
//! - Output and sequences: `print`, `range`
//!
//! Unsupported tag combinations return a [`DispatchFailure`]; nothing
//! panics or exits.

pub mod config;
pub mod dispatch;
pub mod error;
pub mod op;

/// Prelude module for convenient imports
///
/// # Example
/// ```
/// use minipy_ops::prelude::*;
///
/// let ops = Dispatcher::new(StdNative::capturing());
/// let sum = ops.add(&Value::Int(1), &Value::Float(2.5)).unwrap();
/// assert_eq!(sum, Value::Float(3.5));
/// ```
pub mod prelude {
    pub use super::config::{Compat, ConfigError};
    pub use super::dispatch::Dispatcher;
    pub use super::error::{DispatchError, DispatchFailure, DispatchResult, Signature};
    pub use super::op::{BinOp, Operator, UnaryOp};
    pub use minipy_runtime::{Native, RangeIter, StdNative, Tag, Value};
}

pub use prelude::*;
