//! minipy native runtime
//!
//! The layer the operator dispatcher delegates to. It includes:
//!
//! - `Value` and `Tag` for dynamic typing
//! - `RuntimeError` for primitive failures
//! - The `Native` primitive contract and its `StdNative` implementation
//! - Structural equality for containers
//! - `Output` sinks and the lazy `RangeIter`

pub mod convert;
pub mod equality;
pub mod error;
pub mod intrinsics;
pub mod io;
pub mod native;
pub mod range;
pub mod value;

/// Prelude module for convenient imports
///
/// # Example
/// ```
/// use minipy_runtime::prelude::*;
///
/// let rt = StdNative::capturing();
/// assert_eq!(rt.add_int(&Value::Int(1), &Value::Int(2)).unwrap(), Value::Int(3));
/// ```
pub mod prelude {
    pub use super::error::{RuntimeError, RuntimeResult};
    pub use super::io::Output;
    pub use super::native::{Native, StdNative};
    pub use super::range::RangeIter;
    pub use super::value::{Tag, Value};
}

pub use prelude::*;
