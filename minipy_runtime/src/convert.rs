//! Operand extraction for native primitives
//!
//! Each primitive names itself so a mis-tagged operand reports where it
//! was rejected.

use crate::error::{RuntimeError, RuntimeResult};
use crate::value::{Tag, Value};

fn mismatch(primitive: &str, expected: Tag, value: &Value) -> RuntimeError {
    RuntimeError::type_error(format!(
        "{} expected {}, got {}",
        primitive,
        expected,
        value.type_name()
    ))
}

/// Extract an int operand
pub fn to_i64(primitive: &str, value: &Value) -> RuntimeResult<i64> {
    match value {
        Value::Int(v) => Ok(*v),
        _ => Err(mismatch(primitive, Tag::Int, value)),
    }
}

/// Extract a float operand (no promotion)
pub fn to_f64(primitive: &str, value: &Value) -> RuntimeResult<f64> {
    match value {
        Value::Float(v) => Ok(*v),
        _ => Err(mismatch(primitive, Tag::Float, value)),
    }
}

/// Extract a string operand
pub fn to_str<'a>(primitive: &str, value: &'a Value) -> RuntimeResult<&'a str> {
    match value {
        Value::Str(s) => Ok(s),
        _ => Err(mismatch(primitive, Tag::Str, value)),
    }
}

/// Extract tuple elements
pub fn to_tuple<'a>(primitive: &str, value: &'a Value) -> RuntimeResult<&'a [Value]> {
    match value {
        Value::Tuple(items) => Ok(items),
        _ => Err(mismatch(primitive, Tag::Tuple, value)),
    }
}

/// Extract list elements
pub fn to_list<'a>(primitive: &str, value: &'a Value) -> RuntimeResult<&'a [Value]> {
    match value {
        Value::List(items) => Ok(items),
        _ => Err(mismatch(primitive, Tag::List, value)),
    }
}

/// Extract dict entries
pub fn to_dict<'a>(primitive: &str, value: &'a Value) -> RuntimeResult<&'a [(Value, Value)]> {
    match value {
        Value::Dict(entries) => Ok(entries),
        _ => Err(mismatch(primitive, Tag::Dict, value)),
    }
}

/// Extract set members
pub fn to_set<'a>(primitive: &str, value: &'a Value) -> RuntimeResult<&'a [Value]> {
    match value {
        Value::Set(items) => Ok(items),
        _ => Err(mismatch(primitive, Tag::Set, value)),
    }
}
