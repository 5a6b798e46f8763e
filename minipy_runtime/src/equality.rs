//! Structural equality for container values
//!
//! Numbers compare across `int`/`float`; any other pair of different
//! tags is unequal. Sequences compare in order, dicts and sets ignore
//! insertion order.

use crate::intrinsics::i64_to_f64;
use crate::value::Value;

/// Numeric-aware structural equality.
pub fn values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Int(x), Value::Int(y)) => x == y,
        (Value::Float(x), Value::Float(y)) => x == y,
        (Value::Int(x), Value::Float(y)) | (Value::Float(y), Value::Int(x)) => i64_to_f64(*x) == *y,
        (Value::Str(x), Value::Str(y)) => x == y,
        (Value::Tuple(x), Value::Tuple(y)) | (Value::List(x), Value::List(y)) => {
            sequences_equal(x, y)
        }
        (Value::Dict(x), Value::Dict(y)) => dicts_equal(x, y),
        (Value::Set(x), Value::Set(y)) => sets_equal(x, y),
        _ => false,
    }
}

/// Element-wise, in order.
pub fn sequences_equal(a: &[Value], b: &[Value]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| values_equal(x, y))
}

/// Same keys, equal value per key. A repeated key resolves to its last
/// entry.
pub fn dicts_equal(a: &[(Value, Value)], b: &[(Value, Value)]) -> bool {
    dict_covers(a, b) && dict_covers(b, a)
}

fn dict_lookup<'a>(entries: &'a [(Value, Value)], key: &Value) -> Option<&'a Value> {
    entries
        .iter()
        .rev()
        .find(|(k, _)| values_equal(k, key))
        .map(|(_, v)| v)
}

fn dict_covers(a: &[(Value, Value)], b: &[(Value, Value)]) -> bool {
    a.iter().all(|(key, _)| {
        match (dict_lookup(a, key), dict_lookup(b, key)) {
            (Some(va), Some(vb)) => values_equal(va, vb),
            _ => false,
        }
    })
}

/// Same members, ignoring order and repeats.
pub fn sets_equal(a: &[Value], b: &[Value]) -> bool {
    set_covers(a, b) && set_covers(b, a)
}

fn set_covers(a: &[Value], b: &[Value]) -> bool {
    a.iter().all(|x| b.iter().any(|y| values_equal(x, y)))
}
