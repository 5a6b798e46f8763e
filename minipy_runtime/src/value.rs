//! Dynamic Value type for the native runtime
//!
//! This module provides the `Value` enum handed to the operator
//! dispatcher and the `Tag` used to select a primitive for it.

use std::fmt;

use crate::equality::values_equal;
use crate::intrinsics::format_float;

/// Runtime value
///
/// Exactly one variant is live at a time; the dispatcher only ever
/// observes it through [`Value::tag`] and the `Native` predicates.
#[derive(Debug, Clone)]
pub enum Value {
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit floating point
    Float(f64),
    /// String
    Str(String),
    /// Tuple
    Tuple(Vec<Value>),
    /// List
    List(Vec<Value>),
    /// Dictionary as insertion-ordered key/value pairs
    Dict(Vec<(Value, Value)>),
    /// Set as insertion-ordered unique members
    Set(Vec<Value>),
}

/// Discriminant of a [`Value`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Int,
    Float,
    Str,
    Tuple,
    List,
    Dict,
    Set,
}

impl Tag {
    /// Every tag, in declaration order
    pub const ALL: [Tag; 7] = [
        Tag::Int,
        Tag::Float,
        Tag::Str,
        Tag::Tuple,
        Tag::List,
        Tag::Dict,
        Tag::Set,
    ];

    /// Get the user-facing type name of this tag
    pub fn type_name(&self) -> &'static str {
        match self {
            Tag::Int => "int",
            Tag::Float => "float",
            Tag::Str => "str",
            Tag::Tuple => "tuple",
            Tag::List => "list",
            Tag::Dict => "dict",
            Tag::Set => "set",
        }
    }

    /// Check if this is a numeric tag
    pub fn is_numeric(&self) -> bool {
        matches!(self, Tag::Int | Tag::Float)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

impl Value {
    /// Get the tag of this value
    pub fn tag(&self) -> Tag {
        match self {
            Value::Int(_) => Tag::Int,
            Value::Float(_) => Tag::Float,
            Value::Str(_) => Tag::Str,
            Value::Tuple(_) => Tag::Tuple,
            Value::List(_) => Tag::List,
            Value::Dict(_) => Tag::Dict,
            Value::Set(_) => Tag::Set,
        }
    }

    /// Get the user-facing type name of this value
    pub fn type_name(&self) -> &'static str {
        self.tag().type_name()
    }

    /// Build a dict; a repeated key replaces the earlier value in place.
    pub fn dict<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (Value, Value)>,
    {
        let mut entries: Vec<(Value, Value)> = Vec::new();
        for (key, value) in pairs {
            match entries.iter_mut().find(|(k, _)| values_equal(k, &key)) {
                Some(slot) => slot.1 = value,
                None => entries.push((key, value)),
            }
        }
        Value::Dict(entries)
    }

    /// Build a set, dropping members equal to one already present.
    pub fn set<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        let mut members: Vec<Value> = Vec::new();
        for item in items {
            if !members.iter().any(|m| values_equal(m, &item)) {
                members.push(item);
            }
        }
        Value::Set(members)
    }

    /// Try to extract as i64
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to extract as f64 (no promotion)
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to extract as string reference
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Python truthiness: zero and empty values are falsy
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Int(v) => *v != 0,
            Value::Float(v) => *v != 0.0,
            Value::Str(s) => !s.is_empty(),
            Value::Tuple(items) | Value::List(items) | Value::Set(items) => !items.is_empty(),
            Value::Dict(entries) => !entries.is_empty(),
        }
    }
}

// ========== From implementations ==========

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

// ========== Display implementation ==========

fn write_seq(f: &mut fmt::Formatter<'_>, items: &[Value]) -> fmt::Result {
    for (i, v) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", v)?;
    }
    Ok(())
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{}", v),
            Value::Float(v) => f.write_str(&format_float(*v)),
            Value::Str(s) => write!(f, "'{}'", s.replace('\\', "\\\\").replace('\'', "\\'")),
            Value::Tuple(items) => {
                write!(f, "(")?;
                write_seq(f, items)?;
                if items.len() == 1 {
                    write!(f, ",")?;
                }
                write!(f, ")")
            }
            Value::List(items) => {
                write!(f, "[")?;
                write_seq(f, items)?;
                write!(f, "]")
            }
            Value::Dict(entries) => {
                write!(f, "{{")?;
                for (i, (k, v)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", k, v)?;
                }
                write!(f, "}}")
            }
            Value::Set(items) if items.is_empty() => write!(f, "set()"),
            Value::Set(items) => {
                write!(f, "{{")?;
                write_seq(f, items)?;
                write!(f, "}}")
            }
        }
    }
}

// ========== PartialEq implementation ==========

/// Strict equality: same tag and same contents, `Int(1) != Float(1.0)`.
///
/// Language-level `==` lives in the dispatcher and the `eq_*` primitives.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Tuple(a), Value::Tuple(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Dict(a), Value::Dict(b)) => a == b,
            (Value::Set(a), Value::Set(b)) => a == b,
            _ => false,
        }
    }
}
