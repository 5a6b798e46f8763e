//! The native primitive contract and its standard implementation.
//!
//! The operator dispatcher only selects and promotes; every actual
//! computation, comparison, rendering and write goes through [`Native`].

use std::cmp::Ordering;

use crate::convert::{to_dict, to_f64, to_i64, to_list, to_set, to_str, to_tuple};
use crate::equality::{dicts_equal, sequences_equal, sets_equal};
use crate::error::RuntimeResult;
use crate::intrinsics;
use crate::io::Output;
use crate::range::RangeIter;
use crate::value::{Tag, Value};

/// Primitives the dispatcher calls into.
///
/// Tag-specific primitives assume the caller checked operand tags and
/// report a `TypeError` if it did not.
pub trait Native {
    /// Discriminant of a value
    fn tag(&self, value: &Value) -> Tag {
        value.tag()
    }

    fn is_int(&self, value: &Value) -> bool {
        self.tag(value) == Tag::Int
    }

    fn is_float(&self, value: &Value) -> bool {
        self.tag(value) == Tag::Float
    }

    fn is_string(&self, value: &Value) -> bool {
        self.tag(value) == Tag::Str
    }

    fn is_tuple(&self, value: &Value) -> bool {
        self.tag(value) == Tag::Tuple
    }

    fn is_list(&self, value: &Value) -> bool {
        self.tag(value) == Tag::List
    }

    fn is_dict(&self, value: &Value) -> bool {
        self.tag(value) == Tag::Dict
    }

    fn is_set(&self, value: &Value) -> bool {
        self.tag(value) == Tag::Set
    }

    /// Convert an int to the equivalent float
    fn int_to_float(&self, value: &Value) -> RuntimeResult<Value>;

    // int
    fn add_int(&self, lhs: &Value, rhs: &Value) -> RuntimeResult<Value>;
    fn sub_int(&self, lhs: &Value, rhs: &Value) -> RuntimeResult<Value>;
    fn mul_int(&self, lhs: &Value, rhs: &Value) -> RuntimeResult<Value>;
    fn div_int(&self, lhs: &Value, rhs: &Value) -> RuntimeResult<Value>;
    fn mod_int(&self, lhs: &Value, rhs: &Value) -> RuntimeResult<Value>;
    fn lshift_int(&self, lhs: &Value, rhs: &Value) -> RuntimeResult<Value>;
    fn rshift_int(&self, lhs: &Value, rhs: &Value) -> RuntimeResult<Value>;
    fn or_int(&self, lhs: &Value, rhs: &Value) -> RuntimeResult<Value>;
    fn and_int(&self, lhs: &Value, rhs: &Value) -> RuntimeResult<Value>;
    fn xor_int(&self, lhs: &Value, rhs: &Value) -> RuntimeResult<Value>;
    fn invert_int(&self, value: &Value) -> RuntimeResult<Value>;
    fn eq_int(&self, lhs: &Value, rhs: &Value) -> RuntimeResult<bool>;

    // float
    fn add_float(&self, lhs: &Value, rhs: &Value) -> RuntimeResult<Value>;
    fn sub_float(&self, lhs: &Value, rhs: &Value) -> RuntimeResult<Value>;
    fn mul_float(&self, lhs: &Value, rhs: &Value) -> RuntimeResult<Value>;
    fn div_float(&self, lhs: &Value, rhs: &Value) -> RuntimeResult<Value>;
    fn mod_float(&self, lhs: &Value, rhs: &Value) -> RuntimeResult<Value>;
    /// Three-way compare; `None` when the operands are unordered (NaN)
    fn cmp_float(&self, lhs: &Value, rhs: &Value) -> RuntimeResult<Option<Ordering>>;

    // containers
    fn add_string(&self, lhs: &Value, rhs: &Value) -> RuntimeResult<Value>;
    /// `str * int` repetition
    fn mul_string(&self, text: &Value, count: &Value) -> RuntimeResult<Value>;
    fn add_tuple(&self, lhs: &Value, rhs: &Value) -> RuntimeResult<Value>;
    fn add_list(&self, lhs: &Value, rhs: &Value) -> RuntimeResult<Value>;
    fn eq_string(&self, lhs: &Value, rhs: &Value) -> RuntimeResult<bool>;
    fn eq_tuple(&self, lhs: &Value, rhs: &Value) -> RuntimeResult<bool>;
    fn eq_list(&self, lhs: &Value, rhs: &Value) -> RuntimeResult<bool>;
    fn eq_dict(&self, lhs: &Value, rhs: &Value) -> RuntimeResult<bool>;
    fn eq_set(&self, lhs: &Value, rhs: &Value) -> RuntimeResult<bool>;

    /// Truthiness of any value
    fn truthy(&self, value: &Value) -> bool;

    // representation and output
    /// Decimal rendering of an int, as a string value
    fn repr_int(&self, value: &Value) -> RuntimeResult<Value>;
    /// Rendering of a float, as a string value
    fn repr_float(&self, value: &Value) -> RuntimeResult<Value>;
    /// Write a string value to the output stream, verbatim
    fn write(&self, text: &Value) -> RuntimeResult<()>;

    /// Lazy sequence `0..stop`
    fn range(&self, stop: &Value) -> RuntimeResult<RangeIter>;
}

/// Standard native runtime backed by [`Output`]
#[derive(Debug, Default)]
pub struct StdNative {
    output: Output,
}

impl StdNative {
    /// Runtime writing to stdout
    pub fn new() -> Self {
        Self::default()
    }

    /// Runtime capturing writes in memory
    pub fn capturing() -> Self {
        Self {
            output: Output::buffer(),
        }
    }

    /// Runtime writing to the given sink
    pub fn with_output(output: Output) -> Self {
        Self { output }
    }

    /// The output sink
    pub fn output(&self) -> &Output {
        &self.output
    }
}

fn int_binop(
    name: &str,
    lhs: &Value,
    rhs: &Value,
    f: impl FnOnce(i64, i64) -> RuntimeResult<i64>,
) -> RuntimeResult<Value> {
    let a = to_i64(name, lhs)?;
    let b = to_i64(name, rhs)?;
    f(a, b).map(Value::Int)
}

fn float_binop(
    name: &str,
    lhs: &Value,
    rhs: &Value,
    f: impl FnOnce(f64, f64) -> f64,
) -> RuntimeResult<Value> {
    let a = to_f64(name, lhs)?;
    let b = to_f64(name, rhs)?;
    Ok(Value::Float(f(a, b)))
}

fn concat(a: &[Value], b: &[Value]) -> Vec<Value> {
    a.iter().chain(b).cloned().collect()
}

impl Native for StdNative {
    fn int_to_float(&self, value: &Value) -> RuntimeResult<Value> {
        to_i64("int_to_float", value).map(|i| Value::Float(intrinsics::i64_to_f64(i)))
    }

    fn add_int(&self, lhs: &Value, rhs: &Value) -> RuntimeResult<Value> {
        int_binop("add_int", lhs, rhs, intrinsics::add_i64)
    }

    fn sub_int(&self, lhs: &Value, rhs: &Value) -> RuntimeResult<Value> {
        int_binop("sub_int", lhs, rhs, intrinsics::sub_i64)
    }

    fn mul_int(&self, lhs: &Value, rhs: &Value) -> RuntimeResult<Value> {
        int_binop("mul_int", lhs, rhs, intrinsics::mul_i64)
    }

    fn div_int(&self, lhs: &Value, rhs: &Value) -> RuntimeResult<Value> {
        int_binop("div_int", lhs, rhs, intrinsics::div_i64)
    }

    fn mod_int(&self, lhs: &Value, rhs: &Value) -> RuntimeResult<Value> {
        int_binop("mod_int", lhs, rhs, intrinsics::rem_i64)
    }

    fn lshift_int(&self, lhs: &Value, rhs: &Value) -> RuntimeResult<Value> {
        int_binop("lshift_int", lhs, rhs, intrinsics::shl_i64)
    }

    fn rshift_int(&self, lhs: &Value, rhs: &Value) -> RuntimeResult<Value> {
        int_binop("rshift_int", lhs, rhs, intrinsics::shr_i64)
    }

    fn or_int(&self, lhs: &Value, rhs: &Value) -> RuntimeResult<Value> {
        int_binop("or_int", lhs, rhs, |a, b| Ok(a | b))
    }

    fn and_int(&self, lhs: &Value, rhs: &Value) -> RuntimeResult<Value> {
        int_binop("and_int", lhs, rhs, |a, b| Ok(a & b))
    }

    fn xor_int(&self, lhs: &Value, rhs: &Value) -> RuntimeResult<Value> {
        int_binop("xor_int", lhs, rhs, |a, b| Ok(a ^ b))
    }

    fn invert_int(&self, value: &Value) -> RuntimeResult<Value> {
        to_i64("invert_int", value).map(|i| Value::Int(intrinsics::invert_i64(i)))
    }

    fn eq_int(&self, lhs: &Value, rhs: &Value) -> RuntimeResult<bool> {
        Ok(to_i64("eq_int", lhs)? == to_i64("eq_int", rhs)?)
    }

    fn add_float(&self, lhs: &Value, rhs: &Value) -> RuntimeResult<Value> {
        float_binop("add_float", lhs, rhs, |a, b| a + b)
    }

    fn sub_float(&self, lhs: &Value, rhs: &Value) -> RuntimeResult<Value> {
        float_binop("sub_float", lhs, rhs, |a, b| a - b)
    }

    fn mul_float(&self, lhs: &Value, rhs: &Value) -> RuntimeResult<Value> {
        float_binop("mul_float", lhs, rhs, |a, b| a * b)
    }

    fn div_float(&self, lhs: &Value, rhs: &Value) -> RuntimeResult<Value> {
        float_binop("div_float", lhs, rhs, |a, b| a / b)
    }

    fn mod_float(&self, lhs: &Value, rhs: &Value) -> RuntimeResult<Value> {
        float_binop("mod_float", lhs, rhs, intrinsics::rem_f64)
    }

    fn cmp_float(&self, lhs: &Value, rhs: &Value) -> RuntimeResult<Option<Ordering>> {
        let a = to_f64("cmp_float", lhs)?;
        let b = to_f64("cmp_float", rhs)?;
        Ok(intrinsics::cmp_f64(a, b))
    }

    fn add_string(&self, lhs: &Value, rhs: &Value) -> RuntimeResult<Value> {
        let a = to_str("add_string", lhs)?;
        let b = to_str("add_string", rhs)?;
        Ok(Value::Str(format!("{}{}", a, b)))
    }

    fn mul_string(&self, text: &Value, count: &Value) -> RuntimeResult<Value> {
        let s = to_str("mul_string", text)?;
        let n = to_i64("mul_string", count)?;
        intrinsics::repeat_str(s, n).map(Value::Str)
    }

    fn add_tuple(&self, lhs: &Value, rhs: &Value) -> RuntimeResult<Value> {
        let a = to_tuple("add_tuple", lhs)?;
        let b = to_tuple("add_tuple", rhs)?;
        Ok(Value::Tuple(concat(a, b)))
    }

    fn add_list(&self, lhs: &Value, rhs: &Value) -> RuntimeResult<Value> {
        let a = to_list("add_list", lhs)?;
        let b = to_list("add_list", rhs)?;
        Ok(Value::List(concat(a, b)))
    }

    fn eq_string(&self, lhs: &Value, rhs: &Value) -> RuntimeResult<bool> {
        Ok(to_str("eq_string", lhs)? == to_str("eq_string", rhs)?)
    }

    fn eq_tuple(&self, lhs: &Value, rhs: &Value) -> RuntimeResult<bool> {
        Ok(sequences_equal(
            to_tuple("eq_tuple", lhs)?,
            to_tuple("eq_tuple", rhs)?,
        ))
    }

    fn eq_list(&self, lhs: &Value, rhs: &Value) -> RuntimeResult<bool> {
        Ok(sequences_equal(
            to_list("eq_list", lhs)?,
            to_list("eq_list", rhs)?,
        ))
    }

    fn eq_dict(&self, lhs: &Value, rhs: &Value) -> RuntimeResult<bool> {
        Ok(dicts_equal(to_dict("eq_dict", lhs)?, to_dict("eq_dict", rhs)?))
    }

    fn eq_set(&self, lhs: &Value, rhs: &Value) -> RuntimeResult<bool> {
        Ok(sets_equal(to_set("eq_set", lhs)?, to_set("eq_set", rhs)?))
    }

    fn truthy(&self, value: &Value) -> bool {
        value.is_truthy()
    }

    fn repr_int(&self, value: &Value) -> RuntimeResult<Value> {
        to_i64("repr_int", value).map(|i| Value::Str(i.to_string()))
    }

    fn repr_float(&self, value: &Value) -> RuntimeResult<Value> {
        to_f64("repr_float", value).map(|f| Value::Str(intrinsics::format_float(f)))
    }

    fn write(&self, text: &Value) -> RuntimeResult<()> {
        self.output.write(to_str("write", text)?)
    }

    fn range(&self, stop: &Value) -> RuntimeResult<RangeIter> {
        to_i64("range", stop).map(RangeIter::new)
    }
}
