//! Arithmetic operators: `+ - * / %`.

use minipy_runtime::{Native, Tag, Value};

use super::Dispatcher;
use crate::error::DispatchResult;
use crate::op::BinOp;

impl<N: Native> Dispatcher<N> {
    /// `lhs + rhs`: numeric, or concatenation of two strs, tuples or lists.
    pub fn add(&self, lhs: &Value, rhs: &Value) -> DispatchResult<Value> {
        if let Some(v) = self.numeric(lhs, rhs, N::add_int, N::add_float)? {
            return Ok(v);
        }
        let n = &self.native;
        match (n.tag(lhs), n.tag(rhs)) {
            (Tag::Str, Tag::Str) => Ok(n.add_string(lhs, rhs)?),
            (Tag::Tuple, Tag::Tuple) => Ok(n.add_tuple(lhs, rhs)?),
            (Tag::List, Tag::List) => Ok(n.add_list(lhs, rhs)?),
            _ => Err(self.binary_failure(BinOp::Add, lhs, rhs)),
        }
    }

    /// `lhs - rhs`
    pub fn sub(&self, lhs: &Value, rhs: &Value) -> DispatchResult<Value> {
        self.numeric(lhs, rhs, N::sub_int, N::sub_float)?
            .ok_or_else(|| self.binary_failure(BinOp::Sub, lhs, rhs))
    }

    /// `lhs * rhs`: numeric, or `str * int` repetition.
    ///
    /// List repetition is not exposed: a list on the left fails whatever
    /// the right operand is.
    pub fn mul(&self, lhs: &Value, rhs: &Value) -> DispatchResult<Value> {
        if let Some(v) = self.numeric(lhs, rhs, N::mul_int, N::mul_float)? {
            return Ok(v);
        }
        match (self.native.tag(lhs), self.native.tag(rhs)) {
            (Tag::Str, Tag::Int) => self.repeat_string(lhs, rhs),
            _ => Err(self.binary_failure(BinOp::Mul, lhs, rhs)),
        }
    }

    /// `lhs / rhs`
    pub fn div(&self, lhs: &Value, rhs: &Value) -> DispatchResult<Value> {
        self.numeric(lhs, rhs, N::div_int, N::div_float)?
            .ok_or_else(|| self.binary_failure(BinOp::Div, lhs, rhs))
    }

    /// `lhs % rhs`. No string formatting overload.
    pub fn rem(&self, lhs: &Value, rhs: &Value) -> DispatchResult<Value> {
        self.numeric(lhs, rhs, N::mod_int, N::mod_float)?
            .ok_or_else(|| self.binary_failure(BinOp::Mod, lhs, rhs))
    }

    /// `s` repeated `count` times; a count of zero or less yields `""`.
    fn repeat_string(&self, s: &Value, count: &Value) -> DispatchResult<Value> {
        if self.compat.legacy_repeat {
            tracing::trace!("legacy repeat discards the accumulator");
            return Ok(Value::Str(String::new()));
        }
        Ok(self.native.mul_string(s, count)?)
    }
}
