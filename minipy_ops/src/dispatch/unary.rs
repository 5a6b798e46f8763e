//! Unary sign operators.

use minipy_runtime::{Native, Tag, Value};

use super::Dispatcher;
use crate::error::DispatchResult;
use crate::op::UnaryOp;

impl<N: Native> Dispatcher<N> {
    /// `+value`: identity on numbers.
    pub fn plus(&self, value: &Value) -> DispatchResult<Value> {
        match self.native.tag(value) {
            Tag::Int | Tag::Float => Ok(value.clone()),
            _ => Err(self.unary_failure(UnaryOp::Plus, value)),
        }
    }

    /// `-value`, defined as `value * -1` through [`Dispatcher::mul`].
    pub fn minus(&self, value: &Value) -> DispatchResult<Value> {
        match self.native.tag(value) {
            Tag::Int | Tag::Float => self.mul(value, &Value::Int(-1)),
            _ => Err(self.unary_failure(UnaryOp::Minus, value)),
        }
    }
}
