//! Shift and bitwise operators, `~` and logical `not`.
//!
//! Int operands only; floats are never promoted here.

use minipy_runtime::{Native, Value};

use super::{BinPrim, Dispatcher};
use crate::error::DispatchResult;
use crate::op::{BinOp, UnaryOp};

impl<N: Native> Dispatcher<N> {
    fn int_only(
        &self,
        op: BinOp,
        lhs: &Value,
        rhs: &Value,
        prim: BinPrim<N>,
    ) -> DispatchResult<Value> {
        if self.native.is_int(lhs) && self.native.is_int(rhs) {
            Ok(prim(&self.native, lhs, rhs)?)
        } else {
            Err(self.binary_failure(op, lhs, rhs))
        }
    }

    /// `lhs << rhs`
    pub fn lshift(&self, lhs: &Value, rhs: &Value) -> DispatchResult<Value> {
        self.int_only(BinOp::LShift, lhs, rhs, N::lshift_int)
    }

    /// `lhs >> rhs`
    pub fn rshift(&self, lhs: &Value, rhs: &Value) -> DispatchResult<Value> {
        self.int_only(BinOp::RShift, lhs, rhs, N::rshift_int)
    }

    /// `lhs | rhs`
    pub fn bitor(&self, lhs: &Value, rhs: &Value) -> DispatchResult<Value> {
        self.int_only(BinOp::BitOr, lhs, rhs, N::or_int)
    }

    /// `lhs & rhs`
    pub fn bitand(&self, lhs: &Value, rhs: &Value) -> DispatchResult<Value> {
        self.int_only(BinOp::BitAnd, lhs, rhs, N::and_int)
    }

    /// `lhs ^ rhs`
    pub fn bitxor(&self, lhs: &Value, rhs: &Value) -> DispatchResult<Value> {
        self.int_only(BinOp::BitXor, lhs, rhs, N::xor_int)
    }

    /// `~value`
    pub fn invert(&self, value: &Value) -> DispatchResult<Value> {
        if self.native.is_int(value) {
            Ok(self.native.invert_int(value)?)
        } else {
            Err(self.unary_failure(UnaryOp::Invert, value))
        }
    }

    /// `not value`. Accepts every tag.
    pub fn not(&self, value: &Value) -> bool {
        !self.native.truthy(value)
    }
}
