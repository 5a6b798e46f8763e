//! Tag-directed operator dispatch.
//!
//! Each entry point inspects the tags of its operands, applies the
//! promotion rule for its operator class and delegates to the matching
//! native primitive. A tag combination without a rule is a
//! [`DispatchFailure`]. Nothing is cached between calls.

mod arith;
mod bitwise;
mod equality;
mod print;
mod promote;
mod sequence;
mod unary;

use minipy_runtime::{Native, RuntimeResult, Value};

use crate::config::Compat;
use crate::error::{DispatchError, DispatchFailure, DispatchResult, Signature};
use crate::op::{BinOp, Operator, UnaryOp};

/// Binary value-producing native primitive
pub(crate) type BinPrim<N> = fn(&N, &Value, &Value) -> RuntimeResult<Value>;

/// Operator dispatcher over a native runtime
#[derive(Debug)]
pub struct Dispatcher<N: Native> {
    native: N,
    compat: Compat,
}

impl<N: Native> Dispatcher<N> {
    /// Dispatcher with the default (corrected) behavior
    pub fn new(native: N) -> Self {
        Self::with_compat(native, Compat::default())
    }

    pub fn with_compat(native: N, compat: Compat) -> Self {
        Self { native, compat }
    }

    /// The underlying native runtime
    pub fn native(&self) -> &N {
        &self.native
    }

    pub fn compat(&self) -> Compat {
        self.compat
    }

    pub fn into_native(self) -> N {
        self.native
    }

    /// Perform a binary operation
    pub fn binop(&self, op: BinOp, lhs: &Value, rhs: &Value) -> DispatchResult<Value> {
        match op {
            BinOp::Add => self.add(lhs, rhs),
            BinOp::Sub => self.sub(lhs, rhs),
            BinOp::Mul => self.mul(lhs, rhs),
            BinOp::Div => self.div(lhs, rhs),
            BinOp::Mod => self.rem(lhs, rhs),
            BinOp::LShift => self.lshift(lhs, rhs),
            BinOp::RShift => self.rshift(lhs, rhs),
            BinOp::BitOr => self.bitor(lhs, rhs),
            BinOp::BitAnd => self.bitand(lhs, rhs),
            BinOp::BitXor => self.bitxor(lhs, rhs),
        }
    }

    /// Perform a unary operation.
    ///
    /// `Not` has no boolean value to return here and yields `Int(1)` or
    /// `Int(0)`; call [`Dispatcher::not`] for a `bool`.
    pub fn unop(&self, op: UnaryOp, value: &Value) -> DispatchResult<Value> {
        match op {
            UnaryOp::Plus => self.plus(value),
            UnaryOp::Minus => self.minus(value),
            UnaryOp::Invert => self.invert(value),
            UnaryOp::Not => Ok(Value::Int(i64::from(self.not(value)))),
        }
    }

    #[cold]
    pub(crate) fn binary_failure(
        &self,
        op: impl Into<Operator>,
        lhs: &Value,
        rhs: &Value,
    ) -> DispatchError {
        let operands = Signature::Binary(self.native.tag(lhs), self.native.tag(rhs));
        self.failure(op.into(), operands)
    }

    #[cold]
    pub(crate) fn unary_failure(&self, op: impl Into<Operator>, value: &Value) -> DispatchError {
        let operands = Signature::Unary(self.native.tag(value));
        self.failure(op.into(), operands)
    }

    fn failure(&self, operator: Operator, operands: Signature) -> DispatchError {
        tracing::debug!(op = %operator, operands = %operands, "dispatch failure");
        DispatchFailure { operator, operands }.into()
    }
}
