//! Numeric promotion.
//!
//! `int` with `float` converts the int operand through `int_to_float`;
//! same-kind pairs pass through untouched. Any non-numeric operand means
//! there is no numeric rule.

use std::borrow::Cow;

use minipy_runtime::{Native, RuntimeResult, Tag, Value};

use super::{BinPrim, Dispatcher};
use crate::error::DispatchResult;

/// Numeric operands after promotion
pub(crate) enum Promoted<'a> {
    Int(&'a Value, &'a Value),
    Float(Cow<'a, Value>, Cow<'a, Value>),
}

impl<N: Native> Dispatcher<N> {
    /// Float view of a numeric operand; ints are converted.
    pub(crate) fn to_float<'a>(&self, value: &'a Value) -> RuntimeResult<Cow<'a, Value>> {
        if self.native.is_int(value) {
            tracing::trace!("promoting int operand to float");
            Ok(Cow::Owned(self.native.int_to_float(value)?))
        } else {
            Ok(Cow::Borrowed(value))
        }
    }

    /// Apply the promotion rule. `None` when either operand is not numeric.
    pub(crate) fn promote<'a>(
        &self,
        lhs: &'a Value,
        rhs: &'a Value,
    ) -> RuntimeResult<Option<Promoted<'a>>> {
        let promoted = match (self.native.tag(lhs), self.native.tag(rhs)) {
            (Tag::Int, Tag::Int) => Promoted::Int(lhs, rhs),
            (Tag::Int | Tag::Float, Tag::Int | Tag::Float) => {
                Promoted::Float(self.to_float(lhs)?, self.to_float(rhs)?)
            }
            _ => return Ok(None),
        };
        Ok(Some(promoted))
    }

    /// Promote, then run the int or float primitive. `None` when the
    /// operands are not both numeric, leaving other overloads to the caller.
    pub(crate) fn numeric(
        &self,
        lhs: &Value,
        rhs: &Value,
        int_prim: BinPrim<N>,
        float_prim: BinPrim<N>,
    ) -> DispatchResult<Option<Value>> {
        let value = match self.promote(lhs, rhs)? {
            Some(Promoted::Int(a, b)) => int_prim(&self.native, a, b)?,
            Some(Promoted::Float(a, b)) => float_prim(&self.native, &a, &b)?,
            None => return Ok(None),
        };
        Ok(Some(value))
    }
}
