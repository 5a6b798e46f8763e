//! The `==` operator.
//!
//! `int == int` uses integer equality. Any other numeric pair is promoted
//! to float and equal when the three-way compare reports `Equal` (so NaN
//! is never equal). Same-tag container pairs compare structurally. Every
//! other pairing, including `int == str`, is a dispatch failure.

use std::cmp::Ordering;

use minipy_runtime::{Native, RuntimeResult, Tag, Value};

use super::Dispatcher;
use crate::error::DispatchResult;
use crate::op::Operator;

type EqPrim<N> = fn(&N, &Value, &Value) -> RuntimeResult<bool>;

impl<N: Native> Dispatcher<N> {
    /// `lhs == rhs`
    pub fn eq(&self, lhs: &Value, rhs: &Value) -> DispatchResult<bool> {
        let n = &self.native;
        match (n.tag(lhs), n.tag(rhs)) {
            (Tag::Int, Tag::Int) => Ok(n.eq_int(lhs, rhs)?),
            // the int-left branch used to test the left operand twice
            (Tag::Int, Tag::Float) if self.compat.legacy_numeric_eq => {
                Err(self.binary_failure(Operator::Eq, lhs, rhs))
            }
            (Tag::Int | Tag::Float, Tag::Int | Tag::Float) => self.float_eq(lhs, rhs),
            (Tag::Str, Tag::Str) => self.container_eq(lhs, rhs, N::eq_string),
            (Tag::Tuple, Tag::Tuple) => self.container_eq(lhs, rhs, N::eq_tuple),
            (Tag::List, Tag::List) => self.container_eq(lhs, rhs, N::eq_list),
            (Tag::Dict, Tag::Dict) => self.container_eq(lhs, rhs, N::eq_dict),
            (Tag::Set, Tag::Set) => self.container_eq(lhs, rhs, N::eq_set),
            _ => Err(self.binary_failure(Operator::Eq, lhs, rhs)),
        }
    }

    fn float_eq(&self, lhs: &Value, rhs: &Value) -> DispatchResult<bool> {
        let a = self.to_float(lhs)?;
        let b = self.to_float(rhs)?;
        Ok(self.native.cmp_float(&a, &b)? == Some(Ordering::Equal))
    }

    fn container_eq(&self, lhs: &Value, rhs: &Value, prim: EqPrim<N>) -> DispatchResult<bool> {
        if self.compat.legacy_container_eq {
            return Err(self.binary_failure(Operator::Eq, lhs, rhs));
        }
        Ok(prim(&self.native, lhs, rhs)?)
    }
}
