//! `range(n)`.

use minipy_runtime::{Native, RangeIter, Value};

use super::Dispatcher;
use crate::error::DispatchResult;
use crate::op::Operator;

impl<N: Native> Dispatcher<N> {
    /// Lazy sequence for an int upper bound; boundaries are the native
    /// primitive's. Every call returns an independent iterator.
    pub fn range(&self, stop: &Value) -> DispatchResult<RangeIter> {
        if self.native.is_int(stop) {
            Ok(self.native.range(stop)?)
        } else {
            Err(self.unary_failure(Operator::Range, stop))
        }
    }
}
