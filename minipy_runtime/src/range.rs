//! Lazy integer sequence produced by the `range` primitive.

use std::iter::FusedIterator;

use crate::value::Value;

/// Iterator over `0, 1, ..., stop - 1`
///
/// Owns its cursor, so every `range` call starts a fresh sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeIter {
    next: i64,
    stop: i64,
}

impl RangeIter {
    /// Sequence from zero up to (excluding) `stop`; empty when `stop <= 0`.
    pub fn new(stop: i64) -> Self {
        Self { next: 0, stop }
    }

    /// Upper bound (exclusive)
    pub fn stop(&self) -> i64 {
        self.stop
    }

    fn remaining(&self) -> usize {
        usize::try_from(self.stop.saturating_sub(self.next)).unwrap_or(0)
    }
}

impl Iterator for RangeIter {
    type Item = Value;

    fn next(&mut self) -> Option<Value> {
        if self.next >= self.stop {
            return None;
        }
        let current = self.next;
        self.next += 1;
        Some(Value::Int(current))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl ExactSizeIterator for RangeIter {}

impl FusedIterator for RangeIter {}
