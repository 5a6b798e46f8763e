//! Shared helpers for integration tests
// Consumed selectively by the integration test files.
#![allow(dead_code)]

use std::cell::RefCell;
use std::cmp::Ordering;

use minipy_ops::prelude::*;
use minipy_runtime::RuntimeResult;

/// Install a test-writer subscriber once; filter with `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn int(v: i64) -> Value {
    Value::Int(v)
}

pub fn float(v: f64) -> Value {
    Value::Float(v)
}

pub fn s(v: &str) -> Value {
    Value::from(v)
}

pub fn list(items: &[Value]) -> Value {
    Value::List(items.to_vec())
}

pub fn tuple(items: &[Value]) -> Value {
    Value::Tuple(items.to_vec())
}

/// One sample value per tag
pub fn one_of_each() -> Vec<Value> {
    vec![
        int(1),
        float(1.0),
        s("a"),
        tuple(&[int(1)]),
        list(&[int(1)]),
        Value::dict([(s("k"), int(1))]),
        Value::set([int(1)]),
    ]
}

/// Values the numeric-only operators must reject
pub fn non_numeric() -> Vec<Value> {
    one_of_each()
        .into_iter()
        .filter(|v| !v.tag().is_numeric())
        .collect()
}

/// A capturing runtime that records the name of every primitive called.
#[derive(Debug)]
pub struct RecordingNative {
    inner: StdNative,
    calls: RefCell<Vec<&'static str>>,
}

impl RecordingNative {
    pub fn new() -> Self {
        Self {
            inner: StdNative::capturing(),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.borrow().clone()
    }

    pub fn output(&self) -> String {
        self.inner.output().contents()
    }

    fn record(&self, name: &'static str) {
        self.calls.borrow_mut().push(name);
    }
}

impl Default for RecordingNative {
    fn default() -> Self {
        Self::new()
    }
}

macro_rules! delegate {
    ($($name:ident($($arg:ident),*) -> $ret:ty;)*) => {
        $(
            fn $name(&self, $($arg: &Value),*) -> $ret {
                self.record(stringify!($name));
                self.inner.$name($($arg),*)
            }
        )*
    };
}

impl Native for RecordingNative {
    delegate! {
        int_to_float(value) -> RuntimeResult<Value>;
        add_int(lhs, rhs) -> RuntimeResult<Value>;
        sub_int(lhs, rhs) -> RuntimeResult<Value>;
        mul_int(lhs, rhs) -> RuntimeResult<Value>;
        div_int(lhs, rhs) -> RuntimeResult<Value>;
        mod_int(lhs, rhs) -> RuntimeResult<Value>;
        lshift_int(lhs, rhs) -> RuntimeResult<Value>;
        rshift_int(lhs, rhs) -> RuntimeResult<Value>;
        or_int(lhs, rhs) -> RuntimeResult<Value>;
        and_int(lhs, rhs) -> RuntimeResult<Value>;
        xor_int(lhs, rhs) -> RuntimeResult<Value>;
        invert_int(value) -> RuntimeResult<Value>;
        eq_int(lhs, rhs) -> RuntimeResult<bool>;
        add_float(lhs, rhs) -> RuntimeResult<Value>;
        sub_float(lhs, rhs) -> RuntimeResult<Value>;
        mul_float(lhs, rhs) -> RuntimeResult<Value>;
        div_float(lhs, rhs) -> RuntimeResult<Value>;
        mod_float(lhs, rhs) -> RuntimeResult<Value>;
        cmp_float(lhs, rhs) -> RuntimeResult<Option<Ordering>>;
        add_string(lhs, rhs) -> RuntimeResult<Value>;
        mul_string(text, count) -> RuntimeResult<Value>;
        add_tuple(lhs, rhs) -> RuntimeResult<Value>;
        add_list(lhs, rhs) -> RuntimeResult<Value>;
        eq_string(lhs, rhs) -> RuntimeResult<bool>;
        eq_tuple(lhs, rhs) -> RuntimeResult<bool>;
        eq_list(lhs, rhs) -> RuntimeResult<bool>;
        eq_dict(lhs, rhs) -> RuntimeResult<bool>;
        eq_set(lhs, rhs) -> RuntimeResult<bool>;
        truthy(value) -> bool;
        repr_int(value) -> RuntimeResult<Value>;
        repr_float(value) -> RuntimeResult<Value>;
        write(text) -> RuntimeResult<()>;
        range(stop) -> RuntimeResult<RangeIter>;
    }
}
