//! The `print` operator.

use minipy_runtime::{Native, Tag, Value};

use super::Dispatcher;
use crate::error::DispatchResult;
use crate::op::Operator;

impl<N: Native> Dispatcher<N> {
    /// Write a number's representation, or a string as-is, to the output
    /// stream. One write per call.
    pub fn print(&self, value: &Value) -> DispatchResult<()> {
        let n = &self.native;
        match n.tag(value) {
            Tag::Int => n.write(&n.repr_int(value)?)?,
            Tag::Float => n.write(&n.repr_float(value)?)?,
            Tag::Str => n.write(value)?,
            _ => return Err(self.unary_failure(Operator::Print, value)),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minipy_runtime::StdNative;

    #[test]
    fn test_print_numbers_and_strings() {
        let d = Dispatcher::new(StdNative::capturing());
        d.print(&Value::Int(5)).unwrap();
        assert_eq!(d.native().output().contents(), "5");
        d.print(&Value::Float(1.5)).unwrap();
        d.print(&Value::Float(2.0)).unwrap();
        d.print(&Value::from("'x'")).unwrap();
        assert_eq!(d.native().output().contents(), "51.52.0'x'");
    }

    #[test]
    fn test_print_containers_fails_without_writing() {
        let d = Dispatcher::new(StdNative::capturing());
        let err = d
            .print(&Value::List(vec![Value::Int(1), Value::Int(2)]))
            .unwrap_err();
        assert!(err.is_dispatch_failure());
        assert_eq!(d.native().output().contents(), "");
    }
}
