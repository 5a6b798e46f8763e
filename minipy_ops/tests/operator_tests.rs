//! End-to-end operator behavior through the public dispatcher API.

mod common;

use common::*;
use minipy_ops::prelude::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn ops() -> Dispatcher<StdNative> {
    init_tracing();
    Dispatcher::new(StdNative::capturing())
}

// ==================== Numeric promotion ====================

proptest! {
    #[test]
    fn prop_int_add_matches_native_sum(a in -1_000_000_000i64..1_000_000_000, b in -1_000_000_000i64..1_000_000_000) {
        let d = Dispatcher::new(StdNative::new());
        prop_assert_eq!(d.add(&int(a), &int(b)).unwrap(), int(a + b));
    }

    #[test]
    fn prop_mixed_add_promotes_either_side(a in -1_000_000i64..1_000_000, f in -1.0e6f64..1.0e6) {
        let d = Dispatcher::new(StdNative::new());
        prop_assert_eq!(d.add(&int(a), &float(f)).unwrap(), float(a as f64 + f));
        prop_assert_eq!(d.add(&float(f), &int(a)).unwrap(), float(f + a as f64));
    }

    #[test]
    fn prop_int_eq_matches_native(a in any::<i64>(), b in any::<i64>()) {
        let d = Dispatcher::new(StdNative::new());
        prop_assert_eq!(d.eq(&int(a), &int(b)).unwrap(), a == b);
    }

    #[test]
    fn prop_repeat_length(text in "[a-z]{0,4}", n in 0i64..20) {
        let d = Dispatcher::new(StdNative::new());
        let out = d.mul(&s(&text), &int(n)).unwrap();
        let out = out.as_str().unwrap().to_string();
        prop_assert_eq!(out.len(), text.len() * n as usize);
        prop_assert_eq!(out, text.repeat(n as usize));
    }

    #[test]
    fn prop_operators_are_idempotent(a in -1000i64..1000, b in 1i64..1000) {
        let d = Dispatcher::new(StdNative::new());
        for op in BinOp::ALL {
            let rhs = if matches!(op, BinOp::LShift | BinOp::RShift) { int(b % 63) } else { int(b) };
            let first = d.binop(op, &int(a), &rhs).unwrap();
            let second = d.binop(op, &int(a), &rhs).unwrap();
            prop_assert_eq!(first, second);
        }
    }
}

#[test]
fn test_mixed_arithmetic_goes_through_int_to_float() {
    let d = Dispatcher::new(RecordingNative::new());
    assert_eq!(d.mul(&int(2), &float(1.5)).unwrap(), float(3.0));
    assert_eq!(d.native().calls(), vec!["int_to_float", "mul_float"]);

    let d = Dispatcher::new(RecordingNative::new());
    assert_eq!(d.sub(&int(5), &int(2)).unwrap(), int(3));
    assert_eq!(d.native().calls(), vec!["sub_int"]);
}

#[test]
fn test_minus_is_mul_by_negative_one() {
    let d = Dispatcher::new(RecordingNative::new());
    assert_eq!(d.minus(&float(2.0)).unwrap(), float(-2.0));
    assert_eq!(d.native().calls(), vec!["int_to_float", "mul_float"]);
}

// ==================== Overloads ====================

#[test]
fn test_concatenation_overloads() {
    let d = ops();
    assert_eq!(d.add(&s("ab"), &s("cd")).unwrap(), s("abcd"));
    assert_eq!(
        d.add(&list(&[int(1), int(2)]), &list(&[int(3)])).unwrap(),
        list(&[int(1), int(2), int(3)])
    );
    assert_eq!(
        d.add(&tuple(&[int(1)]), &tuple(&[int(2)])).unwrap(),
        tuple(&[int(1), int(2)])
    );
}

#[test]
fn test_string_repetition() {
    let d = ops();
    assert_eq!(d.mul(&s("ab"), &int(0)).unwrap(), s(""));
    assert_eq!(d.mul(&s("xy"), &int(2)).unwrap(), s("xyxy"));

    let d = Dispatcher::new(RecordingNative::new());
    assert_eq!(d.mul(&s("xy"), &int(50_000)).unwrap().as_str().map(str::len), Some(100_000));
    assert_eq!(d.native().calls(), vec!["mul_string"]);
}

// ==================== Dispatch failures ====================

#[test]
fn test_numeric_only_operators_reject_non_numbers() {
    let d = ops();
    let numeric_only = [
        BinOp::Sub,
        BinOp::Div,
        BinOp::Mod,
        BinOp::LShift,
        BinOp::RShift,
        BinOp::BitOr,
        BinOp::BitAnd,
        BinOp::BitXor,
    ];
    for bad in non_numeric() {
        for op in numeric_only {
            for (lhs, rhs) in [(&bad, &int(1)), (&int(1), &bad), (&bad, &bad)] {
                let err = d.binop(op, lhs, rhs).unwrap_err();
                assert!(err.is_dispatch_failure(), "{:?} {} {}", op, lhs, rhs);
            }
        }
        for op in [UnaryOp::Plus, UnaryOp::Minus, UnaryOp::Invert] {
            assert!(d.unop(op, &bad).unwrap_err().is_dispatch_failure());
        }
    }
}

#[test]
fn test_every_cross_tag_pair_fails_add() {
    let d = ops();
    for lhs in one_of_each() {
        for rhs in one_of_each() {
            let (l, r) = (lhs.tag(), rhs.tag());
            let defined = (l.is_numeric() && r.is_numeric())
                || (l == r && matches!(l, Tag::Str | Tag::Tuple | Tag::List));
            assert_eq!(d.add(&lhs, &rhs).is_ok(), defined, "{} + {}", lhs, rhs);
        }
    }
}

#[test]
fn test_failure_messages() {
    let d = ops();
    let msg = |r: DispatchResult<Value>| r.unwrap_err().to_string();
    insta::assert_snapshot!(
        msg(d.add(&s("a"), &int(1))),
        @"TypeError: unsupported operand type(s) for +: 'str' and 'int'"
    );
    insta::assert_snapshot!(
        msg(d.mul(&list(&[int(1)]), &int(2))),
        @"TypeError: unsupported operand type(s) for *: 'list' and 'int'"
    );
    insta::assert_snapshot!(
        msg(d.lshift(&float(1.0), &int(2))),
        @"TypeError: unsupported operand type(s) for <<: 'float' and 'int'"
    );
    insta::assert_snapshot!(
        msg(d.invert(&Value::set([]))),
        @"TypeError: bad operand type for unary ~: 'set'"
    );
    insta::assert_snapshot!(
        d.eq(&int(1), &s("1")).unwrap_err().to_string(),
        @"TypeError: unsupported operand type(s) for ==: 'int' and 'str'"
    );
    insta::assert_snapshot!(
        d.print(&Value::dict([])).unwrap_err().to_string(),
        @"TypeError: bad operand type for print(): 'dict'"
    );
}

// ==================== Equality ====================

#[test]
fn test_equality_defaults() {
    let d = ops();
    assert!(d.eq(&int(3), &int(3)).unwrap());
    assert!(!d.eq(&int(3), &int(4)).unwrap());
    assert!(d.eq(&int(3), &float(3.0)).unwrap());
    assert!(d.eq(&s("ab"), &s("ab")).unwrap());
    assert!(d.eq(&list(&[int(1)]), &list(&[float(1.0)])).unwrap());
}

// ==================== Print ====================

#[test]
fn test_print_writes_once() {
    let d = Dispatcher::new(RecordingNative::new());
    d.print(&int(5)).unwrap();
    assert_eq!(d.native().output(), "5");
    assert_eq!(d.native().calls(), vec!["repr_int", "write"]);
}

#[test]
fn test_print_string_is_not_rerepresented() {
    let d = Dispatcher::new(RecordingNative::new());
    d.print(&s("hello")).unwrap();
    assert_eq!(d.native().output(), "hello");
    assert_eq!(d.native().calls(), vec!["write"]);
}

#[test]
fn test_print_list_fails_without_write() {
    let d = Dispatcher::new(RecordingNative::new());
    assert!(d.print(&list(&[int(1), int(2)])).unwrap_err().is_dispatch_failure());
    assert_eq!(d.native().output(), "");
    assert!(d.native().calls().is_empty());
}

#[test]
fn test_prints_keep_call_order() {
    let d = ops();
    for v in [int(1), s(" "), float(2.5), s("\n")] {
        d.print(&v).unwrap();
    }
    assert_eq!(d.native().output().contents(), "1 2.5\n");
}

// ==================== Range ====================

#[test]
fn test_range_independent_iterators() {
    let d = ops();
    let mut a = d.range(&int(3)).unwrap();
    assert_eq!(a.next(), Some(int(0)));
    let b: Vec<Value> = d.range(&int(3)).unwrap().collect();
    assert_eq!(b, vec![int(0), int(1), int(2)]);
    let rest: Vec<Value> = a.collect();
    assert_eq!(rest, vec![int(1), int(2)]);
}

#[test]
fn test_range_rejects_non_int() {
    let d = ops();
    for bad in one_of_each().into_iter().filter(|v| v.tag() != Tag::Int) {
        assert!(d.range(&bad).unwrap_err().is_dispatch_failure());
    }
}

// ==================== Logical not ====================

#[test]
fn test_not_never_fails() {
    let d = ops();
    for v in one_of_each() {
        assert!(!d.not(&v), "{} should be truthy", v);
        assert!(d.unop(UnaryOp::Not, &v).is_ok());
    }
}
