//! Intrinsic functions for the native runtime
//!
//! Raw typed operations behind the `Native` primitives. Integer
//! arithmetic is checked; float arithmetic follows IEEE-754.

use std::cmp::Ordering;

use crate::error::{RuntimeError, RuntimeResult};

// ========== Integer arithmetic ==========

/// Checked addition (i64)
#[inline]
pub fn add_i64(a: i64, b: i64) -> RuntimeResult<i64> {
    a.checked_add(b)
        .ok_or_else(|| RuntimeError::overflow_error("integer overflow in add"))
}

/// Checked subtraction (i64)
#[inline]
pub fn sub_i64(a: i64, b: i64) -> RuntimeResult<i64> {
    a.checked_sub(b)
        .ok_or_else(|| RuntimeError::overflow_error("integer overflow in sub"))
}

/// Checked multiplication (i64)
#[inline]
pub fn mul_i64(a: i64, b: i64) -> RuntimeResult<i64> {
    a.checked_mul(b)
        .ok_or_else(|| RuntimeError::overflow_error("integer overflow in mul"))
}

/// Truncating division (i64)
pub fn div_i64(a: i64, b: i64) -> RuntimeResult<i64> {
    if b == 0 {
        return Err(RuntimeError::DivisionByZero);
    }
    a.checked_div(b)
        .ok_or_else(|| RuntimeError::overflow_error("integer overflow in div"))
}

/// Truncating remainder (i64), sign follows the dividend
pub fn rem_i64(a: i64, b: i64) -> RuntimeResult<i64> {
    if b == 0 {
        return Err(RuntimeError::DivisionByZero);
    }
    a.checked_rem(b)
        .ok_or_else(|| RuntimeError::overflow_error("integer overflow in mod"))
}

// ========== Bitwise operations ==========

fn shift_count(b: i64) -> RuntimeResult<u32> {
    u32::try_from(b)
        .ok()
        .filter(|n| *n < i64::BITS)
        .ok_or_else(|| RuntimeError::overflow_error(format!("shift count {} out of range", b)))
}

/// Left shift (i64); bits shifted past the top are lost
pub fn shl_i64(a: i64, b: i64) -> RuntimeResult<i64> {
    Ok(a << shift_count(b)?)
}

/// Arithmetic right shift (i64)
pub fn shr_i64(a: i64, b: i64) -> RuntimeResult<i64> {
    Ok(a >> shift_count(b)?)
}

/// One's complement (i64)
#[inline]
pub fn invert_i64(a: i64) -> i64 {
    !a
}

// ========== Float operations ==========

/// Truncated float remainder, sign follows the dividend
#[inline]
pub fn rem_f64(a: f64, b: f64) -> f64 {
    a % b
}

/// Three-way compare (f64); `None` when either side is NaN
#[inline]
pub fn cmp_f64(a: f64, b: f64) -> Option<Ordering> {
    a.partial_cmp(&b)
}

// ========== Strings ==========

/// `s` repeated `count` times; a count of zero or less yields `""`
pub fn repeat_str(s: &str, count: i64) -> RuntimeResult<String> {
    if s.is_empty() || count <= 0 {
        return Ok(String::new());
    }
    let n = usize::try_from(count)
        .ok()
        .filter(|n| {
            s.len()
                .checked_mul(*n)
                .is_some_and(|len| len <= isize::MAX as usize)
        })
        .ok_or_else(|| RuntimeError::overflow_error("repeated string is too long"))?;
    Ok(s.repeat(n))
}

// ========== Type conversion ==========

/// Convert i64 to f64
#[inline]
pub fn i64_to_f64(x: i64) -> f64 {
    x as f64
}

// ========== Formatting ==========

/// Render a float the way the language prints it: integral values keep a
/// trailing `.0`, non-finite values print as `inf`, `-inf` and `nan`.
pub fn format_float(v: f64) -> String {
    if v.is_nan() {
        "nan".to_string()
    } else if v.is_infinite() {
        let text = if v > 0.0 { "inf" } else { "-inf" };
        text.to_string()
    } else if v.fract() == 0.0 && v.abs() < 1e16 {
        format!("{}.0", v)
    } else {
        format!("{}", v)
    }
}
