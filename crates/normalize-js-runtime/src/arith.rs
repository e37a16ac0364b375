//! The binary arithmetic operators.
//!
//! `+` concatenates whenever either operand is a string; the others always
//! coerce both sides to numbers first.

use crate::coerce::{to_display_string, to_number};
use crate::value::Value;

/// `a + b`.
pub fn add(a: &Value, b: &Value) -> Value {
    if matches!(a, Value::String(_)) || matches!(b, Value::String(_)) {
        let mut out = to_display_string(a);
        out.push_str(&to_display_string(b));
        return Value::from(out);
    }
    Value::Number(to_number(a) + to_number(b))
}

/// `a - b`.
pub fn sub(a: &Value, b: &Value) -> Value {
    Value::Number(to_number(a) - to_number(b))
}

/// `a * b`.
pub fn mul(a: &Value, b: &Value) -> Value {
    Value::Number(to_number(a) * to_number(b))
}

/// `a / b`.
///
/// A zero divisor yields `Infinity` or `-Infinity` by the dividend's sign,
/// and `NaN` for a zero (or `NaN`) dividend.
pub fn div(a: &Value, b: &Value) -> Value {
    let (x, y) = (to_number(a), to_number(b));
    if y == 0.0 {
        let result = if x > 0.0 {
            f64::INFINITY
        } else if x < 0.0 {
            f64::NEG_INFINITY
        } else {
            f64::NAN
        };
        return Value::Number(result);
    }
    Value::Number(x / y)
}

/// `a % b`: truncated remainder, sign follows the dividend.
pub fn rem(a: &Value, b: &Value) -> Value {
    Value::Number(remainder(to_number(a), to_number(b)))
}

fn remainder(x: f64, y: f64) -> f64 {
    if x.is_nan() || y.is_nan() || y == 0.0 || x.is_infinite() {
        return f64::NAN;
    }
    if y.is_infinite() {
        return x;
    }
    x - y * (x / y).trunc()
}
