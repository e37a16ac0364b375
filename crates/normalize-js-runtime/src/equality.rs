//! Strict (`===`) and loose (`==`) equality.
//!
//! Loose equality deliberately stops short of the object-to-primitive
//! protocol: comparing an object or array loosely is an error, and callers
//! are pointed at strict equality instead.

use crate::coerce::to_number;
use crate::error::RuntimeError;
use crate::value::Value;

/// `a === b`.
///
/// `NaN` never matches, `null` and `undefined` only match themselves, and
/// containers and functions compare by identity.
pub fn strict_equal(a: &Value, b: &Value) -> bool {
    if a.is_nan() || b.is_nan() {
        return false;
    }
    match (a, b) {
        (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
        (Value::Boolean(x), Value::Boolean(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => x == y,
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Object(x), Value::Object(y)) => x.ptr_eq(y),
        (Value::Array(x), Value::Array(y)) => x.ptr_eq(y),
        (Value::Function(x), Value::Function(y)) => x.ptr_eq(y),
        _ => false,
    }
}

/// `a !== b`.
pub fn strict_not_equal(a: &Value, b: &Value) -> bool {
    !strict_equal(a, b)
}

/// `a == b`.
///
/// Fails with [`RuntimeError::UnsupportedOperation`] when either side is an
/// object or array.
pub fn loose_equal(a: &Value, b: &Value) -> Result<bool, RuntimeError> {
    if a.is_container() || b.is_container() {
        tracing::debug!(?a, ?b, "loose equality refused container operand");
        return Err(RuntimeError::UnsupportedOperation {
            operation: "loose equality with objects or arrays",
            hint: "use strict equality (===)",
        });
    }
    Ok(loose_primitive_equal(a, b))
}

/// `a != b`.
pub fn loose_not_equal(a: &Value, b: &Value) -> Result<bool, RuntimeError> {
    loose_equal(a, b).map(|eq| !eq)
}

fn loose_primitive_equal(a: &Value, b: &Value) -> bool {
    if a.is_nan() || b.is_nan() {
        return false;
    }
    match (a, b) {
        (Value::Null | Value::Undefined, Value::Null | Value::Undefined) => true,
        (Value::Boolean(x), Value::Boolean(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => x == y,
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Function(x), Value::Function(y)) => x.ptr_eq(y),
        (Value::Number(x), Value::String(_)) => *x == to_number(b),
        (Value::String(_), Value::Number(y)) => to_number(a) == *y,
        (Value::Boolean(x), _) => loose_primitive_equal(&bool_to_number(*x), b),
        (_, Value::Boolean(y)) => loose_primitive_equal(a, &bool_to_number(*y)),
        _ => false,
    }
}

fn bool_to_number(b: bool) -> Value {
    Value::Number(if b { 1.0 } else { 0.0 })
}
