//! Truthiness and primitive coercions.

use crate::value::{ArrayRef, Value};

/// Source-language truthiness.
///
/// Falsy: `null`, `undefined`, `false`, both zeros, `NaN`, and `""`.
/// Everything else is truthy, including empty objects and empty arrays.
pub fn is_truthy(v: &Value) -> bool {
    match v {
        Value::Undefined | Value::Null => false,
        Value::Boolean(b) => *b,
        Value::Number(n) => *n != 0.0 && !n.is_nan(),
        Value::String(s) => !s.is_empty(),
        Value::Object(_) | Value::Array(_) | Value::Function(_) => true,
    }
}

/// Numeric coercion (unary `+`).
///
/// Strings are trimmed; blank strings are `0`. Only decimal literals and
/// `Infinity` parse. Hex, octal, binary, and digit separators are `NaN`.
pub fn to_number(v: &Value) -> f64 {
    match v {
        Value::Null => 0.0,
        Value::Undefined => f64::NAN,
        Value::Boolean(b) => f64::from(u8::from(*b)),
        Value::Number(n) => *n,
        Value::String(s) => string_to_number(s),
        Value::Object(_) | Value::Array(_) | Value::Function(_) => f64::NAN,
    }
}

fn string_to_number(s: &str) -> f64 {
    let s = s.trim();
    if s.is_empty() {
        return 0.0;
    }
    let (negative, body) = match s.as_bytes()[0] {
        b'-' => (true, &s[1..]),
        b'+' => (false, &s[1..]),
        _ => (false, s),
    };
    let magnitude = if body == "Infinity" {
        f64::INFINITY
    } else if is_decimal_literal(body) {
        body.parse().unwrap_or(f64::NAN)
    } else {
        return f64::NAN;
    };
    if negative { -magnitude } else { magnitude }
}

/// `digits [. digits] [e [sign] digits]`, with at least one mantissa digit.
fn is_decimal_literal(s: &str) -> bool {
    let bytes = s.as_bytes();
    let digits_from = |start: usize| {
        bytes[start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut i = 0;
    let int_digits = digits_from(i);
    i += int_digits;

    let mut frac_digits = 0;
    if bytes.get(i) == Some(&b'.') {
        i += 1;
        frac_digits = digits_from(i);
        i += frac_digits;
    }
    if int_digits + frac_digits == 0 {
        return false;
    }

    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        i += 1;
        if matches!(bytes.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        let exp_digits = digits_from(i);
        if exp_digits == 0 {
            return false;
        }
        i += exp_digits;
    }

    i == bytes.len()
}

/// Source-language Number-to-String.
///
/// Integral values print without a fraction, both zeros print `0`, and
/// magnitudes outside `[1e-6, 1e21)` switch to exponent form (`1e+21`).
pub fn number_to_string(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }

    let abs = n.abs();
    if (1e-6..1e21).contains(&abs) {
        return n.to_string();
    }

    let exponential = format!("{n:e}");
    match exponential.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => exponential,
    }
}

/// Display form used by string concatenation and console output.
///
/// Not a serializer: objects print as `[object Object]` and arrays join
/// their elements with `,`, rendering `null`/`undefined` elements empty.
pub fn to_display_string(v: &Value) -> String {
    match v {
        Value::Undefined => "undefined".to_string(),
        Value::Null => "null".to_string(),
        Value::Boolean(b) => b.to_string(),
        Value::Number(n) => number_to_string(*n),
        Value::String(s) => s.to_string(),
        Value::Object(_) => "[object Object]".to_string(),
        Value::Array(arr) => join_array(arr, &mut Vec::new()),
        Value::Function(func) => {
            format!("function {}() {{ [native code] }}", func.name().unwrap_or(""))
        }
    }
}

// A cyclic reference renders as empty, as the source runtime does.
fn join_array(arr: &ArrayRef, active: &mut Vec<ArrayRef>) -> String {
    if active.iter().any(|a| a.ptr_eq(arr)) {
        return String::new();
    }
    active.push(arr.clone());
    let parts: Vec<String> = arr
        .to_vec()
        .iter()
        .map(|item| match item {
            Value::Undefined | Value::Null => String::new(),
            Value::Array(inner) => join_array(inner, active),
            other => to_display_string(other),
        })
        .collect();
    active.pop();
    parts.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_falsy_values() {
        assert!(!is_truthy(&Value::from("")));
        assert!(!is_truthy(&Value::from(0)));
        assert!(!is_truthy(&Value::from(-0.0)));
        assert!(!is_truthy(&Value::Null));
        assert!(!is_truthy(&Value::Undefined));
        assert!(!is_truthy(&Value::from(f64::NAN)));
        assert!(!is_truthy(&Value::from(false)));
    }

    #[test]
    fn test_truthy_values() {
        assert!(is_truthy(&Value::from("hello")));
        assert!(is_truthy(&Value::from(" ")));
        assert!(is_truthy(&Value::from("0")));
        assert!(is_truthy(&Value::from(1)));
        assert!(is_truthy(&Value::from(-1)));
        assert!(is_truthy(&Value::from(f64::INFINITY)));
        assert!(is_truthy(&Value::from(true)));
    }

    #[test]
    fn test_empty_containers_are_truthy() {
        assert!(is_truthy(&Value::object()));
        assert!(is_truthy(&Value::array([])));
    }

    #[test]
    fn test_to_number_primitives() {
        assert_eq!(to_number(&Value::Null), 0.0);
        assert!(to_number(&Value::Undefined).is_nan());
        assert_eq!(to_number(&Value::from(true)), 1.0);
        assert_eq!(to_number(&Value::from(false)), 0.0);
        assert_eq!(to_number(&Value::from(3.14)), 3.14);
        assert!(to_number(&Value::object()).is_nan());
        assert!(to_number(&Value::array([])).is_nan());
    }

    #[test]
    fn test_to_number_strings() {
        let num = |s: &str| to_number(&Value::from(s));
        assert_eq!(num("5"), 5.0);
        assert_eq!(num("3.14"), 3.14);
        assert_eq!(num("-42"), -42.0);
        assert_eq!(num("+7"), 7.0);
        assert_eq!(num("1e3"), 1000.0);
        assert_eq!(num("2.5E-1"), 0.25);
        assert_eq!(num("5."), 5.0);
        assert_eq!(num(".5"), 0.5);
        assert_eq!(num("  5  "), 5.0);
        assert_eq!(num("\t10\n"), 10.0);
        assert_eq!(num(""), 0.0);
        assert_eq!(num("   "), 0.0);
        assert_eq!(num("Infinity"), f64::INFINITY);
        assert_eq!(num("-Infinity"), f64::NEG_INFINITY);
    }

    #[test]
    fn test_to_number_rejects_non_decimal_forms() {
        let num = |s: &str| to_number(&Value::from(s));
        for s in [
            "hello", "5x", "0x1A", "0o7", "0b1", "1_000", "inf", "nan", "NaN", ".", "e5", "1e",
            "1e+", "--1", "+-1", "1 2",
        ] {
            assert!(num(s).is_nan(), "{s:?} should be NaN");
        }
    }

    #[test]
    fn test_number_to_string() {
        assert_eq!(number_to_string(5.0), "5");
        assert_eq!(number_to_string(-42.0), "-42");
        assert_eq!(number_to_string(3.14), "3.14");
        assert_eq!(number_to_string(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(number_to_string(-0.0), "0");
        assert_eq!(number_to_string(f64::NAN), "NaN");
        assert_eq!(number_to_string(f64::INFINITY), "Infinity");
        assert_eq!(number_to_string(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(number_to_string(1e20), "100000000000000000000");
        assert_eq!(number_to_string(1e21), "1e+21");
        assert_eq!(number_to_string(1.5e-7), "1.5e-7");
        assert_eq!(number_to_string(0.000001), "0.000001");
    }

    #[test]
    fn test_display_string() {
        assert_eq!(to_display_string(&Value::Undefined), "undefined");
        assert_eq!(to_display_string(&Value::Null), "null");
        assert_eq!(to_display_string(&Value::from(true)), "true");
        assert_eq!(to_display_string(&Value::from(false)), "false");
        assert_eq!(to_display_string(&Value::from("hi")), "hi");
        assert_eq!(to_display_string(&Value::object()), "[object Object]");
        let arr = Value::array([
            Value::from(1),
            Value::Null,
            Value::from("x"),
            Value::Undefined,
            Value::array([Value::from(2), Value::from(3)]),
        ]);
        assert_eq!(to_display_string(&arr), "1,,x,,2,3");
    }

    #[test]
    fn test_display_string_cyclic_array() {
        let arr = crate::value::ArrayRef::new();
        arr.push(Value::from(1));
        arr.push(Value::Array(arr.clone()));
        assert_eq!(to_display_string(&Value::Array(arr)), "1,");
    }

    #[test]
    fn test_display_round_trips_through_to_number() {
        for n in [0.0, 1.0, -1.0, 0.5, 3.14, -2.75e-3, 1e-7, 123456789.125, 1e21, 2.5e300] {
            let shown = Value::from(number_to_string(n));
            assert_eq!(to_number(&shown), n, "round trip of {n}");
        }
    }
}
