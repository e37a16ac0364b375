//! `typeof` and `delete`.

use crate::coerce::to_display_string;
use crate::value::{Value, array_index};

/// `typeof v`. `null` reports `"object"`, as the source language does.
pub fn type_of(v: &Value) -> &'static str {
    match v {
        Value::Undefined => "undefined",
        Value::Null | Value::Object(_) | Value::Array(_) => "object",
        Value::Boolean(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Function(_) => "function",
    }
}

/// `delete container[key]`. Always reports success.
///
/// Objects drop the key if present. Arrays overwrite an in-range slot with
/// `undefined`, leaving a hole; the length never changes. Everything else
/// is a no-op.
pub fn delete_property(container: &Value, key: &Value) -> bool {
    match container {
        Value::Object(obj) => {
            obj.remove(&to_display_string(key));
        }
        Value::Array(arr) => {
            if let Some(index) = array_index(key).filter(|&i| i < arr.len()) {
                // In range, so the write cannot fail.
                let _ = arr.set(index, Value::Undefined);
            }
        }
        _ => {}
    }
    true
}
