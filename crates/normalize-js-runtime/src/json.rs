//! Conversion between [`Value`] and `serde_json::Value`.
//!
//! Lets a host seed a translated program with data and read results back.
//! Holes, `undefined`, non-finite numbers, and functions have no JSON form
//! and come out as `null`.

use crate::error::RuntimeError;
use crate::value::Value;
use serde_json::{Map, Number, Value as Json};

impl Value {
    /// Build a fresh value tree from JSON. Object key order is kept.
    pub fn from_json(json: &Json) -> Value {
        match json {
            Json::Null => Value::Null,
            Json::Bool(b) => Value::Boolean(*b),
            Json::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            Json::String(s) => Value::from(s.as_str()),
            Json::Array(items) => Value::array(items.iter().map(Value::from_json)),
            Json::Object(map) => {
                Value::object_from(map.iter().map(|(k, v)| (k.as_str(), Value::from_json(v))))
            }
        }
    }

    /// Snapshot this value as JSON.
    ///
    /// Fails with [`RuntimeError::CyclicStructure`] when a container
    /// contains itself. Shared, acyclic references serialize once per use.
    pub fn to_json(&self) -> Result<Json, RuntimeError> {
        to_json_inner(self, &mut Vec::new())
    }
}

// `active` holds the containers on the current path, by address.
fn to_json_inner(value: &Value, active: &mut Vec<usize>) -> Result<Json, RuntimeError> {
    match value {
        Value::Undefined | Value::Null | Value::Function(_) => Ok(Json::Null),
        Value::Boolean(b) => Ok(Json::Bool(*b)),
        Value::Number(n) => Ok(number_to_json(*n)),
        Value::String(s) => Ok(Json::String(s.to_string())),
        Value::Array(arr) => enter(arr.addr(), active, |active| {
            let items = arr
                .to_vec()
                .iter()
                .map(|item| to_json_inner(item, active))
                .collect::<Result<_, _>>()?;
            Ok(Json::Array(items))
        }),
        Value::Object(obj) => enter(obj.addr(), active, |active| {
            let mut map = Map::new();
            for (key, item) in obj.entries() {
                map.insert(key, to_json_inner(&item, active)?);
            }
            Ok(Json::Object(map))
        }),
    }
}

fn enter(
    addr: usize,
    active: &mut Vec<usize>,
    convert: impl FnOnce(&mut Vec<usize>) -> Result<Json, RuntimeError>,
) -> Result<Json, RuntimeError> {
    if active.contains(&addr) {
        tracing::debug!("refusing to convert cyclic value to JSON");
        return Err(RuntimeError::CyclicStructure);
    }
    active.push(addr);
    let json = convert(active)?;
    active.pop();
    Ok(json)
}

// Integral values inside the exact f64 range serialize without a fraction.
fn number_to_json(n: f64) -> Json {
    const MAX_SAFE: f64 = 9_007_199_254_740_991.0;
    if n.fract() == 0.0 && n.abs() <= MAX_SAFE {
        return Json::Number(Number::from(n as i64));
    }
    Number::from_f64(n).map_or(Json::Null, Json::Number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_keeps_order_and_types() {
        let v = Value::from_json(&json!({"z": 1, "a": [true, null, "s"], "m": 2.5}));
        let obj = v.as_object().unwrap();
        assert_eq!(obj.keys(), vec!["z", "a", "m"]);
        assert_eq!(obj.get("m").unwrap().as_number(), Some(2.5));
        let arr = obj.get("a").unwrap();
        let arr = arr.as_array().unwrap();
        assert_eq!(arr.get(0).unwrap().as_bool(), Some(true));
        assert!(arr.get(1).unwrap().is_null());
    }

    #[test]
    fn test_to_json() {
        let v = Value::object_from([
            ("n", Value::from(3)),
            ("f", Value::from(0.5)),
            ("u", Value::Undefined),
            ("nan", Value::from(f64::NAN)),
            ("arr", Value::array([Value::from("x"), Value::Undefined])),
        ]);
        assert_eq!(
            v.to_json().unwrap(),
            json!({"n": 3, "f": 0.5, "u": null, "nan": null, "arr": ["x", null]})
        );
    }

    #[test]
    fn test_to_json_rejects_cycles() {
        let obj = Value::object();
        obj.as_object().unwrap().insert("self", obj.clone());
        assert!(matches!(obj.to_json(), Err(RuntimeError::CyclicStructure)));

        let arr = Value::array([]);
        let outer = Value::object_from([("items", arr.clone())]);
        arr.as_array().unwrap().push(outer.clone());
        assert!(matches!(outer.to_json(), Err(RuntimeError::CyclicStructure)));
        assert!(matches!(arr.to_json(), Err(RuntimeError::CyclicStructure)));
    }

    #[test]
    fn test_to_json_allows_shared_references() {
        let shared = Value::array([Value::from(1)]);
        let v = Value::object_from([("a", shared.clone()), ("b", shared)]);
        assert_eq!(v.to_json().unwrap(), json!({"a": [1], "b": [1]}));
    }

    #[test]
    fn test_from_json_builds_fresh_containers() {
        let doc = json!({"a": 1});
        let first = Value::from_json(&doc);
        let second = Value::from_json(&doc);
        assert!(!crate::equality::strict_equal(&first, &second));
    }
}
