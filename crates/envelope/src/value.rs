//! Field probes over decoded JSON values.
//!
//! Backend envelopes were designed against dynamic-language truthiness, so the
//! shape tests in [`crate::shape`] and [`crate::errors`] need the same notion:
//! `null`, `false`, `0`, and `""` are falsy; everything else (including `[]`
//! and `{}`) is truthy. A missing key reads as falsy.

use serde_json::{Map, Value};

/// Returns `true` if `value` is truthy in the dynamic-language sense.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Returns `true` if `key` is present in `map` and its value is truthy.
pub(crate) fn field_is_truthy(map: &Map<String, Value>, key: &str) -> bool {
    map.get(key).is_some_and(is_truthy)
}

/// Returns `true` if `key` is present in `map` and holds an array.
pub(crate) fn field_is_array(map: &Map<String, Value>, key: &str) -> bool {
    map.get(key).is_some_and(Value::is_array)
}

/// Returns the value at `key` unless it is missing or `null`.
///
/// JSON has no `undefined`; `null` is the only wire encoding of "not set".
pub(crate) fn present(map: &Map<String, Value>, key: &str) -> Option<Value> {
    map.get(key).filter(|v| !v.is_null()).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn falsy_values() {
        for v in [json!(null), json!(false), json!(0), json!(0.0), json!(-0.0), json!("")] {
            assert!(!is_truthy(&v), "{v} should be falsy");
        }
    }

    #[test]
    fn truthy_values() {
        for v in [json!(true), json!(1), json!(-3.5), json!("0"), json!([]), json!({})] {
            assert!(is_truthy(&v), "{v} should be truthy");
        }
    }

    #[test]
    fn missing_field_is_falsy() {
        let map = Map::new();
        assert!(!field_is_truthy(&map, "ok"));
        assert!(!field_is_array(&map, "data"));
        assert!(present(&map, "details").is_none());
    }

    #[test]
    fn null_field_is_not_present() {
        let value = json!({ "details": null, "other": 0 });
        let map = value.as_object().expect("object");
        assert!(present(map, "details").is_none());
        assert_eq!(present(map, "other"), Some(json!(0)));
    }
}
