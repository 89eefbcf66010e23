//! Response normalization: any decoded payload to a flat entity list.
//!
//! Normalization is total. A payload whose shape is not recognized yields an
//! empty list, which callers must treat as "nothing to display" and never as
//! an error.

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use crate::ResponseShape;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Failure to decode a normalized entity into a concrete record type.
///
/// Only [`normalize_as`] produces this; [`normalize`] itself cannot fail.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The entity at `index` in the normalized list did not match the target type.
    #[error("entity {index} could not be decoded: {source}")]
    Entity {
        /// Zero-based position in the normalized list.
        index: usize,
        /// Underlying deserialisation failure.
        #[source]
        source: serde_json::Error,
    },
}

// ---------------------------------------------------------------------------
// Operations
// ---------------------------------------------------------------------------

/// Normalizes an owned response, moving the payload out without cloning.
///
/// | Shape | Result |
/// |-------|--------|
/// | `[...]` | the array unchanged |
/// | `{"success": truthy, "data": [...]}` | `data` |
/// | `{"ok": truthy, "data": [...]}` | `data` |
/// | `{"ok": truthy, "memory": m}` | `[m]` |
/// | `{"id": _, "name": _, ...}` | `[raw]` |
/// | anything else | `[]` |
pub fn normalize(raw: Value) -> Vec<Value> {
    let shape = ResponseShape::classify(&raw);
    match (shape, raw) {
        (ResponseShape::Array, Value::Array(items)) => items,
        (ResponseShape::SuccessData | ResponseShape::OkData, Value::Object(mut map)) => {
            match map.remove("data") {
                Some(Value::Array(items)) => items,
                _ => Vec::new(),
            }
        }
        (ResponseShape::OkMemory, Value::Object(mut map)) => {
            map.remove("memory").into_iter().collect()
        }
        (ResponseShape::BareEntity, raw) => vec![raw],
        _ => Vec::new(),
    }
}

/// Normalizes a borrowed response, cloning only the extracted payload.
pub fn normalize_ref(raw: &Value) -> Vec<Value> {
    match ResponseShape::classify(raw) {
        ResponseShape::Array => raw.as_array().cloned().unwrap_or_default(),
        ResponseShape::SuccessData | ResponseShape::OkData => raw
            .get("data")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default(),
        ResponseShape::OkMemory => raw.get("memory").cloned().into_iter().collect(),
        ResponseShape::BareEntity => vec![raw.clone()],
        ResponseShape::Unrecognized => Vec::new(),
    }
}

/// Normalizes `raw` and decodes every entity into `T`.
///
/// # Errors
///
/// Returns [`DecodeError::Entity`] for the first entity that does not
/// deserialise into `T`. An unrecognized shape is not an error and yields
/// `Ok(vec![])`.
pub fn normalize_as<T: DeserializeOwned>(raw: Value) -> Result<Vec<T>, DecodeError> {
    normalize(raw)
        .into_iter()
        .enumerate()
        .map(|(index, entity)| {
            serde_json::from_value(entity).map_err(|source| DecodeError::Entity { index, source })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, PartialEq, Deserialize)]
    struct ApiKey {
        id: String,
        name: String,
    }

    #[test]
    fn owned_and_borrowed_forms_agree() {
        let inputs = [
            json!([{ "id": 1 }]),
            json!({ "success": true, "data": [1, 2] }),
            json!({ "ok": true, "data": ["a"] }),
            json!({ "ok": true, "memory": { "id": "m1" } }),
            json!({ "id": "x", "name": "y", "extra": true }),
            json!({ "success": false, "data": [1, 2] }),
            json!(42),
        ];
        for raw in inputs {
            assert_eq!(normalize_ref(&raw), normalize(raw.clone()), "input: {raw}");
        }
    }

    #[test]
    fn ok_memory_wraps_null() {
        assert_eq!(normalize(json!({ "ok": true, "memory": null })), vec![Value::Null]);
    }

    #[test]
    fn falsy_ok_suppresses_memory_rule() {
        assert!(normalize(json!({ "ok": 0, "memory": { "id": "m1" } })).is_empty());
    }

    #[test]
    fn borrowed_input_is_left_untouched() {
        let raw = json!({ "success": true, "data": [1] });
        let before = raw.clone();
        let _ = normalize_ref(&raw);
        assert_eq!(raw, before);
    }

    #[test]
    fn normalize_as_decodes_wrapped_entities() {
        let raw = json!({ "success": true, "data": [
            { "id": "k1", "name": "Primary" },
            { "id": "k2", "name": "Backup" },
        ]});
        let keys: Vec<ApiKey> = normalize_as(raw).expect("decodes");
        assert_eq!(keys.len(), 2);
        assert_eq!(keys[1], ApiKey { id: "k2".into(), name: "Backup".into() });
    }

    #[test]
    fn normalize_as_decodes_bare_entity() {
        let keys: Vec<ApiKey> =
            normalize_as(json!({ "id": "k1", "name": "My Key" })).expect("decodes");
        assert_eq!(keys, vec![ApiKey { id: "k1".into(), name: "My Key".into() }]);
    }

    #[test]
    fn normalize_as_reports_failing_index() {
        let raw = json!([{ "id": "k1", "name": "ok" }, { "id": 7 }]);
        let err = normalize_as::<ApiKey>(raw).expect_err("second entity is malformed");
        match err {
            DecodeError::Entity { index, .. } => assert_eq!(index, 1),
        }
    }

    #[test]
    fn normalize_as_unrecognized_is_empty_not_error() {
        let keys: Vec<ApiKey> = normalize_as(json!({ "foo": 1 })).expect("total");
        assert!(keys.is_empty());
    }
}
