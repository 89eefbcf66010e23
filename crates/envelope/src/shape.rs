//! Envelope shape classification.
//!
//! Backend endpoints evolved several envelope conventions. [`ResponseShape`]
//! names each one, and [`ResponseShape::classify`] tests them in a fixed
//! precedence order. The order is part of the contract: a payload may satisfy
//! several rules at once (`{"ok": true, "data": [], "memory": {}}`), and only
//! the first one counts.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::value::{field_is_array, field_is_truthy};

/// The envelope convention a decoded response was recognized as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseShape {
    /// The response is already a list of entities.
    Array,
    /// `{"success": <truthy>, "data": [...]}`.
    SuccessData,
    /// `{"ok": <truthy>, "data": [...]}`.
    OkData,
    /// `{"ok": <truthy>, "memory": <any>}`: a single wrapped entity.
    OkMemory,
    /// An object carrying both `id` and `name`, treated as one bare entity.
    ///
    /// This is the weakest signal and is tried last: any object with those two
    /// keys qualifies, whether or not it is really an entity.
    BareEntity,
    /// Primitive, `null`, or an object matching none of the rules above.
    Unrecognized,
}

impl ResponseShape {
    /// Classifies `raw` by trying each envelope rule in precedence order.
    pub fn classify(raw: &Value) -> Self {
        let map = match raw {
            Value::Array(_) => return Self::Array,
            Value::Object(map) => map,
            _ => return Self::Unrecognized,
        };

        let has_data_array = field_is_array(map, "data");
        if field_is_truthy(map, "success") && has_data_array {
            Self::SuccessData
        } else if field_is_truthy(map, "ok") && has_data_array {
            Self::OkData
        } else if field_is_truthy(map, "ok") && map.contains_key("memory") {
            Self::OkMemory
        } else if map.contains_key("id") && map.contains_key("name") {
            Self::BareEntity
        } else {
            Self::Unrecognized
        }
    }

    /// Returns `false` only for [`ResponseShape::Unrecognized`].
    pub fn is_recognized(self) -> bool {
        !matches!(self, Self::Unrecognized)
    }

    /// Stable lowercase name, matching the serialised form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Array => "array",
            Self::SuccessData => "success_data",
            Self::OkData => "ok_data",
            Self::OkMemory => "ok_memory",
            Self::BareEntity => "bare_entity",
            Self::Unrecognized => "unrecognized",
        }
    }
}

impl std::fmt::Display for ResponseShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
