//! Error extraction: any caught value to a renderable [`NormalizedError`].
//!
//! Failures reach the UI as thrown strings, structured backend error bodies,
//! or values nobody anticipated. [`extract`] maps all of them to a record
//! that always carries a non-empty message.
//!
//! The two fallback literals differ:
//! [`FALLBACK_MESSAGE`] means "an object we understood, without a message
//! field" and [`UNKNOWN_ERROR_MESSAGE`] means "a value we cannot interpret".

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::value::{is_truthy, present};
use crate::AppId;

/// Message used when a structured error carries no usable `error` or `message`.
pub const FALLBACK_MESSAGE: &str = "An error occurred";

/// Message used when the caught value is neither a string nor a structure.
pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred";

// ---------------------------------------------------------------------------
// NormalizedError
// ---------------------------------------------------------------------------

/// A caught failure reduced to what the UI can render.
///
/// `details` and `missing_apps` are carried exactly as received; nested field
/// types are not validated. Use [`NormalizedError::details_text`] and
/// [`NormalizedError::missing_app_ids`] for typed views.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[error("{message}")]
pub struct NormalizedError {
    /// Human-readable message. Never empty.
    pub message: String,
    /// Supplementary detail, as received.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
    /// Integrations the failed operation depends on, as received.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub missing_apps: Option<Value>,
}

impl NormalizedError {
    /// Creates an error carrying only `message`.
    ///
    /// An empty message is replaced by [`UNKNOWN_ERROR_MESSAGE`].
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            message: if message.is_empty() {
                UNKNOWN_ERROR_MESSAGE.to_string()
            } else {
                message
            },
            details: None,
            missing_apps: None,
        }
    }

    /// Converts a caught Rust error, using its display text as the message.
    pub fn from_error(err: &(dyn std::error::Error + 'static)) -> Self {
        let message = err.to_string();
        if message.is_empty() {
            Self::new(FALLBACK_MESSAGE)
        } else {
            Self::new(message)
        }
    }

    /// Returns `details` as text: strings verbatim, other values as compact JSON.
    pub fn details_text(&self) -> Option<String> {
        self.details.as_ref().map(render)
    }

    /// Returns the string entries of `missing_apps` as [`AppId`]s.
    ///
    /// Non-string and empty entries are skipped. Returns an empty list when the
    /// field is absent or not an array.
    pub fn missing_app_ids(&self) -> Vec<AppId> {
        self.missing_apps
            .as_ref()
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .filter_map(AppId::new)
                    .collect()
            })
            .unwrap_or_default()
    }
}

// ---------------------------------------------------------------------------
// Extraction
// ---------------------------------------------------------------------------

/// Extracts a [`NormalizedError`] from any decoded value.
///
/// - A string becomes the message.
/// - An object (or array) takes `error`, then `message`, then
///   [`FALLBACK_MESSAGE`], and passes `details` and `missingApps` through.
/// - Anything else yields [`UNKNOWN_ERROR_MESSAGE`].
pub fn extract(raw: &Value) -> NormalizedError {
    match raw {
        Value::String(s) => NormalizedError::new(s.as_str()),
        Value::Object(map) => from_fields(map),
        // Arrays are objects in the dynamic model but carry no named fields.
        Value::Array(_) => NormalizedError::new(FALLBACK_MESSAGE),
        Value::Null | Value::Bool(_) | Value::Number(_) => {
            NormalizedError::new(UNKNOWN_ERROR_MESSAGE)
        }
    }
}

/// Extracts a [`NormalizedError`] from a raw response body.
///
/// Bodies that decode as JSON go through [`extract`]; anything else is treated
/// as a plain-text error message.
pub fn extract_body(body: &str) -> NormalizedError {
    match serde_json::from_str::<Value>(body) {
        Ok(value) => extract(&value),
        Err(_) => NormalizedError::new(body.trim()),
    }
}

fn from_fields(map: &Map<String, Value>) -> NormalizedError {
    let message = ["error", "message"]
        .iter()
        .filter_map(|key| map.get(*key))
        .find(|v| is_truthy(v))
        .map(render)
        .unwrap_or_else(|| FALLBACK_MESSAGE.to_string());

    NormalizedError {
        message,
        details: present(map, "details"),
        missing_apps: present(map, "missingApps"),
    }
}

fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
