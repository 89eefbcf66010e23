//! Command implementations.
//!
//! Each command takes the raw input text and returns the text to print, so the
//! logic can be exercised without touching the filesystem or stdio.

use anyhow::{Context, Result};
use envelope::{extract_body, normalize, ResponseShape};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};

/// Output rendering options shared by every command.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputOptions {
    /// Pretty-print JSON output.
    pub pretty: bool,
}

/// Normalizes a decoded response into a JSON array.
///
/// # Errors
///
/// Returns an error if `input` is not valid JSON.
pub fn run_normalize(input: &str, options: OutputOptions) -> Result<String> {
    let raw = parse(input)?;
    let shape = ResponseShape::classify(&raw);
    let entities = normalize(raw);
    if shape.is_recognized() {
        info!(%shape, count = entities.len(), "normalized response");
    } else {
        warn!("response shape not recognized; emitting empty list");
    }
    render(&entities, options)
}

/// Reports which envelope rule a response matches.
///
/// # Errors
///
/// Returns an error if `input` is not valid JSON.
pub fn run_shape(input: &str) -> Result<String> {
    let raw = parse(input)?;
    let shape = ResponseShape::classify(&raw);
    debug!(%shape, "classified response");
    Ok(shape.to_string())
}

/// Extracts a normalized error from a response body.
///
/// Input that is not JSON is treated as a plain-text error, so this command
/// only fails if the result cannot be serialised.
///
/// # Errors
///
/// Returns an error if the extracted record cannot be rendered as JSON.
pub fn run_extract(input: &str, options: OutputOptions) -> Result<String> {
    let error = extract_body(input);
    info!(
        error_message = %error.message,
        has_details = error.details.is_some(),
        missing_apps = error.missing_app_ids().len(),
        "extracted error"
    );
    render(&error, options)
}

fn parse(input: &str) -> Result<Value> {
    serde_json::from_str(input).context("input is not valid JSON")
}

fn render<T: Serialize>(value: &T, options: OutputOptions) -> Result<String> {
    let text = if options.pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    text.context("failed to serialise output")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse_output(text: &str) -> Value {
        serde_json::from_str(text).expect("output is JSON")
    }

    #[test]
    fn normalize_unwraps_envelope() {
        let out = run_normalize(r#"{"ok":true,"data":[{"id":"c1"}]}"#, OutputOptions::default())
            .expect("runs");
        assert_eq!(parse_output(&out), json!([{ "id": "c1" }]));
    }

    #[test]
    fn normalize_unrecognized_prints_empty_array() {
        let out = run_normalize("42", OutputOptions::default()).expect("runs");
        assert_eq!(out, "[]");
    }

    #[test]
    fn normalize_rejects_invalid_json() {
        let err = run_normalize("{not json", OutputOptions::default()).expect_err("invalid");
        assert!(err.to_string().contains("not valid JSON"));
    }

    #[test]
    fn shape_reports_rule_name() {
        assert_eq!(run_shape(r#"{"id":"k1","name":"My Key"}"#).expect("runs"), "bare_entity");
        assert_eq!(run_shape("null").expect("runs"), "unrecognized");
    }

    #[test]
    fn extract_structured_body() {
        let out = run_extract(
            r#"{"error":"Invalid token","missingApps":["slack"]}"#,
            OutputOptions::default(),
        )
        .expect("runs");
        assert_eq!(
            parse_output(&out),
            json!({ "message": "Invalid token", "missingApps": ["slack"] })
        );
    }

    #[test]
    fn extract_plain_text_body() {
        let out = run_extract("Unauthorized\n", OutputOptions { pretty: true }).expect("runs");
        assert_eq!(parse_output(&out), json!({ "message": "Unauthorized" }));
    }
}
