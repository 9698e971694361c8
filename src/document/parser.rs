//! Conversion between JSON text and [`Value`].
//!
//! Decoding is delegated to `serde_json`; this module only maps its output
//! onto the closed [`Value`] model and back again for printing.
//!
//! # Example
//!
//! ```
//! use jsonpick::document::parser::parse_json;
//! use jsonpick::document::node::Value;
//!
//! let doc = parse_json(r#"{"name": "Alice"}"#).unwrap();
//! assert_eq!(doc.get("name"), Some(&Value::String("Alice".to_string())));
//! ```

use super::node::Value;
use anyhow::{bail, Context, Result};
use serde_json::Value as SerdeValue;

/// Largest integer an `f64` holds exactly (2^53).
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Parses JSON text into a [`Value`].
///
/// Any top-level JSON value is accepted, including bare scalars and `null`.
///
/// # Note on Number Precision
///
/// Numbers are stored as `f64`. Integers beyond 2^53 lose precision.
///
/// # Errors
///
/// Returns an error if the source is empty (or whitespace only) or is not
/// valid JSON.
pub fn parse_json(json_str: &str) -> Result<Value> {
    if json_str.trim().is_empty() {
        bail!("Source is empty");
    }

    let value: SerdeValue = serde_json::from_str(json_str).context("Failed to parse JSON")?;
    Ok(parse_value(value))
}

/// Converts a `serde_json` value into a [`Value`].
pub fn parse_value(value: SerdeValue) -> Value {
    match value {
        SerdeValue::Null => Value::Null,
        SerdeValue::Bool(b) => Value::Bool(b),
        // Without arbitrary_precision every serde_json number fits in f64.
        SerdeValue::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
        SerdeValue::String(s) => Value::String(s),
        SerdeValue::Array(items) => Value::Array(items.into_iter().map(parse_value).collect()),
        SerdeValue::Object(fields) => Value::Object(
            fields
                .into_iter()
                .map(|(key, child)| (key, parse_value(child)))
                .collect(),
        ),
    }
}

/// Converts a [`Value`] back into a `serde_json` value for output.
///
/// Integral numbers are emitted as JSON integers so that `2.0` prints as `2`.
pub fn to_serde_value(value: &Value) -> SerdeValue {
    match value {
        Value::Null => SerdeValue::Null,
        Value::Bool(b) => SerdeValue::Bool(*b),
        Value::Number(n) => number_to_serde(*n),
        Value::String(s) => SerdeValue::String(s.clone()),
        Value::Array(items) => SerdeValue::Array(items.iter().map(to_serde_value).collect()),
        Value::Object(fields) => SerdeValue::Object(
            fields
                .iter()
                .map(|(key, child)| (key.clone(), to_serde_value(child)))
                .collect(),
        ),
    }
}

fn number_to_serde(n: f64) -> SerdeValue {
    if n.fract() == 0.0 && n.abs() <= MAX_EXACT_INTEGER {
        return SerdeValue::from(n as i64);
    }
    serde_json::Number::from_f64(n)
        .map(SerdeValue::Number)
        .unwrap_or(SerdeValue::Null)
}

/// Serializes a [`Value`] as JSON text.
pub fn to_json_string(value: &Value, pretty: bool) -> Result<String> {
    let serde_value = to_serde_value(value);
    let text = if pretty {
        serde_json::to_string_pretty(&serde_value)
    } else {
        serde_json::to_string(&serde_value)
    };
    text.context("Failed to serialize JSON")
}
