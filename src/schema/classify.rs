//! Leaf type classification
//!
//! Maps a scalar's text form to a [`FieldType`] through ordered pattern
//! checks. Temporal patterns run first: digit-heavy values like
//! `"2024-01-01"` would otherwise be captured by the numeric check, and the
//! boolean literals `"0"`/`"1"` by the numeric one, so the order is
//! temporal, boolean, numeric, string.

use super::types::{FieldType, NumberKind, TemporalKind};
use crate::types::JsonValue;
use once_cell::sync::Lazy;
use regex::Regex;

static TIME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{2}:\d{2}(:\d{2})?$").expect("valid pattern"));

static DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4}-\d{2}-\d{2}|\d{2}-\d{2}-\d{4})$").expect("valid pattern"));

// Date + literal 'T' + time, optionally with a fractional-seconds zone
// suffix, in either date form.
static DATETIME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{4}-\d{2}-\d{2}|\d{2}-\d{2}-\d{4})T\d{2}:\d{2}:\d{2}(\.\d{6}Z)?$")
        .expect("valid pattern")
});

static BOOLEAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?i)(true|false|0|1)$").expect("valid pattern"));

static NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?\d+([.,]\d+)?$").expect("valid pattern"));

/// Classify a scalar's text form into a leaf [`FieldType`].
///
/// First match wins; anything unrecognized is a string.
pub fn classify(value: &str) -> FieldType {
    if TIME.is_match(value) {
        return FieldType::Date(TemporalKind::Time);
    }
    if DATE.is_match(value) {
        return FieldType::Date(TemporalKind::Date);
    }
    if DATETIME.is_match(value) {
        return FieldType::Date(TemporalKind::Datetime);
    }
    if BOOLEAN.is_match(value) {
        return FieldType::Boolean;
    }
    if NUMBER.is_match(value) {
        // Both '.' and ',' count as fractional markers, with no locale or
        // thousands-separator handling: "1,000" classifies as a float.
        return if value.contains('.') || value.contains(',') {
            FieldType::Number(NumberKind::Float)
        } else {
            FieldType::Number(NumberKind::Int)
        };
    }
    FieldType::String
}

/// Consistent text form of a scalar JSON value.
///
/// Strings yield their content; booleans, numbers, and null their canonical
/// JSON text (`true`, `3.14`, `null`).
pub fn scalar_text(value: &JsonValue) -> String {
    match value {
        JsonValue::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Classify a scalar JSON value.
///
/// Native booleans and numbers already carry their type; only the
/// int-vs-float split runs on the canonical text, consistent with the
/// string heuristics. String and null values go through the full ordered
/// pipeline, so `"1"` is a boolean while a native `1` stays a number.
pub fn classify_value(value: &JsonValue) -> FieldType {
    match value {
        JsonValue::Bool(_) => FieldType::Boolean,
        JsonValue::Number(n) => {
            if n.to_string().contains('.') {
                FieldType::Number(NumberKind::Float)
            } else {
                FieldType::Number(NumberKind::Int)
            }
        }
        other => classify(&scalar_text(other)),
    }
}
