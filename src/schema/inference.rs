//! Schema construction from JSON values
//!
//! Recursively walks a (possibly path-narrowed) value, classifying leaves
//! and descending into containers. Non-empty sequences are described by
//! their first element only; remaining elements are never inspected.

use super::classify::{classify_value, scalar_text};
use super::types::{Definition, FieldType, Schema};
use crate::types::{JsonObject, JsonValue};

/// Key used for array-element definitions, which have no source key
const ELEMENT_KEY: &str = "";

/// Infer a schema for `value` as addressed by `path`.
///
/// The path only names where the value came from; resolution happens
/// before this call. `table` is derived as the last path segment.
pub fn infer_schema(value: &JsonValue, path: &str) -> Schema {
    Schema {
        table: table_name(path),
        definitions: definitions(value),
        path: path.to_string(),
    }
}

/// Infer a schema for a value that may be absent (e.g. a failed path
/// resolution). Absent values produce an empty definition list.
pub fn infer_schema_opt(value: Option<&JsonValue>, path: &str) -> Schema {
    match value {
        Some(value) => infer_schema(value, path),
        None => Schema {
            table: table_name(path),
            definitions: Vec::new(),
            path: path.to_string(),
        },
    }
}

fn table_name(path: &str) -> String {
    path.rsplit('.').next().unwrap_or_default().to_string()
}

fn definitions(value: &JsonValue) -> Vec<Definition> {
    match value {
        JsonValue::Null => Vec::new(),
        JsonValue::Object(map) => object_definitions(map),
        JsonValue::Array(items) if items.is_empty() => Vec::new(),
        JsonValue::Array(items) => vec![Definition::new(ELEMENT_KEY, array_type(items))],
        scalar => vec![Definition::new(scalar_text(scalar), classify_value(scalar))],
    }
}

/// One definition per own key, in source key order. Repeated source keys
/// collapse last-wins at parse time.
fn object_definitions(map: &JsonObject) -> Vec<Definition> {
    map.iter()
        .map(|(key, value)| {
            let field_type = match value {
                JsonValue::Array(items) => array_type(items),
                JsonValue::Object(inner) => FieldType::Object(object_definitions(inner)),
                scalar => classify_value(scalar),
            };
            Definition::new(key.clone(), field_type)
        })
        .collect()
}

fn array_type(items: &[JsonValue]) -> FieldType {
    FieldType::Array(element_definitions(items))
}

/// Describe a sequence by its first element: nested sequences produce an
/// array-of-array type, records contribute their own definitions, and
/// scalars a single synthetic-key leaf.
fn element_definitions(items: &[JsonValue]) -> Vec<Definition> {
    match items.first() {
        None => Vec::new(),
        Some(JsonValue::Array(inner)) => vec![Definition::new(ELEMENT_KEY, array_type(inner))],
        Some(JsonValue::Object(map)) => object_definitions(map),
        Some(scalar) => vec![Definition::new(ELEMENT_KEY, classify_value(scalar))],
    }
}
