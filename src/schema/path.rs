//! Dot-path resolution into a JSON value
//!
//! Extracts a sub-value given a path like `"a.b.c"`, tolerant of arrays:
//! a numeric segment indexes into a sequence, while a non-numeric segment
//! descends into the first element and re-applies the remaining segments,
//! so arrays of records are transparently unwrapped. Malformed or missing
//! paths degrade to `None` rather than failing.

use crate::types::JsonValue;

/// Resolve `path` against `value`, returning the addressed sub-value.
///
/// An empty path returns the input unchanged. Any missing key, out-of-range
/// index, or traversal through a non-container yields `None`.
pub fn resolve<'a>(value: &'a JsonValue, path: &str) -> Option<&'a JsonValue> {
    let segments: Vec<&str> = path.split('.').filter(|s| !s.is_empty()).collect();
    if segments.is_empty() {
        return Some(value);
    }
    resolve_segments(value, &segments)
}

fn resolve_segments<'a>(value: &'a JsonValue, segments: &[&str]) -> Option<&'a JsonValue> {
    let mut current = value;
    for (i, segment) in segments.iter().enumerate() {
        if let JsonValue::Array(items) = current {
            return resolve_array(items, &segments[i..]);
        }
        current = current.as_object()?.get(*segment)?;
    }
    Some(current)
}

fn resolve_array<'a>(items: &'a [JsonValue], segments: &[&str]) -> Option<&'a JsonValue> {
    match segments[0].parse::<usize>() {
        Ok(index) => resolve_segments(items.get(index)?, &segments[1..]),
        Err(_) => resolve_segments(items.first()?, segments),
    }
}

/// Unwrap nested sequences down to their first element.
///
/// Used to sample one representative record from array-shaped data; `None`
/// when an empty sequence is hit along the way.
pub fn first_record(value: &JsonValue) -> Option<&JsonValue> {
    let mut current = value;
    while let JsonValue::Array(items) = current {
        current = items.first()?;
    }
    Some(current)
}
