//! Relational projection of an inferred schema
//!
//! Projects the top-level leaves of a schema into a flat column list for
//! table creation. Nested `object`/`array` definitions are dropped, not
//! flattened.

use super::types::{ColumnSchema, Schema, TableSchema};

/// Fixed mapping from a leaf refinement label to its relational type.
/// `char` is reachable only through externally authored definitions.
pub fn relational_type(label: &str) -> Option<&'static str> {
    match label {
        "string" => Some("TEXT"),
        "char" => Some("VARCHAR(255)"),
        "int" => Some("INT"),
        "float" => Some("FLOAT"),
        "boolean" => Some("BOOLEAN"),
        "date" => Some("DATE"),
        "time" => Some("TIME"),
        "datetime" => Some("TIMESTAMP"),
        _ => None,
    }
}

/// Project a schema into a relational table description.
///
/// `None` yields the empty projection `{name: "", columns: []}`. Column
/// order follows definition order.
pub fn to_table(schema: Option<&Schema>) -> TableSchema {
    let Some(schema) = schema else {
        return TableSchema::default();
    };

    let columns = schema
        .definitions
        .iter()
        .filter_map(|definition| {
            definition
                .field_type
                .leaf_label()
                .and_then(relational_type)
                .map(|sql| ColumnSchema::new(definition.key.clone(), sql))
        })
        .collect();

    TableSchema {
        name: schema.table.clone(),
        columns,
    }
}
