//! Schema types

use serde::{Deserialize, Serialize};

/// Numeric refinement for a leaf value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberKind {
    Int,
    Float,
}

/// Temporal refinement for a leaf value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemporalKind {
    Date,
    Time,
    Datetime,
}

/// Inferred type of a value.
///
/// Serializes as `{"name": <tag>, "precision": <content>}`. Leaf variants
/// carry their refinement as the precision; `Object`/`Array` carry the
/// nested definition list there instead. The nesting is always a tree,
/// never a graph with back-edges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "name", content = "precision", rename_all = "lowercase")]
pub enum FieldType {
    String,
    Number(NumberKind),
    Boolean,
    Date(TemporalKind),
    Object(Vec<Definition>),
    Array(Vec<Definition>),
}

impl FieldType {
    /// Check if this is a leaf type (no nested definitions)
    pub fn is_leaf(&self) -> bool {
        !matches!(self, FieldType::Object(_) | FieldType::Array(_))
    }

    /// Refinement label of a leaf type, used by the relational mapping.
    /// `None` for `Object`/`Array`.
    pub fn leaf_label(&self) -> Option<&'static str> {
        match self {
            FieldType::String => Some("string"),
            FieldType::Number(NumberKind::Int) => Some("int"),
            FieldType::Number(NumberKind::Float) => Some("float"),
            FieldType::Boolean => Some("boolean"),
            FieldType::Date(TemporalKind::Date) => Some("date"),
            FieldType::Date(TemporalKind::Time) => Some("time"),
            FieldType::Date(TemporalKind::Datetime) => Some("datetime"),
            FieldType::Object(_) | FieldType::Array(_) => None,
        }
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldType::String => write!(f, "string"),
            FieldType::Number(_) => write!(f, "number"),
            FieldType::Boolean => write!(f, "boolean"),
            FieldType::Date(_) => write!(f, "date"),
            FieldType::Object(_) => write!(f, "object"),
            FieldType::Array(_) => write!(f, "array"),
        }
    }
}

/// A `(key, type)` pair describing one property of a schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Definition {
    /// Source key, in source order. Synthetic (empty) for array elements.
    pub key: String,

    /// Inferred type of the value under `key`
    #[serde(rename = "type")]
    pub field_type: FieldType,
}

impl Definition {
    /// Create a new definition
    pub fn new(key: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            key: key.into(),
            field_type,
        }
    }
}

/// An inferred schema: ordered definitions plus the originating path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    /// Derived table name: the last segment of `path` (empty at root)
    pub table: String,

    /// One definition per top-level property, in source order
    pub definitions: Vec<Definition>,

    /// The dot-path this schema was inferred at
    pub path: String,
}

impl Schema {
    /// Check if the schema carries no inferable structure
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

/// Flat relational projection of a schema's top-level leaves
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableSchema {
    /// Table name, taken from the schema's `table`
    pub name: String,

    /// One column per leaf definition, in definition order
    pub columns: Vec<ColumnSchema>,
}

/// A single relational column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSchema {
    /// Column name, taken from the definition key
    pub name: String,

    /// Relational type (e.g. `TEXT`, `INT`, `TIMESTAMP`)
    #[serde(rename = "type")]
    pub column_type: String,

    /// Optional column default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

impl ColumnSchema {
    /// Create a new column with no default
    pub fn new(name: impl Into<String>, column_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            column_type: column_type.into(),
            default: None,
        }
    }
}
