//! Schema inference over JSON values
//!
//! The inference pipeline: dot-path resolution into a sub-value, leaf
//! classification via ordered heuristics, recursive schema construction
//! over objects/arrays, and projection into relational columns.
//!
//! Everything here is pure, synchronous computation over an in-memory
//! value; it never fails on malformed input, degrading to empty schemas
//! instead.

mod classify;
mod inference;
mod path;
mod table;
mod types;

pub use classify::{classify, classify_value, scalar_text};
pub use inference::{infer_schema, infer_schema_opt};
pub use path::{first_record, resolve};
pub use table::{relational_type, to_table};
pub use types::{ColumnSchema, Definition, FieldType, NumberKind, Schema, TableSchema, TemporalKind};

#[cfg(test)]
mod tests;
