//! # Schemascope
//!
//! A Rust-native service that discovers, from an arbitrary JSON value, a
//! structural description of its shape: which keys exist, their nesting,
//! and an inferred primitive type for every leaf (string, number, boolean,
//! or a temporal subtype). An optional dot-path narrows inspection to a
//! sub-structure before inference, and the inferred schema can be projected
//! into a flat relational column list for table creation.
//!
//! ## Quick start
//!
//! ```rust
//! use schemascope::schema::{infer_schema, resolve, to_table};
//! use serde_json::json;
//!
//! let document = json!({"data": {"users": [{"id": 1, "name": "Ada"}]}});
//!
//! let narrowed = resolve(&document, "data.users").unwrap();
//! let schema = infer_schema(narrowed, "data.users");
//! assert_eq!(schema.table, "users");
//!
//! let table = to_table(Some(&schema));
//! assert_eq!(table.name, "users");
//! ```
//!
//! ## Architecture
//!
//! ```text
//! request body ──┐
//!                ├─▶ Path Resolver ─▶ Schema Builder ─▶ Table Mapper ─▶ response
//! Source Adapter ┘        │                 │
//!   (api | database)      └── optional ─────┴── uses the Type Classifier
//! ```
//!
//! Inference is pure, synchronous computation with no shared state; the
//! only suspending operation is the source adapter's fetch.

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Common types and type aliases
pub mod types;

/// Process-wide settings
pub mod config;

/// Schema inference from JSON data
pub mod schema;

/// HTTP client
pub mod http;

/// Source adapter: record fetch over configured sources
pub mod source;

/// Pipeline configuration store
pub mod etl;

/// HTTP server mode
pub mod server;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

pub use schema::{infer_schema, resolve, to_table, Definition, FieldType, Schema, TableSchema};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
