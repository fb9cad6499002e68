//! Source adapter
//!
//! Polymorphic record fetch over externally supplied configuration. The
//! two variants (`api`, `database`) form a closed tagged union; dispatch
//! happens on the configuration discriminant, and an unrecognized
//! discriminant is rejected when the configuration is parsed.

mod adapter;
mod types;

pub use adapter::parse_pipeline;
pub use types::{
    ApiConnection, ColumnConfig, DatabaseConnection, PipelineConfig, SourceConfig, SourceKind,
    TargetConfig,
};
