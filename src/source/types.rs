//! Pipeline configuration types
//!
//! These mirror the on-disk pipeline JSON: a source (where records come
//! from) and a target (the table they load into). The source is a closed
//! tagged union dispatched on the `type` discriminant; an unrecognized
//! discriminant fails deserialization, so bad configurations are rejected
//! at load time rather than at fetch time.

use crate::types::{Method, StringMap};
use serde::{Deserialize, Serialize};

/// A complete pipeline configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Where records are fetched from
    pub source: SourceConfig,

    /// Where records are loaded to
    pub target: TargetConfig,
}

/// Record source, discriminated on `type`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SourceConfig {
    /// HTTP API source
    Api {
        /// Connection details for the API
        connection: ApiConnection,

        /// Post-extraction scripts (names only, applied downstream)
        #[serde(default)]
        scripts: Vec<String>,
    },

    /// Database source. Deliberately unimplemented: fetching from it is an
    /// explicit error, never a silent empty record set.
    Database {
        /// Connection details for the database
        connection: DatabaseConnection,

        /// Post-extraction scripts (names only, applied downstream)
        #[serde(default)]
        scripts: Vec<String>,
    },
}

impl SourceConfig {
    /// The configuration discriminant for this source
    pub fn kind(&self) -> &'static str {
        match self {
            SourceConfig::Api { .. } => "api",
            SourceConfig::Database { .. } => "database",
        }
    }
}

/// HTTP API connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConnection {
    /// Base address of the API endpoint
    pub url: String,

    /// HTTP method to use
    #[serde(default)]
    pub method: Method,

    /// Headers sent with the request
    #[serde(default)]
    pub headers: StringMap,

    /// Optional query parameters appended to the URL
    #[serde(default)]
    pub params: Option<StringMap>,
}

/// Database connection settings (carried but not yet consumed)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConnection {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub user: String,
    pub password: String,
}

/// Load target: table name, the path records live under, and the columns
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetConfig {
    /// Destination table name
    pub table: String,

    /// Dot-path to the records inside the fetched document
    pub results_path: String,

    /// Column mappings for the destination table
    #[serde(default)]
    pub columns: Vec<ColumnConfig>,
}

/// One column mapping in the target table
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnConfig {
    /// Destination column name
    pub target: String,

    /// Source key the column is filled from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Relational type of the column
    pub db_type: String,

    /// Custom extraction query, overriding `source`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_query: Option<String>,

    /// Default value when the source key is absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,

    /// Whether the column admits NULL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_nullable: Option<bool>,
}

/// Source discriminant used by ad-hoc requests that carry only a URI and a
/// kind, without a full pipeline configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Api,
    Database,
}
