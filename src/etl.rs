//! Pipeline configuration store
//!
//! Pipelines live as JSON files under a configured directory, one file per
//! pipeline id. Loading resolves `<dir>/<id>.json`, parses it, and hands
//! back the typed configuration; fetching delegates to the pipeline's
//! source adapter.

use crate::error::{Error, Result};
use crate::http::HttpClient;
use crate::source::{parse_pipeline, PipelineConfig};
use crate::types::JsonValue;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File-backed store of pipeline configurations
#[derive(Debug, Clone)]
pub struct EtlStore {
    dir: PathBuf,
}

impl EtlStore {
    /// Create a store over the given directory
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory this store reads from
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Load a pipeline configuration by id.
    ///
    /// A missing or unreadable file is `PipelineNotFound`; a file that
    /// parses badly is a configuration error.
    pub async fn load(&self, pipeline_id: &str) -> Result<PipelineConfig> {
        let path = self.dir.join(format!("{pipeline_id}.json"));
        debug!("Loading pipeline config from {}", path.display());

        let text = tokio::fs::read_to_string(&path)
            .await
            .map_err(|_| Error::pipeline_not_found(pipeline_id))?;

        parse_pipeline(&text)
    }

    /// Load a pipeline and fetch its source records
    pub async fn fetch(&self, pipeline_id: &str, client: &HttpClient) -> Result<JsonValue> {
        let config = self.load(pipeline_id).await?;
        config.fetch_records(client).await
    }
}
