//! Record fetching for configured sources

use super::types::{ApiConnection, PipelineConfig, SourceConfig};
use crate::error::{Error, Result};
use crate::http::{HttpClient, RequestConfig};
use crate::types::JsonValue;
use tracing::debug;
use url::Url;

/// Parse a pipeline configuration from its JSON text.
///
/// An unknown source discriminant or a malformed document is a
/// configuration error here, at load time.
pub fn parse_pipeline(data: &str) -> Result<PipelineConfig> {
    serde_json::from_str(data)
        .map_err(|e| Error::config(format!("Invalid pipeline configuration: {e}")))
}

impl SourceConfig {
    /// Fetch the source's record set as a JSON value.
    ///
    /// Fetch failures surface as errors; callers distinguish "fetch
    /// failed" from "data legitimately absent" instead of collapsing both
    /// to null.
    pub async fn fetch_records(&self, client: &HttpClient) -> Result<JsonValue> {
        match self {
            SourceConfig::Api { connection, .. } => fetch_api_records(client, connection).await,
            SourceConfig::Database { .. } => Err(Error::unsupported_source(self.kind())),
        }
    }
}

impl PipelineConfig {
    /// Fetch records from this pipeline's source
    pub async fn fetch_records(&self, client: &HttpClient) -> Result<JsonValue> {
        self.source.fetch_records(client).await
    }
}

async fn fetch_api_records(client: &HttpClient, connection: &ApiConnection) -> Result<JsonValue> {
    let mut url = Url::parse(&connection.url)?;

    if let Some(params) = &connection.params {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in params {
            pairs.append_pair(key, value);
        }
    }

    debug!("Fetching records from {url}");

    let mut request = RequestConfig::new();
    request.headers = connection.headers.clone();

    client
        .request_json(connection.method.into(), url.as_str(), request)
        .await
}
