//! HTTP server mode for REST API access to schema inference
//!
//! Routes mirror the service surface: ad-hoc inference over a posted JSON
//! body, schema discovery for remote data sources, and read access to
//! configured ETL pipelines. Inference routes require the `tenant` header
//! to match the admin tenant from [`Settings`]; the token is injected at
//! startup, never read from a global.

use axum::{
    extract::{Query, Request, State},
    http::{HeaderValue, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::config::Settings;
use crate::error::{Error, Result};
use crate::etl::EtlStore;
use crate::http::HttpClient;
use crate::schema::{first_record, infer_schema, infer_schema_opt, resolve, to_table};
use crate::source::SourceKind;
use crate::types::{JsonObject, JsonValue, OptionStringExt};

/// App state shared across handlers
pub struct AppState {
    /// Runtime settings, loaded once at startup
    pub settings: Settings,
    /// Client used for upstream fetches
    pub client: HttpClient,
    /// Pipeline configuration store
    pub etl: EtlStore,
}

impl AppState {
    /// Build the state from settings
    pub fn new(settings: Settings) -> Self {
        let etl = EtlStore::new(settings.etl_dir.clone());
        Self {
            settings,
            client: HttpClient::new(),
            etl,
        }
    }
}

/// Query parameters for `/schema`
#[derive(Debug, Deserialize)]
struct SchemaQuery {
    /// Dot-path narrowing the inspection
    #[serde(default)]
    path: String,

    /// Project the schema into relational columns
    #[serde(rename = "toDB", default)]
    to_db: bool,
}

/// Request body for `/etl-creator`
#[derive(Debug, Deserialize)]
struct EtlCreatorRequest {
    /// Address of the document to fetch
    uri: String,

    /// Dot-path to the records of interest
    #[serde(default)]
    path: String,
}

/// Request body for `/datasource`
#[derive(Debug, Deserialize)]
struct DatasourceRequest {
    /// Address of the source
    uri: String,

    /// Source discriminant
    #[serde(rename = "type")]
    kind: SourceKind,
}

/// Query parameters for the `/etl/*` routes
#[derive(Debug, Deserialize)]
struct PipelineQuery {
    #[serde(rename = "pipelineId")]
    pipeline_id: Option<String>,
}

/// Start the HTTP server
pub async fn serve(settings: Settings) -> Result<()> {
    let port = settings.port;
    let state = Arc::new(AppState::new(settings));
    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Starting HTTP server on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| Error::config(format!("Failed to bind to port {port}: {e}")))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| Error::config(format!("Server error: {e}")))?;

    Ok(())
}

/// Build the router. Split out from [`serve`] so tests can drive the
/// routes over an ephemeral listener.
pub fn router(state: Arc<AppState>) -> Router {
    let protected = Router::new()
        .route("/schema", post(schema))
        .route("/etl-creator", post(etl_creator))
        .route("/datasource", post(datasource))
        .route("/etl/config", get(etl_config))
        .route("/etl/data", get(etl_data))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_tenant,
        ));

    let cors = cors_layer(state.settings.cors_origin.as_deref());

    Router::new()
        .route("/healthcheck", get(healthcheck))
        .merge(protected)
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

fn cors_layer(origin: Option<&str>) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    match origin.and_then(|o| o.parse::<HeaderValue>().ok()) {
        Some(origin) => cors.allow_origin(origin),
        None => cors.allow_origin(Any),
    }
}

/// Reject requests whose `tenant` header does not match the configured
/// admin tenant
async fn require_tenant(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    let tenant = request
        .headers()
        .get("tenant")
        .and_then(|value| value.to_str().ok());

    if tenant != Some(state.settings.admin_tenant.as_str()) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"error": "Unauthorized"})),
        )
            .into_response();
    }

    next.run(request).await
}

/// Health check endpoint
async fn healthcheck() -> impl IntoResponse {
    Json(json!({"status": "alive"}))
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({"error": "Not found"})))
}

/// Infer the type schema of a posted JSON body
async fn schema(Query(query): Query<SchemaQuery>, body: Option<Json<JsonValue>>) -> Response {
    let Some(Json(data)) = body else {
        return missing_body();
    };

    let narrowed = resolve(&data, &query.path);
    let schema = infer_schema_opt(narrowed, &query.path);

    if query.to_db {
        Json(to_table(Some(&schema))).into_response()
    } else {
        Json(schema).into_response()
    }
}

/// Fetch a document, sample one record at the requested path, and return
/// the sample alongside its inferred schema
async fn etl_creator(
    State(state): State<Arc<AppState>>,
    body: Option<Json<EtlCreatorRequest>>,
) -> Response {
    let Some(Json(request)) = body else {
        return missing_body();
    };

    let document: JsonValue = match state.client.get_json(&request.uri).await {
        Ok(value) => value,
        Err(e) => return fetch_failed(&e),
    };

    let Some(sampled) = resolve(&document, &request.path).and_then(first_record) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Data not found"})),
        )
            .into_response();
    };

    // A scalar sample is re-keyed under the last path segment so its
    // definition keeps a meaningful name.
    let data = wrap_scalar(sampled.clone(), &request.path);
    let schema = infer_schema(&data, &request.path);

    Json(json!({"data": data, "schema": schema})).into_response()
}

/// Fetch a source's records and return them with their inferred schema
async fn datasource(
    State(state): State<Arc<AppState>>,
    body: Option<Json<JsonValue>>,
) -> Response {
    let Some(Json(raw)) = body else {
        return missing_body();
    };

    let request: DatasourceRequest = match serde_json::from_value(raw) {
        Ok(request) => request,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({"error": format!("Invalid datasource request: {e}")})),
            )
                .into_response()
        }
    };

    match request.kind {
        SourceKind::Api => match state.client.get_json::<JsonValue>(&request.uri).await {
            Ok(data) => {
                let schema = infer_schema(&data, "");
                Json(json!({"data": data, "schema": schema})).into_response()
            }
            Err(e) => fetch_failed(&e),
        },
        SourceKind::Database => (
            StatusCode::NOT_IMPLEMENTED,
            Json(json!({"error": Error::unsupported_source("database").to_string()})),
        )
            .into_response(),
    }
}

/// Return a pipeline's configuration
async fn etl_config(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PipelineQuery>,
) -> Response {
    let Some(pipeline_id) = query.pipeline_id.none_if_empty() else {
        return missing_pipeline_id();
    };

    match state.etl.load(&pipeline_id).await {
        Ok(config) => Json(json!({"data": config})).into_response(),
        Err(e) => pipeline_error(&e, &pipeline_id),
    }
}

/// Fetch a pipeline's source records
async fn etl_data(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PipelineQuery>,
) -> Response {
    let Some(pipeline_id) = query.pipeline_id.none_if_empty() else {
        return missing_pipeline_id();
    };

    match state.etl.fetch(&pipeline_id, &state.client).await {
        Ok(records) => Json(json!({"data": records})).into_response(),
        Err(e) => pipeline_error(&e, &pipeline_id),
    }
}

fn wrap_scalar(value: JsonValue, path: &str) -> JsonValue {
    if value.is_object() || value.is_array() {
        return value;
    }

    let key = path.rsplit('.').next().unwrap_or_default();
    if key.is_empty() {
        return value;
    }

    let mut map = JsonObject::new();
    map.insert(key.to_string(), value);
    JsonValue::Object(map)
}

fn missing_body() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({"error": "Missing request body"})),
    )
        .into_response()
}

fn missing_pipeline_id() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({"error": "Missing pipelineId"})),
    )
        .into_response()
}

/// Fetch failures are reported, not collapsed into "no data"
fn fetch_failed(error: &Error) -> Response {
    warn!("Upstream fetch failed: {error}");
    (
        StatusCode::BAD_GATEWAY,
        Json(json!({"error": error.to_string()})),
    )
        .into_response()
}

fn pipeline_error(error: &Error, pipeline_id: &str) -> Response {
    let status = match error {
        Error::PipelineNotFound { .. } => StatusCode::NOT_FOUND,
        Error::UnsupportedSource { .. } => StatusCode::NOT_IMPLEMENTED,
        e if e.is_config() => StatusCode::BAD_REQUEST,
        _ => StatusCode::BAD_GATEWAY,
    };

    (
        status,
        Json(json!({"error": error.to_string(), "pipelineId": pipeline_id})),
    )
        .into_response()
}
