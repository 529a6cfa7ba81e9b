mod trends;

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use nichepulse_pipeline::{BackendCorpus, PipelineError, TrendPipeline};
use nichepulse_sources::{NicheClient, SnippetClient, SourceError};

use crate::middleware::{request_id, RequestId};

/// The fully wired pipeline type served by this process.
pub type AppPipeline = TrendPipeline<BackendCorpus, SnippetClient, NicheClient>;

#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<AppPipeline>,
    /// Separate snippet client for the conversation passthrough, with the
    /// longer backend timeout rather than the per-item enrichment deadline.
    pub conversation: Arc<SnippetClient>,
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: ErrorBody,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
}

impl ResponseMeta {
    pub(super) fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
        }
    }
}

impl ApiError {
    pub fn new(
        request_id: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
            },
            meta: ResponseMeta::new(request_id.into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.error.code.as_str() {
            "no_data" => StatusCode::NOT_FOUND,
            "bad_request" | "validation_error" => StatusCode::BAD_REQUEST,
            "upstream_error" => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

/// Map a pipeline failure onto the API error envelope.
///
/// Only the two genuinely fatal modes reach here — everything else is
/// recovered inside the pipeline.
pub(super) fn map_pipeline_error(request_id: String, error: &PipelineError) -> ApiError {
    match error {
        PipelineError::EmptyCorpus => {
            tracing::warn!("analyze request found no corpus data");
            ApiError::new(
                request_id,
                "no_data",
                "no trend data is available right now, try again shortly",
            )
        }
        PipelineError::Source(source) => {
            tracing::error!(error = %source, "upstream fetch failed before scoring");
            ApiError::new(request_id, "upstream_error", "trend backend unavailable")
        }
    }
}

pub(super) fn map_source_error(request_id: String, error: &SourceError) -> ApiError {
    tracing::error!(error = %error, "conversation fetch failed");
    ApiError::new(request_id, "upstream_error", "conversation backend unavailable")
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static("x-request-id"),
        ])
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/v1/trends/analyze", post(trends::analyze_trends))
        .route("/api/v1/trends/conversation", get(trends::get_conversation))
        .layer(
            ServiceBuilder::new()
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health(
    State(_state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(ApiResponse {
            data: HealthData { status: "ok" },
            meta: ResponseMeta::new(req_id.0),
        }),
    )
}
