use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::{Deserialize, Serialize};

use nichepulse_core::types::Snippet;
use nichepulse_pipeline::AnalyzeOutcome;
use nichepulse_relevance::NicheProfile;

use crate::middleware::RequestId;

use super::{map_pipeline_error, map_source_error, ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Deserialize)]
pub(super) struct AnalyzeRequest {
    pub keywords: Vec<String>,
    /// Optional pre-extracted profile fields. When any is supplied the
    /// niche provider is skipped and the profile is built from the request.
    #[serde(default)]
    pub match_phrases: Vec<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub exclude_terms: Vec<String>,
    pub description: Option<String>,
}

impl AnalyzeRequest {
    fn carries_profile(&self) -> bool {
        !self.match_phrases.is_empty()
            || !self.categories.is_empty()
            || !self.exclude_terms.is_empty()
            || self.description.is_some()
    }
}

pub(super) async fn analyze_trends(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<ApiResponse<AnalyzeOutcome>>, ApiError> {
    let keywords: Vec<String> = request
        .keywords
        .iter()
        .map(|k| k.trim().to_owned())
        .filter(|k| !k.is_empty())
        .collect();
    if keywords.is_empty() {
        return Err(ApiError::new(
            req_id.0,
            "validation_error",
            "at least one non-empty keyword is required",
        ));
    }

    let outcome = if request.carries_profile() {
        let profile = NicheProfile::new(
            &keywords,
            request.match_phrases,
            request.categories,
            request.exclude_terms,
        );
        let description = request
            .description
            .unwrap_or_else(|| keywords.join(", "));
        state
            .pipeline
            .analyze_with_profile(profile, description)
            .await
    } else {
        state.pipeline.analyze(&keywords).await
    }
    .map_err(|e| map_pipeline_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse {
        data: outcome,
        meta: ResponseMeta::new(req_id.0),
    }))
}

#[derive(Debug, Deserialize)]
pub(super) struct ConversationQuery {
    pub url: String,
    pub amount: Option<usize>,
}

#[derive(Debug, Serialize)]
pub(super) struct ConversationData {
    pub snippets: Vec<Snippet>,
    pub count: usize,
}

pub(super) async fn get_conversation(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<ConversationQuery>,
) -> Result<Json<ApiResponse<ConversationData>>, ApiError> {
    if query.url.trim().is_empty() {
        return Err(ApiError::new(
            req_id.0,
            "validation_error",
            "url parameter is required",
        ));
    }
    let amount = query.amount.unwrap_or(15).clamp(1, 50);

    let snippets = state
        .conversation
        .top_comments(&query.url, amount)
        .await
        .map_err(|e| map_source_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse {
        data: ConversationData {
            count: snippets.len(),
            snippets,
        },
        meta: ResponseMeta::new(req_id.0),
    }))
}
