//! HTTP client for the niche-profile extraction endpoint.
//!
//! The generative extraction itself lives behind the backend; this client
//! only ships keywords over and reads the structured profile back. Callers
//! are expected to fall back to a degraded profile when this provider
//! fails — an extraction failure is never fatal to a ranking pass.

use reqwest::{Client, Url};

use crate::backend::{build_http_client, join_endpoint, parse_base_url, parse_envelope};
use crate::error::SourceError;
use crate::types::{NicheAnalysis, NicheAnalysisResponse};

/// Client for `POST /niche/analyze`.
pub struct NicheClient {
    client: Client,
    base_url: Url,
}

impl NicheClient {
    /// Creates a new client. Point `base_url` at a mock server in tests.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`SourceError::Api`] if `base_url` is not
    /// a valid URL.
    pub fn new(base_url: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, SourceError> {
        Ok(Self {
            client: build_http_client(timeout_secs, user_agent)?,
            base_url: parse_base_url(base_url)?,
        })
    }

    /// Extracts a structured niche profile from raw keywords.
    ///
    /// # Errors
    ///
    /// - [`SourceError::Http`] on network failure.
    /// - [`SourceError::Api`] on a non-2xx status or a `success: false`
    ///   envelope.
    /// - [`SourceError::Deserialize`] if the body doesn't match the
    ///   expected shape.
    pub async fn extract(&self, keywords: &[String]) -> Result<NicheAnalysis, SourceError> {
        let url = join_endpoint(&self.base_url, "niche/analyze")?;
        let response = self
            .client
            .post(url)
            .json(&serde_json::json!({ "keywords": keywords }))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(SourceError::Api(format!(
                "niche/analyze failed with status {}",
                response.status()
            )));
        }

        let body = response.json::<serde_json::Value>().await?;
        let envelope: NicheAnalysisResponse = parse_envelope(body, "niche/analyze")?;
        if !envelope.success {
            return Err(SourceError::Api(
                "niche/analyze reported failure".to_owned(),
            ));
        }

        Ok(NicheAnalysis::from(envelope))
    }
}
