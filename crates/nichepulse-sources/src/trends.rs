//! HTTP client for the trend-corpus endpoints of the backend service.
//!
//! Wraps `reqwest` with typed response envelopes and API-level status
//! checking. Both endpoints honor the `fresh` flag, which asks the backend
//! to bypass its cache.

use reqwest::{Client, Url};

use nichepulse_core::types::TrendItem;

use crate::backend::{build_http_client, get_json, join_endpoint, parse_base_url, parse_envelope};
use crate::error::SourceError;
use crate::types::{RedditPostWire, RedditTrendsResponse, SearchTrendWire, SearchTrendsResponse};

/// Client for the corpus half of the trends backend.
pub struct TrendsClient {
    client: Client,
    base_url: Url,
}

impl TrendsClient {
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

    /// Fetches social posts from the given subreddits.
    ///
    /// Posts without a usable title are dropped; other missing fields read
    /// as zero/empty.
    ///
    /// # Errors
    ///
    /// - [`SourceError::Http`] on network failure.
    /// - [`SourceError::Api`] on a non-2xx status or a `success: false`
    ///   envelope.
    /// - [`SourceError::Deserialize`] if the body doesn't match the
    ///   expected shape.
    pub async fn fetch_reddit_posts(
        &self,
        subreddits: &[String],
        limit: usize,
        fresh: bool,
    ) -> Result<Vec<TrendItem>, SourceError> {
        let url = join_endpoint(&self.base_url, "trends/reddit")?;
        let query = [
            ("subreddits", subreddits.join(",")),
            ("limit", limit.to_string()),
            ("fresh", fresh.to_string()),
        ];
        let body = get_json(&self.client, url, &query, "trends/reddit").await?;
        let envelope: RedditTrendsResponse = parse_envelope(body, "trends/reddit")?;
        if !envelope.success {
            return Err(SourceError::Api(
                "trends/reddit reported failure".to_owned(),
            ));
        }

        let items: Vec<TrendItem> = envelope
            .posts
            .into_iter()
            .filter_map(RedditPostWire::into_item)
            .collect();
        tracing::debug!(count = items.len(), fresh, "fetched reddit corpus items");
        Ok(items)
    }

    /// Fetches search-trend entries.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`Self::fetch_reddit_posts`].
    pub async fn fetch_search_trends(
        &self,
        limit: usize,
        fresh: bool,
    ) -> Result<Vec<TrendItem>, SourceError> {
        let url = join_endpoint(&self.base_url, "trends/google")?;
        let query = [("limit", limit.to_string()), ("fresh", fresh.to_string())];
        let body = get_json(&self.client, url, &query, "trends/google").await?;
        let envelope: SearchTrendsResponse = parse_envelope(body, "trends/google")?;
        if !envelope.success {
            return Err(SourceError::Api(
                "trends/google reported failure".to_owned(),
            ));
        }

        let items: Vec<TrendItem> = envelope
            .trends
            .into_iter()
            .filter_map(SearchTrendWire::into_item)
            .collect();
        tracing::debug!(count = items.len(), fresh, "fetched search trend items");
        Ok(items)
    }
}
