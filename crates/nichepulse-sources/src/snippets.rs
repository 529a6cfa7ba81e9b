//! HTTP client for conversation snippets: tweet search and post comments.

use reqwest::{Client, Url};

use nichepulse_core::types::Snippet;

use crate::backend::{build_http_client, get_json, join_endpoint, parse_base_url, parse_envelope};
use crate::error::SourceError;
use crate::types::{CommentWire, CommentsResponse, TweetWire, TweetsResponse};

/// Client for the snippet half of the trends backend.
pub struct SnippetClient {
    client: Client,
    base_url: Url,
}

impl SnippetClient {
    /// Creates a new client. Point `base_url` at a mock server in tests.
    ///
    /// The timeout passed here is the transport-level bound; the pipeline
    /// additionally wraps each enrichment call in its own deadline.
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

    /// Searches recent tweets for a topic, returning at most `limit`
    /// snippets.
    ///
    /// # Errors
    ///
    /// - [`SourceError::Http`] on network failure.
    /// - [`SourceError::Api`] on a non-2xx status or a `success: false`
    ///   envelope.
    /// - [`SourceError::Deserialize`] if the body doesn't match the
    ///   expected shape.
    pub async fn search_tweets(
        &self,
        topic: &str,
        limit: usize,
    ) -> Result<Vec<Snippet>, SourceError> {
        let url = join_endpoint(&self.base_url, "trends/twitter/search")?;
        let query = [("query", topic.to_owned()), ("limit", limit.to_string())];
        let body = get_json(&self.client, url, &query, "trends/twitter/search").await?;
        let envelope: TweetsResponse = parse_envelope(body, "trends/twitter/search")?;
        if !envelope.success {
            return Err(SourceError::Api(
                "trends/twitter/search reported failure".to_owned(),
            ));
        }

        let mut snippets: Vec<Snippet> = envelope
            .tweets
            .into_iter()
            .filter_map(TweetWire::into_snippet)
            .collect();
        // The backend occasionally over-returns; enforce the cap locally.
        snippets.truncate(limit);
        tracing::debug!(topic, count = snippets.len(), "fetched tweet snippets");
        Ok(snippets)
    }

    /// Fetches the top comments for a post's discussion URL.
    ///
    /// Tombstoned (`[deleted]`/`[removed]`) and empty comments are dropped.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`Self::search_tweets`].
    pub async fn top_comments(
        &self,
        post_url: &str,
        amount: usize,
    ) -> Result<Vec<Snippet>, SourceError> {
        let url = join_endpoint(&self.base_url, "trends/reddit/comments")?;
        let query = [("url", post_url.to_owned()), ("amount", amount.to_string())];
        let body = get_json(&self.client, url, &query, "trends/reddit/comments").await?;
        let envelope: CommentsResponse = parse_envelope(body, "trends/reddit/comments")?;
        if !envelope.success {
            return Err(SourceError::Api(
                "trends/reddit/comments reported failure".to_owned(),
            ));
        }

        let mut snippets: Vec<Snippet> = envelope
            .comments
            .into_iter()
            .filter_map(CommentWire::into_snippet)
            .collect();
        snippets.truncate(amount);
        tracing::debug!(post_url, count = snippets.len(), "fetched post comments");
        Ok(snippets)
    }
}
