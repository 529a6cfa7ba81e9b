//! Production provider impls over the backend HTTP clients.

use nichepulse_core::types::{Snippet, TrendItem};
use nichepulse_sources::{NicheAnalysis, NicheClient, SnippetClient, SourceError, TrendsClient};

use crate::traits::{CorpusProvider, ProfileProvider, SnippetProvider};

/// Corpus source combining the social and search halves of the backend.
///
/// Social posts lead the corpus; search trends follow. `limit` is the
/// per-source request size. A transport failure on either half fails the
/// fetch — partial corpora from a half-failed provider would silently skew
/// escalation decisions.
pub struct BackendCorpus {
    client: TrendsClient,
    subreddits: Vec<String>,
}

impl BackendCorpus {
    #[must_use]
    pub fn new(client: TrendsClient, subreddits: Vec<String>) -> Self {
        Self { client, subreddits }
    }
}

impl CorpusProvider for BackendCorpus {
    async fn fetch_corpus(&self, limit: usize, fresh: bool) -> Result<Vec<TrendItem>, SourceError> {
        let mut corpus = self
            .client
            .fetch_reddit_posts(&self.subreddits, limit, fresh)
            .await?;
        let searches = self.client.fetch_search_trends(limit, fresh).await?;
        corpus.extend(searches);
        Ok(corpus)
    }
}

impl SnippetProvider for SnippetClient {
    async fn fetch_snippets(&self, topic: &str, limit: usize) -> Result<Vec<Snippet>, SourceError> {
        self.search_tweets(topic, limit).await
    }
}

impl ProfileProvider for NicheClient {
    async fn extract_profile(&self, keywords: &[String]) -> Result<NicheAnalysis, SourceError> {
        self.extract(keywords).await
    }
}
