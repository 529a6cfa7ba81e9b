use std::net::SocketAddr;

use crate::ranking::RankingConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Base URL of the trends backend service.
    pub backend_base_url: String,
    /// Per-request timeout for corpus and profile calls.
    pub backend_timeout_secs: u64,
    pub user_agent: String,
    /// Subreddits the social half of the corpus is pulled from.
    pub subreddits: Vec<String>,
    /// Corpus size requested from the backend per fetch.
    pub corpus_limit: usize,
    /// Per-item deadline for snippet enrichment calls.
    pub snippet_timeout_secs: u64,
    /// Snippets requested per enriched trend.
    pub snippets_per_trend: usize,
    /// Upper bound on in-flight enrichment calls.
    pub max_concurrent_enrichments: usize,
    pub ranking: RankingConfig,
}
