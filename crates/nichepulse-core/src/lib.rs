//! Shared configuration and domain types for nichepulse.
//!
//! Holds the env-driven [`AppConfig`], the [`RankingConfig`] tuning values
//! passed into the pipeline at construction time, and the corpus/domain
//! types (`TrendItem`, `Snippet`) shared by the relevance, sources, and
//! pipeline crates.

pub mod app_config;
pub mod config;
pub mod ranking;
pub mod types;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use ranking::{GatePolicy, RankingConfig};
pub use types::{SearchTrend, Snippet, SocialPost, TrendItem};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required env var: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
