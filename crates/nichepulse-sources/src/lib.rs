//! Typed clients for the external collaborators of the ranking pipeline:
//! the trend-corpus endpoints, the conversation-snippet endpoints, and the
//! niche-profile extraction endpoint.
//!
//! All clients are thin `reqwest` wrappers: per-client timeouts, typed
//! serde envelopes, API-level status checking, and lossy-tolerant
//! conversion into domain types (missing fields degrade to zero/empty
//! defaults, unusable records are dropped).

pub mod error;
pub mod niche;
pub mod snippets;
pub mod trends;
pub mod types;

mod backend;

pub use error::SourceError;
pub use niche::NicheClient;
pub use snippets::SnippetClient;
pub use trends::TrendsClient;
pub use types::NicheAnalysis;
