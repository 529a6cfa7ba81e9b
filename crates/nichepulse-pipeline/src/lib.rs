//! Asynchronous orchestration of a nichepulse ranking pass.
//!
//! Composes the pure relevance core with three external collaborators — a
//! corpus provider, a snippet provider, and a niche profile provider —
//! behind explicit trait seams. Adds the two stateful policies the core
//! stays out of: cached-then-fresh corpus escalation and fan-out snippet
//! enrichment with per-item failure isolation.

pub mod enrich;
pub mod error;
pub mod escalation;
pub mod pipeline;
pub mod providers;
pub mod traits;

pub use enrich::{enrich_top, EnrichedTrend};
pub use error::PipelineError;
pub use escalation::fetch_corpus_with_escalation;
pub use pipeline::{AnalyzeOutcome, NicheSummary, PipelineOptions, TrendPipeline};
pub use providers::BackendCorpus;
pub use traits::{CorpusProvider, ProfileProvider, SnippetProvider};
