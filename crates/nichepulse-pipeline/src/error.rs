use thiserror::Error;

use nichepulse_sources::SourceError;

/// Errors that fail a ranking pass end-to-end.
///
/// Per-item enrichment failures and profile-extraction failures never show
/// up here — they are recovered locally and degrade the result instead.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Both the cached and the escalated fresh fetch returned zero items.
    #[error("trend corpus is empty, even after an escalated fresh fetch")]
    EmptyCorpus,

    /// An upstream transport or API error before scoring began.
    #[error(transparent)]
    Source(#[from] SourceError),
}
