//! Seams for the three external collaborators the pipeline consumes.
//!
//! The pipeline is generic over these traits so orchestration logic can be
//! tested against scripted in-memory providers; the production impls over
//! the HTTP clients live in [`crate::providers`].

use std::future::Future;

use nichepulse_core::types::{Snippet, TrendItem};
use nichepulse_sources::{NicheAnalysis, SourceError};

/// Supplies the raw trend corpus for a requested size.
///
/// `fresh` asks the provider to bypass caching; providers may return fewer
/// items than requested.
pub trait CorpusProvider: Send + Sync {
    fn fetch_corpus(
        &self,
        limit: usize,
        fresh: bool,
    ) -> impl Future<Output = Result<Vec<TrendItem>, SourceError>> + Send;
}

/// Supplies conversation snippets for a topic, up to a requested count.
pub trait SnippetProvider: Send + Sync {
    fn fetch_snippets(
        &self,
        topic: &str,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<Snippet>, SourceError>> + Send;
}

/// Extracts a structured niche profile from raw keywords.
///
/// Callers must not assume this succeeds: on failure the pipeline falls
/// back to a degraded profile built from the keywords alone.
pub trait ProfileProvider: Send + Sync {
    fn extract_profile(
        &self,
        keywords: &[String],
    ) -> impl Future<Output = Result<NicheAnalysis, SourceError>> + Send;
}
