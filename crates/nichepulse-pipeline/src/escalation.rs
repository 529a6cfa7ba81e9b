//! Cached-then-fresh corpus fetching.
//!
//! A latency/freshness trade-off policy, not a retry mechanism: the
//! escalated fetch fires on data insufficiency only. Transport errors on
//! either attempt propagate immediately, uncaught.

use nichepulse_core::types::TrendItem;

use crate::error::PipelineError;
use crate::traits::CorpusProvider;

/// Fetch the corpus, escalating to one fresh (non-cached) fetch when the
/// cached result is implausibly small.
///
/// The fresh result replaces the cached one whenever it is non-empty; an
/// empty fresh fetch falls back to whatever the cached attempt produced.
/// There is no second retry.
///
/// # Errors
///
/// - [`PipelineError::EmptyCorpus`] when both attempts return zero items.
/// - [`PipelineError::Source`] when either fetch fails at the transport or
///   API level.
pub async fn fetch_corpus_with_escalation<C: CorpusProvider>(
    provider: &C,
    limit: usize,
    min_viable: usize,
) -> Result<Vec<TrendItem>, PipelineError> {
    let cached = provider.fetch_corpus(limit, false).await?;
    if !cached.is_empty() && cached.len() >= min_viable {
        return Ok(cached);
    }

    tracing::info!(
        fetched = cached.len(),
        min_viable,
        "corpus below viability threshold; escalating to fresh fetch"
    );
    let fresh = provider.fetch_corpus(limit, true).await?;
    let corpus = if fresh.is_empty() { cached } else { fresh };
    if corpus.is_empty() {
        return Err(PipelineError::EmptyCorpus);
    }
    Ok(corpus)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};

    use nichepulse_core::types::{SearchTrend, TrendItem};
    use nichepulse_sources::SourceError;

    use super::*;

    fn items(n: usize) -> Vec<TrendItem> {
        (0..n)
            .map(|i| {
                TrendItem::Search(SearchTrend {
                    query: format!("topic {i}"),
                    ..SearchTrend::default()
                })
            })
            .collect()
    }

    struct TwoPhaseCorpus {
        cached: Vec<TrendItem>,
        fresh: Vec<TrendItem>,
        calls: AtomicU32,
    }

    impl TwoPhaseCorpus {
        fn new(cached: Vec<TrendItem>, fresh: Vec<TrendItem>) -> Self {
            Self {
                cached,
                fresh,
                calls: AtomicU32::new(0),
            }
        }
    }

    impl CorpusProvider for TwoPhaseCorpus {
        async fn fetch_corpus(
            &self,
            _limit: usize,
            fresh: bool,
        ) -> Result<Vec<TrendItem>, SourceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(if fresh {
                self.fresh.clone()
            } else {
                self.cached.clone()
            })
        }
    }

    struct FailingCorpus;

    impl CorpusProvider for FailingCorpus {
        async fn fetch_corpus(
            &self,
            _limit: usize,
            _fresh: bool,
        ) -> Result<Vec<TrendItem>, SourceError> {
            Err(SourceError::Api("backend down".to_owned()))
        }
    }

    #[tokio::test]
    async fn viable_cached_corpus_skips_escalation() {
        let provider = TwoPhaseCorpus::new(items(150), items(381));
        let corpus = fetch_corpus_with_escalation(&provider, 400, 100)
            .await
            .unwrap();
        assert_eq!(corpus.len(), 150);
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn small_cached_corpus_triggers_exactly_one_fresh_fetch() {
        let provider = TwoPhaseCorpus::new(items(40), items(381));
        let corpus = fetch_corpus_with_escalation(&provider, 400, 100)
            .await
            .unwrap();
        assert_eq!(corpus.len(), 381, "fresh corpus must win");
        assert_eq!(provider.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn empty_fresh_fetch_falls_back_to_cached_partial() {
        let provider = TwoPhaseCorpus::new(items(40), items(0));
        let corpus = fetch_corpus_with_escalation(&provider, 400, 100)
            .await
            .unwrap();
        assert_eq!(corpus.len(), 40);
    }

    #[tokio::test]
    async fn both_attempts_empty_is_fatal() {
        let provider = TwoPhaseCorpus::new(items(0), items(0));
        let err = fetch_corpus_with_escalation(&provider, 400, 100)
            .await
            .unwrap_err();
        assert!(matches!(err, PipelineError::EmptyCorpus));
        assert_eq!(provider.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn zero_threshold_still_escalates_on_empty_cache() {
        let provider = TwoPhaseCorpus::new(items(0), items(12));
        let corpus = fetch_corpus_with_escalation(&provider, 20, 0).await.unwrap();
        assert_eq!(corpus.len(), 12);
        assert_eq!(provider.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn transport_errors_propagate_without_retry() {
        let err = fetch_corpus_with_escalation(&FailingCorpus, 400, 100)
            .await
            .unwrap_err();
        assert!(matches!(err, PipelineError::Source(_)));
    }
}
