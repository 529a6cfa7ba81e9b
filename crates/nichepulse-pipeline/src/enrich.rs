//! Concurrent snippet enrichment for the top-ranked slice.
//!
//! One independent fetch per item, all in flight together under a bounded,
//! order-preserving stream. Results are keyed by input position, never by
//! completion order, so rank order survives whatever the network does.

use std::time::Duration;

use futures::stream::{self, StreamExt};
use serde::Serialize;

use nichepulse_core::types::Snippet;
use nichepulse_relevance::ScoredTrend;

use crate::traits::SnippetProvider;

/// A ranked trend with its conversation snippets attached.
#[derive(Debug, Clone, Serialize)]
pub struct EnrichedTrend {
    #[serde(flatten)]
    pub trend: ScoredTrend,
    pub snippets: Vec<Snippet>,
    pub enrichment_failed: bool,
}

/// Enrich every item in `items` with up to `per_item` snippets.
///
/// Each fetch carries its own deadline; expiry or failure converts that one
/// item into an unenriched entry (`snippets` empty, `enrichment_failed`
/// set) without aborting or delaying the rest. The orchestrator waits for
/// every fetch to reach a terminal state, so total latency tracks the
/// slowest single call rather than the sum. Output order equals input
/// order.
pub async fn enrich_top<S: SnippetProvider>(
    items: Vec<ScoredTrend>,
    provider: &S,
    per_item: usize,
    timeout: Duration,
    max_concurrent: usize,
) -> Vec<EnrichedTrend> {
    stream::iter(items)
        .map(|trend| async move {
            let topic = trend.item.topic().to_owned();
            match tokio::time::timeout(timeout, provider.fetch_snippets(&topic, per_item)).await {
                Ok(Ok(snippets)) => EnrichedTrend {
                    trend,
                    snippets,
                    enrichment_failed: false,
                },
                Ok(Err(error)) => {
                    tracing::warn!(
                        topic = %topic,
                        error = %error,
                        "snippet fetch failed; keeping item unenriched"
                    );
                    EnrichedTrend {
                        trend,
                        snippets: Vec::new(),
                        enrichment_failed: true,
                    }
                }
                Err(_) => {
                    tracing::warn!(
                        topic = %topic,
                        timeout_secs = timeout.as_secs(),
                        "snippet fetch timed out; keeping item unenriched"
                    );
                    EnrichedTrend {
                        trend,
                        snippets: Vec::new(),
                        enrichment_failed: true,
                    }
                }
            }
        })
        .buffered(max_concurrent.max(1))
        .collect()
        .await
}
