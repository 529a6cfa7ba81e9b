//! The full ranking pass: profile → corpus → score → rank → enrich.

use std::time::Duration;

use serde::Serialize;

use nichepulse_core::app_config::AppConfig;
use nichepulse_core::ranking::RankingConfig;
use nichepulse_relevance::{rank, score, NicheProfile, ScoredTrend};

use crate::enrich::{enrich_top, EnrichedTrend};
use crate::error::PipelineError;
use crate::escalation::fetch_corpus_with_escalation;
use crate::traits::{CorpusProvider, ProfileProvider, SnippetProvider};

/// Runtime knobs for one pipeline instance, beyond the scoring weights.
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// Corpus size requested per fetch.
    pub corpus_limit: usize,
    /// Snippets requested per enriched trend.
    pub snippets_per_trend: usize,
    /// Per-item enrichment deadline.
    pub snippet_timeout: Duration,
    /// Upper bound on in-flight enrichment calls.
    pub max_concurrent_enrichments: usize,
}

impl PipelineOptions {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            corpus_limit: config.corpus_limit,
            snippets_per_trend: config.snippets_per_trend,
            snippet_timeout: Duration::from_secs(config.snippet_timeout_secs),
            max_concurrent_enrichments: config.max_concurrent_enrichments,
        }
    }
}

/// The effective niche a ranking pass ran against, echoed to the caller.
#[derive(Debug, Clone, Serialize)]
pub struct NicheSummary {
    pub keywords: Vec<String>,
    pub description: String,
    pub categories: Vec<String>,
}

/// Everything a ranking pass produces.
#[derive(Debug, Serialize)]
pub struct AnalyzeOutcome {
    /// Enriched, ranked trends, at most `final_size` of them.
    pub trends: Vec<EnrichedTrend>,
    /// Corpus items considered.
    pub total_analyzed: usize,
    /// Items that survived scoring and dedup, before truncation.
    pub matched: usize,
    pub niche: NicheSummary,
}

/// One configured ranking pipeline.
///
/// Holds its collaborators and every tuning value explicitly; construct one
/// per deployment and share it across requests.
pub struct TrendPipeline<C, S, P> {
    corpus: C,
    snippets: S,
    profiles: P,
    ranking: RankingConfig,
    options: PipelineOptions,
}

impl<C, S, P> TrendPipeline<C, S, P>
where
    C: CorpusProvider,
    S: SnippetProvider,
    P: ProfileProvider,
{
    #[must_use]
    pub fn new(
        corpus: C,
        snippets: S,
        profiles: P,
        ranking: RankingConfig,
        options: PipelineOptions,
    ) -> Self {
        Self {
            corpus,
            snippets,
            profiles,
            ranking,
            options,
        }
    }

    /// Run a full ranking pass from raw keywords.
    ///
    /// Profile extraction failure is recovered locally with a degraded
    /// profile (match phrases = keywords, no gating, no exclusions) and is
    /// never surfaced to the caller.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::EmptyCorpus`] when even the escalated fetch
    /// yields nothing, or [`PipelineError::Source`] on an upstream
    /// transport failure before scoring.
    pub async fn analyze(&self, keywords: &[String]) -> Result<AnalyzeOutcome, PipelineError> {
        let (profile, description) = self.resolve_profile(keywords).await;
        self.run(profile, description).await
    }

    /// Run a full ranking pass from a pre-built structured profile,
    /// skipping the profile provider entirely.
    ///
    /// # Errors
    ///
    /// Same as [`Self::analyze`].
    pub async fn analyze_with_profile(
        &self,
        profile: NicheProfile,
        description: String,
    ) -> Result<AnalyzeOutcome, PipelineError> {
        self.run(profile, description).await
    }

    async fn resolve_profile(&self, keywords: &[String]) -> (NicheProfile, String) {
        match self.profiles.extract_profile(keywords).await {
            Ok(analysis) => {
                let description = analysis
                    .description
                    .unwrap_or_else(|| keywords.join(", "));
                let profile = NicheProfile::new(
                    keywords,
                    analysis.match_phrases,
                    analysis.categories,
                    analysis.exclude_terms,
                );
                (profile, description)
            }
            Err(error) => {
                tracing::warn!(
                    error = %error,
                    "niche extraction failed; falling back to degraded profile"
                );
                (NicheProfile::degraded(keywords), keywords.join(", "))
            }
        }
    }

    async fn run(
        &self,
        profile: NicheProfile,
        description: String,
    ) -> Result<AnalyzeOutcome, PipelineError> {
        let corpus = fetch_corpus_with_escalation(
            &self.corpus,
            self.options.corpus_limit,
            self.ranking.min_viable_corpus,
        )
        .await?;
        let total_analyzed = corpus.len();

        let scored: Vec<ScoredTrend> = corpus
            .into_iter()
            .map(|item| ScoredTrend {
                relevance_score: score(&item, &profile, &self.ranking),
                item,
            })
            .collect();

        let mut ranked = rank(scored);
        let matched = ranked.len();
        ranked.truncate(self.ranking.enrich_depth);

        let mut trends = enrich_top(
            ranked,
            &self.snippets,
            self.options.snippets_per_trend,
            self.options.snippet_timeout,
            self.options.max_concurrent_enrichments,
        )
        .await;
        trends.truncate(self.ranking.final_size);

        tracing::info!(
            total_analyzed,
            matched,
            returned = trends.len(),
            "ranking pass complete"
        );

        Ok(AnalyzeOutcome {
            trends,
            total_analyzed,
            matched,
            niche: NicheSummary {
                keywords: profile.keywords().to_vec(),
                description,
                categories: profile.categories().to_vec(),
            },
        })
    }
}
