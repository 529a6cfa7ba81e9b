//! Relevance-scoring tuning values.
//!
//! Every weight, threshold, and output bound the scorer and pipeline use is
//! carried in one explicit [`RankingConfig`] value handed to the pipeline at
//! construction time. There is no process-wide mutable state.

use serde::{Deserialize, Serialize};

/// How the category gate treats items whose categories don't overlap the
/// profile's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GatePolicy {
    /// Gate failure zeroes the item before term matching runs.
    Strict,
    /// Gate failure still lets genuine term matches accumulate (without the
    /// category bonus or floor), and a gated-but-keyword-sparse item with a
    /// real overlap keeps a small floor score.
    Lenient,
}

/// Weights and bounds for one ranking pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingConfig {
    /// Points per whole-word keyword match on the topic.
    pub keyword_weight: f64,
    /// Points per match phrase found in the topic.
    pub phrase_weight: f64,
    /// Points per match phrase found among the item's related terms.
    pub related_term_weight: f64,
    /// Match phrases shorter than this are skipped as noise.
    pub min_phrase_len: usize,
    /// Points per category overlap, once any term relevance exists.
    pub category_bonus: f64,
    /// Score assigned to gated items with a category overlap but no term
    /// matches, so on-topic-but-keyword-sparse items can still surface.
    pub category_floor: f64,
    /// Multiplier on `log10(volume + 1)`. Sized so the contribution stays
    /// below a single term match — popularity is a tie-break, not a signal.
    pub volume_coefficient: f64,
    /// Growth percentage divisor for the second tie-break term.
    pub growth_divisor: f64,
    /// Cap on the growth tie-break contribution.
    pub growth_cap: f64,
    pub gate_policy: GatePolicy,
    /// How many ranked items receive snippet enrichment.
    pub enrich_depth: usize,
    /// How many enriched items the pipeline ultimately returns.
    /// Must not exceed `enrich_depth`.
    pub final_size: usize,
    /// Corpus sizes below this trigger one escalated (fresh) re-fetch.
    pub min_viable_corpus: usize,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            keyword_weight: 50.0,
            phrase_weight: 30.0,
            related_term_weight: 8.0,
            min_phrase_len: 4,
            category_bonus: 15.0,
            category_floor: 5.0,
            volume_coefficient: 1.4,
            growth_divisor: 100.0,
            growth_cap: 4.0,
            gate_policy: GatePolicy::Lenient,
            enrich_depth: 15,
            final_size: 10,
            min_viable_corpus: 100,
        }
    }
}
