//! Dedup and ordering of scored items.

use std::collections::HashSet;

use crate::normalize::normalize;
use crate::scorer::ScoredTrend;

/// Collapse a scored corpus into the ranked survivor list.
///
/// Drops every item scoring at or below zero (including the hard-exclusion
/// sentinel), deduplicates by normalized topic keeping the first occurrence
/// in corpus order regardless of the later duplicate's score, then sorts by
/// score descending. The sort is stable, so ties keep corpus order and
/// identical inputs always rank identically. Truncation to the enrichment
/// and output depths is the caller's job.
#[must_use]
pub fn rank(scored: Vec<ScoredTrend>) -> Vec<ScoredTrend> {
    let mut seen_topics = HashSet::new();
    let mut survivors: Vec<ScoredTrend> = scored
        .into_iter()
        .filter(|s| s.relevance_score > 0.0)
        .filter(|s| seen_topics.insert(normalize(s.item.topic())))
        .collect();
    survivors.sort_by(|a, b| b.relevance_score.total_cmp(&a.relevance_score));
    survivors
}
