//! Relevance scoring of one trend item against one niche profile.

use nichepulse_core::ranking::{GatePolicy, RankingConfig};
use nichepulse_core::types::TrendItem;
use serde::{Deserialize, Serialize};

use crate::matcher::matches;
use crate::normalize::normalize;
use crate::profile::NicheProfile;

/// Sentinel score for hard-excluded items. Dropped before ranking.
pub const EXCLUDED: f64 = -1.0;

/// A corpus item together with its computed relevance score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredTrend {
    #[serde(flatten)]
    pub item: TrendItem,
    pub relevance_score: f64,
}

/// Score `item` against `profile`.
///
/// Pure and deterministic: identical inputs always produce the identical
/// number. Evaluation order is fixed:
///
/// 1. Hard exclusion — the normalized topic containing any exclude term
///    returns [`EXCLUDED`] immediately.
/// 2. Category gate — profile categories, when present, must overlap the
///    item's by substring containment in either direction. Under
///    [`GatePolicy::Strict`] a failed gate zeroes the item outright; under
///    [`GatePolicy::Lenient`] term matches may still accumulate.
/// 3. Term accumulation — weighted whole-word keyword matches and phrase
///    matches on the topic and related terms.
/// 4. Category bonus per overlap, or the floor score for gated items with
///    an overlap but no term relevance.
/// 5. Popularity tie-break, applied only once some relevance exists so
///    popularity alone can never surface an off-topic item.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn score(item: &TrendItem, profile: &NicheProfile, cfg: &RankingConfig) -> f64 {
    let topic = normalize(item.topic());

    // 1. Hard exclusion wins over everything else. Substring containment,
    // not whole-word: exclusions prefer recall over precision.
    if profile
        .exclude_terms()
        .iter()
        .any(|term| topic.contains(term.as_str()))
    {
        return EXCLUDED;
    }

    // 2. Category gate. Overlap counts (profile category, item category)
    // pairs where either contains the other.
    let item_categories: Vec<String> = item.categories().iter().map(|c| normalize(c)).collect();
    let overlaps: usize = profile
        .categories()
        .iter()
        .map(|pc| {
            item_categories
                .iter()
                .filter(|ic| ic.contains(pc.as_str()) || pc.contains(ic.as_str()))
                .count()
        })
        .sum();
    let gate_passed = profile.categories().is_empty() || overlaps > 0;
    if !gate_passed && cfg.gate_policy == GatePolicy::Strict {
        return 0.0;
    }

    // 3. Term accumulation.
    let mut relevance = 0.0;
    for keyword in profile.keywords() {
        if matches(&topic, keyword) {
            relevance += cfg.keyword_weight;
        }
    }
    let related_terms: Vec<String> = item.related_terms().iter().map(|t| normalize(t)).collect();
    for phrase in profile.match_phrases() {
        if phrase.chars().count() < cfg.min_phrase_len {
            continue;
        }
        if matches(&topic, phrase) {
            relevance += cfg.phrase_weight;
        }
        if related_terms.iter().any(|term| matches(term, phrase)) {
            relevance += cfg.related_term_weight;
        }
    }

    // 4. Category bonus, or the floor for on-topic-but-keyword-sparse items.
    // The floor requires an actual overlap: an empty profile category set
    // passes the gate but earns nothing.
    if relevance > 0.0 {
        relevance += cfg.category_bonus * overlaps as f64;
    } else if overlaps > 0 && cfg.gate_policy == GatePolicy::Lenient {
        relevance = cfg.category_floor;
    }

    // 5. Popularity tie-break, never a primary signal.
    if relevance > 0.0 {
        relevance += (item.popularity_volume() + 1.0).log10() * cfg.volume_coefficient;
        relevance += (item.popularity_growth() / cfg.growth_divisor).min(cfg.growth_cap);
    }

    relevance
}

#[cfg(test)]
mod tests {
    use nichepulse_core::types::{SearchTrend, SocialPost};

    use super::*;

    fn strings(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| (*s).to_owned()).collect()
    }

    fn search(query: &str, categories: &[&str], volume: u64, growth: f64) -> TrendItem {
        TrendItem::Search(SearchTrend {
            query: query.to_owned(),
            categories: strings(categories),
            related_terms: Vec::new(),
            search_volume: volume,
            growth_pct: growth,
        })
    }

    fn profile(keywords: &[&str], categories: &[&str], excludes: &[&str]) -> NicheProfile {
        NicheProfile::new(
            &strings(keywords),
            Vec::new(),
            strings(categories),
            strings(excludes),
        )
    }

    #[test]
    fn exclusion_beats_any_number_of_keyword_matches() {
        let p = profile(&["crypto", "trading"], &[], &["crypto"]);
        let item = search("crypto trading strategies", &[], 1_000_000, 500.0);
        assert!((score(&item, &p, &RankingConfig::default()) - EXCLUDED).abs() < f64::EPSILON);
    }

    #[test]
    fn exclusion_is_substring_based() {
        let p = profile(&["productivity"], &[], &["nft"]);
        let item = search("top nfts to watch", &[], 10, 0.0);
        assert!((score(&item, &p, &RankingConfig::default()) - EXCLUDED).abs() < f64::EPSILON);
    }

    #[test]
    fn keyword_match_scores_high_weight_plus_popularity() {
        let cfg = RankingConfig::default();
        let p = profile(&["solopreneurs"], &[], &[]);
        let item = search("new tools for solopreneurs", &[], 0, 0.0);
        // keyword 50 + phrase fallback 30 (match_phrases mirror keywords)
        let got = score(&item, &p, &cfg);
        assert!(
            (got - (cfg.keyword_weight + cfg.phrase_weight)).abs() < 1e-9,
            "got {got}"
        );
    }

    #[test]
    fn short_phrases_are_skipped_as_noise() {
        let cfg = RankingConfig::default();
        // "ai" is below min_phrase_len, so only the keyword weight fires.
        let p = profile(&["ai"], &[], &[]);
        let item = search("what is ai", &[], 0, 0.0);
        let got = score(&item, &p, &cfg);
        assert!((got - cfg.keyword_weight).abs() < 1e-9, "got {got}");
    }

    #[test]
    fn whole_word_rule_prevents_false_positive() {
        let p = profile(&["app"], &[], &[]);
        let item = search("approval process changes", &[], 50_000, 100.0);
        assert!(score(&item, &p, &RankingConfig::default()).abs() < f64::EPSILON);
    }

    #[test]
    fn related_term_matches_add_low_weight() {
        let cfg = RankingConfig::default();
        let p = profile(&["automation"], &[], &[]);
        let item = TrendItem::Search(SearchTrend {
            query: "zapier alternatives".to_owned(),
            related_terms: strings(&["workflow automation", "no-code"]),
            ..SearchTrend::default()
        });
        let got = score(&item, &p, &cfg);
        assert!((got - cfg.related_term_weight).abs() < 1e-9, "got {got}");
    }

    #[test]
    fn empty_profile_categories_never_gate() {
        let cfg = RankingConfig::default();
        let gated = profile(&["fitness"], &["Health"], &[]);
        let ungated = profile(&["fitness"], &[], &[]);
        let item = search("fitness routines that stick", &["Sports"], 0, 0.0);
        // The ungated profile must never be more restrictive than the gated one.
        assert!(score(&item, &ungated, &cfg) >= score(&item, &gated, &cfg));
        assert!(score(&item, &ungated, &cfg) > 0.0);
    }

    #[test]
    fn category_overlap_is_bidirectional_substring() {
        let cfg = RankingConfig::default();
        let p = profile(&["saas"], &["Tech"], &[]);
        let item = search("saas pricing teardown", &["Technology"], 0, 0.0);
        // "tech" is contained in "technology", so the overlap counts and the
        // bonus applies on top of keyword + phrase weight.
        let got = score(&item, &p, &cfg);
        assert!(
            (got - (cfg.keyword_weight + cfg.phrase_weight + cfg.category_bonus)).abs() < 1e-9,
            "got {got}"
        );
    }

    #[test]
    fn lenient_gate_failure_still_counts_term_matches() {
        let cfg = RankingConfig::default();
        let p = profile(&["solopreneurs"], &["Business"], &[]);
        let item = search("tax tips for solopreneurs", &["Finance"], 0, 0.0);
        let got = score(&item, &p, &cfg);
        // No bonus and no floor, but the genuine term matches survive.
        assert!(
            (got - (cfg.keyword_weight + cfg.phrase_weight)).abs() < 1e-9,
            "got {got}"
        );
    }

    #[test]
    fn strict_gate_failure_zeroes_before_term_matching() {
        let cfg = RankingConfig {
            gate_policy: GatePolicy::Strict,
            ..RankingConfig::default()
        };
        let p = profile(&["solopreneurs"], &["Business"], &[]);
        let item = search("tax tips for solopreneurs", &["Finance"], 9_000, 250.0);
        assert!(score(&item, &p, &cfg).abs() < f64::EPSILON);
    }

    #[test]
    fn floor_applies_to_gated_items_without_term_matches() {
        let cfg = RankingConfig::default();
        let p = profile(&["solopreneurs"], &["Technology"], &[]);
        let item = search("quantum chip breakthrough", &["Technology"], 0, 0.0);
        let got = score(&item, &p, &cfg);
        assert!((got - cfg.category_floor).abs() < 1e-9, "got {got}");
    }

    #[test]
    fn no_floor_without_an_actual_overlap() {
        let cfg = RankingConfig::default();
        let p = profile(&["solopreneurs"], &[], &[]);
        let item = search("quantum chip breakthrough", &["Technology"], 0, 0.0);
        assert!(score(&item, &p, &cfg).abs() < f64::EPSILON);
    }

    #[test]
    fn popularity_never_promotes_zero_relevance() {
        let cfg = RankingConfig::default();
        let p = profile(&["solopreneurs"], &[], &[]);
        let viral = search("celebrity gossip roundup", &[], 50_000_000, 900.0);
        assert!(score(&viral, &p, &cfg).abs() < f64::EPSILON);
    }

    #[test]
    fn popularity_breaks_ties_without_changing_inclusion() {
        let cfg = RankingConfig::default();
        let p = profile(&["solopreneurs"], &[], &[]);
        let quiet = search("a guide for solopreneurs", &[], 10, 0.0);
        let loud = search("big news for solopreneurs", &[], 100_000, 400.0);
        let quiet_score = score(&quiet, &p, &cfg);
        let loud_score = score(&loud, &p, &cfg);
        assert!(loud_score > quiet_score);
        // Both included; the gap stays below a single term match.
        assert!(quiet_score > 0.0);
        assert!(loud_score - quiet_score < cfg.phrase_weight);
    }

    #[test]
    fn scoring_is_idempotent() {
        let cfg = RankingConfig::default();
        let p = profile(&["ai tools"], &["Technology"], &["crypto"]);
        let item = search("best ai tools this week", &["Technology"], 4_200, 33.0);
        let first = score(&item, &p, &cfg);
        let second = score(&item, &p, &cfg);
        assert!((first - second).abs() < f64::EPSILON);
    }

    #[test]
    fn social_posts_score_through_the_same_path() {
        let cfg = RankingConfig::default();
        let p = profile(&["productivity"], &["productivity"], &[]);
        let item = TrendItem::Post(SocialPost {
            title: "My productivity system after 5 years".to_owned(),
            subreddit: Some("productivity".to_owned()),
            upvotes: 2_400,
            engagement: 12.0,
            ..SocialPost::default()
        });
        let got = score(&item, &p, &cfg);
        assert!(got > cfg.keyword_weight, "got {got}");
    }

    #[test]
    fn scored_trend_serializes_flat_with_kind_tag() {
        let scored = ScoredTrend {
            item: search("ai agents", &["Technology"], 100, 0.0),
            relevance_score: 42.5,
        };
        let json = serde_json::to_value(&scored).unwrap();
        assert_eq!(json["kind"], "search");
        assert_eq!(json["query"], "ai agents");
        assert!((json["relevance_score"].as_f64().unwrap() - 42.5).abs() < f64::EPSILON);
    }

    #[test]
    fn end_to_end_scenario_from_observed_corpus() {
        let cfg = RankingConfig::default();
        let p = NicheProfile::new(
            &strings(&["ai tools", "productivity", "solopreneurs"]),
            Vec::new(),
            strings(&["Technology", "Business"]),
            Vec::new(),
        );
        let on_topic = search(
            "OpenAI launches new agent tools for solopreneurs",
            &["Technology"],
            50_000,
            300.0,
        );
        let off_topic = search("Local weather forecast for approval", &[], 800, 0.0);

        let on_topic_score = score(&on_topic, &p, &cfg);
        let off_topic_score = score(&off_topic, &p, &cfg);

        // keyword "solopreneurs" 50 + phrase 30 + bonus 15 + volume ~6.6 + growth 3
        assert!(on_topic_score > 100.0, "got {on_topic_score}");
        assert!(off_topic_score.abs() < f64::EPSILON, "got {off_topic_score}");
    }
}
