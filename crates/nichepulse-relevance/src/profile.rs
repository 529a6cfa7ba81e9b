//! Creator-supplied niche intent, held in normalized form.

use std::collections::HashSet;

use crate::normalize::normalize;

/// A creator's niche profile, immutable for the duration of a ranking pass.
///
/// All fields are normalized (trimmed, lowercased) at construction so every
/// comparison downstream is case-insensitive by default. Empty match-phrase
/// input falls back to the keywords themselves.
#[derive(Debug, Clone, PartialEq)]
pub struct NicheProfile {
    keywords: Vec<String>,
    match_phrases: Vec<String>,
    categories: Vec<String>,
    exclude_terms: Vec<String>,
}

impl NicheProfile {
    /// Build a profile from raw (possibly un-normalized) parts.
    ///
    /// Empty strings are dropped after normalization and duplicates are
    /// collapsed while preserving first-seen order. When `match_phrases`
    /// comes out empty, the keywords stand in for it.
    #[must_use]
    pub fn new(
        keywords: &[String],
        match_phrases: Vec<String>,
        categories: Vec<String>,
        exclude_terms: Vec<String>,
    ) -> Self {
        let keywords = normalize_list(keywords);
        let mut match_phrases = normalize_list(&match_phrases);
        if match_phrases.is_empty() {
            match_phrases.clone_from(&keywords);
        }
        Self {
            keywords,
            match_phrases,
            categories: normalize_list(&categories),
            exclude_terms: normalize_list(&exclude_terms),
        }
    }

    /// The degraded profile used when profile extraction fails: match
    /// phrases mirror the keywords, no category gating, no exclusions.
    #[must_use]
    pub fn degraded(keywords: &[String]) -> Self {
        Self::new(keywords, Vec::new(), Vec::new(), Vec::new())
    }

    #[must_use]
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    #[must_use]
    pub fn match_phrases(&self) -> &[String] {
        &self.match_phrases
    }

    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    #[must_use]
    pub fn exclude_terms(&self) -> &[String] {
        &self.exclude_terms
    }
}

/// Normalize every entry, drop empties, and collapse duplicates while
/// preserving order.
fn normalize_list(raw: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    raw.iter()
        .map(|s| normalize(s))
        .filter(|s| !s.is_empty())
        .filter(|s| seen.insert(s.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn construction_normalizes_all_fields() {
        let profile = NicheProfile::new(
            &strings(&["  AI Tools ", "Productivity"]),
            strings(&["Side Hustle"]),
            strings(&["Technology"]),
            strings(&["CRYPTO"]),
        );
        assert_eq!(profile.keywords(), ["ai tools", "productivity"]);
        assert_eq!(profile.match_phrases(), ["side hustle"]);
        assert_eq!(profile.categories(), ["technology"]);
        assert_eq!(profile.exclude_terms(), ["crypto"]);
    }

    #[test]
    fn empty_match_phrases_fall_back_to_keywords() {
        let profile = NicheProfile::new(&strings(&["ai tools"]), Vec::new(), Vec::new(), Vec::new());
        assert_eq!(profile.match_phrases(), ["ai tools"]);
    }

    #[test]
    fn blank_entries_are_dropped_and_duplicates_collapsed() {
        let profile = NicheProfile::new(
            &strings(&["ai", "  ", "AI", "ai"]),
            Vec::new(),
            Vec::new(),
            Vec::new(),
        );
        assert_eq!(profile.keywords(), ["ai"]);
    }

    #[test]
    fn degraded_profile_is_ungated_and_unexcluded() {
        let profile = NicheProfile::degraded(&strings(&["fitness"]));
        assert!(profile.categories().is_empty());
        assert!(profile.exclude_terms().is_empty());
        assert_eq!(profile.match_phrases(), profile.keywords());
    }
}
