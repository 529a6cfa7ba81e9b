//! Phrase occurrence with whole-word semantics for single tokens.
//!
//! Naive substring matching on short common words produces systematic false
//! positives ("app" inside "approval"), which was the single biggest source
//! of bad rankings. Single tokens therefore match only as whole tokens;
//! multi-word phrases are specific enough that plain substring containment
//! is safe.

/// Whether `phrase` occurs in `haystack`.
///
/// Both inputs are expected in normalized form (see
/// [`crate::normalize::normalize`]).
///
/// - A phrase with internal spaces matches iff it appears as a contiguous
///   substring.
/// - A single token matches iff it appears as a whole token: bounded on both
///   sides by a non-alphanumeric character or the string edge.
/// - An empty phrase never matches.
#[must_use]
pub fn matches(haystack: &str, phrase: &str) -> bool {
    if phrase.is_empty() {
        return false;
    }
    if phrase.contains(' ') {
        return haystack.contains(phrase);
    }
    haystack.match_indices(phrase).any(|(start, matched)| {
        let clear_before = haystack[..start]
            .chars()
            .next_back()
            .is_none_or(|c| !c.is_alphanumeric());
        let clear_after = haystack[start + matched.len()..]
            .chars()
            .next()
            .is_none_or(|c| !c.is_alphanumeric());
        clear_before && clear_after
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_token_does_not_match_inside_longer_token() {
        assert!(!matches("approval process", "app"));
        assert!(!matches("my whatsapp group", "app"));
    }

    #[test]
    fn single_token_matches_as_whole_word() {
        assert!(matches("best app for productivity", "app"));
        assert!(matches("app", "app"));
        assert!(matches("the app, reviewed", "app"));
    }

    #[test]
    fn multi_word_phrase_matches_as_substring() {
        assert!(matches("side hustle ideas", "side hustle"));
        assert!(matches("the side hustler's club", "side hustle"));
    }

    #[test]
    fn empty_phrase_never_matches() {
        assert!(!matches("anything", ""));
        assert!(!matches("", ""));
    }

    #[test]
    fn token_boundaries_include_punctuation_and_edges() {
        assert!(matches("ai-powered tools", "ai"));
        assert!(matches("what is ai", "ai"));
        assert!(!matches("aid programs", "ai"));
    }

    #[test]
    fn later_occurrence_can_satisfy_word_boundary() {
        // First "app" sits inside "apps", second stands alone.
        assert!(matches("apps and one app", "app"));
    }
}
