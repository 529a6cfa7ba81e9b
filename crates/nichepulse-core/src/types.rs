//! Corpus and enrichment domain types.
//!
//! The raw corpus mixes two shapes — social posts and search-trend entries —
//! with overlapping but different fields. [`TrendItem`] models that as a
//! tagged variant exposing the common subset (topic, categories, popularity)
//! through explicit accessors, so downstream code never guesses at optional
//! fields.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One candidate item from the raw trend corpus.
///
/// Items are read-only inputs to scoring; the pipeline never mutates them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TrendItem {
    /// A social post (e.g. a Reddit submission).
    Post(SocialPost),
    /// A search-trend entry (e.g. a Google Trends query).
    Search(SearchTrend),
}

/// A social post pulled from a community feed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SocialPost {
    pub title: String,
    #[serde(default)]
    pub subreddit: Option<String>,
    #[serde(default)]
    pub flair: Option<String>,
    #[serde(default)]
    pub preview: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    /// Upvote count. Doubles as the popularity volume signal.
    #[serde(default)]
    pub upvotes: u64,
    #[serde(default)]
    pub num_comments: u64,
    /// Engagement rate in percent. Doubles as the popularity growth signal.
    #[serde(default)]
    pub engagement: f64,
}

/// A search-trend entry from a trends feed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchTrend {
    pub query: String,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub related_terms: Vec<String>,
    #[serde(default)]
    pub search_volume: u64,
    #[serde(default)]
    pub growth_pct: f64,
}

impl TrendItem {
    /// The item's title or query — the text scoring runs against.
    #[must_use]
    pub fn topic(&self) -> &str {
        match self {
            TrendItem::Post(p) => &p.title,
            TrendItem::Search(s) => &s.query,
        }
    }

    /// Coarse topical buckets. For posts these are the subreddit and flair.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        match self {
            TrendItem::Post(p) => p
                .subreddit
                .iter()
                .chain(p.flair.iter())
                .map(String::as_str)
                .collect(),
            TrendItem::Search(s) => s.categories.iter().map(String::as_str).collect(),
        }
    }

    /// Related terms, where the source supplies them. Posts have none.
    #[must_use]
    pub fn related_terms(&self) -> &[String] {
        match self {
            TrendItem::Post(_) => &[],
            TrendItem::Search(s) => &s.related_terms,
        }
    }

    /// Popularity volume: search volume or upvote count.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn popularity_volume(&self) -> f64 {
        match self {
            TrendItem::Post(p) => p.upvotes as f64,
            TrendItem::Search(s) => s.search_volume as f64,
        }
    }

    /// Popularity growth: growth percentage or engagement rate.
    #[must_use]
    pub fn popularity_growth(&self) -> f64 {
        match self {
            TrendItem::Post(p) => p.engagement,
            TrendItem::Search(s) => s.growth_pct,
        }
    }

    /// Discussion URL, where the source supplies one.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        match self {
            TrendItem::Post(p) => p.url.as_deref(),
            TrendItem::Search(_) => None,
        }
    }
}

/// An opaque supplementary conversation record (a tweet or a comment).
///
/// The pipeline only counts and truncates snippets; it never interprets
/// their content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snippet {
    pub text: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub replies: u64,
    #[serde(default)]
    pub reposts: u64,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub posted_at: Option<DateTime<Utc>>,
}
