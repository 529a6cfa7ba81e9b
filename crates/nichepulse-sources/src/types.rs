//! Wire shapes for the trends backend, and their conversions into domain
//! types.
//!
//! Every field the backend might omit is optional or defaulted here:
//! malformed corpus items degrade to zero/empty values instead of failing
//! the request. Items without usable text are dropped entirely.

use chrono::{DateTime, Utc};
use nichepulse_core::types::{SearchTrend, Snippet, SocialPost, TrendItem};
use serde::Deserialize;

/// Envelope for `GET /trends/reddit`.
#[derive(Debug, Deserialize)]
pub(crate) struct RedditTrendsResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub posts: Vec<RedditPostWire>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RedditPostWire {
    pub title: Option<String>,
    pub subreddit: Option<String>,
    pub flair: Option<String>,
    pub preview: Option<String>,
    pub url: Option<String>,
    #[serde(default)]
    pub score: u64,
    #[serde(default)]
    pub num_comments: u64,
    #[serde(default)]
    pub engagement: f64,
}

/// Envelope for `GET /trends/google`.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchTrendsResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub trends: Vec<SearchTrendWire>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchTrendWire {
    pub query: Option<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub related_terms: Vec<String>,
    #[serde(default)]
    pub search_volume: u64,
    #[serde(default)]
    pub growth_pct: f64,
}

/// Envelope for `GET /trends/twitter/search`.
#[derive(Debug, Deserialize)]
pub(crate) struct TweetsResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub tweets: Vec<TweetWire>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TweetWire {
    pub text: Option<String>,
    pub author: Option<String>,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub replies: u64,
    #[serde(default)]
    pub retweets: u64,
    pub created_at: Option<DateTime<Utc>>,
    pub url: Option<String>,
}

/// Envelope for `GET /trends/reddit/comments`.
#[derive(Debug, Deserialize)]
pub(crate) struct CommentsResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub comments: Vec<CommentWire>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CommentWire {
    pub body: Option<String>,
    pub author: Option<String>,
    #[serde(default)]
    pub score: u64,
    pub created_at: Option<DateTime<Utc>>,
}

/// Envelope for `POST /niche/analyze`.
#[derive(Debug, Deserialize)]
pub(crate) struct NicheAnalysisResponse {
    #[serde(default)]
    pub success: bool,
    pub description: Option<String>,
    #[serde(default)]
    pub match_phrases: Vec<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub exclude_terms: Vec<String>,
}

/// Structured output of the niche profile provider.
#[derive(Debug, Clone, Default)]
pub struct NicheAnalysis {
    pub description: Option<String>,
    pub match_phrases: Vec<String>,
    pub categories: Vec<String>,
    pub exclude_terms: Vec<String>,
}

impl From<NicheAnalysisResponse> for NicheAnalysis {
    fn from(wire: NicheAnalysisResponse) -> Self {
        Self {
            description: wire.description.filter(|d| !d.trim().is_empty()),
            match_phrases: wire.match_phrases,
            categories: wire.categories,
            exclude_terms: wire.exclude_terms,
        }
    }
}

impl RedditPostWire {
    /// Convert to a corpus item, dropping posts without a usable title.
    pub(crate) fn into_item(self) -> Option<TrendItem> {
        let title = self.title.map(|t| t.trim().to_owned()).filter(|t| !t.is_empty())?;
        Some(TrendItem::Post(SocialPost {
            title,
            subreddit: self.subreddit,
            flair: self.flair,
            preview: self.preview,
            url: self.url,
            upvotes: self.score,
            num_comments: self.num_comments,
            engagement: self.engagement,
        }))
    }
}

impl SearchTrendWire {
    /// Convert to a corpus item, dropping entries without a usable query.
    pub(crate) fn into_item(self) -> Option<TrendItem> {
        let query = self.query.map(|q| q.trim().to_owned()).filter(|q| !q.is_empty())?;
        Some(TrendItem::Search(SearchTrend {
            query,
            categories: self.categories,
            related_terms: self.related_terms,
            search_volume: self.search_volume,
            growth_pct: self.growth_pct,
        }))
    }
}

impl TweetWire {
    pub(crate) fn into_snippet(self) -> Option<Snippet> {
        let text = self.text.map(|t| t.trim().to_owned()).filter(|t| !t.is_empty())?;
        Some(Snippet {
            text,
            author: self.author,
            likes: self.likes,
            replies: self.replies,
            reposts: self.retweets,
            url: self.url,
            posted_at: self.created_at,
        })
    }
}

impl CommentWire {
    /// Convert to a snippet, skipping empty and tombstoned comment bodies.
    pub(crate) fn into_snippet(self) -> Option<Snippet> {
        let body = self
            .body
            .as_deref()
            .map(str::trim)
            .filter(|body| !body.is_empty() && *body != "[deleted]" && *body != "[removed]")?
            .to_owned();
        Some(Snippet {
            text: body,
            author: self.author,
            likes: self.score,
            replies: 0,
            reposts: 0,
            url: None,
            posted_at: self.created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_without_title_is_dropped() {
        let wire = RedditPostWire {
            title: Some("   ".to_owned()),
            subreddit: None,
            flair: None,
            preview: None,
            url: None,
            score: 10,
            num_comments: 2,
            engagement: 0.0,
        };
        assert!(wire.into_item().is_none());
    }

    #[test]
    fn tombstoned_comments_are_dropped() {
        for body in ["[deleted]", "[removed]", ""] {
            let wire = CommentWire {
                body: Some(body.to_owned()),
                author: None,
                score: 5,
                created_at: None,
            };
            assert!(wire.into_snippet().is_none(), "body {body:?} should drop");
        }
    }

    #[test]
    fn missing_numeric_fields_default_to_zero() {
        let wire: SearchTrendWire =
            serde_json::from_str(r#"{"query":"ai agents"}"#).unwrap();
        let item = wire.into_item().unwrap();
        assert!((item.popularity_volume() - 0.0).abs() < f64::EPSILON);
        assert!((item.popularity_growth() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn blank_description_reads_as_absent() {
        let wire = NicheAnalysisResponse {
            success: true,
            description: Some("  ".to_owned()),
            match_phrases: Vec::new(),
            categories: Vec::new(),
            exclude_terms: Vec::new(),
        };
        assert!(NicheAnalysis::from(wire).description.is_none());
    }
}
