//! Relevance scoring for nichepulse.
//!
//! Pure, synchronous ranking core: normalizes creator and corpus text into a
//! canonical comparison form, decides phrase matches with whole-word
//! semantics for single tokens, scores each trend item against a niche
//! profile, and collapses the scored set into a deduplicated, ordered
//! result. No I/O happens here; the async stages live in
//! `nichepulse-pipeline`.

pub mod matcher;
pub mod normalize;
pub mod profile;
pub mod rank;
pub mod scorer;

pub use matcher::matches;
pub use normalize::normalize;
pub use profile::NicheProfile;
pub use rank::rank;
pub use scorer::{score, ScoredTrend, EXCLUDED};
