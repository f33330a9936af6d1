//! Transcript tokens and keyword hits.

use serde::{Deserialize, Serialize};

/// A unit of transcribed text with a start/end timestamp.
///
/// Produced by the transcript source in start-time order (assumed,
/// not enforced). Times are seconds from the start of the source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// Transcribed text for this token.
    pub text: String,
    /// Start time in seconds.
    pub start: f64,
    /// End time in seconds.
    pub end: f64,
}

impl Token {
    pub fn new(text: impl Into<String>, start: f64, end: f64) -> Self {
        Self {
            text: text.into(),
            start,
            end,
        }
    }
}

/// A token recognized as containing a configured keyword.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordHit {
    /// The source token's start time in seconds.
    pub timestamp: f64,
    /// The token text that matched.
    pub matched_text: String,
    /// The configured keyword that fired (first match wins).
    pub keyword: String,
}
