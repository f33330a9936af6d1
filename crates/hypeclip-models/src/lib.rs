//! Shared data models for the HypeClip pipeline.
//!
//! This crate provides Serde-serializable types for:
//! - Transcript tokens and keyword hits
//! - Clip intervals, tasks, and results
//! - Encoding configuration
//! - Timestamp formatting

pub mod clip;
pub mod encoding;
pub mod interval;
pub mod timestamp;
pub mod transcript;

// Re-export common types
pub use clip::{ClipOutcome, ClipResult, ClipTask};
pub use encoding::EncodingConfig;
pub use interval::ClipInterval;
pub use timestamp::format_seconds;
pub use transcript::{KeywordHit, Token};
