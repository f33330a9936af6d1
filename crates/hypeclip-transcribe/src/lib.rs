//! Transcript source adapters for HypeClip.
//!
//! This crate provides:
//! - The `TranscriptSource` capability trait
//! - A whisper CLI adapter (`WhisperCliSource`)
//! - The plain-text transcript artifact writer

pub mod error;
pub mod source;
pub mod whisper;
pub mod writer;

pub use error::{TranscribeError, TranscribeResult};
pub use source::{ModelConfig, TranscriptSource};
pub use whisper::{WhisperCliSource, DEFAULT_WHISPER_BINARY};
pub use writer::{render_transcript, write_transcript};
