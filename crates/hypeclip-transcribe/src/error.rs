//! Transcription error types.

use std::path::PathBuf;
use thiserror::Error;

pub type TranscribeResult<T> = Result<T, TranscribeError>;

/// Errors from the speech-to-text stage. All of these are fatal to a
/// run: nothing is clipped when transcription fails.
#[derive(Debug, Error)]
pub enum TranscribeError {
    #[error("Transcription binary not found in PATH: {0}")]
    BinaryNotFound(String),

    #[error("Media file not found: {0}")]
    MediaNotFound(PathBuf),

    #[error("Transcription engine failed: {message}")]
    EngineFailed {
        message: String,
        stderr: Option<String>,
    },

    #[error("Transcription output not found: {0}")]
    OutputMissing(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl TranscribeError {
    pub fn engine_failed(message: impl Into<String>, stderr: Option<String>) -> Self {
        Self::EngineFailed {
            message: message.into(),
            stderr,
        }
    }
}
