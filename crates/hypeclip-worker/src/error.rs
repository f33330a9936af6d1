//! Worker error types.

use std::path::PathBuf;
use thiserror::Error;

pub type WorkerResult<T> = Result<T, WorkerError>;

/// Fatal setup-phase errors. Per-task encode failures are never
/// represented here; they travel as `ClipOutcome::Failure` data.
#[derive(Debug, Error)]
pub enum WorkerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Source file not found: {0}")]
    SourceMissing(PathBuf),

    #[error("Transcription failed: {0}")]
    Transcribe(#[from] hypeclip_transcribe::TranscribeError),

    #[error("Media error: {0}")]
    Media(#[from] hypeclip_media::MediaError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl WorkerError {
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
