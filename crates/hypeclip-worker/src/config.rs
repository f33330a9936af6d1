//! Run configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use hypeclip_engine::{MatchPolicy, MergePolicy};
use hypeclip_models::EncodingConfig;
use hypeclip_transcribe::{ModelConfig, DEFAULT_WHISPER_BINARY};

use crate::error::{WorkerError, WorkerResult};

/// Default worker pool size for parallel clip exports.
pub const DEFAULT_MAX_WORKERS: usize = 6;

/// Immutable configuration for one clipping run.
///
/// Passed into each component explicitly; there is no process-wide
/// mutable state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClipperConfig {
    /// Source video file.
    pub source: PathBuf,
    /// Directory for exported clips.
    pub output_dir: PathBuf,
    /// Path for the diagnostic transcript artifact.
    pub transcript_path: PathBuf,
    /// Keywords to scan for (case-insensitive substrings).
    pub keywords: Vec<String>,
    /// Substring matching policy.
    #[serde(default)]
    pub match_policy: MatchPolicy,
    /// Windowing parameters for moment merging.
    #[serde(default)]
    pub merge: MergePolicy,
    /// Maximum concurrent encoder invocations.
    #[serde(default = "default_max_workers")]
    pub max_workers: usize,
    /// Whisper model selection.
    #[serde(default)]
    pub model: ModelConfig,
    /// Transcription binary name or path.
    #[serde(default = "default_whisper_binary")]
    pub whisper_binary: String,
    /// Clip encoding parameters.
    #[serde(default)]
    pub encoding: EncodingConfig,
}

fn default_max_workers() -> usize {
    DEFAULT_MAX_WORKERS
}

fn default_whisper_binary() -> String {
    DEFAULT_WHISPER_BINARY.to_string()
}

impl ClipperConfig {
    /// Minimal config for a source file; everything else defaulted.
    pub fn for_source(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            output_dir: PathBuf::from("clips"),
            transcript_path: PathBuf::from("transcript.txt"),
            keywords: Vec::new(),
            match_policy: MatchPolicy::default(),
            merge: MergePolicy::default(),
            max_workers: DEFAULT_MAX_WORKERS,
            model: ModelConfig::default(),
            whisper_binary: default_whisper_binary(),
            encoding: EncodingConfig::default(),
        }
    }

    /// Fail fast on invalid values, before transcription starts.
    pub fn validate(&self) -> WorkerResult<()> {
        if self.source.as_os_str().is_empty() {
            return Err(WorkerError::config_error("source video path is empty"));
        }
        if self.merge.buffer_before < 0.0 {
            return Err(WorkerError::config_error(format!(
                "buffer_before must be >= 0, got {}",
                self.merge.buffer_before
            )));
        }
        if self.merge.buffer_after < 0.0 {
            return Err(WorkerError::config_error(format!(
                "buffer_after must be >= 0, got {}",
                self.merge.buffer_after
            )));
        }
        if self.merge.merge_threshold < 0.0 {
            return Err(WorkerError::config_error(format!(
                "merge_threshold must be >= 0, got {}",
                self.merge.merge_threshold
            )));
        }
        if self.merge.min_duration <= 0.0 {
            return Err(WorkerError::config_error(format!(
                "min_duration must be > 0, got {}",
                self.merge.min_duration
            )));
        }
        if self.max_workers == 0 {
            return Err(WorkerError::config_error("max_workers must be >= 1"));
        }
        Ok(())
    }
}
