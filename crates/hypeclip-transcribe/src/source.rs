//! The transcript source capability seam.

use std::path::Path;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use hypeclip_models::Token;

use crate::error::TranscribeResult;

/// Whisper model selection, mirroring the engine's own flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Model size, e.g. "small", "medium", "large-v2"
    #[serde(default = "default_size")]
    pub size: String,
    /// Inference device, e.g. "auto", "cpu", "cuda"
    #[serde(default = "default_device")]
    pub device: String,
    /// Compute type, e.g. "float16", "int8"
    #[serde(default = "default_compute_type")]
    pub compute_type: String,
}

fn default_size() -> String {
    "medium".to_string()
}
fn default_device() -> String {
    "auto".to_string()
}
fn default_compute_type() -> String {
    "float16".to_string()
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            size: default_size(),
            device: default_device(),
            compute_type: default_compute_type(),
        }
    }
}

/// Yields ordered timestamped tokens for a media file.
///
/// Failures abort the whole run before any clipping begins.
#[async_trait]
pub trait TranscriptSource: Send + Sync {
    async fn transcribe(&self, media: &Path) -> TranscribeResult<Vec<Token>>;
}
