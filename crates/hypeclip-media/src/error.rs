//! Error types for media operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for media operations.
pub type MediaResult<T> = Result<T, MediaError>;

/// Errors that can occur while invoking external media tools.
#[derive(Debug, Error)]
pub enum MediaError {
    #[error("FFmpeg not found in PATH")]
    FfmpegNotFound,

    #[error("FFprobe not found in PATH")]
    FfprobeNotFound,

    #[error("FFmpeg command failed: {message}")]
    FfmpegFailed {
        message: String,
        stderr: Option<String>,
        exit_code: Option<i32>,
    },

    #[error("FFprobe command failed: {message}")]
    FfprobeFailed {
        message: String,
        stderr: Option<String>,
    },

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Invalid video file: {0}")]
    InvalidVideo(String),

    #[error("Operation timed out after {0} seconds")]
    Timeout(u64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl MediaError {
    /// Create an FFmpeg failure error.
    pub fn ffmpeg_failed(
        message: impl Into<String>,
        stderr: Option<String>,
        exit_code: Option<i32>,
    ) -> Self {
        Self::FfmpegFailed {
            message: message.into(),
            stderr,
            exit_code,
        }
    }

    /// Render the failure for a per-task diagnostic record, preferring
    /// captured stderr over the generic message.
    pub fn diagnostic(&self) -> String {
        match self {
            Self::FfmpegFailed {
                message,
                stderr,
                exit_code,
            } => {
                let stderr = stderr.as_deref().map(str::trim).unwrap_or("");
                if stderr.is_empty() {
                    match exit_code {
                        Some(code) => format!("{} (exit code {})", message, code),
                        None => message.clone(),
                    }
                } else {
                    stderr.to_string()
                }
            }
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_prefers_stderr() {
        let err = MediaError::ffmpeg_failed(
            "FFmpeg exited with non-zero status",
            Some("  Unknown encoder 'h264_nvenc'\n".to_string()),
            Some(1),
        );
        assert_eq!(err.diagnostic(), "Unknown encoder 'h264_nvenc'");
    }

    #[test]
    fn test_diagnostic_falls_back_to_exit_code() {
        let err = MediaError::ffmpeg_failed("FFmpeg exited with non-zero status", None, Some(137));
        assert!(err.diagnostic().contains("exit code 137"));
    }
}
