//! Whisper CLI transcript source.
//!
//! Invokes an external faster-whisper CLI (whisper-ctranslate2 by
//! default) that writes an OpenAI-Whisper-shaped JSON file, then parses
//! its segments into ordered tokens.

use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use serde::Deserialize;
use tokio::process::Command;
use tracing::{debug, info};

use hypeclip_models::Token;

use crate::error::{TranscribeError, TranscribeResult};
use crate::source::{ModelConfig, TranscriptSource};

/// Default transcription binary.
pub const DEFAULT_WHISPER_BINARY: &str = "whisper-ctranslate2";

/// Whisper JSON output shape (segment level).
#[derive(Debug, Deserialize)]
struct WhisperOutput {
    #[serde(default)]
    segments: Vec<WhisperSegment>,
}

#[derive(Debug, Deserialize)]
struct WhisperSegment {
    start: f64,
    end: f64,
    text: String,
}

/// Transcript source backed by an external whisper CLI.
#[derive(Debug, Clone)]
pub struct WhisperCliSource {
    binary: String,
    model: ModelConfig,
}

impl WhisperCliSource {
    pub fn new(model: ModelConfig) -> Self {
        Self {
            binary: DEFAULT_WHISPER_BINARY.to_string(),
            model,
        }
    }

    /// Override the transcription binary name or path.
    pub fn with_binary(mut self, binary: impl Into<String>) -> Self {
        self.binary = binary.into();
        self
    }

    fn output_json_path(media: &Path, output_dir: &Path) -> PathBuf {
        let stem = media
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "transcript".to_string());
        output_dir.join(format!("{}.json", stem))
    }

    fn parse_output(bytes: &[u8]) -> TranscribeResult<Vec<Token>> {
        let parsed: WhisperOutput = serde_json::from_slice(bytes)?;
        Ok(parsed
            .segments
            .into_iter()
            .map(|seg| Token::new(seg.text, seg.start, seg.end))
            .collect())
    }
}

#[async_trait]
impl TranscriptSource for WhisperCliSource {
    async fn transcribe(&self, media: &Path) -> TranscribeResult<Vec<Token>> {
        if !media.exists() {
            return Err(TranscribeError::MediaNotFound(media.to_path_buf()));
        }
        which::which(&self.binary)
            .map_err(|_| TranscribeError::BinaryNotFound(self.binary.clone()))?;

        let workdir = tempfile::tempdir()?;

        info!(
            model = %self.model.size,
            device = %self.model.device,
            compute_type = %self.model.compute_type,
            "Transcribing {}",
            media.display()
        );

        let output = Command::new(&self.binary)
            .arg("--model")
            .arg(&self.model.size)
            .arg("--device")
            .arg(&self.model.device)
            .arg("--compute_type")
            .arg(&self.model.compute_type)
            .arg("--output_format")
            .arg("json")
            .arg("--output_dir")
            .arg(workdir.path())
            .arg(media)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .await?;

        if !output.status.success() {
            return Err(TranscribeError::engine_failed(
                format!(
                    "{} exited with status {:?}",
                    self.binary,
                    output.status.code()
                ),
                Some(String::from_utf8_lossy(&output.stderr).to_string()),
            ));
        }

        let json_path = Self::output_json_path(media, workdir.path());
        if !json_path.exists() {
            return Err(TranscribeError::OutputMissing(json_path));
        }

        let bytes = tokio::fs::read(&json_path).await?;
        let tokens = Self::parse_output(&bytes)?;
        debug!(tokens = tokens.len(), "Transcription parsed");
        Ok(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_whisper_json_segments() {
        let json = r#"{
            "text": " hello world that was hilarious",
            "segments": [
                {"id": 0, "start": 0.0, "end": 2.5, "text": " hello world"},
                {"id": 1, "start": 2.5, "end": 5.0, "text": " that was hilarious"}
            ],
            "language": "en"
        }"#;
        let tokens = WhisperCliSource::parse_output(json.as_bytes()).unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].start, 0.0);
        assert_eq!(tokens[0].end, 2.5);
        assert_eq!(tokens[1].text, " that was hilarious");
    }

    #[test]
    fn test_parse_empty_transcription_is_valid() {
        let tokens = WhisperCliSource::parse_output(br#"{"text": "", "segments": []}"#).unwrap();
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_parse_garbage_is_an_error() {
        assert!(WhisperCliSource::parse_output(b"not json").is_err());
    }

    #[test]
    fn test_output_json_path_uses_media_stem() {
        let path = WhisperCliSource::output_json_path(
            Path::new("/videos/stream_2024.mkv"),
            Path::new("/tmp/work"),
        );
        assert_eq!(path, PathBuf::from("/tmp/work/stream_2024.json"));
    }

    #[tokio::test]
    async fn test_missing_media_is_fatal() {
        let source = WhisperCliSource::new(ModelConfig::default());
        let err = source
            .transcribe(Path::new("/nonexistent/video.mkv"))
            .await
            .unwrap_err();
        assert!(matches!(err, TranscribeError::MediaNotFound(_)));
    }
}
