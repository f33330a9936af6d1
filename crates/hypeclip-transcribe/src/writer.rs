//! Plain-text transcript artifact.
//!
//! One line per token, purely diagnostic output; nothing downstream
//! reads it back.

use std::path::Path;

use tracing::info;

use hypeclip_models::{format_seconds, Token};

use crate::error::TranscribeResult;

/// Render tokens as human-readable transcript lines.
pub fn render_transcript(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        out.push_str(&format!(
            "{} --> {}: {}\n",
            format_seconds(token.start),
            format_seconds(token.end),
            token.text.trim()
        ));
    }
    out
}

/// Write the transcript artifact to disk, creating parent directories.
pub async fn write_transcript(path: impl AsRef<Path>, tokens: &[Token]) -> TranscribeResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }
    tokio::fs::write(path, render_transcript(tokens)).await?;
    info!(tokens = tokens.len(), "Transcript saved to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_format() {
        let tokens = vec![
            Token::new(" hello there ", 0.0, 2.5),
            Token::new("that was LOUD", 61.0, 63.0),
        ];
        let rendered = render_transcript(&tokens);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "00:00:00 --> 00:00:02.500: hello there");
        assert_eq!(lines[1], "00:01:01 --> 00:01:03: that was LOUD");
    }

    #[test]
    fn test_render_empty_token_list() {
        assert!(render_transcript(&[]).is_empty());
    }

    #[tokio::test]
    async fn test_write_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/transcript.txt");
        write_transcript(&path, &[Token::new("hi", 0.0, 1.0)])
            .await
            .unwrap();
        let contents = tokio::fs::read_to_string(&path).await.unwrap();
        assert!(contents.contains("hi"));
    }
}
