//! The encoder capability seam.
//!
//! The scheduler only sees the `ClipEncoder` trait, so it can be tested
//! with a fake that simulates latency and failures without invoking
//! real media tools.

use async_trait::async_trait;
use tracing::info;

use hypeclip_models::{ClipTask, EncodingConfig};

use crate::command::{FfmpegCommand, FfmpegRunner};
use crate::error::MediaResult;

/// Executes the media extraction for one clip task.
///
/// Implementations must report failures as `Err`, never panic across
/// the task boundary.
#[async_trait]
pub trait ClipEncoder: Send + Sync {
    async fn encode(&self, task: &ClipTask) -> MediaResult<()>;
}

/// FFmpeg-backed encoder for clip extraction.
#[derive(Debug, Clone)]
pub struct FfmpegEncoder {
    encoding: EncodingConfig,
    timeout_secs: Option<u64>,
}

impl FfmpegEncoder {
    pub fn new(encoding: EncodingConfig) -> Self {
        Self {
            encoding,
            timeout_secs: None,
        }
    }

    /// Wrap each invocation in a deadline, surfaced as a failure.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    /// Build the extraction command for a task.
    fn command_for(&self, task: &ClipTask) -> FfmpegCommand {
        let enc = &self.encoding;
        let mut cmd = FfmpegCommand::new(&task.source, &task.output)
            .seek(task.interval.start)
            .duration(task.interval.duration())
            .frame_rate(enc.frame_rate)
            .video_codec(&enc.video_codec)
            .preset(&enc.preset);

        // NVENC rejects -crf; software encoders ignore -cq
        cmd = if enc.is_nvenc() {
            cmd.cq(enc.quality)
        } else {
            cmd.crf(enc.quality)
        };

        cmd.audio_codec(&enc.audio_codec)
            .audio_bitrate(&enc.audio_bitrate)
    }
}

#[async_trait]
impl ClipEncoder for FfmpegEncoder {
    async fn encode(&self, task: &ClipTask) -> MediaResult<()> {
        info!(
            clip_index = task.index,
            start = task.interval.start,
            duration = task.interval.duration(),
            output = %task.output.display(),
            "Exporting clip"
        );

        let mut runner = FfmpegRunner::new();
        if let Some(secs) = self.timeout_secs {
            runner = runner.with_timeout(secs);
        }
        runner.run(&self.command_for(task)).await?;

        info!(clip_index = task.index, "Clip exported: {}", task.output.display());
        Ok(())
    }
}
