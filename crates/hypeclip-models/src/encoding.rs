//! Video encoding configuration.

use serde::{Deserialize, Serialize};

/// Default video codec (H.264). Use "h264_nvenc" for GPU encoding.
pub const DEFAULT_VIDEO_CODEC: &str = "libx264";
/// Default encoding preset.
pub const DEFAULT_PRESET: &str = "fast";
/// Default constant-quality value (CRF for software codecs, CQ for NVENC).
pub const DEFAULT_QUALITY: u8 = 21;
/// Default audio codec.
pub const DEFAULT_AUDIO_CODEC: &str = "aac";
/// Default audio bitrate.
pub const DEFAULT_AUDIO_BITRATE: &str = "192k";
/// Default clip frame rate.
pub const DEFAULT_FRAME_RATE: u32 = 60;
/// Default output container extension.
pub const DEFAULT_CONTAINER: &str = "mkv";

/// Video encoding configuration for exported clips.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncodingConfig {
    /// Video codec (e.g., "libx264", "h264_nvenc")
    #[serde(default = "default_video_codec")]
    pub video_codec: String,

    /// Encoding preset (e.g., "fast", "medium", "p4" for NVENC)
    #[serde(default = "default_preset")]
    pub preset: String,

    /// Constant quality (0-51, lower is better). Emitted as -crf for
    /// software codecs and -cq for NVENC codecs.
    #[serde(default = "default_quality")]
    pub quality: u8,

    /// Audio codec
    #[serde(default = "default_audio_codec")]
    pub audio_codec: String,

    /// Audio bitrate
    #[serde(default = "default_audio_bitrate")]
    pub audio_bitrate: String,

    /// Output frame rate
    #[serde(default = "default_frame_rate")]
    pub frame_rate: u32,

    /// Output container extension (e.g., "mkv", "mp4")
    #[serde(default = "default_container")]
    pub container: String,
}

fn default_video_codec() -> String {
    DEFAULT_VIDEO_CODEC.to_string()
}
fn default_preset() -> String {
    DEFAULT_PRESET.to_string()
}
fn default_quality() -> u8 {
    DEFAULT_QUALITY
}
fn default_audio_codec() -> String {
    DEFAULT_AUDIO_CODEC.to_string()
}
fn default_audio_bitrate() -> String {
    DEFAULT_AUDIO_BITRATE.to_string()
}
fn default_frame_rate() -> u32 {
    DEFAULT_FRAME_RATE
}
fn default_container() -> String {
    DEFAULT_CONTAINER.to_string()
}

impl Default for EncodingConfig {
    fn default() -> Self {
        Self {
            video_codec: default_video_codec(),
            preset: default_preset(),
            quality: DEFAULT_QUALITY,
            audio_codec: default_audio_codec(),
            audio_bitrate: default_audio_bitrate(),
            frame_rate: DEFAULT_FRAME_RATE,
            container: default_container(),
        }
    }
}

impl EncodingConfig {
    /// NVENC hardware-encoding configuration matching a typical
    /// GPU-accelerated export (p4 preset, cq 21).
    pub fn nvenc() -> Self {
        Self {
            video_codec: "h264_nvenc".to_string(),
            preset: "p4".to_string(),
            ..Self::default()
        }
    }

    /// True if the codec is an NVENC hardware encoder.
    pub fn is_nvenc(&self) -> bool {
        self.video_codec.ends_with("_nvenc")
    }

    pub fn with_video_codec(mut self, codec: impl Into<String>) -> Self {
        self.video_codec = codec.into();
        self
    }

    pub fn with_frame_rate(mut self, fps: u32) -> Self {
        self.frame_rate = fps;
        self
    }
}
