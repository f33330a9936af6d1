//! FFmpeg CLI wrapper for clip extraction.
//!
//! This crate provides:
//! - Type-safe FFmpeg command building
//! - An async runner with captured stderr and optional timeout
//! - FFprobe duration probing
//! - The `ClipEncoder` capability trait and its FFmpeg implementation

pub mod command;
pub mod encoder;
pub mod error;
pub mod probe;

pub use command::{check_ffmpeg, check_ffprobe, FfmpegCommand, FfmpegRunner};
pub use encoder::{ClipEncoder, FfmpegEncoder};
pub use error::{MediaError, MediaResult};
pub use probe::probe_duration;
