//! HypeClip binary: find and export hype moments from a video.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use hypeclip_engine::{MatchPolicy, MergePolicy};
use hypeclip_models::EncodingConfig;
use hypeclip_transcribe::ModelConfig;
use hypeclip_worker::{ClipperConfig, Pipeline};

/// Locate hype moments in a video via transcript keywords and export
/// each moment as a clip.
#[derive(Debug, Parser)]
#[command(name = "hypeclip", version, about)]
struct Cli {
    /// Source video file
    video: PathBuf,

    /// Keyword to scan for (repeatable, or comma-separated)
    #[arg(short = 'k', long = "keyword", value_delimiter = ',')]
    keywords: Vec<String>,

    /// Directory for exported clips
    #[arg(long, default_value = "clips")]
    output_dir: PathBuf,

    /// Path for the transcript artifact
    #[arg(long, default_value = "transcript.txt")]
    transcript: PathBuf,

    /// Seconds of padding before a detected moment
    #[arg(long, default_value_t = 1.5)]
    buffer_before: f64,

    /// Seconds of padding after a detected moment
    #[arg(long, default_value_t = 3.0)]
    buffer_after: f64,

    /// Maximum gap in seconds between hits that still merges them
    #[arg(long, default_value_t = 10.0)]
    merge_threshold: f64,

    /// Minimum clip length in seconds
    #[arg(long, default_value_t = 60.0)]
    min_duration: f64,

    /// Parallel encoder invocations
    #[arg(long, default_value_t = 6)]
    max_workers: usize,

    /// Also match tokens that are substrings of a keyword
    #[arg(long)]
    loose_match: bool,

    /// Whisper model size (small, medium, large-v2, ...)
    #[arg(long, default_value = "medium")]
    model: String,

    /// Inference device (auto, cpu, cuda)
    #[arg(long, default_value = "auto")]
    device: String,

    /// Compute type (float16, int8, ...)
    #[arg(long, default_value = "float16")]
    compute_type: String,

    /// Transcription binary name or path
    #[arg(long, default_value = hypeclip_transcribe::DEFAULT_WHISPER_BINARY)]
    whisper_binary: String,

    /// Video codec (libx264, h264_nvenc, ...)
    #[arg(long, default_value = "libx264")]
    video_codec: String,

    /// Encoding preset (fast, medium, or p1-p7 for NVENC)
    #[arg(long, default_value = "fast")]
    preset: String,

    /// Constant quality, 0-51 (-crf for software codecs, -cq for NVENC)
    #[arg(long, default_value_t = 21)]
    quality: u8,

    /// Audio codec
    #[arg(long, default_value = "aac")]
    audio_codec: String,

    /// Audio bitrate
    #[arg(long, default_value = "192k")]
    audio_bitrate: String,

    /// Clip frame rate
    #[arg(long, default_value_t = 60)]
    frame_rate: u32,

    /// Output container extension (mkv, mp4, ...)
    #[arg(long, default_value = "mkv")]
    container: String,
}

impl Cli {
    fn into_config(self) -> ClipperConfig {
        let mut cfg = ClipperConfig::for_source(self.video);
        cfg.output_dir = self.output_dir;
        cfg.transcript_path = self.transcript;
        cfg.keywords = self.keywords;
        cfg.match_policy = if self.loose_match {
            MatchPolicy::Either
        } else {
            MatchPolicy::KeywordInToken
        };
        cfg.merge = MergePolicy {
            buffer_before: self.buffer_before,
            buffer_after: self.buffer_after,
            merge_threshold: self.merge_threshold,
            min_duration: self.min_duration,
        };
        cfg.max_workers = self.max_workers;
        cfg.model = ModelConfig {
            size: self.model,
            device: self.device,
            compute_type: self.compute_type,
        };
        cfg.whisper_binary = self.whisper_binary;
        cfg.encoding = EncodingConfig {
            video_codec: self.video_codec,
            preset: self.preset,
            quality: self.quality,
            audio_codec: self.audio_codec,
            audio_bitrate: self.audio_bitrate,
            frame_rate: self.frame_rate,
            container: self.container,
        };
        cfg
    }
}

fn init_tracing() {
    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| v.to_lowercase() == "json")
        .unwrap_or(false);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if use_json {
        tracing_subscriber::registry()
            .with(fmt::layer().json())
            .with(env_filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_ansi(true)
                    .with_target(false)
                    .with_file(false)
                    .with_line_number(false),
            )
            .with(env_filter)
            .init();
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = Cli::parse().into_config();
    info!(
        source = %config.source.display(),
        keywords = config.keywords.len(),
        max_workers = config.max_workers,
        "Starting hypeclip run"
    );

    let pipeline = match Pipeline::new(config) {
        Ok(pipeline) => pipeline,
        Err(e) => {
            error!("Setup failed: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match pipeline.run().await {
        Ok(summary) => {
            // Per-task failures are reported data, not a process failure.
            print!("{}", summary.render());
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Run failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
