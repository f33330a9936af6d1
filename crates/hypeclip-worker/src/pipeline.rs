//! The end-to-end clipping pipeline.
//!
//! Data flows strictly forward: tokens -> hits -> intervals ->
//! scheduled tasks -> outcomes. Setup-phase errors abort before
//! anything is clipped; per-task errors are isolated and aggregated
//! into the run summary.

use std::sync::Arc;
use std::time::Instant;

use tracing::{info, warn};

use hypeclip_engine::{merge_hits, KeywordSet};
use hypeclip_media::{check_ffmpeg, probe_duration, ClipEncoder, FfmpegEncoder};
use hypeclip_transcribe::{write_transcript, TranscriptSource, WhisperCliSource};

use crate::config::ClipperConfig;
use crate::error::{WorkerError, WorkerResult};
use crate::scheduler::{build_tasks, ClipScheduler};
use crate::summary::RunSummary;

/// One configured clipping run.
pub struct Pipeline {
    config: ClipperConfig,
    source: Arc<dyn TranscriptSource>,
    encoder: Arc<dyn ClipEncoder>,
}

impl Pipeline {
    /// Build a pipeline with the real whisper and ffmpeg adapters.
    /// Fails fast when ffmpeg is not on the PATH.
    pub fn new(config: ClipperConfig) -> WorkerResult<Self> {
        config.validate()?;
        check_ffmpeg()?;
        let source = Arc::new(
            WhisperCliSource::new(config.model.clone()).with_binary(&config.whisper_binary),
        );
        let encoder = Arc::new(FfmpegEncoder::new(config.encoding.clone()));
        Ok(Self {
            config,
            source,
            encoder,
        })
    }

    /// Build a pipeline with injected collaborators (test seam).
    pub fn with_parts(
        config: ClipperConfig,
        source: Arc<dyn TranscriptSource>,
        encoder: Arc<dyn ClipEncoder>,
    ) -> WorkerResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            source,
            encoder,
        })
    }

    /// Execute the run.
    pub async fn run(&self) -> WorkerResult<RunSummary> {
        let total_start = Instant::now();
        let cfg = &self.config;

        if !cfg.source.exists() {
            return Err(WorkerError::SourceMissing(cfg.source.clone()));
        }

        // Duration is only used to clamp interval ends; a failed probe
        // degrades to unclamped ends instead of aborting the run.
        let total_duration = match probe_duration(&cfg.source).await {
            Ok(duration) => Some(duration),
            Err(e) => {
                warn!(error = %e, "Could not probe source duration, ends unclamped");
                None
            }
        };

        let transcribe_start = Instant::now();
        let tokens = self.source.transcribe(&cfg.source).await?;
        let transcribe_secs = transcribe_start.elapsed().as_secs_f64();
        info!(
            tokens = tokens.len(),
            "Transcription done in {:.2}s",
            transcribe_secs
        );

        write_transcript(&cfg.transcript_path, &tokens).await?;

        let keyword_set = KeywordSet::new(&cfg.keywords, cfg.match_policy);
        let hits = keyword_set.scan(&tokens);
        info!(hits = hits.len(), "Found hype moments");

        let intervals = merge_hits(&hits, &cfg.merge, total_duration);

        tokio::fs::create_dir_all(&cfg.output_dir).await?;
        let (tasks, skipped) = build_tasks(
            &intervals,
            &cfg.source,
            &cfg.output_dir,
            &cfg.encoding.container,
        );

        let export_start = Instant::now();
        let results = ClipScheduler::new(cfg.max_workers)
            .run_all(self.encoder.clone(), tasks)
            .await;

        let mut summary = RunSummary {
            tokens: tokens.len(),
            hits: hits.len(),
            intervals: intervals.len(),
            skipped_degenerate: skipped,
            transcribe_secs,
            export_secs: export_start.elapsed().as_secs_f64(),
            ..RunSummary::default()
        };
        summary.record_results(&results);
        summary.total_secs = total_start.elapsed().as_secs_f64();

        Ok(summary)
    }
}
