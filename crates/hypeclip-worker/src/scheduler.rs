//! Bounded-concurrency clip export scheduling.
//!
//! One encode task per finalized interval, dispatched over a fixed-size
//! worker pool (a semaphore over the async runtime). A failing task is
//! recorded as data and never cancels or blocks siblings; the scheduler
//! returns only after every task has completed, with results ordered by
//! task index for deterministic reporting.

use std::path::Path;
use std::sync::Arc;

use futures::future::join_all;
use tokio::sync::Semaphore;
use tracing::{info, warn};

use hypeclip_media::ClipEncoder;
use hypeclip_models::{ClipInterval, ClipResult, ClipTask};

/// Build one task per non-degenerate interval.
///
/// Indices are 1-based in interval order and drive deterministic output
/// filenames. Intervals that collapsed to non-positive duration after
/// clamping are dropped with a warning, not a fatal error; the count of
/// dropped intervals is returned alongside the tasks.
pub fn build_tasks(
    intervals: &[ClipInterval],
    source: impl AsRef<Path>,
    output_dir: impl AsRef<Path>,
    container: &str,
) -> (Vec<ClipTask>, usize) {
    let mut tasks = Vec::with_capacity(intervals.len());
    let mut skipped = 0;

    for interval in intervals {
        if interval.is_degenerate() {
            warn!(
                start = interval.start,
                end = interval.end,
                "Skipping degenerate interval"
            );
            skipped += 1;
            continue;
        }
        let index = (tasks.len() + 1) as u32;
        tasks.push(ClipTask::new(
            index,
            *interval,
            source.as_ref(),
            output_dir.as_ref(),
            container,
        ));
    }

    (tasks, skipped)
}

/// Dispatches encode tasks across a bounded worker pool.
#[derive(Debug, Clone)]
pub struct ClipScheduler {
    max_workers: usize,
}

impl ClipScheduler {
    pub fn new(max_workers: usize) -> Self {
        Self { max_workers }
    }

    /// Run every task to completion, at most `max_workers` concurrently.
    ///
    /// Returns one `ClipResult` per task, ordered by task index
    /// regardless of completion order. Zero tasks returns immediately
    /// without touching the encoder.
    pub async fn run_all(
        &self,
        encoder: Arc<dyn ClipEncoder>,
        tasks: Vec<ClipTask>,
    ) -> Vec<ClipResult> {
        if tasks.is_empty() {
            return Vec::new();
        }

        let total = tasks.len();
        info!(
            tasks = total,
            max_workers = self.max_workers,
            "Exporting clips"
        );

        let semaphore = Arc::new(Semaphore::new(self.max_workers));

        let futures = tasks.into_iter().map(|task| {
            let semaphore = semaphore.clone();
            let encoder = encoder.clone();

            async move {
                let _permit = match semaphore.acquire_owned().await {
                    Ok(permit) => permit,
                    Err(_) => {
                        // The semaphore is never closed while tasks run.
                        return ClipResult::failure(task, "scheduler semaphore closed");
                    }
                };

                match encoder.encode(&task).await {
                    Ok(()) => ClipResult::success(task),
                    Err(e) => {
                        let detail = e.diagnostic();
                        warn!(
                            clip_index = task.index,
                            error = %detail,
                            "Clip export failed"
                        );
                        ClipResult::failure(task, detail)
                    }
                }
            }
        });

        let mut results = join_all(futures).await;
        results.sort_by_key(|r| r.task.index);

        let failed = results.iter().filter(|r| !r.is_success()).count();
        info!(
            completed = results.len() - failed,
            failed = failed,
            "Clip export finished"
        );

        results
    }
}
