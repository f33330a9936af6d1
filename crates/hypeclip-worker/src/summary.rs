//! Run summary reporting.

use serde::{Deserialize, Serialize};

use hypeclip_models::{format_seconds, ClipInterval, ClipOutcome, ClipResult};

/// One failed encode task, for the final report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailureDetail {
    pub clip_index: u32,
    pub interval: ClipInterval,
    pub detail: String,
}

/// Aggregated outcome of one clipping run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunSummary {
    /// Transcript tokens seen.
    pub tokens: usize,
    /// Keyword hits found.
    pub hits: usize,
    /// Intervals produced by the merger (including degenerates).
    pub intervals: usize,
    /// Degenerate intervals dropped before scheduling.
    pub skipped_degenerate: usize,
    /// Successful clip exports.
    pub succeeded: usize,
    /// Failed clip exports.
    pub failed: usize,
    /// Per-failure diagnostics.
    pub failures: Vec<FailureDetail>,
    /// Transcription stage wall time in seconds.
    pub transcribe_secs: f64,
    /// Clip export stage wall time in seconds.
    pub export_secs: f64,
    /// Total run wall time in seconds.
    pub total_secs: f64,
}

impl RunSummary {
    /// Fold scheduler results into the summary.
    pub fn record_results(&mut self, results: &[ClipResult]) {
        for result in results {
            match &result.outcome {
                ClipOutcome::Success => self.succeeded += 1,
                ClipOutcome::Failure { detail } => {
                    self.failed += 1;
                    self.failures.push(FailureDetail {
                        clip_index: result.task.index,
                        interval: result.task.interval,
                        detail: detail.clone(),
                    });
                }
            }
        }
    }

    /// Render the human-readable report printed at the end of a run.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "Run finished in {:.2}s (transcribe {:.2}s, export {:.2}s)\n",
            self.total_secs, self.transcribe_secs, self.export_secs
        ));
        out.push_str(&format!(
            "Tokens: {}  Hits: {}  Intervals: {}  Skipped degenerate: {}\n",
            self.tokens, self.hits, self.intervals, self.skipped_degenerate
        ));
        out.push_str(&format!(
            "Clips: {} succeeded, {} failed\n",
            self.succeeded, self.failed
        ));
        for failure in &self.failures {
            out.push_str(&format!(
                "  clip_{} [{} - {}]: {}\n",
                failure.clip_index,
                format_seconds(failure.interval.start),
                format_seconds(failure.interval.end),
                failure.detail
            ));
        }
        out
    }
}
