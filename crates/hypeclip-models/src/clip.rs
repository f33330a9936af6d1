//! Clip task and result models.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::interval::ClipInterval;

/// One planned encode job for a finalized interval.
///
/// Created once per interval, immutable, consumed exactly once by the
/// scheduler. `index` is 1-based in final interval order and drives the
/// deterministic output filename.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClipTask {
    /// 1-based position in the finalized interval set.
    pub index: u32,
    /// The padded, duration-adjusted time window to extract.
    pub interval: ClipInterval,
    /// Source media file.
    pub source: PathBuf,
    /// Output media file, derived from `index`.
    pub output: PathBuf,
}

impl ClipTask {
    /// Build the deterministic output filename for an interval index.
    pub fn output_filename(index: u32, container: &str) -> String {
        format!("clip_{}.{}", index, container)
    }

    pub fn new(
        index: u32,
        interval: ClipInterval,
        source: impl AsRef<Path>,
        output_dir: impl AsRef<Path>,
        container: &str,
    ) -> Self {
        let output = output_dir
            .as_ref()
            .join(Self::output_filename(index, container));
        Self {
            index,
            interval,
            source: source.as_ref().to_path_buf(),
            output,
        }
    }
}

/// Terminal outcome of one encode task.
///
/// Failures are carried as data so one bad task never aborts siblings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum ClipOutcome {
    Success,
    Failure {
        /// Captured diagnostic text (stderr, exit code, or error message).
        detail: String,
    },
}

/// The scheduler's record for one completed task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClipResult {
    pub task: ClipTask,
    pub outcome: ClipOutcome,
}

impl ClipResult {
    pub fn success(task: ClipTask) -> Self {
        Self {
            task,
            outcome: ClipOutcome::Success,
        }
    }

    pub fn failure(task: ClipTask, detail: impl Into<String>) -> Self {
        Self {
            task,
            outcome: ClipOutcome::Failure {
                detail: detail.into(),
            },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.outcome, ClipOutcome::Success)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_filename_is_ordinal() {
        assert_eq!(ClipTask::output_filename(1, "mkv"), "clip_1.mkv");
        assert_eq!(ClipTask::output_filename(12, "mp4"), "clip_12.mp4");
    }

    #[test]
    fn test_task_output_path() {
        let task = ClipTask::new(
            3,
            ClipInterval::new(10.0, 70.0),
            "/videos/stream.mkv",
            "/videos/clips",
            "mkv",
        );
        assert_eq!(task.output, PathBuf::from("/videos/clips/clip_3.mkv"));
        assert_eq!(task.index, 3);
    }

    #[test]
    fn test_result_outcomes() {
        let task = ClipTask::new(
            1,
            ClipInterval::new(0.0, 60.0),
            "in.mkv",
            "clips",
            "mkv",
        );
        assert!(ClipResult::success(task.clone()).is_success());
        let failed = ClipResult::failure(task, "ffmpeg exited with code 1");
        assert!(!failed.is_success());
        match failed.outcome {
            ClipOutcome::Failure { detail } => assert!(detail.contains("code 1")),
            ClipOutcome::Success => panic!("expected failure"),
        }
    }
}
