//! Hype-moment clipping pipeline.
//!
//! Transcribes a video, scans the transcript for keywords, merges
//! nearby hits into padded clip intervals, and exports each interval
//! with bounded-concurrency ffmpeg jobs.

pub mod config;
pub mod error;
pub mod pipeline;
pub mod scheduler;
pub mod summary;

pub use config::ClipperConfig;
pub use error::{WorkerError, WorkerResult};
pub use pipeline::Pipeline;
pub use scheduler::{build_tasks, ClipScheduler};
pub use summary::{FailureDetail, RunSummary};
