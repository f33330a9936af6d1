//! Clip intervals.

use serde::{Deserialize, Serialize};

/// A padded, duration-adjusted time window selected for clipping.
///
/// Invariants for intervals in a finalized set: `end > start`,
/// `start >= 0`, ordered by start time, pairwise non-overlapping.
/// An interval can temporarily violate `end > start` after end
/// clamping; such degenerate intervals are dropped before scheduling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClipInterval {
    /// Start time in seconds.
    pub start: f64,
    /// End time in seconds.
    pub end: f64,
}

impl ClipInterval {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Interval length in seconds.
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// True if the interval collapsed to non-positive duration.
    pub fn is_degenerate(&self) -> bool {
        self.end <= self.start
    }

    /// True if `ts` lies within the interval (inclusive bounds).
    pub fn contains(&self, ts: f64) -> bool {
        ts >= self.start && ts <= self.end
    }

    /// True if this interval overlaps or touches `other`.
    pub fn overlaps(&self, other: &ClipInterval) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}
