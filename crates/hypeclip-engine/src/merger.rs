//! Moment merging: keyword hits into padded clip intervals.
//!
//! A single left-to-right sweep over sorted raw hit timestamps. The
//! merge decision always compares two consecutive *raw* timestamps
//! against the threshold, never a timestamp against the accumulated
//! window edge, so a long run of closely spaced hits merges into one
//! window even when that window has grown far past the threshold.

use serde::{Deserialize, Serialize};

use hypeclip_models::{ClipInterval, KeywordHit};

/// Windowing parameters for moment merging. All values in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MergePolicy {
    /// Padding added before a hit when opening its window.
    pub buffer_before: f64,
    /// Padding added after a hit when opening or extending a window.
    pub buffer_after: f64,
    /// Maximum gap between consecutive raw hit timestamps that still
    /// combines their windows.
    pub merge_threshold: f64,
    /// Shortest allowed final interval, enforced by forward extension.
    pub min_duration: f64,
}

impl Default for MergePolicy {
    fn default() -> Self {
        Self {
            buffer_before: 1.5,
            buffer_after: 3.0,
            merge_threshold: 10.0,
            min_duration: 60.0,
        }
    }
}

/// Convert keyword hits into the minimal ordered set of padded,
/// duration-adjusted, non-overlapping clip intervals.
///
/// Hit timestamps are sorted and exact duplicates removed before the
/// sweep, so unsorted upstream input still yields a deterministic
/// result. `total_duration`, when known, clamps interval ends; interval
/// starts are always clamped to zero. An empty hit list yields an empty
/// set.
pub fn merge_hits(
    hits: &[KeywordHit],
    policy: &MergePolicy,
    total_duration: Option<f64>,
) -> Vec<ClipInterval> {
    let timestamps: Vec<f64> = hits.iter().map(|h| h.timestamp).collect();
    merge_timestamps(&timestamps, policy, total_duration)
}

/// Core sweep over raw hit timestamps. See [`merge_hits`].
pub fn merge_timestamps(
    timestamps: &[f64],
    policy: &MergePolicy,
    total_duration: Option<f64>,
) -> Vec<ClipInterval> {
    let mut sorted = timestamps.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    sorted.dedup();

    let first = match sorted.first() {
        Some(first) => *first,
        None => return Vec::new(),
    };

    let mut windows = Vec::new();
    let mut current = ClipInterval::new(first - policy.buffer_before, first + policy.buffer_after);
    let mut prev = first;

    for &ts in &sorted[1..] {
        if ts - prev <= policy.merge_threshold {
            current.end = current.end.max(ts + policy.buffer_after);
        } else {
            windows.push(current);
            current = ClipInterval::new(ts - policy.buffer_before, ts + policy.buffer_after);
        }
        prev = ts;
    }
    windows.push(current);

    for window in &mut windows {
        if window.duration() < policy.min_duration {
            window.end = window.start + policy.min_duration;
        }
        window.start = window.start.max(0.0);
        if let Some(total) = total_duration {
            window.end = window.end.min(total);
        }
    }

    coalesce(windows)
}

/// Union overlapping or touching neighbors.
///
/// Forward-only min-duration extension can push a window's end past its
/// successor's start; the published invariant (ordered, pairwise
/// non-overlapping) wins, and unioning never shrinks hit coverage.
fn coalesce(windows: Vec<ClipInterval>) -> Vec<ClipInterval> {
    let mut merged: Vec<ClipInterval> = Vec::with_capacity(windows.len());
    for window in windows {
        match merged.last_mut() {
            Some(last) if window.start <= last.end => {
                last.end = last.end.max(window.end);
            }
            _ => merged.push(window),
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy(bb: f64, ba: f64, threshold: f64, min: f64) -> MergePolicy {
        MergePolicy {
            buffer_before: bb,
            buffer_after: ba,
            merge_threshold: threshold,
            min_duration: min,
        }
    }

    fn assert_interval(interval: &ClipInterval, start: f64, end: f64) {
        assert!(
            (interval.start - start).abs() < 1e-9 && (interval.end - end).abs() < 1e-9,
            "expected [{}, {}], got [{}, {}]",
            start,
            end,
            interval.start,
            interval.end
        );
    }

    #[test]
    fn test_empty_hits_yield_empty_set() {
        assert!(merge_timestamps(&[], &MergePolicy::default(), None).is_empty());
    }

    #[test]
    fn test_single_hit_min_duration() {
        // Spec worked example: hit at 100, buffers 1.5/3, min 60.
        let intervals = merge_timestamps(&[100.0], &policy(1.5, 3.0, 10.0, 60.0), None);
        assert_eq!(intervals.len(), 1);
        assert_interval(&intervals[0], 98.5, 158.5);
    }

    #[test]
    fn test_merge_threshold_worked_example() {
        // Hits 0, 5, 9 chain within threshold 10; hit 50 stands alone.
        let intervals = merge_timestamps(&[0.0, 5.0, 9.0, 50.0], &policy(1.0, 2.0, 10.0, 0.0), None);
        assert_eq!(intervals.len(), 2);
        assert_interval(&intervals[0], 0.0, 11.0); // start clamped from -1
        assert_interval(&intervals[1], 49.0, 52.0);
    }

    #[test]
    fn test_merge_uses_raw_gaps_not_window_edges() {
        // Consecutive gaps are all 8 <= 10, so everything merges even
        // though the window grows to 80s, far past the threshold.
        let hits: Vec<f64> = (0..11).map(|i| i as f64 * 8.0).collect();
        let intervals = merge_timestamps(&hits, &policy(1.0, 2.0, 10.0, 0.0), None);
        assert_eq!(intervals.len(), 1);
        assert_interval(&intervals[0], 0.0, 82.0);
    }

    #[test]
    fn test_window_end_never_moves_backward() {
        // A late hit whose padded end falls inside the accumulated
        // window must not shrink it.
        let intervals = merge_timestamps(&[0.0, 1.0], &policy(0.0, 10.0, 5.0, 0.0), None);
        assert_eq!(intervals.len(), 1);
        assert_interval(&intervals[0], 0.0, 11.0);
    }

    #[test]
    fn test_unsorted_and_duplicate_input_is_deterministic() {
        let p = policy(1.0, 2.0, 10.0, 0.0);
        let a = merge_timestamps(&[50.0, 9.0, 0.0, 5.0, 9.0], &p, None);
        let b = merge_timestamps(&[0.0, 5.0, 9.0, 50.0], &p, None);
        assert_eq!(a, b);
    }

    #[test]
    fn test_output_is_ordered_and_non_overlapping() {
        let hits = [3.0, 40.0, 41.0, 90.0, 200.0, 203.0];
        let intervals = merge_timestamps(&hits, &policy(2.0, 4.0, 10.0, 30.0), None);
        for pair in intervals.windows(2) {
            assert!(pair[0].start < pair[1].start);
            assert!(pair[0].end < pair[1].start, "{:?} overlaps {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_every_hit_is_covered() {
        let hits = [0.0, 7.0, 33.0, 100.0, 104.0, 350.0];
        let intervals = merge_timestamps(&hits, &policy(1.5, 3.0, 10.0, 60.0), None);
        for &ts in &hits {
            assert!(
                intervals.iter().any(|iv| iv.contains(ts)),
                "hit {} not covered by {:?}",
                ts,
                intervals
            );
        }
    }

    #[test]
    fn test_min_duration_extension_coalesces_with_successor() {
        // Hits 0 and 30 are separate by threshold, but extending the
        // first window to 60s swallows the second; the final set must
        // still be non-overlapping.
        let intervals = merge_timestamps(&[0.0, 30.0], &policy(1.0, 2.0, 10.0, 60.0), None);
        assert_eq!(intervals.len(), 1);
        assert_interval(&intervals[0], 0.0, 89.0);
    }

    #[test]
    fn test_end_clamped_to_total_duration() {
        let intervals = merge_timestamps(&[100.0], &policy(1.5, 3.0, 10.0, 60.0), Some(120.0));
        assert_eq!(intervals.len(), 1);
        assert_interval(&intervals[0], 98.5, 120.0);
    }

    #[test]
    fn test_clamp_can_produce_degenerate_interval() {
        // A hit right at (or past) the end of the video collapses after
        // clamping; the merger emits it and the scheduler drops it.
        let intervals = merge_timestamps(&[120.0], &policy(0.0, 3.0, 10.0, 0.0), Some(120.0));
        assert_eq!(intervals.len(), 1);
        assert!(intervals[0].is_degenerate());
    }

    #[test]
    fn test_idempotent_on_separated_midpoints() {
        // Re-running the merger on midpoints of its own output with
        // zero buffers must not merge intervals separated by more than
        // the threshold.
        let p = policy(1.5, 3.0, 10.0, 0.0);
        let first = merge_timestamps(&[0.0, 5.0, 100.0, 104.0, 300.0], &p, None);
        let midpoints: Vec<f64> = first
            .iter()
            .map(|iv| (iv.start + iv.end) / 2.0)
            .collect();
        let second = merge_timestamps(&midpoints, &policy(0.0, 0.0, 10.0, 0.0), None);
        assert_eq!(second.len(), first.len());
    }

    #[test]
    fn test_merge_hits_uses_hit_timestamps() {
        let hits = vec![
            KeywordHit {
                timestamp: 100.0,
                matched_text: "lol".to_string(),
                keyword: "lol".to_string(),
            },
            KeywordHit {
                timestamp: 103.0,
                matched_text: "haha".to_string(),
                keyword: "haha".to_string(),
            },
        ];
        let intervals = merge_hits(&hits, &policy(1.0, 2.0, 10.0, 0.0), None);
        assert_eq!(intervals.len(), 1);
        assert_interval(&intervals[0], 99.0, 105.0);
    }
}
