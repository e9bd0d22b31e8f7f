//! Scanning the offset range for a single cut index.

use crate::candidate::{AlignmentCandidate, BestTracker};
use crate::kernel::RowKernel;

/// Result of scanning every offset for one cut index.
#[derive(Clone, Copy, Debug)]
pub(crate) struct CutSummary {
    /// Preferred candidate among the offsets scanned for this cut.
    pub(crate) best: AlignmentCandidate,
    /// First candidate at or below the stop threshold, if any.
    pub(crate) hit: Option<AlignmentCandidate>,
    /// Offsets scored before the scan finished or stopped.
    pub(crate) evaluated: usize,
}

/// Scores `first_row` against `second_row` at every offset in `0..=max_offset`.
///
/// `second_row` must hold exactly `min_width` pixels and `first_row` at least
/// `max_offset + min_width`. The scan stops at the first score `<= threshold`.
pub(crate) fn scan_cut<K: RowKernel>(
    first_row: &[u8],
    second_row: &[u8],
    cut_index: usize,
    max_offset: usize,
    stop_threshold: Option<u64>,
) -> CutSummary {
    let min_width = second_row.len();
    let mut tracker = BestTracker::new();
    let mut evaluated = 0usize;
    for offset in 0..=max_offset {
        let segment = &first_row[offset..offset + min_width];
        let candidate = AlignmentCandidate {
            cut_index,
            offset,
            score: K::sad(segment, second_row),
        };
        evaluated += 1;
        tracker.offer(candidate);
        if stop_threshold.is_some_and(|t| candidate.score <= t) {
            return CutSummary {
                best: candidate,
                hit: Some(candidate),
                evaluated,
            };
        }
    }

    CutSummary {
        // The offset range is never empty, so the tracker always holds a value.
        best: tracker.best().unwrap_or(AlignmentCandidate {
            cut_index,
            offset: 0,
            score: u64::MAX,
        }),
        hit: None,
        evaluated,
    }
}
