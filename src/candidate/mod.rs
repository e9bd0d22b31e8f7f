//! Alignment candidates and best-candidate tracking.
//!
//! Candidates are visited in a canonical scan order: cut indices from the
//! bottom of the first strip upward, and for each cut, offsets from left to
//! right. Equal scores are resolved in favour of the candidate visited first,
//! which keeps sequential and parallel searches in agreement.

use std::cmp::Ordering;

/// One scored `(cut index, offset)` placement of the second strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AlignmentCandidate {
    /// Row of the first strip where the second strip begins.
    pub cut_index: usize,
    /// Horizontal shift of the second strip relative to the first.
    pub offset: usize,
    /// Sum of absolute differences over the compared row segment.
    pub score: u64,
}

/// Orders candidates by score, then by canonical scan position.
///
/// `Ordering::Less` means `a` is preferred over `b`.
pub(crate) fn candidate_cmp(a: &AlignmentCandidate, b: &AlignmentCandidate) -> Ordering {
    a.score
        .cmp(&b.score)
        .then_with(|| b.cut_index.cmp(&a.cut_index))
        .then_with(|| a.offset.cmp(&b.offset))
}

/// Keeps the preferred candidate seen so far.
#[derive(Debug, Default)]
pub(crate) struct BestTracker {
    best: Option<AlignmentCandidate>,
}

impl BestTracker {
    pub(crate) fn new() -> Self {
        Self { best: None }
    }

    /// Offers a candidate, replacing the current best only if it is preferred.
    pub(crate) fn offer(&mut self, candidate: AlignmentCandidate) {
        match self.best {
            Some(current) if candidate_cmp(&candidate, &current) != Ordering::Less => {}
            _ => self.best = Some(candidate),
        }
    }

    pub(crate) fn best(&self) -> Option<AlignmentCandidate> {
        self.best
    }
}
