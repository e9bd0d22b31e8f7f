//! Error types for vstitch.

use thiserror::Error;

/// Result alias for vstitch operations.
pub type StitchResult<T> = std::result::Result<T, StitchError>;

/// Errors that can occur while aligning or compositing strips.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum StitchError {
    /// A buffer has a zero dimension, so no overlap width can be derived.
    #[error("invalid buffer dimensions {width}x{height}")]
    InvalidBuffer { width: usize, height: usize },
    /// The pixel vector does not hold exactly `width * height` samples.
    #[error("buffer size mismatch: expected {expected} pixels, got {got}")]
    BufferSizeMismatch { expected: usize, got: usize },
    /// A row slice is shorter than the requested comparison length.
    #[error("row too short: need {needed} pixels, got {got}")]
    RowTooShort { needed: usize, got: usize },
    /// The cut range `[1, height - 1]` of the first strip is empty.
    #[error("no alignment candidate: first strip has {first_height} row(s), need at least 2")]
    NoCandidate { first_height: usize },
    /// The alignment does not fit the strip pair it is applied to.
    #[error(
        "alignment (cut {cut_index}, offset {offset}) is inconsistent with strips \
         of height {first_height}, widths {first_width}/{second_width}"
    )]
    CompositionOverflow {
        cut_index: usize,
        offset: usize,
        first_height: usize,
        first_width: usize,
        second_width: usize,
    },
    /// The worker pool for a parallel search could not be built.
    #[error("thread pool error: {reason}")]
    ThreadPool { reason: String },
    /// Image decoding or encoding failed.
    #[error("image io error: {reason}")]
    ImageIo { reason: String },
}
