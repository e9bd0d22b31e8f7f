//! vstitch joins two vertically overlapping grayscale strips into one image.
//!
//! The bottom edge of the first strip is matched against the top row of the
//! second by brute-force search over `(cut index, horizontal offset)` pairs,
//! scoring each by the sum of absolute pixel differences. The best pair is
//! then used to composite both strips into a single buffer.
//!
//! Parallel search is available through the `rayon` feature, a SIMD scoring
//! kernel through `simd`, and file loading through `image-io`.

pub mod candidate;
pub mod composite;
pub mod image;
pub mod kernel;
pub mod search;
mod trace;
pub mod util;

#[cfg(feature = "image-io")]
pub use crate::image::io;

pub use crate::candidate::AlignmentCandidate;
pub use crate::composite::{composite, stitch};
pub use crate::image::{GrayBuffer, ImageView};
pub use crate::kernel::{overlap_score, RowKernel};
pub use crate::search::{
    find_best_alignment, find_best_alignment_with, BestAlignment, Parallelism, SearchConfig,
};
pub use crate::util::{StitchError, StitchResult};
