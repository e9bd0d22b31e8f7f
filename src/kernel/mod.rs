//! Row dissimilarity kernels and per-cut scan helpers.

use crate::util::{StitchError, StitchResult};

/// Kernel trait for scoring a pair of equally long row segments.
pub trait RowKernel {
    /// Sum of absolute differences between `a` and `b`.
    ///
    /// Callers pass slices of equal length; only the common prefix is scored.
    fn sad(a: &[u8], b: &[u8]) -> u64;
}

/// Overlap score between the first `compare_len` pixels of two rows.
///
/// Identical rows score zero and the score is symmetric in its arguments.
pub fn overlap_score(row_a: &[u8], row_b: &[u8], compare_len: usize) -> StitchResult<u64> {
    for row in [row_a, row_b] {
        if row.len() < compare_len {
            return Err(StitchError::RowTooShort {
                needed: compare_len,
                got: row.len(),
            });
        }
    }
    Ok(<ActiveKernel as RowKernel>::sad(
        &row_a[..compare_len],
        &row_b[..compare_len],
    ))
}

pub mod scalar;

#[cfg(feature = "simd")]
pub mod simd;

#[cfg(feature = "rayon")]
pub(crate) mod rayon;

pub(crate) mod scan;

// Use SIMD when available; both kernels produce identical sums.
#[cfg(not(feature = "simd"))]
pub(crate) use scalar::SadScalar as ActiveKernel;
#[cfg(feature = "simd")]
pub(crate) use simd::SadSimd as ActiveKernel;
