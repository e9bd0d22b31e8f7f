//! Scalar reference kernel.

use crate::kernel::RowKernel;

/// Scalar sum-of-absolute-differences kernel.
pub struct SadScalar;

impl RowKernel for SadScalar {
    #[inline]
    fn sad(a: &[u8], b: &[u8]) -> u64 {
        a.iter()
            .zip(b)
            .map(|(&pa, &pb)| u64::from(pa.abs_diff(pb)))
            .sum()
    }
}
