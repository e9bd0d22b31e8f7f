//! SIMD sum-of-absolute-differences kernel using the `wide` crate.
//!
//! Eight pixels are widened to `i32x8` per step. Lane sums are flushed into a
//! `u64` before they can overflow, so the result matches the scalar kernel for
//! rows of any length.

use crate::kernel::scalar::SadScalar;
use crate::kernel::RowKernel;
use wide::i32x8;

const LANES: usize = 8;

/// Steps between flushes; 255 * FLUSH_EVERY stays well below `i32::MAX`.
const FLUSH_EVERY: usize = 1 << 20;

#[inline]
fn load_u8x8_as_i32x8(slice: &[u8]) -> i32x8 {
    i32x8::from([
        slice[0] as i32,
        slice[1] as i32,
        slice[2] as i32,
        slice[3] as i32,
        slice[4] as i32,
        slice[5] as i32,
        slice[6] as i32,
        slice[7] as i32,
    ])
}

#[inline]
fn hsum(v: i32x8) -> u64 {
    v.to_array().iter().map(|&lane| lane as u64).sum()
}

/// SIMD-accelerated SAD kernel.
pub struct SadSimd;

impl RowKernel for SadSimd {
    fn sad(a: &[u8], b: &[u8]) -> u64 {
        let len = a.len().min(b.len());
        let simd_end = len / LANES * LANES;

        let mut total = 0u64;
        let mut acc = i32x8::splat(0);
        let mut steps = 0usize;
        let mut i = 0;
        while i < simd_end {
            let va = load_u8x8_as_i32x8(&a[i..]);
            let vb = load_u8x8_as_i32x8(&b[i..]);
            acc += (va - vb).abs();
            steps += 1;
            if steps == FLUSH_EVERY {
                total += hsum(acc);
                acc = i32x8::splat(0);
                steps = 0;
            }
            i += LANES;
        }
        total += hsum(acc);

        // Scalar remainder
        total + SadScalar::sad(&a[simd_end..len], &b[simd_end..len])
    }
}
