//! Rayon-parallel cut scanning (feature-gated).
//!
//! Each cut index is scanned as an independent task. Summaries come back in
//! the order of `cuts`, so the caller reduces them exactly as it would in a
//! sequential scan.

use crate::kernel::scan::{scan_cut, CutSummary};
use crate::kernel::RowKernel;
use crate::ImageView;
use rayon::prelude::*;

/// Scans every cut in `cuts` in parallel and returns per-cut summaries in order.
pub(crate) fn scan_cuts_par<K: RowKernel>(
    first: ImageView<'_>,
    second_row: &[u8],
    cuts: &[usize],
    max_offset: usize,
    stop_threshold: Option<u64>,
) -> Vec<CutSummary> {
    let summaries: Vec<Option<CutSummary>> = cuts
        .par_iter()
        .map(|&cut| {
            let first_row = first.row(cut)?;
            Some(scan_cut::<K>(
                first_row,
                second_row,
                cut,
                max_offset,
                stop_threshold,
            ))
        })
        .collect();
    summaries.into_iter().flatten().collect()
}
