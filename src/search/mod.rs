//! Alignment search between the bottom of one strip and the top of the next.
//!
//! Every cut index `c` in `[1, first.height - 1]` is visited from the bottom
//! upward, and for each cut every horizontal offset in
//! `[0, first.width - min_width]`. Row `c` of the first strip, starting at the
//! offset, is compared against row `0` of the second strip over `min_width`
//! pixels. The lowest score wins; ties keep the candidate visited first.

use crate::candidate::{AlignmentCandidate, BestTracker};
#[cfg(feature = "rayon")]
use crate::kernel::rayon::scan_cuts_par;
use crate::kernel::scan::{scan_cut, CutSummary};
use crate::kernel::ActiveKernel;
use crate::trace::{trace_debug, trace_event, trace_span};
use crate::util::{StitchError, StitchResult};
use crate::ImageView;

/// Degree of parallelism for the search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Parallelism {
    /// Scan on the calling thread.
    #[default]
    Sequential,
    /// Scan on a dedicated pool with this many workers.
    ///
    /// Without the `rayon` feature this falls back to a sequential scan.
    /// Zero or one worker is treated as sequential.
    Threads(usize),
}

impl Parallelism {
    /// Number of worker threads this setting asks for.
    pub fn workers(self) -> usize {
        match self {
            Parallelism::Sequential => 1,
            Parallelism::Threads(n) => n.max(1),
        }
    }
}

/// Search configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchConfig {
    /// How the candidate space is partitioned across threads.
    pub parallelism: Parallelism,
    /// Stop at the first candidate (in scan order) scoring at or below this.
    ///
    /// Off by default. When set, the result is no longer guaranteed to be the
    /// global minimum, but it is still deterministic and independent of
    /// `parallelism`.
    pub stop_threshold: Option<u64>,
}

impl SearchConfig {
    pub fn with_parallelism(mut self, parallelism: Parallelism) -> Self {
        self.parallelism = parallelism;
        self
    }

    pub fn with_stop_threshold(mut self, threshold: u64) -> Self {
        self.stop_threshold = Some(threshold);
        self
    }
}

/// Best alignment found for a strip pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BestAlignment {
    /// Row of the first strip where the second strip begins.
    pub cut_index: usize,
    /// Horizontal shift of the second strip relative to the first.
    pub offset: usize,
    /// Sum of absolute differences of the winning row comparison.
    pub score: u64,
    /// Number of `(cut, offset)` pairs scored before the search finished.
    pub candidates_evaluated: usize,
}

impl BestAlignment {
    /// Builds an alignment by hand, e.g. to stack strips without searching.
    pub fn at(cut_index: usize, offset: usize) -> Self {
        Self {
            cut_index,
            offset,
            score: 0,
            candidates_evaluated: 0,
        }
    }

    /// The winning candidate without search statistics.
    pub fn candidate(&self) -> AlignmentCandidate {
        AlignmentCandidate {
            cut_index: self.cut_index,
            offset: self.offset,
            score: self.score,
        }
    }
}

/// Finds the best alignment with the default sequential configuration.
pub fn find_best_alignment(
    first: ImageView<'_>,
    second: ImageView<'_>,
) -> StitchResult<BestAlignment> {
    find_best_alignment_with(first, second, &SearchConfig::default())
}

/// Finds the best alignment of `second` below `first`.
pub fn find_best_alignment_with(
    first: ImageView<'_>,
    second: ImageView<'_>,
    cfg: &SearchConfig,
) -> StitchResult<BestAlignment> {
    let min_width = first.width().min(second.width());
    if min_width == 0 {
        return Err(StitchError::InvalidBuffer {
            width: min_width,
            height: first.height().min(second.height()),
        });
    }
    if first.height() < 2 {
        return Err(StitchError::NoCandidate {
            first_height: first.height(),
        });
    }

    let _span = trace_span!(
        "find_best_alignment",
        first_height = first.height(),
        first_width = first.width(),
        second_width = second.width(),
        workers = cfg.parallelism.workers()
    )
    .entered();

    let second_row = second
        .row(0)
        .map(|row| &row[..min_width])
        .ok_or(StitchError::InvalidBuffer {
            width: second.width(),
            height: second.height(),
        })?;
    let max_offset = first.width() - min_width;
    let cuts: Vec<usize> = (1..first.height()).rev().collect();

    let summaries = scan_cuts(first, second_row, &cuts, max_offset, cfg)?;
    let best = reduce_in_scan_order(summaries).ok_or(StitchError::NoCandidate {
        first_height: first.height(),
    })?;

    trace_event!(
        "alignment_found",
        cut_index = best.cut_index,
        offset = best.offset,
        score = best.score,
        evaluated = best.candidates_evaluated
    );
    Ok(best)
}

fn scan_cuts(
    first: ImageView<'_>,
    second_row: &[u8],
    cuts: &[usize],
    max_offset: usize,
    cfg: &SearchConfig,
) -> StitchResult<Vec<CutSummary>> {
    let workers = cfg.parallelism.workers();
    trace_debug!(
        "search_dispatch",
        workers = workers,
        cuts = cuts.len(),
        offsets_per_cut = max_offset + 1
    );
    if workers > 1 {
        return scan_cuts_parallel(first, second_row, cuts, max_offset, cfg.stop_threshold, workers);
    }
    Ok(scan_cuts_sequential(
        first,
        second_row,
        cuts,
        max_offset,
        cfg.stop_threshold,
    ))
}

fn scan_cuts_sequential(
    first: ImageView<'_>,
    second_row: &[u8],
    cuts: &[usize],
    max_offset: usize,
    stop_threshold: Option<u64>,
) -> Vec<CutSummary> {
    let mut summaries = Vec::with_capacity(cuts.len());
    for &cut in cuts {
        let Some(first_row) = first.row(cut) else {
            continue;
        };
        let summary =
            scan_cut::<ActiveKernel>(first_row, second_row, cut, max_offset, stop_threshold);
        let stop = summary.hit.is_some();
        summaries.push(summary);
        if stop {
            break;
        }
    }
    summaries
}

#[cfg(feature = "rayon")]
fn scan_cuts_parallel(
    first: ImageView<'_>,
    second_row: &[u8],
    cuts: &[usize],
    max_offset: usize,
    stop_threshold: Option<u64>,
    workers: usize,
) -> StitchResult<Vec<CutSummary>> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .build()
        .map_err(|err| StitchError::ThreadPool {
            reason: err.to_string(),
        })?;
    Ok(pool.install(|| {
        scan_cuts_par::<ActiveKernel>(first, second_row, cuts, max_offset, stop_threshold)
    }))
}

#[cfg(not(feature = "rayon"))]
fn scan_cuts_parallel(
    first: ImageView<'_>,
    second_row: &[u8],
    cuts: &[usize],
    max_offset: usize,
    stop_threshold: Option<u64>,
    _workers: usize,
) -> StitchResult<Vec<CutSummary>> {
    Ok(scan_cuts_sequential(
        first,
        second_row,
        cuts,
        max_offset,
        stop_threshold,
    ))
}

/// Folds per-cut summaries, given in scan order, into the final alignment.
fn reduce_in_scan_order(summaries: Vec<CutSummary>) -> Option<BestAlignment> {
    let mut tracker = BestTracker::new();
    let mut evaluated = 0usize;
    for summary in summaries {
        evaluated += summary.evaluated;
        if let Some(hit) = summary.hit {
            trace_event!("search_stopped_early", cut_index = hit.cut_index, score = hit.score);
            return Some(to_alignment(hit, evaluated));
        }
        tracker.offer(summary.best);
    }
    tracker.best().map(|best| to_alignment(best, evaluated))
}

fn to_alignment(candidate: AlignmentCandidate, candidates_evaluated: usize) -> BestAlignment {
    BestAlignment {
        cut_index: candidate.cut_index,
        offset: candidate.offset,
        score: candidate.score,
        candidates_evaluated,
    }
}
