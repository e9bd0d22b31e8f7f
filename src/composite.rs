//! Building the stitched output from two strips and an alignment.
//!
//! The output is `cut_index + second.height` rows tall and as wide as the
//! wider strip. Rows `0..cut_index` come from the first strip unchanged; the
//! second strip follows, shifted right by `offset`. Columns pushed past the
//! right edge are dropped and uncovered pixels stay black. There is no
//! blending at the seam.

use crate::image::GrayBuffer;
use crate::search::{find_best_alignment_with, BestAlignment, SearchConfig};
use crate::trace::{trace_debug, trace_event, trace_span};
use crate::util::{StitchError, StitchResult};
use crate::ImageView;

/// Composites `second` below `first` according to `alignment`.
///
/// Fails with `CompositionOverflow` when the alignment does not belong to this
/// strip pair: the cut lies below the first strip or the offset exceeds the
/// search range `first.width - min(first.width, second.width)`.
pub fn composite(
    first: ImageView<'_>,
    second: ImageView<'_>,
    alignment: &BestAlignment,
) -> StitchResult<GrayBuffer> {
    let cut = alignment.cut_index;
    let offset = alignment.offset;
    let min_width = first.width().min(second.width());
    let overflow = || StitchError::CompositionOverflow {
        cut_index: cut,
        offset,
        first_height: first.height(),
        first_width: first.width(),
        second_width: second.width(),
    };
    if cut > first.height() || offset > first.width() - min_width {
        return Err(overflow());
    }

    let _span = trace_span!("composite", cut_index = cut, offset = offset).entered();

    let out_width = first.width().max(second.width());
    let out_height = cut.checked_add(second.height()).ok_or_else(overflow)?;
    let mut output = GrayBuffer::zeros(out_width, out_height)?;

    for (y, src) in first.rows().take(cut).enumerate() {
        let dst = output.row_mut(y).ok_or_else(overflow)?;
        dst[..src.len()].copy_from_slice(src);
    }

    let copy_len = second.width().min(out_width.saturating_sub(offset));
    trace_debug!(
        "composite_rows",
        first_rows = cut,
        second_rows = second.height(),
        dropped_columns = second.width() - copy_len
    );
    for (y, src) in second.rows().enumerate() {
        let dst = output.row_mut(cut + y).ok_or_else(overflow)?;
        dst[offset..offset + copy_len].copy_from_slice(&src[..copy_len]);
    }

    trace_event!(
        "composited",
        width = out_width,
        height = out_height,
        seam_row = cut,
        offset = offset
    );
    Ok(output)
}

/// Searches for the best alignment and composites the pair in one call.
pub fn stitch(
    first: ImageView<'_>,
    second: ImageView<'_>,
    cfg: &SearchConfig,
) -> StitchResult<(BestAlignment, GrayBuffer)> {
    let alignment = find_best_alignment_with(first, second, cfg)?;
    let output = composite(first, second, &alignment)?;
    Ok((alignment, output))
}
