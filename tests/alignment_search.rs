use vstitch::{
    find_best_alignment, find_best_alignment_with, BestAlignment, GrayBuffer, SearchConfig,
    StitchError,
};

/// Deterministic texture with no two equal rows.
fn make_strip(width: usize, height: usize, seed: usize) -> GrayBuffer {
    let mut data = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            let value = ((x * 13) ^ ((y + seed) * 7) ^ (x * (y + seed))) & 0xFF;
            data.push(value as u8);
        }
    }
    GrayBuffer::new(data, width, height).unwrap()
}

fn crop(src: &GrayBuffer, x0: usize, y0: usize, width: usize, height: usize) -> GrayBuffer {
    src.view().roi(x0, y0, width, height).unwrap().to_buffer()
}

#[test]
fn identical_strips_align_with_zero_score() {
    // Rows repeat every 4 lines, so row 0 reappears at cuts 4 and 8.
    let period = make_strip(16, 4, 0);
    let mut data = Vec::new();
    for _ in 0..3 {
        data.extend_from_slice(period.data());
    }
    let strip = GrayBuffer::new(data, 16, 12).unwrap();

    let best = find_best_alignment(strip.view(), strip.view()).unwrap();
    assert_eq!((best.cut_index, best.offset, best.score), (8, 0, 0));

    let flat = GrayBuffer::filled(5, 4, 10).unwrap();
    let best = find_best_alignment(flat.view(), flat.view()).unwrap();
    assert_eq!(best.score, 0);
}

#[test]
fn finds_overlap_of_two_crops() {
    let page = make_strip(24, 60, 3);
    let top = crop(&page, 0, 0, 24, 40);
    let bottom = crop(&page, 0, 30, 24, 30);

    let best = find_best_alignment(top.view(), bottom.view()).unwrap();
    assert_eq!(best.cut_index, 30);
    assert_eq!(best.offset, 0);
    assert_eq!(best.score, 0);
}

#[test]
fn finds_horizontal_offset_of_narrow_second_strip() {
    let page = make_strip(32, 50, 1);
    let top = crop(&page, 0, 0, 32, 30);
    let bottom = crop(&page, 5, 20, 20, 30);

    let best = find_best_alignment(top.view(), bottom.view()).unwrap();
    assert_eq!((best.cut_index, best.offset, best.score), (20, 5, 0));
}

#[test]
fn evaluates_every_candidate_without_threshold() {
    let top = make_strip(10, 8, 0);
    let bottom = make_strip(7, 4, 9);
    let best = find_best_alignment(top.view(), bottom.view()).unwrap();
    // Cuts 1..=7, offsets 0..=3.
    assert_eq!(best.candidates_evaluated, 7 * 4);
}

#[test]
fn wider_second_strip_only_uses_offset_zero() {
    let top = make_strip(6, 5, 0);
    let bottom = make_strip(9, 3, 2);
    let best = find_best_alignment(top.view(), bottom.view()).unwrap();
    assert_eq!(best.offset, 0);
    assert_eq!(best.candidates_evaluated, 4);
}

#[test]
fn ties_prefer_the_lowest_cut_scanned_first() {
    let top = GrayBuffer::zeros(3, 3).unwrap();
    let bottom = GrayBuffer::filled(3, 3, 255).unwrap();
    let best = find_best_alignment(top.view(), bottom.view()).unwrap();
    assert_eq!(
        best,
        BestAlignment {
            cut_index: 2,
            offset: 0,
            score: 3 * 255,
            candidates_evaluated: 2,
        }
    );
}

#[test]
fn ties_within_a_cut_prefer_smaller_offset() {
    let top = GrayBuffer::filled(8, 4, 40).unwrap();
    let bottom = GrayBuffer::filled(3, 2, 40).unwrap();
    let best = find_best_alignment(top.view(), bottom.view()).unwrap();
    assert_eq!((best.cut_index, best.offset, best.score), (3, 0, 0));
}

#[test]
fn single_row_first_strip_has_no_candidate() {
    let top = GrayBuffer::filled(4, 1, 10).unwrap();
    let bottom = GrayBuffer::filled(4, 2, 10).unwrap();
    let err = find_best_alignment(top.view(), bottom.view()).err().unwrap();
    assert_eq!(err, StitchError::NoCandidate { first_height: 1 });
}

#[test]
fn stop_threshold_returns_first_hit_in_scan_order() {
    let page = make_strip(12, 40, 4);
    let top = crop(&page, 0, 0, 12, 30);
    let bottom = crop(&page, 0, 10, 12, 30);

    let exhaustive = find_best_alignment(top.view(), bottom.view()).unwrap();
    assert_eq!(exhaustive.cut_index, 10);

    // Every candidate qualifies, so the very first one scanned is returned.
    let cfg = SearchConfig::default().with_stop_threshold(u64::MAX);
    let first_hit = find_best_alignment_with(top.view(), bottom.view(), &cfg).unwrap();
    assert_eq!((first_hit.cut_index, first_hit.offset), (29, 0));
    assert_eq!(first_hit.candidates_evaluated, 1);

    // Only the exact overlap qualifies.
    let cfg = SearchConfig::default().with_stop_threshold(0);
    let exact = find_best_alignment_with(top.view(), bottom.view(), &cfg).unwrap();
    assert_eq!(exact.cut_index, 10);
    assert_eq!(exact.score, 0);
    assert!(exact.candidates_evaluated < exhaustive.candidates_evaluated);
}

#[test]
fn unmet_stop_threshold_falls_back_to_global_minimum() {
    let top = GrayBuffer::zeros(3, 4).unwrap();
    let bottom = GrayBuffer::filled(3, 1, 5).unwrap();

    let cfg = SearchConfig::default().with_stop_threshold(1);
    let best = find_best_alignment_with(top.view(), bottom.view(), &cfg).unwrap();
    assert_eq!(
        best,
        BestAlignment {
            cut_index: 3,
            offset: 0,
            score: 15,
            candidates_evaluated: 3,
        }
    );
    assert_eq!(best, find_best_alignment(top.view(), bottom.view()).unwrap());

    let page = make_strip(14, 30, 5);
    let textured_top = crop(&page, 0, 0, 14, 20);
    let textured_bottom = crop(&page, 2, 25, 9, 5);
    let exhaustive = find_best_alignment(textured_top.view(), textured_bottom.view()).unwrap();
    let cfg = SearchConfig::default().with_stop_threshold(exhaustive.score.saturating_sub(1));
    let thresholded =
        find_best_alignment_with(textured_top.view(), textured_bottom.view(), &cfg).unwrap();
    assert_eq!(thresholded, exhaustive);
    assert_eq!(thresholded.candidates_evaluated, 19 * 6);
}

#[test]
fn search_accepts_roi_views() {
    let frame = make_strip(40, 40, 6);
    let view = frame.view();
    let top = view.roi(4, 0, 20, 25).unwrap();
    let bottom = view.roi(4, 15, 20, 20).unwrap();
    let best = find_best_alignment(top, bottom).unwrap();
    assert_eq!((best.cut_index, best.offset, best.score), (15, 0, 0));
}
