#![cfg(feature = "image-io")]

use std::path::PathBuf;
use vstitch::io::{load_gray_image, save_gray_image, view_from_gray_image};
use vstitch::{find_best_alignment, GrayBuffer, StitchError};

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("vstitch-{}-{name}", std::process::id()))
}

fn make_strip(width: usize, height: usize) -> GrayBuffer {
    let data = (0..width * height)
        .map(|i| ((i * 37) ^ (i / width * 11)) as u8)
        .collect();
    GrayBuffer::new(data, width, height).unwrap()
}

#[test]
fn png_save_and_load_preserves_pixels() {
    let strip = make_strip(13, 7);
    let path = temp_path("roundtrip.png");

    save_gray_image(&strip, &path).unwrap();
    let loaded = load_gray_image(&path).unwrap();
    let _ = std::fs::remove_file(&path);

    assert_eq!(loaded, strip);
}

#[test]
fn loading_missing_file_reports_image_io() {
    let path = temp_path("does-not-exist.png");
    let err = load_gray_image(&path).err().unwrap();
    assert!(matches!(err, StitchError::ImageIo { .. }), "{err:?}");
}

#[test]
fn gray_image_view_feeds_the_search() {
    let strip = make_strip(8, 6);
    let img = image::GrayImage::from_raw(8, 6, strip.data().to_vec()).unwrap();

    let view = view_from_gray_image(&img).unwrap();
    assert_eq!((view.width(), view.height()), (8, 6));
    assert_eq!(view.row(2), strip.row(2));

    let from_image = find_best_alignment(view, view).unwrap();
    let from_buffer = find_best_alignment(strip.view(), strip.view()).unwrap();
    assert_eq!(from_image, from_buffer);
}
