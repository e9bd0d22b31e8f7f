//! Loading and saving strips through the `image` crate.
//!
//! Available when the `image-io` feature is enabled.

use crate::image::{GrayBuffer, ImageView};
use crate::util::{StitchError, StitchResult};
use std::path::Path;

/// Creates a borrowed view from a decoded grayscale image.
pub fn view_from_gray_image(img: &image::GrayImage) -> StitchResult<ImageView<'_>> {
    ImageView::from_slice(img.as_raw(), img.width() as usize, img.height() as usize)
}

/// Converts any decoded image to an owned 8-bit luma buffer.
pub fn buffer_from_dynamic_image(img: &image::DynamicImage) -> StitchResult<GrayBuffer> {
    let gray = img.to_luma8();
    let width = gray.width() as usize;
    let height = gray.height() as usize;
    GrayBuffer::new(gray.into_raw(), width, height)
}

/// Decodes an image file and converts it to grayscale.
pub fn load_gray_image<P: AsRef<Path>>(path: P) -> StitchResult<GrayBuffer> {
    let img = image::open(path).map_err(|err| StitchError::ImageIo {
        reason: err.to_string(),
    })?;
    buffer_from_dynamic_image(&img)
}

/// Encodes a buffer to disk; the format follows the file extension.
pub fn save_gray_image<P: AsRef<Path>>(buffer: &GrayBuffer, path: P) -> StitchResult<()> {
    let width = u32::try_from(buffer.width()).map_err(|_| StitchError::ImageIo {
        reason: format!("width {} exceeds u32", buffer.width()),
    })?;
    let height = u32::try_from(buffer.height()).map_err(|_| StitchError::ImageIo {
        reason: format!("height {} exceeds u32", buffer.height()),
    })?;
    let img = image::GrayImage::from_raw(width, height, buffer.data().to_vec()).ok_or_else(|| {
        StitchError::ImageIo {
            reason: "pixel buffer does not match image dimensions".to_string(),
        }
    })?;
    img.save(path).map_err(|err| StitchError::ImageIo {
        reason: err.to_string(),
    })
}
