//! Owned contiguous grayscale raster.

use crate::image::ImageView;
use crate::util::{StitchError, StitchResult};

/// Owned row-major 8-bit grayscale buffer with `stride == width`.
///
/// Both dimensions are at least one and the pixel vector always holds exactly
/// `width * height` samples.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrayBuffer {
    data: Vec<u8>,
    width: usize,
    height: usize,
}

impl GrayBuffer {
    /// Wraps a row-major pixel vector.
    pub fn new(data: Vec<u8>, width: usize, height: usize) -> StitchResult<Self> {
        let expected = checked_area(width, height)?;
        if data.len() != expected {
            return Err(StitchError::BufferSizeMismatch {
                expected,
                got: data.len(),
            });
        }
        Ok(Self::from_parts(data, width, height))
    }

    /// Allocates a black (all zero) buffer.
    pub fn zeros(width: usize, height: usize) -> StitchResult<Self> {
        let len = checked_area(width, height)?;
        Ok(Self::from_parts(vec![0u8; len], width, height))
    }

    /// Builds a buffer where every pixel has the same intensity.
    pub fn filled(width: usize, height: usize, value: u8) -> StitchResult<Self> {
        let len = checked_area(width, height)?;
        Ok(Self::from_parts(vec![value; len], width, height))
    }

    pub(crate) fn from_parts(data: Vec<u8>, width: usize, height: usize) -> Self {
        debug_assert_eq!(data.len(), width * height);
        Self {
            data,
            width,
            height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the raw row-major pixels.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns the pixel at `(row, col)` if it is within bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        if row >= self.height || col >= self.width {
            return None;
        }
        self.data.get(row * self.width + col).copied()
    }

    /// Returns row `row` as a slice of `width` pixels.
    pub fn row(&self, row: usize) -> Option<&[u8]> {
        if row >= self.height {
            return None;
        }
        let start = row * self.width;
        self.data.get(start..start + self.width)
    }

    pub(crate) fn row_mut(&mut self, row: usize) -> Option<&mut [u8]> {
        if row >= self.height {
            return None;
        }
        let start = row * self.width;
        self.data.get_mut(start..start + self.width)
    }

    /// Iterates rows from top to bottom.
    pub fn rows(&self) -> std::slice::ChunksExact<'_, u8> {
        self.data.chunks_exact(self.width)
    }

    /// Returns a borrowed view over the whole buffer.
    pub fn view(&self) -> ImageView<'_> {
        ImageView {
            data: &self.data,
            width: self.width,
            height: self.height,
            stride: self.width,
        }
    }

    /// Consumes the buffer and returns its pixel vector.
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }
}

fn checked_area(width: usize, height: usize) -> StitchResult<usize> {
    if width == 0 || height == 0 {
        return Err(StitchError::InvalidBuffer { width, height });
    }
    width
        .checked_mul(height)
        .ok_or(StitchError::InvalidBuffer { width, height })
}
