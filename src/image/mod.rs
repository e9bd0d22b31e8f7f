//! Grayscale buffers and borrowed views.
//!
//! `GrayBuffer` owns a contiguous row-major `u8` raster and is the type both
//! input strips and the stitched output use. `ImageView` borrows a raster with
//! an explicit stride, so a view may also describe a sub-rectangle of a larger
//! frame. Row access never copies.

use crate::util::{StitchError, StitchResult};

mod buffer;
#[cfg(feature = "image-io")]
pub mod io;

pub use buffer::GrayBuffer;

/// Borrowed 8-bit grayscale view with an explicit stride.
#[derive(Copy, Clone, Debug)]
pub struct ImageView<'a> {
    data: &'a [u8],
    width: usize,
    height: usize,
    stride: usize,
}

impl<'a> ImageView<'a> {
    /// Creates a contiguous view with `stride == width`.
    pub fn from_slice(data: &'a [u8], width: usize, height: usize) -> StitchResult<Self> {
        Self::new(data, width, height, width)
    }

    /// Creates a view with an explicit stride.
    ///
    /// The stride must be at least `width`; the slice must cover the last row.
    pub fn new(data: &'a [u8], width: usize, height: usize, stride: usize) -> StitchResult<Self> {
        if width == 0 || height == 0 || stride < width {
            return Err(StitchError::InvalidBuffer { width, height });
        }
        let needed = (height - 1)
            .checked_mul(stride)
            .and_then(|v| v.checked_add(width))
            .ok_or(StitchError::InvalidBuffer { width, height })?;
        if data.len() < needed {
            return Err(StitchError::BufferSizeMismatch {
                expected: needed,
                got: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
            stride,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Elements between consecutive row starts.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Returns the pixel at `(row, col)` if it is within bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        if row >= self.height || col >= self.width {
            return None;
        }
        self.data.get(row * self.stride + col).copied()
    }

    /// Returns row `y` as a slice of exactly `width` pixels.
    pub fn row(&self, y: usize) -> Option<&'a [u8]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.stride;
        self.data.get(start..start + self.width)
    }

    /// Iterates rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &'a [u8]> + '_ {
        (0..self.height).filter_map(move |y| self.row(y))
    }

    /// Returns a zero-copy view of the rectangle at `(x, y)` sized `width x height`.
    pub fn roi(&self, x: usize, y: usize, width: usize, height: usize) -> StitchResult<Self> {
        let end_x = x.checked_add(width);
        let end_y = y.checked_add(height);
        let fits = matches!((end_x, end_y), (Some(ex), Some(ey)) if ex <= self.width && ey <= self.height);
        if width == 0 || height == 0 || !fits {
            return Err(StitchError::InvalidBuffer { width, height });
        }
        let start = y * self.stride + x;
        let data = self.data.get(start..).ok_or(StitchError::BufferSizeMismatch {
            expected: start + 1,
            got: self.data.len(),
        })?;
        Self::new(data, width, height, self.stride)
    }

    /// Copies the view into an owned contiguous buffer.
    pub fn to_buffer(&self) -> GrayBuffer {
        let mut data = Vec::with_capacity(self.width * self.height);
        for row in self.rows() {
            data.extend_from_slice(row);
        }
        GrayBuffer::from_parts(data, self.width, self.height)
    }
}
