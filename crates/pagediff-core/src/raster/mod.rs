//! PixelBuffer - The RGB8 raster container
//!
//! `PixelBuffer` holds one rendered page: `width * height` pixels stored as
//! contiguous, row-major `R, G, B` byte triples with no row padding.
//!
//! # Ownership model
//!
//! `PixelBuffer` uses `Arc` for cheap cloning (shared, read-only access).
//! To modify pixel data, convert to `PixelBufferMut` via
//! [`PixelBuffer::try_into_mut`] or [`PixelBuffer::to_mut`], then convert
//! back with `Into<PixelBuffer>`. A buffer is therefore never aliased while
//! it is being written.

mod access;
pub mod graphics;

pub use graphics::Color;

use crate::error::{Error, Result};
use std::sync::Arc;

/// Bytes per pixel (R, G, B).
pub const CHANNELS: usize = 3;

/// Internal raster data
#[derive(Debug, Clone, PartialEq, Eq)]
struct RasterData {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Packed RGB8 samples, `width * height * 3` bytes
    pixels: Vec<u8>,
}

impl RasterData {
    fn filled(width: u32, height: u32, color: Color) -> Result<Self> {
        let len = byte_len(width, height)?;
        let mut pixels = Vec::with_capacity(len);
        for _ in 0..(len / CHANNELS) {
            pixels.extend_from_slice(&[color.r, color.g, color.b]);
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }
}

/// Compute the byte length of a `width x height` RGB8 raster.
///
/// # Errors
///
/// Returns [`Error::InvalidDimension`] if either dimension is zero or the
/// byte count does not fit in `usize`.
fn byte_len(width: u32, height: u32) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimension { width, height });
    }
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(CHANNELS))
        .ok_or(Error::InvalidDimension { width, height })
}

/// Immutable RGB8 raster
///
/// # Examples
///
/// ```
/// use pagediff_core::{Color, PixelBuffer};
///
/// let page = PixelBuffer::new_filled(200, 100, Color::WHITE).unwrap();
/// assert_eq!(page.dimensions(), (200, 100));
/// assert_eq!(page.get_rgb(10, 10), Some(Color::WHITE));
/// ```
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    inner: Arc<RasterData>,
}

impl PixelBuffer {
    /// Create a new black raster.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::new_filled(width, height, Color::BLACK)
    }

    /// Create a new raster with every pixel set to `color`.
    pub fn new_filled(width: u32, height: u32, color: Color) -> Result<Self> {
        Ok(PixelBuffer {
            inner: Arc::new(RasterData::filled(width, height, color)?),
        })
    }

    /// Wrap existing packed RGB8 samples.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for zero dimensions and
    /// [`Error::BufferSize`] if `pixels.len() != width * height * 3`.
    pub fn from_rgb(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
        let expected = byte_len(width, height)?;
        if pixels.len() != expected {
            return Err(Error::BufferSize {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(PixelBuffer {
            inner: Arc::new(RasterData {
                width,
                height,
                pixels,
            }),
        })
    }

    /// Get the raster width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the raster height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.inner.width, self.inner.height)
    }

    /// Total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> u64 {
        u64::from(self.inner.width) * u64::from(self.inner.height)
    }

    /// Get raw access to the packed samples.
    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.inner.pixels
    }

    /// Get the packed samples of one row.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        let stride = self.inner.width as usize * CHANNELS;
        let start = y as usize * stride;
        &self.inner.pixels[start..start + stride]
    }

    /// Get the number of strong references to this buffer.
    #[inline]
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Check whether two buffers hold the same dimensions and samples.
    pub fn same_content(&self, other: &PixelBuffer) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner) || self.inner == other.inner
    }

    /// Create a deep copy of this buffer.
    ///
    /// Unlike `clone()` which shares data via Arc, this creates
    /// a completely independent copy.
    pub fn deep_clone(&self) -> Self {
        PixelBuffer {
            inner: Arc::new(self.inner.as_ref().clone()),
        }
    }

    /// Try to get mutable access to the samples.
    ///
    /// Succeeds only if there is exactly one reference to the data.
    pub fn try_into_mut(self) -> std::result::Result<PixelBufferMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(PixelBufferMut { inner: data }),
            Err(arc) => Err(PixelBuffer { inner: arc }),
        }
    }

    /// Create a mutable copy of this buffer.
    pub fn to_mut(&self) -> PixelBufferMut {
        PixelBufferMut {
            inner: self.inner.as_ref().clone(),
        }
    }
}

/// Mutable RGB8 raster
///
/// Allows modification of pixel data. Convert back to an immutable
/// [`PixelBuffer`] using `Into<PixelBuffer>`.
#[derive(Debug)]
pub struct PixelBufferMut {
    inner: RasterData,
}

impl PixelBufferMut {
    /// Create a new mutable raster with every pixel set to `color`.
    pub fn new_filled(width: u32, height: u32, color: Color) -> Result<Self> {
        Ok(PixelBufferMut {
            inner: RasterData::filled(width, height, color)?,
        })
    }

    /// Get the raster width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the raster height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.inner.width, self.inner.height)
    }

    /// Get raw access to the packed samples.
    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.inner.pixels
    }

    /// Get mutable access to the packed samples.
    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.inner.pixels
    }

    /// Get mutable access to one row.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_mut(&mut self, y: u32) -> &mut [u8] {
        let stride = self.inner.width as usize * CHANNELS;
        let start = y as usize * stride;
        &mut self.inner.pixels[start..start + stride]
    }

    /// Set every pixel to `color`.
    pub fn fill(&mut self, color: Color) {
        for px in self.inner.pixels.chunks_exact_mut(CHANNELS) {
            px.copy_from_slice(&[color.r, color.g, color.b]);
        }
    }

    /// Copy `src` into this raster with its top-left corner at the origin.
    ///
    /// Rows and columns of `src` that fall outside this raster are clipped.
    pub fn paste_at_origin(&mut self, src: &PixelBuffer) {
        let rows = self.height().min(src.height());
        let cols = self.width().min(src.width()) as usize * CHANNELS;
        for y in 0..rows {
            self.row_mut(y)[..cols].copy_from_slice(&src.row(y)[..cols]);
        }
    }
}

impl From<PixelBufferMut> for PixelBuffer {
    fn from(buf: PixelBufferMut) -> Self {
        PixelBuffer {
            inner: Arc::new(buf.inner),
        }
    }
}
