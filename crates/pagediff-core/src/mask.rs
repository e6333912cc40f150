//! DifferenceMask - One byte per pixel
//!
//! A mask has the dimensions of the canvas it was derived from. The raw
//! mask produced by the pixel comparison is strictly binary
//! ([`MASK_OFF`] / [`MASK_ON`]); smoothed masks hold intermediate
//! intensities and are thresholded again (see [`FOREGROUND_LEVEL`]) before
//! being treated as binary.
//!
//! Unlike [`PixelBuffer`](crate::PixelBuffer), a mask may be zero-sized;
//! every operation on such a mask is a well-defined no-op.

use crate::error::{Error, Result};
use crate::region::Region;

/// Mask value for a pixel that is not flagged.
pub const MASK_OFF: u8 = 0;
/// Mask value for a flagged pixel.
pub const MASK_ON: u8 = 255;
/// Intensity at or above which a smoothed mask pixel counts as foreground
/// (50% of [`MASK_ON`]).
pub const FOREGROUND_LEVEL: u8 = 128;

/// Per-pixel byte mask
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DifferenceMask {
    width: u32,
    height: u32,
    bits: Vec<u8>,
}

impl DifferenceMask {
    /// Create a new mask with every pixel set to [`MASK_OFF`].
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            bits: vec![MASK_OFF; width as usize * height as usize],
        }
    }

    /// Wrap an existing row-major byte vector.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferSize`] if `bits.len() != width * height`.
    pub fn from_bits(width: u32, height: u32, bits: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize;
        if bits.len() != expected {
            return Err(Error::BufferSize {
                expected,
                actual: bits.len(),
            });
        }
        Ok(Self {
            width,
            height,
            bits,
        })
    }

    /// Get the mask width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the mask height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Get the raw bytes, row-major.
    #[inline]
    pub fn bits(&self) -> &[u8] {
        &self.bits
    }

    /// Consume the mask and return its bytes.
    pub fn into_bits(self) -> Vec<u8> {
        self.bits
    }

    /// Get one row.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        let start = y as usize * self.width as usize;
        &self.bits[start..start + self.width as usize]
    }

    /// Get mutable access to one row.
    #[inline]
    pub fn row_mut(&mut self, y: u32) -> &mut [u8] {
        let start = y as usize * self.width as usize;
        let end = start + self.width as usize;
        &mut self.bits[start..end]
    }

    /// Get the value at `(x, y)`, or `None` if out of bounds.
    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.get_unchecked(x, y))
    }

    /// Get the value at `(x, y)` without bounds checking.
    #[inline]
    pub fn get_unchecked(&self, x: u32, y: u32) -> u8 {
        self.bits[y as usize * self.width as usize + x as usize]
    }

    /// Set the value at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if the coordinate is outside the mask.
    pub fn set(&mut self, x: u32, y: u32, value: u8) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        self.set_unchecked(x, y, value);
        Ok(())
    }

    /// Set the value at `(x, y)` without bounds checking.
    #[inline]
    pub fn set_unchecked(&mut self, x: u32, y: u32, value: u8) {
        let idx = y as usize * self.width as usize + x as usize;
        self.bits[idx] = value;
    }

    /// Whether `(x, y)` is foreground after thresholding at [`FOREGROUND_LEVEL`].
    #[inline]
    pub fn is_foreground(&self, x: u32, y: u32) -> bool {
        self.get_unchecked(x, y) >= FOREGROUND_LEVEL
    }

    /// Count non-zero pixels.
    pub fn count_set(&self) -> u64 {
        self.bits.iter().filter(|&&v| v != MASK_OFF).count() as u64
    }

    /// Binarize: pixels `>= level` become [`MASK_ON`], the rest [`MASK_OFF`].
    pub fn threshold(&self, level: u8) -> DifferenceMask {
        DifferenceMask {
            width: self.width,
            height: self.height,
            bits: self
                .bits
                .iter()
                .map(|&v| if v >= level { MASK_ON } else { MASK_OFF })
                .collect(),
        }
    }

    /// Set every pixel inside `region` (clipped to the mask) to `value`.
    pub fn fill_region(&mut self, region: &Region, value: u8) {
        if self.width == 0 || self.height == 0 {
            return;
        }
        let x1 = region.x1.min(self.width - 1);
        let y1 = region.y1.min(self.height - 1);
        if region.x0 > x1 || region.y0 > y1 {
            return;
        }
        for y in region.y0..=y1 {
            self.row_mut(y)[region.x0 as usize..=x1 as usize].fill(value);
        }
    }
}
