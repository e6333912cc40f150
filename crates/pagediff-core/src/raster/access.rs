//! Pixel access for RGB8 rasters
//!
//! Checked accessors return `Option`/`Result`; the `_unchecked` variants
//! skip bounds tests and are meant for inner loops that have already
//! clipped their coordinates.

use super::{CHANNELS, Color, PixelBuffer, PixelBufferMut};
use crate::error::{Error, Result};

#[inline]
fn offset(width: u32, x: u32, y: u32) -> usize {
    (y as usize * width as usize + x as usize) * CHANNELS
}

#[inline]
fn read(pixels: &[u8], idx: usize) -> Color {
    Color::new(pixels[idx], pixels[idx + 1], pixels[idx + 2])
}

impl PixelBuffer {
    /// Get the color at `(x, y)`, or `None` if out of bounds.
    pub fn get_rgb(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.get_rgb_unchecked(x, y))
    }

    /// Get the color at `(x, y)` without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate lies past the end of the pixel data.
    #[inline]
    pub fn get_rgb_unchecked(&self, x: u32, y: u32) -> Color {
        read(self.pixels(), offset(self.width(), x, y))
    }
}

impl PixelBufferMut {
    /// Get the color at `(x, y)`, or `None` if out of bounds.
    pub fn get_rgb(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.get_rgb_unchecked(x, y))
    }

    /// Get the color at `(x, y)` without bounds checking.
    #[inline]
    pub fn get_rgb_unchecked(&self, x: u32, y: u32) -> Color {
        read(self.pixels(), offset(self.width(), x, y))
    }

    /// Set the color at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if the coordinate is outside the raster.
    pub fn set_rgb(&mut self, x: u32, y: u32, color: Color) -> Result<()> {
        let (width, height) = self.dimensions();
        if x >= width || y >= height {
            return Err(Error::OutOfBounds {
                x,
                y,
                width,
                height,
            });
        }
        self.set_rgb_unchecked(x, y, color);
        Ok(())
    }

    /// Set the color at `(x, y)` without bounds checking.
    #[inline]
    pub fn set_rgb_unchecked(&mut self, x: u32, y: u32, color: Color) {
        let idx = offset(self.width(), x, y);
        self.pixels_mut()[idx..idx + CHANNELS].copy_from_slice(&[color.r, color.g, color.b]);
    }
}
