//! Graphics rendering on RGB8 rasters
//!
//! This module provides the two drawing primitives the overlay needs:
//! - Rectangle outlines of a given stroke width, optionally outset from a region
//! - Alpha compositing of a solid color through a coverage layer

use super::{PixelBuffer, PixelBufferMut};
use crate::mask::DifferenceMask;
use crate::region::Region;
use crate::error::{Error, Result};

/// RGB color for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Create a new color
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black color
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };
    /// White color
    pub const WHITE: Color = Color {
        r: 255,
        g: 255,
        b: 255,
    };
    /// Red color
    pub const RED: Color = Color { r: 255, g: 0, b: 0 };
    /// Green color
    pub const GREEN: Color = Color { r: 0, g: 255, b: 0 };
    /// Blue color
    pub const BLUE: Color = Color { r: 0, g: 0, b: 255 };

    /// Sum of absolute per-channel differences, in `0..=765`.
    #[inline]
    pub fn dissimilarity(&self, other: &Color) -> u32 {
        u32::from(self.r.abs_diff(other.r))
            + u32::from(self.g.abs_diff(other.g))
            + u32::from(self.b.abs_diff(other.b))
    }

    /// Blend `self` over `base` with coverage `alpha` (0 = base, 255 = self).
    #[inline]
    pub fn over(&self, base: Color, alpha: u8) -> Color {
        let a = u32::from(alpha);
        let mix = |top: u8, bottom: u8| -> u8 {
            ((u32::from(top) * a + u32::from(bottom) * (255 - a) + 127) / 255) as u8
        };
        Color::new(mix(self.r, base.r), mix(self.g, base.g), mix(self.b, base.b))
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl PixelBufferMut {
    /// Render a rectangle outline around `region` with a solid color.
    ///
    /// The outline's outer edge sits `outset` pixels outside the region on
    /// every side and the stroke grows inward by `width` pixels. Parts of
    /// the outline that fall outside the raster are clipped.
    pub fn render_box_color(&mut self, region: &Region, outset: u32, width: u32, color: Color) {
        let width = i64::from(width.max(1));
        let outset = i64::from(outset);
        let ox0 = i64::from(region.x0) - outset;
        let oy0 = i64::from(region.y0) - outset;
        let ox1 = i64::from(region.x1) + outset;
        let oy1 = i64::from(region.y1) + outset;

        let cx0 = ox0.max(0);
        let cy0 = oy0.max(0);
        let cx1 = ox1.min(i64::from(self.width()) - 1);
        let cy1 = oy1.min(i64::from(self.height()) - 1);
        if cx0 > cx1 || cy0 > cy1 {
            return;
        }

        for y in cy0..=cy1 {
            let band_row = y < oy0 + width || y > oy1 - width;
            for x in cx0..=cx1 {
                if band_row || x < ox0 + width || x > ox1 - width {
                    self.set_rgb_unchecked(x as u32, y as u32, color);
                }
            }
        }
    }

    /// Composite `color` at opacity `alpha` onto every pixel where `layer`
    /// is non-zero.
    ///
    /// Each covered pixel is blended exactly once, no matter how many
    /// shapes were drawn into the layer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the layer and raster differ in size.
    pub fn composite_layer(&mut self, layer: &DifferenceMask, color: Color, alpha: u8) -> Result<()> {
        if layer.dimensions() != self.dimensions() {
            return Err(Error::DimensionMismatch {
                expected: self.dimensions(),
                actual: layer.dimensions(),
            });
        }
        if alpha == 0 {
            return Ok(());
        }
        for y in 0..self.height() {
            for (x, &cov) in layer.row(y).iter().enumerate() {
                if cov != 0 {
                    let x = x as u32;
                    let base = self.get_rgb_unchecked(x, y);
                    self.set_rgb_unchecked(x, y, color.over(base, alpha));
                }
            }
        }
        Ok(())
    }
}

impl PixelBuffer {
    /// Count the pixels whose color differs from `other` at the same position.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the two rasters differ in size.
    pub fn count_changed_pixels(&self, other: &PixelBuffer) -> Result<u64> {
        if self.dimensions() != other.dimensions() {
            return Err(Error::DimensionMismatch {
                expected: self.dimensions(),
                actual: other.dimensions(),
            });
        }
        Ok(self
            .pixels()
            .chunks_exact(super::CHANNELS)
            .zip(other.pixels().chunks_exact(super::CHANNELS))
            .filter(|(a, b)| a != b)
            .count() as u64)
    }
}
