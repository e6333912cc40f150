//! Comparison parameters

use crate::{CompareError, CompareResult};
use pagediff_core::{Color, MAX_DISSIMILARITY};

/// Default channel-sum difference above which a pixel counts as changed
pub const DEFAULT_THRESHOLD: u32 = 30;

/// Mask smoothing parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothOptions {
    /// Side of the square dilation window (odd)
    pub dilate_size: u32,
    /// Standard deviation of the Gaussian blur, in pixels
    pub blur_radius: f32,
}

impl Default for SmoothOptions {
    fn default() -> Self {
        Self {
            dilate_size: 5,
            blur_radius: 3.0,
        }
    }
}

impl SmoothOptions {
    /// Set the dilation window size
    pub fn with_dilate_size(mut self, size: u32) -> Self {
        self.dilate_size = size;
        self
    }

    /// Set the blur radius
    pub fn with_blur_radius(mut self, radius: f32) -> Self {
        self.blur_radius = radius;
        self
    }

    /// Check the parameters before running the smoother.
    pub fn validate(&self) -> CompareResult<()> {
        if self.dilate_size == 0 || self.dilate_size % 2 == 0 {
            return Err(CompareError::InvalidParameters(format!(
                "dilate_size must be odd and positive, got {}",
                self.dilate_size
            )));
        }
        if !self.blur_radius.is_finite() || self.blur_radius < 0.0 {
            return Err(CompareError::InvalidParameters(format!(
                "blur_radius must be finite and non-negative, got {}",
                self.blur_radius
            )));
        }
        Ok(())
    }
}

/// Appearance of the highlighted regions on the overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayStyle {
    /// Highlight color for borders and fill
    pub color: Color,
    /// Border stroke width in pixels
    pub border_width: u32,
    /// Distance of the border's outer edge from the region, in pixels
    pub border_outset: u32,
    /// Fill opacity, 0 (invisible) to 255 (opaque)
    pub fill_alpha: u8,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            color: Color::RED,
            border_width: 3,
            border_outset: 2,
            // ~31%
            fill_alpha: 80,
        }
    }
}

impl OverlayStyle {
    /// Set the highlight color
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Set the border width
    pub fn with_border_width(mut self, width: u32) -> Self {
        self.border_width = width;
        self
    }

    /// Set the fill opacity
    pub fn with_fill_alpha(mut self, alpha: u8) -> Self {
        self.fill_alpha = alpha;
        self
    }
}

/// Parameters of a single page comparison
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompareOptions {
    /// Pixels whose channel-sum difference exceeds this are flagged (0..=765)
    pub threshold: u32,
    /// Minimum width and height of a kept region
    pub min_region_size: u32,
    /// Maximum gap between regions that are merged
    pub merge_margin: u32,
    /// Mask smoothing
    pub smooth: SmoothOptions,
    /// Overlay appearance
    pub overlay: OverlayStyle,
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            min_region_size: 10,
            merge_margin: 20,
            smooth: SmoothOptions::default(),
            overlay: OverlayStyle::default(),
        }
    }
}

impl CompareOptions {
    /// Set the difference threshold
    pub fn with_threshold(mut self, threshold: u32) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set the minimum region size
    pub fn with_min_region_size(mut self, size: u32) -> Self {
        self.min_region_size = size;
        self
    }

    /// Set the merge margin
    pub fn with_merge_margin(mut self, margin: u32) -> Self {
        self.merge_margin = margin;
        self
    }

    /// Set the smoothing parameters
    pub fn with_smooth(mut self, smooth: SmoothOptions) -> Self {
        self.smooth = smooth;
        self
    }

    /// Set the overlay style
    pub fn with_overlay(mut self, overlay: OverlayStyle) -> Self {
        self.overlay = overlay;
        self
    }

    /// Check every parameter.
    ///
    /// # Errors
    ///
    /// Returns [`CompareError::InvalidParameters`] if the threshold exceeds
    /// [`MAX_DISSIMILARITY`] or the smoothing parameters are invalid.
    pub fn validate(&self) -> CompareResult<()> {
        check_threshold(self.threshold)?;
        self.smooth.validate()
    }
}

pub(crate) fn check_threshold(threshold: u32) -> CompareResult<()> {
    if threshold > MAX_DISSIMILARITY {
        return Err(CompareError::InvalidParameters(format!(
            "threshold must be in 0..={MAX_DISSIMILARITY}, got {threshold}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = CompareOptions::default();
        assert_eq!(opts.threshold, 30);
        assert_eq!(opts.min_region_size, 10);
        assert_eq!(opts.merge_margin, 20);
        assert_eq!(opts.smooth.dilate_size, 5);
        assert_eq!(opts.overlay.color, Color::RED);
        assert_eq!(opts.overlay.border_width, 3);
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn test_threshold_bounds() {
        assert!(CompareOptions::default().with_threshold(765).validate().is_ok());
        assert!(CompareOptions::default().with_threshold(766).validate().is_err());
    }

    #[test]
    fn test_smooth_validation() {
        let bad_size = SmoothOptions::default().with_dilate_size(4);
        assert!(bad_size.validate().is_err());
        assert!(SmoothOptions::default().with_dilate_size(0).validate().is_err());
        assert!(SmoothOptions::default().with_blur_radius(-1.0).validate().is_err());
        assert!(SmoothOptions::default().with_blur_radius(f32::INFINITY).validate().is_err());
        assert!(SmoothOptions::default().with_blur_radius(0.0).validate().is_ok());
    }
}
