//! Whole-page comparison

use crate::mask::{build_diff_mask, smooth_mask};
use crate::overlay::render_overlay;
use crate::reconcile::reconcile_canvases;
use crate::score::similarity_from_counts;
use crate::{CompareOptions, CompareResult};
use pagediff_core::{DifferenceMask, PixelBuffer, Region};
use pagediff_region::{extract_regions, merge_regions};
use tracing::debug;

/// Everything one page comparison produces
#[derive(Debug, Clone)]
pub struct PageComparison {
    /// First canvas after reconciliation
    pub canvas_a: PixelBuffer,
    /// Second canvas after reconciliation
    pub canvas_b: PixelBuffer,
    /// Binary mask of differing pixels
    pub raw_mask: DifferenceMask,
    /// Merged change regions, sorted by `(y0, x0)`
    pub regions: Vec<Region>,
    /// Number of set pixels in `raw_mask`
    pub differing_pixels: u64,
    /// Share of unchanged pixels, in percent
    pub similarity_percent: f64,
    /// `canvas_b` with the regions highlighted
    pub overlay: PixelBuffer,
}

impl PageComparison {
    /// Whether any pixel differs
    pub fn has_differences(&self) -> bool {
        self.differing_pixels > 0
    }

    /// `(width, height)` of the reconciled canvases
    pub fn dimensions(&self) -> (u32, u32) {
        self.canvas_a.dimensions()
    }
}

/// Compare two rendered pages
///
/// Reconciles the canvases, builds the raw and smoothed masks, extracts
/// and merges regions, scores similarity on the raw mask and renders the
/// overlay onto canvas B.
///
/// # Errors
///
/// Returns [`CompareError::InvalidParameters`](crate::CompareError) if
/// `options` fail [`CompareOptions::validate`].
pub fn compare_canvases(
    a: &PixelBuffer,
    b: &PixelBuffer,
    options: &CompareOptions,
) -> CompareResult<PageComparison> {
    options.validate()?;

    let (canvas_a, canvas_b) = reconcile_canvases(a, b)?;
    let raw_mask = build_diff_mask(&canvas_a, &canvas_b, options.threshold)?;
    let differing_pixels = raw_mask.count_set();

    let regions = if differing_pixels == 0 {
        Vec::new()
    } else {
        let smoothed = smooth_mask(&raw_mask, &options.smooth)?;
        let candidates = extract_regions(&smoothed, options.min_region_size);
        let merged = merge_regions(&candidates, options.merge_margin);
        debug!(
            candidates = candidates.len(),
            merged = merged.len(),
            "extracted change regions"
        );
        merged
    };

    let similarity_percent = similarity_from_counts(differing_pixels, raw_mask.pixel_count());
    let overlay = render_overlay(&canvas_b, &regions, &options.overlay)?;

    debug!(
        width = canvas_a.width(),
        height = canvas_a.height(),
        differing_pixels,
        regions = regions.len(),
        similarity_percent,
        "compared canvases"
    );

    Ok(PageComparison {
        canvas_a,
        canvas_b,
        raw_mask,
        regions,
        differing_pixels,
        similarity_percent,
        overlay,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagediff_core::Color;

    #[test]
    fn test_identity() {
        let page = PixelBuffer::new_filled(50, 40, Color::new(12, 200, 99)).unwrap();
        for threshold in [0, 30, 765] {
            let opts = CompareOptions::default().with_threshold(threshold);
            let cmp = compare_canvases(&page, &page, &opts).unwrap();
            assert_eq!(cmp.similarity_percent, 100.0);
            assert!(!cmp.has_differences());
            assert!(cmp.regions.is_empty());
            assert!(cmp.overlay.same_content(&page));
        }
    }

    #[test]
    fn test_single_pixel_has_no_region() {
        let a = PixelBuffer::new_filled(100, 100, Color::WHITE).unwrap();
        let mut b = a.to_mut();
        b.set_rgb(40, 60, Color::BLACK).unwrap();
        let b: PixelBuffer = b.into();

        let cmp = compare_canvases(&a, &b, &CompareOptions::default()).unwrap();
        assert_eq!(cmp.differing_pixels, 1);
        assert!(cmp.has_differences());
        assert!(cmp.regions.is_empty());
        assert!(cmp.overlay.same_content(&b));
    }

    #[test]
    fn test_mismatched_sizes_compare_extension() {
        let a = PixelBuffer::new_filled(100, 100, Color::WHITE).unwrap();
        let b = PixelBuffer::new_filled(120, 80, Color::WHITE).unwrap();
        let cmp = compare_canvases(&a, &b, &CompareOptions::default()).unwrap();
        assert_eq!(cmp.dimensions(), (120, 100));
        // Both extensions are white, so nothing differs
        assert_eq!(cmp.differing_pixels, 0);
    }

    #[test]
    fn test_invalid_options_rejected() {
        let a = PixelBuffer::new_filled(10, 10, Color::WHITE).unwrap();
        let opts = CompareOptions::default().with_threshold(1000);
        assert!(compare_canvases(&a, &a, &opts).is_err());
    }
}
