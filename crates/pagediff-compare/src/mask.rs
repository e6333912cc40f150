//! Difference mask construction and smoothing

use crate::options::{SmoothOptions, check_threshold};
use crate::CompareResult;
use pagediff_core::{CHANNELS, DifferenceMask, Error, MASK_OFF, MASK_ON, PixelBuffer};
use pagediff_filter::gaussian_blur;
use pagediff_morph::dilate_square;

/// Flag every pixel whose channel-sum difference exceeds `threshold`
///
/// The result is binary: [`MASK_ON`] where `|dr| + |dg| + |db| > threshold`,
/// [`MASK_OFF`] elsewhere. Rows are independent of each other.
///
/// # Errors
///
/// Returns an error if the canvases differ in size or `threshold > 765`.
pub fn build_diff_mask(
    a: &PixelBuffer,
    b: &PixelBuffer,
    threshold: u32,
) -> CompareResult<DifferenceMask> {
    check_threshold(threshold)?;
    if a.dimensions() != b.dimensions() {
        return Err(Error::DimensionMismatch {
            expected: a.dimensions(),
            actual: b.dimensions(),
        }
        .into());
    }

    let mut mask = DifferenceMask::new(a.width(), a.height());
    for y in 0..a.height() {
        let (row_a, row_b) = (a.row(y), b.row(y));
        for (out, (pa, pb)) in mask.row_mut(y).iter_mut().zip(
            row_a
                .chunks_exact(CHANNELS)
                .zip(row_b.chunks_exact(CHANNELS)),
        ) {
            let d: u32 = pa
                .iter()
                .zip(pb)
                .map(|(&ca, &cb)| u32::from(ca.abs_diff(cb)))
                .sum();
            *out = if d > threshold { MASK_ON } else { MASK_OFF };
        }
    }
    Ok(mask)
}

/// Dilate then blur a raw mask
///
/// The output holds intermediate intensities; consumers treat values at
/// or above [`FOREGROUND_LEVEL`](pagediff_core::FOREGROUND_LEVEL) as set.
pub fn smooth_mask(raw: &DifferenceMask, options: &SmoothOptions) -> CompareResult<DifferenceMask> {
    options.validate()?;
    let dilated = dilate_square(raw, options.dilate_size)?;
    Ok(gaussian_blur(&dilated, options.blur_radius)?)
}
