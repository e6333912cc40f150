//! Convolution operations
//!
//! Masks are convolved with replicate (clamp) border handling: samples
//! outside the mask take the value of the nearest edge pixel. The
//! horizontal pass keeps full float precision; only the final value is
//! rounded back to a byte.

use crate::{FilterError, FilterResult, Kernel};
use pagediff_core::DifferenceMask;

/// Separable convolution with a horizontal and a vertical kernel
///
/// `kernel_x` must be a single row and `kernel_y` a single column.
///
/// # Errors
///
/// Returns [`FilterError::InvalidKernel`] if the kernels have the wrong shape.
pub fn convolve_sep(
    mask: &DifferenceMask,
    kernel_x: &Kernel,
    kernel_y: &Kernel,
) -> FilterResult<DifferenceMask> {
    if kernel_x.height() != 1 {
        return Err(FilterError::InvalidKernel(format!(
            "horizontal kernel must have height 1, got {}",
            kernel_x.height()
        )));
    }
    if kernel_y.width() != 1 {
        return Err(FilterError::InvalidKernel(format!(
            "vertical kernel must have width 1, got {}",
            kernel_y.width()
        )));
    }
    if mask.pixel_count() == 0 {
        return Ok(mask.clone());
    }

    let w = mask.width() as usize;
    let h = mask.height() as usize;
    let src = mask.bits();

    // Horizontal pass
    let kx = kernel_x.data();
    let kcx = kernel_x.center_x() as isize;
    let mut tmp = vec![0.0f32; w * h];
    for y in 0..h {
        let row = &src[y * w..(y + 1) * w];
        for x in 0..w {
            let mut sum = 0.0f32;
            for (k, &weight) in kx.iter().enumerate() {
                let sx = (x as isize + k as isize - kcx).clamp(0, w as isize - 1) as usize;
                sum += f32::from(row[sx]) * weight;
            }
            tmp[y * w + x] = sum;
        }
    }

    // Vertical pass
    let ky = kernel_y.data();
    let kcy = kernel_y.center_y() as isize;
    let mut out = vec![0u8; w * h];
    for y in 0..h {
        for x in 0..w {
            let mut sum = 0.0f32;
            for (k, &weight) in ky.iter().enumerate() {
                let sy = (y as isize + k as isize - kcy).clamp(0, h as isize - 1) as usize;
                sum += tmp[sy * w + x] * weight;
            }
            out[y * w + x] = sum.round().clamp(0.0, 255.0) as u8;
        }
    }

    Ok(DifferenceMask::from_bits(mask.width(), mask.height(), out)?)
}

/// Apply a Gaussian blur with standard deviation `radius`
///
/// A radius of zero returns the mask unchanged.
///
/// # Errors
///
/// Returns [`FilterError::InvalidParameters`] for negative or non-finite radii.
pub fn gaussian_blur(mask: &DifferenceMask, radius: f32) -> FilterResult<DifferenceMask> {
    if radius == 0.0 {
        return Ok(mask.clone());
    }
    let kernel_x = Kernel::gaussian_1d(radius)?;
    let kernel_y = kernel_x.transpose();
    convolve_sep(mask, &kernel_x, &kernel_y)
}
