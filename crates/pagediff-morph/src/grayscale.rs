//! Grayscale morphology on masks
//!
//! Dilation with a brick (rectangular, all-hit) structuring element is a
//! max filter. A brick is separable, so the filter runs as a horizontal
//! pass followed by a vertical pass. The element origin sits at
//! `(hsize / 2, vsize / 2)`, which centers it for odd sizes.
//!
//! Pixels outside the mask never contribute: the window is clipped at the
//! border rather than padded.

use crate::{MorphError, MorphResult};
use pagediff_core::DifferenceMask;

/// Dilate a mask with a `hsize x vsize` brick structuring element
///
/// Each output pixel is the maximum of the input over the element placed
/// at that pixel, so flagged areas grow by `hsize / 2` columns left and
/// `(hsize - 1) / 2` right (likewise vertically).
///
/// # Errors
///
/// Returns [`MorphError::InvalidParameters`] if either size is zero.
pub fn dilate_gray(mask: &DifferenceMask, hsize: u32, vsize: u32) -> MorphResult<DifferenceMask> {
    if hsize == 0 || vsize == 0 {
        return Err(MorphError::InvalidParameters(format!(
            "brick size must be at least 1x1, got {hsize}x{vsize}"
        )));
    }
    if (hsize == 1 && vsize == 1) || mask.pixel_count() == 0 {
        return Ok(mask.clone());
    }

    let (w, h) = (mask.width() as usize, mask.height() as usize);
    let src = mask.bits();

    let mut horiz = vec![0u8; src.len()];
    if hsize > 1 {
        let (before, after) = reach(hsize);
        for y in 0..h {
            let row = &src[y * w..(y + 1) * w];
            max_filter_line(row, &mut horiz[y * w..(y + 1) * w], before, after);
        }
    } else {
        horiz.copy_from_slice(src);
    }

    let mut out = horiz.clone();
    if vsize > 1 {
        let (before, after) = reach(vsize);
        let mut column = vec![0u8; h];
        let mut filtered = vec![0u8; h];
        for x in 0..w {
            for (y, v) in column.iter_mut().enumerate() {
                *v = horiz[y * w + x];
            }
            max_filter_line(&column, &mut filtered, before, after);
            for (y, &v) in filtered.iter().enumerate() {
                out[y * w + x] = v;
            }
        }
    }

    Ok(DifferenceMask::from_bits(mask.width(), mask.height(), out)?)
}

/// Dilate a mask with a `size x size` square
pub fn dilate_square(mask: &DifferenceMask, size: u32) -> MorphResult<DifferenceMask> {
    dilate_gray(mask, size, size)
}

/// Offsets covered by an element of `size` relative to its origin
fn reach(size: u32) -> (usize, usize) {
    let origin = (size / 2) as usize;
    (origin, size as usize - 1 - origin)
}

/// 1-D max filter over `[i - before, i + after]`, clipped at both ends
fn max_filter_line(src: &[u8], dst: &mut [u8], before: usize, after: usize) {
    let n = src.len();
    for (i, out) in dst.iter_mut().enumerate() {
        let lo = i.saturating_sub(before);
        let hi = (i + after).min(n - 1);
        *out = src[lo..=hi].iter().copied().max().unwrap_or(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagediff_core::{MASK_ON, Region};

    #[test]
    fn test_single_pixel_grows_to_square() {
        let mut mask = DifferenceMask::new(11, 11);
        mask.set(5, 5, MASK_ON).unwrap();

        let out = dilate_square(&mask, 5).unwrap();
        assert_eq!(out.count_set(), 25);
        assert_eq!(out.get(3, 3), Some(MASK_ON));
        assert_eq!(out.get(7, 7), Some(MASK_ON));
        assert_eq!(out.get(2, 5), Some(0));
        assert_eq!(out.get(5, 8), Some(0));
    }

    #[test]
    fn test_dilation_clips_at_border() {
        let mut mask = DifferenceMask::new(6, 6);
        mask.set(0, 0, MASK_ON).unwrap();
        let out = dilate_square(&mask, 5).unwrap();
        assert_eq!(out.count_set(), 9);
        assert_eq!(out.get(2, 2), Some(MASK_ON));
    }

    #[test]
    fn test_rectangular_brick() {
        let mut mask = DifferenceMask::new(9, 9);
        mask.set(4, 4, 200).unwrap();
        let out = dilate_gray(&mask, 3, 1).unwrap();
        assert_eq!(out.count_set(), 3);
        assert_eq!(out.get(3, 4), Some(200));
        assert_eq!(out.get(4, 3), Some(0));
    }

    #[test]
    fn test_dilation_is_extensive() {
        let mut mask = DifferenceMask::new(20, 20);
        mask.fill_region(&Region::new_unchecked(4, 6, 9, 8), MASK_ON);
        let out = dilate_square(&mask, 5).unwrap();
        for (a, b) in mask.bits().iter().zip(out.bits()) {
            assert!(b >= a);
        }
        assert_eq!(out.count_set(), 10 * 7);
    }

    #[test]
    fn test_degenerate_sizes() {
        let mask = DifferenceMask::new(4, 4);
        assert!(dilate_gray(&mask, 0, 3).is_err());
        assert_eq!(dilate_square(&mask, 1).unwrap(), mask);
        let empty = DifferenceMask::new(0, 0);
        assert_eq!(dilate_square(&empty, 5).unwrap().pixel_count(), 0);
    }
}
