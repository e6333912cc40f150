//! Overlay rendering
//!
//! Highlights regions on a copy of the newer canvas: an outline outset
//! from each region, then a translucent fill over the region itself.

use crate::{CompareResult, OverlayStyle};
use pagediff_core::{DifferenceMask, MASK_ON, PixelBuffer, Region};

/// Draw `regions` onto a copy of `canvas`
///
/// Outlines are drawn first in the solid highlight color. Fills go to a
/// separate coverage layer that is composited once at
/// [`OverlayStyle::fill_alpha`], so overlapping regions do not darken
/// twice. With no regions the canvas is returned unmodified.
pub fn render_overlay(
    canvas: &PixelBuffer,
    regions: &[Region],
    style: &OverlayStyle,
) -> CompareResult<PixelBuffer> {
    if regions.is_empty() {
        return Ok(canvas.clone());
    }

    let mut out = canvas.to_mut();
    for region in regions {
        out.render_box_color(region, style.border_outset, style.border_width, style.color);
    }

    let mut layer = DifferenceMask::new(canvas.width(), canvas.height());
    for region in regions {
        layer.fill_region(region, MASK_ON);
    }
    out.composite_layer(&layer, style.color, style.fill_alpha)?;

    Ok(out.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagediff_core::Color;

    #[test]
    fn test_no_regions_is_unmodified_copy() {
        let canvas = PixelBuffer::new_filled(20, 20, Color::WHITE).unwrap();
        let out = render_overlay(&canvas, &[], &OverlayStyle::default()).unwrap();
        assert!(out.same_content(&canvas));
    }

    #[test]
    fn test_border_and_fill() {
        let canvas = PixelBuffer::new_filled(60, 60, Color::WHITE).unwrap();
        let region = Region::new_unchecked(20, 20, 39, 39);
        let style = OverlayStyle::default();
        let out = render_overlay(&canvas, &[region], &style).unwrap();

        let tint = Color::RED.over(Color::WHITE, style.fill_alpha);
        // Outline spans 18..=20 on the left edge; the innermost column is also filled
        assert_eq!(out.get_rgb(18, 30), Some(Color::RED));
        assert_eq!(out.get_rgb(19, 30), Some(Color::RED));
        assert_eq!(out.get_rgb(20, 30), Some(Color::RED));
        assert_eq!(out.get_rgb(17, 30), Some(Color::WHITE));
        assert_eq!(out.get_rgb(30, 30), Some(tint));
        assert_eq!(out.get_rgb(41, 41), Some(Color::RED));
        assert_eq!(out.get_rgb(42, 41), Some(Color::WHITE));
        // The source canvas is untouched
        assert_eq!(canvas.get_rgb(30, 30), Some(Color::WHITE));
    }

    #[test]
    fn test_overlapping_fills_blend_once() {
        let canvas = PixelBuffer::new_filled(100, 100, Color::WHITE).unwrap();
        let style = OverlayStyle::default().with_border_width(1);
        let regions = [
            Region::new_unchecked(10, 10, 50, 50),
            Region::new_unchecked(30, 30, 70, 70),
        ];
        let out = render_overlay(&canvas, &regions, &style).unwrap();
        let tint = Color::RED.over(Color::WHITE, style.fill_alpha);
        assert_eq!(out.get_rgb(40, 40), Some(tint));
        assert_eq!(out.get_rgb(15, 15), Some(tint));
    }
}
