//! Canvas reconciliation
//!
//! Brings two page rasters to a common size before they are compared
//! pixel by pixel.

use crate::CompareResult;
use pagediff_core::{Color, PixelBuffer, PixelBufferMut};

/// Color of the area a canvas is extended with
pub const BACKGROUND: Color = Color::WHITE;

/// Extend both rasters to `(max(wA, wB), max(hA, hB))`
///
/// Each input keeps its pixels at the origin; the added area is
/// [`BACKGROUND`]. A raster that already has the common size is returned
/// as a cheap shared handle rather than copied.
pub fn reconcile_canvases(
    a: &PixelBuffer,
    b: &PixelBuffer,
) -> CompareResult<(PixelBuffer, PixelBuffer)> {
    let width = a.width().max(b.width());
    let height = a.height().max(b.height());
    Ok((
        extend_canvas(a, width, height)?,
        extend_canvas(b, width, height)?,
    ))
}

fn extend_canvas(src: &PixelBuffer, width: u32, height: u32) -> CompareResult<PixelBuffer> {
    if src.dimensions() == (width, height) {
        return Ok(src.clone());
    }
    let mut canvas = PixelBufferMut::new_filled(width, height, BACKGROUND)?;
    canvas.paste_at_origin(src);
    Ok(canvas.into())
}
