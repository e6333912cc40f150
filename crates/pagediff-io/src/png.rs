//! PNG format support
//!
//! Overlays are written as 8-bit RGB; masks as 8-bit grayscale. Reading
//! accepts any PNG the `png` crate can normalize to 8-bit samples and
//! flattens it to RGB (alpha is dropped, gray is replicated).

use crate::{IoError, IoResult};
use pagediff_core::{CHANNELS, DifferenceMask, PixelBuffer};
use ::png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image into an RGB8 raster
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<PixelBuffer> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::normalize_to_color8());
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let (color_type, bit_depth) = reader.output_color_type();
    if bit_depth != BitDepth::Eight {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported PNG output depth: {:?}",
            bit_depth
        )));
    }
    let samples = match color_type {
        ColorType::Grayscale => 1,
        ColorType::GrayscaleAlpha => 2,
        ColorType::Rgb => 3,
        ColorType::Rgba => 4,
        ColorType::Indexed => {
            return Err(IoError::UnsupportedFormat(
                "indexed PNG was not expanded".to_string(),
            ));
        }
    };

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let width = output_info.width;
    let height = output_info.height;
    let line_size = output_info.line_size;
    let mut pixels = Vec::with_capacity(width as usize * height as usize * CHANNELS);

    for y in 0..height as usize {
        let row = &buf[y * line_size..y * line_size + width as usize * samples];
        for px in row.chunks_exact(samples) {
            match samples {
                1 | 2 => pixels.extend_from_slice(&[px[0], px[0], px[0]]),
                _ => pixels.extend_from_slice(&px[..CHANNELS]),
            }
        }
    }

    Ok(PixelBuffer::from_rgb(width, height, pixels)?)
}

/// Write an RGB8 raster as PNG
pub fn write_png<W: Write>(raster: &PixelBuffer, writer: W) -> IoResult<()> {
    write_png_data(
        writer,
        raster.width(),
        raster.height(),
        ColorType::Rgb,
        raster.pixels(),
    )
}

/// Write a mask as an 8-bit grayscale PNG
///
/// # Errors
///
/// Returns [`IoError::InvalidData`] for zero-sized masks, which PNG cannot
/// represent.
pub fn write_png_mask<W: Write>(mask: &DifferenceMask, writer: W) -> IoResult<()> {
    if mask.width() == 0 || mask.height() == 0 {
        return Err(IoError::InvalidData(format!(
            "cannot encode {}x{} mask",
            mask.width(),
            mask.height()
        )));
    }
    write_png_data(
        writer,
        mask.width(),
        mask.height(),
        ColorType::Grayscale,
        mask.bits(),
    )
}

fn write_png_data<W: Write>(
    writer: W,
    width: u32,
    height: u32,
    color_type: ColorType,
    data: &[u8],
) -> IoResult<()> {
    let mut encoder = Encoder::new(writer, width, height);
    encoder.set_color(color_type);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;

    writer
        .write_image_data(data)
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;

    writer
        .finish()
        .map_err(|e| IoError::EncodeError(format!("PNG finish error: {}", e)))?;

    Ok(())
}
