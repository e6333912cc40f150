//! pagediff-io - Raster encoding and decoding
//!
//! Overlays leave the pipeline as PNG through a [`RasterEncoder`]. The
//! reading side exists so that callers can load reference pages and tests
//! can inspect what was written.
//!
//! # Supported formats
//!
//! | Format | Read | Write | Feature      |
//! |--------|------|-------|--------------|
//! | PNG    | yes  | yes   | `png-format` |
//! | PNM    | yes  | yes   | `pnm`        |

pub mod error;
pub mod format;
#[cfg(feature = "png-format")]
pub mod png;
#[cfg(feature = "pnm")]
pub mod pnm;

pub use error::{IoError, IoResult};
pub use format::{ImageFormat, detect_format_from_bytes};

use pagediff_core::PixelBuffer;
use std::fs::File;
use std::io::{BufWriter, Cursor};
use std::path::Path;

/// Serializes a raster into an encoded byte stream.
pub trait RasterEncoder {
    /// Format produced by this encoder
    fn format(&self) -> ImageFormat;

    /// Encode `raster` into a freshly allocated buffer.
    fn encode(&self, raster: &PixelBuffer) -> IoResult<Vec<u8>>;
}

/// PNG encoder, the default for overlays
#[cfg(feature = "png-format")]
#[derive(Debug, Clone, Copy, Default)]
pub struct PngEncoder;

#[cfg(feature = "png-format")]
impl RasterEncoder for PngEncoder {
    fn format(&self) -> ImageFormat {
        ImageFormat::Png
    }

    fn encode(&self, raster: &PixelBuffer) -> IoResult<Vec<u8>> {
        let mut buffer = Vec::new();
        png::write_png(raster, &mut buffer)?;
        Ok(buffer)
    }
}

/// Binary PPM encoder
#[cfg(feature = "pnm")]
#[derive(Debug, Clone, Copy, Default)]
pub struct PnmEncoder;

#[cfg(feature = "pnm")]
impl RasterEncoder for PnmEncoder {
    fn format(&self) -> ImageFormat {
        ImageFormat::Pnm
    }

    fn encode(&self, raster: &PixelBuffer) -> IoResult<Vec<u8>> {
        let mut buffer = Vec::new();
        pnm::write_pnm(raster, &mut buffer)?;
        Ok(buffer)
    }
}

/// Encode a raster in the given format.
pub fn encode_image(raster: &PixelBuffer, format: ImageFormat) -> IoResult<Vec<u8>> {
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => PngEncoder.encode(raster),
        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => PnmEncoder.encode(raster),
        #[allow(unreachable_patterns)]
        other => Err(IoError::UnsupportedFormat(format!(
            "{other:?} support not enabled"
        ))),
    }
}

/// Write a raster to a file.
pub fn write_image<P: AsRef<Path>>(
    raster: &PixelBuffer,
    path: P,
    format: ImageFormat,
) -> IoResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::write_png(raster, &mut writer),
        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => pnm::write_pnm(raster, &mut writer),
        #[allow(unreachable_patterns)]
        other => Err(IoError::UnsupportedFormat(format!(
            "{other:?} support not enabled"
        ))),
    }
}

/// Read a raster from a file, detecting the format from its header.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<PixelBuffer> {
    let data = std::fs::read(path)?;
    read_image_mem(&data)
}

/// Read a raster from an in-memory buffer.
pub fn read_image_mem(data: &[u8]) -> IoResult<PixelBuffer> {
    match detect_format_from_bytes(data)? {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::read_png(Cursor::new(data)),
        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => pnm::read_pnm(data),
        #[allow(unreachable_patterns)]
        other => Err(IoError::UnsupportedFormat(format!(
            "{other:?} support not enabled"
        ))),
    }
}
