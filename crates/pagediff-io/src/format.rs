//! Raster format identification
//!
//! Detects encoded formats by examining magic numbers in the header.

use crate::{IoError, IoResult};

/// Encoded raster format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ImageFormat {
    /// Portable Network Graphics
    #[default]
    Png,
    /// Binary portable pixmap (P6) or graymap (P5)
    Pnm,
}

impl ImageFormat {
    /// Get the file extension for this format.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Pnm => "pnm",
        }
    }
}

/// Magic numbers for format detection
mod magic {
    /// PNG: 89 50 4E 47 0D 0A 1A 0A
    pub const PNG: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    /// PNM binary formats
    pub const PGM_BINARY: &[u8] = b"P5";
    pub const PPM_BINARY: &[u8] = b"P6";
}

/// Detect the encoded format from leading bytes
pub fn detect_format_from_bytes(data: &[u8]) -> IoResult<ImageFormat> {
    if data.len() < 2 {
        return Err(IoError::InvalidData(
            "not enough data to detect format".to_string(),
        ));
    }

    if data.len() >= 8 && data.starts_with(magic::PNG) {
        return Ok(ImageFormat::Png);
    }

    if data.starts_with(magic::PPM_BINARY) || data.starts_with(magic::PGM_BINARY) {
        return Ok(ImageFormat::Pnm);
    }

    Err(IoError::UnsupportedFormat(format!(
        "unrecognized header: {:02x?}",
        &data[..data.len().min(8)]
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_png() {
        let header = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0, 0];
        assert_eq!(detect_format_from_bytes(&header).unwrap(), ImageFormat::Png);
    }

    #[test]
    fn test_detect_pnm() {
        assert_eq!(
            detect_format_from_bytes(b"P6\n2 2\n255\n").unwrap(),
            ImageFormat::Pnm
        );
        assert_eq!(detect_format_from_bytes(b"P5 1 1 255 ").unwrap(), ImageFormat::Pnm);
    }

    #[test]
    fn test_detect_unknown() {
        assert!(detect_format_from_bytes(b"GIF89a").is_err());
        assert!(detect_format_from_bytes(b"P").is_err());
    }
}
