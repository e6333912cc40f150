//! PNM (Portable Any Map) format support
//!
//! Reads binary PGM (P5) and PPM (P6) with a maxval of 255, and writes P6.
//! Useful for dumping intermediate canvases without a compression step.

use crate::{IoError, IoResult};
use pagediff_core::{CHANNELS, PixelBuffer};
use std::io::{BufRead, Read, Write};

/// Read a binary PNM image (P5/P6) into an RGB8 raster.
pub fn read_pnm<R: BufRead>(mut reader: R) -> IoResult<PixelBuffer> {
    let magic = read_token(&mut reader)?;
    let samples = match magic.as_str() {
        "P5" => 1,
        "P6" => CHANNELS,
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported PNM variant: {other}"
            )));
        }
    };
    let width = parse_header_value(&read_token(&mut reader)?, "width")?;
    let height = parse_header_value(&read_token(&mut reader)?, "height")?;
    let maxval = parse_header_value(&read_token(&mut reader)?, "maxval")?;
    if maxval != 255 {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported PNM maxval: {maxval}"
        )));
    }

    let expected = sample_len(width, height, samples)?;
    // Buffer grows with the bytes actually present, never with the header alone
    let mut data = Vec::new();
    reader.take(expected as u64).read_to_end(&mut data)?;
    if data.len() != expected {
        return Err(IoError::DecodeError(format!(
            "truncated PNM data: expected {expected} bytes, got {}",
            data.len()
        )));
    }

    let pixels = if samples == 1 {
        data.iter().flat_map(|&v| [v, v, v]).collect()
    } else {
        data
    };
    Ok(PixelBuffer::from_rgb(width, height, pixels)?)
}

/// Write an RGB8 raster as binary PPM (P6).
pub fn write_pnm<W: Write>(raster: &PixelBuffer, mut writer: W) -> IoResult<()> {
    write!(writer, "P6\n{} {}\n255\n", raster.width(), raster.height())?;
    writer.write_all(raster.pixels())?;
    writer.flush()?;
    Ok(())
}

fn sample_len(width: u32, height: u32, samples: usize) -> IoResult<usize> {
    if width == 0 || height == 0 {
        return Err(IoError::InvalidData(format!(
            "zero PNM dimensions: {width}x{height}"
        )));
    }
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(samples))
        .ok_or_else(|| IoError::InvalidData(format!("PNM dimensions too large: {width}x{height}")))
}

fn parse_header_value(token: &str, field: &str) -> IoResult<u32> {
    token
        .parse()
        .map_err(|_| IoError::InvalidData(format!("bad PNM {field}: {token:?}")))
}

/// Read one whitespace-delimited header token, skipping `#` comments.
///
/// Consumes exactly one whitespace byte after the token, so that after the
/// maxval the reader sits at the first sample byte.
fn read_token<R: BufRead>(reader: &mut R) -> IoResult<String> {
    let mut token = String::new();
    let mut byte = [0u8; 1];
    loop {
        if reader.read(&mut byte)? == 0 {
            if token.is_empty() {
                return Err(IoError::InvalidData("unexpected end of PNM header".into()));
            }
            return Ok(token);
        }
        match byte[0] {
            b'#' if token.is_empty() => {
                let mut comment = Vec::new();
                reader.read_until(b'\n', &mut comment)?;
            }
            b if b.is_ascii_whitespace() => {
                if !token.is_empty() {
                    return Ok(token);
                }
            }
            b => token.push(char::from(b)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagediff_core::Color;
    use std::io::Cursor;

    #[test]
    fn test_pnm_roundtrip() {
        let mut buf = PixelBuffer::new_filled(4, 3, Color::WHITE).unwrap().to_mut();
        buf.set_rgb(3, 2, Color::RED).unwrap();
        let buf: PixelBuffer = buf.into();

        let mut encoded = Vec::new();
        write_pnm(&buf, &mut encoded).unwrap();
        assert!(encoded.starts_with(b"P6\n4 3\n255\n"));

        let decoded = read_pnm(Cursor::new(encoded)).unwrap();
        assert!(decoded.same_content(&buf));
    }

    #[test]
    fn test_pgm_with_comment() {
        let mut data = b"P5\n# scanned page\n2 1\n255\n".to_vec();
        data.extend_from_slice(&[10, 250]);
        let decoded = read_pnm(Cursor::new(data)).unwrap();
        assert_eq!(decoded.get_rgb(0, 0), Some(Color::new(10, 10, 10)));
        assert_eq!(decoded.get_rgb(1, 0), Some(Color::new(250, 250, 250)));
    }

    #[test]
    fn test_pnm_rejects_truncated_and_ascii() {
        assert!(read_pnm(Cursor::new(b"P6\n2 2\n255\n\x00\x00".to_vec())).is_err());
        assert!(read_pnm(Cursor::new(b"P3\n1 1\n255\n0 0 0\n".to_vec())).is_err());
        assert!(read_pnm(Cursor::new(b"P6\n1 1\n65535\n".to_vec())).is_err());
    }

    #[test]
    fn test_pnm_rejects_oversized_and_empty_headers() {
        let huge = read_pnm(Cursor::new(b"P6\n4294967295 4294967295\n255\n".to_vec()));
        assert!(matches!(huge, Err(IoError::InvalidData(_))));

        // Fits in usize but the stream holds only a few samples
        let mut data = b"P6\n60000 60000\n255\n".to_vec();
        data.extend_from_slice(&[1, 2, 3, 4, 5, 6]);
        assert!(matches!(read_pnm(Cursor::new(data)), Err(IoError::DecodeError(_))));

        assert!(matches!(
            read_pnm(Cursor::new(b"P5\n0 4\n255\n".to_vec())),
            Err(IoError::InvalidData(_))
        ));
    }
}
