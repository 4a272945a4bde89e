//! BMP pixel stream reader.
//!
//! Single forward pass: headers, then one `stride`-wide scanline per row
//! from the bottom row up. Truncated pixel data is a hard error rather than
//! a silently part-black image.

use super::header::{FileHeader, InfoHeader, FILE_HEADER_LEN, HEADER_LEN};
use super::stride;
use crate::error::ImgError;
use crate::image::Image;
use crate::info::{ImageFormat, ImageInfo};
use crate::limits::Limits;

/// Probe dimensions without touching pixel data.
pub(crate) fn probe(data: &[u8]) -> Result<ImageInfo, ImgError> {
    let (width, height) = parse_headers(data)?;
    Ok(ImageInfo {
        width,
        height,
        format: ImageFormat::Bmp,
    })
}

fn parse_headers(data: &[u8]) -> Result<(u32, u32), ImgError> {
    if data.len() < HEADER_LEN {
        return Err(ImgError::UnexpectedEof);
    }
    FileHeader::parse(&data[..FILE_HEADER_LEN])?;
    let info = InfoHeader::parse(&data[FILE_HEADER_LEN..HEADER_LEN])?;
    info.validate()
}

/// Decode uncompressed 24-bit BMP data into an RGB image.
pub(crate) fn decode(data: &[u8], limits: Option<&Limits>) -> Result<Image, ImgError> {
    let (width, height) = parse_headers(data)?;
    if let Some(limits) = limits {
        limits.check(width, height)?;
        limits.check_memory(u64::from(width) * u64::from(height) * 3)?;
    }

    let row_stride = stride(width);
    let expected = row_stride * u64::from(height);
    let pixel_data = &data[HEADER_LEN..];
    if (pixel_data.len() as u64) < expected {
        return Err(ImgError::UnexpectedEof);
    }

    let w = width as usize;
    let h = height as usize;
    let mut image = Image::new(w, h);
    if w == 0 || h == 0 {
        return Ok(image);
    }

    // Scanlines are stored bottom-up; the first one is the last image row.
    let row_stride = row_stride as usize;
    for (y, scanline) in (0..h).rev().zip(pixel_data.chunks_exact(row_stride)) {
        let row = image.row_mut(y);
        for (x, px) in row.iter_mut().enumerate() {
            px.b = scanline[3 * x];
            px.g = scanline[3 * x + 1];
            px.r = scanline[3 * x + 2];
        }
    }

    Ok(image)
}
