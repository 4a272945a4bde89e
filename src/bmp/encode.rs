//! BMP pixel stream writer: bottom-up, padded, BGR-ordered scanlines.

use super::header::{FileHeader, InfoHeader, HEADER_LEN};
use super::stride;
use crate::error::ImgError;
use crate::image::Image;

/// Encode an image as uncompressed 24-bit BMP.
pub(crate) fn encode(image: &Image) -> Result<Vec<u8>, ImgError> {
    let w = image.width();
    let h = image.height();
    let too_large = ImgError::DimensionsTooLarge {
        width: w as u64,
        height: h as u64,
    };
    if w > i32::MAX as usize || h > i32::MAX as usize {
        return Err(too_large);
    }

    let row_stride = stride(w as u32);
    let pixel_bytes = row_stride * h as u64;
    let file_size = pixel_bytes + HEADER_LEN as u64;
    if file_size > u64::from(u32::MAX) {
        return Err(too_large);
    }

    let mut out = Vec::with_capacity(file_size as usize);
    FileHeader::for_image(pixel_bytes as u32).write_to(&mut out);
    InfoHeader::for_image(w as i32, h as i32, pixel_bytes as u32).write_to(&mut out);

    // Pad bytes beyond width*3 must be zero.
    let pad = row_stride as usize - w * 3;
    for y in (0..h).rev() {
        for px in image.row(y) {
            out.push(px.b);
            out.push(px.g);
            out.push(px.r);
        }
        out.resize(out.len() + pad, 0);
    }

    Ok(out)
}
