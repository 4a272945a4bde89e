//! P6 (binary PPM) codec.
//!
//! Only the binary RGB variant with 8-bit samples (maxval 255) is handled.
//! The ASCII formats and 16-bit samples are rejected as unsupported.

use rgb::ComponentBytes as _;

use crate::error::ImgError;
use crate::image::{Image, Pixel};
use crate::info::{ImageFormat, ImageInfo};
use crate::limits::Limits;

struct PpmHeader {
    width: u32,
    height: u32,
    data_offset: usize,
}

pub(crate) fn probe(data: &[u8]) -> Result<ImageInfo, ImgError> {
    let header = parse_header(data)?;
    Ok(ImageInfo {
        width: header.width,
        height: header.height,
        format: ImageFormat::Ppm,
    })
}

fn parse_header(data: &[u8]) -> Result<PpmHeader, ImgError> {
    match data.get(..2) {
        Some(b"P6") => {}
        Some([b'P', b'1'..=b'5' | b'7']) => {
            return Err(ImgError::UnsupportedVariant(
                "only binary P6 PPM is supported".into(),
            ));
        }
        Some(_) => return Err(ImgError::InvalidHeader("missing P6 signature".into())),
        None => return Err(ImgError::UnexpectedEof),
    }

    let mut cursor = TokenCursor { data, pos: 2 };
    let width = cursor.next_u32()?;
    let height = cursor.next_u32()?;
    let maxval = cursor.next_u32()?;
    if maxval == 0 || maxval > 65535 {
        return Err(ImgError::InvalidHeader(format!("bad maxval {maxval}")));
    }
    if maxval != 255 {
        return Err(ImgError::UnsupportedVariant(format!(
            "maxval {maxval} (only 8-bit samples are supported)"
        )));
    }

    // Exactly one whitespace byte separates the header from pixel data.
    match cursor.bump() {
        Some(b) if b.is_ascii_whitespace() => {}
        Some(_) => {
            return Err(ImgError::InvalidHeader(
                "missing separator before pixel data".into(),
            ));
        }
        None => return Err(ImgError::UnexpectedEof),
    }

    Ok(PpmHeader {
        width,
        height,
        data_offset: cursor.pos,
    })
}

pub(crate) fn decode(data: &[u8], limits: Option<&Limits>) -> Result<Image, ImgError> {
    let header = parse_header(data)?;
    if let Some(limits) = limits {
        limits.check(header.width, header.height)?;
        limits.check_memory(u64::from(header.width) * u64::from(header.height) * 3)?;
    }

    let expected = u64::from(header.width) * u64::from(header.height) * 3;
    let pixel_data = &data[header.data_offset..];
    if (pixel_data.len() as u64) < expected {
        return Err(ImgError::UnexpectedEof);
    }

    let w = header.width as usize;
    let h = header.height as usize;
    let mut pixels = Vec::with_capacity(w * h);
    for sample in pixel_data[..expected as usize].chunks_exact(3) {
        pixels.push(Pixel {
            r: sample[0],
            g: sample[1],
            b: sample[2],
        });
    }
    Image::from_pixels(pixels, w, h)
}

pub(crate) fn encode(image: &Image) -> Result<Vec<u8>, ImgError> {
    let w = image.width();
    let h = image.height();
    let header = format!("P6\n{w} {h}\n255\n");
    let pixel_bytes = w
        .checked_mul(h)
        .and_then(|wh| wh.checked_mul(3))
        .ok_or(ImgError::DimensionsTooLarge {
            width: w as u64,
            height: h as u64,
        })?;

    let mut out = Vec::with_capacity(header.len() + pixel_bytes);
    out.extend_from_slice(header.as_bytes());
    out.extend_from_slice(image.pixels().as_bytes());
    Ok(out)
}

struct TokenCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl TokenCursor<'_> {
    fn peek(&self) -> Option<u8> {
        self.data.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<u8> {
        let b = self.peek();
        if b.is_some() {
            self.pos += 1;
        }
        b
    }

    /// Skip whitespace and `#` comments, which run to end of line.
    fn skip_separators(&mut self) {
        while let Some(b) = self.peek() {
            if b.is_ascii_whitespace() {
                self.pos += 1;
            } else if b == b'#' {
                while let Some(b) = self.bump() {
                    if b == b'\n' {
                        break;
                    }
                }
            } else {
                break;
            }
        }
    }

    fn next_u32(&mut self) -> Result<u32, ImgError> {
        self.skip_separators();
        let mut value: u64 = 0;
        let mut digits = 0usize;
        while let Some(b @ b'0'..=b'9') = self.peek() {
            value = value * 10 + u64::from(b - b'0');
            if value > u64::from(u32::MAX) {
                return Err(ImgError::InvalidHeader("header value out of range".into()));
            }
            digits += 1;
            self.pos += 1;
        }
        if digits == 0 {
            return match self.peek() {
                None => Err(ImgError::UnexpectedEof),
                Some(_) => Err(ImgError::InvalidHeader("expected a decimal value".into())),
            };
        }
        Ok(value as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::parse_header;
    use crate::error::ImgError;

    #[test]
    fn header_tokens_with_comments() {
        let header = parse_header(b"P6 # written by hand\n# second comment\n 3\t4\n255\nxxx").unwrap();
        assert_eq!((header.width, header.height), (3, 4));
        assert_eq!(header.data_offset, 47);
    }

    #[test]
    fn header_requires_single_separator() {
        assert!(matches!(
            parse_header(b"P6\n2 2\n255x"),
            Err(ImgError::InvalidHeader(_))
        ));
    }

    #[test]
    fn header_eof_mid_token() {
        assert!(matches!(
            parse_header(b"P6\n2 "),
            Err(ImgError::UnexpectedEof)
        ));
    }
}
