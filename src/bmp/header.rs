//! The two fixed-layout BMP headers, packed field by field.
//!
//! All multi-byte fields are little-endian with no padding between them, so
//! serialization is explicit `to_le_bytes`/`from_le_bytes` per field rather
//! than any struct-over-bytes reinterpretation.

use crate::error::ImgError;

pub(crate) const FILE_HEADER_LEN: usize = 14;
pub(crate) const INFO_HEADER_LEN: usize = 40;
/// Pixel data always starts right after the two headers.
pub(crate) const HEADER_LEN: usize = FILE_HEADER_LEN + INFO_HEADER_LEN;

const MAGIC: [u8; 2] = *b"BM";
/// 300 DPI expressed in pixels per metre. Non-standard but intentional: the
/// writer always emits this value and the reader requires it, so the
/// resolution fields double as a format check. BMP files from other
/// producers are rejected even when otherwise decodable.
const RESOLUTION_PPM: u32 = 11811;
const BITS_PER_PIXEL: u16 = 24;
const COLORS_IMPORTANT: u32 = 0x0100_0000;

/// 14-byte file header (the 2 magic bytes plus three fields).
pub(crate) struct FileHeader {
    /// Total file size: headers plus pixel data.
    pub file_size: u32,
    pub reserved: u32,
    pub data_offset: u32,
}

impl FileHeader {
    pub(crate) fn for_image(pixel_bytes: u32) -> Self {
        Self {
            file_size: HEADER_LEN as u32 + pixel_bytes,
            reserved: 0,
            data_offset: HEADER_LEN as u32,
        }
    }

    pub(crate) fn write_to(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&MAGIC);
        out.extend_from_slice(&self.file_size.to_le_bytes());
        out.extend_from_slice(&self.reserved.to_le_bytes());
        out.extend_from_slice(&self.data_offset.to_le_bytes());
    }

    pub(crate) fn parse(data: &[u8]) -> Result<Self, ImgError> {
        if data.len() < FILE_HEADER_LEN {
            return Err(ImgError::UnexpectedEof);
        }
        if data[..2] != MAGIC {
            return Err(ImgError::InvalidHeader("missing BM signature".into()));
        }
        Ok(Self {
            file_size: le_u32(data, 2),
            reserved: le_u32(data, 6),
            data_offset: le_u32(data, 10),
        })
    }
}

/// 40-byte BITMAPINFOHEADER.
pub(crate) struct InfoHeader {
    pub header_size: u32,
    pub width: i32,
    /// Positive height means bottom-up row order; negative would be the
    /// unsupported top-down variant.
    pub height: i32,
    pub planes: u16,
    pub bits_per_pixel: u16,
    pub compression: u32,
    pub image_size: u32,
    pub x_resolution: u32,
    pub y_resolution: u32,
    pub colors_used: u32,
    pub colors_important: u32,
}

impl InfoHeader {
    pub(crate) fn for_image(width: i32, height: i32, pixel_bytes: u32) -> Self {
        Self {
            header_size: INFO_HEADER_LEN as u32,
            width,
            height,
            planes: 1,
            bits_per_pixel: BITS_PER_PIXEL,
            compression: 0,
            image_size: pixel_bytes,
            x_resolution: RESOLUTION_PPM,
            y_resolution: RESOLUTION_PPM,
            colors_used: 0,
            colors_important: COLORS_IMPORTANT,
        }
    }

    pub(crate) fn write_to(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.header_size.to_le_bytes());
        out.extend_from_slice(&self.width.to_le_bytes());
        out.extend_from_slice(&self.height.to_le_bytes());
        out.extend_from_slice(&self.planes.to_le_bytes());
        out.extend_from_slice(&self.bits_per_pixel.to_le_bytes());
        out.extend_from_slice(&self.compression.to_le_bytes());
        out.extend_from_slice(&self.image_size.to_le_bytes());
        out.extend_from_slice(&self.x_resolution.to_le_bytes());
        out.extend_from_slice(&self.y_resolution.to_le_bytes());
        out.extend_from_slice(&self.colors_used.to_le_bytes());
        out.extend_from_slice(&self.colors_important.to_le_bytes());
    }

    pub(crate) fn parse(data: &[u8]) -> Result<Self, ImgError> {
        if data.len() < INFO_HEADER_LEN {
            return Err(ImgError::UnexpectedEof);
        }
        Ok(Self {
            header_size: le_u32(data, 0),
            width: le_u32(data, 4) as i32,
            height: le_u32(data, 8) as i32,
            planes: le_u16(data, 12),
            bits_per_pixel: le_u16(data, 14),
            compression: le_u32(data, 16),
            image_size: le_u32(data, 20),
            x_resolution: le_u32(data, 24),
            y_resolution: le_u32(data, 28),
            colors_used: le_u32(data, 32),
            colors_important: le_u32(data, 36),
        })
    }

    /// Validate the structural invariants and return (width, height).
    ///
    /// Resolution mismatch is [`ImgError::InvalidHeader`] ("not one of our
    /// BMPs"); recognizable-but-unhandled variants are
    /// [`ImgError::UnsupportedVariant`]. The stored file size, data offset,
    /// planes, image size, and color counts are not checked; the stride and
    /// data layout are recomputed from the dimensions alone.
    pub(crate) fn validate(&self) -> Result<(u32, u32), ImgError> {
        if self.x_resolution != RESOLUTION_PPM || self.y_resolution != RESOLUTION_PPM {
            return Err(ImgError::InvalidHeader(format!(
                "resolution {}x{} does not match the expected {RESOLUTION_PPM}",
                self.x_resolution, self.y_resolution
            )));
        }
        if self.header_size != INFO_HEADER_LEN as u32 {
            return Err(ImgError::UnsupportedVariant(format!(
                "info header size {}",
                self.header_size
            )));
        }
        if self.height < 0 {
            return Err(ImgError::UnsupportedVariant(
                "top-down BMP (negative height)".into(),
            ));
        }
        if self.width < 0 {
            return Err(ImgError::InvalidHeader(format!(
                "negative width {}",
                self.width
            )));
        }
        if self.bits_per_pixel != BITS_PER_PIXEL {
            return Err(ImgError::UnsupportedVariant(format!(
                "{} bits per pixel",
                self.bits_per_pixel
            )));
        }
        if self.compression != 0 {
            return Err(ImgError::UnsupportedVariant(format!(
                "compression type {}",
                self.compression
            )));
        }
        Ok((self.width as u32, self.height as u32))
    }
}

fn le_u16(data: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([data[at], data[at + 1]])
}

fn le_u32(data: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([data[at], data[at + 1], data[at + 2], data[at + 3]])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headers_roundtrip() {
        let mut buf = Vec::new();
        FileHeader::for_image(16).write_to(&mut buf);
        InfoHeader::for_image(2, 2, 16).write_to(&mut buf);
        assert_eq!(buf.len(), HEADER_LEN);

        let file = FileHeader::parse(&buf).unwrap();
        assert_eq!(file.file_size, 70);
        assert_eq!(file.reserved, 0);
        assert_eq!(file.data_offset, 54);

        let info = InfoHeader::parse(&buf[FILE_HEADER_LEN..]).unwrap();
        assert_eq!(info.planes, 1);
        assert_eq!(info.image_size, 16);
        assert_eq!(info.colors_used, 0);
        assert_eq!(info.colors_important, 0x0100_0000);
        assert_eq!(info.validate().unwrap(), (2, 2));
    }

    #[test]
    fn short_header_is_eof() {
        assert!(matches!(
            FileHeader::parse(b"BM"),
            Err(ImgError::UnexpectedEof)
        ));
        assert!(matches!(
            InfoHeader::parse(&[0u8; 39]),
            Err(ImgError::UnexpectedEof)
        ));
    }
}
