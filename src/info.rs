use std::path::Path;

use crate::error::ImgError;
use crate::{bmp, jpeg, ppm};

/// Raster file format, a closed set selected by extension or magic bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    /// Windows bitmap, 24-bit uncompressed only.
    Bmp,
    /// Binary PPM (P6).
    Ppm,
    /// JPEG/JFIF.
    Jpeg,
}

impl ImageFormat {
    /// Select a format from a file extension, ASCII case-insensitively.
    ///
    /// Recognized: `.bmp`, `.ppm`, `.jpg`, `.jpeg`.
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        let ext = path.as_ref().extension()?;
        if ext.eq_ignore_ascii_case("bmp") {
            Some(Self::Bmp)
        } else if ext.eq_ignore_ascii_case("ppm") {
            Some(Self::Ppm)
        } else if ext.eq_ignore_ascii_case("jpg") || ext.eq_ignore_ascii_case("jpeg") {
            Some(Self::Jpeg)
        } else {
            None
        }
    }

    /// Sniff a format from leading magic bytes.
    pub fn from_bytes(data: &[u8]) -> Option<Self> {
        match data {
            [b'B', b'M', ..] => Some(Self::Bmp),
            [b'P', b'6', ..] => Some(Self::Ppm),
            [0xff, 0xd8, ..] => Some(Self::Jpeg),
            _ => None,
        }
    }
}

/// Basic properties read from a file header without decoding pixel data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    pub format: ImageFormat,
}

impl ImageInfo {
    /// Probe the header of an in-memory file.
    pub fn from_bytes(data: &[u8]) -> Result<Self, ImgError> {
        match ImageFormat::from_bytes(data).ok_or(ImgError::UnrecognizedFormat)? {
            ImageFormat::Bmp => bmp::probe(data),
            ImageFormat::Ppm => ppm::probe(data),
            ImageFormat::Jpeg => jpeg::probe(data),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ImageFormat;

    #[test]
    fn extension_dispatch() {
        assert_eq!(ImageFormat::from_path("a.bmp"), Some(ImageFormat::Bmp));
        assert_eq!(ImageFormat::from_path("a.BMP"), Some(ImageFormat::Bmp));
        assert_eq!(ImageFormat::from_path("a.ppm"), Some(ImageFormat::Ppm));
        assert_eq!(ImageFormat::from_path("a.jpg"), Some(ImageFormat::Jpeg));
        assert_eq!(ImageFormat::from_path("a.JPEG"), Some(ImageFormat::Jpeg));
        assert_eq!(ImageFormat::from_path("a.png"), None);
        assert_eq!(ImageFormat::from_path("no_extension"), None);
    }

    #[test]
    fn magic_sniffing() {
        assert_eq!(ImageFormat::from_bytes(b"BM\x36"), Some(ImageFormat::Bmp));
        assert_eq!(ImageFormat::from_bytes(b"P6\n"), Some(ImageFormat::Ppm));
        assert_eq!(
            ImageFormat::from_bytes(&[0xff, 0xd8, 0xff]),
            Some(ImageFormat::Jpeg)
        );
        assert_eq!(ImageFormat::from_bytes(b"P5\n"), None);
        assert_eq!(ImageFormat::from_bytes(b""), None);
    }
}
