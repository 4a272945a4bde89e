use crate::error::ImgError;
use crate::image::Image;
use crate::info::ImageFormat;
use crate::{bmp, jpeg, ppm};

/// In-memory encode request.
pub struct EncodeRequest {
    format: ImageFormat,
    quality: u8,
}

impl EncodeRequest {
    /// Encode as uncompressed 24-bit BMP.
    pub fn bmp() -> Self {
        Self::with_format(ImageFormat::Bmp)
    }

    /// Encode as binary PPM (P6).
    pub fn ppm() -> Self {
        Self::with_format(ImageFormat::Ppm)
    }

    /// Encode as JPEG at the default quality.
    pub fn jpeg() -> Self {
        Self::with_format(ImageFormat::Jpeg)
    }

    pub fn with_format(format: ImageFormat) -> Self {
        Self {
            format,
            quality: jpeg::DEFAULT_QUALITY,
        }
    }

    /// JPEG quality, 0 (worst) to 100 (best). Ignored by the other formats.
    pub fn with_quality(mut self, quality: u8) -> Self {
        self.quality = quality;
        self
    }

    pub fn encode(&self, image: &Image) -> Result<Vec<u8>, ImgError> {
        match self.format {
            ImageFormat::Bmp => bmp::encode(image),
            ImageFormat::Ppm => ppm::encode(image),
            ImageFormat::Jpeg => jpeg::encode(image, self.quality),
        }
    }
}
