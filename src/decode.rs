use crate::error::ImgError;
use crate::image::Image;
use crate::info::ImageFormat;
use crate::limits::Limits;
use crate::{bmp, jpeg, ppm};

/// In-memory decode request.
///
/// The format defaults to magic-byte sniffing; [`with_format`] pins it when
/// the caller already knows (e.g. from a file extension).
///
/// [`with_format`]: DecodeRequest::with_format
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
    format: Option<ImageFormat>,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            limits: None,
            format: None,
        }
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    pub fn with_format(mut self, format: ImageFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn decode(self) -> Result<Image, ImgError> {
        let format = match self.format {
            Some(format) => format,
            None => ImageFormat::from_bytes(self.data).ok_or(ImgError::UnrecognizedFormat)?,
        };
        match format {
            ImageFormat::Bmp => bmp::decode(self.data, self.limits),
            ImageFormat::Ppm => ppm::decode(self.data, self.limits),
            ImageFormat::Jpeg => jpeg::decode(self.data, self.limits),
        }
    }
}
