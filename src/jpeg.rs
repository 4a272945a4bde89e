//! JPEG codec, delegated to `zune-jpeg` (decode) and `jpeg-encoder`
//! (encode). Decoding always requests RGB output, so grayscale and CMYK
//! sources come back as RGB like everything else in this crate.

use jpeg_encoder::{ColorType, Encoder};
use rgb::ComponentBytes as _;
use zune_core::colorspace::ColorSpace;
use zune_core::options::DecoderOptions;
use zune_jpeg::JpegDecoder;

use crate::error::ImgError;
use crate::image::{Image, Pixel};
use crate::info::{ImageFormat, ImageInfo};
use crate::limits::Limits;

pub(crate) const DEFAULT_QUALITY: u8 = 85;

pub(crate) fn probe(data: &[u8]) -> Result<ImageInfo, ImgError> {
    let mut decoder = JpegDecoder::new(data);
    decoder.decode_headers()?;
    let (width, height) = dimensions(&decoder)?;
    Ok(ImageInfo {
        width,
        height,
        format: ImageFormat::Jpeg,
    })
}

fn dimensions(decoder: &JpegDecoder<&[u8]>) -> Result<(u32, u32), ImgError> {
    let info = decoder
        .info()
        .ok_or_else(|| ImgError::InvalidHeader("jpeg headers carry no image info".into()))?;
    Ok((info.width as u32, info.height as u32))
}

pub(crate) fn decode(data: &[u8], limits: Option<&Limits>) -> Result<Image, ImgError> {
    let options = DecoderOptions::default().jpeg_set_out_colorspace(ColorSpace::RGB);
    let mut decoder = JpegDecoder::new_with_options(data, options);
    decoder.decode_headers()?;
    let (width, height) = dimensions(&decoder)?;
    if let Some(limits) = limits {
        limits.check(width, height)?;
        limits.check_memory(u64::from(width) * u64::from(height) * 3)?;
    }

    let rgb = decoder.decode()?;
    let w = width as usize;
    let h = height as usize;
    let expected = w * h * 3;
    if rgb.len() < expected {
        return Err(ImgError::UnexpectedEof);
    }

    let mut pixels = Vec::with_capacity(w * h);
    for sample in rgb[..expected].chunks_exact(3) {
        pixels.push(Pixel {
            r: sample[0],
            g: sample[1],
            b: sample[2],
        });
    }
    Image::from_pixels(pixels, w, h)
}

pub(crate) fn encode(image: &Image, quality: u8) -> Result<Vec<u8>, ImgError> {
    let w = image.width();
    let h = image.height();
    if w > usize::from(u16::MAX) || h > usize::from(u16::MAX) {
        return Err(ImgError::DimensionsTooLarge {
            width: w as u64,
            height: h as u64,
        });
    }

    let mut out = Vec::new();
    let encoder = Encoder::new(&mut out, quality);
    encoder.encode(image.pixels().as_bytes(), w as u16, h as u16, ColorType::Rgb)?;
    Ok(out)
}
