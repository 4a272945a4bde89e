//! Path-level loading and saving with extension dispatch.
//!
//! The extension picks the codec for both directions; an unrecognized
//! extension is [`ImgError::UnknownFormat`], a distinct class from
//! codec-level failures. One file handle per call, released on every exit
//! path; a failed save may leave a truncated file behind.

use std::fs;
use std::io::Write as _;
use std::path::Path;

use crate::decode::DecodeRequest;
use crate::encode::EncodeRequest;
use crate::error::ImgError;
use crate::image::Image;
use crate::info::ImageFormat;
use crate::limits::Limits;

/// Load an image, picking the codec from the file extension.
pub fn load(path: impl AsRef<Path>) -> Result<Image, ImgError> {
    load_impl(path.as_ref(), None)
}

/// Like [`load`], with resource limits applied before pixel allocation.
pub fn load_with_limits(path: impl AsRef<Path>, limits: &Limits) -> Result<Image, ImgError> {
    load_impl(path.as_ref(), Some(limits))
}

fn load_impl(path: &Path, limits: Option<&Limits>) -> Result<Image, ImgError> {
    let format =
        ImageFormat::from_path(path).ok_or_else(|| ImgError::UnknownFormat(path.to_path_buf()))?;
    let data = fs::read(path).map_err(|source| ImgError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let mut request = DecodeRequest::new(&data).with_format(format);
    if let Some(limits) = limits {
        request = request.with_limits(limits);
    }
    request.decode()
}

/// Save an image, picking the codec from the file extension.
pub fn save(path: impl AsRef<Path>, image: &Image) -> Result<(), ImgError> {
    let path = path.as_ref();
    let format =
        ImageFormat::from_path(path).ok_or_else(|| ImgError::UnknownFormat(path.to_path_buf()))?;
    let encoded = EncodeRequest::with_format(format).encode(image)?;

    let mut file = fs::File::create(path).map_err(|source| ImgError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    file.write_all(&encoded)?;
    Ok(())
}
