use std::path::PathBuf;

/// Errors from image loading, saving, and transcoding.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ImgError {
    #[error("could not open {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unrecognized format magic bytes")]
    UnrecognizedFormat,

    #[error("unrecognized file extension: {0}")]
    UnknownFormat(PathBuf),

    #[error("invalid header: {0}")]
    InvalidHeader(String),

    #[error("unsupported format variant: {0}")]
    UnsupportedVariant(String),

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u64, height: u64 },

    #[error("buffer too small: need {needed} pixels, got {actual}")]
    BufferTooSmall { needed: usize, actual: usize },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("jpeg decode failed: {0}")]
    JpegDecode(#[from] zune_jpeg::errors::DecodeErrors),

    #[error("jpeg encode failed: {0}")]
    JpegEncode(#[from] jpeg_encoder::EncodingError),
}
