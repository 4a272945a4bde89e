//! Uncompressed 24-bit BMP codec.
//!
//! Bottom-up scanlines in BGR byte order, each row padded to a 4-byte
//! boundary. The stride is always recomputed from the width; it is not a
//! stored field and the file's own size fields are never trusted.

mod decode;
mod encode;
mod header;

pub(crate) use decode::{decode, probe};
pub(crate) use encode::encode;

/// Scanline width in bytes: pixel bytes rounded up to a multiple of 4.
pub(crate) fn stride(width: u32) -> u64 {
    (u64::from(width) * 3 + 3) / 4 * 4
}
