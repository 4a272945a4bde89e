//! # imgconv
//!
//! BMP, PPM, and JPEG image loading, saving, and conversion.
//!
//! Images are held in memory as row-major 8-bit RGB ([`Image`]). Each format
//! exposes the same decode/encode contract, so converting is load + save:
//!
//! ```no_run
//! let image = imgconv::load("photo.jpg")?;
//! imgconv::save("photo.bmp", &image)?;
//! # Ok::<(), imgconv::ImgError>(())
//! ```
//!
//! In-memory transcoding goes through the request builders:
//!
//! ```no_run
//! use imgconv::{DecodeRequest, EncodeRequest, Limits};
//!
//! let data: &[u8] = &[]; // your BMP/PPM/JPEG bytes
//! let limits = Limits {
//!     max_pixels: Some(100_000_000),
//!     ..Limits::default()
//! };
//! let image = DecodeRequest::new(data).with_limits(&limits).decode()?;
//! let ppm = EncodeRequest::ppm().encode(&image)?;
//! # Ok::<(), imgconv::ImgError>(())
//! ```
//!
//! ## Supported formats
//!
//! - **BMP** — uncompressed 24-bit, bottom-up rows, implemented here. The
//!   writer emits a fixed 11811 pixels-per-metre resolution, and the reader
//!   requires it; the field doubles as a format check, so BMP files from
//!   other producers are rejected as unsupported.
//! - **PPM** — binary P6 with 8-bit samples, implemented here.
//! - **JPEG** — delegated to `zune-jpeg` (decode) and `jpeg-encoder`
//!   (encode); always transcoded through RGB.
//!
//! ## Non-goals
//!
//! - BMP compression (RLE, bitfields), palettes, top-down rows, or any bit
//!   depth other than 24
//! - ASCII PNM formats and 16-bit samples
//! - Alpha channels

#![forbid(unsafe_code)]

mod bmp;
mod decode;
mod encode;
mod error;
mod image;
mod info;
mod io;
mod jpeg;
mod limits;
mod ppm;

pub use decode::DecodeRequest;
pub use encode::EncodeRequest;
pub use error::ImgError;
pub use image::{Image, Pixel};
pub use info::{ImageFormat, ImageInfo};
pub use io::{load, load_with_limits, save};
pub use limits::Limits;
