use imgref::{ImgRef, ImgVec};

use crate::error::ImgError;

/// A single RGB pixel, 8 bits per channel.
pub type Pixel = rgb::RGB8;

/// Owned row-major RGB image buffer.
///
/// Rows are stored contiguously with no padding. Zero-width and zero-height
/// images are valid and hold no pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
    pixels: Vec<Pixel>,
    width: usize,
    height: usize,
}

impl Image {
    /// An all-black image of the given dimensions.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            pixels: vec![Pixel::default(); width * height],
            width,
            height,
        }
    }

    /// Wrap an existing pixel buffer.
    ///
    /// Returns [`ImgError::BufferTooSmall`] if `pixels` holds fewer than
    /// `width * height` entries; any extra entries are discarded.
    pub fn from_pixels(
        mut pixels: Vec<Pixel>,
        width: usize,
        height: usize,
    ) -> Result<Self, ImgError> {
        let needed = width
            .checked_mul(height)
            .ok_or(ImgError::DimensionsTooLarge {
                width: width as u64,
                height: height as u64,
            })?;
        if pixels.len() < needed {
            return Err(ImgError::BufferTooSmall {
                needed,
                actual: pixels.len(),
            });
        }
        pixels.truncate(needed);
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// One scanline, top-down. Panics if `y >= height`.
    pub fn row(&self, y: usize) -> &[Pixel] {
        &self.pixels[y * self.width..(y + 1) * self.width]
    }

    /// Mutable scanline access. Panics if `y >= height`.
    pub fn row_mut(&mut self, y: usize) -> &mut [Pixel] {
        &mut self.pixels[y * self.width..(y + 1) * self.width]
    }

    /// The whole buffer, row-major.
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Borrowed [`imgref::ImgRef`] view for interop with imgref-based APIs.
    ///
    /// `None` when either dimension is zero (imgref buffers are non-empty).
    pub fn as_imgref(&self) -> Option<ImgRef<'_, Pixel>> {
        if self.width == 0 || self.height == 0 {
            return None;
        }
        Some(ImgRef::new(&self.pixels, self.width, self.height))
    }

    /// Convert into an [`imgref::ImgVec`], consuming the image.
    ///
    /// `None` when either dimension is zero.
    pub fn into_imgvec(self) -> Option<ImgVec<Pixel>> {
        if self.width == 0 || self.height == 0 {
            return None;
        }
        Some(ImgVec::new(self.pixels, self.width, self.height))
    }
}

impl From<ImgVec<Pixel>> for Image {
    fn from(img: ImgVec<Pixel>) -> Self {
        let width = img.width();
        let height = img.height();
        let mut pixels = Vec::with_capacity(width * height);
        for row in img.rows() {
            pixels.extend_from_slice(row);
        }
        Self {
            pixels,
            width,
            height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Image, Pixel};
    use crate::error::ImgError;

    #[test]
    fn rows_are_contiguous_slices() {
        let mut image = Image::new(3, 2);
        image.row_mut(1)[2] = Pixel { r: 1, g: 2, b: 3 };
        assert_eq!(image.row(0), &[Pixel::default(); 3]);
        assert_eq!(image.row(1)[2], Pixel { r: 1, g: 2, b: 3 });
        assert_eq!(image.pixels()[5], Pixel { r: 1, g: 2, b: 3 });
    }

    #[test]
    fn from_pixels_checks_length() {
        let short = vec![Pixel::default(); 5];
        assert!(matches!(
            Image::from_pixels(short, 3, 2),
            Err(ImgError::BufferTooSmall {
                needed: 6,
                actual: 5
            })
        ));
    }

    #[test]
    fn zero_sized_images_are_valid() {
        let image = Image::new(0, 4);
        assert_eq!(image.pixels().len(), 0);
        assert!(image.as_imgref().is_none());
    }

    #[test]
    fn imgref_view_matches_rows() {
        let image = Image::from_pixels(
            vec![
                Pixel { r: 1, g: 0, b: 0 },
                Pixel { r: 2, g: 0, b: 0 },
                Pixel { r: 3, g: 0, b: 0 },
                Pixel { r: 4, g: 0, b: 0 },
            ],
            2,
            2,
        )
        .unwrap();
        let view = image.as_imgref().unwrap();
        assert_eq!(view.width(), 2);
        assert_eq!(view.buf()[3].r, 4);
    }
}
