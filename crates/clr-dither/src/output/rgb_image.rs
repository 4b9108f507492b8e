//! Owned, row-major, channel-interleaved RGB byte buffer.

use std::fmt;

use crate::color::Rgb;

/// Error returned when raw bytes do not describe a valid image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageError {
    /// Width or height is zero
    EmptyDimensions {
        /// Requested width
        width: usize,
        /// Requested height
        height: usize,
    },
    /// Byte count is not `width * height * 3`
    LengthMismatch {
        /// Expected byte count
        expected: usize,
        /// Supplied byte count
        actual: usize,
    },
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageError::EmptyDimensions { width, height } => {
                write!(f, "image dimensions must be positive, got {}x{}", width, height)
            }
            ImageError::LengthMismatch { expected, actual } => {
                write!(
                    f,
                    "image buffer has {} bytes, expected {}",
                    actual, expected
                )
            }
        }
    }
}

impl std::error::Error for ImageError {}

/// An 8-bit RGB image.
///
/// Stores `width * height * 3` bytes in `[R, G, B, R, G, B, ...]` layout,
/// rows top to bottom. Dimensions are fixed at construction; processing
/// only ever rewrites bytes.
///
/// # Example
///
/// ```
/// use clr_dither::{Rgb, RgbImage};
///
/// let mut image = RgbImage::filled(2, 1, Rgb::new(10, 20, 30));
/// image.set_pixel(1, 0, Rgb::new(255, 0, 0));
///
/// assert_eq!(image.as_bytes(), &[10, 20, 30, 255, 0, 0]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbImage {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl RgbImage {
    /// Wrap raw RGB bytes.
    ///
    /// # Errors
    ///
    /// - [`ImageError::EmptyDimensions`] if `width` or `height` is zero
    /// - [`ImageError::LengthMismatch`] if `data.len() != width * height * 3`
    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> Result<Self, ImageError> {
        if width == 0 || height == 0 {
            return Err(ImageError::EmptyDimensions { width, height });
        }
        let expected = width * height * 3;
        if data.len() != expected {
            return Err(ImageError::LengthMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Build an image from one color per pixel, row-major.
    ///
    /// # Errors
    ///
    /// Same as [`from_raw()`](Self::from_raw).
    pub fn from_pixels(width: usize, height: usize, pixels: &[Rgb]) -> Result<Self, ImageError> {
        let data = pixels.iter().flat_map(|p| p.to_bytes()).collect();
        Self::from_raw(width, height, data)
    }

    /// Create an image of a single color.
    ///
    /// # Panics
    ///
    /// Panics if `width` or `height` is zero.
    pub fn filled(width: usize, height: usize, color: Rgb) -> Self {
        assert!(width > 0 && height > 0, "image dimensions must be positive");
        let data = color.to_bytes().repeat(width * height);
        Self {
            width,
            height,
            data,
        }
    }

    /// Returns the image width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the image height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Raw bytes, row-major, `width * height * 3` long.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Raw bytes for in-place rewriting.
    #[inline]
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consume the image and return its bytes.
    #[inline]
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    #[inline]
    fn offset(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.width && y < self.height);
        (y * self.width + x) * 3
    }

    /// Read the pixel at `(x, y)`.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> Rgb {
        let i = self.offset(x, y);
        Rgb::new(self.data[i], self.data[i + 1], self.data[i + 2])
    }

    /// Overwrite the pixel at `(x, y)`.
    #[inline]
    pub fn set_pixel(&mut self, x: usize, y: usize, color: Rgb) {
        let i = self.offset(x, y);
        self.data[i..i + 3].copy_from_slice(&color.to_bytes());
    }

    /// Iterate over all pixels in raster order.
    pub fn pixels(&self) -> impl Iterator<Item = Rgb> + '_ {
        self.data
            .chunks_exact(3)
            .map(|c| Rgb::new(c[0], c[1], c[2]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_raw_validates_length() {
        assert_eq!(
            RgbImage::from_raw(2, 2, vec![0; 11]),
            Err(ImageError::LengthMismatch {
                expected: 12,
                actual: 11
            })
        );
        assert!(RgbImage::from_raw(2, 2, vec![0; 12]).is_ok());
    }

    #[test]
    fn test_from_raw_rejects_empty_dimensions() {
        assert_eq!(
            RgbImage::from_raw(0, 3, Vec::new()),
            Err(ImageError::EmptyDimensions {
                width: 0,
                height: 3
            })
        );
    }

    #[test]
    fn test_pixel_addressing_is_row_major() {
        let pixels: Vec<Rgb> = (0..6u8).map(|i| Rgb::new(i, i, i)).collect();
        let image = RgbImage::from_pixels(3, 2, &pixels).unwrap();

        assert_eq!(image.pixel(0, 0), Rgb::new(0, 0, 0));
        assert_eq!(image.pixel(2, 0), Rgb::new(2, 2, 2));
        assert_eq!(image.pixel(0, 1), Rgb::new(3, 3, 3));
        assert_eq!(image.pixel(2, 1), Rgb::new(5, 5, 5));
        assert_eq!(image.pixels().collect::<Vec<_>>(), pixels);
    }

    #[test]
    fn test_set_pixel() {
        let mut image = RgbImage::filled(2, 2, Rgb::new(0, 0, 0));
        image.set_pixel(1, 1, Rgb::new(1, 2, 3));
        assert_eq!(&image.as_bytes()[9..12], &[1, 2, 3]);
        assert_eq!(image.into_raw().len(), 12);
    }
}
