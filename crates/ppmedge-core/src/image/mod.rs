//! Image - The main RGB image container
//!
//! # Pixel layout
//!
//! - Pixels are stored as one contiguous run of [`Pixel`] values
//! - Rows are stored top to bottom, pixels left to right (row-major)
//! - `pixels.len() == width * height` always holds
//!
//! # Ownership model
//!
//! `Image` uses `Arc` for cheap cloning (shared ownership) and is never
//! modified after construction. Pixel data is written through [`ImageMut`],
//! which is converted into an `Image` with `Into<Image>` once complete.

mod access;
mod raw;

use crate::error::{Error, Result};
use crate::pixel::Pixel;
use std::sync::Arc;

/// Internal image data
#[derive(Debug, PartialEq, Eq)]
struct ImageData {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Pixel data in row-major order
    pixels: Vec<Pixel>,
}

/// Immutable RGB image
///
/// # Examples
///
/// ```
/// use ppmedge_core::{Image, Pixel};
///
/// let image = Image::filled(4, 3, Pixel::WHITE).unwrap();
/// assert_eq!(image.width(), 4);
/// assert_eq!(image.height(), 3);
/// assert_eq!(image.pixels().len(), 12);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    inner: Arc<ImageData>,
}

/// Mutable RGB image
///
/// Owns its pixel buffer exclusively. Every `Image` produced by a filter
/// starts life as a freshly allocated `ImageMut`.
#[derive(Debug)]
pub struct ImageMut {
    inner: ImageData,
}

/// Number of pixels in a `width x height` image, or an error if either
/// dimension is zero or the count overflows `usize`.
fn pixel_count(width: u32, height: u32) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimension { width, height });
    }
    (width as usize)
        .checked_mul(height as usize)
        .ok_or(Error::InvalidDimension { width, height })
}

/// Allocate a buffer of `count` pixels, reporting allocation failure
/// instead of aborting.
fn allocate(count: usize, fill: Pixel) -> Result<Vec<Pixel>> {
    let mut pixels = Vec::new();
    pixels
        .try_reserve_exact(count)
        .map_err(|_| Error::AllocationFailed { pixels: count })?;
    pixels.resize(count, fill);
    Ok(pixels)
}

impl Image {
    /// Create an image from an existing row-major pixel buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0, and
    /// [`Error::PixelCountMismatch`] if `pixels.len() != width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Pixel>) -> Result<Self> {
        let expected = pixel_count(width, height)?;
        if pixels.len() != expected {
            return Err(Error::PixelCountMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Image {
            inner: Arc::new(ImageData {
                width,
                height,
                pixels,
            }),
        })
    }

    /// Create an image with every pixel set to `fill`.
    pub fn filled(width: u32, height: u32, fill: Pixel) -> Result<Self> {
        Ok(ImageMut::filled(width, height, fill)?.into())
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.inner.width, self.inner.height)
    }

    /// Get all pixels in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[Pixel] {
        &self.inner.pixels
    }

    /// Get the number of strong references to this image.
    #[inline]
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Try to take exclusive ownership of the pixel data.
    ///
    /// Succeeds only when this is the last reference; otherwise the
    /// image is handed back unchanged.
    pub fn try_into_mut(self) -> std::result::Result<ImageMut, Image> {
        Arc::try_unwrap(self.inner)
            .map(|inner| ImageMut { inner })
            .map_err(|inner| Image { inner })
    }

    /// Copy the image into a new, independently owned [`ImageMut`].
    pub fn to_mut(&self) -> ImageMut {
        ImageMut {
            inner: ImageData {
                width: self.inner.width,
                height: self.inner.height,
                pixels: self.inner.pixels.clone(),
            },
        }
    }
}

impl ImageMut {
    /// Allocate a new black image.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0, and
    /// [`Error::AllocationFailed`] if the pixel buffer cannot be allocated.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::filled(width, height, Pixel::BLACK)
    }

    /// Allocate a new image with every pixel set to `fill`.
    pub fn filled(width: u32, height: u32, fill: Pixel) -> Result<Self> {
        let count = pixel_count(width, height)?;
        let pixels = allocate(count, fill)?;
        Ok(ImageMut {
            inner: ImageData {
                width,
                height,
                pixels,
            },
        })
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get all pixels in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[Pixel] {
        &self.inner.pixels
    }

    /// Get mutable access to all pixels in row-major order.
    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [Pixel] {
        &mut self.inner.pixels
    }
}

impl From<ImageMut> for Image {
    fn from(image: ImageMut) -> Self {
        Image {
            inner: Arc::new(image.inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_zero_dimensions() {
        assert!(matches!(
            ImageMut::new(0, 5),
            Err(Error::InvalidDimension {
                width: 0,
                height: 5
            })
        ));
        assert!(ImageMut::new(5, 0).is_err());
    }

    #[test]
    fn test_oversized_allocation_is_reported() {
        assert!(matches!(
            ImageMut::new(u32::MAX, u32::MAX),
            Err(Error::AllocationFailed { .. })
        ));
    }

    #[test]
    fn test_from_pixels_checks_length() {
        let err = Image::from_pixels(2, 2, vec![Pixel::BLACK; 3]).unwrap_err();
        assert!(matches!(
            err,
            Error::PixelCountMismatch {
                expected: 4,
                actual: 3
            }
        ));
        assert!(Image::from_pixels(2, 2, vec![Pixel::BLACK; 4]).is_ok());
    }

    #[test]
    fn test_mut_roundtrip_preserves_pixels() {
        let mut m = ImageMut::new(3, 2).unwrap();
        m.pixels_mut()[4] = Pixel::new(9, 8, 7);
        let image: Image = m.into();
        assert_eq!(image.pixels()[4], Pixel::new(9, 8, 7));

        let shared = image.clone();
        assert_eq!(image.ref_count(), 2);
        let image = image.try_into_mut().unwrap_err();
        drop(shared);
        let m = image.try_into_mut().unwrap();
        assert_eq!(m.pixels()[4], Pixel::new(9, 8, 7));
    }

    #[test]
    fn test_to_mut_is_independent() {
        let image = Image::filled(2, 2, Pixel::WHITE).unwrap();
        let mut copy = image.to_mut();
        copy.pixels_mut()[0] = Pixel::BLACK;
        assert_eq!(image.pixels()[0], Pixel::WHITE);
    }
}
