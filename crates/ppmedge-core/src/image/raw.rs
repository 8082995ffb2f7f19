//! Conversion between images and packed `R G B` byte buffers
//!
//! The packed layout is the one used by binary P6 files: `width * height`
//! 3-byte records in row-major order with no padding.

use super::{Image, ImageMut, pixel_count};
use crate::error::{Error, Result};
use crate::pixel::{CHANNELS, Pixel};

impl Image {
    /// Build an image from packed `R G B` bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PixelCountMismatch`] if `bytes.len()` is not exactly
    /// `width * height * 3`.
    pub fn from_raw_bytes(width: u32, height: u32, bytes: &[u8]) -> Result<Self> {
        let expected = pixel_count(width, height)?;
        if bytes.len() % CHANNELS != 0 || bytes.len() / CHANNELS != expected {
            return Err(Error::PixelCountMismatch {
                expected,
                actual: bytes.len() / CHANNELS,
            });
        }
        let mut image = ImageMut::new(width, height)?;
        for (dst, src) in image
            .pixels_mut()
            .iter_mut()
            .zip(bytes.chunks_exact(CHANNELS))
        {
            *dst = Pixel::new(src[0], src[1], src[2]);
        }
        Ok(image.into())
    }

    /// Number of bytes in the packed representation.
    #[inline]
    pub fn raw_len(&self) -> usize {
        self.pixels().len() * CHANNELS
    }

    /// Pack the image into `R G B` bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AllocationFailed`] if the byte buffer cannot be
    /// allocated.
    pub fn to_raw_bytes(&self) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        bytes
            .try_reserve_exact(self.raw_len())
            .map_err(|_| Error::AllocationFailed {
                pixels: self.pixels().len(),
            })?;
        for p in self.pixels() {
            bytes.extend_from_slice(&p.to_bytes());
        }
        Ok(bytes)
    }
}
