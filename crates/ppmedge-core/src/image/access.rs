//! Pixel access functions
//!
//! Single-pixel and whole-row accessors. Coordinates are `(x, y)` with
//! `x` the column and `y` the row, origin at the top-left corner.

use super::{Image, ImageMut};
use crate::error::{Error, Result};
use crate::pixel::Pixel;

impl Image {
    /// Get the pixel at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Pixel> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.get_pixel_unchecked(x, y))
    }

    /// Get the pixel at (x, y) without bounds checking against the width.
    ///
    /// # Panics
    ///
    /// Panics if the linear index `y * width + x` is outside the buffer.
    #[inline]
    fn get_pixel_unchecked(&self, x: u32, y: u32) -> Pixel {
        self.pixels()[y as usize * self.width() as usize + x as usize]
    }

    /// Get row `y` as a slice of `width` pixels.
    pub fn row(&self, y: u32) -> Option<&[Pixel]> {
        if y >= self.height() {
            return None;
        }
        let w = self.width() as usize;
        let start = y as usize * w;
        Some(&self.pixels()[start..start + w])
    }

    /// Iterate over rows from top to bottom.
    pub fn rows(&self) -> std::slice::Chunks<'_, Pixel> {
        self.pixels().chunks(self.width() as usize)
    }
}

impl ImageMut {
    /// Get the pixel at (x, y).
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Pixel> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.pixels()[y as usize * self.width() as usize + x as usize])
    }

    /// Set the pixel at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, pixel: Pixel) -> Result<()> {
        if x >= self.width() {
            return Err(Error::IndexOutOfBounds {
                index: x as usize,
                len: self.width() as usize,
            });
        }
        if y >= self.height() {
            return Err(Error::IndexOutOfBounds {
                index: y as usize,
                len: self.height() as usize,
            });
        }
        let idx = y as usize * self.width() as usize + x as usize;
        self.pixels_mut()[idx] = pixel;
        Ok(())
    }

    /// Get mutable access to row `y`.
    pub fn row_mut(&mut self, y: u32) -> Option<&mut [Pixel]> {
        if y >= self.height() {
            return None;
        }
        let w = self.width() as usize;
        let start = y as usize * w;
        Some(&mut self.pixels_mut()[start..start + w])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_pixel_bounds() {
        let image = Image::filled(3, 2, Pixel::gray(5)).unwrap();
        assert_eq!(image.get_pixel(2, 1), Some(Pixel::gray(5)));
        assert_eq!(image.get_pixel(3, 0), None);
        assert_eq!(image.get_pixel(0, 2), None);
    }

    #[test]
    fn test_set_pixel_row_major() {
        let mut m = ImageMut::new(3, 2).unwrap();
        m.set_pixel(1, 1, Pixel::new(1, 2, 3)).unwrap();
        assert_eq!(m.pixels()[4], Pixel::new(1, 2, 3));
        assert!(m.set_pixel(3, 0, Pixel::BLACK).is_err());
        assert!(m.set_pixel(0, 2, Pixel::BLACK).is_err());
    }

    #[test]
    fn test_rows_cover_image() {
        let mut m = ImageMut::new(2, 3).unwrap();
        m.row_mut(2).unwrap().fill(Pixel::WHITE);
        let image: Image = m.into();
        let rows: Vec<&[Pixel]> = image.rows().collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2], &[Pixel::WHITE, Pixel::WHITE]);
        assert_eq!(image.row(0).unwrap(), &[Pixel::BLACK, Pixel::BLACK]);
        assert!(image.row(3).is_none());
    }
}
