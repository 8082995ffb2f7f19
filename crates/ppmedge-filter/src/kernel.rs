//! Convolution kernels
//!
//! Integer weight matrices applied by [`Convolver`](crate::Convolver).
//! Kernels have odd width and height so that the center tap sits on the
//! pixel being computed.
//!
//! - `Kernel::new` - all-zero kernel of a given size
//! - `Kernel::from_slice` - kernel from row-major weights
//! - `Kernel::laplacian` - the 3x3 Laplacian edge detector
//! - `Kernel::get` / `Kernel::set` - element access

use crate::{FilterError, FilterResult};

/// Weights of the 3x3 Laplacian kernel, row-major.
pub const LAPLACIAN_3X3: [i32; 9] = [-1, -1, -1, -1, 8, -1, -1, -1, -1];

/// A 2D integer convolution kernel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Kernel {
    /// Width of the kernel
    width: u32,
    /// Height of the kernel
    height: u32,
    /// X coordinate of the center
    cx: u32,
    /// Y coordinate of the center
    cy: u32,
    /// Kernel data (row-major order)
    data: Vec<i32>,
}

impl Kernel {
    /// Create a new all-zero kernel with the given dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidKernel`] if either dimension is zero
    /// or even.
    pub fn new(width: u32, height: u32) -> FilterResult<Self> {
        if width == 0 || height == 0 || width % 2 == 0 || height % 2 == 0 {
            return Err(FilterError::InvalidKernel(format!(
                "kernel dimensions must be odd and positive, got {}x{}",
                width, height
            )));
        }
        Ok(Kernel {
            width,
            height,
            cx: width / 2,
            cy: height / 2,
            data: vec![0; width as usize * height as usize],
        })
    }

    /// Create a kernel from row-major weights.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidKernel`] if the dimensions are invalid
    /// or `data.len() != width * height`.
    pub fn from_slice(width: u32, height: u32, data: &[i32]) -> FilterResult<Self> {
        let mut kernel = Self::new(width, height)?;
        if data.len() != kernel.data.len() {
            return Err(FilterError::InvalidKernel(format!(
                "expected {} weights for a {}x{} kernel, got {}",
                kernel.data.len(),
                width,
                height,
                data.len()
            )));
        }
        kernel.data.copy_from_slice(data);
        Ok(kernel)
    }

    /// Create the 3x3 Laplacian kernel.
    ///
    /// ```text
    /// -1 -1 -1
    /// -1  8 -1
    /// -1 -1 -1
    /// ```
    pub fn laplacian() -> Self {
        Kernel {
            width: 3,
            height: 3,
            cx: 1,
            cy: 1,
            data: LAPLACIAN_3X3.to_vec(),
        }
    }

    /// Get the kernel width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the kernel height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the center X coordinate.
    #[inline]
    pub fn center_x(&self) -> u32 {
        self.cx
    }

    /// Get the center Y coordinate.
    #[inline]
    pub fn center_y(&self) -> u32 {
        self.cy
    }

    /// Get the kernel data.
    pub fn data(&self) -> &[i32] {
        &self.data
    }

    /// Get the weight at (x, y).
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<i32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[(y * self.width + x) as usize])
    }

    /// Set the weight at (x, y). Out-of-range coordinates are ignored.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, value: i32) {
        if x < self.width && y < self.height {
            self.data[(y * self.width + x) as usize] = value;
        }
    }

    /// Get the sum of all kernel weights, saturating at the `i32` bounds.
    pub fn sum(&self) -> i32 {
        self.data.iter().fold(0i32, |acc, &k| acc.saturating_add(k))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_laplacian_shape() {
        let k = Kernel::laplacian();
        assert_eq!((k.width(), k.height()), (3, 3));
        assert_eq!((k.center_x(), k.center_y()), (1, 1));
        assert_eq!(k.get(1, 1), Some(8));
        assert_eq!(k.get(0, 0), Some(-1));
        assert_eq!(k.get(2, 1), Some(-1));
        assert_eq!(k.sum(), 0);
    }

    #[test]
    fn test_rejects_even_or_empty() {
        assert!(Kernel::new(2, 3).is_err());
        assert!(Kernel::new(3, 0).is_err());
        assert!(Kernel::from_slice(3, 3, &[1, 2, 3]).is_err());
    }

    #[test]
    fn test_set_get_center() {
        let mut k = Kernel::new(5, 3).unwrap();
        assert_eq!((k.center_x(), k.center_y()), (2, 1));
        k.set(4, 2, 7);
        k.set(9, 9, 1);
        assert_eq!(k.get(4, 2), Some(7));
        assert_eq!(k.get(5, 0), None);
        assert_eq!(k.sum(), 7);
    }
}
