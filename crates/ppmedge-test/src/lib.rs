//! ppmedge-test - Regression test helpers
//!
//! Provides a small regression harness plus synthetic fixtures:
//!
//! - [`RegParams`] - numbered checks that collect failures instead of panicking
//! - [`gradient_image`], [`checkerboard_image`], [`noise_image`] - deterministic inputs
//! - [`scratch_dir`] / [`write_fixture`] - temporary files for codec and batch tests
//!
//! # Usage
//!
//! ```ignore
//! use ppmedge_test::RegParams;
//!
//! let mut rp = RegParams::new("ppmio");
//! rp.compare_values(640.0, image.width() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::RegParams;

use ppmedge_core::{CHANNELS, Image, Pixel};
use rand::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Image whose red channel ramps along x, green along y, and blue along both.
pub fn gradient_image(width: u32, height: u32) -> TestResult<Image> {
    let pixels = (0..height)
        .flat_map(|y| {
            (0..width).map(move |x| {
                Pixel::new(
                    (x * 255 / width.max(2).saturating_sub(1)).min(255) as u8,
                    (y * 255 / height.max(2).saturating_sub(1)).min(255) as u8,
                    ((x + y) % 256) as u8,
                )
            })
        })
        .collect();
    Ok(Image::from_pixels(width, height, pixels)?)
}

/// Black and white checkerboard with square cells of `cell` pixels.
pub fn checkerboard_image(width: u32, height: u32, cell: u32) -> TestResult<Image> {
    let cell = cell.max(1);
    let pixels = (0..height)
        .flat_map(|y| {
            (0..width).map(move |x| {
                if ((x / cell) + (y / cell)) % 2 == 0 {
                    Pixel::WHITE
                } else {
                    Pixel::BLACK
                }
            })
        })
        .collect();
    Ok(Image::from_pixels(width, height, pixels)?)
}

/// Pseudo-random image; the same seed always yields the same pixels.
pub fn noise_image(width: u32, height: u32, seed: u64) -> TestResult<Image> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut bytes = vec![0u8; width as usize * height as usize * CHANNELS];
    rng.fill_bytes(&mut bytes);
    Ok(Image::from_raw_bytes(width, height, &bytes)?)
}

/// Create a fresh temporary directory, removed when dropped.
pub fn scratch_dir() -> TestResult<TempDir> {
    tempfile::tempdir().map_err(|e| TestError::DirectoryCreate(e.to_string()))
}

/// Encode `image` as `dir/name` and return the full path.
pub fn write_fixture(dir: &Path, name: &str, image: &Image) -> TestResult<PathBuf> {
    let path = dir.join(name);
    ppmedge_io::write_image(image, &path).map_err(|e| TestError::ImageWrite {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    Ok(path)
}

/// Write raw bytes as `dir/name` and return the full path.
pub fn write_bytes(dir: &Path, name: &str, bytes: &[u8]) -> TestResult<PathBuf> {
    let path = dir.join(name);
    std::fs::write(&path, bytes).map_err(|e| TestError::ImageWrite {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    Ok(path)
}
