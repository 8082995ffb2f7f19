//! ppmedge - Parallel Laplacian edge detection
//!
//! Applies a 3x3 Laplacian kernel to binary P6 images, splitting each
//! image's rows across a fixed pool of workers and processing every image
//! of a batch on its own thread.
//!
//! # Example
//!
//! ```
//! use ppmedge::{Image, Pixel};
//! use ppmedge::filter::Convolver;
//!
//! let image = Image::filled(1, 1, Pixel::new(10, 20, 30)).unwrap();
//! let out = Convolver::laplacian(4).unwrap().filter(&image).unwrap();
//! assert_eq!(out.image.pixels(), &[Pixel::BLACK]);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use ppmedge_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use ppmedge_batch as batch;
pub use ppmedge_filter as filter;
pub use ppmedge_io as io;
