//! ppmedge-filter - Parallel image convolution
//!
//! This crate provides:
//!
//! - Integer convolution kernels, including the 3x3 Laplacian
//! - Static row partitioning across a fixed number of workers
//! - A row-parallel convolution engine with wrap-around borders and
//!   per-channel clamping

pub mod convolve;
mod error;
pub mod kernel;
pub mod partition;

pub use convolve::{Convolver, DEFAULT_WORKERS, Filtered, laplacian_filter};
pub use error::{FilterError, FilterResult};
pub use kernel::{Kernel, LAPLACIAN_3X3};
pub use partition::{RowRange, partition_rows};
