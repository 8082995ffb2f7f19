//! ppmedge Core - Basic data structures for RGB edge detection
//!
//! This crate provides the fundamental data structures used throughout
//! the ppmedge workspace:
//!
//! - [`Pixel`] - One 8-bit-per-channel RGB triple
//! - [`Image`] / [`ImageMut`] - The main image container (immutable / mutable)
//! - [`clamp_channel`] - Saturating conversion of a signed accumulator to a channel

pub mod error;
pub mod image;
pub mod pixel;

pub use error::{Error, Result};
pub use image::{Image, ImageMut};
pub use pixel::{CHANNELS, MAX_CHANNEL_VALUE, Pixel, clamp_channel};
