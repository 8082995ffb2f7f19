//! Error types for ppmedge-batch
//!
//! [`ImageError`] is the failure of one image's pipeline and never stops
//! sibling images. [`BatchError`] means the batch as a whole could not run.

use ppmedge_filter::FilterError;
use ppmedge_io::IoError;
use std::path::PathBuf;
use thiserror::Error;

/// Failure of a single image task
#[derive(Debug, Error)]
pub enum ImageError {
    /// The input file could not be decoded
    #[error("decode failed: {0}")]
    Decode(#[source] IoError),

    /// The convolution engine failed
    #[error("filter failed: {0}")]
    Filter(#[from] FilterError),

    /// The output file could not be encoded
    #[error("encode failed: {0}")]
    Encode(#[source] IoError),

    /// The task thread panicked
    #[error("task panicked")]
    Panicked,
}

/// Failure of the batch as a whole
#[derive(Debug, Error)]
pub enum BatchError {
    /// No input paths were given
    #[error("no input images given")]
    NoInputs,

    /// Invalid batch configuration
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A task thread could not be started
    #[error("cannot spawn task for image {index} ({}): {source}", .path.display())]
    Spawn {
        index: usize,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for batch operations
pub type BatchResult<T> = Result<T, BatchError>;
