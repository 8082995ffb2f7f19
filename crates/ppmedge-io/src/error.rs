//! I/O error types
//!
//! Provides a unified error type for P6 decoding and encoding so that
//! callers only need to handle one error type.

use thiserror::Error;

/// Error type for image I/O operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// Standard I/O error (file not found, permission denied, short write, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The header is structurally invalid or describes an unsupported image
    #[error("invalid format: {0}")]
    Format(String),

    /// The file ends before all pixel records declared by the header
    #[error("truncated pixel data: expected {expected} bytes, got {actual}")]
    TruncatedData { expected: usize, actual: usize },

    /// An error from the core library (e.g. allocation failure)
    #[error("core error: {0}")]
    Core(#[from] ppmedge_core::Error),
}

impl IoError {
    pub(crate) fn format(msg: impl Into<String>) -> Self {
        IoError::Format(msg.into())
    }
}

/// Convenience alias for I/O results.
pub type IoResult<T> = Result<T, IoError>;
