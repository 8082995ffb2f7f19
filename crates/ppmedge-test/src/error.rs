//! Error types for the test helpers

use thiserror::Error;

/// Errors that can occur while preparing regression fixtures
#[derive(Debug, Error)]
pub enum TestError {
    /// Failed to write an image
    #[error("failed to write image '{path}': {message}")]
    ImageWrite { path: String, message: String },

    /// Failed to create a scratch directory
    #[error("failed to create directory: {0}")]
    DirectoryCreate(String),

    /// Failed to build a synthetic image
    #[error("failed to build image: {0}")]
    Image(#[from] ppmedge_core::Error),
}

/// Result type for test helper operations
pub type TestResult<T> = Result<T, TestError>;
