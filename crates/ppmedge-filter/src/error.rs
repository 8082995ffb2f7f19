//! Error types for ppmedge-filter

use thiserror::Error;

/// Errors that can occur during filtering operations
#[derive(Debug, Error)]
pub enum FilterError {
    /// Core library error (including output buffer allocation failure)
    #[error("core error: {0}")]
    Core(#[from] ppmedge_core::Error),

    /// Invalid kernel
    #[error("invalid kernel: {0}")]
    InvalidKernel(String),

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// A row worker could not be started or did not complete
    #[error("worker failure: {0}")]
    WorkerFailure(String),
}

impl FilterError {
    /// Whether this error is an output buffer allocation failure.
    pub fn is_allocation(&self) -> bool {
        matches!(
            self,
            FilterError::Core(ppmedge_core::Error::AllocationFailed { .. })
        )
    }
}

/// Result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;

#[cfg(test)]
mod tests {
    use super::*;
    use ppmedge_core::ImageMut;

    #[test]
    fn test_is_allocation() {
        // u32::MAX squared pixels exceeds any addressable buffer
        let err: FilterError = ImageMut::new(u32::MAX, u32::MAX).unwrap_err().into();
        assert!(err.is_allocation());
        assert!(!FilterError::WorkerFailure("gone".to_string()).is_allocation());
        assert!(!FilterError::from(ImageMut::new(0, 1).unwrap_err()).is_allocation());
    }
}
