//! Batch configuration

use crate::naming::{OUTPUT_PREFIX, output_file_name};
use crate::{BatchError, BatchResult};
use ppmedge_filter::DEFAULT_WORKERS;
use std::path::{Path, PathBuf};

/// Settings shared by every image task of a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchConfig {
    /// Row workers per image filter stage
    pub workers: usize,
    /// Directory receiving the output files
    pub output_dir: PathBuf,
    /// Output file name prefix
    pub prefix: String,
}

impl Default for BatchConfig {
    fn default() -> Self {
        BatchConfig {
            workers: DEFAULT_WORKERS,
            output_dir: PathBuf::from("."),
            prefix: OUTPUT_PREFIX.to_string(),
        }
    }
}

impl BatchConfig {
    /// Set the number of row workers per image.
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Set the output directory.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Set the output file name prefix.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Check the settings before any task is started.
    ///
    /// # Errors
    ///
    /// Returns [`BatchError::Config`] if `workers` is 0 or `prefix` contains
    /// a path separator.
    pub fn validate(&self) -> BatchResult<()> {
        if self.workers == 0 {
            return Err(BatchError::Config(
                "worker count must be at least 1".to_string(),
            ));
        }
        if self.prefix.contains(['/', '\\']) {
            return Err(BatchError::Config(format!(
                "prefix {:?} must not contain a path separator",
                self.prefix
            )));
        }
        Ok(())
    }

    /// Output path for the input at 1-based position `index`.
    pub fn output_path(&self, index: usize) -> PathBuf {
        Path::new(&self.output_dir).join(output_file_name(&self.prefix, index))
    }
}
