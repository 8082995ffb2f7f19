//! Batch outcome report

use crate::ImageError;
use crate::task::ImageSummary;
use std::path::PathBuf;

/// Result of one image task.
#[derive(Debug)]
pub struct ImageOutcome {
    /// 1-based position of the input
    pub index: usize,
    /// Input path
    pub input: PathBuf,
    /// Output path
    pub output: PathBuf,
    /// Summary on success, the failing stage's error otherwise
    pub result: Result<ImageSummary, ImageError>,
}

impl ImageOutcome {
    /// Whether the image was written.
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Outcomes of a whole batch, in input order.
#[derive(Debug)]
pub struct BatchReport {
    outcomes: Vec<ImageOutcome>,
    total_elapsed_secs: f64,
}

impl BatchReport {
    pub(crate) fn new(outcomes: Vec<ImageOutcome>, total_elapsed_secs: f64) -> Self {
        BatchReport {
            outcomes,
            total_elapsed_secs,
        }
    }

    /// Every outcome, ordered by input position.
    pub fn outcomes(&self) -> &[ImageOutcome] {
        &self.outcomes
    }

    /// Outcomes that failed.
    pub fn failures(&self) -> impl Iterator<Item = &ImageOutcome> {
        self.outcomes.iter().filter(|o| !o.is_ok())
    }

    /// Number of images written.
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_ok()).count()
    }

    /// Number of images that failed.
    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    /// Whether every image was written.
    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    /// Summed filter time of all successfully filtered images, in seconds.
    pub fn total_elapsed_secs(&self) -> f64 {
        self.total_elapsed_secs
    }

    /// `Total elapsed time: <seconds> s` with four decimals.
    pub fn summary_line(&self) -> String {
        format!("Total elapsed time: {:.4} s", self.total_elapsed_secs)
    }
}
