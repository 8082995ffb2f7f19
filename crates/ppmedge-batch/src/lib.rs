//! ppmedge-batch - Concurrent batch edge detection
//!
//! Drives decode, filter and encode for each input image on its own thread
//! and aggregates the per-image filter times into one total.
//!
//! ```no_run
//! use ppmedge_batch::{BatchConfig, run_batch};
//!
//! let report = run_batch(&["a.ppm", "b.ppm"], &BatchConfig::default()).unwrap();
//! println!("{}", report.summary_line());
//! ```

pub mod config;
mod error;
pub mod naming;
pub mod orchestrator;
pub mod report;
pub mod task;
pub mod timing;

pub use config::BatchConfig;
pub use error::{BatchError, BatchResult, ImageError};
pub use naming::{OUTPUT_PREFIX, output_file_name};
pub use orchestrator::run_batch;
pub use report::{BatchReport, ImageOutcome};
pub use task::{ImageSummary, ImageTask, TaskState};
pub use timing::TimingAccumulator;
