//! Per-image task
//!
//! A task moves through `Pending -> Decoding -> Filtering -> Encoding -> Done`,
//! or ends in `Failed` at whichever stage went wrong. Nothing is retried.

use crate::ImageError;
use crate::timing::TimingAccumulator;
use log::{debug, info};
use ppmedge_filter::Convolver;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Lifecycle state of an image task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskState {
    Pending,
    Decoding,
    Filtering,
    Encoding,
    Done,
    Failed,
}

impl fmt::Display for TaskState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TaskState::Pending => "pending",
            TaskState::Decoding => "decoding",
            TaskState::Filtering => "filtering",
            TaskState::Encoding => "encoding",
            TaskState::Done => "done",
            TaskState::Failed => "failed",
        };
        f.write_str(s)
    }
}

/// What a successful task produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageSummary {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Filter stage wall-clock time
    pub elapsed: Duration,
}

/// Decode, filter and encode one input image.
#[derive(Debug)]
pub struct ImageTask {
    index: usize,
    input: PathBuf,
    output: PathBuf,
    state: TaskState,
}

impl ImageTask {
    /// Create a pending task for the input at 1-based position `index`.
    pub fn new(index: usize, input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        ImageTask {
            index,
            input: input.into(),
            output: output.into(),
            state: TaskState::Pending,
        }
    }

    /// 1-based position of the input.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Input path.
    pub fn input(&self) -> &Path {
        &self.input
    }

    /// Output path.
    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Current state.
    pub fn state(&self) -> TaskState {
        self.state
    }

    fn enter(&mut self, state: TaskState) {
        debug!("image {}: {} -> {}", self.index, self.state, state);
        self.state = state;
    }

    /// Run the pipeline to completion.
    ///
    /// The filter time is added to `timing` once the filter stage succeeds,
    /// before encoding starts.
    ///
    /// # Errors
    ///
    /// Returns the [`ImageError`] of the first failing stage; the task is
    /// then in [`TaskState::Failed`].
    pub fn run(
        &mut self,
        engine: &Convolver,
        timing: &TimingAccumulator,
    ) -> Result<ImageSummary, ImageError> {
        let result = self.run_stages(engine, timing);
        match &result {
            Ok(_) => self.enter(TaskState::Done),
            Err(_) => self.enter(TaskState::Failed),
        }
        result
    }

    fn run_stages(
        &mut self,
        engine: &Convolver,
        timing: &TimingAccumulator,
    ) -> Result<ImageSummary, ImageError> {
        self.enter(TaskState::Decoding);
        let image = ppmedge_io::read_image(&self.input).map_err(ImageError::Decode)?;

        self.enter(TaskState::Filtering);
        let filtered = engine.filter(&image)?;
        drop(image);
        timing.add(filtered.elapsed);

        self.enter(TaskState::Encoding);
        ppmedge_io::write_image(&filtered.image, &self.output).map_err(ImageError::Encode)?;

        info!(
            "image {}: {} -> {} ({}x{}, {:.4} s)",
            self.index,
            self.input.display(),
            self.output.display(),
            filtered.image.width(),
            filtered.image.height(),
            filtered.elapsed_secs()
        );
        Ok(ImageSummary {
            width: filtered.image.width(),
            height: filtered.image.height(),
            elapsed: filtered.elapsed,
        })
    }
}
