//! Batch orchestration
//!
//! One OS thread is spawned per input image, unbounded by any pool. Each
//! thread runs its [`ImageTask`] and owns that image's buffers; the only
//! state the threads share is the batch's [`TimingAccumulator`]. The
//! orchestrator joins every thread before building the report.
//!
//! A failing image does not stop the others: its error is recorded in the
//! report and siblings run to completion.

use crate::report::{BatchReport, ImageOutcome};
use crate::task::ImageTask;
use crate::timing::TimingAccumulator;
use crate::{BatchConfig, BatchError, BatchResult, ImageError};
use log::{info, warn};
use ppmedge_filter::Convolver;
use std::path::Path;
use std::thread;

/// Filter every image in `inputs` concurrently.
///
/// The i-th input (1-based) is written to [`BatchConfig::output_path`]`(i)`
/// regardless of the order in which tasks finish.
///
/// # Errors
///
/// - [`BatchError::NoInputs`] if `inputs` is empty
/// - [`BatchError::Config`] if `config` is invalid
/// - [`BatchError::Spawn`] if a task thread cannot be started; tasks that
///   were already started are joined before returning
///
/// Per-image failures are not errors here; they are reported in
/// [`BatchReport`].
pub fn run_batch<P: AsRef<Path>>(inputs: &[P], config: &BatchConfig) -> BatchResult<BatchReport> {
    if inputs.is_empty() {
        return Err(BatchError::NoInputs);
    }
    config.validate()?;
    let engine =
        Convolver::laplacian(config.workers).map_err(|e| BatchError::Config(e.to_string()))?;
    let timing = TimingAccumulator::new();

    info!(
        "filtering {} images with {} row workers each",
        inputs.len(),
        config.workers
    );

    let outcomes = thread::scope(|scope| -> BatchResult<Vec<ImageOutcome>> {
        let mut handles = Vec::with_capacity(inputs.len());
        for (i, input) in inputs.iter().enumerate() {
            let index = i + 1;
            let mut task = ImageTask::new(index, input.as_ref(), config.output_path(index));
            let (engine, timing) = (&engine, &timing);

            let handle = thread::Builder::new()
                .name(format!("ppmedge-image-{}", index))
                .spawn_scoped(scope, move || {
                    let result = task.run(engine, timing);
                    (task, result)
                })
                .map_err(|source| BatchError::Spawn {
                    index,
                    path: input.as_ref().to_path_buf(),
                    source,
                })?;
            handles.push((index, input.as_ref(), handle));
        }

        Ok(handles
            .into_iter()
            .map(|(index, input, handle)| {
                let (output, result) = match handle.join() {
                    Ok((task, result)) => (task.output().to_path_buf(), result),
                    Err(_) => (config.output_path(index), Err(ImageError::Panicked)),
                };
                if let Err(e) = &result {
                    warn!("image {} ({}) failed: {}", index, input.display(), e);
                }
                ImageOutcome {
                    index,
                    input: input.to_path_buf(),
                    output,
                    result,
                }
            })
            .collect())
    })?;

    Ok(BatchReport::new(outcomes, timing.total_secs()))
}
