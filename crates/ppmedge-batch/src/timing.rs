//! Shared elapsed-time accumulator
//!
//! One accumulator is created per batch and handed by reference to every
//! image task. Each task adds its filter time exactly once; the total is
//! read after all tasks have been joined.

use std::sync::{Mutex, PoisonError};
use std::time::Duration;

#[derive(Debug, Default)]
struct Totals {
    seconds: f64,
    count: usize,
}

/// Thread-safe sum of per-image elapsed times.
#[derive(Debug, Default)]
pub struct TimingAccumulator {
    totals: Mutex<Totals>,
}

impl TimingAccumulator {
    /// Create an accumulator starting at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one image's elapsed time.
    pub fn add(&self, elapsed: Duration) {
        let mut totals = self.totals.lock().unwrap_or_else(PoisonError::into_inner);
        totals.seconds += elapsed.as_secs_f64();
        totals.count += 1;
    }

    /// Sum of all added times, in seconds.
    pub fn total_secs(&self) -> f64 {
        self.totals
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .seconds
    }

    /// Number of times [`TimingAccumulator::add`] has been called.
    pub fn count(&self) -> usize {
        self.totals
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .count
    }
}
