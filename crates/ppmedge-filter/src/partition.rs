//! Static row partitioning
//!
//! Splits the rows of an image among a fixed number of workers. With
//! `c = ceil(height / workers)`, each worker but the last gets `c` rows
//! (fewer, possibly zero, once the rows run out) and the last worker gets
//! whatever remains. The ranges are contiguous, disjoint, and cover
//! `[0, height)` exactly.

use crate::{FilterError, FilterResult};
use std::ops::Range;

/// A half-open range of rows `[start, start + size)` owned by one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowRange {
    /// First row
    pub start: u32,
    /// Number of rows
    pub size: u32,
}

impl RowRange {
    /// One past the last row.
    #[inline]
    pub fn end(&self) -> u32 {
        self.start + self.size
    }

    /// Whether the range holds no rows.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// The rows as a `Range`.
    #[inline]
    pub fn rows(&self) -> Range<u32> {
        self.start..self.end()
    }
}

/// Partition `height` rows among `workers` workers.
///
/// Always returns exactly `workers` ranges.
///
/// # Errors
///
/// Returns [`FilterError::InvalidParameters`] if `workers` is 0.
///
/// # Examples
///
/// ```
/// use ppmedge_filter::partition_rows;
///
/// let sizes: Vec<u32> = partition_rows(10, 4).unwrap().iter().map(|r| r.size).collect();
/// assert_eq!(sizes, vec![3, 3, 3, 1]);
/// ```
pub fn partition_rows(height: u32, workers: usize) -> FilterResult<Vec<RowRange>> {
    if workers == 0 {
        return Err(FilterError::InvalidParameters(
            "worker count must be at least 1".to_string(),
        ));
    }
    let n = u32::try_from(workers).map_err(|_| {
        FilterError::InvalidParameters(format!("worker count {} is too large", workers))
    })?;
    let chunk = height.div_ceil(n);

    let mut ranges = Vec::with_capacity(workers);
    let mut start = 0u32;
    for i in 0..n {
        let size = if i == n - 1 {
            height - start
        } else {
            chunk.min(height - start)
        };
        ranges.push(RowRange { start, size });
        start += size;
    }
    Ok(ranges)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_tiling(height: u32, workers: usize) {
        let ranges = partition_rows(height, workers).unwrap();
        assert_eq!(ranges.len(), workers);
        let mut next = 0;
        for r in &ranges {
            assert_eq!(r.start, next, "gap or overlap at h={height} n={workers}");
            next = r.end();
        }
        assert_eq!(next, height);
        assert_eq!(ranges.iter().map(|r| r.size).sum::<u32>(), height);
    }

    #[test]
    fn test_tiles_exactly() {
        for height in 0..64 {
            for workers in 1..10 {
                check_tiling(height, workers);
            }
        }
        check_tiling(1080, 4);
        check_tiling(1081, 7);
    }

    #[test]
    fn test_first_ranges_get_ceiling() {
        let ranges = partition_rows(10, 4).unwrap();
        let sizes: Vec<u32> = ranges.iter().map(|r| r.size).collect();
        assert_eq!(sizes, vec![3, 3, 3, 1]);

        let ranges = partition_rows(8, 4).unwrap();
        assert!(ranges.iter().all(|r| r.size == 2));
    }

    #[test]
    fn test_fewer_rows_than_workers() {
        let sizes: Vec<u32> = partition_rows(2, 4)
            .unwrap()
            .iter()
            .map(|r| r.size)
            .collect();
        assert_eq!(sizes, vec![1, 1, 0, 0]);
    }

    #[test]
    fn test_ceiling_overshoot_is_clamped() {
        // ceil(5/4) = 2, so three full chunks would overrun the height
        let sizes: Vec<u32> = partition_rows(5, 4)
            .unwrap()
            .iter()
            .map(|r| r.size)
            .collect();
        assert_eq!(sizes, vec![2, 2, 1, 0]);
    }

    #[test]
    fn test_single_worker_takes_all() {
        assert_eq!(
            partition_rows(17, 1).unwrap(),
            vec![RowRange { start: 0, size: 17 }]
        );
    }

    #[test]
    fn test_zero_workers_rejected() {
        assert!(matches!(
            partition_rows(10, 0),
            Err(FilterError::InvalidParameters(_))
        ));
    }
}
