//! Parallel convolution with wrap-around borders
//!
//! The output image is allocated once and cut into disjoint row bands, one
//! per worker of a fixed-size pool. Each worker reads the shared input and
//! writes only its own band, so the pixel buffers need no locking. The scope
//! that runs the workers is the join barrier.
//!
//! Neighbor coordinates outside the image wrap modulo the image dimension
//! (toroidal sampling). Per-channel sums are accumulated as saturating
//! `i64` and clamped to `[0, 255]` only after all taps have been added, so
//! any `i32` kernel weights produce a clamped result.

use crate::partition::{RowRange, partition_rows};
use crate::{FilterError, FilterResult, Kernel};
use log::debug;
use ppmedge_core::{Image, ImageMut, Pixel};
use std::panic::{self, AssertUnwindSafe};
use std::time::{Duration, Instant};

/// Worker count of the reference configuration.
pub const DEFAULT_WORKERS: usize = 4;

/// A filtered image together with the wall-clock time spent producing it.
#[derive(Debug, Clone)]
pub struct Filtered {
    /// The freshly allocated output image
    pub image: Image,
    /// Time for partitioning, worker execution and join
    pub elapsed: Duration,
}

impl Filtered {
    /// Elapsed time in seconds.
    #[inline]
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// Row-parallel convolution engine.
///
/// # Examples
///
/// ```
/// use ppmedge_core::{Image, Pixel};
/// use ppmedge_filter::Convolver;
///
/// let flat = Image::filled(8, 8, Pixel::gray(200)).unwrap();
/// let out = Convolver::laplacian(4).unwrap().filter(&flat).unwrap();
/// // A flat image has no edges
/// assert!(out.image.pixels().iter().all(|p| *p == Pixel::BLACK));
/// ```
#[derive(Debug, Clone)]
pub struct Convolver {
    kernel: Kernel,
    workers: usize,
}

impl Convolver {
    /// Create an engine applying `kernel` with `workers` row workers.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidParameters`] if `workers` is 0.
    pub fn new(kernel: Kernel, workers: usize) -> FilterResult<Self> {
        if workers == 0 {
            return Err(FilterError::InvalidParameters(
                "worker count must be at least 1".to_string(),
            ));
        }
        Ok(Convolver { kernel, workers })
    }

    /// Create an engine applying the 3x3 Laplacian kernel.
    pub fn laplacian(workers: usize) -> FilterResult<Self> {
        Self::new(Kernel::laplacian(), workers)
    }

    /// The kernel being applied.
    pub fn kernel(&self) -> &Kernel {
        &self.kernel
    }

    /// Number of row workers.
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Filter `image` and measure the elapsed wall-clock time.
    ///
    /// # Errors
    ///
    /// See [`Convolver::convolve`].
    pub fn filter(&self, image: &Image) -> FilterResult<Filtered> {
        let start = Instant::now();
        let image = self.convolve(image)?;
        Ok(Filtered {
            image,
            elapsed: start.elapsed(),
        })
    }

    /// Filter `image` into a newly allocated image of the same size.
    ///
    /// # Errors
    ///
    /// - [`FilterError::Core`] with `AllocationFailed` if the output buffer
    ///   cannot be allocated
    /// - [`FilterError::WorkerFailure`] if the worker pool cannot be started
    ///   or a worker does not complete; the output buffer is released first
    pub fn convolve(&self, image: &Image) -> FilterResult<Image> {
        self.convolve_bands(image, convolve_rows)
    }

    /// Run `rows` once per non-empty band on the worker pool.
    fn convolve_bands<F>(&self, image: &Image, rows: F) -> FilterResult<Image>
    where
        F: Fn(&Image, &Kernel, &[usize], RowRange, &mut [Pixel]) + Sync,
    {
        let (w, h) = image.dimensions();
        let ranges = partition_rows(h, self.workers)?;
        debug!(
            "convolving {}x{} image with {} workers, rows {:?}",
            w,
            h,
            self.workers,
            ranges.iter().map(RowRange::rows).collect::<Vec<_>>()
        );

        let mut out = ImageMut::new(w, h)?;
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.workers)
            .thread_name(|i| format!("ppmedge-rows-{}", i))
            .build()
            .map_err(|e| {
                FilterError::WorkerFailure(format!(
                    "cannot start {} row workers: {}",
                    self.workers, e
                ))
            })?;

        let columns = wrapped_columns(w, &self.kernel);
        let kernel = &self.kernel;
        let columns = &columns;
        let rows = &rows;
        let bands = split_bands(out.pixels_mut(), &ranges, w as usize);

        let joined = panic::catch_unwind(AssertUnwindSafe(|| {
            pool.scope(|s| {
                for (range, band) in ranges.iter().copied().zip(bands) {
                    if range.is_empty() {
                        continue;
                    }
                    s.spawn(move |_| rows(image, kernel, columns, range, band));
                }
            })
        }));
        if joined.is_err() {
            drop(out);
            return Err(FilterError::WorkerFailure(
                "row worker panicked before completing".to_string(),
            ));
        }

        Ok(out.into())
    }
}

/// Apply the Laplacian kernel with [`DEFAULT_WORKERS`] workers.
pub fn laplacian_filter(image: &Image) -> FilterResult<Filtered> {
    Convolver::laplacian(DEFAULT_WORKERS)?.filter(image)
}

/// Saturate an accumulated channel sum into `i32` range.
#[inline]
fn narrow(sum: i64) -> i32 {
    sum.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Wrap `coord + tap - center` into `[0, len)`.
#[inline]
fn wrap(coord: u32, tap: u32, center: u32, len: u32) -> usize {
    (i64::from(coord) + i64::from(tap) - i64::from(center)).rem_euclid(i64::from(len)) as usize
}

/// Source column for every (kernel column, output column) pair,
/// indexed as `kx * width + x`.
fn wrapped_columns(width: u32, kernel: &Kernel) -> Vec<usize> {
    (0..kernel.width())
        .flat_map(|kx| (0..width).map(move |x| wrap(x, kx, kernel.center_x(), width)))
        .collect()
}

/// Cut `pixels` into consecutive bands of `range.size * width` pixels.
fn split_bands<'a>(
    mut pixels: &'a mut [Pixel],
    ranges: &[RowRange],
    width: usize,
) -> Vec<&'a mut [Pixel]> {
    let mut bands = Vec::with_capacity(ranges.len());
    for range in ranges {
        let (band, rest) = std::mem::take(&mut pixels).split_at_mut(range.size as usize * width);
        bands.push(band);
        pixels = rest;
    }
    bands
}

/// Compute output rows `range` into `band`.
fn convolve_rows(
    image: &Image,
    kernel: &Kernel,
    columns: &[usize],
    range: RowRange,
    band: &mut [Pixel],
) {
    let w = image.width() as usize;
    let kw = kernel.width() as usize;
    let src = image.pixels();
    let weights = kernel.data();

    for (y, out_row) in range.rows().zip(band.chunks_mut(w)) {
        let src_rows: Vec<&[Pixel]> = (0..kernel.height())
            .map(|ky| {
                let sy = wrap(y, ky, kernel.center_y(), image.height());
                &src[sy * w..(sy + 1) * w]
            })
            .collect();

        for (x, dst) in out_row.iter_mut().enumerate() {
            let (mut r, mut g, mut b) = (0i64, 0i64, 0i64);
            for (ky, row) in src_rows.iter().enumerate() {
                for kx in 0..kw {
                    let k = i64::from(weights[ky * kw + kx]);
                    let p = row[columns[kx * w + x]];
                    r = r.saturating_add(i64::from(p.r) * k);
                    g = g.saturating_add(i64::from(p.g) * k);
                    b = b.saturating_add(i64::from(p.b) * k);
                }
            }
            *dst = Pixel::from_clamped(narrow(r), narrow(g), narrow(b));
        }
    }
}
