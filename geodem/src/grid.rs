//! Binary elevation grid reading and normalization.
//!
//! The companion `.bin` file holds `rows × columns` little-endian 32-bit
//! floats in row-major order, with no framing or checksum. Trailing bytes
//! beyond the declared sample count are ignored.

use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

use memmap2::Mmap;

use crate::error::{GridError, RangeError};

/// Bytes per elevation sample in the binary file.
const SAMPLE_BYTES: usize = 4;

/// A row-major grid of 32-bit elevation samples.
///
/// Holds raw elevations in meters straight after [`ElevationGrid::from_file`]
/// and unit-interval fractions after [`ElevationGrid::normalize`]. Each
/// stage produces a fresh grid; nothing is mutated in place.
#[derive(Debug, Clone, PartialEq)]
pub struct ElevationGrid {
    rows: usize,
    columns: usize,
    data: Vec<f32>,
}

impl ElevationGrid {
    /// Build a grid from raw samples.
    ///
    /// # Panics
    ///
    /// Panics if `data.len() != rows * columns`.
    pub fn new(rows: usize, columns: usize, data: Vec<f32>) -> Self {
        assert_eq!(
            data.len(),
            rows * columns,
            "sample count must match grid shape"
        );
        Self {
            rows,
            columns,
            data,
        }
    }

    /// Read `rows × columns` little-endian `f32` samples from `path`.
    ///
    /// The file is memory-mapped read-only; handle and mapping are released
    /// on every exit path before this function returns.
    ///
    /// # Errors
    ///
    /// - [`GridError::FileNotFound`] if the file cannot be found
    /// - [`GridError::Truncated`] if it holds fewer samples than declared
    /// - [`GridError::Io`] for any other open or mapping failure
    pub fn from_file(path: &Path, rows: usize, columns: usize) -> Result<Self, GridError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => GridError::FileNotFound {
                path: path.to_path_buf(),
            },
            _ => GridError::Io(e),
        })?;

        // Check the size up front: a short (or empty) file must report as
        // truncated, and zero-length files cannot be mapped at all.
        let expected = rows * columns;
        let available = file.metadata()?.len() as usize / SAMPLE_BYTES;
        if available < expected {
            return Err(GridError::Truncated {
                expected,
                actual: available,
            });
        }

        // SAFETY: the mapping is read-only and dropped before returning;
        // the file is never written through it.
        let mmap = unsafe { Mmap::map(&file)? };

        let data = mmap[..expected * SAMPLE_BYTES]
            .chunks_exact(SAMPLE_BYTES)
            .map(|b| f32::from_le_bytes([b[0], b[1], b[2], b[3]]))
            .collect();

        Ok(Self {
            rows,
            columns,
            data,
        })
    }

    /// Grid shape as `(rows, columns)`.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    /// Number of sample rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of sample columns.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Sample at `(row, column)`.
    ///
    /// # Panics
    ///
    /// Panics if the indices fall outside the grid.
    pub fn get(&self, row: usize, column: usize) -> f32 {
        self.data[row * self.columns + column]
    }

    /// All samples in row-major order.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Rescale every sample into its fraction of `[elev_min, elev_max]`,
    /// clamped to `[0, 1]`.
    ///
    /// Samples at or below `elev_min` map to 0.0, samples at or above
    /// `elev_max` to 1.0. Missing-data sentinels are not treated specially;
    /// they clamp like any other sample.
    ///
    /// # Errors
    ///
    /// [`RangeError::Degenerate`] when `elev_max` does not exceed
    /// `elev_min`; the grid is never normalized against a zero or negative
    /// span.
    pub fn normalize(&self, elev_min: f32, elev_max: f32) -> Result<Self, RangeError> {
        if elev_max <= elev_min {
            return Err(RangeError::Degenerate {
                min: elev_min,
                max: elev_max,
            });
        }

        let span = elev_max - elev_min;
        let data = self
            .data
            .iter()
            .map(|h| ((h - elev_min) / span).clamp(0.0, 1.0))
            .collect();

        Ok(Self {
            rows: self.rows,
            columns: self.columns,
            data,
        })
    }

    /// Smallest and largest sample, skipping the missing-data sentinel.
    ///
    /// Returns `None` when every sample carries the sentinel (or the grid
    /// is empty).
    pub fn min_max(&self, missing_flag: i32) -> Option<(f32, f32)> {
        let sentinel = missing_flag as f32;
        let mut range: Option<(f32, f32)> = None;

        for &h in &self.data {
            if h == sentinel {
                continue;
            }
            range = Some(match range {
                Some((lo, hi)) => (lo.min(h), hi.max(h)),
                None => (h, h),
            });
        }

        range
    }

    /// Number of samples equal to the missing-data sentinel.
    pub fn missing_count(&self, missing_flag: i32) -> usize {
        let sentinel = missing_flag as f32;
        self.data.iter().filter(|&&h| h == sentinel).count()
    }
}
