//! Heightmap generation by resampling a normalized elevation grid.
//!
//! The resampler walks a square output grid of caller-chosen resolution,
//! maps each output cell to world coordinates, and evaluates a planar
//! interpolation over the source grid at that point. Grid density changes;
//! world-space scale does not.

use crate::grid::ElevationGrid;
use crate::header::WorldExtent;

/// A square, row-major grid of resampled height fractions.
///
/// Samples are nominally in `[0, 1]`; the gradient interpolation is not
/// re-clamped and may slightly overshoot near source grid edges.
#[derive(Debug, Clone, PartialEq)]
pub struct Heightmap {
    resolution: usize,
    data: Vec<f32>,
}

impl Heightmap {
    /// Resample `grid` to `resolution × resolution` samples.
    ///
    /// Output cell `(i, j)` sits at world coordinates `(i * dx, j * dz)`
    /// with the stride `dx = x_range / resolution - 1` (the subtraction
    /// applies to the scaled range, not to `resolution`) and is evaluated
    /// with [`height_at`].
    pub fn resample(grid: &ElevationGrid, extent: &WorldExtent, resolution: usize) -> Self {
        let dx = extent.x_range / resolution as f32 - 1.0;
        let dz = extent.z_range / resolution as f32 - 1.0;

        let mut data = Vec::with_capacity(resolution * resolution);
        for i in 0..resolution {
            for j in 0..resolution {
                data.push(height_at(grid, extent, i as f32 * dx, j as f32 * dz));
            }
        }

        Self { resolution, data }
    }

    /// Samples per side.
    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// Sample at output cell `(i, j)`.
    ///
    /// # Panics
    ///
    /// Panics if the indices fall outside the map.
    pub fn get(&self, i: usize, j: usize) -> f32 {
        self.data[i * self.resolution + j]
    }

    /// All samples in row-major order.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Iterate over the map one row at a time.
    pub fn rows(&self) -> impl Iterator<Item = &[f32]> {
        self.data.chunks(self.resolution)
    }
}

/// Height fraction at world coordinates `(x, z)`, interpolated from the
/// normalized source grid.
///
/// The base sample is `(floor(x / dx), floor(z / dz))` where `dx` and `dz`
/// are the source sample spacings; partial derivatives are taken as forward
/// differences towards the next row and column, and the height is the
/// first-order estimate from the base sample along both axes.
///
/// Returns 0.0 for any point outside the usable source region. Because the
/// derivatives look one row and one column ahead, the last row and column
/// cannot serve as base points: the usable region is one sample short of
/// the grid in each axis. Points with negative coordinates, and any grid
/// with fewer than two rows or columns, are out of range as well.
pub fn height_at(grid: &ElevationGrid, extent: &WorldExtent, x: f32, z: f32) -> f32 {
    let (rows, columns) = grid.dimensions();
    if rows < 2 || columns < 2 {
        return 0.0;
    }

    // Spacing between adjacent source samples, in world units.
    let dx = extent.x_range / (rows - 1) as f32;
    let dz = extent.z_range / (columns - 1) as f32;

    let bi = (x / dx).floor();
    let bj = (z / dz).floor();
    if !bi.is_finite() || !bj.is_finite() || bi < 0.0 || bj < 0.0 {
        return 0.0;
    }

    let (i, j) = (bi as usize, bj as usize);
    if i >= rows - 1 || j >= columns - 1 {
        return 0.0;
    }

    // Forward-difference partial derivatives at the base sample.
    let dydx = (grid.get(i + 1, j) - grid.get(i, j)) / dx;
    let dydz = (grid.get(i, j + 1) - grid.get(i, j)) / dz;

    grid.get(i, j) + dydx * (x - i as f32 * dx) + dydz * (z - j as f32 * dz)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 3×3 normalized ridge used throughout:
    ///
    /// ```text
    /// 0.0  0.5  1.0
    /// 0.5  1.0  0.5
    /// 1.0  0.5  0.0
    /// ```
    fn ridge() -> ElevationGrid {
        ElevationGrid::new(
            3,
            3,
            vec![0.0, 0.5, 1.0, 0.5, 1.0, 0.5, 1.0, 0.5, 0.0],
        )
    }

    /// Extent with friendly numbers: spacing between source samples is 6.0
    /// world units per axis, output stride at resolution 3 is
    /// `12 / 3 - 1 = 3.0`.
    fn extent() -> WorldExtent {
        WorldExtent {
            x_range: 12.0,
            y_range: 10.0,
            z_range: 12.0,
        }
    }

    #[test]
    fn test_height_at_base_points() {
        let grid = ridge();
        let ext = extent();

        assert_eq!(height_at(&grid, &ext, 0.0, 0.0), 0.0);
        assert_eq!(height_at(&grid, &ext, 6.0, 6.0), 1.0);
        assert_eq!(height_at(&grid, &ext, 6.0, 0.0), 0.5);
    }

    #[test]
    fn test_height_at_interpolates_between_samples() {
        let grid = ridge();
        let ext = extent();

        // Halfway along both axes from (0, 0): 0.0 + (0.5/6)*3 + (0.5/6)*3.
        let h = height_at(&grid, &ext, 3.0, 3.0);
        assert!((h - 0.5).abs() < 1e-6);

        // Halfway along x only.
        let h = height_at(&grid, &ext, 3.0, 0.0);
        assert!((h - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_height_at_last_row_and_column_unusable() {
        let grid = ridge();
        let ext = extent();

        // x = 12 maps onto the last row; its forward neighborhood does not
        // exist, so the sample is out of range.
        assert_eq!(height_at(&grid, &ext, 12.0, 0.0), 0.0);
        assert_eq!(height_at(&grid, &ext, 0.0, 12.0), 0.0);
        assert_eq!(height_at(&grid, &ext, 30.0, 0.0), 0.0);
    }

    #[test]
    fn test_height_at_negative_coordinates() {
        let grid = ridge();
        let ext = extent();

        assert_eq!(height_at(&grid, &ext, -1.0, 0.0), 0.0);
        assert_eq!(height_at(&grid, &ext, 0.0, -0.1), 0.0);
    }

    #[test]
    fn test_height_at_degenerate_grid() {
        let single_row = ElevationGrid::new(1, 3, vec![0.1, 0.2, 0.3]);
        let ext = extent();

        assert_eq!(height_at(&single_row, &ext, 0.0, 0.0), 0.0);
    }

    #[test]
    fn test_resample_hand_computed_values() {
        // Output stride 3.0 against source spacing 6.0: cells land on the
        // base samples and their midpoints, giving exact planar values.
        let map = Heightmap::resample(&ridge(), &extent(), 3);

        let expected = [
            [0.0, 0.25, 0.5],
            [0.25, 0.5, 0.75],
            [0.5, 0.75, 1.0],
        ];
        for i in 0..3 {
            for j in 0..3 {
                assert!(
                    (map.get(i, j) - expected[i][j]).abs() < 1e-6,
                    "cell ({}, {}): got {}, expected {}",
                    i,
                    j,
                    map.get(i, j),
                    expected[i][j]
                );
            }
        }
    }

    #[test]
    fn test_resample_shape_and_origin() {
        let map = Heightmap::resample(&ridge(), &extent(), 5);

        assert_eq!(map.resolution(), 5);
        assert_eq!(map.as_slice().len(), 25);
        // Cell (0, 0) always sits at the world origin.
        assert_eq!(map.get(0, 0), ridge().get(0, 0));
    }

    #[test]
    fn test_resample_rows_iterator() {
        let map = Heightmap::resample(&ridge(), &extent(), 3);

        let rows: Vec<&[f32]> = map.rows().collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].len(), 3);
        assert_eq!(rows[2][2], map.get(2, 2));
    }

    #[test]
    fn test_resample_values_track_source_interior() {
        // A flat gradient resamples to values inside the source range for
        // every in-range cell; out-of-range cells are exactly 0.0.
        let grid = ElevationGrid::new(
            4,
            4,
            (0..16).map(|i| i as f32 / 15.0).collect(),
        );
        let ext = WorldExtent {
            x_range: 30.0,
            y_range: 1.0,
            z_range: 30.0,
        };

        let map = Heightmap::resample(&grid, &ext, 4);
        for &v in map.as_slice() {
            assert!((0.0..=1.0).contains(&v), "sample {} outside [0, 1]", v);
        }
    }
}
