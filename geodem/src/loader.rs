//! End-to-end loading of 3DEM terrain datasets.
//!
//! [`load`] runs the whole pipeline: header parse, binary grid read,
//! normalization, resampling. Each call is self-contained and stateless;
//! concurrent loads need no synchronization.

use std::fs;
use std::path::Path;

use crate::error::{LoadError, Result};
use crate::grid::ElevationGrid;
use crate::header::{TerrainHeader, WorldExtent};
use crate::heightmap::Heightmap;

/// Result of a successful load.
#[derive(Debug, Clone)]
pub struct TerrainData {
    /// The parsed header.
    pub header: TerrainHeader,
    /// World-space size derived from the header bounds.
    pub extent: WorldExtent,
    /// The resampled height grid.
    pub heightmap: Heightmap,
}

/// Load a terrain dataset and resample it to `resolution × resolution`.
///
/// `header_path` names the text header; the binary grid is read from
/// `<file_title>.bin` in the same directory. The pipeline fails fast: the
/// header must parse before any binary I/O is attempted, and any stage
/// error aborts the whole load with no partial output.
///
/// # Example
///
/// ```ignore
/// let data = geodem::load("survey/crater_lake.hdr", 513)?;
/// println!(
///     "terrain size: {} x {} x {} m",
///     data.extent.x_range, data.extent.y_range, data.extent.z_range
/// );
/// let heights = data.heightmap;
/// ```
///
/// # Errors
///
/// - [`LoadError::InvalidResolution`] for a zero resolution
/// - [`LoadError::Io`] if the header file cannot be read
/// - [`LoadError::Header`] for a missing or malformed header field
/// - [`LoadError::Grid`] for a missing or truncated binary file
/// - [`LoadError::Range`] for a degenerate elevation range
pub fn load<P: AsRef<Path>>(header_path: P, resolution: usize) -> Result<TerrainData> {
    let header_path = header_path.as_ref();

    if resolution == 0 {
        return Err(LoadError::InvalidResolution);
    }

    let text = fs::read_to_string(header_path)?;
    let header = TerrainHeader::parse(&text)?;

    let dir = header_path.parent().unwrap_or_else(|| Path::new(""));
    let data_path = dir.join(header.data_filename());

    let raw = ElevationGrid::from_file(&data_path, header.rows, header.columns)?;
    let normalized = raw.normalize(header.elev_min, header.elev_max)?;

    let extent = header.extent();
    let heightmap = Heightmap::resample(&normalized, &extent, resolution);

    Ok(TerrainData {
        header,
        extent,
        heightmap,
    })
}
