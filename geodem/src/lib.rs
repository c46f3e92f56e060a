//! # geodem - 3DEM Terrain Data Loader
//!
//! Library for converting elevation datasets exported by the 3DEM terrain
//! survey application into render-ready heightmaps.
//!
//! ## Features
//!
//! - **Typed header parsing**: one validation pass over the `key = value`
//!   text header, with every malformed field reported at once
//! - **Binary grid ingestion**: memory-mapped reads of the companion
//!   `.bin` elevation grid with truncation detection
//! - **Normalization**: elevations rescaled into clamped `[0, 1]` fractions
//!   of the declared range
//! - **Resolution-independent resampling**: planar interpolation onto a
//!   square heightmap of any requested size, plus world-space extents
//!   derived from the geographic bounds
//!
//! ## Quick Start
//!
//! ```ignore
//! // Resample the dataset onto a 513 x 513 heightmap
//! let data = geodem::load("survey/crater_lake.hdr", 513)?;
//!
//! println!(
//!     "terrain size: {:.0} x {:.0} x {:.0} m",
//!     data.extent.x_range, data.extent.y_range, data.extent.z_range
//! );
//! for row in data.heightmap.rows() {
//!     // feed per-vertex heights to a terrain surface
//! }
//! ```
//!
//! ## Dataset Format
//!
//! A dataset is a pair of files in one directory:
//!
//! - a text header of `key = value` lines naming the grid shape, the
//!   geographic bounds in degrees, the elevation range in meters, and the
//!   `file_title` of the payload (see [`header`] for the full field list)
//! - `<file_title>.bin`, holding `rows × columns` little-endian 32-bit
//!   floats in row-major order
//!
//! Each call to [`load`] is independent and stateless; loads may run
//! concurrently on separate threads without synchronization.

pub mod error;
pub mod grid;
pub mod header;
pub mod heightmap;
pub mod loader;

// Re-export main types at crate root for convenience
pub use error::{GridError, HeaderError, LoadError, RangeError, Result};
pub use grid::ElevationGrid;
pub use header::{TerrainHeader, WorldExtent};
pub use heightmap::{height_at, Heightmap};
pub use loader::{load, TerrainData};
