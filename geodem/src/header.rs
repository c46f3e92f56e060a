//! Header parsing for 3DEM terrain datasets.
//!
//! A dataset consists of a text header and a companion binary file named
//! `<file_title>.bin` in the same directory. The header is a sequence of
//! `key = value` lines; fields may appear in any order and unknown keys
//! are ignored.
//!
//! # Header Format
//!
//! ```text
//! file_title          = crater_lake
//! data_format         = float
//! map_projection      = lat/lon
//! ellipsoid           = WGS84
//! left_map_x          = -122.25
//! lower_map_y         = 42.80
//! right_map_x         = -122.00
//! upper_map_y         = 43.05
//! number_of_rows      = 1024
//! number_of_columns   = 1024
//! elev_m_unit         = meters
//! elev_m_minimum      = 1200.0
//! elev_m_maximum      = 2720.0
//! elev_m_missing_flag = -9999
//! ```
//!
//! `data_format`, `map_projection`, `ellipsoid` and `elev_m_unit` are
//! optional and default to the empty string; everything else is required.

use std::collections::HashMap;
use std::str::FromStr;

use crate::error::HeaderError;

/// Fixed Earth radius used to convert angular spans to meters.
const EARTH_RADIUS_M: f32 = 6378.0e3;

/// Meters of arc length per degree at [`EARTH_RADIUS_M`].
const M_PER_DEG: f32 = std::f32::consts::PI * EARTH_RADIUS_M / 180.0;

/// World-space size of a dataset, derived from its header.
///
/// `x_range` and `z_range` are the geographic spans converted to linear
/// distance; `y_range` is the declared elevation span.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldExtent {
    /// East-west span in meters.
    pub x_range: f32,
    /// Elevation span in meters.
    pub y_range: f32,
    /// North-south span in meters.
    pub z_range: f32,
}

/// Immutable set of fields parsed from a 3DEM header file.
#[derive(Debug, Clone, PartialEq)]
pub struct TerrainHeader {
    /// Base name of the companion binary file, without extension.
    pub file_title: String,
    /// Optional format description. Empty when absent.
    pub data_format: String,
    /// Optional projection name. Empty when absent.
    pub map_projection: String,
    /// Optional reference ellipsoid. Empty when absent.
    pub ellipsoid: String,
    /// Western map bound in degrees.
    pub left_x: f32,
    /// Southern map bound in degrees.
    pub lower_y: f32,
    /// Eastern map bound in degrees.
    pub right_x: f32,
    /// Northern map bound in degrees.
    pub upper_y: f32,
    /// Number of sample rows in the binary grid.
    pub rows: usize,
    /// Number of sample columns in the binary grid.
    pub columns: usize,
    /// Optional elevation unit label. Empty when absent.
    pub elev_unit: String,
    /// Smallest elevation in the dataset, meters.
    pub elev_min: f32,
    /// Largest elevation in the dataset, meters.
    pub elev_max: f32,
    /// Sentinel value marking missing samples.
    pub elev_missing_flag: i32,
}

impl TerrainHeader {
    /// Parse the full text of a header file.
    ///
    /// Keys and values have every whitespace character removed before use,
    /// so `number_of_rows = 1 024` reads as `1024`. Duplicate keys keep the
    /// last occurrence. Required numeric fields are validated in a single
    /// pass: the returned [`HeaderError::MalformedRequired`] lists every
    /// field that was absent or failed to parse.
    ///
    /// # Errors
    ///
    /// - [`HeaderError::MalformedLine`] if a non-empty line is not one
    ///   `key = value` pair
    /// - [`HeaderError::MissingField`] if `file_title` is absent
    /// - [`HeaderError::MalformedRequired`] if any bounds, grid-shape or
    ///   elevation field is absent or unparseable
    pub fn parse(text: &str) -> Result<Self, HeaderError> {
        let mut params: HashMap<String, String> = HashMap::new();

        for (idx, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            let mut parts = line.split('=');
            match (parts.next(), parts.next(), parts.next()) {
                (Some(key), Some(value), None) => {
                    params.insert(erase_whitespace(key), erase_whitespace(value));
                }
                _ => return Err(HeaderError::MalformedLine { line: idx + 1 }),
            }
        }

        let file_title = params
            .get("file_title")
            .cloned()
            .ok_or(HeaderError::MissingField { name: "file_title" })?;

        // One validation pass over the required numeric fields; every
        // offender is collected before the parse fails.
        let mut bad: Vec<String> = Vec::new();

        let left_x: f32 = require(&params, "left_map_x", &mut bad);
        let lower_y: f32 = require(&params, "lower_map_y", &mut bad);
        let right_x: f32 = require(&params, "right_map_x", &mut bad);
        let upper_y: f32 = require(&params, "upper_map_y", &mut bad);
        let rows: usize = require(&params, "number_of_rows", &mut bad);
        let columns: usize = require(&params, "number_of_columns", &mut bad);
        let elev_min: f32 = require(&params, "elev_m_minimum", &mut bad);
        let elev_max: f32 = require(&params, "elev_m_maximum", &mut bad);
        let elev_missing_flag: i32 = require(&params, "elev_m_missing_flag", &mut bad);

        // A grid with zero rows or columns holds no samples.
        if rows == 0 {
            flag(&mut bad, "number_of_rows");
        }
        if columns == 0 {
            flag(&mut bad, "number_of_columns");
        }

        if !bad.is_empty() {
            return Err(HeaderError::MalformedRequired { fields: bad });
        }

        Ok(Self {
            file_title,
            data_format: optional(&params, "data_format"),
            map_projection: optional(&params, "map_projection"),
            ellipsoid: optional(&params, "ellipsoid"),
            left_x,
            lower_y,
            right_x,
            upper_y,
            rows,
            columns,
            elev_unit: optional(&params, "elev_m_unit"),
            elev_min,
            elev_max,
            elev_missing_flag,
        })
    }

    /// Derive the world-space extent of this dataset.
    ///
    /// Angular spans are converted to linear distance at a fixed Earth
    /// radius of 6378 km.
    pub fn extent(&self) -> WorldExtent {
        WorldExtent {
            x_range: (self.right_x - self.left_x) * M_PER_DEG,
            y_range: self.elev_max - self.elev_min,
            z_range: (self.upper_y - self.lower_y) * M_PER_DEG,
        }
    }

    /// Name of the companion binary file: `<file_title>.bin`.
    pub fn data_filename(&self) -> String {
        format!("{}.bin", self.file_title)
    }
}

/// Remove every whitespace character, embedded ones included.
fn erase_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Look up and parse a required field, recording a failure in `bad`.
///
/// Returns the type's default on failure; the caller checks `bad` before
/// the placeholder can be observed.
fn require<T: FromStr + Default>(
    params: &HashMap<String, String>,
    name: &str,
    bad: &mut Vec<String>,
) -> T {
    match params.get(name).and_then(|v| v.parse().ok()) {
        Some(v) => v,
        None => {
            bad.push(name.to_string());
            T::default()
        }
    }
}

/// Record `name` in `bad` unless it is already listed.
fn flag(bad: &mut Vec<String>, name: &str) {
    if !bad.iter().any(|f| f == name) {
        bad.push(name.to_string());
    }
}

/// Look up an optional field, defaulting to the empty string.
fn optional(params: &HashMap<String, String>, name: &str) -> String {
    params.get(name).cloned().unwrap_or_default()
}
