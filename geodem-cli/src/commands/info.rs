use anyhow::{Context, Result};
use geodem::{ElevationGrid, TerrainHeader};
use std::fs;
use std::path::{Path, PathBuf};

pub fn run(header_path: PathBuf) -> Result<()> {
    let text = fs::read_to_string(&header_path)
        .with_context(|| format!("Failed to read {}", header_path.display()))?;
    let header = TerrainHeader::parse(&text).context("Failed to parse header")?;

    let dir = header_path.parent().unwrap_or_else(|| Path::new(""));
    let data_path = dir.join(header.data_filename());

    println!("Dataset: {}", header.file_title);
    println!("Header:  {}", header_path.display());
    println!("Data:    {}", data_path.display());
    println!();
    println!("Grid:    {} rows x {} columns", header.rows, header.columns);
    println!(
        "Bounds:  {}..{} E, {}..{} N (degrees)",
        header.left_x, header.right_x, header.lower_y, header.upper_y
    );
    if !header.map_projection.is_empty() {
        println!("Projection: {}", header.map_projection);
    }
    if !header.ellipsoid.is_empty() {
        println!("Ellipsoid:  {}", header.ellipsoid);
    }
    if !header.data_format.is_empty() {
        println!("Format:     {}", header.data_format);
    }
    println!(
        "Declared elevation: {}..{} m",
        header.elev_min, header.elev_max
    );

    let extent = header.extent();
    println!(
        "World size: {:.0} x {:.0} x {:.0} m",
        extent.x_range, extent.y_range, extent.z_range
    );
    println!();

    let metadata = fs::metadata(&data_path)
        .with_context(|| format!("Failed to stat {}", data_path.display()))?;
    println!("File size: {}", format_size(metadata.len()));

    let grid = ElevationGrid::from_file(&data_path, header.rows, header.columns)
        .context("Failed to read elevation grid")?;

    if let Some((min, max)) = grid.min_max(header.elev_missing_flag) {
        println!("Measured elevation: {:.1}..{:.1} m", min, max);
    }

    let total = header.rows * header.columns;
    let missing = grid.missing_count(header.elev_missing_flag);
    if missing > 0 {
        let pct = (missing as f64 / total as f64) * 100.0;
        println!("Missing samples: {} ({:.1}%)", missing, pct);
    }

    Ok(())
}

fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} bytes", bytes)
    }
}
