use anyhow::{Context, Result};
use geodem::{height_at, ElevationGrid, TerrainHeader};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Serialize)]
struct SampleResponse {
    x: f32,
    z: f32,
    height: f32,
}

pub fn run(header_path: PathBuf, x: f32, z: f32, json: bool) -> Result<()> {
    let text = fs::read_to_string(&header_path)
        .with_context(|| format!("Failed to read {}", header_path.display()))?;
    let header = TerrainHeader::parse(&text).context("Failed to parse header")?;

    let dir = header_path.parent().unwrap_or_else(|| Path::new(""));
    let data_path = dir.join(header.data_filename());

    let grid = ElevationGrid::from_file(&data_path, header.rows, header.columns)
        .context("Failed to read elevation grid")?;
    let normalized = grid
        .normalize(header.elev_min, header.elev_max)
        .context("Failed to normalize elevation grid")?;

    let extent = header.extent();
    let height = height_at(&normalized, &extent, x, z);

    if json {
        let response = SampleResponse { x, z, height };
        println!("{}", serde_json::to_string(&response)?);
    } else {
        println!("{:.4}", height);
    }

    Ok(())
}
