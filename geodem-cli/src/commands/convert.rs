use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// Heightmap output encoding.
#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// JSON document with extents and nested height rows
    Json,
    /// Raw little-endian f32 samples, row-major
    Raw,
}

#[derive(Serialize)]
struct HeightmapDocument<'a> {
    file_title: &'a str,
    resolution: usize,
    x_range: f32,
    y_range: f32,
    z_range: f32,
    heights: Vec<&'a [f32]>,
}

pub fn run(
    header: PathBuf,
    resolution: usize,
    output: Option<PathBuf>,
    format: OutputFormat,
) -> Result<()> {
    let data = geodem::load(&header, resolution)
        .with_context(|| format!("Failed to load {}", header.display()))?;

    let extension = match format {
        OutputFormat::Json => "json",
        OutputFormat::Raw => "r32",
    };
    let output_path = output.unwrap_or_else(|| {
        header.with_file_name(format!("{}.{}", data.header.file_title, extension))
    });

    let file = File::create(&output_path)
        .with_context(|| format!("Failed to create {}", output_path.display()))?;
    let mut writer = BufWriter::new(file);

    match format {
        OutputFormat::Json => {
            let doc = HeightmapDocument {
                file_title: &data.header.file_title,
                resolution: data.heightmap.resolution(),
                x_range: data.extent.x_range,
                y_range: data.extent.y_range,
                z_range: data.extent.z_range,
                heights: data.heightmap.rows().collect(),
            };
            serde_json::to_writer(&mut writer, &doc).context("Failed to write JSON output")?;
        }
        OutputFormat::Raw => {
            for v in data.heightmap.as_slice() {
                writer.write_all(&v.to_le_bytes())?;
            }
        }
    }
    writer.flush()?;

    println!("Converted:  {}", data.header.file_title);
    println!(
        "Resolution: {0} x {0} (from {1} x {2} source samples)",
        data.heightmap.resolution(),
        data.header.rows,
        data.header.columns
    );
    println!(
        "World size: {:.0} x {:.0} x {:.0} m",
        data.extent.x_range, data.extent.y_range, data.extent.z_range
    );
    println!("Output:     {}", output_path.display());

    Ok(())
}
