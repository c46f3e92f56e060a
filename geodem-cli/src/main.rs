use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

use commands::convert::OutputFormat;

/// 3DEM terrain data conversion CLI tool
#[derive(Parser)]
#[command(name = "geodem")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a dataset into a resampled heightmap file
    Convert {
        /// Path to the dataset header file
        header: PathBuf,

        /// Heightmap resolution (samples per side)
        #[arg(short, long, default_value = "513")]
        resolution: usize,

        /// Output file (defaults to `<file_title>.json`/`.r32` next to the header)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },

    /// Display information about a dataset
    Info {
        /// Path to the dataset header file
        header: PathBuf,
    },

    /// Sample the interpolated height at one world-space point
    Sample {
        /// Path to the dataset header file
        header: PathBuf,

        /// X coordinate in meters along the east-west extent
        #[arg(short = 'x', long)]
        x: f32,

        /// Z coordinate in meters along the north-south extent
        #[arg(short = 'z', long)]
        z: f32,

        /// Output result as JSON
        #[arg(short, long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            header,
            resolution,
            output,
            format,
        } => commands::convert::run(header, resolution, output, format),
        Commands::Info { header } => commands::info::run(header),
        Commands::Sample { header, x, z, json } => commands::sample::run(header, x, z, json),
    }
}
