//! Basic example demonstrating geodem library usage.
//!
//! Run with: cargo run --example basic -- /path/to/dataset.hdr

use geodem::LoadError;
use std::env;

fn main() -> Result<(), LoadError> {
    // Get header path from command line
    let header_path = env::args().nth(1).unwrap_or_else(|| {
        eprintln!("Usage: cargo run --example basic -- /path/to/dataset.hdr");
        std::process::exit(1);
    });

    // Load and resample onto a 129 x 129 heightmap
    let data = geodem::load(&header_path, 129)?;

    println!("Dataset: {}", data.header.file_title);
    println!("{:-<50}", "");
    println!(
        "Source grid:  {} x {} samples",
        data.header.rows, data.header.columns
    );
    println!(
        "Bounds:       {}..{} E, {}..{} N",
        data.header.left_x, data.header.right_x, data.header.lower_y, data.header.upper_y
    );
    println!(
        "World size:   {:.0} x {:.0} x {:.0} m",
        data.extent.x_range, data.extent.y_range, data.extent.z_range
    );

    // Print a coarse preview of the heightmap
    println!("\nHeightmap preview ({0} x {0}):", data.heightmap.resolution());
    for row in data.heightmap.rows().step_by(16) {
        let line: String = row
            .iter()
            .step_by(16)
            .map(|&h| match (h * 4.0) as u32 {
                0 => '.',
                1 => ':',
                2 => '+',
                3 => '#',
                _ => '@',
            })
            .collect();
        println!("  {}", line);
    }

    Ok(())
}
