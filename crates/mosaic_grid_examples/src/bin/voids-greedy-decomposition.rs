use mosaic_grid::prelude::*;
use mosaic_grid_examples::{demo_parameters, init_tracing, parse_layout, render_voids};

const STAIRCASE: &str = "
    1 1 1 1 0
    1 1 1 0 0
    1 1 0 0 1
    1 0 0 1 1
    0 0 1 1 1
";

fn main() -> anyhow::Result<()> {
    init_tracing();

    let params = demo_parameters();
    let Sanitized { grid, warnings } = sanitize(&parse_layout(STAIRCASE))?;
    anyhow::ensure!(warnings.is_empty(), "layout should be clean: {warnings:?}");

    let regions = extract_void_regions(&grid, params.grid_height);
    println!("{}", render_voids(&grid, &regions));

    for (i, r) in regions.iter().enumerate() {
        println!(
            "{}: x {}..={}, y {}..={}, z {}..={} ({} cell(s))",
            char::from(b'A' + (i % 26) as u8),
            r.from_x,
            r.to_x,
            r.from_y,
            r.to_y,
            r.from_z,
            r.to_z,
            r.area()
        );
    }

    let bounds = zone_bounds(&grid, params.grid_height);
    println!(
        "\nzone: x 0..={}, y 0..={}, z 0..={}",
        bounds.max_x, bounds.max_y, bounds.max_z
    );
    Ok(())
}
