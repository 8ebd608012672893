use mosaic_grid::prelude::*;
use mosaic_grid_examples::{
    demo_parameters, init_tracing, parse_layout, print_diagnostics, print_documents,
    COMPACT_WAREHOUSE,
};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let grid = parse_layout(COMPACT_WAREHOUSE);
    let params = demo_parameters();

    let compiled = compile(&grid, &params)?;

    let mut diagnostics = Diagnostics::new();
    diagnostics.extend_warnings(compiled.warnings.iter().cloned());
    print_diagnostics(&diagnostics);

    let config = &compiled.configuration;
    println!(
        "{} station(s), {} void(s), {} SM stack(s), {} TC obstacle(s)\n",
        config.stations().len(),
        config.zones()[0].voids.len(),
        config.obstacle_stacks().len(),
        config.tc_obstacles().len()
    );

    print_documents(&compiled.documents()?);
    Ok(())
}
