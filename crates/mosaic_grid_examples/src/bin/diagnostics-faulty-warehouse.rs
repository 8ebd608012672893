use mosaic_grid::prelude::*;
use mosaic_grid_examples::{
    demo_parameters, init_tracing, parse_layout, print_diagnostics, FAULTY_WAREHOUSE,
};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let grid = parse_layout(FAULTY_WAREHOUSE);

    match compile(&grid, &demo_parameters()) {
        Ok(compiled) => {
            println!(
                "compiled with {} warning(s)",
                compiled.warnings.len()
            );
        }
        Err(Error::Rejected(diagnostics)) => {
            println!("grid rejected: {diagnostics}\n");
            print_diagnostics(&diagnostics);
            println!("\nas JSON:\n{}", serde_json::to_string_pretty(&diagnostics)?);
        }
        Err(other) => return Err(other.into()),
    }

    Ok(())
}
