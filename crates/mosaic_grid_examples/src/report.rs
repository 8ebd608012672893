//! Console output helpers shared by the example binaries.
use mosaic_grid::prelude::{Diagnostics, Documents, Grid, Severity, VoidRegion};
use tracing_subscriber::EnvFilter;

/// Installs a fmt subscriber honouring `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_target(false)
        .try_init();
}

pub fn print_documents(docs: &Documents) {
    for (name, body) in docs.files() {
        println!("==> {name} <==");
        println!("{body}");
        println!();
    }
}

pub fn print_diagnostics(diagnostics: &Diagnostics) {
    if diagnostics.is_empty() {
        println!("[ok] no diagnostics");
        return;
    }
    for (severity, message) in diagnostics.messages() {
        let tag = match severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        println!("[{tag}] {message}");
    }
}

/// Draws the grid with each void region labelled by a letter.
pub fn render_voids(grid: &Grid, regions: &[VoidRegion]) -> String {
    let mut out = String::new();
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let label = regions
                .iter()
                .position(|r| r.contains(x, y))
                .map(|i| char::from(b'A' + (i % 26) as u8))
                .unwrap_or(if grid.get(x, y).is_some_and(|c| c >= 10) {
                    '#'
                } else {
                    '.'
                });
            out.push(label);
            out.push(' ');
        }
        out.push('\n');
    }
    out
}
