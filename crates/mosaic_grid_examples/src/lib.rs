#![forbid(unsafe_code)]

mod layouts;
mod report;

pub use layouts::{demo_parameters, parse_layout, COMPACT_WAREHOUSE, FAULTY_WAREHOUSE};
pub use report::{init_tracing, print_diagnostics, print_documents, render_voids};
