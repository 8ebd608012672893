//! Cell sanitization for raw grids.
//!
//! Replaces every cell that is neither a terrain code nor a station code with
//! [`FALLBACK_CODE`] (SM & TC obstacle), the most restrictive terrain, and records a
//! [`Warning::InvalidCell`] for it.
use tracing::{debug, warn};

use super::{Grid, RawGrid, FALLBACK_CODE, MAX_GRID_SIZE};
use crate::diagnostics::Warning;
use crate::error::{Error, Result};

/// A sanitized grid together with the warnings raised while producing it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sanitized {
    pub grid: Grid,
    pub warnings: Vec<Warning>,
}

/// Sanitize `raw` into a rectangular [`Grid`] of the same dimensions.
///
/// Fails only when the grid has no rows or no columns.
pub fn sanitize(raw: &RawGrid) -> Result<Sanitized> {
    let (width, height) = (raw.width(), raw.height());
    if width == 0 || height == 0 {
        return Err(Error::InvalidGrid(format!(
            "grid must have at least one row and one column, got {width}x{height}"
        )));
    }

    let mut warnings = Vec::new();
    if width > MAX_GRID_SIZE || height > MAX_GRID_SIZE {
        warn!(
            "Grid of {}x{} exceeds the allowed size of {}.",
            width, height, MAX_GRID_SIZE
        );
        warnings.push(Warning::oversized(width, height));
    }

    let mut cells = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            let cell = raw.cell(x, y);
            match cell.as_code() {
                Some(code) => cells.push(code),
                None => {
                    warn!(
                        "Cell ({}, {}) holds invalid value '{}'; using {}.",
                        x, y, cell, FALLBACK_CODE
                    );
                    warnings.push(Warning::InvalidCell {
                        x,
                        y,
                        raw: cell.to_string(),
                    });
                    cells.push(FALLBACK_CODE);
                }
            }
        }
    }

    debug!(
        "Sanitized {}x{} grid with {} warning(s).",
        width,
        height,
        warnings.len()
    );

    Ok(Sanitized {
        grid: Grid::from_cells(width, height, cells),
        warnings,
    })
}
