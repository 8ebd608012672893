//! End-to-end compiler from a raw grid and parameters to a [`Configuration`].
//!
//! This module runs every stage in order: sanitize the grid, parse stations, extract voids,
//! list obstacles, and assemble the result via [`ConfigurationBuilder`].
//!
//! Typical usage:
//! - [`compile`] or [`GridCompiler::compile`], then [`Compiled::documents`]
use tracing::{info, warn};

use crate::config::assembler::ConfigurationBuilder;
use crate::config::model::Configuration;
use crate::config::Parameters;
use crate::diagnostics::Warning;
use crate::document::Documents;
use crate::error::Result;
use crate::grid::sanitize::{sanitize, Sanitized};
use crate::grid::RawGrid;
use crate::obstacles::{build_obstacle_stacks, build_tc_obstacles};
use crate::station::parse_stations;
use crate::voids::{extract_void_regions, zone_bounds};

/// A successfully compiled grid and the warnings raised along the way.
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Compiled {
    pub configuration: Configuration,
    pub warnings: Vec<Warning>,
}

impl Compiled {
    /// Render all simulator documents for the configuration.
    pub fn documents(&self) -> Result<Documents> {
        Documents::render(&self.configuration)
    }
}

/// Compiler for painted grids into facility configurations.
pub struct GridCompiler;

impl GridCompiler {
    /// Compiles `grid` with `params`.
    ///
    /// Fails with [`crate::error::Error::InvalidConfig`] for invalid parameters,
    /// [`crate::error::Error::InvalidGrid`] for an empty grid, and
    /// [`crate::error::Error::Rejected`] carrying every station error when the station
    /// layout is unusable.
    pub fn compile(grid: &RawGrid, params: &Parameters) -> Result<Compiled> {
        params.validate()?;

        let Sanitized { grid, mut warnings } = sanitize(grid)?;

        let stations = parse_stations(&grid);
        if matches!(&stations, Ok(s) if s.is_empty()) {
            warn!("Grid has no stations.");
            warnings.push(Warning::NoStations);
        }

        let z_size = params.grid_height;
        let builder = ConfigurationBuilder::new(params.clone())
            .with_warnings(warnings)
            .with_stations(stations)
            .with_zone(zone_bounds(&grid, z_size), extract_void_regions(&grid, z_size))
            .with_obstacle_stacks(build_obstacle_stacks(&grid))
            .with_tc_obstacles(build_tc_obstacles(&grid));

        let warnings = builder.diagnostics().warnings().to_vec();
        let configuration = builder.build()?;

        info!(
            "Compiled {}x{} grid: {} station(s), {} void(s), {} warning(s).",
            grid.width(),
            grid.height(),
            configuration.stations().len(),
            configuration.zones().iter().map(|z| z.voids.len()).sum::<usize>(),
            warnings.len()
        );

        Ok(Compiled {
            configuration,
            warnings,
        })
    }
}

/// Compiles `grid` with `params`. See [`GridCompiler::compile`].
pub fn compile(grid: &RawGrid, params: &Parameters) -> Result<Compiled> {
    GridCompiler::compile(grid, params)
}
