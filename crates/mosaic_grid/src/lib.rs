#![forbid(unsafe_code)]
//! mosaic_grid: Compile painted warehouse grids into simulator configuration documents.
//!
//! Modules:
//! - grid: raw and sanitized grids, terrain decoding, and cell sanitization
//! - station: station code decoding and drop/pick pairing validation
//! - voids: greedy rectangle decomposition of SM-obstacle cells and the zone bounding box
//! - obstacles: per-cell SM-obstacle stacks and TC-obstacle entries
//! - config: parameters, the configuration model, and its assembler
//! - document: canonical JSON documents consumed by the simulator
//! - compiler: the end-to-end pipeline and its diagnostics
//!
//! For examples, see the `mosaic_grid_examples` crate.
pub mod compiler;
pub mod config;
pub mod diagnostics;
pub mod document;
pub mod error;
pub mod grid;
pub mod obstacles;
pub mod station;
pub mod voids;

/// Convenient re-exports for common types. Import with `use mosaic_grid::prelude::*;`.
pub mod prelude {
    pub use crate::compiler::{compile, Compiled, GridCompiler};
    pub use crate::config::assembler::ConfigurationBuilder;
    pub use crate::config::model::{
        Configuration, Coordinate, DropOrPick, Station, VoidRegion, Zone,
    };
    pub use crate::config::Parameters;
    pub use crate::diagnostics::{Diagnostics, Severity, StationError, Warning};
    pub use crate::document::{
        to_canonical_json, Document, Documents, SmObstacleStacksDocument, TcObstacleDocument,
        ZonesAndStationsDocument,
    };
    pub use crate::error::{Error, Result};
    pub use crate::grid::sanitize::{sanitize, Sanitized};
    pub use crate::grid::{Grid, GridPos, RawCell, RawGrid, Terrain};
    pub use crate::obstacles::{
        build_obstacle_stacks, build_tc_obstacles, ObstacleStackEntry, TcObstacleEntry,
    };
    pub use crate::station::{parse_stations, StationCode, StationRole, StationSite};
    pub use crate::voids::{extract_void_regions, zone_bounds, ZoneBounds};
}
