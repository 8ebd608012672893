//! Builder that turns the outputs of every compilation stage into one [`Configuration`].
//!
//! Stages hand their results to [`ConfigurationBuilder`] as they finish. The builder holds
//! no half-built configuration: [`ConfigurationBuilder::build`] either produces a complete
//! value or fails, and it always fails if any stage reported an error.
use tracing::debug;

use crate::config::model::{
    Configuration, Coordinate, DropOrPick, Station, VoidRegion, Zone, DEFAULT_HARDWARE_INDEX,
};
use crate::config::Parameters;
use crate::diagnostics::{Diagnostics, StationError, Warning};
use crate::error::{Error, Result};
use crate::grid::GridPos;
use crate::obstacles::{ObstacleStackEntry, TcObstacleEntry};
use crate::station::StationSite;
use crate::voids::ZoneBounds;

/// Accumulates stage results and yields an immutable [`Configuration`].
#[derive(Clone, Debug)]
pub struct ConfigurationBuilder {
    parameters: Parameters,
    diagnostics: Diagnostics,
    stations: Option<Vec<StationSite>>,
    bounds: Option<ZoneBounds>,
    voids: Option<Vec<VoidRegion>>,
    obstacle_stacks: Option<Vec<ObstacleStackEntry>>,
    tc_obstacles: Option<Vec<TcObstacleEntry>>,
}

impl ConfigurationBuilder {
    /// Creates a builder for the given parameters.
    pub fn new(parameters: Parameters) -> Self {
        Self {
            parameters,
            diagnostics: Diagnostics::default(),
            stations: None,
            bounds: None,
            voids: None,
            obstacle_stacks: None,
            tc_obstacles: None,
        }
    }

    /// Records warnings raised by earlier stages.
    pub fn with_warnings(mut self, warnings: impl IntoIterator<Item = Warning>) -> Self {
        self.diagnostics.extend_warnings(warnings);
        self
    }

    /// Sets the station parser's result. A failed result makes [`Self::build`] fail.
    pub fn with_stations(
        mut self,
        stations: std::result::Result<Vec<StationSite>, Vec<StationError>>,
    ) -> Self {
        match stations {
            Ok(stations) => self.stations = Some(stations),
            Err(errors) => self.diagnostics.extend_errors(errors),
        }
        self
    }

    /// Sets the zone bounding box and the voids carved out of it.
    pub fn with_zone(mut self, bounds: ZoneBounds, voids: Vec<VoidRegion>) -> Self {
        self.bounds = Some(bounds);
        self.voids = Some(voids);
        self
    }

    /// Sets the per-cell SM-obstacle stacks.
    pub fn with_obstacle_stacks(mut self, stacks: Vec<ObstacleStackEntry>) -> Self {
        self.obstacle_stacks = Some(stacks);
        self
    }

    /// Sets the per-cell TC-obstacle entries.
    pub fn with_tc_obstacles(mut self, entries: Vec<TcObstacleEntry>) -> Self {
        self.tc_obstacles = Some(entries);
        self
    }

    /// Diagnostics collected so far.
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Assembles the configuration.
    ///
    /// Returns [`Error::Rejected`] if any stage reported errors, and [`Error::Other`] if a
    /// stage result was never supplied.
    pub fn build(self) -> Result<Configuration> {
        if self.diagnostics.has_errors() {
            return Err(Error::Rejected(self.diagnostics));
        }

        let sites = self.stations.ok_or_else(|| missing("stations"))?;
        let bounds = self.bounds.ok_or_else(|| missing("zone"))?;
        let voids = self.voids.ok_or_else(|| missing("zone"))?;
        let obstacle_stacks = self.obstacle_stacks.ok_or_else(|| missing("obstacle stacks"))?;
        let tc_obstacles = self.tc_obstacles.ok_or_else(|| missing("TC obstacles"))?;

        let params = self.parameters;
        let zone = Zone {
            name: params.zone_group.clone(),
            from_x: 0,
            to_x: bounds.max_x,
            from_y: 0,
            to_y: bounds.max_y,
            from_z: 0,
            to_z: bounds.max_z,
            voids,
        };

        let z = params.station_height();
        let location = |pos: &GridPos, capacity: u32| DropOrPick {
            capacity,
            hardware_index: DEFAULT_HARDWARE_INDEX,
            zone_group: params.zone_group.clone(),
            coordinate: Coordinate::new(pos.x, pos.y, z),
        };
        let stations: Vec<Station> = sites
            .iter()
            .map(|site| Station {
                code: site.code,
                drop: site
                    .drop
                    .iter()
                    .map(|pos| location(pos, params.drop_capacity))
                    .collect(),
                pick: site
                    .pick
                    .iter()
                    .map(|pos| location(pos, params.pick_capacity))
                    .collect(),
            })
            .collect();

        debug!(
            "Assembled configuration: {} station(s), {} void(s), {} stack(s), {} TC obstacle(s).",
            stations.len(),
            zone.voids.len(),
            obstacle_stacks.len(),
            tc_obstacles.len()
        );

        Ok(Configuration {
            zone_group: params.zone_group.clone(),
            zones: vec![zone],
            stations,
            obstacle_stacks,
            tc_obstacles,
            grid_height: params.grid_height,
            drop_capacity: params.drop_capacity,
            pick_capacity: params.pick_capacity,
        })
    }
}

fn missing(part: &str) -> Error {
    Error::Other(format!("configuration assembled without {part}"))
}
