//! Facility parameters and the assembled configuration model.
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub mod assembler;
pub mod model;

/// Lowest supported grid height in bins.
pub const MIN_GRID_HEIGHT: usize = 3;

/// Stations sit this many bins below the top of the grid.
pub const STATION_DEPTH: usize = 2;

pub const DEFAULT_GRID_HEIGHT: usize = 15;
pub const DEFAULT_DROP_CAPACITY: u32 = 2;
pub const DEFAULT_PICK_CAPACITY: u32 = 1;
pub const DEFAULT_ZONE_GROUP: &str = "C";

/// Scalar facility parameters entered alongside the grid.
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Parameters {
    /// Height of the grid in bins (`z_size`).
    pub grid_height: usize,
    /// Number of bins a drop location holds.
    pub drop_capacity: u32,
    /// Number of bins a pick location holds.
    pub pick_capacity: u32,
    /// Zone group label used for the zone, stations and obstacle stacks.
    pub zone_group: String,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            grid_height: DEFAULT_GRID_HEIGHT,
            drop_capacity: DEFAULT_DROP_CAPACITY,
            pick_capacity: DEFAULT_PICK_CAPACITY,
            zone_group: DEFAULT_ZONE_GROUP.to_owned(),
        }
    }
}

impl Parameters {
    /// Creates new [`Parameters`] with the given grid height and default capacities.
    pub fn new(grid_height: usize) -> Self {
        Self {
            grid_height,
            ..Default::default()
        }
    }

    /// Sets the grid height.
    pub fn with_grid_height(mut self, grid_height: usize) -> Self {
        self.grid_height = grid_height;
        self
    }

    /// Sets the drop capacity.
    pub fn with_drop_capacity(mut self, drop_capacity: u32) -> Self {
        self.drop_capacity = drop_capacity;
        self
    }

    /// Sets the pick capacity.
    pub fn with_pick_capacity(mut self, pick_capacity: u32) -> Self {
        self.pick_capacity = pick_capacity;
        self
    }

    /// Sets the zone group label.
    pub fn with_zone_group(mut self, zone_group: impl Into<String>) -> Self {
        self.zone_group = zone_group.into();
        self
    }

    /// Height at which drop and pick locations are placed.
    pub fn station_height(&self) -> usize {
        self.grid_height.saturating_sub(STATION_DEPTH)
    }

    /// Validates the parameters, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if self.grid_height < MIN_GRID_HEIGHT {
            return Err(Error::InvalidConfig(format!(
                "grid_height must be >= {MIN_GRID_HEIGHT}, got {}",
                self.grid_height
            )));
        }
        if self.drop_capacity < 1 {
            return Err(Error::InvalidConfig("drop_capacity must be >= 1".into()));
        }
        if self.pick_capacity < 1 {
            return Err(Error::InvalidConfig("pick_capacity must be >= 1".into()));
        }
        if self.zone_group.trim().is_empty() {
            return Err(Error::InvalidConfig("zone_group must not be blank".into()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let params = Parameters::default();
        params.validate().expect("defaults validate");
        assert_eq!(params.grid_height, 15);
        assert_eq!(params.station_height(), 13);
        assert_eq!(params.zone_group, "C");
    }

    #[test]
    fn builder_sets_fields() {
        let params = Parameters::new(5)
            .with_drop_capacity(4)
            .with_pick_capacity(3)
            .with_zone_group("A");
        assert_eq!(params.grid_height, 5);
        assert_eq!(params.drop_capacity, 4);
        assert_eq!(params.pick_capacity, 3);
        assert_eq!(params.zone_group, "A");
        assert_eq!(params.with_grid_height(9).grid_height, 9);
    }

    #[test]
    fn validate_rejects_out_of_range_values() {
        let cases = [
            Parameters::new(2),
            Parameters::default().with_drop_capacity(0),
            Parameters::default().with_pick_capacity(0),
            Parameters::default().with_zone_group("  "),
        ];
        for params in cases {
            let err = params.validate().expect_err("invalid parameters");
            matches!(err, Error::InvalidConfig(_))
                .then_some(())
                .expect("invalid config error");
        }
    }

    #[test]
    fn deserializes_with_defaults_for_missing_fields() {
        let params: Parameters =
            serde_json::from_str(r#"{"grid_height": 8}"#).expect("valid json");
        assert_eq!(params, Parameters::new(8));
    }
}
