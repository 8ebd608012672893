//! Immutable configuration model handed to the simulator documents.
//!
//! Field names serialize in the simulator's camelCase convention.
use serde::Serialize;

use crate::config::Parameters;
use crate::obstacles::{ObstacleStackEntry, TcObstacleEntry};

/// Hardware index assigned to every drop and pick location.
pub const DEFAULT_HARDWARE_INDEX: u32 = 1;

/// A point in facility space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Coordinate {
    pub x: usize,
    pub y: usize,
    pub z: usize,
}

impl Coordinate {
    pub fn new(x: usize, y: usize, z: usize) -> Self {
        Self { x, y, z }
    }
}

/// Rectangular volume of obstructed cells, extruded over the full height.
///
/// Bounds are inclusive grid coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "VoidVolume")]
pub struct VoidRegion {
    pub from_x: usize,
    pub to_x: usize,
    pub from_y: usize,
    pub to_y: usize,
    pub from_z: usize,
    pub to_z: usize,
}

impl VoidRegion {
    /// Whether `(x, y)` lies inside the region's footprint.
    pub fn contains(&self, x: usize, y: usize) -> bool {
        (self.from_x..=self.to_x).contains(&x) && (self.from_y..=self.to_y).contains(&y)
    }

    /// Number of grid cells in the region's footprint.
    pub fn area(&self) -> usize {
        (self.to_x - self.from_x + 1) * (self.to_y - self.from_y + 1)
    }

    /// Lower corner of the volume.
    pub fn from_corner(&self) -> Coordinate {
        Coordinate::new(self.from_x, self.from_y, self.from_z)
    }

    /// Upper corner of the volume.
    pub fn to_corner(&self) -> Coordinate {
        Coordinate::new(self.to_x, self.to_y, self.to_z)
    }
}

#[derive(Serialize)]
struct VoidVolume {
    from: Coordinate,
    to: Coordinate,
}

impl From<VoidRegion> for VoidVolume {
    fn from(region: VoidRegion) -> Self {
        Self {
            from: region.from_corner(),
            to: region.to_corner(),
        }
    }
}

/// Bounding region of the facility and the voids carved out of it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Zone {
    pub name: String,
    pub from_x: usize,
    pub to_x: usize,
    pub from_y: usize,
    pub to_y: usize,
    pub from_z: usize,
    pub to_z: usize,
    pub voids: Vec<VoidRegion>,
}

/// A drop or pick location of a station.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DropOrPick {
    pub capacity: u32,
    pub hardware_index: u32,
    pub zone_group: String,
    pub coordinate: Coordinate,
}

/// A station with its drop and pick locations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Station {
    pub code: u32,
    pub drop: Vec<DropOrPick>,
    pub pick: Vec<DropOrPick>,
}

/// The compiled facility configuration.
///
/// Only [`crate::config::assembler::ConfigurationBuilder`] creates values of this type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    pub(crate) zone_group: String,
    pub(crate) zones: Vec<Zone>,
    pub(crate) stations: Vec<Station>,
    pub(crate) obstacle_stacks: Vec<ObstacleStackEntry>,
    pub(crate) tc_obstacles: Vec<TcObstacleEntry>,
    pub(crate) grid_height: usize,
    pub(crate) drop_capacity: u32,
    pub(crate) pick_capacity: u32,
}

impl Configuration {
    pub fn zone_group(&self) -> &str {
        &self.zone_group
    }

    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn obstacle_stacks(&self) -> &[ObstacleStackEntry] {
        &self.obstacle_stacks
    }

    pub fn tc_obstacles(&self) -> &[TcObstacleEntry] {
        &self.tc_obstacles
    }

    pub fn grid_height(&self) -> usize {
        self.grid_height
    }

    pub fn drop_capacity(&self) -> u32 {
        self.drop_capacity
    }

    pub fn pick_capacity(&self) -> u32 {
        self.pick_capacity
    }

    /// The parameters this configuration was compiled with.
    pub fn parameters(&self) -> Parameters {
        Parameters::new(self.grid_height)
            .with_drop_capacity(self.drop_capacity)
            .with_pick_capacity(self.pick_capacity)
            .with_zone_group(self.zone_group.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region() -> VoidRegion {
        VoidRegion {
            from_x: 1,
            to_x: 3,
            from_y: 2,
            to_y: 2,
            from_z: 0,
            to_z: 5,
        }
    }

    #[test]
    fn void_region_geometry() {
        let r = region();
        assert_eq!(r.area(), 3);
        assert!(r.contains(1, 2) && r.contains(3, 2));
        assert!(!r.contains(0, 2) && !r.contains(2, 3));
    }

    #[test]
    fn void_region_serializes_as_from_to_corners() {
        let value = serde_json::to_value(region()).expect("serializable");
        assert_eq!(
            value,
            serde_json::json!({
                "from": {"x": 1, "y": 2, "z": 0},
                "to": {"x": 3, "y": 2, "z": 5},
            })
        );
    }

    #[test]
    fn drop_or_pick_uses_camel_case_keys() {
        let location = DropOrPick {
            capacity: 2,
            hardware_index: DEFAULT_HARDWARE_INDEX,
            zone_group: "C".into(),
            coordinate: Coordinate::new(1, 2, 3),
        };
        let value = serde_json::to_value(&location).expect("serializable");
        assert_eq!(value["hardwareIndex"], 1);
        assert_eq!(value["zoneGroup"], "C");
        assert_eq!(value["coordinate"]["z"], 3);
    }
}
