//! Canonical JSON documents consumed by the simulator.
//!
//! Each document borrows from a [`Configuration`] and renders through
//! [`to_canonical_json`]: object keys sorted at every level, arrays kept in order, and a
//! four-space indent. Rendering the same configuration always yields the same bytes.
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};

use crate::config::model::{Configuration, Station, Zone};
use crate::error::{Error, Result};
use crate::obstacles::{ObstacleStackEntry, TcObstacleEntry};

const INDENT: &[u8] = b"    ";

/// A serializable simulator input with a conventional file name.
pub trait Document: Serialize {
    /// File name the simulator expects for this document.
    const FILE_NAME: &'static str;

    /// Render the document in canonical form.
    fn to_json(&self) -> Result<String> {
        to_canonical_json(self)
    }
}

/// Zones with their voids, and stations with their drop and pick locations.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct ZonesAndStationsDocument<'a> {
    pub zones: &'a [Zone],
    pub stations: &'a [Station],
}

impl Document for ZonesAndStationsDocument<'_> {
    const FILE_NAME: &'static str = "reset-5.json";
}

/// Every SM-obstacle cell as an inaccessible stack.
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SmObstacleStacksDocument<'a> {
    pub zone_group: &'a str,
    pub is_skycar_accessible: bool,
    pub stacks: &'a [ObstacleStackEntry],
}

impl Document for SmObstacleStacksDocument<'_> {
    const FILE_NAME: &'static str = "reset-3.json";
}

/// Every TC-obstacle cell as a pillar error.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct TcObstacleDocument<'a> {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub skycar_sid: u32,
    pub error_id: u32,
    pub two_d: &'a [TcObstacleEntry],
}

impl Document for TcObstacleDocument<'_> {
    const FILE_NAME: &'static str = "reset-6.json";
}

impl Configuration {
    pub fn zones_and_stations_document(&self) -> ZonesAndStationsDocument<'_> {
        ZonesAndStationsDocument {
            zones: self.zones(),
            stations: self.stations(),
        }
    }

    pub fn obstacle_stacks_document(&self) -> SmObstacleStacksDocument<'_> {
        SmObstacleStacksDocument {
            zone_group: self.zone_group(),
            is_skycar_accessible: false,
            stacks: self.obstacle_stacks(),
        }
    }

    pub fn tc_obstacles_document(&self) -> TcObstacleDocument<'_> {
        TcObstacleDocument {
            kind: "Pillar",
            skycar_sid: 0,
            error_id: 0,
            two_d: self.tc_obstacles(),
        }
    }
}

/// All documents of a configuration, rendered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Documents {
    pub zones_and_stations: String,
    pub obstacle_stacks: String,
    pub tc_obstacles: String,
}

impl Documents {
    /// Render every document of `config`.
    pub fn render(config: &Configuration) -> Result<Self> {
        Ok(Self {
            zones_and_stations: config.zones_and_stations_document().to_json()?,
            obstacle_stacks: config.obstacle_stacks_document().to_json()?,
            tc_obstacles: config.tc_obstacles_document().to_json()?,
        })
    }

    /// Documents paired with their conventional file names.
    pub fn files(&self) -> [(&'static str, &str); 3] {
        [
            (
                ZonesAndStationsDocument::FILE_NAME,
                self.zones_and_stations.as_str(),
            ),
            (
                SmObstacleStacksDocument::FILE_NAME,
                self.obstacle_stacks.as_str(),
            ),
            (TcObstacleDocument::FILE_NAME, self.tc_obstacles.as_str()),
        ]
    }
}

/// Serialize `value` as pretty JSON with lexicographically sorted object keys.
pub fn to_canonical_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let value = sort_keys(serde_json::to_value(value)?);

    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    String::from_utf8(buf).map_err(|e| Error::Other(format!("non UTF-8 JSON output: {e}")))
}

// Keeps output sorted even when a downstream crate enables serde_json's `preserve_order`.
fn sort_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            let sorted: Map<String, Value> = entries
                .into_iter()
                .map(|(k, v)| (k, sort_keys(v)))
                .collect();
            Value::Object(sorted)
        }
        Value::Array(items) => Value::Array(items.into_iter().map(sort_keys).collect()),
        other => other,
    }
}
