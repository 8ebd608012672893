//! Station extraction and validation.
//!
//! A cell value `v >= 10` encodes a station: `v / 10` is the station id and `v % 10` its role.
//! Role `0` is a combined drop & pick cell, `1` a drop cell, `2` a pick cell. Drop and pick
//! cells sharing an id form one station; a combined cell forms a station on its own.
//!
//! [`parse_stations`] scans the whole grid, collects every violation, and only then decides
//! whether the layout is usable, so callers can show all problems at once.
use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::diagnostics::StationError;
use crate::grid::{Grid, GridPos, STATION_CODE_MIN};

/// What a station cell is used for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StationRole {
    /// Drop and pick at the same cell (value ends with 0).
    Combined,
    /// Drop only (value ends with 1).
    Drop,
    /// Pick only (value ends with 2).
    Pick,
}

impl StationRole {
    pub fn from_digit(digit: u32) -> Option<Self> {
        match digit {
            0 => Some(StationRole::Combined),
            1 => Some(StationRole::Drop),
            2 => Some(StationRole::Pick),
            _ => None,
        }
    }
}

impl fmt::Display for StationRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StationRole::Combined => "drop & pick",
            StationRole::Drop => "drop",
            StationRole::Pick => "pick",
        })
    }
}

/// A decoded station cell value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StationCode {
    pub value: u32,
    pub id: u32,
    pub role: StationRole,
}

impl StationCode {
    /// Decode a station value using integer division and remainder only.
    pub fn decode(value: u32) -> Result<Self, StationError> {
        debug_assert!(value >= STATION_CODE_MIN, "not a station value: {value}");
        let role = StationRole::from_digit(value % 10)
            .ok_or(StationError::InvalidStationRole { value })?;
        Ok(Self {
            value,
            id: value / 10,
            role,
        })
    }
}

/// A validated station as found in the grid, before parameters are applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StationSite {
    /// Sequential station number starting at 1, in ascending value order.
    pub code: u32,
    /// Id shared by the station's cells.
    pub id: u32,
    pub drop: Vec<GridPos>,
    pub pick: Vec<GridPos>,
}

#[derive(Default)]
struct IdUsage {
    combined: Vec<GridPos>,
    drop: Vec<GridPos>,
    pick: Vec<GridPos>,
}

impl IdUsage {
    fn is_mixed(&self) -> bool {
        !self.combined.is_empty() && !(self.drop.is_empty() && self.pick.is_empty())
    }

    fn missing_role(&self) -> Option<StationRole> {
        if !self.combined.is_empty() {
            return None;
        }
        match (self.drop.is_empty(), self.pick.is_empty()) {
            (false, true) => Some(StationRole::Pick),
            (true, false) => Some(StationRole::Drop),
            _ => None,
        }
    }
}

/// Extract and validate all stations in `grid`.
///
/// On success returns the stations ordered by their lowest cell value and numbered `1..=N`.
/// An empty list is a valid result. On failure returns every violation found, grouped by
/// kind: invalid roles, duplicated values, mixed ids, then missing drop/pick pairs.
pub fn parse_stations(grid: &Grid) -> Result<Vec<StationSite>, Vec<StationError>> {
    // Stable sort keeps row-major order between equal values.
    let mut cells: Vec<(u32, GridPos)> = grid
        .cells()
        .filter(|(_, _, code)| *code >= STATION_CODE_MIN)
        .map(|(x, y, code)| (code, GridPos::new(x, y)))
        .collect();
    cells.sort_by_key(|(code, _)| *code);

    let mut invalid = Vec::new();
    let mut duplicates = Vec::new();
    let mut by_id: BTreeMap<u32, IdUsage> = BTreeMap::new();

    for run in cells.chunk_by(|a, b| a.0 == b.0) {
        let value = run[0].0;
        let code = match StationCode::decode(value) {
            Ok(code) => code,
            Err(e) => {
                invalid.push(e);
                continue;
            }
        };
        if run.len() > 1 {
            duplicates.push(StationError::DuplicateStationValue {
                value,
                cells: run.len(),
            });
        }

        let usage = by_id.entry(code.id).or_default();
        let slot = match code.role {
            StationRole::Combined => &mut usage.combined,
            StationRole::Drop => &mut usage.drop,
            StationRole::Pick => &mut usage.pick,
        };
        slot.extend(run.iter().map(|(_, pos)| *pos));
    }

    let mixed = by_id
        .iter()
        .filter(|(_, usage)| usage.is_mixed())
        .map(|(id, _)| StationError::MixedStationId { id: *id });
    let missing = by_id.iter().filter_map(|(id, usage)| {
        usage
            .missing_role()
            .map(|missing| StationError::MissingStationPair { id: *id, missing })
    });

    let errors: Vec<StationError> = invalid
        .into_iter()
        .chain(duplicates)
        .chain(mixed)
        .chain(missing)
        .collect();
    if !errors.is_empty() {
        debug!("Station validation found {} error(s).", errors.len());
        return Err(errors);
    }

    let stations: Vec<StationSite> = by_id
        .into_iter()
        .zip(1..)
        .map(|((id, usage), code)| {
            let mut drop = usage.combined.clone();
            drop.extend(usage.drop);
            let mut pick = usage.combined;
            pick.extend(usage.pick);
            StationSite {
                code,
                id,
                drop,
                pick,
            }
        })
        .collect();

    debug!("Parsed {} station(s).", stations.len());
    Ok(stations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::sanitize::sanitize;
    use crate::grid::RawGrid;

    fn grid(rows: Vec<Vec<i64>>) -> Grid {
        sanitize(&RawGrid::from_rows(rows))
            .expect("sanitize succeeds")
            .grid
    }

    #[test]
    fn decode_uses_integer_division() {
        let code = StationCode::decode(231).expect("valid station value");
        assert_eq!(code.id, 23);
        assert_eq!(code.role, StationRole::Drop);

        let err = StationCode::decode(17).expect_err("role 7 is invalid");
        assert_eq!(err, StationError::InvalidStationRole { value: 17 });
    }

    #[test]
    fn grid_without_station_cells_yields_no_stations() {
        let stations = parse_stations(&grid(vec![vec![0, 1], vec![2, 3]])).expect("valid");
        assert!(stations.is_empty());
    }

    #[test]
    fn combined_cell_populates_drop_and_pick() {
        let stations = parse_stations(&grid(vec![vec![0, 10], vec![0, 0]])).expect("valid");
        assert_eq!(stations.len(), 1);
        assert_eq!(stations[0].code, 1);
        assert_eq!(stations[0].id, 1);
        assert_eq!(stations[0].drop, vec![GridPos::new(1, 0)]);
        assert_eq!(stations[0].pick, vec![GridPos::new(1, 0)]);
    }

    #[test]
    fn paired_cells_form_one_station() {
        let stations =
            parse_stations(&grid(vec![vec![22, 0, 21], vec![0, 10, 0]])).expect("valid");
        assert_eq!(stations.len(), 2);

        assert_eq!(stations[0].id, 1);
        assert_eq!(stations[0].code, 1);
        assert_eq!(stations[1].id, 2);
        assert_eq!(stations[1].code, 2);
        assert_eq!(stations[1].drop, vec![GridPos::new(2, 0)]);
        assert_eq!(stations[1].pick, vec![GridPos::new(0, 0)]);
    }

    #[test]
    fn stations_are_numbered_by_ascending_value() {
        let stations =
            parse_stations(&grid(vec![vec![50, 0, 30], vec![0, 70, 0]])).expect("valid");
        let ids: Vec<u32> = stations.iter().map(|s| s.id).collect();
        let codes: Vec<u32> = stations.iter().map(|s| s.code).collect();
        assert_eq!(ids, vec![3, 5, 7]);
        assert_eq!(codes, vec![1, 2, 3]);
    }

    #[test]
    fn invalid_role_is_reported_with_its_value() {
        let errors = parse_stations(&grid(vec![vec![15, 0]])).expect_err("invalid role");
        assert_eq!(errors, vec![StationError::InvalidStationRole { value: 15 }]);
    }

    #[test]
    fn duplicate_value_is_reported() {
        let errors = parse_stations(&grid(vec![vec![21, 21, 22]])).expect_err("duplicate");
        assert_eq!(
            errors,
            vec![StationError::DuplicateStationValue {
                value: 21,
                cells: 2
            }]
        );
    }

    #[test]
    fn combined_id_reused_as_drop_is_mixed() {
        let errors = parse_stations(&grid(vec![vec![30, 31]])).expect_err("mixed id");
        assert_eq!(errors, vec![StationError::MixedStationId { id: 3 }]);
    }

    #[test]
    fn unpaired_drop_and_pick_are_reported() {
        let errors = parse_stations(&grid(vec![vec![31, 0, 42]])).expect_err("missing pairs");
        assert_eq!(
            errors,
            vec![
                StationError::MissingStationPair {
                    id: 3,
                    missing: StationRole::Pick
                },
                StationError::MissingStationPair {
                    id: 4,
                    missing: StationRole::Drop
                },
            ]
        );
    }

    #[test]
    fn all_violations_are_collected_in_one_pass() {
        let errors = parse_stations(&grid(vec![
            vec![19, 21, 21],
            vec![22, 50, 51],
            vec![61, 0, 0],
        ]))
        .expect_err("several violations");

        assert_eq!(
            errors,
            vec![
                StationError::InvalidStationRole { value: 19 },
                StationError::DuplicateStationValue {
                    value: 21,
                    cells: 2
                },
                StationError::MixedStationId { id: 5 },
                StationError::MissingStationPair {
                    id: 6,
                    missing: StationRole::Pick
                },
            ]
        );
    }
}
