//! Per-cell obstacle listings.
//!
//! Unlike [`crate::voids`], these builders never merge cells: each obstacle cell becomes its
//! own entry, for simulator inputs that expect single stacks.
use std::fmt;

use serde::{Serialize, Serializer};

use crate::grid::Grid;

/// A single SM-obstacle stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct ObstacleStackEntry {
    pub x: usize,
    pub y: usize,
}

/// A single TC-obstacle cell. Serializes as the string `"x,y"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TcObstacleEntry {
    pub x: usize,
    pub y: usize,
}

impl fmt::Display for TcObstacleEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl Serialize for TcObstacleEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Every SM-obstacle cell (terrain 1 or 3), in row-major order.
pub fn build_obstacle_stacks(grid: &Grid) -> Vec<ObstacleStackEntry> {
    grid.cells()
        .filter(|(x, y, _)| grid.is_void(*x, *y))
        .map(|(x, y, _)| ObstacleStackEntry { x, y })
        .collect()
}

/// Every TC-obstacle cell (terrain 2 or 3), column by column: `x` ascending, then `y`.
pub fn build_tc_obstacles(grid: &Grid) -> Vec<TcObstacleEntry> {
    (0..grid.width())
        .flat_map(|x| (0..grid.height()).map(move |y| (x, y)))
        .filter(|(x, y)| grid.is_tc_obstacle(*x, *y))
        .map(|(x, y)| TcObstacleEntry { x, y })
        .collect()
}
