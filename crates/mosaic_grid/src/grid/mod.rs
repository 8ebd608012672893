//! Grid types for the painted facility layout.
//!
//! This module defines the loosely typed [`RawGrid`] handed over by an editor or spreadsheet
//! reader, and the sanitized, rectangular [`Grid`] every later stage works on. Cells are
//! addressed by `(x, y)` where `x` is the column and `y` the row.
use std::fmt;

use serde::{Deserialize, Serialize};

pub mod sanitize;

/// Terrain codes a cell may hold besides station codes.
pub const TERRAIN_CODES: [u32; 4] = [0, 1, 2, 3];

/// Smallest value that encodes a station.
pub const STATION_CODE_MIN: u32 = 10;

/// Largest grid dimension supported by the reference deployment.
pub const MAX_GRID_SIZE: usize = 50;

/// Code substituted for any cell that cannot be interpreted.
pub const FALLBACK_CODE: u32 = Terrain::Both as u32;

/// Obstacle class of a non-station cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u32)]
pub enum Terrain {
    /// Free space.
    Empty = 0,
    /// A car cannot enter the cell, e.g. a physical pillar.
    SmObstacle = 1,
    /// Bins may stack but cars cannot pass through.
    TcObstacle = 2,
    /// Both SM and TC obstacle.
    Both = 3,
}

impl Terrain {
    /// Decode a terrain code. Station codes and unknown values yield `None`.
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(Terrain::Empty),
            1 => Some(Terrain::SmObstacle),
            2 => Some(Terrain::TcObstacle),
            3 => Some(Terrain::Both),
            _ => None,
        }
    }

    /// Whether the cell is carved out of the zone as a void (SM obstacle).
    #[inline]
    pub fn is_void(self) -> bool {
        matches!(self, Terrain::SmObstacle | Terrain::Both)
    }

    /// Whether the cell blocks traversal while still allowing bins (TC obstacle).
    #[inline]
    pub fn is_tc_obstacle(self) -> bool {
        matches!(self, Terrain::TcObstacle | Terrain::Both)
    }
}

/// Returns `true` if `code` is a terrain code or a station code.
#[inline]
pub fn is_valid_code(code: u32) -> bool {
    TERRAIN_CODES.contains(&code) || code >= STATION_CODE_MIN
}

/// Position of a cell in the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridPos {
    /// Column index.
    pub x: usize,
    /// Row index.
    pub y: usize,
}

impl GridPos {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// A single unvalidated cell as read from an editor or spreadsheet.
#[derive(Clone, Debug, PartialEq)]
pub enum RawCell {
    Int(i64),
    Float(f64),
    Text(String),
    Blank,
}

impl RawCell {
    /// Interpret the cell as a grid code, or `None` if it is not an acceptable value.
    ///
    /// Integral floats and numeric text are accepted as the integer they spell.
    pub fn as_code(&self) -> Option<u32> {
        let value = match self {
            RawCell::Int(v) => *v,
            RawCell::Float(f) => integral(*f)?,
            RawCell::Text(s) => {
                let s = s.trim();
                match s.parse::<i64>() {
                    Ok(v) => v,
                    Err(_) => integral(s.parse::<f64>().ok()?)?,
                }
            }
            RawCell::Blank => return None,
        };
        let code = u32::try_from(value).ok()?;
        is_valid_code(code).then_some(code)
    }
}

/// The integer a float spells, if it is finite, whole and within `i64`.
fn integral(f: f64) -> Option<i64> {
    if !f.is_finite() || f.fract() != 0.0 {
        return None;
    }
    if f < i64::MIN as f64 || f > i64::MAX as f64 {
        return None;
    }
    Some(f as i64)
}

impl fmt::Display for RawCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawCell::Int(v) => write!(f, "{v}"),
            RawCell::Float(v) => write!(f, "{v}"),
            RawCell::Text(s) => f.write_str(s),
            RawCell::Blank => f.write_str("blank"),
        }
    }
}

impl From<i64> for RawCell {
    fn from(value: i64) -> Self {
        RawCell::Int(value)
    }
}

impl From<i32> for RawCell {
    fn from(value: i32) -> Self {
        RawCell::Int(value.into())
    }
}

impl From<u32> for RawCell {
    fn from(value: u32) -> Self {
        RawCell::Int(value.into())
    }
}

impl From<f64> for RawCell {
    fn from(value: f64) -> Self {
        RawCell::Float(value)
    }
}

impl From<&str> for RawCell {
    fn from(value: &str) -> Self {
        RawCell::Text(value.to_owned())
    }
}

impl From<String> for RawCell {
    fn from(value: String) -> Self {
        RawCell::Text(value)
    }
}

impl<T: Into<RawCell>> From<Option<T>> for RawCell {
    fn from(value: Option<T>) -> Self {
        value.map_or(RawCell::Blank, Into::into)
    }
}

/// Unvalidated, possibly ragged grid. Rows are listed top to bottom.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RawGrid {
    rows: Vec<Vec<RawCell>>,
}

impl RawGrid {
    pub fn new(rows: Vec<Vec<RawCell>>) -> Self {
        Self { rows }
    }

    /// Build a raw grid from anything convertible into [`RawCell`]s.
    pub fn from_rows<R, T>(rows: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = T>,
        T: Into<RawCell>,
    {
        Self {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        }
    }

    /// Width of the widest row.
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Cell at `(x, y)`. Positions past the end of a short row read as [`RawCell::Blank`].
    pub fn cell(&self, x: usize, y: usize) -> &RawCell {
        const BLANK: &RawCell = &RawCell::Blank;
        self.rows.get(y).and_then(|row| row.get(x)).unwrap_or(BLANK)
    }
}

/// Sanitized rectangular grid. Every cell holds a terrain code or a station code.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<u32>,
}

impl Grid {
    /// Only the sanitizer builds grids, so every cell is known to be valid.
    pub(crate) fn from_cells(width: usize, height: usize, cells: Vec<u32>) -> Self {
        debug_assert_eq!(cells.len(), width * height, "cell count must match size");
        debug_assert!(cells.iter().all(|c| is_valid_code(*c)));
        Self {
            width,
            height,
            cells,
        }
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Code at `(x, y)`, or `None` if out of bounds.
    pub fn get(&self, x: usize, y: usize) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.cells[y * self.width + x])
    }

    /// Terrain at `(x, y)`. Station cells and out-of-bounds positions yield `None`.
    pub fn terrain(&self, x: usize, y: usize) -> Option<Terrain> {
        self.get(x, y).and_then(Terrain::from_code)
    }

    #[inline]
    pub fn is_void(&self, x: usize, y: usize) -> bool {
        self.terrain(x, y).is_some_and(Terrain::is_void)
    }

    #[inline]
    pub fn is_tc_obstacle(&self, x: usize, y: usize) -> bool {
        self.terrain(x, y).is_some_and(Terrain::is_tc_obstacle)
    }

    /// Cells in row-major order as `(x, y, code)`.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, u32)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, code)| (i % width, i / width, *code))
    }

    /// Rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.cells.chunks(self.width)
    }
}
