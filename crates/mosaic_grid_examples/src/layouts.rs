//! Hand-painted layouts used by the example binaries.
use mosaic_grid::prelude::{Parameters, RawCell, RawGrid};

/// A 12x8 warehouse with a pillar block, a TC band and three stations.
pub const COMPACT_WAREHOUSE: &str = "
    0  0  0  0  0  0  0  0  0  0  0 10
    0  1  1  0  0  2  2  0  0  0  0  0
    0  1  1  0  0  2  2  0  0  1  0  0
    0  0  0  0  0  0  0  0  0  1  0  0
    21 0  0  3  3  3  0  0  0  1  0 30
    22 0  0  3  3  3  0  0  0  0  0  0
    0  0  0  0  0  0  0  0  1  1  1  0
    0  0  0  0  0  0  0  0  1  1  1  0
";

/// A layout with typos a user might paint: a stray 5, a blank, a duplicate and a lone drop.
pub const FAULTY_WAREHOUSE: &str = "
    0  0  5  0  21
    0  1  _  0  21
    0  1  0  0  22
    41 0  0  30 31
";

/// Parse whitespace-separated rows; `_` marks a blank cell.
pub fn parse_layout(text: &str) -> RawGrid {
    RawGrid::new(
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| {
                line.split_whitespace()
                    .map(|token| match token {
                        "_" => RawCell::Blank,
                        other => match other.parse::<i64>() {
                            Ok(v) => RawCell::Int(v),
                            Err(_) => RawCell::Text(other.to_owned()),
                        },
                    })
                    .collect()
            })
            .collect(),
    )
}

/// Parameters matching a small demo facility.
pub fn demo_parameters() -> Parameters {
    Parameters::new(8)
        .with_drop_capacity(2)
        .with_pick_capacity(1)
        .with_zone_group("C")
}
