#![allow(dead_code)]

use std::time::Duration;

use criterion::{Criterion, Throughput};
use mosaic_grid::prelude::RawGrid;

pub const SAMPLE_SIZE: usize = 20;
pub const WARM_UP: Duration = Duration::from_secs(1);
pub const MEASUREMENT_TIME: Duration = Duration::from_secs(2);

pub const SIZES: [usize; 4] = [10, 20, 35, 50];

pub fn default_criterion() -> Criterion {
    Criterion::default()
        .configure_from_args()
        .sample_size(SAMPLE_SIZE)
        .warm_up_time(WARM_UP)
        .measurement_time(MEASUREMENT_TIME)
}

pub fn elements_throughput(elements: usize) -> Throughput {
    Throughput::Elements(elements.max(1) as u64)
}

/// Square warehouse layout with pillar rows, TC bands and a station pair per ten columns.
pub fn warehouse_grid(size: usize) -> RawGrid {
    RawGrid::from_rows((0..size).map(|y| {
        (0..size)
            .map(|x| {
                if y == 0 && x % 10 == 0 {
                    (x / 10 + 1) as i64 * 10 + 1
                } else if y == 1 && x % 10 == 0 {
                    (x / 10 + 1) as i64 * 10 + 2
                } else if y % 4 == 3 && x % 5 != 0 {
                    1
                } else if x % 7 == 6 {
                    2
                } else if (x + y) % 11 == 0 {
                    3
                } else {
                    0
                }
            })
            .collect::<Vec<i64>>()
    }))
}
