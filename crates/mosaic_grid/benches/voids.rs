mod common;

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use mosaic_grid::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const FILL_LEVELS: [u32; 3] = [10, 50, 90];

/// Seeded random fill so every run measures the same layout.
fn filled_grid(size: usize, percent: u32) -> Grid {
    let mut rng = StdRng::seed_from_u64(0x9E37_79B9 ^ u64::from(percent));
    let rows: Vec<Vec<u32>> = (0..size)
        .map(|_| {
            (0..size)
                .map(|_| u32::from(rng.random_range(0..100) < percent))
                .collect()
        })
        .collect();
    sanitize(&RawGrid::from_rows(rows)).expect("non-empty").grid
}

fn void_extraction_benches(c: &mut Criterion) {
    for &percent in &FILL_LEVELS {
        let mut group = c.benchmark_group(format!("voids/fill_{percent}"));

        for &size in &common::SIZES {
            let grid = filled_grid(size, percent);
            group.throughput(common::elements_throughput(size * size));

            group.bench_with_input(BenchmarkId::from_parameter(size), &grid, |b, grid| {
                b.iter(|| {
                    let regions = extract_void_regions(black_box(grid), 15);
                    black_box(regions.len());
                });
            });
        }

        group.finish();
    }
}

criterion_group! {
    name = benches;
    config = common::default_criterion();
    targets = void_extraction_benches
}
criterion_main!(benches);
