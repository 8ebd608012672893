mod common;

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use mosaic_grid::prelude::*;

fn compile_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("compile/warehouse");
    let params = Parameters::default();

    for &size in &common::SIZES {
        let grid = common::warehouse_grid(size);
        group.throughput(common::elements_throughput(size * size));

        group.bench_with_input(BenchmarkId::from_parameter(size), &grid, |b, grid| {
            b.iter(|| {
                let compiled = compile(black_box(grid), &params).expect("compile succeeds");
                black_box(compiled.configuration.stations().len());
            });
        });
    }

    group.finish();
}

fn documents_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("compile/documents");

    for &size in &common::SIZES {
        let compiled =
            compile(&common::warehouse_grid(size), &Parameters::default()).expect("compile");
        group.throughput(common::elements_throughput(size * size));

        group.bench_with_input(BenchmarkId::from_parameter(size), &compiled, |b, compiled| {
            b.iter(|| {
                let docs = compiled.documents().expect("render");
                black_box(docs.zones_and_stations.len());
            });
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = common::default_criterion();
    targets = compile_benches, documents_benches
}
criterion_main!(benches);
