// Copyright 2025 the Pathgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Insertion and query throughput of `GridRangeQuery`.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use pathgrid_benches::{Rng, populated_grid, synthetic_segments};
use pathgrid_index::{Aabb2D, GridTraversal, HashSet, Segment2D};

const EXTENT: Aabb2D<f64> = Aabb2D::new(0.0, 0.0, 10_000.0, 10_000.0);

fn bench_traverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("traverse");
    let grid = GridTraversal::new(0.0, 0.0, 50.0, 50.0, 200, 200);
    for len in [10.0, 500.0, 5_000.0] {
        let segment = Segment2D::from_coords(17.0, 23.0, 17.0 + len, 23.0 + len * 0.61);
        group.bench_with_input(BenchmarkId::from_parameter(len), &segment, |b, s| {
            b.iter(|| grid.traverse(black_box(s)).count());
        });
    }
    group.finish();
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_line_segment");
    for count in [1_000, 10_000] {
        let segments = synthetic_segments(EXTENT, count, 80.0);
        group.bench_with_input(BenchmarkId::from_parameter(count), &segments, |b, segs| {
            b.iter(|| populated_grid(EXTENT, 50.0, black_box(segs)).unwrap());
        });
    }
    group.finish();
}

fn bench_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("query");
    let segments = synthetic_segments(EXTENT, 50_000, 80.0);
    let grid = populated_grid(EXTENT, 50.0, &segments).unwrap();

    let mut rng = Rng::new(7);
    let samples: Vec<_> = (0..1_024)
        .map(|_| {
            let x = rng.range(0.0, 10_000.0);
            let y = rng.range(0.0, 10_000.0);
            Aabb2D::new(x - 25.0, y - 25.0, x + 25.0, y + 25.0)
        })
        .collect();

    group.bench_function("gps_sample", |b| {
        let mut i = 0;
        b.iter(|| {
            i = (i + 1) % samples.len();
            grid.query(black_box(&samples[i]))
        });
    });

    group.bench_function("gps_sample_reused_set", |b| {
        let mut out = HashSet::new();
        let mut i = 0;
        b.iter(|| {
            i = (i + 1) % samples.len();
            out.clear();
            grid.query_into(black_box(&samples[i]), &mut out);
            out.len()
        });
    });

    group.finish();
}

criterion_group!(benches, bench_traverse, bench_insert, bench_query);
criterion_main!(benches);
