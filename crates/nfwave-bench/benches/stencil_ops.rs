//! Criterion micro-benchmarks for stencil assignment and neighbour access.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use nfwave_space::{Cursor, Direction, LatticeShape, Stencil, Topology};

fn field(shape: LatticeShape) -> Vec<f64> {
    (0..shape.nodes()).map(|i| (i % 97) as f64 * 0.01).collect()
}

/// Benchmark: assign a 100x100 field into a padded torus stencil.
fn bench_assign_100x100(c: &mut Criterion) {
    let shape = LatticeShape::grid(100, 100).unwrap();
    let mut stencil = Stencil::new(shape, Topology::Torus).unwrap();
    let values = field(shape);

    c.bench_function("assign_100x100", |b| {
        b.iter(|| {
            let cursor = stencil.assign(black_box(&values)).unwrap();
            black_box(cursor);
        });
    });
}

/// Benchmark: nine-point sums over every node via the sweep iterator.
fn bench_sweep_sums_100x100(c: &mut Criterion) {
    let shape = LatticeShape::grid(100, 100).unwrap();
    let mut stencil = Stencil::new(shape, Topology::Torus).unwrap();
    stencil.assign(&field(shape)).unwrap();

    c.bench_function("sweep_sums_100x100", |b| {
        b.iter(|| {
            let total: f64 = stencil
                .sweep()
                .map(|w| w.c() + w.orthogonal_sum() + 0.5 * w.diagonal_sum())
                .sum();
            black_box(total);
        });
    });
}

/// Benchmark: per-direction neighbour lookups with a manually advanced cursor.
fn bench_cursor_neighbours_100x100(c: &mut Criterion) {
    let shape = LatticeShape::grid(100, 100).unwrap();
    let mut stencil = Stencil::new(shape, Topology::Torus).unwrap();
    stencil.assign(&field(shape)).unwrap();

    c.bench_function("cursor_neighbours_100x100", |b| {
        b.iter(|| {
            let mut cursor = Cursor::origin(shape);
            let mut acc = 0.0;
            for _ in 0..shape.nodes() {
                for dir in Direction::ORTHOGONAL {
                    acc += stencil.neighbor(&cursor, dir);
                }
                cursor.advance();
            }
            black_box(acc);
        });
    });
}

criterion_group!(
    benches,
    bench_assign_100x100,
    bench_sweep_sums_100x100,
    bench_cursor_neighbours_100x100
);
criterion_main!(benches);
