//! Grid benchmark: Measure geometry operation throughput.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use petri::{Cell, Grid};

/// A 256x256 grid with roughly a third of its cells alive.
fn sample_grid() -> Grid {
    let mut grid = Grid::square(256);
    for (idx, cell) in grid.cells_mut().iter_mut().enumerate() {
        if idx % 3 == 0 {
            *cell = Cell::Alive;
        }
    }
    grid
}

fn grid_rotate(c: &mut Criterion) {
    let grid = sample_grid();

    c.bench_function("grid_rotate_quarter", |b| {
        b.iter(|| black_box(&grid).rotate(1))
    });

    c.bench_function("grid_rotate_half", |b| {
        b.iter(|| black_box(&grid).rotate(2))
    });
}

fn grid_crop(c: &mut Criterion) {
    let grid = sample_grid();

    c.bench_function("grid_crop_centre", |b| {
        b.iter(|| black_box(&grid).crop(64, 64, 192, 192).unwrap())
    });
}

fn grid_merge(c: &mut Criterion) {
    let patch = Grid::square(64);

    c.bench_function("grid_merge_overwrite", |b| {
        let mut target = sample_grid();
        b.iter(|| target.merge(black_box(&patch), 96, 96, false).unwrap())
    });

    c.bench_function("grid_merge_alive_only", |b| {
        let mut target = sample_grid();
        b.iter(|| target.merge(black_box(&patch), 96, 96, true).unwrap())
    });
}

fn grid_resize(c: &mut Criterion) {
    c.bench_function("grid_resize_grow", |b| {
        b.iter_batched(
            || Grid::square(256),
            |mut grid| {
                grid.resize(320, 320);
                grid
            },
            BatchSize::SmallInput,
        )
    });
}

fn grid_counts(c: &mut Criterion) {
    let grid = sample_grid();

    c.bench_function("grid_alive_cells", |b| {
        b.iter(|| black_box(&grid).alive_cells())
    });
}

criterion_group!(
    benches,
    grid_rotate,
    grid_crop,
    grid_merge,
    grid_resize,
    grid_counts,
);
criterion_main!(benches);
