//! Step benchmark: Measure simulation throughput per generation.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use petri::{Cell, Grid, World};

/// A world seeded with a sparse deterministic soup.
fn sample_world(size: u32) -> World {
    let mut grid = Grid::square(size);
    for (idx, cell) in grid.cells_mut().iter_mut().enumerate() {
        if idx % 7 == 0 || idx % 11 == 0 {
            *cell = Cell::Alive;
        }
    }
    World::from_grid(grid)
}

fn world_step(c: &mut Criterion) {
    c.bench_function("world_step_planar_256", |b| {
        let mut world = sample_world(256);
        b.iter(|| world.step(black_box(false)))
    });

    c.bench_function("world_step_toroidal_256", |b| {
        let mut world = sample_world(256);
        b.iter(|| world.step(black_box(true)))
    });
}

fn world_advance(c: &mut Criterion) {
    c.bench_function("world_advance_16_gens_64", |b| {
        let mut world = sample_world(64);
        b.iter(|| world.advance(black_box(16), false))
    });
}

criterion_group!(benches, world_step, world_advance);
criterion_main!(benches);
