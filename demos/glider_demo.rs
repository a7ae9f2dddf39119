//! Glider demo: Fly a glider across a small world.
//!
//! Prints each generation with the bordered display form.

use petri::{presets, Grid, World};

fn main() {
    println!("Petri Glider Demo");
    println!("=================");
    println!();

    let mut start = Grid::square(10);
    start
        .merge(&presets::glider(), 1, 1, false)
        .expect("glider fits in a 10x10 grid");

    let mut world = World::from_grid(start);
    for generation in 0..=8 {
        println!("generation {generation}: {} alive", world.alive_cells());
        print!("{}", world.get_state());
        println!();
        world.step(false);
    }
}
