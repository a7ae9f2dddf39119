//! # Petri
//!
//! A double-buffered Game of Life engine with bit-exact grid codecs.
//!
//! Petri simulates Conway's Game of Life over a dense 2D grid, under
//! either planar (hard-edged) or toroidal (wrap-around) topology, and
//! persists grids in two strict file formats.
//!
//! ## Core Concepts
//!
//! - **Grid**: a resizable row-major cell field with cropping, merging,
//!   and quarter-turn rotation
//! - **World**: double-buffered stepping; the rule is evaluated against
//!   a pre-step snapshot, then the current/next buffers swap in O(1)
//! - **Codecs**: an ASCII text format (`.gol`) and a packed-bit binary
//!   format (`.bgol`), both round-tripping every grid cell-for-cell
//!
//! ## Example
//!
//! ```rust
//! use petri::{presets, Grid, World};
//!
//! // Drop a glider into an 8x8 world and advance one full period.
//! let mut start = Grid::square(8);
//! start.merge(&presets::glider(), 1, 1, false).unwrap();
//!
//! let mut world = World::from_grid(start);
//! world.advance(4, false);
//!
//! // The glider survives, translated one cell diagonally.
//! assert_eq!(world.alive_cells(), 5);
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod codec;
pub mod error;
pub mod grid;
pub mod presets;
pub mod world;

// Re-exports for convenience
pub use error::{Error, FormatError, Result};
pub use grid::{Cell, Grid};
pub use world::World;
