//! World: Double-buffered simulation stepping.
//!
//! A world owns two equally sized grids: the authoritative `current` state
//! and a `next` scratch buffer. Each step evaluates the transition rule
//! against the pre-step snapshot, writes results into `next`, then swaps
//! the buffers in O(1). No cell's next state ever observes an
//! already-updated neighbour.

use crate::grid::{Cell, Grid};
use log::trace;
use std::mem;

/// A double-buffered Game of Life world.
///
/// The transition rule is the standard B3/S23: a live cell survives with
/// 2 or 3 live neighbours, a dead cell becomes alive with exactly 3, and
/// every other case yields a dead cell.
///
/// Neighbour counting runs under one of two topologies:
/// - **planar**: neighbours outside the grid simply do not exist; a corner
///   cell has at most 3
/// - **toroidal**: out-of-range coordinates wrap modulo width/height; a
///   corner cell always has 8, sourced from the opposite edges
///
/// After any public operation, `current` holds the authoritative state and
/// the scratch buffer's contents are unspecified. Both buffers always have
/// identical dimensions.
#[derive(Clone, Debug, Default)]
pub struct World {
    /// The authoritative state.
    current: Grid,
    /// Scratch space, fully overwritten by each step before the swap.
    next: Grid,
}

impl World {
    /// Create a new world with the given dimensions, all cells dead.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            current: Grid::new(width, height),
            next: Grid::new(width, height),
        }
    }

    /// Create a new square world with the given edge size, all cells dead.
    pub fn square(size: u32) -> Self {
        Self::new(size, size)
    }

    /// Create a world from an initial grid state.
    ///
    /// The world takes ownership of the grid, so no external handle can
    /// mutate the captured state afterwards.
    pub fn from_grid(initial: Grid) -> Self {
        let next = Grid::new(initial.width(), initial.height());
        Self {
            current: initial,
            next,
        }
    }

    /// Get the world width.
    #[inline]
    pub const fn width(&self) -> u32 {
        self.current.width()
    }

    /// Get the world height.
    #[inline]
    pub const fn height(&self) -> u32 {
        self.current.height()
    }

    /// Get the total number of cells.
    #[inline]
    pub fn total_cells(&self) -> usize {
        self.current.total_cells()
    }

    /// Count the alive cells in the current state.
    pub fn alive_cells(&self) -> usize {
        self.current.alive_cells()
    }

    /// Count the dead cells in the current state.
    pub fn dead_cells(&self) -> usize {
        self.current.dead_cells()
    }

    /// Get a read-only view of the current state.
    #[inline]
    pub const fn get_state(&self) -> &Grid {
        &self.current
    }

    /// Resize the world, preserving current content where possible.
    ///
    /// The scratch buffer is resized alongside so both grids always share
    /// dimensions; its contents are irrelevant until the next step.
    pub fn resize(&mut self, new_width: u32, new_height: u32) {
        self.current.resize(new_width, new_height);
        self.next.resize(new_width, new_height);
    }

    /// Resize the world to a square with the given edge size.
    pub fn resize_square(&mut self, size: u32) {
        self.resize(size, size);
    }

    /// Count the live neighbours of (x, y) in the current state.
    ///
    /// The coordinate itself must be in range; its 8 surrounding positions
    /// are resolved according to the topology.
    fn count_neighbours(&self, x: u32, y: u32, toroidal: bool) -> u8 {
        let width = i64::from(self.width());
        let height = i64::from(self.height());
        let cells = self.current.cells();
        let mut count = 0;

        for dy in -1..=1_i64 {
            for dx in -1..=1_i64 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let mut nx = i64::from(x) + dx;
                let mut ny = i64::from(y) + dy;
                if toroidal {
                    nx = nx.rem_euclid(width);
                    ny = ny.rem_euclid(height);
                } else if nx < 0 || nx >= width || ny < 0 || ny >= height {
                    continue;
                }
                if cells[(ny * width + nx) as usize].is_alive() {
                    count += 1;
                }
            }
        }

        count
    }

    /// Advance the world by one generation.
    ///
    /// Every cell of the scratch buffer is overwritten from the pre-step
    /// snapshot before the buffers are swapped, so stale data is never
    /// read through it.
    pub fn step(&mut self, toroidal: bool) {
        let width = self.width();
        let height = self.height();

        for y in 0..height {
            for x in 0..width {
                let neighbours = self.count_neighbours(x, y, toroidal);
                let idx = (y as usize) * (width as usize) + (x as usize);
                let alive = self.current.cells()[idx].is_alive();
                let survives = matches!((alive, neighbours), (true, 2 | 3) | (false, 3));
                self.next.cells_mut()[idx] = Cell::from(survives);
            }
        }

        mem::swap(&mut self.current, &mut self.next);
    }

    /// Advance the world by `steps` generations. Zero steps is a no-op.
    pub fn advance(&mut self, steps: u32, toroidal: bool) {
        trace!("advancing {steps} generations (toroidal: {toroidal})");
        for _ in 0..steps {
            self.step(toroidal);
        }
    }
}
