//! Grid: A dense 2D field of cells.
//!
//! The grid uses contiguous memory allocation for cache efficiency.
//! Cells are stored in row-major order: `index = x + width * y`.

use super::cell::Cell;
use crate::error::{Error, Result};
use std::fmt;

/// A dense, resizable 2D field of [`Cell`]s.
///
/// The grid stores cells in a contiguous `Vec` in row-major order and
/// exclusively owns its buffer: clones are deep copies and never alias the
/// source. The length of the buffer is always `width * height`.
///
/// Coordinate access outside `[0, width) x [0, height)` is an error, never
/// silently clamped; bounds are validated before any cell is written, so a
/// failed operation leaves the grid unchanged.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Grid {
    /// Contiguous cell storage (row-major order).
    cells: Vec<Cell>,
    /// Grid width in cells.
    width: u32,
    /// Grid height in cells.
    height: u32,
}

impl Grid {
    /// Create a new grid with the given dimensions, all cells dead.
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width as usize) * (height as usize);
        Self {
            cells: vec![Cell::Dead; size],
            width,
            height,
        }
    }

    /// Create a new square grid with the given edge size, all cells dead.
    pub fn square(size: u32) -> Self {
        Self::new(size, size)
    }

    /// Get the grid width.
    #[inline]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Get the grid height.
    #[inline]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Get the total number of cells.
    #[inline]
    pub fn total_cells(&self) -> usize {
        self.cells.len()
    }

    /// Count the alive cells with a full scan.
    pub fn alive_cells(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Count the dead cells with a full scan.
    pub fn dead_cells(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_alive()).count()
    }

    /// Get a reference to the underlying cell slice.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Get a mutable reference to the underlying cell slice.
    ///
    /// The slice has a fixed length, so the `width * height` buffer
    /// invariant holds no matter what is written through it.
    #[inline]
    pub fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Convert (x, y) coordinates to a linear index.
    ///
    /// Returns `None` if coordinates are out of bounds.
    #[inline]
    fn index_of(&self, x: u32, y: u32) -> Option<usize> {
        if x < self.width && y < self.height {
            Some((y as usize) * (self.width as usize) + (x as usize))
        } else {
            None
        }
    }

    /// Build the error for a rejected coordinate.
    fn out_of_range(&self, x: u32, y: u32) -> Error {
        Error::OutOfRange {
            x,
            y,
            width: self.width,
            height: self.height,
        }
    }

    /// Read the cell at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if the coordinate is outside the grid.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Result<Cell> {
        self.index_of(x, y)
            .map(|idx| self.cells[idx])
            .ok_or_else(|| self.out_of_range(x, y))
    }

    /// Overwrite the cell at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if the coordinate is outside the grid.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, value: Cell) -> Result<()> {
        match self.index_of(x, y) {
            Some(idx) => {
                self.cells[idx] = value;
                Ok(())
            }
            None => Err(self.out_of_range(x, y)),
        }
    }

    /// Resize the grid, preserving content where possible.
    ///
    /// Cells inside the intersection of the old and new rectangles keep
    /// their values; rows and columns introduced by growth are dead. One
    /// general row-copy pass covers shrink, grow, and same-size calls.
    pub fn resize(&mut self, new_width: u32, new_height: u32) {
        if new_width == self.width && new_height == self.height {
            return;
        }

        let new_size = (new_width as usize) * (new_height as usize);
        let mut new_cells = vec![Cell::Dead; new_size];

        let copy_width = self.width.min(new_width) as usize;
        let copy_height = self.height.min(new_height) as usize;

        for y in 0..copy_height {
            let old_start = y * (self.width as usize);
            let new_start = y * (new_width as usize);
            new_cells[new_start..new_start + copy_width]
                .copy_from_slice(&self.cells[old_start..old_start + copy_width]);
        }

        self.cells = new_cells;
        self.width = new_width;
        self.height = new_height;
    }

    /// Resize the grid to a square with the given edge size.
    pub fn resize_square(&mut self, size: u32) {
        self.resize(size, size);
    }

    /// Extract the half-open window `[x0, x1) x [y0, y1)` as a new grid.
    ///
    /// The result has dimensions `(x1 - x0, y1 - y0)` and its own buffer,
    /// independent of this grid.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the window corners are
    /// inverted, or [`Error::OutOfRange`] if the window exceeds the grid.
    pub fn crop(&self, x0: u32, y0: u32, x1: u32, y1: u32) -> Result<Self> {
        if x0 > x1 || y0 > y1 {
            return Err(Error::InvalidArgument { x0, y0, x1, y1 });
        }
        if x1 > self.width || y1 > self.height {
            return Err(self.out_of_range(x1, y1));
        }

        let mut cropped = Self::new(x1 - x0, y1 - y0);
        let cropped_width = cropped.width as usize;

        for y in y0..y1 {
            let src_start = (y as usize) * (self.width as usize) + (x0 as usize);
            let dst_start = ((y - y0) as usize) * cropped_width;
            cropped.cells[dst_start..dst_start + cropped_width]
                .copy_from_slice(&self.cells[src_start..src_start + cropped_width]);
        }

        Ok(cropped)
    }

    /// Overlay `other` onto this grid with its origin landing at (x0, y0).
    ///
    /// With `alive_only = false` every covered cell is overwritten with the
    /// corresponding cell from `other`. With `alive_only = true` only alive
    /// cells in `other` are written, so an already-alive cell is never
    /// reverted to dead.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if the placed rectangle exceeds this
    /// grid's bounds. Bounds are checked before any write, so a failed
    /// merge leaves the grid untouched.
    pub fn merge(&mut self, other: &Self, x0: u32, y0: u32, alive_only: bool) -> Result<()> {
        let x_end = u64::from(x0) + u64::from(other.width);
        let y_end = u64::from(y0) + u64::from(other.height);
        if x_end > u64::from(self.width) || y_end > u64::from(self.height) {
            return Err(self.out_of_range(
                x0.saturating_add(other.width),
                y0.saturating_add(other.height),
            ));
        }

        for y in 0..other.height {
            let src_start = (y as usize) * (other.width as usize);
            let dst_start = ((y0 + y) as usize) * (self.width as usize) + (x0 as usize);
            for x in 0..other.width as usize {
                let src = other.cells[src_start + x];
                if alive_only {
                    if src.is_alive() {
                        self.cells[dst_start + x] = Cell::Alive;
                    }
                } else {
                    self.cells[dst_start + x] = src;
                }
            }
        }

        Ok(())
    }

    /// Create a copy of the grid rotated by a multiple of 90 degrees.
    ///
    /// The rotation count can be any integer; it is normalized modulo 4
    /// before a single mapping pass, so execution cost is independent of
    /// the argument's sign and magnitude. Quarter-turns 1 and 3 swap the
    /// result's width and height.
    pub fn rotate(&self, rotation: i32) -> Self {
        let quarter_turns = rotation.rem_euclid(4);

        let (new_width, new_height) = match quarter_turns {
            1 | 3 => (self.height, self.width),
            _ => (self.width, self.height),
        };

        let mut rotated = Self::new(new_width, new_height);

        for y in 0..new_height {
            for x in 0..new_width {
                // Destination (x, y) pulls from the source coordinate
                // produced by the inverse quarter-turn mapping.
                let (src_x, src_y) = match quarter_turns {
                    1 => (y, new_width - 1 - x),
                    2 => (new_width - 1 - x, new_height - 1 - y),
                    3 => (new_height - 1 - y, x),
                    _ => (x, y),
                };
                let src = (src_y as usize) * (self.width as usize) + (src_x as usize);
                let dst = (y as usize) * (new_width as usize) + (x as usize);
                rotated.cells[dst] = self.cells[src];
            }
        }

        rotated
    }
}

impl fmt::Display for Grid {
    /// Render the grid wrapped in a border of `-`, `|`, and `+` characters.
    ///
    /// Alive cells are shown as `#`, dead cells as spaces. Every line,
    /// including the last, is newline-terminated. This is the human-readable
    /// display form, distinct from the raw [`codec::ascii`](crate::codec::ascii)
    /// file format.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let border = "-".repeat(self.width as usize);
        writeln!(f, "+{border}+")?;
        for y in 0..self.height {
            write!(f, "|")?;
            for x in 0..self.width {
                let idx = (y as usize) * (self.width as usize) + (x as usize);
                write!(f, "{}", char::from(self.cells[idx].to_byte()))?;
            }
            writeln!(f, "|")?;
        }
        writeln!(f, "+{border}+")
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grid")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("alive", &self.alive_cells())
            .finish()
    }
}
