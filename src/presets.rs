//! Presets: canonical Game of Life patterns at their bounding-box size.
//!
//! These are fixture constructors, not part of the simulation core.
//! Each returns a fresh grid exactly the size of the pattern, ready to
//! be [`merge`](crate::Grid::merge)d into a larger world.

use crate::grid::{Cell, Grid};

/// Build a grid from string-art rows: `'#'` alive, anything else dead.
fn pattern(rows: &[&str]) -> Grid {
    let width = rows.first().map_or(0, |row| row.len()) as u32;
    let height = rows.len() as u32;
    let mut grid = Grid::new(width, height);
    for (y, row) in rows.iter().enumerate() {
        for (x, byte) in row.bytes().enumerate() {
            grid.cells_mut()[y * width as usize + x] = Cell::from(byte == Cell::ALIVE_BYTE);
        }
    }
    grid
}

/// A 3x3 grid containing a glider.
///
/// <https://www.conwaylife.com/wiki/Glider>
pub fn glider() -> Grid {
    pattern(&[
        " # ", //
        "  #", //
        "###",
    ])
}

/// A 3x3 grid containing an r-pentomino.
///
/// <https://www.conwaylife.com/wiki/R-pentomino>
pub fn r_pentomino() -> Grid {
    pattern(&[
        " ##", //
        "## ", //
        " # ",
    ])
}

/// A 5x4 grid containing a lightweight spaceship.
///
/// <https://www.conwaylife.com/wiki/Lightweight_spaceship>
pub fn lightweight_spaceship() -> Grid {
    pattern(&[
        " #  #", //
        "#    ", //
        "#   #", //
        "#### ",
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Collect the coordinates of every alive cell.
    fn alive_coords(grid: &Grid) -> Vec<(u32, u32)> {
        let mut coords = Vec::new();
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                if grid.get(x, y).unwrap().is_alive() {
                    coords.push((x, y));
                }
            }
        }
        coords
    }

    #[test]
    fn test_presets_glider() {
        let grid = glider();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 3);
        assert_eq!(
            alive_coords(&grid),
            vec![(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)]
        );
    }

    #[test]
    fn test_presets_r_pentomino() {
        let grid = r_pentomino();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 3);
        assert_eq!(
            alive_coords(&grid),
            vec![(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)]
        );
    }

    #[test]
    fn test_presets_lightweight_spaceship() {
        let grid = lightweight_spaceship();
        assert_eq!(grid.width(), 5);
        assert_eq!(grid.height(), 4);
        assert_eq!(
            alive_coords(&grid),
            vec![
                (1, 0),
                (4, 0),
                (0, 1),
                (0, 2),
                (4, 2),
                (0, 3),
                (1, 3),
                (2, 3),
                (3, 3),
            ]
        );
    }

    #[test]
    fn test_presets_glider_display() {
        assert_eq!(glider().to_string(), "+---+\n| # |\n|  #|\n|###|\n+---+\n");
    }
}
