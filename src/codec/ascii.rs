//! ASCII codec: the plain-text `.gol` grid format.
//!
//! Layout:
//! - a header line: decimal width, a single space, decimal height
//! - exactly `height` rows of exactly `width` cell bytes, `'#'` alive
//!   and `' '` dead, each row (the final one included) terminated by a
//!   newline
//!
//! This is the raw grid format. Unlike the bordered [`Display`]
//! rendering there are no framing characters around the rows.
//!
//! [`Display`]: std::fmt::Display

use crate::error::{FormatError, Result};
use crate::grid::{Cell, Grid};
use log::debug;
use std::fs;
use std::path::Path;

/// Load a grid from an ASCII file.
///
/// The file is read in full with a single read, then decoded.
///
/// # Errors
///
/// Returns [`Error::Io`](crate::Error::Io) if the file cannot be opened
/// or read, and [`Error::Format`](crate::Error::Format) for any layout
/// violation listed on [`decode`].
pub fn load<P: AsRef<Path>>(path: P) -> Result<Grid> {
    let bytes = fs::read(&path)?;
    let grid = decode(&bytes)?;
    debug!(
        "loaded {}x{} grid from {}",
        grid.width(),
        grid.height(),
        path.as_ref().display()
    );
    Ok(grid)
}

/// Save a grid to an ASCII file with a single complete write.
///
/// # Errors
///
/// Returns [`Error::Io`](crate::Error::Io) if the file cannot be
/// created or written.
pub fn save<P: AsRef<Path>>(path: P, grid: &Grid) -> Result<()> {
    fs::write(&path, encode(grid))?;
    debug!(
        "saved {}x{} grid to {}",
        grid.width(),
        grid.height(),
        path.as_ref().display()
    );
    Ok(())
}

/// Decode an ASCII byte stream into a grid.
///
/// # Errors
///
/// Returns a [`FormatError`] wrapped in [`Error::Format`](crate::Error::Format):
/// - [`FormatError::Header`] when the header line is missing or does not
///   parse as two decimal integers (a negative dimension is malformed,
///   not clamped)
/// - [`FormatError::RowLength`] when a row holds fewer or more cell
///   bytes than the declared width; short rows are rejected, never
///   zero-padded
/// - [`FormatError::IllegalCharacter`] when a cell byte is neither `'#'`
///   nor `' '`
/// - [`FormatError::Truncated`] when the data ends before the final
///   row's newline
/// - [`FormatError::TrailingData`] when bytes remain after the final row
pub fn decode(bytes: &[u8]) -> Result<Grid> {
    let (width, height, mut offset) = parse_header(bytes)?;
    let mut grid = Grid::new(width, height);

    for row in 0..height {
        for col in 0..width {
            let byte = match bytes.get(offset) {
                None | Some(&b'\n') => {
                    return Err(FormatError::RowLength {
                        row,
                        expected: width,
                        actual: col,
                    }
                    .into());
                }
                Some(&byte) => byte,
            };
            let cell = Cell::from_byte(byte)
                .ok_or(FormatError::IllegalCharacter { row, col, byte })?;
            grid.cells_mut()[(row as usize) * (width as usize) + (col as usize)] = cell;
            offset += 1;
        }

        match bytes.get(offset) {
            Some(&b'\n') => offset += 1,
            Some(_) => {
                // The row continues past the declared width; measure it
                // up to its own newline for the report.
                let row_end = bytes[offset..]
                    .iter()
                    .position(|&b| b == b'\n')
                    .map_or(bytes.len(), |pos| offset + pos);
                let extra = (row_end - offset) as u32;
                return Err(FormatError::RowLength {
                    row,
                    expected: width,
                    actual: width + extra,
                }
                .into());
            }
            None => {
                return Err(FormatError::Truncated {
                    expected: offset + 1,
                    actual: bytes.len(),
                }
                .into());
            }
        }
    }

    if offset != bytes.len() {
        return Err(FormatError::TrailingData(bytes.len() - offset).into());
    }

    Ok(grid)
}

/// Encode a grid as an ASCII byte stream.
pub fn encode(grid: &Grid) -> Vec<u8> {
    let width = grid.width() as usize;
    let height = grid.height() as usize;
    let mut out = Vec::with_capacity(16 + (width + 1) * height);

    out.extend_from_slice(format!("{} {}\n", grid.width(), grid.height()).as_bytes());
    for row in 0..height {
        for col in 0..width {
            out.push(grid.cells()[row * width + col].to_byte());
        }
        out.push(b'\n');
    }

    out
}

/// Parse the header line, returning (width, height, payload offset).
fn parse_header(bytes: &[u8]) -> Result<(u32, u32, usize)> {
    let line_end = bytes
        .iter()
        .position(|&b| b == b'\n')
        .ok_or_else(|| FormatError::Header("missing header line".to_owned()))?;
    let line = std::str::from_utf8(&bytes[..line_end])
        .map_err(|_| FormatError::Header("header is not valid UTF-8".to_owned()))?;
    let (width_field, height_field) = line
        .split_once(' ')
        .ok_or_else(|| FormatError::Header(format!("expected \"<width> <height>\", got {line:?}")))?;

    let width = parse_dimension(width_field)?;
    let height = parse_dimension(height_field)?;
    Ok((width, height, line_end + 1))
}

/// Parse a single decimal dimension field.
fn parse_dimension(field: &str) -> std::result::Result<u32, FormatError> {
    field
        .parse()
        .map_err(|_| FormatError::Header(format!("invalid dimension {field:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use proptest::prelude::*;

    fn sample_grid() -> Grid {
        let mut grid = Grid::new(3, 2);
        grid.set(1, 0, Cell::Alive).unwrap();
        grid.set(0, 1, Cell::Alive).unwrap();
        grid.set(2, 1, Cell::Alive).unwrap();
        grid
    }

    #[test]
    fn test_ascii_encode_layout() {
        assert_eq!(encode(&sample_grid()), b"3 2\n # \n# #\n");
    }

    #[test]
    fn test_ascii_decode() {
        let grid = decode(b"3 2\n # \n# #\n").unwrap();
        assert_eq!(grid, sample_grid());
    }

    #[test]
    fn test_ascii_round_trip_edge_sizes() {
        for grid in [Grid::default(), Grid::new(1, 1), Grid::new(0, 3), Grid::new(5, 1)] {
            assert_eq!(decode(&encode(&grid)).unwrap(), grid);
        }
    }

    #[test]
    fn test_ascii_zero_by_zero_layout() {
        assert_eq!(encode(&Grid::default()), b"0 0\n");
        assert_eq!(decode(b"0 0\n").unwrap(), Grid::default());
    }

    #[test]
    fn test_ascii_rejects_bad_headers() {
        for input in [
            &b""[..],
            b"3 2",
            b"3\n",
            b"a 2\n",
            b"3 b\n",
            b"-1 2\n",
            b"3 -2\n",
            b"3  2\n",
            b"3 2 1\n",
        ] {
            assert!(
                matches!(
                    decode(input),
                    Err(Error::Format(FormatError::Header(_)))
                ),
                "accepted header {input:?}"
            );
        }
    }

    #[test]
    fn test_ascii_rejects_short_row() {
        let err = decode(b"3 2\n # \n##\n").unwrap_err();
        assert!(matches!(
            err,
            Error::Format(FormatError::RowLength {
                row: 1,
                expected: 3,
                actual: 2,
            })
        ));
    }

    #[test]
    fn test_ascii_rejects_long_row() {
        let err = decode(b"3 2\n #  \n# #\n").unwrap_err();
        assert!(matches!(
            err,
            Error::Format(FormatError::RowLength {
                row: 0,
                expected: 3,
                actual: 4,
            })
        ));
    }

    #[test]
    fn test_ascii_rejects_illegal_character() {
        let err = decode(b"3 2\n x \n# #\n").unwrap_err();
        assert!(matches!(
            err,
            Error::Format(FormatError::IllegalCharacter {
                row: 0,
                col: 1,
                byte: b'x',
            })
        ));
    }

    #[test]
    fn test_ascii_rejects_missing_final_newline() {
        let err = decode(b"3 2\n # \n# #").unwrap_err();
        assert!(matches!(err, Error::Format(FormatError::Truncated { .. })));
    }

    #[test]
    fn test_ascii_rejects_missing_rows() {
        let err = decode(b"3 2\n # \n").unwrap_err();
        assert!(matches!(err, Error::Format(FormatError::RowLength { .. })));
    }

    #[test]
    fn test_ascii_rejects_trailing_data() {
        let err = decode(b"3 2\n # \n# #\nextra").unwrap_err();
        assert!(matches!(
            err,
            Error::Format(FormatError::TrailingData(5))
        ));
    }

    #[test]
    fn test_ascii_load_save_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pattern.gol");
        let grid = sample_grid();
        save(&path, &grid).unwrap();
        assert_eq!(load(&path).unwrap(), grid);
    }

    #[test]
    fn test_ascii_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(dir.path().join("absent.gol")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    proptest! {
        #[test]
        fn prop_ascii_round_trip(
            width in 0u32..24,
            height in 0u32..24,
            seed in any::<u64>(),
        ) {
            let mut grid = Grid::new(width, height);
            let mut state = seed | 1;
            for cell in grid.cells_mut() {
                state = state.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
                *cell = Cell::from(state >> 63 == 1);
            }
            prop_assert_eq!(decode(&encode(&grid)).unwrap(), grid);
        }
    }
}
