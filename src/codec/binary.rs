//! Binary codec: the packed-bit `.bgol` grid format.
//!
//! Layout:
//! - `width` as a 4-byte native-endian integer at offset 0
//! - `height` as a 4-byte native-endian integer at offset 4
//! - `ceil(width * height / 8)` payload bytes, one bit per cell in
//!   row-major order, least-significant bit first; the unused high bits
//!   of the final byte are written as zero
//!
//! The header is read as two explicit fixed-offset integer loads, never
//! by overlaying a struct onto the byte buffer.

use crate::error::{FormatError, Result};
use crate::grid::{Cell, Grid};
use log::debug;
use std::fs;
use std::path::Path;

/// Length of the width/height header in bytes.
const HEADER_LEN: usize = 8;

/// Load a grid from a binary file.
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

/// Save a grid to a binary file with a single complete write.
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

/// Decode a binary byte stream into a grid.
///
/// The payload length is validated against the declared dimensions
/// before the grid is allocated. Padding bit values in the final byte
/// are ignored.
///
/// # Errors
///
/// Returns a [`FormatError`] wrapped in [`Error::Format`](crate::Error::Format):
/// - [`FormatError::Truncated`] when the data ends before the header or
///   the declared bit count is fully available
/// - [`FormatError::TrailingData`] when bytes remain after the declared
///   payload
pub fn decode(bytes: &[u8]) -> Result<Grid> {
    if bytes.len() < HEADER_LEN {
        return Err(FormatError::Truncated {
            expected: HEADER_LEN,
            actual: bytes.len(),
        }
        .into());
    }

    let width = read_u32(bytes, 0);
    let height = read_u32(bytes, 4);
    let total_cells = u64::from(width) * u64::from(height);
    let payload_len = (total_cells.div_ceil(8)) as usize;

    let payload = &bytes[HEADER_LEN..];
    if payload.len() < payload_len {
        return Err(FormatError::Truncated {
            expected: HEADER_LEN + payload_len,
            actual: bytes.len(),
        }
        .into());
    }
    if payload.len() > payload_len {
        return Err(FormatError::TrailingData(payload.len() - payload_len).into());
    }

    let mut grid = Grid::new(width, height);
    for (idx, cell) in grid.cells_mut().iter_mut().enumerate() {
        let bit = (payload[idx / 8] >> (idx % 8)) & 1;
        *cell = Cell::from_bit(bit);
    }

    Ok(grid)
}

/// Encode a grid as a binary byte stream.
pub fn encode(grid: &Grid) -> Vec<u8> {
    let payload_len = grid.total_cells().div_ceil(8);
    let mut out = vec![0_u8; HEADER_LEN + payload_len];

    out[0..4].copy_from_slice(&grid.width().to_ne_bytes());
    out[4..8].copy_from_slice(&grid.height().to_ne_bytes());
    for (idx, cell) in grid.cells().iter().enumerate() {
        if cell.is_alive() {
            out[HEADER_LEN + idx / 8] |= 1 << (idx % 8);
        }
    }

    out
}

/// Read a native-endian `u32` at a fixed byte offset.
#[inline]
fn read_u32(bytes: &[u8], offset: usize) -> u32 {
    let mut quad = [0_u8; 4];
    quad.copy_from_slice(&bytes[offset..offset + 4]);
    u32::from_ne_bytes(quad)
}
