//! Error types shared across the crate.
//!
//! Uses `thiserror` for typed errors that surface through the grid
//! operations and the file codecs. Every failure is recoverable and is
//! reported before any state is mutated; a grid is never left partially
//! written by a failed operation.

use std::io;

/// Convenience alias for fallible operations in this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by grid operations and the file codecs.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A coordinate or rectangle corner lies outside the grid bounds.
    #[error("position ({x}, {y}) is outside a {width}x{height} grid")]
    OutOfRange {
        /// X coordinate that was rejected.
        x: u32,
        /// Y coordinate that was rejected.
        y: u32,
        /// Width of the grid at the time of the access.
        width: u32,
        /// Height of the grid at the time of the access.
        height: u32,
    },

    /// A crop window with inverted corners.
    #[error("invalid rectangle: ({x0}, {y0}) to ({x1}, {y1})")]
    InvalidArgument {
        /// Left edge of the window.
        x0: u32,
        /// Top edge of the window.
        y0: u32,
        /// Right edge of the window (exclusive).
        x1: u32,
        /// Bottom edge of the window (exclusive).
        y1: u32,
    },

    /// The file could not be opened, read, or written.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A file violated the expected layout.
    #[error("format error: {0}")]
    Format(#[from] FormatError),
}

/// Layout violations detected while decoding a grid file.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// The header line did not contain two decimal integers.
    #[error("malformed header: {0}")]
    Header(String),

    /// A data row was shorter or longer than the declared width.
    #[error("row {row} is {actual} cells long, expected {expected}")]
    RowLength {
        /// Zero-based row index within the grid payload.
        row: u32,
        /// The width declared in the header.
        expected: u32,
        /// The number of cell bytes actually found.
        actual: u32,
    },

    /// A cell byte was neither the alive nor the dead character.
    #[error("illegal character {byte:#04x} at row {row}, column {col}")]
    IllegalCharacter {
        /// Zero-based row index of the offending byte.
        row: u32,
        /// Zero-based column index of the offending byte.
        col: u32,
        /// The byte that was read.
        byte: u8,
    },

    /// The payload ended before the declared cell count was read.
    #[error("payload truncated: expected {expected} bytes, found {actual}")]
    Truncated {
        /// Bytes required by the header.
        expected: usize,
        /// Bytes present in the payload.
        actual: usize,
    },

    /// Bytes remained after the final declared row.
    #[error("{0} trailing bytes after grid payload")]
    TrailingData(usize),
}
