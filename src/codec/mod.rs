//! Codec module: Bit-exact file formats for persisting grids.
//!
//! Two formats are supported:
//! - [`ascii`]: a plain-text format, conventional extension `.gol`
//! - [`binary`]: a packed-bit format, conventional extension `.bgol`
//!
//! Neither codec enforces an extension. Both perform a single complete
//! read or write per call and round-trip every grid cell-for-cell:
//! `decode(&encode(&g)) == g`.

pub mod ascii;
pub mod binary;
