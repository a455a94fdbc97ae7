//! Cell reference parsing and formatting.
//!
//! Provides bidirectional conversion between grid-style cell references
//! (e.g., "A0", "B12", "Z99") and zero-indexed row/column coordinates.
//! The grid is a single letter wide and rows count from zero, so a
//! reference is exactly one letter followed by one or two digits - which
//! also means every parseable reference is in range by construction.
//!
//! # Examples
//!
//! ```
//! use cellgrid::CellRef;
//!
//! let cell: CellRef = "b3".parse().unwrap();
//! assert_eq!(cell.row, 3);
//! assert_eq!(cell.col, 1); // 0-indexed
//! assert_eq!(cell.to_string(), "B3");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ParseError;

use super::parse;

/// A reference to a cell by row and column indices (0-indexed).
///
/// `row` must be below [`ROW_COUNT`](super::ROW_COUNT) and `col` below
/// [`COL_COUNT`](super::COL_COUNT); parsed references always are.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct CellRef {
    pub row: usize,
    pub col: usize,
}

impl CellRef {
    pub fn new(row: usize, col: usize) -> CellRef {
        CellRef { row, col }
    }
}

impl std::str::FromStr for CellRef {
    type Err = ParseError;

    /// Parse a reference like "A7" or "c42". The letter is
    /// case-insensitive and the whole input must be consumed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse::cell_ref_exact(s).ok_or_else(|| ParseError::ExpectedRef {
            found: s.to_string(),
        })
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = (b'A' as usize + self.col) as u8 as char;
        write!(f, "{}{}", letter, self.row)
    }
}
