//! cellgrid - in-memory spreadsheet formula engine.
//!
//! A fixed grid of 100 rows by 26 columns (A-Z) where each cell holds raw
//! text: either a literal, or a formula marked by a leading `=`. Values are
//! computed on demand by walking references recursively; there is no
//! dependency graph and no caching, so a dependent cell always reflects the
//! latest state of whatever it references. Cycles are cut off by a
//! dereference-depth bound and degrade to the cell's own text.
//!
//! ```
//! use cellgrid::Sheet;
//!
//! let mut sheet = Sheet::new();
//! sheet.set_cell(0, 0, "41");
//! sheet.set_cell(0, 1, "=add(A0,1)");
//! assert_eq!(sheet.value(0, 1), "42");
//! assert_eq!(sheet.cell(0, 1), "=add(A0,1)");
//! ```

pub mod engine;
pub mod error;

pub use engine::{CellRef, Formula, Sheet};
pub use error::{ParseError, Result};
