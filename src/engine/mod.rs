//! Spreadsheet engine API.
//!
//! This module provides the core computation engine for the grid:
//!
//! - [`Sheet`], [`Grid`] - cell storage and the three-operation facade
//! - [`CellRef`] - cell reference parsing (A0 notation ↔ row/col indices)
//! - [`Formula`] - a cell's raw text plus its parsed expression
//! - [`Expr`] - expression tree with depth-bounded evaluation
//! - [`parse_expr`] - recursive-descent formula parser
//! - [`format_number`] - format computed values for display

mod cell;
mod cell_ref;
mod eval;
mod format;
mod parse;
mod sheet;

pub use cell::Formula;
pub use cell_ref::CellRef;
pub use eval::{BinOp, Expr, RectOp};
pub use format::format_number;
pub use parse::parse_expr;
pub use sheet::{CELL_COUNT, COL_COUNT, Grid, ROW_COUNT, Sheet};
