//! Grid storage and the engine facade.
//!
//! [`Grid`] is a dense, row-major store of [`Formula`]s: every address
//! always holds one, with untouched cells holding the blank sentinel.
//! [`Sheet`] owns the grid exclusively and exposes the engine's entire
//! public surface - set a cell's raw text, read it back, read its
//! computed value. Reads never mutate the grid, so repeated `value`
//! calls always agree until the next `set_cell`.

use super::cell::Formula;
use super::cell_ref::CellRef;

/// Number of rows (0..=99).
pub const ROW_COUNT: usize = 100;
/// Number of columns (A..=Z).
pub const COL_COUNT: usize = 26;
/// Total addressable cells; also the dereference bound for cycle cutoff.
pub const CELL_COUNT: usize = ROW_COUNT * COL_COUNT;

/// Dense row-major cell storage.
#[derive(Clone, Debug)]
pub struct Grid {
    cells: Vec<Formula>,
}

impl Grid {
    pub(crate) fn new() -> Grid {
        Grid {
            cells: vec![Formula::empty(); CELL_COUNT],
        }
    }

    /// Fetch the formula stored at `cell`. References produced by the
    /// formula grammar are in range by construction.
    pub fn get(&self, cell: CellRef) -> &Formula {
        &self.cells[cell.row * COL_COUNT + cell.col]
    }

    pub(crate) fn set(&mut self, cell: CellRef, formula: Formula) {
        self.cells[cell.row * COL_COUNT + cell.col] = formula;
    }
}

/// The engine facade: a 100x26 spreadsheet evaluated on demand.
///
/// There is no dependency tracking and no cached results; `value` walks
/// the referenced cells live, so it always reflects the current grid.
/// `row`/`col` arguments must be below [`ROW_COUNT`]/[`COL_COUNT`] -
/// the facade indexes directly and panics otherwise.
pub struct Sheet {
    grid: Grid,
}

impl Sheet {
    /// Create a sheet with every cell blank.
    pub fn new() -> Sheet {
        Sheet { grid: Grid::new() }
    }

    /// Store raw cell text, fully replacing the prior contents. Text
    /// starting with `=` is parsed as a formula; anything else is a
    /// literal (numeric if it parses as a number, free text otherwise).
    /// This is the grid's only mutator.
    pub fn set_cell(&mut self, row: usize, col: usize, text: &str) {
        self.grid.set(CellRef::new(row, col), Formula::from_input(text));
    }

    /// The raw text last assigned to the cell, exactly as given.
    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.grid.get(CellRef::new(row, col)).display()
    }

    /// The cell's computed display value: a formatted number, or the raw
    /// text when the cell has no numeric value (free text, malformed
    /// formula, cycle).
    pub fn value(&self, row: usize, col: usize) -> String {
        self.grid
            .get(CellRef::new(row, col))
            .current_value(&self.grid)
    }
}

impl Default for Sheet {
    fn default() -> Self {
        Self::new()
    }
}
