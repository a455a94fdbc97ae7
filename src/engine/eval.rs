//! Expression tree and depth-bounded evaluation.
//!
//! There is no dependency graph. Every cross-cell dereference - a plain
//! reference or one cell of a sum/prod rectangle - evaluates the target
//! at `depth + 1`, and a dereference past [`CELL_COUNT`] yields NaN
//! instead of recursing. A chain of more than 2600 dereferences must
//! revisit some cell (pigeonhole over a 2600-cell grid), so the bound
//! only ever fires on cycles; acyclic chains cannot reach it. Cells on
//! or downstream of a cycle thus evaluate to NaN and display their raw
//! text, with no unbounded recursion anywhere.

use super::cell_ref::CellRef;
use super::sheet::{CELL_COUNT, Grid};

/// Binary arithmetic operators.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

/// Rectangle fold operators.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RectOp {
    Sum,
    Prod,
}

/// A parsed formula expression.
#[derive(Clone, Debug)]
pub enum Expr {
    /// Blank cell or unmatched formula text; always NaN.
    Empty,
    /// Numeric constant. Free text is a constant that failed to parse
    /// and is carried as NaN.
    Number(f64),
    /// Reference to another cell, evaluated live on every read.
    Ref(CellRef),
    /// Two-argument arithmetic call, e.g. `add(A0,mul(B1,2))`.
    Call {
        op: BinOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// Fold over a rectangle of cells; corners are normalized at
    /// construction so either corner order denotes the same rectangle.
    Rect {
        op: RectOp,
        top_left: CellRef,
        bottom_right: CellRef,
    },
}

impl Expr {
    pub(crate) fn call(op: BinOp, left: Expr, right: Expr) -> Expr {
        Expr::Call {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub(crate) fn rect(op: RectOp, a: CellRef, b: CellRef) -> Expr {
        Expr::Rect {
            op,
            top_left: CellRef::new(a.row.min(b.row), a.col.min(b.col)),
            bottom_right: CellRef::new(a.row.max(b.row), a.col.max(b.col)),
        }
    }

    /// Evaluate against `grid` at the given dereference depth. Total for
    /// any depth and grid state: always a float or NaN, never a panic or
    /// unbounded recursion.
    ///
    /// Arithmetic is plain IEEE-754: division by zero gives ±inf or NaN,
    /// and a NaN operand makes the whole call NaN. The rectangle folds
    /// differ - they discard NaN cells and fold the rest, so an empty or
    /// all-NaN rectangle yields the fold identity (0 for sum, 1 for prod).
    pub fn eval(&self, grid: &Grid, depth: usize) -> f64 {
        match self {
            Expr::Empty => f64::NAN,
            Expr::Number(n) => *n,
            Expr::Ref(cell) => deref(grid, *cell, depth),
            Expr::Call { op, left, right } => {
                let x = left.eval(grid, depth);
                let y = right.eval(grid, depth);
                match op {
                    BinOp::Add => x + y,
                    BinOp::Sub => x - y,
                    BinOp::Mul => x * y,
                    BinOp::Div => x / y,
                }
            }
            Expr::Rect {
                op,
                top_left,
                bottom_right,
            } => {
                let mut acc = match op {
                    RectOp::Sum => 0.0,
                    RectOp::Prod => 1.0,
                };
                for row in top_left.row..=bottom_right.row {
                    for col in top_left.col..=bottom_right.col {
                        let n = deref(grid, CellRef::new(row, col), depth);
                        if n.is_nan() {
                            continue;
                        }
                        match op {
                            RectOp::Sum => acc += n,
                            RectOp::Prod => acc *= n,
                        }
                    }
                }
                acc
            }
        }
    }
}

/// Dereference one cell, counting the hop against the cycle bound.
fn deref(grid: &Grid, cell: CellRef, depth: usize) -> f64 {
    if depth > CELL_COUNT {
        return f64::NAN;
    }
    grid.get(cell).eval(grid, depth + 1)
}
