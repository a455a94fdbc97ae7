//! Formula storage: a cell's raw text plus its parsed expression.

use super::eval::Expr;
use super::format::format_number;
use super::parse;
use super::sheet::Grid;

/// A cell's contents. Immutable once built: `set_cell` replaces the whole
/// Formula rather than mutating it, so evaluation state never lingers.
#[derive(Clone, Debug)]
pub struct Formula {
    display: String,
    expr: Expr,
}

impl Formula {
    /// The blank-cell sentinel: empty display text, NaN value.
    pub fn empty() -> Formula {
        Formula {
            display: String::new(),
            expr: Expr::Empty,
        }
    }

    /// Build a Formula from raw cell input. A leading `=` marks formula
    /// text and the remainder goes through the parser; anything else is a
    /// literal. A malformed formula degrades to a NaN value so the cell
    /// displays its text verbatim instead of poisoning the grid.
    pub fn from_input(input: &str) -> Formula {
        let expr = match input.strip_prefix('=') {
            Some(src) => parse::parse_expr(src).unwrap_or(Expr::Empty),
            None => Expr::Number(input.trim().parse().unwrap_or(f64::NAN)),
        };
        Formula {
            display: input.to_string(),
            expr,
        }
    }

    /// The raw text as last assigned (exact round trip, marker included).
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Numeric value at the given dereference depth.
    pub fn eval(&self, grid: &Grid, depth: usize) -> f64 {
        self.expr.eval(grid, depth)
    }

    /// Display value: the evaluated number formatted, or the raw text
    /// when the formula has no numeric value.
    pub fn current_value(&self, grid: &Grid) -> String {
        let n = self.eval(grid, 0);
        if n.is_nan() {
            self.display.clone()
        } else {
            format_number(n)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::sheet::Grid;
    use super::Formula;

    #[test]
    fn test_literal_number() {
        let grid = Grid::new();
        let f = Formula::from_input("41");
        assert_eq!(f.display(), "41");
        assert_eq!(f.eval(&grid, 0), 41.0);
        assert_eq!(f.current_value(&grid), "41");
    }

    #[test]
    fn test_literal_number_ignores_surrounding_whitespace() {
        let grid = Grid::new();
        let f = Formula::from_input(" 2.5 ");
        assert_eq!(f.display(), " 2.5 ");
        assert_eq!(f.current_value(&grid), "2.5");
    }

    #[test]
    fn test_literal_text_falls_back_to_display() {
        let grid = Grid::new();
        let f = Formula::from_input("Total");
        assert!(f.eval(&grid, 0).is_nan());
        assert_eq!(f.current_value(&grid), "Total");
    }

    #[test]
    fn test_empty_sentinel() {
        let grid = Grid::new();
        let f = Formula::empty();
        assert_eq!(f.display(), "");
        assert!(f.eval(&grid, 0).is_nan());
        assert_eq!(f.current_value(&grid), "");
    }

    #[test]
    fn test_malformed_formula_keeps_text() {
        let grid = Grid::new();
        let f = Formula::from_input("=add(1");
        assert_eq!(f.display(), "=add(1");
        assert!(f.eval(&grid, 0).is_nan());
        assert_eq!(f.current_value(&grid), "=add(1");
    }

    #[test]
    fn test_formula_marker_is_stripped_for_parsing_only() {
        let grid = Grid::new();
        let f = Formula::from_input("=add(1,1)");
        assert_eq!(f.display(), "=add(1,1)");
        assert_eq!(f.current_value(&grid), "2");
    }
}
