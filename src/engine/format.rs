//! Display formatting for computed values.

/// Format a number for display. Integral values print without a decimal
/// point; everything else falls through to `f64`'s `Display` ("2.5",
/// "inf"). NaN never reaches the formatter - a NaN result falls back to
/// the cell's raw text before formatting.
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{:.0}", n)
    } else {
        n.to_string()
    }
}
