//! Error types for the cellgrid engine.

use thiserror::Error;

/// Errors produced while parsing formula text.
///
/// The [`Sheet`](crate::engine::Sheet) facade never surfaces these: a cell
/// whose formula fails to parse keeps its raw text and evaluates to NaN.
/// The type is public for callers driving the parser directly.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected `{expected}` at `{found}`")]
    Expected { expected: char, found: String },

    #[error("expected cell reference at `{found}`")]
    ExpectedRef { found: String },
}

pub type Result<T> = std::result::Result<T, ParseError>;
