//! Recursive-descent formula parser.
//!
//! Turns the expression text after the leading `=` into an [`Expr`] tree.
//! Matching is leftmost and greedy, in a fixed order: cell reference
//! first, then operator call, then bare constant. A constant that does
//! not parse as a number becomes a NaN leaf, which is how free text like
//! "Total" displays verbatim while contributing nothing numerically.
//!
//! The scanner is a plain byte cursor - the grammar is pure ASCII, and
//! non-ASCII bytes can only occur inside constants, whose delimiters
//! (space, comma, parentheses) are ASCII. Trailing input after a complete
//! expression is ignored. Whitespace is tolerated around the argument
//! comma and before a closing parenthesis.

use crate::error::ParseError;

use super::cell_ref::CellRef;
use super::eval::{BinOp, Expr, RectOp};

/// Parse one formula expression (the text after the `=` marker).
pub fn parse_expr(input: &str) -> Result<Expr, ParseError> {
    Scanner::new(input).expr()
}

/// Parse a standalone cell reference, requiring the whole input to be
/// consumed. Backs [`CellRef`]'s `FromStr`.
pub(super) fn cell_ref_exact(input: &str) -> Option<CellRef> {
    let mut s = Scanner::new(input);
    let cell = s.try_cell_ref()?;
    s.at_end().then_some(cell)
}

/// The operator-call head recognized after a name directly followed by `(`.
#[derive(Clone, Copy)]
enum Call {
    Bin(BinOp),
    Rect(RectOp),
}

const CALLS: [(&str, Call); 6] = [
    ("sum", Call::Rect(RectOp::Sum)),
    ("prod", Call::Rect(RectOp::Prod)),
    ("add", Call::Bin(BinOp::Add)),
    ("sub", Call::Bin(BinOp::Sub)),
    ("div", Call::Bin(BinOp::Div)),
    ("mul", Call::Bin(BinOp::Mul)),
];

/// Byte cursor over formula text.
struct Scanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Scanner<'a> {
        Scanner { input, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn at_end(&self) -> bool {
        self.pos == self.input.len()
    }

    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    fn skip_spaces(&mut self) {
        while self.peek() == Some(b' ') {
            self.pos += 1;
        }
    }

    /// Consume `expected` or fail with the remaining input.
    fn eat(&mut self, expected: u8) -> Result<(), ParseError> {
        if self.peek() == Some(expected) {
            self.pos += 1;
            Ok(())
        } else {
            Err(ParseError::Expected {
                expected: expected as char,
                found: self.rest().to_string(),
            })
        }
    }

    /// One expression, greedy: reference, operator call, constant. Input
    /// matching none of the three yields the empty (NaN) expression.
    fn expr(&mut self) -> Result<Expr, ParseError> {
        if let Some(cell) = self.try_cell_ref() {
            return Ok(Expr::Ref(cell));
        }
        if let Some(call) = self.try_call() {
            return self.call_args(call);
        }
        match self.constant_token() {
            Some(token) => Ok(Expr::Number(token.parse().unwrap_or(f64::NAN))),
            None => Ok(Expr::Empty),
        }
    }

    /// A reference is one letter followed by one or two digits, greedy on
    /// the second digit. Leaves the cursor untouched when there is no
    /// match, so the token can still be tried as a call or constant.
    fn try_cell_ref(&mut self) -> Option<CellRef> {
        let bytes = self.input.as_bytes();
        let letter = *bytes.get(self.pos)?;
        if !letter.is_ascii_alphabetic() {
            return None;
        }
        let d0 = *bytes.get(self.pos + 1)?;
        if !d0.is_ascii_digit() {
            return None;
        }
        let mut row = (d0 - b'0') as usize;
        let mut len = 2;
        if let Some(d1) = bytes.get(self.pos + 2) {
            if d1.is_ascii_digit() {
                row = row * 10 + (d1 - b'0') as usize;
                len = 3;
            }
        }
        self.pos += len;
        let col = (letter.to_ascii_uppercase() - b'A') as usize;
        Some(CellRef::new(row, col))
    }

    /// Match an operator name directly followed by `(`, consuming both.
    /// Names are case-insensitive, like reference letters. Comparison is
    /// byte-wise so a non-ASCII constant at the cursor cannot trip a
    /// char-boundary slice.
    fn try_call(&mut self) -> Option<Call> {
        let rest = self.rest().as_bytes();
        for (name, call) in CALLS {
            if rest.len() > name.len()
                && rest[..name.len()].eq_ignore_ascii_case(name.as_bytes())
                && rest[name.len()] == b'('
            {
                self.pos += name.len() + 1;
                return Some(call);
            }
        }
        None
    }

    /// Arguments of a call whose name and `(` are already consumed.
    fn call_args(&mut self, call: Call) -> Result<Expr, ParseError> {
        match call {
            Call::Bin(op) => {
                let left = self.expr()?;
                self.skip_spaces();
                self.eat(b',')?;
                self.skip_spaces();
                let right = self.expr()?;
                self.skip_spaces();
                self.eat(b')')?;
                Ok(Expr::call(op, left, right))
            }
            Call::Rect(op) => {
                let a = self.cell_ref()?;
                self.eat(b':')?;
                let b = self.cell_ref()?;
                self.skip_spaces();
                self.eat(b')')?;
                Ok(Expr::rect(op, a, b))
            }
        }
    }

    /// A rectangle corner must be a reference.
    fn cell_ref(&mut self) -> Result<CellRef, ParseError> {
        self.try_cell_ref().ok_or_else(|| ParseError::ExpectedRef {
            found: self.rest().to_string(),
        })
    }

    /// A constant is a maximal run of bytes excluding space, comma, and
    /// parentheses. All four delimiters are ASCII, so the slice always
    /// falls on UTF-8 boundaries.
    fn constant_token(&mut self) -> Option<&'a str> {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if matches!(c, b' ' | b',' | b'(' | b')') {
                break;
            }
            self.pos += 1;
        }
        (self.pos > start).then(|| &self.input[start..self.pos])
    }
}
