//! Number literal lexing.
//!
//! Lox has a single number type. The literal carried by a NUMBER token is a
//! canonical decimal text: it always contains a point, and trailing zeros
//! after the point are dropped down to a single digit.
//!
//! | source    | literal  |
//! |-----------|----------|
//! | `200`     | `200.0`  |
//! | `3.0`     | `3.0`    |
//! | `123.450` | `123.45` |
//! | `0.500`   | `0.5`    |

use tracing::warn;

use crate::classify::is_digit;
use crate::token::{Literal, NumberLiteral, Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a number literal after its first digit.
    ///
    /// A `.` only belongs to the number when a digit follows it, so `1.`
    /// scans as NUMBER then DOT.
    pub(crate) fn lex_number(&mut self) -> Token {
        self.consume_digits();

        if self.cursor.peek() == '.' && is_digit(self.cursor.peek_next()) {
            self.cursor.advance();
            self.consume_digits();
        }

        let text = self.cursor.slice_from(self.token_start);
        let literal = number_literal(text);
        self.make_literal_token(TokenKind::Number, Literal::Number(literal))
    }

    fn consume_digits(&mut self) {
        while is_digit(self.cursor.peek()) {
            self.cursor.advance();
        }
    }
}

/// Parses a scanned number lexeme into its value and canonical text.
fn number_literal(text: &str) -> NumberLiteral {
    NumberLiteral {
        value: text.parse().unwrap_or(f64::NAN),
        text: canonicalize_number(text),
    }
}

/// Returns the canonical text for a number lexeme (`digits` or
/// `digits.digits`).
///
/// The value is printed with as many fractional digits as the source had,
/// then trailing zeros are trimmed, keeping at least one digit after the
/// point.
///
/// # Example
///
/// ```
/// use loxc_lex::canonicalize_number;
///
/// assert_eq!(canonicalize_number("200"), "200.0");
/// assert_eq!(canonicalize_number("123.450"), "123.45");
/// assert_eq!(canonicalize_number("3.0"), "3.0");
/// assert_eq!(canonicalize_number("007"), "7.0");
/// ```
pub fn canonicalize_number(text: &str) -> String {
    let value = match text.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => {
            warn!(lexeme = text, "number literal out of range, keeping source digits");
            return normalize_digits(text);
        },
    };

    let precision = text.split_once('.').map_or(0, |(_, frac)| frac.len());
    let mut out = format!("{:.*}", precision, value);
    trim_fraction(&mut out);
    out
}

/// Trims trailing fractional zeros in place, or appends `.0` when there is no
/// point at all.
fn trim_fraction(out: &mut String) {
    match out.find('.') {
        Some(dot) => {
            let keep = out.trim_end_matches('0').len().max(dot + 2);
            out.truncate(keep);
        },
        None => out.push_str(".0"),
    }
}

/// Canonical text computed on the digits alone.
///
/// Used for lexemes too large for an `f64`: leading zeros are stripped from
/// the integer part and the fraction is trimmed the usual way.
fn normalize_digits(text: &str) -> String {
    let (int, frac) = text.split_once('.').unwrap_or((text, ""));
    let int = int.trim_start_matches('0');

    let mut out = String::with_capacity(text.len() + 2);
    out.push_str(if int.is_empty() { "0" } else { int });
    if !frac.is_empty() {
        out.push('.');
        out.push_str(frac);
    }
    trim_fraction(&mut out);
    out
}
