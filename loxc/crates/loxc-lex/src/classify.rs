//! Character classification.
//!
//! Pure predicates the sub-scanners use to decide where a lexeme ends. Lox
//! identifiers and numbers are ASCII only; anything else falls through to the
//! unexpected-character path.

/// Returns true if `c` can start an identifier (`[A-Za-z_]`).
///
/// # Example
///
/// ```
/// use loxc_lex::classify::is_alpha;
///
/// assert!(is_alpha('_'));
/// assert!(is_alpha('Q'));
/// assert!(!is_alpha('7'));
/// assert!(!is_alpha('é'));
/// ```
#[inline]
pub fn is_alpha(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Returns true if `c` is a decimal digit (`[0-9]`).
#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Returns true if `c` can continue an identifier (`[A-Za-z0-9_]`).
#[inline]
pub fn is_alpha_numeric(c: char) -> bool {
    is_alpha(c) || is_digit(c)
}

/// Returns true for the insignificant whitespace characters.
///
/// Newline is deliberately absent: the cursor counts lines as it consumes
/// `'\n'`, and the dispatch loop discards it separately.
#[inline]
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\r' | '\t')
}
