//! Text rendering of tokens and diagnostics.
//!
//! Both functions only format; the caller picks the streams.

use std::io::{self, Write};

use loxc_lex::Token;
use loxc_util::Diagnostic;

/// Writes one `KIND LEXEME LITERAL` line per token.
///
/// # Example
///
/// ```
/// use loxc_drv::render::render_tokens;
///
/// let result = loxc_lex::scan("x = 1");
/// let mut out = Vec::new();
/// render_tokens(result.tokens(), &mut out).unwrap();
///
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     "IDENTIFIER x null\nEQUAL = null\nNUMBER 1 1.0\nEOF  null\n"
/// );
/// ```
pub fn render_tokens<W: Write>(tokens: &[Token], mut out: W) -> io::Result<()> {
    for token in tokens {
        writeln!(out, "{}", token)?;
    }
    out.flush()
}

/// Writes one `[line N] Error: message` line per diagnostic.
///
/// With `color` set, the level word is wrapped in its ANSI color.
pub fn render_diagnostics<W: Write>(
    diagnostics: &[Diagnostic],
    mut out: W,
    color: bool,
) -> io::Result<()> {
    for diag in diagnostics {
        if color {
            writeln!(
                out,
                "[line {}] \x1b[1;{}m{}\x1b[0m: {}",
                diag.line(),
                diag.level.color_code(),
                diag.level.label(),
                diag.message
            )?;
        } else {
            writeln!(out, "{}", diag)?;
        }
    }
    out.flush()
}
