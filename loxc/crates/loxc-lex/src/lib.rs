//! loxc-lex - Lexical Analyzer for Lox
//!
//! This crate turns Lox source text into a flat sequence of tokens. Malformed
//! lexemes are reported as diagnostics and skipped, so one bad character never
//! hides the rest of the file.
//!
//! # Example Usage
//!
//! ```
//! use loxc_lex::{scan, TokenKind};
//!
//! let result = scan("var x = 42;");
//! assert!(!result.had_error());
//!
//! let lines: Vec<String> = result.tokens().iter().map(|t| t.to_string()).collect();
//! assert_eq!(
//!     lines,
//!     vec![
//!         "VAR var null",
//!         "IDENTIFIER x null",
//!         "EQUAL = null",
//!         "NUMBER 42 42.0",
//!         "SEMICOLON ; null",
//!         "EOF  null",
//!     ]
//! );
//! ```
//!
//! For incremental use, drive a [`Lexer`] directly with your own
//! [`Handler`](loxc_util::Handler).
//!
//! # Module Structure
//!
//! - [`token`] - Token kinds, literals and the keyword table
//! - [`lexer`] - The lexer and its sub-scanners
//! - [`cursor`] - Character cursor with line tracking
//! - [`classify`] - Character class predicates
//! - [`scan`] - One-shot scanning into a [`ScanResult`]
//!
//! # Token Categories
//!
//! **Punctuation**: `(` `)` `{` `}` `,` `.` `-` `+` `;` `*` `/`
//!
//! **Operators**: `=` `==` `!` `!=` `<` `<=` `>` `>=`
//!
//! **Literals**: strings (`"..."`, may span lines, no escapes) and numbers
//! (`123`, `4.56`)
//!
//! **Keywords**: `and`, `class`, `else`, `false`, `for`, `fun`, `if`, `nil`,
//! `or`, `print`, `return`, `super`, `this`, `true`, `var`, `while`
//!
//! Comments run from `//` to the end of the line.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod classify;
pub mod cursor;
pub mod lexer;
pub mod scan;
pub mod token;

#[cfg(test)]
mod edge_cases;

pub use cursor::Cursor;
pub use lexer::{canonicalize_number, Lexer};
pub use scan::{scan, ScanResult};
pub use token::{keyword_from_ident, Literal, NumberLiteral, Token, TokenKind, KEYWORDS};

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render(source: &str) -> Vec<String> {
        scan(source).tokens().iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_hello_world_program() {
        assert_eq!(
            render("print \"Hello, World!\";"),
            vec![
                "PRINT print null",
                "STRING \"Hello, World!\" Hello, World!",
                "SEMICOLON ; null",
                "EOF  null",
            ]
        );
    }

    #[test]
    fn test_class_program() {
        let source = r#"
class Breakfast {
  cook() {
    print "Eggs a-fryin'!";
  }
}
"#;
        let result = scan(source);
        assert!(!result.had_error());

        let kinds: Vec<_> = result.tokens().iter().map(|t| t.kind).collect();
        use TokenKind::*;
        assert_eq!(
            kinds,
            vec![
                Class, Identifier, LeftBrace, Identifier, LeftParen, RightParen, LeftBrace,
                Print, String, Semicolon, RightBrace, RightBrace, Eof
            ]
        );
        assert_eq!(result.tokens()[0].line, 2);
        assert_eq!(result.tokens()[7].line, 4);
        assert_eq!(result.tokens().last().map(|t| t.line), Some(7));
    }

    #[test]
    fn test_loop_program() {
        let source = "for (var i = 0; i < 10; i = i + 1) {\n  if (i != 5 and !done) print i / 2.50;\n}";
        let result = scan(source);
        assert!(!result.had_error());

        let numbers: Vec<_> = result
            .tokens()
            .iter()
            .filter(|t| t.kind == TokenKind::Number)
            .map(|t| t.literal.to_string())
            .collect();
        assert_eq!(numbers, vec!["0.0", "10.0", "1.0", "5.0", "2.5"]);
    }

    #[test]
    fn test_mixed_errors_and_tokens() {
        assert_eq!(
            render("(@)"),
            vec!["LEFT_PAREN ( null", "RIGHT_PAREN ) null", "EOF  null"]
        );
    }
}
