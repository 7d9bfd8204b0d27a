//! Operator lexing.
//!
//! Each method runs after the first character has been consumed and applies
//! maximal munch: a following `=` always makes the two-character form.

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Picks `two` if the next character is `=`, consuming it, else `one`.
    fn one_or_two(&mut self, one: TokenKind, two: TokenKind) -> Token {
        let kind = if self.cursor.match_char('=') { two } else { one };
        self.make_token(kind)
    }

    /// Lexes equals or equals-equals.
    ///
    /// Handles: `=`, `==`
    pub(crate) fn lex_equals(&mut self) -> Token {
        self.one_or_two(TokenKind::Equal, TokenKind::EqualEqual)
    }

    /// Lexes bang or not-equals.
    ///
    /// Handles: `!`, `!=`
    pub(crate) fn lex_bang(&mut self) -> Token {
        self.one_or_two(TokenKind::Bang, TokenKind::BangEqual)
    }

    /// Handles: `<`, `<=`
    pub(crate) fn lex_less(&mut self) -> Token {
        self.one_or_two(TokenKind::Less, TokenKind::LessEqual)
    }

    /// Handles: `>`, `>=`
    pub(crate) fn lex_greater(&mut self) -> Token {
        self.one_or_two(TokenKind::Greater, TokenKind::GreaterEqual)
    }

    /// Lexes slash or a line comment.
    ///
    /// Returns `None` for `//`, after discarding the rest of the line.
    pub(crate) fn lex_slash(&mut self) -> Option<Token> {
        if self.cursor.match_char('/') {
            self.skip_line_comment();
            return None;
        }
        Some(self.make_token(TokenKind::Slash))
    }
}
