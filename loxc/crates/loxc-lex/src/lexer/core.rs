//! Core lexer implementation.
//!
//! This module contains the Lexer struct, the dispatch loop and error
//! reporting shared by the sub-scanners.

use loxc_util::diagnostic::{DiagnosticCode, E_LEXER_UNEXPECTED_CHAR};
use loxc_util::{DiagnosticBuilder, Handler, Span};
use tracing::trace;

use crate::classify::{is_alpha, is_digit, is_whitespace};
use crate::cursor::Cursor;
use crate::token::{Literal, Token, TokenKind};

/// Lexer for Lox source text.
///
/// Each call to [`next_token`](Lexer::next_token) marks a lexeme start,
/// consumes one character and dispatches on it. Whitespace, newlines and
/// comments produce nothing, so the loop runs until a token comes out or the
/// input is exhausted. Problems are reported to the [`Handler`] and scanning
/// carries on with the next character.
///
/// # Example
///
/// ```
/// use loxc_lex::{Lexer, TokenKind};
/// use loxc_util::Handler;
///
/// let mut handler = Handler::new();
/// let kinds: Vec<_> = Lexer::new("var x;", &mut handler).map(|t| t.kind).collect();
///
/// assert_eq!(
///     kinds,
///     vec![TokenKind::Var, TokenKind::Identifier, TokenKind::Semicolon, TokenKind::Eof]
/// );
/// assert!(!handler.has_errors());
/// ```
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Error handler for reporting lexical errors.
    handler: &'a mut Handler,

    /// Starting position of the current lexeme (byte offset).
    pub(crate) token_start: usize,

    /// Line number where the current lexeme starts (1-based).
    token_start_line: u32,

    /// Set once the iterator has yielded the EOF token.
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given source code.
    pub fn new(source: &'a str, handler: &'a mut Handler) -> Self {
        Self {
            cursor: Cursor::new(source),
            handler,
            token_start: 0,
            token_start_line: 1,
            finished: false,
        }
    }

    /// Returns the next token from the source code.
    ///
    /// At the end of input this returns the EOF token, and keeps returning it
    /// on every further call.
    pub fn next_token(&mut self) -> Token {
        loop {
            self.token_start = self.cursor.position();
            self.token_start_line = self.cursor.line();

            if self.cursor.is_at_end() {
                return Token::eof(self.cursor.line(), self.cursor.position());
            }

            let c = self.cursor.advance();
            if let Some(token) = self.scan_token(c) {
                return token;
            }
        }
    }

    /// Dispatches on the character just consumed.
    ///
    /// Returns `None` when the lexeme produces no token.
    fn scan_token(&mut self, c: char) -> Option<Token> {
        let token = match c {
            '(' => self.make_token(TokenKind::LeftParen),
            ')' => self.make_token(TokenKind::RightParen),
            '{' => self.make_token(TokenKind::LeftBrace),
            '}' => self.make_token(TokenKind::RightBrace),
            ',' => self.make_token(TokenKind::Comma),
            '.' => self.make_token(TokenKind::Dot),
            '-' => self.make_token(TokenKind::Minus),
            '+' => self.make_token(TokenKind::Plus),
            ';' => self.make_token(TokenKind::Semicolon),
            '*' => self.make_token(TokenKind::Star),
            '=' => self.lex_equals(),
            '!' => self.lex_bang(),
            '<' => self.lex_less(),
            '>' => self.lex_greater(),
            '/' => return self.lex_slash(),
            '\n' => return None,
            c if is_whitespace(c) => return None,
            '"' => return self.lex_string(),
            c if is_digit(c) => self.lex_number(),
            c if is_alpha(c) => self.lex_identifier(),
            c => {
                self.report_error(
                    E_LEXER_UNEXPECTED_CHAR,
                    format!("Unexpected character: {}", c),
                );
                return None;
            },
        };
        Some(token)
    }

    /// Builds a token without a literal from the current lexeme.
    pub(crate) fn make_token(&self, kind: TokenKind) -> Token {
        self.make_literal_token(kind, Literal::None)
    }

    /// Builds a token carrying `literal` from the current lexeme.
    pub(crate) fn make_literal_token(&self, kind: TokenKind, literal: Literal) -> Token {
        Token::new(
            kind,
            self.cursor.slice_from(self.token_start),
            literal,
            self.token_start_line,
            self.lexeme_span(),
        )
    }

    /// Span of the current lexeme, tagged with its starting line.
    fn lexeme_span(&self) -> Span {
        Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
        )
    }

    /// Reports a lexical error covering the current lexeme.
    ///
    /// The diagnostic is tagged with the line the cursor is on now, which for
    /// an unterminated string is the last line of the input.
    pub(crate) fn report_error(&mut self, code: DiagnosticCode, message: String) {
        let line = self.cursor.line();
        trace!(line, %code, "{}", message);

        let span = Span::new(self.token_start, self.cursor.position(), line);
        DiagnosticBuilder::error(message)
            .code(code)
            .span(span)
            .emit(self.handler);
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    /// Yields every token, then the EOF token exactly once.
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        if token.kind == TokenKind::Eof {
            self.finished = true;
        }
        Some(token)
    }
}
