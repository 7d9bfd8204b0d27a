//! Identifier and keyword lexing.

use crate::classify::is_alpha_numeric;
use crate::token::{keyword_from_ident, Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier or keyword.
    ///
    /// Consumes the longest run of letters, digits and underscores, then looks
    /// the whole lexeme up in the keyword table.
    pub(crate) fn lex_identifier(&mut self) -> Token {
        while is_alpha_numeric(self.cursor.peek()) {
            self.cursor.advance();
        }

        let text = self.cursor.slice_from(self.token_start);
        let kind = keyword_from_ident(text).unwrap_or(TokenKind::Identifier);
        self.make_token(kind)
    }
}
