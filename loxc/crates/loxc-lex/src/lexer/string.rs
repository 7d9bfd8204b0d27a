//! String literal lexing.

use loxc_util::diagnostic::E_LEXER_UNTERMINATED_STRING;

use crate::token::{Literal, Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a string literal after its opening quote.
    ///
    /// Strings may span lines and have no escape sequences. The literal is
    /// the text between the quotes. Hitting the end of input first reports
    /// `Unterminated string.` and produces no token.
    pub(crate) fn lex_string(&mut self) -> Option<Token> {
        while !self.cursor.is_at_end() && self.cursor.peek() != '"' {
            self.cursor.advance();
        }

        if self.cursor.is_at_end() {
            self.report_error(
                E_LEXER_UNTERMINATED_STRING,
                "Unterminated string.".to_string(),
            );
            return None;
        }

        // Closing quote
        self.cursor.advance();

        let lexeme = self.cursor.slice_from(self.token_start);
        let value = lexeme.get(1..lexeme.len() - 1).unwrap_or_default();
        Some(self.make_literal_token(TokenKind::String, Literal::Str(value.to_string())))
    }
}

#[cfg(test)]
mod tests {
    use crate::token::{Literal, Token, TokenKind};
    use crate::Lexer;
    use loxc_util::Handler;
    use pretty_assertions::assert_eq;

    fn lex(source: &str) -> (Vec<Token>, Handler) {
        let mut handler = Handler::new();
        let tokens = Lexer::new(source, &mut handler).collect();
        (tokens, handler)
    }

    #[test]
    fn test_simple_string() {
        let (tokens, handler) = lex("\"hello\"");
        assert!(!handler.has_errors());
        assert_eq!(tokens[0].kind, TokenKind::String);
        assert_eq!(tokens[0].lexeme, "\"hello\"");
        assert_eq!(tokens[0].literal, Literal::Str("hello".into()));
        assert_eq!(tokens[0].to_string(), "STRING \"hello\" hello");
    }

    #[test]
    fn test_empty_string() {
        let (tokens, _) = lex("\"\"");
        assert_eq!(tokens[0].literal, Literal::Str(String::new()));
        assert_eq!(tokens[0].to_string(), "STRING \"\" ");
    }

    #[test]
    fn test_no_escape_processing() {
        let (tokens, _) = lex(r#""a\nb""#);
        assert_eq!(tokens[0].literal, Literal::Str(r"a\nb".into()));
    }

    #[test]
    fn test_string_keeps_unicode() {
        let (tokens, handler) = lex("\"héllo €\"");
        assert!(!handler.has_errors());
        assert_eq!(tokens[0].literal, Literal::Str("héllo €".into()));
    }

    #[test]
    fn test_multiline_string() {
        let (tokens, _) = lex("\"one\ntwo\nthree\" x");
        assert_eq!(tokens[0].line, 1);
        assert_eq!(tokens[0].literal, Literal::Str("one\ntwo\nthree".into()));
        assert_eq!(tokens[1].lexeme, "x");
        assert_eq!(tokens[1].line, 3);
    }

    #[test]
    fn test_unterminated_string() {
        let (tokens, handler) = lex("\"abc");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Eof);
        assert_eq!(handler.error_count(), 1);
        assert_eq!(
            handler.diagnostics()[0].to_string(),
            "[line 1] Error: Unterminated string."
        );
    }

    #[test]
    fn test_unterminated_string_reports_last_line() {
        let (tokens, handler) = lex("(\"abc\ndef\n");
        assert_eq!(tokens[0].kind, TokenKind::LeftParen);
        assert_eq!(handler.diagnostics()[0].line(), 3);
        assert_eq!(tokens.last().map(|t| t.line), Some(3));
    }
}
