//! Edge case tests for loxc-lex

use crate::{scan, Literal, Token, TokenKind};
use pretty_assertions::assert_eq;

fn tokens(source: &str) -> Vec<Token> {
    scan(source).into_parts().0
}

fn messages(source: &str) -> Vec<String> {
    scan(source)
        .diagnostics()
        .iter()
        .map(|d| d.to_string())
        .collect()
}

// ==================== EMPTY AND TRIVIA ====================

#[test]
fn test_edge_empty_source() {
    let result = scan("");
    assert_eq!(result.tokens(), &[Token::eof(1, 0)]);
    assert!(!result.had_error());
}

#[test]
fn test_edge_only_whitespace_and_comments() {
    let result = scan("  \t\r\n// one\n\n   // two");
    assert_eq!(result.tokens().len(), 1);
    assert_eq!(result.tokens()[0].kind, TokenKind::Eof);
    assert_eq!(result.tokens()[0].line, 4);
    assert!(result.diagnostics().is_empty());
}

#[test]
fn test_edge_eof_line_after_trailing_newline() {
    let t = tokens("x\n");
    assert_eq!(t[1].kind, TokenKind::Eof);
    assert_eq!(t[1].line, 2);
}

// ==================== LONG INPUT ====================

#[test]
fn test_edge_long_identifier() {
    let name = "a".repeat(10_000);
    let t = tokens(&format!("var {name} = 1;"));
    assert_eq!(t[1].kind, TokenKind::Identifier);
    assert_eq!(t[1].lexeme, name);
}

#[test]
fn test_edge_many_lines() {
    let source = "\n".repeat(5_000) + "x";
    let t = tokens(&source);
    assert_eq!(t[0].line, 5_001);
}

// ==================== NUMBERS ====================

#[test]
fn test_edge_number_formatting() {
    let literals: Vec<_> = tokens("123.450 200 3.0 0.500 0")
        .iter()
        .filter(|t| t.kind == TokenKind::Number)
        .map(|t| t.literal.to_string())
        .collect();
    assert_eq!(literals, vec!["123.45", "200.0", "3.0", "0.5", "0.0"]);
}

#[test]
fn test_edge_number_then_identifier() {
    let t = tokens("12abc");
    assert_eq!(t[0].lexeme, "12");
    assert_eq!(t[1].lexeme, "abc");
}

#[test]
fn test_edge_huge_number_keeps_digits() {
    let digits = "9".repeat(320);
    let t = tokens(&digits);
    assert_eq!(t[0].lexeme, digits);
    assert_eq!(t[0].literal.to_string(), format!("{digits}.0"));
}

// ==================== STRINGS ====================

#[test]
fn test_edge_string_with_comment_marker() {
    let t = tokens("\"// not a comment\"");
    assert_eq!(t[0].literal, Literal::Str("// not a comment".into()));
}

#[test]
fn test_edge_adjacent_strings() {
    let t = tokens("\"a\"\"b\"");
    assert_eq!(t[0].literal, Literal::Str("a".into()));
    assert_eq!(t[1].literal, Literal::Str("b".into()));
}

#[test]
fn test_edge_lone_quote() {
    assert_eq!(messages("\""), vec!["[line 1] Error: Unterminated string."]);
}

// ==================== ERRORS AND LINES ====================

#[test]
fn test_edge_unexpected_then_number() {
    let result = scan("@123");
    assert_eq!(result.diagnostics().len(), 1);
    assert_eq!(
        result.diagnostics()[0].to_string(),
        "[line 1] Error: Unexpected character: @"
    );
    assert_eq!(result.tokens()[0].kind, TokenKind::Number);
    assert_eq!(result.tokens()[0].lexeme, "123");
    assert_eq!(result.tokens()[0].literal.to_string(), "123.0");
}

#[test]
fn test_edge_line_after_multiline_string() {
    let source = "\"first\nsecond\nthird\"\n@";
    assert_eq!(
        messages(source),
        vec!["[line 4] Error: Unexpected character: @"]
    );
}

#[test]
fn test_edge_each_bad_char_reported() {
    assert_eq!(
        messages("%\n^&"),
        vec![
            "[line 1] Error: Unexpected character: %",
            "[line 2] Error: Unexpected character: ^",
            "[line 2] Error: Unexpected character: &",
        ]
    );
}

#[test]
fn test_edge_non_ascii_reported_once() {
    assert_eq!(
        messages("é"),
        vec!["[line 1] Error: Unexpected character: é"]
    );
}

#[test]
fn test_edge_bracket_is_unexpected() {
    let result = scan("[1]");
    assert_eq!(result.diagnostics().len(), 2);
    assert_eq!(result.tokens().len(), 2);
}

// ==================== INVARIANTS ====================

#[test]
fn test_edge_lexemes_in_order() {
    let t = tokens("fun add(a, b) { return a + b; } // sum\nprint add(1, 2.5);");
    for pair in t.windows(2) {
        assert!(pair[0].span.precedes(&pair[1].span), "{pair:?}");
    }
}

#[test]
fn test_edge_lexeme_matches_span() {
    let source = "var s = \"two\nlines\"; s != nil";
    for token in tokens(source) {
        assert_eq!(token.span.slice(source), Some(token.lexeme.as_str()));
    }
}
