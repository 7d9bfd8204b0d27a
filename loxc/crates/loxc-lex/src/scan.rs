//! One-shot scanning.
//!
//! [`scan`] owns everything a single pass needs and hands back an immutable
//! [`ScanResult`]. Nothing survives between calls, so scanning the same text
//! twice gives identical results.

use loxc_util::{Diagnostic, Handler};
use tracing::debug;

use crate::lexer::Lexer;
use crate::token::Token;

/// Tokens and diagnostics from one scan.
///
/// The token list always ends with exactly one EOF token, even when errors
/// were reported.
#[derive(Clone, Debug, PartialEq)]
pub struct ScanResult {
    tokens: Vec<Token>,
    diagnostics: Vec<Diagnostic>,
}

impl ScanResult {
    /// Tokens in source order, ending with EOF.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Diagnostics in the order they were reported.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// True iff at least one diagnostic was reported.
    pub fn had_error(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Splits the result into its tokens and diagnostics.
    pub fn into_parts(self) -> (Vec<Token>, Vec<Diagnostic>) {
        (self.tokens, self.diagnostics)
    }
}

/// Scans `source` into tokens, collecting every diagnostic along the way.
///
/// # Example
///
/// ```
/// use loxc_lex::{scan, TokenKind};
///
/// let result = scan("@123");
///
/// assert!(result.had_error());
/// assert_eq!(result.diagnostics()[0].to_string(), "[line 1] Error: Unexpected character: @");
/// assert_eq!(result.tokens()[0].kind, TokenKind::Number);
/// assert_eq!(result.tokens()[0].literal.to_string(), "123.0");
/// ```
pub fn scan(source: &str) -> ScanResult {
    let mut handler = Handler::new();
    let tokens: Vec<Token> = Lexer::new(source, &mut handler).collect();

    debug!(
        bytes = source.len(),
        tokens = tokens.len(),
        errors = handler.error_count(),
        "scan finished"
    );

    ScanResult {
        tokens,
        diagnostics: handler.into_diagnostics(),
    }
}
