//! Diagnostic module - Error reporting infrastructure.
//!
//! Phases report problems into a [`Handler`] instead of returning early. The
//! handler is append-only: it records every diagnostic in emission order and
//! never drops one, so the caller sees the complete picture once the phase
//! finishes.
//!
//! # Examples
//!
//! ```
//! use loxc_util::diagnostic::{DiagnosticBuilder, Handler, E_LEXER_UNEXPECTED_CHAR};
//! use loxc_util::Span;
//!
//! let mut handler = Handler::new();
//! DiagnosticBuilder::error("Unexpected character: $")
//!     .code(E_LEXER_UNEXPECTED_CHAR)
//!     .span(Span::new(5, 6, 2))
//!     .emit(&mut handler);
//!
//! assert_eq!(handler.error_count(), 1);
//! assert_eq!(handler.diagnostics()[0].line(), 2);
//! ```

mod builder;
mod codes;
mod level;

pub use builder::DiagnosticBuilder;
pub use codes::{DiagnosticCode, E_LEXER_UNEXPECTED_CHAR, E_LEXER_UNTERMINATED_STRING};
pub use level::Level;

use crate::Span;
use std::fmt;

/// A diagnostic message with severity and location
///
/// The `Display` form is the one users see:
/// `[line {line}] {Level}: {message}`.
///
/// # Examples
///
/// ```
/// use loxc_util::diagnostic::{Diagnostic, Level};
/// use loxc_util::Span;
///
/// let diag = Diagnostic::error("Unterminated string.", Span::new(0, 4, 3));
/// assert_eq!(diag.level, Level::Error);
/// assert_eq!(diag.to_string(), "[line 3] Error: Unterminated string.");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(level: Level, message: impl Into<String>, span: Span) -> Self {
        Self {
            level,
            message: message.into(),
            span,
            code: None,
        }
    }

    /// Create an error diagnostic
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Error, message, span)
    }

    /// Set the diagnostic code
    pub fn with_code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Line the diagnostic is reported on (1-based)
    #[inline]
    pub fn line(&self) -> u32 {
        self.span.line
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[line {}] {}: {}",
            self.span.line, self.level, self.message
        )
    }
}

/// Handler for collecting diagnostics
///
/// # Examples
///
/// ```
/// use loxc_util::diagnostic::{Diagnostic, Handler};
/// use loxc_util::Span;
///
/// let mut handler = Handler::new();
/// handler.emit_diagnostic(Diagnostic::error("Unterminated string.", Span::DUMMY));
///
/// if handler.has_errors() {
///     eprintln!("scan failed with {} errors", handler.error_count());
/// }
/// ```
#[derive(Debug, Default)]
pub struct Handler {
    /// Collected diagnostics, in emission order
    diagnostics: Vec<Diagnostic>,
}

impl Handler {
    /// Create a new, empty handler
    pub fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
        }
    }

    /// Emit a pre-built diagnostic
    pub fn emit_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Create a diagnostic builder for an error at `span`
    ///
    /// # Examples
    ///
    /// ```
    /// use loxc_util::diagnostic::{Handler, E_LEXER_UNTERMINATED_STRING};
    /// use loxc_util::Span;
    ///
    /// let mut handler = Handler::new();
    /// handler
    ///     .build_error(Span::DUMMY, "Unterminated string.")
    ///     .code(E_LEXER_UNTERMINATED_STRING)
    ///     .emit(&mut handler);
    /// assert!(handler.has_errors());
    /// ```
    pub fn build_error(&self, span: Span, message: impl Into<String>) -> DiagnosticBuilder {
        DiagnosticBuilder::error(message).span(span)
    }

    /// Check if any errors have been reported
    ///
    /// Every diagnostic is an error, so this is true iff anything was emitted.
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.diagnostics.len()
    }

    /// Get all diagnostics, in emission order
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Consume the handler, returning the collected diagnostics
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_diagnostic_new() {
        let diag = Diagnostic::new(Level::Error, "test", Span::DUMMY);
        assert_eq!(diag.level, Level::Error);
        assert_eq!(diag.message, "test");
        assert_eq!(diag.code, None);
    }

    #[test]
    fn test_diagnostic_with_code() {
        let diag = Diagnostic::error("test", Span::DUMMY).with_code(E_LEXER_UNEXPECTED_CHAR);
        assert_eq!(diag.code, Some(E_LEXER_UNEXPECTED_CHAR));
    }

    #[test]
    fn test_diagnostic_display() {
        let diag = Diagnostic::error("Unexpected character: #", Span::new(9, 10, 4));
        assert_eq!(diag.to_string(), "[line 4] Error: Unexpected character: #");
    }

    #[test]
    fn test_handler_new() {
        let handler = Handler::new();
        assert!(!handler.has_errors());
        assert_eq!(handler.error_count(), 0);
        assert!(handler.diagnostics().is_empty());
    }

    #[test]
    fn test_handler_emit_diagnostic() {
        let mut handler = Handler::new();
        handler.emit_diagnostic(Diagnostic::error("test", Span::DUMMY));
        assert!(handler.has_errors());
        assert_eq!(handler.error_count(), 1);
    }

    #[test]
    fn test_handler_preserves_order() {
        let mut handler = Handler::new();
        handler.emit_diagnostic(Diagnostic::error("first", Span::new(0, 1, 1)));
        handler.emit_diagnostic(Diagnostic::error("second", Span::new(1, 2, 1)));
        handler.emit_diagnostic(Diagnostic::error("third", Span::new(2, 3, 2)));

        assert_eq!(handler.error_count(), 3);
        let messages: Vec<_> = handler
            .into_diagnostics()
            .into_iter()
            .map(|d| d.message)
            .collect();
        assert_eq!(messages, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_handler_build_error() {
        let mut handler = Handler::new();
        handler
            .build_error(Span::new(3, 4, 1), "test error")
            .code(E_LEXER_UNEXPECTED_CHAR)
            .emit(&mut handler);

        assert_eq!(handler.error_count(), 1);
        let diag = &handler.diagnostics()[0];
        assert_eq!(diag.code, Some(E_LEXER_UNEXPECTED_CHAR));
        assert_eq!(diag.span, Span::new(3, 4, 1));
    }
}
