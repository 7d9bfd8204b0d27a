//! Diagnostic builder for fluent diagnostic construction.

use super::{Diagnostic, DiagnosticCode, Handler, Level};
use crate::Span;

/// Fluent builder for [`Diagnostic`]
///
/// # Examples
///
/// ```
/// use loxc_util::diagnostic::{DiagnosticBuilder, Level, E_LEXER_UNTERMINATED_STRING};
/// use loxc_util::Span;
///
/// let diag = DiagnosticBuilder::error("Unterminated string.")
///     .code(E_LEXER_UNTERMINATED_STRING)
///     .span(Span::new(0, 4, 1))
///     .build();
///
/// assert_eq!(diag.level, Level::Error);
/// assert_eq!(diag.code, Some(E_LEXER_UNTERMINATED_STRING));
/// ```
#[derive(Clone, Debug)]
#[must_use = "a diagnostic builder does nothing until built or emitted"]
pub struct DiagnosticBuilder {
    level: Level,
    message: String,
    span: Span,
    code: Option<DiagnosticCode>,
}

impl DiagnosticBuilder {
    /// Start building a diagnostic with the given level
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            span: Span::DUMMY,
            code: None,
        }
    }

    /// Start building an error
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    /// Set the source location
    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Set the diagnostic code
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Finish building
    pub fn build(self) -> Diagnostic {
        Diagnostic {
            level: self.level,
            message: self.message,
            span: self.span,
            code: self.code,
        }
    }

    /// Build and hand the diagnostic to `handler`
    pub fn emit(self, handler: &mut Handler) {
        handler.emit_diagnostic(self.build());
    }
}
