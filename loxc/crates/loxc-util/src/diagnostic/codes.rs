//! Diagnostic codes for categorizing errors.
//!
//! # Examples
//!
//! ```
//! use loxc_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::new("E", 101);
//! assert_eq!(code.prefix(), "E");
//! assert_eq!(code.number(), 101);
//! assert_eq!(code.to_string(), "E0101");
//! ```

use std::fmt;

/// A unique code identifying a diagnostic message
///
/// Diagnostic codes follow the format `{prefix}{number}` where:
/// - `prefix` is "E" for errors
/// - `number` is printed as 4 digits, zero padded
///
/// The hundreds digit groups codes by phase: `01xx` is the lexer.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix ("E" for error)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the prefix
    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Get the numeric identifier
    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }
}

impl fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DiagnosticCode({self})")
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:04}", self.prefix, self.number)
    }
}

// ============================================================================
// LEXER CODES (01xx)
// ============================================================================

/// A character that cannot start any token
pub const E_LEXER_UNEXPECTED_CHAR: DiagnosticCode = DiagnosticCode::new("E", 101);

/// A string literal still open at end of input
pub const E_LEXER_UNTERMINATED_STRING: DiagnosticCode = DiagnosticCode::new("E", 102);
