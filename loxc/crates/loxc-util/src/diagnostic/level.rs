//! Diagnostic severity levels.
//!
//! # Examples
//!
//! ```
//! use loxc_util::diagnostic::Level;
//!
//! assert!(Level::Error.is_error());
//! assert_eq!(Level::Error.label(), "Error");
//! ```

use std::fmt;

/// Diagnostic severity level
///
/// The level decides how a diagnostic is displayed (label, color). The
/// scanner only reports errors, so every emitted diagnostic fails the run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Level {
    /// A problem that makes the input invalid
    ///
    /// Any error makes the run fail, but the phase still finishes.
    Error,
}

impl Level {
    /// Returns true if this level represents an error
    ///
    /// # Examples
    ///
    /// ```
    /// use loxc_util::diagnostic::Level;
    ///
    /// assert!(Level::Error.is_error());
    /// ```
    #[inline]
    pub const fn is_error(&self) -> bool {
        matches!(self, Level::Error)
    }

    /// Returns the capitalized label used in rendered diagnostics
    ///
    /// This is the word in `[line 3] Error: Unterminated string.`.
    #[inline]
    pub const fn label(&self) -> &'static str {
        match self {
            Level::Error => "Error",
        }
    }

    /// Returns the ANSI color code for this level
    ///
    /// # Examples
    ///
    /// ```
    /// use loxc_util::diagnostic::Level;
    ///
    /// // Error is red
    /// assert_eq!(Level::Error.color_code(), "31");
    /// ```
    #[inline]
    pub const fn color_code(&self) -> &'static str {
        match self {
            Level::Error => "31",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
