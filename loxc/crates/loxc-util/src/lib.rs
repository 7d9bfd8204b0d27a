//! loxc-util - Core Utilities and Foundation Types
//!
//! ============================================================================
//! MODULE OVERVIEW
//! ============================================================================
//!
//! Foundation types shared by every loxc crate:
//!
//! - [`span`] - Source locations (byte range plus line number)
//! - [`diagnostic`] - Diagnostic levels, codes, the fluent builder and the
//!   [`Handler`] that collects everything reported during a phase
//!
//! DESIGN PRINCIPLES:
//! ------------------
//! 1. APPEND-ONLY REPORTING
//!    A phase never aborts on the first problem. It reports into a
//!    [`Handler`] and keeps going; the caller inspects the handler afterwards.
//!
//! 2. PLAIN DATA
//!    Every type here is owned, `Clone` and `Send + Sync`, so results can be
//!    handed across threads or compared in tests without ceremony.
//!
//! # Example
//!
//! ```
//! use loxc_util::{DiagnosticBuilder, Handler, Span};
//!
//! let mut handler = Handler::new();
//! DiagnosticBuilder::error("Unexpected character: @")
//!     .span(Span::new(0, 1, 1))
//!     .emit(&mut handler);
//!
//! assert!(handler.has_errors());
//! assert_eq!(handler.diagnostics()[0].to_string(), "[line 1] Error: Unexpected character: @");
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level};
pub use span::Span;
