//! loxc-drv - Command-line driver for the Lox scanner
//!
//! ============================================================================
//! MODULE OVERVIEW
//! ============================================================================
//!
//! Everything around the lexer that touches the outside world:
//!
//! - [`cli`] - Argument parsing
//! - [`config`] - `loxc.toml` loading and flag overrides
//! - [`logging`] - `tracing` subscriber setup
//! - [`render`] - Token and diagnostic text output
//! - [`session`] - Reading the source, scanning, picking the exit status
//! - [`error`] - Driver failures
//!
//! OUTPUT CONTRACT:
//! ----------------
//! stdout carries one `KIND LEXEME LITERAL` line per token and nothing else.
//! Diagnostics and logs go to stderr. The exit status is 0 for a clean scan
//! and 65 (configurable) when any lexical error was reported; the full token
//! stream is printed either way.
//!
//! # Example
//!
//! ```
//! use loxc_drv::{Config, Session};
//!
//! let session = Session::with_color(Config::default(), false);
//! let mut out = Vec::new();
//! let mut err = Vec::new();
//! let status = session.tokenize_source("(@", &mut out, &mut err).unwrap();
//!
//! assert_eq!(status, 65);
//! assert_eq!(String::from_utf8(out).unwrap(), "LEFT_PAREN ( null\nEOF  null\n");
//! assert_eq!(String::from_utf8(err).unwrap(), "[line 1] Error: Unexpected character: @\n");
//! ```

#![warn(missing_docs)]

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod render;
pub mod session;

pub use cli::{Cli, Commands, TokenizeCommand};
pub use config::{ColorMode, Config};
pub use error::{DriverError, Result};
pub use logging::init_logging;
pub use render::{render_diagnostics, render_tokens};
pub use session::Session;
