//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Main Lexer struct and dispatch
//! - `identifier` - Identifier and keyword lexing
//! - `number` - Number literal lexing and canonicalization
//! - `string` - String literal lexing
//! - `operator` - One or two character operators
//! - `comment` - Line comment skipping

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use self::core::Lexer;
pub use number::canonicalize_number;
