//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// loxc - Lox scanner
///
/// Reads Lox source and prints its token stream, one token per line.
#[derive(Parser, Debug)]
#[command(name = "loxc")]
#[command(author = "Lox Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Scan Lox source into tokens", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "LOXC_VERBOSE")]
    pub verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "LOXC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "LOXC_NO_COLOR")]
    pub no_color: bool,

    /// Command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the token stream of a source file
    ///
    /// Diagnostics go to stderr, tokens to stdout. The exit status is
    /// non-zero when the source has lexical errors.
    Tokenize(TokenizeCommand),
}

/// Arguments for the tokenize subcommand.
#[derive(Parser, Debug)]
pub struct TokenizeCommand {
    /// Source file to scan, or `-` for stdin
    pub file: PathBuf,
}
