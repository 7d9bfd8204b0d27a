//! Tokenize session.
//!
//! A [`Session`] ties the configuration to one run: read the source, scan
//! it, print diagnostics then tokens, and pick the exit status.

use std::io::{self, IsTerminal, Read, Write};
use std::path::Path;

use tracing::debug;

use crate::config::Config;
use crate::error::{DriverError, Result};
use crate::render::{render_diagnostics, render_tokens};

/// Path argument that means "read standard input".
pub const STDIN_PATH: &str = "-";

/// One driver run.
#[derive(Debug, Clone)]
pub struct Session {
    config: Config,
    color: bool,
}

impl Session {
    /// Creates a session, resolving color against whether stderr is a
    /// terminal.
    pub fn new(config: Config) -> Self {
        let color = config.color.enabled(io::stderr().is_terminal());
        Self::with_color(config, color)
    }

    /// Creates a session with an explicit color decision.
    pub fn with_color(config: Config, color: bool) -> Self {
        Self { config, color }
    }

    /// The configuration in effect.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Scans the file at `path` (or stdin for `-`) and prints the result to
    /// the process streams.
    ///
    /// Returns the exit status: 0 on a clean scan, the configured error code
    /// otherwise.
    pub fn tokenize(&self, path: &Path) -> Result<u8> {
        let source = read_source(path)?;
        let stdout = io::stdout();
        let stderr = io::stderr();
        self.tokenize_source(&source, stdout.lock(), stderr.lock())
    }

    /// Scans `source`, writing diagnostics to `err` and then tokens to `out`.
    pub fn tokenize_source<O: Write, E: Write>(&self, source: &str, out: O, err: E) -> Result<u8> {
        let result = loxc_lex::scan(source);

        render_diagnostics(result.diagnostics(), err, self.color)?;
        render_tokens(result.tokens(), out)?;

        let status = if result.had_error() {
            self.config.error_exit_code
        } else {
            0
        };
        debug!(
            tokens = result.tokens().len(),
            diagnostics = result.diagnostics().len(),
            status,
            "tokenize finished"
        );
        Ok(status)
    }
}

/// Reads the whole source text from a file, or from stdin for `-`.
pub fn read_source(path: &Path) -> Result<String> {
    let mut source = String::new();
    if path.as_os_str() == STDIN_PATH {
        debug!("reading source from stdin");
        io::stdin()
            .lock()
            .read_to_string(&mut source)
            .map_err(|e| DriverError::Io {
                path: path.to_path_buf(),
                source: e,
            })?;
    } else {
        debug!(path = %path.display(), "reading source file");
        source = std::fs::read_to_string(path).map_err(|e| DriverError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
    }
    debug!(bytes = source.len(), "source loaded");
    Ok(source)
}
