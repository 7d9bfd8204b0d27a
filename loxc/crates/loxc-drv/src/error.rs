//! Error handling module for the loxc driver.
//!
//! Lexical problems are diagnostics, not errors. The variants here cover the
//! things that stop the driver from running at all.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the loxc driver.
#[derive(Error, Debug)]
pub enum DriverError {
    /// The source file could not be read.
    #[error("failed to read {}", .path.display())]
    Io {
        /// The file that was being read
        path: PathBuf,
        /// The underlying error
        #[source]
        source: std::io::Error,
    },

    /// Writing tokens or diagnostics failed.
    #[error("failed to write output")]
    Output(#[from] std::io::Error),

    /// The configuration file is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The logging subscriber could not be installed.
    #[error("Logging error: {0}")]
    Logging(String),
}

/// Result type alias using DriverError.
pub type Result<T> = std::result::Result<T, DriverError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::io;

    #[test]
    fn test_io_error_display() {
        let err = DriverError::Io {
            path: PathBuf::from("missing.lox"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        assert_eq!(err.to_string(), "failed to read missing.lox");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_output_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed");
        let err: DriverError = io_err.into();
        assert!(matches!(err, DriverError::Output(_)));
        assert_eq!(err.to_string(), "failed to write output");
        assert_eq!(err.source().map(|e| e.to_string()), Some("pipe closed".to_string()));
    }

    #[test]
    fn test_config_error_display() {
        let err = DriverError::Config("missing field".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing field");
    }

    #[test]
    fn test_logging_error_display() {
        let err = DriverError::Logging("already set".to_string());
        assert_eq!(err.to_string(), "Logging error: already set");
    }
}
