//! Configuration module for the loxc driver.
//!
//! Settings come from an optional `loxc.toml`, and command-line flags are
//! layered on top.

use std::path::{Path, PathBuf};

use dirs::{config_dir, home_dir};
use serde::{Deserialize, Serialize};

use crate::error::{DriverError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "loxc.toml";

/// Exit status used when the scan reported errors.
pub const DEFAULT_ERROR_EXIT_CODE: u8 = 65;

/// When to color diagnostics.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Color only when writing to a terminal
    #[default]
    Auto,
    /// Always color
    Always,
    /// Never color
    Never,
}

impl ColorMode {
    /// Decides whether to color, given whether the target is a terminal.
    pub fn enabled(self, is_terminal: bool) -> bool {
        match self {
            ColorMode::Auto => is_terminal,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Driver configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Enable debug logging.
    #[serde(default)]
    pub verbose: bool,

    /// Exit status when the scan reported errors.
    #[serde(default = "default_error_exit_code")]
    pub error_exit_code: u8,

    /// Diagnostic coloring.
    #[serde(default)]
    pub color: ColorMode,
}

fn default_error_exit_code() -> u8 {
    DEFAULT_ERROR_EXIT_CODE
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verbose: false,
            error_exit_code: default_error_exit_code(),
            color: ColorMode::default(),
        }
    }
}

impl Config {
    /// Load configuration from `explicit`, or from the first default location
    /// that has a config file.
    ///
    /// Searches in the following order:
    /// 1. Current directory
    /// 2. `~/.config/loxc/`
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found. An
    /// explicit path that does not exist is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => Self::find_config_file(),
        };

        match path {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DriverError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path).map_err(|source| DriverError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            DriverError::Config(format!(
                "Failed to parse {}: {}",
                path.display(),
                e
            ))
        })?;

        // A failed scan must never exit 0.
        if config.error_exit_code == 0 {
            return Err(DriverError::Config(
                "error_exit_code must be non-zero".to_string(),
            ));
        }

        Ok(config)
    }

    /// Apply command-line flags on top of the file settings.
    ///
    /// Flags can only switch things on (`--verbose`) or off (`--no-color`);
    /// an absent flag leaves the file value alone.
    pub fn with_overrides(mut self, verbose: bool, no_color: bool) -> Self {
        if verbose {
            self.verbose = true;
        }
        if no_color {
            self.color = ColorMode::Never;
        }
        self
    }

    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("loxc").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("loxc").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Find the configuration file in standard locations.
    pub fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}
