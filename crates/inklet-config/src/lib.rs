//! Configuration for the inklet diagram plugin.
//!
//! Parses `inklet.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! The core crates consume [`Settings`] read-only and receive it by
//! injection; nothing in this workspace reads configuration from
//! ambient global state.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "inklet.toml";

/// Rendering settings consumed by the engine and the SVG pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    /// Replace literal black/white colors in rendered SVGs with
    /// theme-relative tokens so diagrams stay legible when the host
    /// switches to a dark theme without re-rendering.
    pub invert_colors_in_dark_mode: bool,
    /// Emit the console-enable attribute on diagram markers so the
    /// rendering engine logs conversion output for debugging.
    pub show_console: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            invert_colors_in_dark_mode: true,
            show_console: false,
        }
    }
}

/// Plugin configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Rendering settings.
    pub rendering: Settings,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

impl Config {
    /// Load configuration from file.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `inklet.toml` in the current directory and
    /// parents, falling back to defaults when no file is found.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit `config_path` doesn't exist or
    /// parsing fails.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Search for a config file starting at `start` and walking up.
    #[must_use]
    pub fn discover_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Search for a config file in the current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;
        Self::discover_from(&current)
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::parse(&content)?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }
}
