//! Configuration system for find-all-after.
//!
//! This module provides the configuration structure for the command line
//! front end with sensible defaults and support for serialization via serde.
//! Configuration is loaded from a TOML file and overridden by command-line
//! arguments.
//!
//! # Example
//!
//! ```
//! use unist_find_all_after::config::Config;
//!
//! let config = Config::default();
//! assert_eq!(config.output_format, "json");
//! assert!(config.pretty);
//!
//! let custom = Config {
//!     output_format: "yaml".to_string(),
//!     ..Config::default()
//! };
//! assert_eq!(custom.log_level, "warn");
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for the find-all-after command.
///
/// # Fields
///
/// * `output_format` - Output format, "json" or "yaml" (default: "json")
/// * `pretty` - Pretty-print JSON output (default: true)
/// * `log_level` - Default log filter when `RUST_LOG` is unset (default: "warn")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Output format: "json" or "yaml"
    #[serde(default = "default_output_format")]
    pub output_format: String,

    /// Pretty-print JSON output
    #[serde(default = "default_pretty")]
    pub pretty: bool,

    /// Log filter used when neither `RUST_LOG` nor `-v` is given
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_output_format() -> String {
    "json".to_string()
}

fn default_pretty() -> bool {
    true
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_format: default_output_format(),
            pretty: default_pretty(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/unist-find-all-after/config.toml` on all platforms.
    pub fn config_path() -> Option<std::path::PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("unist-find-all-after");
            path.push("config.toml");
            path
        })
    }

    /// Loads configuration from the default config file.
    ///
    /// A missing file (or an unknown home directory) gives the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but can't be read or parsed. The
    /// caller decides whether to fall back to the defaults.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Loads configuration from a specific file.
    ///
    /// Missing keys take their default values.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        toml::from_str(&contents).with_context(|| format!("Failed to parse {}", path.display()))
    }
}
