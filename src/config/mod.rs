//! Configuration system for jsonpick.
//!
//! Output preferences for the command line tool, loaded from a TOML file and
//! overridden by command-line flags.
//!
//! # Example
//!
//! ```
//! use jsonpick::config::Config;
//!
//! let config = Config::default();
//! assert!(config.pretty);
//! assert!(!config.raw_strings);
//!
//! let custom = Config {
//!     pretty: false,
//!     ..Config::default()
//! };
//! assert_eq!(custom.log_level, "warn");
//! ```

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Configuration for the jsonpick command line tool.
///
/// * `pretty` - Pretty-print JSON results (default: true)
/// * `raw_strings` - Print string results without JSON quoting (default: false)
/// * `log_level` - Log filter used when `RUST_LOG` is not set (default: "warn")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Pretty-print JSON results
    #[serde(default = "default_pretty")]
    pub pretty: bool,

    /// Print string results without JSON quoting
    #[serde(default)]
    pub raw_strings: bool,

    /// Log filter used when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
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
            pretty: default_pretty(),
            raw_strings: false,
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/jsonpick/config.toml` on all platforms.
    pub fn config_path() -> Option<std::path::PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("jsonpick");
            path.push("config.toml");
            path
        })
    }

    /// Loads configuration from the default config file.
    ///
    /// A missing file (or no home directory) yields the default configuration.
    /// An unreadable or invalid file is an error; callers decide whether to
    /// fall back to defaults.
    pub fn load() -> anyhow::Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Loads configuration from a specific file.
    pub fn load_from(path: &std::path::Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Invalid config {}", path.display()))
    }
}
