//! Configuration and settings management for VMC Copilot
//!
//! Configuration is organized into logical sections:
//! - Output settings (artifact directory, overwrite policy)
//! - Logging settings (level, JSON output)
//! - Default machining request (the form's initial values)
//!
//! Files are JSON or TOML, chosen by extension, and validated on load and save.

use crate::error::{SettingsError, SettingsResult};
use crate::persistence::{read_document, write_document};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use vmccopilot_core::MachiningRequest;

/// Application directory name under the platform config dir
pub const APP_DIR_NAME: &str = "vmccopilot";

/// Default config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Where generated artifacts go
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Directory receiving G-code and CAD files
    pub directory: PathBuf,
    /// Replace files with the same name
    pub overwrite: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            overwrite: true,
        }
    }
}

/// Log verbosity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl Default for LogLevel {
    fn default() -> Self {
        Self::Info
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

impl FromStr for LogLevel {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            other => Err(SettingsError::InvalidSetting {
                key: "logging.level".to_string(),
                reason: format!("unknown level '{}'", other),
            }),
        }
    }
}

/// Logging preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default level when `RUST_LOG` is unset
    pub level: LogLevel,
    /// Emit JSON lines instead of pretty text
    pub json: bool,
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub output: OutputSettings,
    pub logging: LoggingSettings,
    /// Starting-point request printed by `vmccopilot --defaults`; never applied
    /// to a request file
    pub defaults: MachiningRequest,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Platform config file location, if the platform has a config dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let config: Self = read_document(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Load an explicit file, or the default location when `path` is `None`.
    ///
    /// A missing default file yields defaults; a missing explicit file is an error.
    pub fn load(path: Option<&Path>) -> SettingsResult<Self> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => match Self::default_path() {
                Some(default) if default.exists() => Self::load_from_file(&default),
                _ => {
                    tracing::debug!("No config file found, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;
        write_document(path, self)
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        if self.output.directory.as_os_str().is_empty() {
            return Err(SettingsError::InvalidSetting {
                key: "output.directory".to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        self.defaults
            .validate()
            .map_err(|e| SettingsError::InvalidSetting {
                key: "defaults".to_string(),
                reason: e.to_string(),
            })?;

        Ok(())
    }
}
