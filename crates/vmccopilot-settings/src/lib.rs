//! VMC Copilot Settings Crate
//!
//! Handles application configuration and JSON/TOML document persistence.

pub mod config;
pub mod error;
pub mod persistence;

pub use config::{Config, LogLevel, LoggingSettings, OutputSettings};
pub use error::{SettingsError, SettingsResult};
pub use persistence::{read_document, write_document, DocumentFormat};
