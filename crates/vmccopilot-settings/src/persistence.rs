//! Document persistence
//!
//! Reads and writes serde documents as JSON or TOML, chosen by file
//! extension. Used for both the application config and request files.

use crate::error::{SettingsError, SettingsResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;

/// Supported document formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Toml,
}

impl DocumentFormat {
    /// Pick the format from a path's extension
    pub fn from_path(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Self::Json),
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(Self::Toml),
            Some(ext) => Err(SettingsError::UnsupportedFormat(ext.to_string())),
            None => Err(SettingsError::UnsupportedFormat(format!(
                "{} has no extension (expected .json or .toml)",
                path.display()
            ))),
        }
    }
}

/// Deserialize a document from `path`
pub fn read_document<T: DeserializeOwned>(path: &Path) -> SettingsResult<T> {
    let format = DocumentFormat::from_path(path)?;
    let content = std::fs::read_to_string(path).map_err(|e| {
        SettingsError::LoadError(format!("Failed to read {}: {}", path.display(), e))
    })?;

    let value = match format {
        DocumentFormat::Json => serde_json::from_str(&content)?,
        DocumentFormat::Toml => toml::from_str(&content)?,
    };
    tracing::debug!("Loaded {}", path.display());
    Ok(value)
}

/// Serialize `value` to `path`
pub fn write_document<T: Serialize>(path: &Path, value: &T) -> SettingsResult<()> {
    let content = match DocumentFormat::from_path(path)? {
        DocumentFormat::Json => serde_json::to_string_pretty(value)?,
        DocumentFormat::Toml => toml::to_string_pretty(value)?,
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, content).map_err(|e| {
        SettingsError::SaveError(format!("Failed to write {}: {}", path.display(), e))
    })?;
    tracing::debug!("Saved {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            DocumentFormat::from_path(&PathBuf::from("a/config.toml")).unwrap(),
            DocumentFormat::Toml
        );
        assert_eq!(
            DocumentFormat::from_path(&PathBuf::from("request.JSON")).unwrap(),
            DocumentFormat::Json
        );
        assert!(matches!(
            DocumentFormat::from_path(&PathBuf::from("config.yaml")),
            Err(SettingsError::UnsupportedFormat(_))
        ));
        assert!(DocumentFormat::from_path(&PathBuf::from("config")).is_err());
    }
}
