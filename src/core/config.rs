//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Configuration for the catalog translator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslatorConfig {
    /// Directory containing catalog files
    pub path: PathBuf,
    /// Initial active language
    pub language: String,
    /// Left placeholder delimiter
    pub left_delimiter: String,
    /// Right placeholder delimiter
    pub right_delimiter: String,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("i18n"),
            language: "en".to_string(),
            left_delimiter: "{#".to_string(),
            right_delimiter: "}".to_string(),
        }
    }
}

impl TranslatorConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        let path = std::env::var("I18N_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("i18n"));

        let language = std::env::var("I18N_LANGUAGE").unwrap_or_else(|_| "en".to_string());

        let left_delimiter =
            std::env::var("I18N_LEFT_DELIMITER").unwrap_or_else(|_| "{#".to_string());

        let right_delimiter =
            std::env::var("I18N_RIGHT_DELIMITER").unwrap_or_else(|_| "}".to_string());

        Ok(Self {
            path,
            language,
            left_delimiter,
            right_delimiter,
        })
    }

    /// Load configuration from the environment, validating the result
    pub fn load() -> anyhow::Result<Self> {
        let config = Self::from_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Load from JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.language.trim().is_empty() {
            return Err(anyhow::anyhow!("Language is required"));
        }

        if self.left_delimiter.is_empty() || self.right_delimiter.is_empty() {
            return Err(anyhow::anyhow!("Delimiters must be non-empty"));
        }

        if self.left_delimiter == self.right_delimiter {
            return Err(anyhow::anyhow!("Left and right delimiters must differ"));
        }

        if !self.path.is_dir() {
            warn!("Catalog directory does not exist: {}", self.path.display());
        }

        Ok(())
    }

    /// Set the catalog directory
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }

    /// Set the initial language
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Set the placeholder delimiters
    pub fn with_delimiters(
        mut self,
        left: impl Into<String>,
        right: impl Into<String>,
    ) -> Self {
        self.left_delimiter = left.into();
        self.right_delimiter = right.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_validation() {
        let config = TranslatorConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_missing_language() {
        let config = TranslatorConfig {
            language: "".to_string(),
            ..Default::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_equal_delimiters() {
        let config = TranslatorConfig::default().with_delimiters("%%", "%%");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_builders() {
        let config = TranslatorConfig::default()
            .with_path("locales")
            .with_language("ja")
            .with_delimiters("[[", "]]");

        assert_eq!(config.path, PathBuf::from("locales"));
        assert_eq!(config.language, "ja");
        assert_eq!(config.left_delimiter, "[[");
        assert_eq!(config.right_delimiter, "]]");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = TranslatorConfig::default().with_language("zh-CN");
        config.to_file(&path).unwrap();

        let loaded = TranslatorConfig::from_file(&path).unwrap();
        assert_eq!(loaded.language, "zh-CN");
        assert_eq!(loaded.left_delimiter, "{#");
    }
}
