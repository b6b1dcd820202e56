//! Core data models for catalog translation

use serde::{Deserialize, Serialize};
use std::fmt;

/// Catalog file format, selected by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CatalogFormat {
    /// TOML catalog files (`.toml`)
    Toml,
    /// YAML catalog files (`.yaml`, `.yml`)
    Yaml,
    /// JSON catalog files (`.json`)
    Json,
}

impl CatalogFormat {
    /// Extensions recognized as catalog files
    pub const EXTENSIONS: &'static [&'static str] = &["toml", "yaml", "yml", "json"];

    /// Resolve a format from a file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "toml" => Some(CatalogFormat::Toml),
            "yaml" | "yml" => Some(CatalogFormat::Yaml),
            "json" => Some(CatalogFormat::Json),
            _ => None,
        }
    }
}

impl fmt::Display for CatalogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogFormat::Toml => write!(f, "toml"),
            CatalogFormat::Yaml => write!(f, "yaml"),
            CatalogFormat::Json => write!(f, "json"),
        }
    }
}

/// Normalize a language code so that `ja_JP`, ` ja-JP ` and `ja-JP`
/// all select the same catalog
pub fn normalize_lang(lang: &str) -> String {
    lang.trim().replace('_', "-")
}

/// Per-language catalog statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageStats {
    pub language: String,
    pub keys: usize,
}

/// Snapshot of the loaded catalog state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogStats {
    pub languages: Vec<LanguageStats>,
    pub collected_at: chrono::DateTime<chrono::Utc>,
}

/// Default file name for the missing-translations report written by the
/// `check` command. Language discovery skips it so a report saved into
/// the catalog directory never shows up as a language.
pub const MISSING_REPORT_FILE: &str = "missing-translations.json";

/// Missing translation record for manual completion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissingKey {
    pub language: String,
    pub key: String,
    /// Text of the key in the reference language
    pub reference: String,
    /// Filled in by hand, applied with the `apply-fill` command
    pub translation: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(CatalogFormat::from_extension("toml"), Some(CatalogFormat::Toml));
        assert_eq!(CatalogFormat::from_extension("yaml"), Some(CatalogFormat::Yaml));
        assert_eq!(CatalogFormat::from_extension("yml"), Some(CatalogFormat::Yaml));
        assert_eq!(CatalogFormat::from_extension("JSON"), Some(CatalogFormat::Json));
        assert_eq!(CatalogFormat::from_extension("ini"), None);
        assert_eq!(CatalogFormat::from_extension(""), None);
    }

    #[test]
    fn test_normalize_lang() {
        assert_eq!(normalize_lang("ja"), "ja");
        assert_eq!(normalize_lang("ja_JP"), "ja-JP");
        assert_eq!(normalize_lang(" zh-CN "), "zh-CN");
        assert_eq!(normalize_lang(""), "");
    }
}
