//! Catalog file discovery and parsing

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::catalog::Catalog;
use crate::core::errors::{I18nError, Result};
use crate::core::models::{CatalogFormat, MISSING_REPORT_FILE};

/// Parse a single catalog file according to its extension
pub fn parse_file(path: &Path) -> Result<Catalog> {
    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    let format = CatalogFormat::from_extension(&extension)
        .ok_or(I18nError::UnsupportedFormat { extension })?;

    let content = std::fs::read_to_string(path).map_err(|e| I18nError::FileError {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let parse_error = |message: String| I18nError::ParseError {
        path: path.display().to_string(),
        message,
    };

    let value: serde_json::Value = match format {
        CatalogFormat::Toml => {
            let parsed: toml::Value =
                toml::from_str(&content).map_err(|e| parse_error(e.to_string()))?;
            serde_json::to_value(parsed).map_err(|e| parse_error(e.to_string()))?
        }
        CatalogFormat::Yaml => {
            let parsed: serde_yaml::Value =
                serde_yaml::from_str(&content).map_err(|e| parse_error(e.to_string()))?;
            serde_json::to_value(parsed).map_err(|e| parse_error(e.to_string()))?
        }
        CatalogFormat::Json => {
            serde_json::from_str(&content).map_err(|e| parse_error(e.to_string()))?
        }
    };

    Ok(Catalog::from_value(&value))
}

/// Check if a path looks like a catalog file
fn is_catalog_file(path: &Path) -> bool {
    path.extension()
        .map(|ext| CatalogFormat::from_extension(&ext.to_string_lossy()).is_some())
        .unwrap_or(false)
}

/// Find catalog files for one language: `<dir>/<lang>.<ext>` first, then
/// every catalog file under `<dir>/<lang>/` in sorted path order.
///
/// Later files win on key conflicts, so directory entries override the
/// flat per-language file.
pub fn find_language_files(dir: &Path, lang: &str) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for ext in CatalogFormat::EXTENSIONS {
        let candidate = dir.join(format!("{}.{}", lang, ext));
        if candidate.is_file() {
            files.push(candidate);
        }
    }

    let subdir = dir.join(lang);
    if subdir.is_dir() {
        let mut nested: Vec<PathBuf> = walkdir::WalkDir::new(&subdir)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().is_file() && is_catalog_file(e.path()))
            .map(|e| e.into_path())
            .collect();

        // Sorted order keeps merges reproducible
        nested.sort();
        files.extend(nested);
    }

    files
}

/// Load and merge all catalog files for a language.
///
/// A language with no files yields an empty catalog so that translation
/// degrades to pass-through; malformed files are errors.
pub fn load_language(dir: &Path, lang: &str) -> Result<Catalog> {
    let files = find_language_files(dir, lang);

    if files.is_empty() {
        debug!("No catalog files for '{}' under {}", lang, dir.display());
        return Ok(Catalog::new());
    }

    let mut catalog = Catalog::new();
    for file in files {
        let loaded = parse_file(&file)?;
        debug!("Loaded {} keys from {}", loaded.len(), file.display());
        catalog.merge(loaded);
    }

    Ok(catalog)
}

/// Scan a directory for languages that have catalog files
pub fn available_languages(dir: &Path) -> Result<Vec<String>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut languages = BTreeSet::new();

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_file() && is_catalog_file(&path) {
            // The check command's report is not a catalog
            if path.file_name().and_then(|s| s.to_str()) == Some(MISSING_REPORT_FILE) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                languages.insert(stem.to_string());
            }
        } else if path.is_dir() {
            let has_catalogs = walkdir::WalkDir::new(&path)
                .into_iter()
                .filter_map(|e| e.ok())
                .any(|e| e.path().is_file() && is_catalog_file(e.path()));

            if has_catalogs {
                if let Some(name) = path.file_name().and_then(|s| s.to_str()) {
                    languages.insert(name.to_string());
                }
            }
        }
    }

    Ok(languages.into_iter().collect())
}
