//! Locale Translator - message catalog translation library
//!
//! This library resolves message keys against per-language catalogs and
//! expands placeholder tokens such as `{#hello}` inside strings. It ships
//! with a CLI and a small HTTP API service.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod core;
pub mod catalog;
pub mod server;
pub mod cli;

// Re-export key types for convenience
pub use crate::core::{
    translator::Translator,
    config::TranslatorConfig,
    models::{CatalogFormat, CatalogStats, LanguageStats, MissingKey},
    errors::I18nError,
    pattern::PlaceholderPattern,
};

pub use crate::catalog::Catalog;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
