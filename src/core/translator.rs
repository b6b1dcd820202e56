//! Catalog-backed translator with lazy loading and language switching

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::catalog::{loader, Catalog};
use crate::core::config::TranslatorConfig;
use crate::core::errors::Result;
use crate::core::models::{normalize_lang, CatalogStats, LanguageStats};
use crate::core::pattern::{substitute_args, PlaceholderPattern};

/// Translator resolving message keys against per-language catalogs
#[derive(Debug, Clone)]
pub struct Translator {
    config: Arc<TranslatorConfig>,
    pattern: PlaceholderPattern,
    catalogs: Arc<RwLock<HashMap<String, Arc<Catalog>>>>,
    language: Arc<RwLock<String>>,
}

impl Translator {
    /// Create a new translator
    pub fn new(config: TranslatorConfig) -> Result<Self> {
        config.validate()?;

        let pattern = PlaceholderPattern::new(&config.left_delimiter, &config.right_delimiter)?;
        let language = normalize_lang(&config.language);

        Ok(Self {
            config: Arc::new(config),
            pattern,
            catalogs: Arc::new(RwLock::new(HashMap::new())),
            language: Arc::new(RwLock::new(language)),
        })
    }

    /// Create from environment configuration
    pub fn from_env() -> Result<Self> {
        let config = TranslatorConfig::load()?;
        Self::new(config)
    }

    /// Set the active language
    pub async fn set_language(&self, lang: &str) {
        let mut current = self.language.write().await;
        *current = normalize_lang(lang);
    }

    /// Get the active language
    pub async fn language(&self) -> String {
        self.language.read().await.clone()
    }

    /// Get or lazily load the catalog for a language
    async fn catalog(&self, lang: &str) -> Result<Arc<Catalog>> {
        {
            let catalogs = self.catalogs.read().await;
            if let Some(catalog) = catalogs.get(lang) {
                return Ok(catalog.clone());
            }
        }

        let catalog = Arc::new(loader::load_language(&self.config.path, lang)?);
        debug!("Loaded catalog for '{}': {} keys", lang, catalog.len());

        let mut catalogs = self.catalogs.write().await;
        Ok(catalogs.entry(lang.to_string()).or_insert(catalog).clone())
    }

    /// Translate content in the active language
    pub async fn translate(&self, content: &str) -> Result<String> {
        let lang = self.language().await;
        self.translate_in(content, &lang).await
    }

    /// Translate content in an explicit language.
    ///
    /// An exact key match returns the catalog value. Otherwise every
    /// placeholder token in the content is expanded; tokens without a
    /// catalog entry and content without any match pass through unchanged.
    pub async fn translate_in(&self, content: &str, lang: &str) -> Result<String> {
        let lang = normalize_lang(lang);
        let catalog = self.catalog(&lang).await?;

        if let Some(value) = catalog.get(content) {
            return Ok(value.to_string());
        }

        Ok(self.pattern.expand(content, &catalog))
    }

    /// Translate, then substitute named `{name}` arguments
    pub async fn translate_with(
        &self,
        content: &str,
        args: &[(&str, &str)],
    ) -> Result<String> {
        let translated = self.translate(content).await?;
        Ok(substitute_args(&translated, args))
    }

    /// Raw catalog lookup in the active language
    pub async fn get(&self, key: &str) -> Result<Option<String>> {
        let lang = self.language().await;
        let catalog = self.catalog(&lang).await?;
        Ok(catalog.get(key).map(|s| s.to_string()))
    }

    /// Whether the active language defines the key
    pub async fn contains(&self, key: &str) -> Result<bool> {
        Ok(self.get(key).await?.is_some())
    }

    /// Languages with catalog files on disk
    pub fn languages(&self) -> Result<Vec<String>> {
        loader::available_languages(&self.config.path)
    }

    /// Drop all cached catalogs so the next call reloads from disk
    pub async fn reload(&self) {
        let mut catalogs = self.catalogs.write().await;
        catalogs.clear();
        info!("Catalog cache cleared");
    }

    /// Snapshot of the loaded catalog state
    pub async fn stats(&self) -> CatalogStats {
        let catalogs = self.catalogs.read().await;
        let mut languages: Vec<LanguageStats> = catalogs
            .iter()
            .map(|(language, catalog)| LanguageStats {
                language: language.clone(),
                keys: catalog.len(),
            })
            .collect();
        languages.sort_by(|a, b| a.language.cmp(&b.language));

        CatalogStats {
            languages,
            collected_at: chrono::Utc::now(),
        }
    }

    /// Configuration in use
    pub fn config(&self) -> &TranslatorConfig {
        &self.config
    }

    /// Compiled placeholder pattern
    pub fn pattern(&self) -> &PlaceholderPattern {
        &self.pattern
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn sample_translator() -> (tempfile::TempDir, Translator) {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("ja.toml"),
            "hello = \"こんにちは\"\nworld = \"世界\"\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("en.toml"),
            "hello = \"Hello\"\nworld = \"World\"\n",
        )
        .unwrap();

        let config = TranslatorConfig::default().with_path(dir.path());
        let translator = Translator::new(config).unwrap();
        (dir, translator)
    }

    #[tokio::test]
    async fn test_translate_key_and_placeholders() {
        let (_dir, translator) = sample_translator();
        translator.set_language("ja").await;

        assert_eq!(translator.translate("hello").await.unwrap(), "こんにちは");
        assert_eq!(
            translator.translate("{#hello}{#world}!").await.unwrap(),
            "こんにちは世界!"
        );
    }

    #[tokio::test]
    async fn test_translate_repeatable() {
        let (_dir, translator) = sample_translator();
        translator.set_language("ja").await;

        let first = translator.translate("hello").await.unwrap();
        let second = translator.translate("hello").await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_language_switching() {
        let (_dir, translator) = sample_translator();

        translator.set_language("en").await;
        assert_eq!(translator.translate("hello").await.unwrap(), "Hello");

        translator.set_language("ja").await;
        assert_eq!(translator.language().await, "ja");
        assert_eq!(translator.translate("hello").await.unwrap(), "こんにちは");
    }

    #[tokio::test]
    async fn test_missing_language_passes_through() {
        let (_dir, translator) = sample_translator();
        translator.set_language("xx").await;

        assert_eq!(translator.translate("hello").await.unwrap(), "hello");
        assert_eq!(
            translator.translate("{#hello}!").await.unwrap(),
            "{#hello}!"
        );
    }

    #[tokio::test]
    async fn test_unknown_token_kept_verbatim() {
        let (_dir, translator) = sample_translator();
        translator.set_language("ja").await;

        assert_eq!(
            translator.translate("{#hello}{#missing}").await.unwrap(),
            "こんにちは{#missing}"
        );
    }

    #[tokio::test]
    async fn test_translate_in_normalizes_language() {
        let (_dir, translator) = sample_translator();

        assert_eq!(
            translator.translate_in("hello", "ja_JP").await.unwrap(),
            // ja_JP normalizes to ja-JP, which has no catalog
            "hello"
        );
        assert_eq!(
            translator.translate_in("hello", " ja ").await.unwrap(),
            "こんにちは"
        );
    }

    #[tokio::test]
    async fn test_translate_with_args() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("en.toml"),
            "greeting = \"Hello {name}!\"\n",
        )
        .unwrap();

        let config = TranslatorConfig::default().with_path(dir.path());
        let translator = Translator::new(config).unwrap();

        assert_eq!(
            translator
                .translate_with("greeting", &[("name", "World")])
                .await
                .unwrap(),
            "Hello World!"
        );
    }

    #[tokio::test]
    async fn test_get_and_contains() {
        let (_dir, translator) = sample_translator();
        translator.set_language("ja").await;

        assert_eq!(
            translator.get("hello").await.unwrap(),
            Some("こんにちは".to_string())
        );
        assert!(translator.contains("world").await.unwrap());
        assert!(!translator.contains("missing").await.unwrap());
    }

    #[tokio::test]
    async fn test_reload_picks_up_changes() {
        let (dir, translator) = sample_translator();
        translator.set_language("ja").await;
        assert_eq!(translator.translate("hello").await.unwrap(), "こんにちは");

        fs::write(dir.path().join("ja.toml"), "hello = \"やあ\"\n").unwrap();

        // Cached until reload
        assert_eq!(translator.translate("hello").await.unwrap(), "こんにちは");
        translator.reload().await;
        assert_eq!(translator.translate("hello").await.unwrap(), "やあ");
    }

    #[tokio::test]
    async fn test_languages_and_stats() {
        let (_dir, translator) = sample_translator();

        assert_eq!(translator.languages().unwrap(), vec!["en", "ja"]);

        translator.translate_in("hello", "ja").await.unwrap();
        let stats = translator.stats().await;
        assert_eq!(stats.languages.len(), 1);
        assert_eq!(stats.languages[0].language, "ja");
        assert_eq!(stats.languages[0].keys, 2);
    }
}
