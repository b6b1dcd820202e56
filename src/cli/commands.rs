//! CLI command definitions and handlers

use clap::Subcommand;
use std::path::{Path, PathBuf};

/// Commands for the Locale Translator
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Translate a string or message key and print the result
    Translate {
        /// Text or message key to translate (required)
        text: String,

        /// Target language (overrides configuration)
        #[arg(short, long)]
        lang: Option<String>,
    },

    /// Expand placeholder tokens in text files
    Render {
        /// Input file or directory (required)
        #[arg(short, long)]
        file: PathBuf,

        /// Output file or directory
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Target language (overrides configuration)
        #[arg(short, long)]
        lang: Option<String>,

        /// Recursively render subdirectories
        #[arg(short, long)]
        recursive: bool,
    },

    /// List available languages and their key counts
    Languages,

    /// Check catalogs for keys missing against a reference language
    Check {
        /// Reference language that defines the full key set
        #[arg(short, long, default_value = "en")]
        reference: String,

        /// Path for the JSON report of missing keys
        #[arg(long)]
        report: Option<PathBuf>,
    },

    /// Apply completed translations from a JSON report
    ApplyFill {
        /// Path to JSON file with completed translations
        #[arg(short, long)]
        json: PathBuf,
    },

    /// Start HTTP API server
    Server {
        /// Bind address (default: 0.0.0.0)
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Listen port (default: 8000)
        #[arg(short, long, default_value_t = 8000)]
        port: u16,

        /// Enable debug mode
        #[arg(long)]
        debug: bool,
    },
}

/// Handle translate command
pub async fn handle_translate(text: String, lang: Option<String>) -> anyhow::Result<()> {
    use crate::core::translator::Translator;

    let translator = Translator::from_env()?;

    let translated = match lang {
        Some(lang) => translator.translate_in(&text, &lang).await?,
        None => translator.translate(&text).await?,
    };

    println!("{}", translated);
    Ok(())
}

/// Handle render command
pub async fn handle_render(
    file: PathBuf,
    output: Option<PathBuf>,
    lang: Option<String>,
    recursive: bool,
) -> anyhow::Result<()> {
    use crate::core::translator::Translator;
    use indicatif::{ProgressBar, ProgressStyle};
    use std::time::Instant;
    use tracing::info;

    let start_time = Instant::now();

    // Determine output path
    let output = output.unwrap_or_else(|| {
        if file.is_dir() {
            file.join("rendered")
        } else {
            let mut out = file.clone();
            let mut filename = file.file_name().unwrap().to_os_string();
            filename.push("_rendered");
            out.set_file_name(filename);
            out
        }
    });

    let translator = Translator::from_env()?;
    if let Some(lang) = lang {
        translator.set_language(&lang).await;
    }

    info!("Starting render");
    info!("Input: {}", file.display());
    info!("Output: {}", output.display());
    info!("Language: {}", translator.language().await);

    // Find files
    let files = if file.is_dir() {
        find_text_files(&file, recursive)?
    } else {
        vec![file.clone()]
    };

    if files.is_empty() {
        anyhow::bail!("No text files found");
    }

    // Create progress bar
    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}")
        .unwrap()
        .progress_chars("=>-"));

    // Process files
    let mut processed = 0;
    let mut failed = 0;
    let mut unresolved = 0;

    for file_path in files {
        pb.set_message(format!("Processing: {}", file_path.display()));

        let out_path = if file.is_dir() {
            match file_path.strip_prefix(&file) {
                Ok(rel) => output.join(rel),
                Err(_) => output.join(file_path.file_name().unwrap_or_default()),
            }
        } else {
            output.clone()
        };

        match render_file(&translator, &file_path, &out_path).await {
            Ok(remaining) => {
                processed += 1;
                unresolved += remaining;
                pb.inc(1);
            }
            Err(e) => {
                failed += 1;
                pb.set_message(format!("Failed: {} - {}", file_path.display(), e));
                eprintln!("Error processing {}: {}", file_path.display(), e);
            }
        }
    }

    pb.finish_with_message("Completed");

    let duration = start_time.elapsed();
    info!(
        "Completed: {} processed, {} failed, {} unresolved tokens in {:?}",
        processed, failed, unresolved, duration
    );

    println!("\n✅ Render completed!");
    println!("   Processed: {}", processed);
    println!("   Failed: {}", failed);
    println!("   Unresolved tokens: {}", unresolved);
    println!("   Time: {:?}", duration);

    Ok(())
}

/// Check if a file looks like renderable text
fn is_text_file(path: &Path) -> bool {
    path.extension()
        .map(|ext| {
            let ext = ext.to_string_lossy().to_lowercase();
            matches!(ext.as_str(), "txt" | "md" | "markdown" | "html" | "tpl")
        })
        .unwrap_or(false)
}

/// Find renderable text files in a directory
fn find_text_files(dir: &Path, recursive: bool) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    if recursive {
        for entry in walkdir::WalkDir::new(dir).into_iter().filter_map(|e| e.ok()) {
            let path = entry.path();
            if path.is_file() && is_text_file(path) {
                files.push(path.to_path_buf());
            }
        }
    } else {
        for entry in std::fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.is_file() && is_text_file(&path) {
                files.push(path);
            }
        }
    }

    files.sort();
    Ok(files)
}

/// Expand the placeholder tokens of one file into the output path.
///
/// Returns the number of tokens left unresolved; they stay verbatim in
/// the output, so the rendered text is scanned for leftovers.
async fn render_file(
    translator: &crate::core::translator::Translator,
    input: &Path,
    output: &Path,
) -> anyhow::Result<usize> {
    use tracing::{debug, warn};

    debug!("Rendering: {}", input.display());

    let content = tokio::fs::read_to_string(input).await?;
    let rendered = translator.translate(&content).await?;

    let unresolved = translator.pattern().keys_in(&rendered).len();
    if unresolved > 0 {
        warn!("{} unresolved tokens in {}", unresolved, input.display());
    }

    if let Some(parent) = output.parent() {
        if !parent.exists() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    tokio::fs::write(output, rendered).await?;
    Ok(unresolved)
}

/// Handle languages command
pub async fn handle_languages() -> anyhow::Result<()> {
    use crate::catalog::loader;
    use crate::core::translator::Translator;

    let translator = Translator::from_env()?;
    let config = translator.config();
    let languages = translator.languages()?;

    if languages.is_empty() {
        println!(
            "No languages found under {}",
            config.path.display()
        );
        return Ok(());
    }

    println!("Languages under {}:", config.path.display());
    for lang in languages {
        let catalog = loader::load_language(&config.path, &lang)?;
        println!("   {} ({} keys)", lang, catalog.len());
    }

    Ok(())
}

/// Handle check command
pub async fn handle_check(reference: String, report: Option<PathBuf>) -> anyhow::Result<()> {
    use crate::catalog::loader;
    use crate::core::models::{normalize_lang, MissingKey, MISSING_REPORT_FILE};
    use crate::core::translator::Translator;
    use tracing::info;

    let reference = normalize_lang(&reference);
    let translator = Translator::from_env()?;
    let config = translator.config();

    info!("Checking catalogs against reference language '{}'", reference);

    let reference_catalog = loader::load_language(&config.path, &reference)?;
    if reference_catalog.is_empty() {
        anyhow::bail!("Reference language '{}' has no catalog", reference);
    }

    let mut missing = Vec::new();
    for lang in translator.languages()? {
        if lang == reference {
            continue;
        }

        let catalog = loader::load_language(&config.path, &lang)?;
        for key in reference_catalog.keys_sorted() {
            if !catalog.contains(key) {
                missing.push(MissingKey {
                    language: lang.clone(),
                    key: key.to_string(),
                    reference: reference_catalog.get(key).unwrap_or_default().to_string(),
                    translation: None,
                });
            }
        }
    }

    if missing.is_empty() {
        println!("✅ No missing translations found!");
        return Ok(());
    }

    println!("\n⚠️  Found {} missing translations:", missing.len());
    for (i, entry) in missing.iter().enumerate() {
        println!("\n{}. Language: {}", i + 1, entry.language);
        println!("   Key: {}", entry.key);
        println!("   Reference: {}", entry.reference);
    }

    // Saved outside the catalog directory so the report is never picked
    // up as a catalog file
    let report_path = report.unwrap_or_else(|| PathBuf::from(MISSING_REPORT_FILE));
    let json = serde_json::to_string_pretty(&missing)?;
    tokio::fs::write(&report_path, json).await?;

    println!("\n📝 Report saved to: {}", report_path.display());
    println!("   Fill in the translations and use 'apply-fill' to apply them.");

    Ok(())
}

/// Handle apply-fill command
pub async fn handle_apply_fill(json: PathBuf) -> anyhow::Result<()> {
    use crate::core::models::{normalize_lang, MissingKey};
    use crate::core::translator::Translator;
    use std::collections::BTreeMap;
    use tracing::info;

    info!("Applying translations from: {}", json.display());

    let translator = Translator::from_env()?;
    let config = translator.config();

    let content = tokio::fs::read_to_string(&json).await?;
    let entries: Vec<MissingKey> = serde_json::from_str(&content)?;

    let mut by_language: BTreeMap<String, Vec<(String, String)>> = BTreeMap::new();
    for entry in entries {
        if let Some(translation) = entry.translation {
            by_language
                .entry(normalize_lang(&entry.language))
                .or_default()
                .push((entry.key, translation));
        }
    }

    let mut applied = 0;
    for (lang, pairs) in by_language {
        let path = config.path.join(format!("{}.json", lang));

        let mut map: serde_json::Map<String, serde_json::Value> = if path.is_file() {
            serde_json::from_str(&std::fs::read_to_string(&path)?)?
        } else {
            serde_json::Map::new()
        };

        for (key, translation) in pairs {
            map.insert(key, serde_json::Value::String(translation));
            applied += 1;
        }

        let content = serde_json::to_string_pretty(&serde_json::Value::Object(map))?;
        tokio::fs::write(&path, content).await?;
        info!("Updated {}", path.display());
    }

    println!("✅ Applied {} translations from {}", applied, json.display());
    Ok(())
}

/// Handle server command
pub async fn handle_server(host: String, port: u16, debug: bool) -> anyhow::Result<()> {
    use crate::server::api::run_server;
    use tracing::info;

    if debug {
        std::env::set_var("RUST_LOG", "debug");
    }

    info!("Starting HTTP server on {}:{}", host, port);
    println!("🚀 Server starting on http://{}:{}", host, port);

    run_server(host, port).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::TranslatorConfig;
    use crate::core::translator::Translator;
    use std::fs;

    #[test]
    fn test_is_text_file() {
        assert!(is_text_file(Path::new("page.txt")));
        assert!(is_text_file(Path::new("page.MD")));
        assert!(is_text_file(Path::new("page.html")));
        assert!(!is_text_file(Path::new("page.toml")));
        assert!(!is_text_file(Path::new("page")));
    }

    #[tokio::test]
    async fn test_render_file_counts_unresolved_tokens() {
        let dir = tempfile::tempdir().unwrap();
        let catalog_dir = dir.path().join("i18n");
        fs::create_dir(&catalog_dir).unwrap();
        fs::write(catalog_dir.join("ja.toml"), "hello = \"こんにちは\"\n").unwrap();

        let input = dir.path().join("page.txt");
        fs::write(&input, "{#hello} {#missing}!").unwrap();
        let output = dir.path().join("out/page.txt");

        let config = TranslatorConfig::default()
            .with_path(&catalog_dir)
            .with_language("ja");
        let translator = Translator::new(config).unwrap();

        let unresolved = render_file(&translator, &input, &output).await.unwrap();
        assert_eq!(unresolved, 1);
        assert_eq!(fs::read_to_string(&output).unwrap(), "こんにちは {#missing}!");
    }
}
