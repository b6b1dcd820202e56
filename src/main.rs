//! Main entry point for the Locale Translator CLI

#![forbid(unsafe_code)]

use clap::Parser;
use dotenvy::dotenv;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod catalog;
mod cli;
mod core;
mod server;

use cli::commands::Commands;

/// Locale Translator - message catalog translation tool
#[derive(Parser, Debug)]
#[command(name = "locale-translator", version, about, long_about = None)]
struct Args {
    /// Catalog directory (optional, defaults to I18N_PATH env var or "i18n")
    #[arg(long)]
    path: Option<PathBuf>,

    /// Active language (optional, defaults to I18N_LANGUAGE env var or "en")
    #[arg(short, long)]
    lang: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logging
    let log_level = if std::env::var("RUST_LOG").is_ok() {
        std::env::var("RUST_LOG").unwrap()
    } else {
        "info".to_string()
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}={}", env!("CARGO_PKG_NAME"), log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    // Override config with CLI args if provided
    if let Some(path) = args.path {
        std::env::set_var("I18N_PATH", path);
    }

    if let Some(lang) = args.lang {
        std::env::set_var("I18N_LANGUAGE", lang);
    }

    if args.verbose {
        std::env::set_var("RUST_LOG", "debug");
    }

    // Execute command
    match args.command {
        Some(Commands::Translate { text, lang }) => {
            cli::commands::handle_translate(text, lang).await?;
        }
        Some(Commands::Render {
            file,
            output,
            lang,
            recursive,
        }) => {
            cli::commands::handle_render(file, output, lang, recursive).await?;
        }
        Some(Commands::Languages) => {
            cli::commands::handle_languages().await?;
        }
        Some(Commands::Check { reference, report }) => {
            cli::commands::handle_check(reference, report).await?;
        }
        Some(Commands::ApplyFill { json }) => {
            cli::commands::handle_apply_fill(json).await?;
        }
        Some(Commands::Server { host, port, debug }) => {
            cli::commands::handle_server(host, port, debug).await?;
        }
        None => {
            println!("Please specify a command. Use --help for more information.");
        }
    }

    Ok(())
}
