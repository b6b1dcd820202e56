//! HTTP API server implementation

use axum::{
    extract::{Json, State},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, warn};

use crate::catalog::loader;
use crate::core::translator::Translator;

/// Application state
#[derive(Clone)]
pub struct AppState {
    /// Shared translator instance
    translator: Arc<Translator>,
}

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: String,
    service: String,
    version: String,
    language: String,
}

/// Languages list response
#[derive(Serialize)]
struct LanguagesResponse {
    languages: Vec<LanguageInfo>,
}

/// Per-language summary
#[derive(Serialize)]
struct LanguageInfo {
    language: String,
    keys: usize,
}

/// Batch translation request
#[derive(Deserialize)]
pub struct TranslateRequest {
    /// Target language; the server default when omitted
    pub language: Option<String>,
    /// Strings or message keys to translate
    pub content_list: Vec<String>,
}

/// Batch translation response
#[derive(Serialize)]
pub struct TranslateResponse {
    pub translations: Vec<TranslationItem>,
}

/// One translated item
#[derive(Serialize)]
pub struct TranslationItem {
    pub language: String,
    pub text: String,
}

/// Error response
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error payload
#[derive(Serialize)]
pub struct ErrorDetail {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// Health check handler
async fn health_check(State(state): State<Arc<AppState>>) -> axum::Json<HealthResponse> {
    axum::Json(HealthResponse {
        status: "ok".to_string(),
        service: "locale-translator".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        language: state.translator.language().await,
    })
}

/// List languages handler
async fn get_languages(
    State(state): State<Arc<AppState>>,
) -> Result<axum::Json<LanguagesResponse>, axum::Json<ErrorResponse>> {
    let path = state.translator.config().path.clone();

    let languages = state.translator.languages().map_err(|e| {
        axum::Json(ErrorResponse {
            error: ErrorDetail {
                message: e.to_string(),
                code: Some("catalog_error".to_string()),
            },
        })
    })?;

    let mut infos = Vec::new();
    for language in languages {
        let keys = match loader::load_language(&path, &language) {
            Ok(catalog) => catalog.len(),
            Err(e) => {
                warn!("Failed to load catalog for '{}': {}", language, e);
                0
            }
        };
        infos.push(LanguageInfo { language, keys });
    }

    Ok(axum::Json(LanguagesResponse { languages: infos }))
}

/// Batch translation handler
async fn translate(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<TranslateRequest>,
) -> Result<axum::Json<TranslateResponse>, axum::Json<ErrorResponse>> {
    if payload.content_list.is_empty() {
        return Err(axum::Json(ErrorResponse {
            error: ErrorDetail {
                message: "content_list cannot be empty".to_string(),
                code: Some("invalid_request".to_string()),
            },
        }));
    }

    let language = match payload.language {
        Some(language) => language,
        None => state.translator.language().await,
    };

    let mut translations = Vec::new();
    for content in payload.content_list {
        match state.translator.translate_in(&content, &language).await {
            Ok(text) => {
                translations.push(TranslationItem {
                    language: language.clone(),
                    text,
                });
            }
            Err(e) => {
                warn!("Translation failed for '{}': {}", content, e);
                // Return original text on error
                translations.push(TranslationItem {
                    language: language.clone(),
                    text: content,
                });
            }
        }
    }

    Ok(axum::Json(TranslateResponse { translations }))
}

/// Run the HTTP server
pub async fn run_server(host: String, port: u16) -> anyhow::Result<()> {
    // Create translator
    let translator = Arc::new(Translator::from_env()?);

    // Create app state
    let state = Arc::new(AppState { translator });

    // Create router
    let app = Router::new()
        .route("/", get(health_check))
        .route("/languages", get(get_languages))
        .route("/translate", post(translate))
        .with_state(state);

    // Bind address
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Starting server on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
