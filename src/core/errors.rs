//! Custom error types for catalog and translation operations

use thiserror::Error;

/// Translation and catalog errors
#[derive(Error, Debug)]
pub enum I18nError {
    /// Catalog file could not be parsed
    #[error("Parse error: {path} - {message}")]
    ParseError {
        path: String,
        message: String,
    },

    /// File operation error
    #[error("File error: {path} - {message}")]
    FileError {
        path: String,
        message: String,
    },

    /// Catalog file has an unsupported extension
    #[error("Unsupported catalog format: {extension}")]
    UnsupportedFormat {
        extension: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
    },

    /// Wrapper for anyhow errors
    #[error("Internal error: {0}")]
    InternalError(String),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<anyhow::Error> for I18nError {
    fn from(err: anyhow::Error) -> Self {
        I18nError::InternalError(err.to_string())
    }
}

/// Result type for translation operations
pub type Result<T> = std::result::Result<T, I18nError>;
