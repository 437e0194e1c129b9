//! Error types for configuration validation and loading.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Filesystem validation errors (for CLI use)
    #[error("entry file not found: {path}")]
    EntryNotFound { path: PathBuf },

    #[error("HTML template not found: {path}")]
    TemplateNotFound { path: PathBuf },

    // Options parsing/loading errors
    #[error("no alder configuration found")]
    NotFound,

    #[error("invalid config value for '{field}'")]
    InvalidValue {
        field: String,
        hint: Option<String>,
    },

    // Schema validation errors (no filesystem checks)
    #[error("schema validation failed: {message}")]
    SchemaValidation {
        message: String,
        hint: Option<String>,
    },

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
