//! Error types for the folio terminal.

use std::io;

/// Errors produced by the folio terminal framework.
#[derive(Debug, thiserror::Error)]
pub enum FolioError {
    #[error("command error: {0}")]
    Command(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("catalog error: {0}")]
    Catalog(String),

    #[error("host error: {0}")]
    Host(String),

    #[error("overlay error: {0}")]
    Overlay(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, FolioError>;
