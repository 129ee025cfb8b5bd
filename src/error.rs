// File: src/error.rs
use std::io;
use thiserror::Error;

/// Crate-wide error type.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Preferences file could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    Serialization(#[from] bincode::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("CSV error on line {line}: {reason}")]
    Csv { line: usize, reason: String },

    /// A copy or export was asked for while the result list is empty.
    #[error("No suggestions to {0}")]
    NoResults(&'static str),

    /// The environment cannot reach a clipboard.
    #[error("Clipboard unavailable: {0}")]
    Clipboard(String),
}

pub type Result<T> = std::result::Result<T, AppError>;

impl From<tempfile::PersistError> for AppError {
    fn from(err: tempfile::PersistError) -> Self {
        AppError::Io(err.error)
    }
}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        AppError::Config(format!("TOML error: {}", err))
    }
}
