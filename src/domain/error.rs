use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::Section;

/// Library-wide error type for simpleplistor operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Input config document does not exist.
    #[error("config.plist file not found at {}", .0.display())]
    ConfigNotFound(PathBuf),

    /// Parse error.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// A section entry lacks a required field.
    #[error("Entry {index} of {section} is missing required field '{field}'")]
    MissingField { section: Section, index: usize, field: &'static str },

    /// A section entry has a field of the wrong shape.
    #[error("Entry {index} of {section} has invalid field '{field}': {reason}")]
    InvalidField { section: Section, index: usize, field: &'static str, reason: String },

    /// Entry path escapes its asset category.
    #[error("Path traversal detected: {0}")]
    PathTraversal(String),

    /// Referenced asset is absent from the database (strict mode only).
    #[error("Asset '{path}' not found in database category '{category}'")]
    AssetMissing { category: &'static str, path: String },

    /// A fixed part of the asset database is absent.
    #[error("Asset database is incomplete: {} not found", .0.display())]
    AssetStoreIncomplete(PathBuf),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Coarse `io::ErrorKind` classification of the failure.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::ParseError { .. }
            | AppError::MissingField { .. }
            | AppError::InvalidField { .. }
            | AppError::PathTraversal(_)
            | AppError::TomlParseError(_)
            | AppError::Json(_) => io::ErrorKind::InvalidInput,
            AppError::ConfigNotFound(_)
            | AppError::AssetMissing { .. }
            | AppError::AssetStoreIncomplete(_) => io::ErrorKind::NotFound,
        }
    }
}
