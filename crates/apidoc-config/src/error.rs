//! Error types for configuration loading and repository resolution.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Manifest errors
    #[error("package manifest not found: {0}")]
    ManifestNotFound(PathBuf),

    #[error("invalid package manifest {path}: {message}")]
    InvalidManifest { path: PathBuf, message: String },

    // Repository resolution errors
    #[error("no repository URL in the package manifest and no fileLink.repository override")]
    MissingRepository,

    #[error("no version in the package manifest and no fileLink.ref override")]
    MissingVersion,

    // Config parsing/loading errors
    #[error("unsupported configuration format: {0}")]
    UnsupportedFormat(String),

    #[error("invalid config value for '{field}': {message}")]
    InvalidValue { field: String, message: String },

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
