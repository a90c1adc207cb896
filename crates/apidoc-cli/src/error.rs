//! Error handling for the apidoc CLI.
//!
//! Library errors convert into [`CliError`] via `#[from]`; `main` turns the
//! final error into a miette report.

use std::path::PathBuf;

use thiserror::Error;

mod miette;

pub use self::miette::cli_error_to_miette;

pub type Result<T> = std::result::Result<T, CliError>;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration, manifest or repository resolution failed.
    #[error("Configuration error: {0}")]
    Config(#[from] apidoc_config::ConfigError),

    /// Reading input, assembling or writing documents failed.
    #[error("Generation error: {0}")]
    Docs(#[from] apidoc_core::DocsError),

    /// Input file does not exist.
    #[error("Input not found: {}\n\nHint: Run the comment parser first or pass --input <path>", .0.display())]
    InputNotFound(PathBuf),
}
