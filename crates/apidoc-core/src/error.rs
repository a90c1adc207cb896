use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for documentation generation.
pub type Result<T> = std::result::Result<T, DocsError>;

/// Error variants for documentation generation.
///
/// Only infrastructure failures surface here. Missing or malformed annotation
/// data is defaulted by the transformers and never produces an error.
#[derive(Debug, Error)]
pub enum DocsError {
    /// Failed to read, create or write a file or directory.
    #[error("I/O failure at '{path}': {error}")]
    Io {
        /// Path that caused the error.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        error: std::io::Error,
    },

    /// The parsed-comment input is not valid JSON or not an entity array.
    #[error("failed to parse doc input '{path}': {message}")]
    Parse {
        /// Path to the input file.
        path: PathBuf,
        /// Parser error message.
        message: String,
    },

    /// Two entities map to the same output file.
    #[error("entities '{first}' and '{second}' both resolve to pid '{pid}'")]
    DuplicatePid {
        /// Colliding document identifier.
        pid: String,
        /// Name of the entity that claimed the pid first.
        first: String,
        /// Name of the entity that collided with it.
        second: String,
    },

    /// An entity resolves to a file name the generator writes itself.
    #[error("entity '{name}' resolves to reserved pid '{pid}'")]
    ReservedPid {
        /// Reserved document identifier.
        pid: String,
        /// Name of the offending entity.
        name: String,
    },

    /// Serializing a content document failed.
    #[error("failed to serialize '{pid}': {error}")]
    Serialize {
        /// Identifier of the document being written.
        pid: String,
        /// Underlying serializer error.
        #[source]
        error: serde_json::Error,
    },
}

impl DocsError {
    /// Helper to wrap an I/O error with the path it concerns.
    pub fn io(path: impl Into<PathBuf>, error: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            error,
        }
    }
}
