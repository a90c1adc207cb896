//! Configuration for the apidoc generator: the generator config file, the host
//! project's package manifest, and the repository base used for source links.

pub mod config;
pub mod error;
pub mod manifest;
pub mod repository;

// Re-export main types
pub use config::{find_config_file, ConfigOverrides, FileLink, GeneratorConfig, CONFIG_FILES};
pub use error::*;
pub use manifest::{ProjectManifest, Repository};
pub use repository::RepositoryBase;
