//! Resolution steps shared by `build` and `check`.

use std::path::{Path, PathBuf};

use apidoc_config::{ConfigOverrides, GeneratorConfig, ProjectManifest, RepositoryBase};
use tracing::{debug, warn};

use crate::cli::SourceArgs;
use crate::error::Result;

/// Configuration plus everything derived from it before any entity is read.
#[derive(Debug)]
pub(crate) struct ResolvedProject {
    pub config: GeneratorConfig,
    pub root: PathBuf,
    pub base: RepositoryBase,
}

/// Load the layered config, the package manifest and the repository base.
///
/// A manifest path is resolved against the project root; a missing repository
/// or version is fatal here, before any output is produced.
pub(crate) fn resolve(source: &SourceArgs, overrides: &ConfigOverrides) -> Result<ResolvedProject> {
    let config = GeneratorConfig::load(source.config.as_deref(), overrides)?;
    debug!(?config, "loaded configuration");

    let root = canonical_root(&config.root);
    let manifest = ProjectManifest::load(root.join(&config.manifest))?;
    let base = RepositoryBase::resolve(&manifest, config.file_link.as_ref())?;

    Ok(ResolvedProject { config, root, base })
}

fn canonical_root(root: &Path) -> PathBuf {
    match root.canonicalize() {
        Ok(path) => path,
        Err(error) => {
            warn!(root = %root.display(), %error, "could not canonicalize project root");
            root.to_path_buf()
        }
    }
}
