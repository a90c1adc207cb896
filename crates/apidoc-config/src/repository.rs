//! Permalink base resolution for source links.

use tracing::debug;

use crate::config::FileLink;
use crate::error::{ConfigError, Result};
use crate::manifest::ProjectManifest;

/// Resolved `<repository>/blob/<ref>/` prefix for source permalinks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryBase {
    repository: String,
    git_ref: String,
}

impl RepositoryBase {
    /// Resolve the base once per run.
    ///
    /// A `fileLink` override wins field by field; otherwise the manifest's
    /// repository URL (without `git+` and `.git`) and `v<version>` are used.
    pub fn resolve(manifest: &ProjectManifest, file_link: Option<&FileLink>) -> Result<Self> {
        let repository = match file_link.and_then(|link| non_blank(link.repository.as_deref())) {
            Some(repository) => repository.to_string(),
            None => manifest
                .repository_url()
                .map(clean_repository_url)
                .ok_or(ConfigError::MissingRepository)?,
        };

        let git_ref = match file_link.and_then(|link| non_blank(link.git_ref.as_deref())) {
            Some(git_ref) => git_ref.to_string(),
            None => non_blank(manifest.version.as_deref())
                .map(|version| format!("v{version}"))
                .ok_or(ConfigError::MissingVersion)?,
        };

        let base = Self {
            repository: repository.trim_end_matches('/').to_string(),
            git_ref,
        };
        debug!(base = %base.url(), "resolved repository base");
        Ok(base)
    }

    pub fn repository(&self) -> &str {
        &self.repository
    }

    pub fn git_ref(&self) -> &str {
        &self.git_ref
    }

    /// Prefix that project-relative paths are appended to.
    pub fn url(&self) -> String {
        format!("{}/blob/{}/", self.repository, self.git_ref)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.trim().is_empty())
}

fn clean_repository_url(url: &str) -> String {
    let url = url.trim();
    let url = url.strip_prefix("git+").unwrap_or(url);
    url.strip_suffix(".git").unwrap_or(url).to_string()
}
