//! The host project's `package.json`, reduced to what link generation needs.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectManifest {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub version: Option<String>,

    #[serde(default)]
    pub repository: Option<Repository>,
}

/// `repository` may be a bare URL or a `{ type, url }` object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Repository {
    Url(String),
    Detailed {
        #[serde(rename = "type", default)]
        kind: Option<String>,
        url: String,
    },
}

impl Repository {
    pub fn url(&self) -> &str {
        match self {
            Repository::Url(url) | Repository::Detailed { url, .. } => url,
        }
    }
}

impl ProjectManifest {
    /// Load a manifest from a `package.json` path.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::ManifestNotFound(path.to_path_buf()));
        }
        let content = fs::read_to_string(path)?;
        Self::from_json(path, &content)
    }

    /// Parse manifest JSON. `path` is only used for error reporting.
    pub fn from_json(path: impl AsRef<Path>, content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| ConfigError::InvalidManifest {
            path: path.as_ref().to_path_buf(),
            message: e.to_string(),
        })
    }

    pub fn repository_url(&self) -> Option<&str> {
        self.repository
            .as_ref()
            .map(Repository::url)
            .filter(|url| !url.trim().is_empty())
    }
}
