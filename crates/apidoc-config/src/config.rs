//! Generator configuration and its layered loading.

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format as _, Json, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ConfigError, Result};

/// Config file names searched in the working directory, in order.
pub const CONFIG_FILES: &[&str] = &["apidoc.config.json", "apidoc.config.toml"];

const ENV_PREFIX: &str = "APIDOC_";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorConfig {
    /// Parsed doc-comment JSON produced by the comment parser.
    #[serde(default = "default_input")]
    pub input: PathBuf,

    /// Directory receiving one `<pid>.json` per entity.
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,

    /// Project root that source paths are made relative to.
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// The project's `package.json`.
    #[serde(default = "default_manifest")]
    pub manifest: PathBuf,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_link: Option<FileLink>,
}

/// Explicit permalink target, overriding what the manifest implies.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileLink {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,

    #[serde(rename = "ref", default, skip_serializing_if = "Option::is_none")]
    pub git_ref: Option<String>,
}

/// Values supplied on the command line. Unset fields leave lower layers alone.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out_dir: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manifest: Option<PathBuf>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            input: default_input(),
            out_dir: default_out_dir(),
            root: default_root(),
            manifest: default_manifest(),
            file_link: None,
        }
    }
}

impl GeneratorConfig {
    /// Load configuration from multiple sources.
    /// Priority: CLI overrides > `APIDOC_*` environment variables > config file > defaults
    pub fn load(config_path: Option<&Path>, overrides: &ConfigOverrides) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        let config_file = config_path
            .map(Path::to_path_buf)
            .or_else(|| find_config_file(Path::new(".")));

        if let Some(path) = config_file {
            debug!(path = %path.display(), "loading config file");
            figment = match path.extension().and_then(|ext| ext.to_str()) {
                Some("json") => figment.merge(Json::file(&path)),
                Some("toml") => figment.merge(Toml::file(&path)),
                _ => {
                    return Err(ConfigError::UnsupportedFormat(
                        path.display().to_string(),
                    ));
                }
            };
        }

        // APIDOC_OUT_DIR -> outDir, APIDOC_FILE_LINK__REF -> fileLink.ref
        figment = figment.merge(
            // `map` resets lowercasing, so it has to be disabled afterwards.
            Env::prefixed(ENV_PREFIX)
                .map(|key| env_key_path(key.as_str()).into())
                .lowercase(false),
        );

        figment = figment.merge(Serialized::defaults(overrides));

        let config: Self = figment.extract().map_err(|e| ConfigError::InvalidValue {
            field: "configuration".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.input.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "input".to_string(),
                message: "input path cannot be empty".to_string(),
            });
        }
        if self.out_dir.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "outDir".to_string(),
                message: "output directory cannot be empty".to_string(),
            });
        }
        Ok(())
    }
}

/// First conventional config file present in `dir`.
pub fn find_config_file(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}

fn env_key_path(key: &str) -> String {
    key.split("__")
        .map(camel_case)
        .collect::<Vec<_>>()
        .join(".")
}

fn camel_case(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    for (index, word) in segment.split('_').filter(|word| !word.is_empty()).enumerate() {
        let word = word.to_ascii_lowercase();
        if index == 0 {
            out.push_str(&word);
        } else {
            let mut chars = word.chars();
            if let Some(first) = chars.next() {
                out.push(first.to_ascii_uppercase());
                out.extend(chars);
            }
        }
    }
    out
}

pub fn default_input() -> PathBuf {
    PathBuf::from("api.json")
}

pub fn default_out_dir() -> PathBuf {
    PathBuf::from("docs/api")
}

pub fn default_root() -> PathBuf {
    PathBuf::from(".")
}

pub fn default_manifest() -> PathBuf {
    PathBuf::from("package.json")
}
