use clap::{Args, Subcommand};
use std::path::PathBuf;

use apidoc_config::ConfigOverrides;

/// Available apidoc subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate content documents
    ///
    /// Reads the parsed doc-comment JSON and writes `<out-dir>/<pid>.json` for
    /// every top-level entity, plus a navigation index.
    Build(BuildArgs),

    /// Validate configuration
    ///
    /// Loads the config file and package manifest and resolves the repository
    /// base used for source links, without generating anything.
    Check(CheckArgs),
}

/// Options shared by every command that reads configuration.
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Path to the config file (defaults to apidoc.config.json / apidoc.config.toml)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Path to the project's package.json
    #[arg(long, value_name = "FILE")]
    pub manifest: Option<PathBuf>,

    /// Project root that source paths are made relative to
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,
}

/// Arguments for the build command
#[derive(Args, Debug, Clone, Default)]
pub struct BuildArgs {
    /// Parsed doc-comment JSON (an array of entities)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output directory for the generated documents
    #[arg(short, long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    #[command(flatten)]
    pub source: SourceArgs,
}

/// Arguments for the check command
#[derive(Args, Debug, Clone, Default)]
pub struct CheckArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

impl BuildArgs {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            input: self.input.clone(),
            out_dir: self.out_dir.clone(),
            ..self.source.overrides()
        }
    }
}

impl SourceArgs {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            root: self.root.clone(),
            manifest: self.manifest.clone(),
            ..ConfigOverrides::default()
        }
    }
}
