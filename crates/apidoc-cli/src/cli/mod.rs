//! Command-line interface definition for apidoc.
//!
//! - `apidoc build` - Generate one JSON document per documented entity
//! - `apidoc check` - Validate configuration and print the resolved source-link base

mod commands;

use clap::Parser;

pub use commands::{BuildArgs, CheckArgs, Command, SourceArgs};

/// apidoc - JSON view-models for the API documentation site
#[derive(Parser, Debug)]
#[command(
    name = "apidoc",
    version,
    about = "Generate the JSON documents behind the API documentation site",
    long_about = "apidoc turns the parsed doc-comment output of the comment parser into one\n\
                  JSON document per documented entity, ready for the static-site frontend."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
