//! Build command implementation.
//!
//! This module implements the `apidoc build` command, which turns the parsed
//! doc-comment JSON into one content document per top-level entity.

use std::time::Instant;

use apidoc_core::model::load_entities;
use apidoc_core::{Generator, ProjectContext};
use tracing::debug;

use crate::cli::BuildArgs;
use crate::commands::project;
use crate::error::{CliError, Result};
use crate::ui;

/// Execute the build command.
///
/// # Build Process
///
/// 1. Load configuration (CLI > Env > File > Defaults)
/// 2. Resolve the repository base from the package manifest
/// 3. Read the entity array
/// 4. Assemble and write documents plus the index
/// 5. Display the summary
///
/// # Errors
///
/// Returns errors for invalid configuration, a manifest without repository or
/// version, a missing or malformed input file, and write failures.
pub fn execute(args: BuildArgs) -> Result<()> {
    let start_time = Instant::now();

    let resolved = project::resolve(&args.source, &args.overrides())?;
    let config = &resolved.config;

    if !config.input.is_file() {
        return Err(CliError::InputNotFound(config.input.clone()));
    }

    ui::info(&format!("Reading {}", config.input.display()));
    let entities = load_entities(&config.input)?;
    debug!(entities = entities.len(), "loaded entities");
    if entities.is_empty() {
        ui::warning(&format!(
            "{} contains no documented entities",
            config.input.display()
        ));
    }

    let generator = Generator::new(ProjectContext::new(resolved.root.clone(), resolved.base.url()));
    let report = generator.run(&entities, &config.out_dir)?;

    ui::print_generation_summary(report.documents, &report.out_dir, start_time.elapsed());
    Ok(())
}
