//! Check command implementation.
//!
//! Validates the configuration and package manifest without generating
//! anything, then prints the resolved source-link base.

use crate::cli::CheckArgs;
use crate::commands::project;
use crate::error::Result;
use crate::ui;

/// Execute the check command.
pub fn execute(args: CheckArgs) -> Result<()> {
    let resolved = project::resolve(&args.source, &args.source.overrides())?;

    ui::info(&format!("Input:      {}", resolved.config.input.display()));
    ui::info(&format!("Output:     {}", resolved.config.out_dir.display()));
    ui::info(&format!("Root:       {}", resolved.root.display()));
    ui::info(&format!("Repository: {}", resolved.base.repository()));
    ui::info(&format!("Ref:        {}", resolved.base.git_ref()));
    ui::success(&format!("Source links resolve to {}", resolved.base.url()));
    Ok(())
}
