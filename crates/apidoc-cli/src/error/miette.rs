//! Miette diagnostic conversion for CLI errors.

use apidoc_config::ConfigError;
use miette::Report;

use crate::error::CliError;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Config(e) => config_error_to_miette(e),
        CliError::Docs(e) => miette::miette!("Generation failed: {}", e),
        _ => miette::miette!("{}", err),
    }
}

fn config_error_to_miette(err: ConfigError) -> Report {
    match err {
        ConfigError::MissingRepository => miette::miette!(
            "{}\n\nHint: Add a \"repository\" field to package.json or set fileLink.repository in apidoc.config.json",
            err
        ),
        ConfigError::MissingVersion => miette::miette!(
            "{}\n\nHint: Add a \"version\" field to package.json or set fileLink.ref in apidoc.config.json",
            err
        ),
        ConfigError::ManifestNotFound(ref path) => miette::miette!(
            "Package manifest not found: {}\n\nHint: Pass --manifest <path> or run from the project root",
            path.display()
        ),
        _ => miette::miette!("Configuration error: {}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repository_errors_carry_hints() {
        let report = cli_error_to_miette(CliError::Config(ConfigError::MissingRepository));
        assert!(report.to_string().contains("Hint: Add a \"repository\" field"));
    }

    #[test]
    fn other_errors_keep_their_message() {
        let report = cli_error_to_miette(CliError::InputNotFound("api.json".into()));
        assert!(report.to_string().starts_with("Input not found: api.json"));
    }
}
