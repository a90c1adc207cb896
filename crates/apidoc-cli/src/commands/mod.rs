//! Command implementations for the apidoc CLI.
//!
//! - [`build`] - Generate content documents
//! - [`check`] - Configuration validation
//!
//! Each command provides an `execute` function that takes the parsed command
//! arguments and returns a Result.

pub mod build;
pub mod check;
mod project;

// Re-export execute functions for convenience
pub use build::execute as build_execute;
pub use check::execute as check_execute;
