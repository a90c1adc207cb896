//! apidoc CLI - JSON view-models for the API documentation site.
//!
//! The CLI wires the `apidoc-config` loading layers to the `apidoc-core`
//! generator:
//!
//! - [`cli`] - Argument definitions
//! - [`commands`] - `build` and `check`
//! - [`error`] - Error types with actionable messages
//! - [`logger`] - Structured logging with tracing
//! - [`ui`] - Terminal status lines and summaries
//!
//! # Example
//!
//! ```rust
//! use apidoc_cli::{error::Result, logger};
//!
//! fn main() -> Result<()> {
//!     logger::init_logger(false, false, false);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, Result};
