//! Logging setup for the apidoc CLI using the `tracing` ecosystem.
//!
//! Verbosity comes from the global flags, with `RUST_LOG` as an override when
//! neither `--verbose` nor `--quiet` is given.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const VERBOSE_FILTER: &str = "apidoc_core=debug,apidoc_config=debug,apidoc_cli=debug";
const QUIET_FILTER: &str = "apidoc_core=error,apidoc_config=error,apidoc_cli=error";
const DEFAULT_FILTER: &str = "apidoc_core=info,apidoc_config=info,apidoc_cli=info";

/// Initialize the tracing subscriber. Call once, before any logging.
///
/// The level is chosen in this order:
/// 1. `--verbose`: DEBUG for apidoc crates
/// 2. `--quiet`: ERROR only
/// 3. `RUST_LOG` environment variable
/// 4. INFO for apidoc crates
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let filter = build_filter(verbose, quiet);

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color && should_use_colors())
        .with_writer(std::io::stderr)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

fn build_filter(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Whether colored output should be used.
///
/// `NO_COLOR` disables colors, `FORCE_COLOR` forces them, otherwise the
/// terminal's capabilities decide.
pub fn should_use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }
    console::Term::stderr().features().colors_supported()
}
