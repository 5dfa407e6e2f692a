//! Logging infrastructure for the lift CLI.
//!
//! Structured logging setup using the `tracing` ecosystem: verbosity flags
//! map onto an `EnvFilter`, with `RUST_LOG` as the escape hatch.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber with the specified options.
///
/// Should be called once at the start of the program, before any logging
/// occurs.
///
/// # Verbosity Levels
///
/// The logging level is determined in this order:
/// 1. `--verbose` flag: DEBUG for lift crates
/// 2. `--quiet` flag: errors only
/// 3. `RUST_LOG` environment variable: custom filter
/// 4. Default: INFO for lift crates
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let filter = if verbose {
        EnvFilter::new("lift_cli=debug,lift_routes=debug,lift_template=debug,lift_package=debug")
    } else if quiet {
        EnvFilter::new("lift_cli=error")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("lift_cli=info,lift_routes=info,lift_template=info,lift_package=info")
        })
    };

    let fmt_layer = fmt::layer()
        .with_target(false) // Don't show the module path (keeps output clean)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
