//! lift CLI - serverless packaging for Next.js-style applications.
//!
//! This is the main entry point for the lift CLI. It handles command-line
//! argument parsing, logging initialization, and command dispatch.

use clap::Parser;
use lift_cli::{cli, commands, error, logger, ui};
use miette::Result;

fn main() -> Result<()> {
    // Parse command-line arguments
    let args = cli::Cli::parse();

    // Initialize logging and colors based on global flags
    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors();

    // Execute the appropriate command
    let result = match args.command {
        cli::Command::Package(package_args) => commands::package_execute(package_args),
        cli::Command::Check(check_args) => commands::check_execute(check_args),
    };

    // Convert CLI errors to miette diagnostics for error reporting
    result.map_err(error::cli_error_to_miette)
}
