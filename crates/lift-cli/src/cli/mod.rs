//! Command-line interface definition for lift.
//!
//! This module defines the complete CLI structure using clap v4's derive
//! macros. It provides type-safe argument parsing with clear error messages.
//!
//! # Command Structure
//!
//! - `lift package` - Generate the infrastructure template and deployment archive
//! - `lift check` - Validate configuration and route inputs

mod commands;

use clap::Parser;

pub use commands::{CheckArgs, Command, PackageArgs};

/// lift - package Next.js-style applications for serverless hosting
#[derive(Parser, Debug)]
#[command(
    name = "lift",
    version,
    about = "Package Next.js-style applications for serverless hosting",
    long_about = "lift turns a web framework's compiled page output into deployable\n\
                  serverless artifacts: an infrastructure template describing one\n\
                  function per page plus the routing resources in front of it, and a\n\
                  zip archive carrying each compiled page with its invocation wrapper."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    ///
    /// Shows detailed information about route collection, template
    /// augmentation, and archive assembly.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    ///
    /// Only critical errors will be displayed. Useful for CI/CD environments
    /// or when piping output to other tools.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    ///
    /// Outputs plain text without ANSI color codes. Useful for logging to
    /// files or systems that don't support colored terminal output.
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
