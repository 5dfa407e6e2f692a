//! Miette diagnostic conversion for CLI errors.
//!
//! This module provides conversion from CLI errors to miette diagnostics
//! for terminal error reporting.

use crate::error::CliError;
use lift_template::TemplateError;
use miette::Report;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Template(TemplateError::MergeConflict(logical_id)) => miette::miette!(
            "Template merge conflict: resource '{}' already exists with different content\n\n\
             Hint: Two routes may collapse onto the same resource name, or the base template\n\
             already defines it. Rename the conflicting route or remove the resource from the\n\
             base template.",
            logical_id
        ),
        CliError::Config(e) => miette::miette!("Configuration error: {}", e),
        CliError::Routes(e) => miette::miette!(
            "Route error: {}\n\nHint: Route paths are relative, slash-separated, and limited\n\
             to letters, digits, '.', '_' and '-' per segment.",
            e
        ),
        _ => miette::miette!("{}", err),
    }
}
