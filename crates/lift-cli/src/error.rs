//! Error handling for the lift CLI.
//!
//! Top-level errors (`CliError`) represent broad categories of failures and
//! convert automatically from the workspace crates' domain errors via
//! `#[from]` attributes. `ConfigError` covers loading and validating
//! `lift.config.json`. Context helpers allow attaching additional
//! information to errors before they reach the binary boundary, where they
//! are rendered through miette.

mod miette;

use std::path::PathBuf;
use thiserror::Error;

pub use self::miette::cli_error_to_miette;

/// Top-level CLI error type.
///
/// This is the primary error type returned by CLI commands. It automatically
/// converts from domain-specific errors via `From` implementations.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration-related errors (file not found, invalid values, etc.)
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Route collection errors (malformed paths, duplicate entries, etc.)
    #[error("Route error: {0}")]
    Routes(#[from] lift_routes::RouteError),

    /// Template augmentation errors (merge conflicts, malformed documents)
    #[error("Template error: {0}")]
    Template(#[from] lift_template::TemplateError),

    /// Archive packaging errors (missing pages, write failures)
    #[error("Packaging error: {0}")]
    Package(#[from] lift_package::PackageError),

    /// Invalid command-line arguments or options
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// File or directory not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with custom messages
    #[error("{0}")]
    Custom(String),
}

/// Configuration-specific errors.
///
/// These errors occur during config file loading and validation. Each
/// variant provides specific guidance on what went wrong.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file doesn't exist at the expected location
    #[error("Config file not found: {}\n\nHint: Create a lift.config.json file or specify --config <path>", .0.display())]
    NotFound(PathBuf),

    /// Config could not be assembled from its sources
    #[error("Failed to load configuration: {0}\n\nHint: Check lift.config.json syntax and field types")]
    Load(String),

    /// Invalid value for a configuration option
    #[error("Invalid value for '{field}': {value}\n\nHint: {hint}")]
    InvalidValue {
        /// Name of the field with invalid value
        field: String,
        /// The invalid value
        value: String,
        /// Helpful hint for correct values
        hint: String,
    },

    /// I/O error while reading config
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Extension trait for adding context to `Result` types.
pub trait ResultExt<T> {
    /// Replace a not-found I/O error with the path that was missing.
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T>;

    /// Add a helpful hint to the error message.
    fn with_hint(self, hint: impl std::fmt::Display) -> Result<T>;

    /// Prefix the error with a custom message.
    fn context(self, msg: impl std::fmt::Display) -> Result<T>;
}

impl<T, E: Into<CliError>> ResultExt<T> for std::result::Result<T, E> {
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            match err {
                CliError::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound => {
                    CliError::FileNotFound(path.as_ref().to_path_buf())
                }
                other => other,
            }
        })
    }

    fn with_hint(self, hint: impl std::fmt::Display) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            CliError::Custom(format!("{}\n\nHint: {}", err, hint))
        })
    }

    fn context(self, msg: impl std::fmt::Display) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            CliError::Custom(format!("{}: {}", msg, err))
        })
    }
}
