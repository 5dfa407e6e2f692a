//! lift CLI - package Next.js-style applications for serverless deployment.
//!
//! This crate provides the command-line interface over the lift workspace:
//! route collection (`lift-routes`), template augmentation (`lift-template`)
//! and archive packaging (`lift-package`), behind a single `lift package`
//! invocation.
//!
//! # Architecture
//!
//! - [`error`] - Comprehensive error types with actionable messages
//! - [`logger`] - Structured logging with tracing
//! - [`ui`] - Terminal UI utilities for formatted output
//! - `commands` - Individual CLI command implementations
//! - `config` - Configuration file handling

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, ConfigError, Result, ResultExt};
