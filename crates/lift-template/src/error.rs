//! Error types for template loading and augmentation.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TemplateError>;

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("template file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("template document is not a JSON object")]
    NotAnObject,

    #[error("template section '{0}' is not a JSON object")]
    InvalidSection(String),

    #[error("template merge conflict: resource '{0}' already exists with different content")]
    MergeConflict(String),

    #[error("invalid template JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
