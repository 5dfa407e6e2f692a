//! Error types for route validation and collection.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, RouteError>;

#[derive(Debug, Error)]
pub enum RouteError {
    #[error("route path is empty")]
    EmptyPath,

    #[error("route path must be relative: {0}")]
    AbsolutePath(String),

    #[error("route path contains an empty segment: {0}")]
    EmptySegment(String),

    #[error("invalid segment '{segment}' in route path '{path}'")]
    InvalidSegment { path: String, segment: String },

    #[error("route '{0}' declares no HTTP methods")]
    NoMethods(String),

    #[error("unknown HTTP method: {0}")]
    UnknownMethod(String),

    #[error("duplicate route path in manifest: {0}")]
    DuplicateRoute(String),

    #[error("route manifest not found: {}", .0.display())]
    ManifestNotFound(PathBuf),

    #[error("invalid route manifest {}: {source}", .path.display())]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("pages directory not found: {}", .0.display())]
    PagesDirNotFound(PathBuf),

    #[error("failed to walk pages directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
