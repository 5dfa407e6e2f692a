//! Error types for archive packaging.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PackageError>;

#[derive(Debug, Error)]
pub enum PackageError {
    #[error("compiled page for route '{route}' not found at {}", .path.display())]
    PageNotFound { route: String, path: PathBuf },

    #[error("failed to write archive: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
