//! # lift-package
//!
//! The Packager: turns compiled page outputs into a deployable zip archive.
//!
//! For every route the archive carries two entries under the build prefix:
//! the unmodified compiled asset (`<buildDir>/<route>.original.js`) and a
//! generated wrapper (`<buildDir>/<route>.js`) exposing the invocation entry
//! point. Output is deterministic: identical inputs produce byte-identical
//! archives.

pub mod archive;
pub mod error;
pub mod wrapper;

pub use archive::Packager;
pub use error::{PackageError, Result};
