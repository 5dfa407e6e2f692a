//! Route manifest parsing.
//!
//! The manifest is the explicit form of route input: a JSON array of
//! entries, each naming a route path and optionally the HTTP methods it
//! serves. Entries without methods fall back to the caller's default set.
//!
//! ```json
//! [
//!   { "path": "blog/post", "methods": ["GET", "HEAD"] },
//!   { "path": "about" }
//! ]
//! ```

use std::fs;
use std::path::Path;

use rustc_hash::FxHashSet;
use serde::Deserialize;
use tracing::debug;

use crate::error::{Result, RouteError};
use crate::method::HttpMethod;
use crate::route::{Route, RoutePath};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ManifestEntry {
    path: RoutePath,
    #[serde(default)]
    methods: Option<Vec<HttpMethod>>,
}

/// Load routes from a manifest file.
///
/// Duplicate paths are rejected: two manifest entries for the same route
/// would demand two function resources under one identifier.
pub fn load(path: &Path, default_methods: &[HttpMethod]) -> Result<Vec<Route>> {
    if !path.exists() {
        return Err(RouteError::ManifestNotFound(path.to_path_buf()));
    }
    let raw = fs::read_to_string(path)?;
    let entries: Vec<ManifestEntry> =
        serde_json::from_str(&raw).map_err(|source| RouteError::ManifestParse {
            path: path.to_path_buf(),
            source,
        })?;

    let mut seen = FxHashSet::default();
    let mut routes = Vec::with_capacity(entries.len());
    for entry in entries {
        if !seen.insert(entry.path.clone()) {
            return Err(RouteError::DuplicateRoute(entry.path.to_string()));
        }
        let methods = entry
            .methods
            .unwrap_or_else(|| default_methods.to_vec());
        routes.push(Route::new(entry.path, methods)?);
    }

    debug!(manifest = %path.display(), routes = routes.len(), "loaded route manifest");
    Ok(routes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_manifest(dir: &tempfile::TempDir, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join("routes.json");
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn loads_entries_with_and_without_methods() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_manifest(
            &dir,
            r#"[
                { "path": "blog/post", "methods": ["GET", "HEAD"] },
                { "path": "about" }
            ]"#,
        );

        let routes = load(&path, HttpMethod::PAGE_DEFAULTS).unwrap();
        assert_eq!(routes.len(), 2);
        assert_eq!(routes[0].path.as_str(), "blog/post");
        assert_eq!(routes[0].methods, [HttpMethod::Get, HttpMethod::Head]);
        assert_eq!(routes[1].path.as_str(), "about");
        assert_eq!(routes[1].methods, HttpMethod::PAGE_DEFAULTS);
    }

    #[test]
    fn rejects_duplicate_paths() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_manifest(
            &dir,
            r#"[ { "path": "about" }, { "path": "about", "methods": ["POST"] } ]"#,
        );

        let err = load(&path, HttpMethod::PAGE_DEFAULTS).unwrap_err();
        assert!(matches!(err, RouteError::DuplicateRoute(p) if p == "about"));
    }

    #[test]
    fn rejects_explicit_empty_method_list() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_manifest(&dir, r#"[ { "path": "about", "methods": [] } ]"#);

        let err = load(&path, HttpMethod::PAGE_DEFAULTS).unwrap_err();
        assert!(matches!(err, RouteError::NoMethods(_)));
    }

    #[test]
    fn surfaces_malformed_route_paths_as_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_manifest(&dir, r#"[ { "path": "/blog" } ]"#);

        let err = load(&path, HttpMethod::PAGE_DEFAULTS).unwrap_err();
        assert!(matches!(err, RouteError::ManifestParse { .. }));
    }

    #[test]
    fn missing_manifest_is_its_own_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(&dir.path().join("nope.json"), HttpMethod::PAGE_DEFAULTS).unwrap_err();
        assert!(matches!(err, RouteError::ManifestNotFound(_)));
    }
}
