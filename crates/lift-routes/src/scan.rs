//! Route discovery from a compiled-pages directory.
//!
//! When no manifest is given, routes are derived from the build output
//! itself: every `.js` file under the pages directory becomes a page route,
//! named by its extension-stripped relative path.

use std::path::Path;

use tracing::debug;
use walkdir::WalkDir;

use crate::error::{Result, RouteError};
use crate::method::HttpMethod;
use crate::route::{Route, RoutePath};

/// Scan a compiled-pages directory into a sorted route set.
///
/// Results are sorted by path so downstream output is deterministic
/// regardless of directory iteration order.
pub fn scan_pages(pages_dir: &Path, default_methods: &[HttpMethod]) -> Result<Vec<Route>> {
    if !pages_dir.is_dir() {
        return Err(RouteError::PagesDirNotFound(pages_dir.to_path_buf()));
    }

    let mut routes = Vec::new();
    for entry in WalkDir::new(pages_dir) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let rel = entry
            .path()
            .strip_prefix(pages_dir)
            .expect("walked entries live under the scan root");
        if rel.extension().is_none_or(|ext| ext != "js") {
            continue;
        }

        let raw = rel
            .with_extension("")
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join("/");
        // `.original.js` companions are derived artifacts, not pages.
        if raw.ends_with(".original") {
            continue;
        }
        if raw.is_empty() {
            continue;
        }
        let path = RoutePath::parse(&raw)?;
        routes.push(Route::new(path, default_methods.to_vec())?);
    }

    routes.sort_by(|a, b| a.path.cmp(&b.path));
    debug!(pages_dir = %pages_dir.display(), routes = routes.len(), "scanned pages directory");
    Ok(routes)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "module.exports.render = () => {};").unwrap();
    }

    #[test]
    fn derives_routes_from_js_files() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("blog/post.js"));
        touch(&dir.path().join("about.js"));
        touch(&dir.path().join("styles.css"));

        let routes = scan_pages(dir.path(), HttpMethod::PAGE_DEFAULTS).unwrap();
        let paths: Vec<_> = routes.iter().map(|r| r.path.as_str()).collect();
        assert_eq!(paths, ["about", "blog/post"]);
        assert_eq!(routes[0].methods, HttpMethod::PAGE_DEFAULTS);
    }

    #[test]
    fn skips_original_companions() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("blog/post.js"));
        touch(&dir.path().join("blog/post.original.js"));

        let routes = scan_pages(dir.path(), HttpMethod::PAGE_DEFAULTS).unwrap();
        let paths: Vec<_> = routes.iter().map(|r| r.path.as_str()).collect();
        assert_eq!(paths, ["blog/post"]);
    }

    #[test]
    fn missing_directory_is_a_configuration_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = scan_pages(&dir.path().join("pages"), HttpMethod::PAGE_DEFAULTS).unwrap_err();
        assert!(matches!(err, RouteError::PagesDirNotFound(_)));
    }

    #[test]
    fn sorted_output_is_stable() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("z.js"));
        touch(&dir.path().join("a/b.js"));
        touch(&dir.path().join("a/a.js"));

        let first = scan_pages(dir.path(), HttpMethod::PAGE_DEFAULTS).unwrap();
        let second = scan_pages(dir.path(), HttpMethod::PAGE_DEFAULTS).unwrap();
        assert_eq!(first, second);
        let paths: Vec<_> = first.iter().map(|r| r.path.as_str()).collect();
        assert_eq!(paths, ["a/a", "a/b", "z"]);
    }
}
