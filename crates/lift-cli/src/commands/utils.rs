//! Shared helpers for command implementations.

use std::path::{Path, PathBuf};

use path_clean::PathClean;
use tracing::debug;

use lift_routes::{Route, manifest, scan};

use crate::config::LiftConfig;
use crate::error::Result;

/// Default route manifest name, looked up in the working directory.
const ROUTES_FILE: &str = "routes.json";

/// The working directory all relative paths resolve against.
pub(crate) fn resolve_cwd(config: &LiftConfig) -> Result<PathBuf> {
    match &config.cwd {
        Some(cwd) => Ok(cwd.clone()),
        None => Ok(std::env::current_dir()?),
    }
}

/// Resolve a possibly-relative path against the working directory.
pub(crate) fn resolve_path(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path).clean()
    }
}

/// Collect the route set the way `package` consumes it.
///
/// An explicit manifest wins; otherwise `routes.json` next to the config is
/// used when present; otherwise routes are derived by scanning the compiled
/// pages directory.
pub(crate) fn collect_routes(config: &LiftConfig, cwd: &Path) -> Result<Vec<Route>> {
    if let Some(manifest_path) = &config.routes {
        let resolved = resolve_path(manifest_path, cwd);
        debug!(manifest = %resolved.display(), "collecting routes from manifest");
        return Ok(manifest::load(&resolved, &config.default_methods)?);
    }

    let default_manifest = cwd.join(ROUTES_FILE);
    if default_manifest.exists() {
        debug!(manifest = %default_manifest.display(), "collecting routes from default manifest");
        return Ok(manifest::load(&default_manifest, &config.default_methods)?);
    }

    let pages_dir = resolve_path(&config.pages_dir, cwd);
    debug!(pages_dir = %pages_dir.display(), "collecting routes by scanning pages");
    Ok(scan::scan_pages(&pages_dir, &config.default_methods)?)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn resolve_path_keeps_absolute_paths() {
        let cwd = Path::new("/work");
        assert_eq!(
            resolve_path(Path::new("/elsewhere/x"), cwd),
            PathBuf::from("/elsewhere/x")
        );
        assert_eq!(
            resolve_path(Path::new("out/../dist"), cwd),
            PathBuf::from("/work/dist")
        );
    }

    #[test]
    fn manifest_beats_scanning() {
        let dir = tempfile::tempdir().unwrap();
        let pages = dir.path().join("build/pages");
        fs::create_dir_all(&pages).unwrap();
        fs::write(pages.join("scanned.js"), "").unwrap();
        fs::write(
            dir.path().join("routes.json"),
            r#"[ { "path": "declared" } ]"#,
        )
        .unwrap();

        let config = LiftConfig::load(None, Some(dir.path())).unwrap();
        let routes = collect_routes(&config, dir.path()).unwrap();
        let paths: Vec<_> = routes.iter().map(|r| r.path.as_str()).collect();
        assert_eq!(paths, ["declared"]);
    }

    #[test]
    fn scanning_is_the_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let pages = dir.path().join("build/pages");
        fs::create_dir_all(pages.join("blog")).unwrap();
        fs::write(pages.join("blog/post.js"), "").unwrap();

        let config = LiftConfig::load(None, Some(dir.path())).unwrap();
        let routes = collect_routes(&config, dir.path()).unwrap();
        let paths: Vec<_> = routes.iter().map(|r| r.path.as_str()).collect();
        assert_eq!(paths, ["blog/post"]);
    }
}
