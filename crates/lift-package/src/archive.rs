//! Deployment archive assembly.

use std::fs;
use std::io::{Seek, Write};
use std::path::{Path, PathBuf};

use tracing::debug;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

use lift_routes::Route;

use crate::error::{PackageError, Result};
use crate::wrapper::render_wrapper;

/// Packages compiled page outputs into a deployment archive.
pub struct Packager {
    pages_dir: PathBuf,
    build_dir: String,
}

impl Packager {
    /// `pages_dir` is where the web framework's build step left the compiled
    /// pages; `build_dir` is the archive-internal prefix entries live under.
    pub fn new(pages_dir: impl Into<PathBuf>, build_dir: impl Into<String>) -> Self {
        Packager {
            pages_dir: pages_dir.into(),
            build_dir: build_dir.into(),
        }
    }

    /// Write the archive for `routes` to `zip_path`.
    ///
    /// Entries are emitted in sorted route order with fixed metadata, so
    /// unchanged inputs reproduce the archive byte for byte.
    pub fn write_archive(&self, routes: &[Route], zip_path: &Path) -> Result<()> {
        if let Some(parent) = zip_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = fs::File::create(zip_path)?;
        self.pack(routes, file)?;
        debug!(archive = %zip_path.display(), routes = routes.len(), "wrote deployment archive");
        Ok(())
    }

    /// Pack `routes` into any writer. Split out from [`Self::write_archive`]
    /// so the archive layout is testable without touching disk.
    pub fn pack<W: Write + Seek>(&self, routes: &[Route], writer: W) -> Result<()> {
        let mut ordered: Vec<&Route> = routes.iter().collect();
        ordered.sort_by(|a, b| a.path.cmp(&b.path));

        let options = FileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .unix_permissions(0o644);

        let mut zip = ZipWriter::new(writer);
        for route in ordered {
            let source = self.page_source(route)?;
            let compiled = fs::read(&source)?;

            zip.start_file(
                format!("{}/{}.original.js", self.build_dir, route.path),
                options,
            )?;
            zip.write_all(&compiled)?;

            zip.start_file(format!("{}/{}.js", self.build_dir, route.path), options)?;
            zip.write_all(render_wrapper(&route.path).as_bytes())?;
        }
        zip.finish()?;
        Ok(())
    }

    /// On-disk location of a route's compiled asset.
    fn page_source(&self, route: &Route) -> Result<PathBuf> {
        let mut path = self.pages_dir.clone();
        let mut segments = route.path.segments().peekable();
        while let Some(segment) = segments.next() {
            if segments.peek().is_some() {
                path.push(segment);
            } else {
                path.push(format!("{segment}.js"));
            }
        }
        if !path.is_file() {
            return Err(PackageError::PageNotFound {
                route: route.path.to_string(),
                path,
            });
        }
        Ok(path)
    }
}
