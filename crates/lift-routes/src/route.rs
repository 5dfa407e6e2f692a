//! Validated route paths and the routes built from them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RouteError};
use crate::method::HttpMethod;

/// A file-system-derived route path such as `blog/post`.
///
/// Invariants, enforced at construction:
/// - relative (no leading `/`), non-empty, no trailing `/`
/// - no empty segments
/// - segments limited to `[A-Za-z0-9._-]`, and never `.` or `..`
///
/// The segment restriction keeps every derived name well-formed: archive
/// entry paths can never escape the build prefix, and logical IDs normalize
/// without surprises.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RoutePath(String);

impl RoutePath {
    /// Parse and validate a route path.
    ///
    /// # Examples
    /// ```
    /// use lift_routes::RoutePath;
    /// let path = RoutePath::parse("blog/post").unwrap();
    /// assert_eq!(path.segments().collect::<Vec<_>>(), ["blog", "post"]);
    /// assert!(RoutePath::parse("/blog").is_err());
    /// assert!(RoutePath::parse("blog//post").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.is_empty() {
            return Err(RouteError::EmptyPath);
        }
        if raw.starts_with('/') {
            return Err(RouteError::AbsolutePath(raw.to_string()));
        }
        for segment in raw.split('/') {
            if segment.is_empty() {
                return Err(RouteError::EmptySegment(raw.to_string()));
            }
            let valid = segment != "."
                && segment != ".."
                && segment
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
            if !valid {
                return Err(RouteError::InvalidSegment {
                    path: raw.to_string(),
                    segment: segment.to_string(),
                });
            }
        }
        Ok(RoutePath(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Ordered path segments: `blog/post` yields `blog`, `post`.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/')
    }

    /// The last segment, used to name files derived from this route.
    pub fn basename(&self) -> &str {
        self.0.rsplit('/').next().expect("validated path is non-empty")
    }

    /// Every prefix of the path, shortest first.
    ///
    /// `blog/post` decomposes into `blog` and `blog/post` - one entry per
    /// routing resource node the path expands to.
    pub fn prefixes(&self) -> impl Iterator<Item = &str> {
        self.0
            .char_indices()
            .filter(|&(_, c)| c == '/')
            .map(|(i, _)| &self.0[..i])
            .chain(std::iter::once(self.0.as_str()))
    }

    /// The compute-function name for this route: segments joined with `-`.
    pub fn function_name(&self) -> String {
        self.0.replace('/', "-")
    }
}

impl fmt::Display for RoutePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for RoutePath {
    type Error = RouteError;

    fn try_from(raw: String) -> Result<Self> {
        RoutePath::parse(&raw)
    }
}

impl From<RoutePath> for String {
    fn from(path: RoutePath) -> String {
        path.0
    }
}

/// A page route: one path mapped to one compute function and the HTTP
/// methods it serves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub path: RoutePath,
    pub methods: Vec<HttpMethod>,
}

impl Route {
    /// Build a route with an explicit method set.
    ///
    /// An empty method set is a configuration error - a route nothing can
    /// reach is always a mistake in the input.
    pub fn new(path: RoutePath, methods: Vec<HttpMethod>) -> Result<Self> {
        if methods.is_empty() {
            return Err(RouteError::NoMethods(path.to_string()));
        }
        Ok(Route { path, methods })
    }

    /// Build a page route with the default `GET`/`HEAD` method set.
    pub fn page(path: RoutePath) -> Self {
        Route {
            path,
            methods: HttpMethod::PAGE_DEFAULTS.to_vec(),
        }
    }
}
