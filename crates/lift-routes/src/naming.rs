//! Logical-ID derivation for generated infrastructure resources.
//!
//! Every resource the template augmenter emits is keyed by a logical ID that
//! is a pure function of the route path. Names follow the provider's
//! alphanumeric-only convention: `-` becomes `Dash`, `_` becomes
//! `Underscore`, anything else non-alphanumeric is dropped, and the first
//! character is uppercased.

use crate::method::HttpMethod;
use crate::route::RoutePath;

/// Logical ID of the REST API resource every route hangs off.
pub const REST_API_LOGICAL_ID: &str = "ApiGatewayRestApi";

/// Normalize one name component into its logical-ID form.
///
/// # Examples
/// ```
/// use lift_routes::naming::normalize;
/// assert_eq!(normalize("blog"), "Blog");
/// assert_eq!(normalize("blog-post"), "BlogDashpost");
/// assert_eq!(normalize("my_page"), "MyUnderscorepage");
/// ```
pub fn normalize(name: &str) -> String {
    let expanded = name.replace('-', "Dash").replace('_', "Underscore");
    let mut out = String::with_capacity(expanded.len());
    for (i, c) in expanded.chars().filter(|c| c.is_ascii_alphanumeric()).enumerate() {
        if i == 0 {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Concatenated normalized segments of a path: `blog/post` -> `BlogPost`.
pub fn normalize_path(path: &RoutePath) -> String {
    path.segments().map(normalize).collect()
}

/// Logical ID of the compute-function resource for a route.
///
/// Derived from the function name (`blog/post` -> `blog-post`), so the `/`
/// separators survive as `Dash` markers: `BlogDashpostLambdaFunction`.
pub fn function_logical_id(path: &RoutePath) -> String {
    format!("{}LambdaFunction", normalize(&path.function_name()))
}

/// Logical ID of the routing resource for a path prefix.
///
/// Takes the prefix as a raw string because intermediate prefixes are
/// borrowed slices of an already validated path.
pub fn resource_logical_id(prefix: &str) -> String {
    let normalized: String = prefix.split('/').map(normalize).collect();
    format!("ApiGatewayResource{normalized}")
}

/// Logical ID of the method binding for a route and verb.
pub fn method_logical_id(path: &RoutePath, method: HttpMethod) -> String {
    format!(
        "ApiGatewayMethod{}{}",
        normalize_path(path),
        method.title_case()
    )
}
