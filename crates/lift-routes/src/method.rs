//! HTTP methods accepted by the routing layer.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RouteError;

/// An HTTP verb a page route can be bound to.
///
/// Serialized in uppercase wire form (`"GET"`, `"HEAD"`, ...) to match both
/// the route manifest format and the `HttpMethod` property of generated
/// method resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Head,
    Post,
    Put,
    Patch,
    Delete,
    Options,
}

impl HttpMethod {
    /// The default method set for a page route.
    ///
    /// Pages are rendered documents, so they answer `GET` and the `HEAD`
    /// preflight issued by caches and link checkers.
    pub const PAGE_DEFAULTS: &'static [HttpMethod] = &[HttpMethod::Get, HttpMethod::Head];

    /// Uppercase wire form, as it appears in the template document.
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Head => "HEAD",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Options => "OPTIONS",
        }
    }

    /// Title-cased form used inside resource logical IDs (`Get`, `Head`).
    pub fn title_case(self) -> &'static str {
        match self {
            HttpMethod::Get => "Get",
            HttpMethod::Head => "Head",
            HttpMethod::Post => "Post",
            HttpMethod::Put => "Put",
            HttpMethod::Patch => "Patch",
            HttpMethod::Delete => "Delete",
            HttpMethod::Options => "Options",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(HttpMethod::Get),
            "HEAD" => Ok(HttpMethod::Head),
            "POST" => Ok(HttpMethod::Post),
            "PUT" => Ok(HttpMethod::Put),
            "PATCH" => Ok(HttpMethod::Patch),
            "DELETE" => Ok(HttpMethod::Delete),
            "OPTIONS" => Ok(HttpMethod::Options),
            _ => Err(RouteError::UnknownMethod(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("get".parse::<HttpMethod>().unwrap(), HttpMethod::Get);
        assert_eq!("HEAD".parse::<HttpMethod>().unwrap(), HttpMethod::Head);
        assert_eq!("Delete".parse::<HttpMethod>().unwrap(), HttpMethod::Delete);
    }

    #[test]
    fn rejects_unknown_method() {
        let err = "TRACE".parse::<HttpMethod>().unwrap_err();
        assert!(matches!(err, RouteError::UnknownMethod(m) if m == "TRACE"));
    }

    #[test]
    fn wire_form_is_uppercase() {
        assert_eq!(HttpMethod::Get.as_str(), "GET");
        assert_eq!(HttpMethod::Options.to_string(), "OPTIONS");
        let json = serde_json::to_string(&HttpMethod::Head).unwrap();
        assert_eq!(json, "\"HEAD\"");
    }

    #[test]
    fn title_case_matches_logical_id_convention() {
        assert_eq!(HttpMethod::Get.title_case(), "Get");
        assert_eq!(HttpMethod::Head.title_case(), "Head");
    }
}
