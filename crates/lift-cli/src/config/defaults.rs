//! Default values for configuration fields.

use std::path::PathBuf;

use lift_routes::HttpMethod;

pub fn default_service() -> String {
    "app".to_string()
}

pub fn default_pages_dir() -> PathBuf {
    PathBuf::from("build/pages")
}

pub fn default_build_dir() -> String {
    "lift-build".to_string()
}

pub fn default_out_dir() -> PathBuf {
    PathBuf::from(".lift")
}

pub fn default_runtime() -> String {
    "nodejs18.x".to_string()
}

pub fn default_memory_size() -> u32 {
    1024
}

pub fn default_timeout() -> u32 {
    6
}

pub fn default_methods() -> Vec<HttpMethod> {
    HttpMethod::PAGE_DEFAULTS.to_vec()
}
