//! Configuration system for lift with multi-source loading.
//!
//! Merges settings from CLI args, environment variables, and config files.
//! Priority: CLI > Environment > File > Defaults

mod defaults;
mod loading;
mod tests;
mod validation;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use lift_routes::HttpMethod;

use defaults::*;

/// lift configuration - loaded from lift.config.json or CLI args.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LiftConfig {
    /// Deployed service name; prefixes function names, names the REST API
    /// and the output archive
    #[serde(default = "default_service")]
    pub service: String,

    /// Directory containing the compiled page outputs
    #[serde(default = "default_pages_dir")]
    pub pages_dir: PathBuf,

    /// Archive-internal prefix the packaged handlers live under
    #[serde(default = "default_build_dir")]
    pub build_dir: String,

    /// Output directory for generated artifacts
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,

    /// Route manifest file (optional; pages are scanned when absent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub routes: Option<PathBuf>,

    /// Base infrastructure template to enrich (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<PathBuf>,

    /// Function runtime identifier
    #[serde(default = "default_runtime")]
    pub runtime: String,

    /// Function memory size in MB
    #[serde(default = "default_memory_size")]
    pub memory_size: u32,

    /// Function timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u32,

    /// HTTP methods bound to routes that don't declare their own
    #[serde(default = "default_methods")]
    pub default_methods: Vec<HttpMethod>,

    /// Working directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cwd: Option<PathBuf>,
}

impl Default for LiftConfig {
    fn default() -> Self {
        LiftConfig {
            service: default_service(),
            pages_dir: default_pages_dir(),
            build_dir: default_build_dir(),
            out_dir: default_out_dir(),
            routes: None,
            template: None,
            runtime: default_runtime(),
            memory_size: default_memory_size(),
            timeout: default_timeout(),
            default_methods: default_methods(),
            cwd: None,
        }
    }
}
