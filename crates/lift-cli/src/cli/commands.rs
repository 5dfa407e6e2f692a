use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Available lift subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Package the application for serverless deployment
    ///
    /// Collects page routes, enriches the infrastructure template with one
    /// function resource per page plus its routing chain, and assembles the
    /// deployment archive.
    Package(PackageArgs),

    /// Validate configuration and route inputs
    ///
    /// Loads the configuration and collects routes exactly as `package`
    /// would, reporting problems without writing any artifacts.
    Check(CheckArgs),
}

/// Arguments for the package command
#[derive(Args, Debug, Default)]
pub struct PackageArgs {
    /// Path to lift.config.json
    ///
    /// Specify a custom configuration file location. If not provided,
    /// searches for lift.config.json in the working directory.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Deployed service name
    ///
    /// Prefixes generated function names and names the REST API. Also names
    /// the output archive (`<service>.zip`).
    #[arg(long, value_name = "NAME")]
    pub service: Option<String>,

    /// Directory containing the compiled page outputs
    ///
    /// This is the web framework's build output for pages; every `.js` file
    /// under it is packaged. Routes may instead be listed explicitly via
    /// --routes.
    #[arg(long, value_name = "DIR")]
    pub pages_dir: Option<PathBuf>,

    /// Archive-internal prefix the packaged handlers live under
    ///
    /// Function handlers reference modules below this prefix, e.g.
    /// `lift-build/blog/post.render`.
    #[arg(long, value_name = "PREFIX")]
    pub build_dir: Option<String>,

    /// Output directory for generated artifacts
    ///
    /// The enriched template (`template.json`) and the deployment archive
    /// (`<service>.zip`) are written here. Created if it doesn't exist.
    #[arg(short = 'd', long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Path to a route manifest file
    ///
    /// JSON array of `{ "path": "blog/post", "methods": ["GET"] }` entries.
    /// When omitted, `routes.json` is used if present, otherwise routes are
    /// derived by scanning the pages directory.
    #[arg(long, value_name = "FILE")]
    pub routes: Option<PathBuf>,

    /// Path to a base infrastructure template to enrich
    ///
    /// Existing resources are preserved; generated resources are appended.
    /// When omitted, an empty template skeleton is used.
    #[arg(long, value_name = "FILE")]
    pub template: Option<PathBuf>,

    /// Function runtime identifier
    #[arg(long, value_name = "RUNTIME")]
    pub runtime: Option<String>,

    /// Function memory size in MB
    #[arg(long, value_name = "MB")]
    pub memory_size: Option<u32>,

    /// Function timeout in seconds
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u32>,

    /// Working directory for the packaging run
    ///
    /// All relative paths are resolved relative to this directory. Defaults
    /// to the current working directory.
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<PathBuf>,
}

/// Arguments for the check command (configuration validation)
#[derive(Args, Debug, Default)]
pub struct CheckArgs {
    /// Path to lift.config.json
    ///
    /// Specify a custom configuration file location. If not provided,
    /// searches for lift.config.json in the working directory.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Working directory for the check
    ///
    /// All relative paths are resolved relative to this directory. Defaults
    /// to the current working directory.
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<PathBuf>,
}
