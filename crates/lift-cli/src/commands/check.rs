//! Check command implementation.
//!
//! `lift check` runs the same configuration and route collection path as
//! `package` and reports what it finds, without writing artifacts.

use lift_template::Template;

use crate::cli::CheckArgs;
use crate::commands::utils;
use crate::config::LiftConfig;
use crate::error::Result;
use crate::ui;

/// Execute the check command.
pub fn execute(args: CheckArgs) -> Result<()> {
    let config = LiftConfig::load(args.config.as_deref(), args.cwd.as_deref())?;
    config.validate()?;
    ui::success(&format!("Configuration valid (service '{}')", config.service));

    let cwd = utils::resolve_cwd(&config)?;

    let routes = utils::collect_routes(&config, &cwd)?;
    if routes.is_empty() {
        ui::warning("No page routes found; `lift package` would have nothing to do");
        return Ok(());
    }
    for route in &routes {
        let methods: Vec<&str> = route.methods.iter().map(|m| m.as_str()).collect();
        ui::info(&format!("{}  [{}]", route.path, methods.join(", ")));
    }
    ui::success(&format!("{} page route(s) collected", routes.len()));

    // A base template that doesn't parse would fail packaging; surface it now.
    if let Some(path) = &config.template {
        Template::from_file(&utils::resolve_path(path, &cwd))?;
        ui::success("Base template parsed");
    }

    Ok(())
}
