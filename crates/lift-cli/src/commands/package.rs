//! Package command implementation.
//!
//! This module implements `lift package`, the single packaging invocation:
//! route collection, template augmentation, and archive assembly.

use std::fs;
use std::time::Instant;

use tracing::info;

use lift_package::Packager;
use lift_template::{AugmentOptions, Template, augment};

use crate::cli::PackageArgs;
use crate::commands::utils;
use crate::config::LiftConfig;
use crate::error::{CliError, Result};
use crate::ui;

/// File name of the enriched template inside the output directory.
const TEMPLATE_FILE: &str = "template.json";

/// Execute the package command.
///
/// # Packaging Process
///
/// 1. Load and validate configuration (CLI > Env > File > Defaults)
/// 2. Collect page routes (manifest or pages scan)
/// 3. Augment the infrastructure template
/// 4. Write the template document
/// 5. Write the deployment archive
///
/// # Errors
///
/// Returns errors for invalid configuration, malformed route input,
/// template merge conflicts, and file system failures.
pub fn execute(args: PackageArgs) -> Result<()> {
    let start_time = Instant::now();

    ui::info("Loading configuration...");
    let mut config = LiftConfig::load(args.config.as_deref(), args.cwd.as_deref())?;
    config.apply_overrides(&args);
    config.validate()?;

    let cwd = utils::resolve_cwd(&config)?;

    let routes = utils::collect_routes(&config, &cwd)?;
    if routes.is_empty() {
        return Err(CliError::InvalidArgument(
            "no page routes found; nothing to package".to_string(),
        ));
    }
    ui::info(&format!(
        "Packaging {} page route{}",
        routes.len(),
        if routes.len() == 1 { "" } else { "s" }
    ));

    let mut template = match &config.template {
        Some(path) => Template::from_file(&utils::resolve_path(path, &cwd))?,
        None => Template::new(),
    };
    let options = AugmentOptions {
        service: config.service.clone(),
        build_dir: config.build_dir.clone(),
        runtime: config.runtime.clone(),
        memory_size: config.memory_size,
        timeout: config.timeout,
    };
    augment(&mut template, &routes, &options)?;
    info!(routes = routes.len(), "template augmented");

    let out_dir = utils::resolve_path(&config.out_dir, &cwd);
    fs::create_dir_all(&out_dir)?;

    let template_path = out_dir.join(TEMPLATE_FILE);
    fs::write(&template_path, template.to_json_pretty()?)?;
    ui::info(&format!("Wrote template: {}", template_path.display()));

    let archive_path = out_dir.join(format!("{}.zip", config.service));
    let packager = Packager::new(
        utils::resolve_path(&config.pages_dir, &cwd),
        config.build_dir.clone(),
    );
    packager.write_archive(&routes, &archive_path)?;
    let archive_size = fs::metadata(&archive_path)?.len();
    ui::info(&format!(
        "Wrote archive: {} ({})",
        archive_path.display(),
        ui::format_size(archive_size)
    ));

    ui::success(&format!(
        "Packaged in {}",
        ui::format_duration(start_time.elapsed())
    ));

    Ok(())
}
