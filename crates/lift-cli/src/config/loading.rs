use crate::cli::PackageArgs;
use crate::config::LiftConfig;
use crate::error::{ConfigError, Result};
use figment::{
    Figment,
    providers::{Env, Format as _, Json, Serialized},
};
use std::path::{Path, PathBuf};

/// Default config file name, looked up in the working directory.
const CONFIG_FILE: &str = "lift.config.json";

impl LiftConfig {
    /// Load configuration from multiple sources.
    /// Priority: CLI args > environment variables > config file > defaults
    ///
    /// `config_path` forces a specific config file (an error if missing);
    /// otherwise `lift.config.json` is used when present in the working
    /// directory. CLI overrides are applied afterwards via
    /// [`Self::apply_overrides`].
    pub fn load(config_path: Option<&Path>, cwd: Option<&Path>) -> Result<Self> {
        let base = cwd.unwrap_or_else(|| Path::new("."));

        let config_file = match config_path {
            Some(path) => {
                let resolved = resolve(path, base);
                if !resolved.exists() {
                    return Err(ConfigError::NotFound(resolved).into());
                }
                Some(resolved)
            }
            None => {
                let default_path = base.join(CONFIG_FILE);
                default_path.exists().then_some(default_path)
            }
        };

        let mut figment = Figment::new().merge(Serialized::defaults(LiftConfig::default()));
        if let Some(path) = config_file {
            figment = figment.merge(Json::file(path));
        }

        // Environment variables (LIFT_SERVICE, LIFT_RUNTIME, ...)
        figment = figment.merge(Env::prefixed("LIFT_"));

        let mut config: LiftConfig = figment
            .extract()
            .map_err(|e| ConfigError::Load(e.to_string()))?;
        if config.cwd.is_none() {
            config.cwd = cwd.map(Path::to_path_buf);
        }
        Ok(config)
    }

    /// Apply command-line overrides on top of the loaded configuration.
    pub fn apply_overrides(&mut self, args: &PackageArgs) {
        if let Some(service) = &args.service {
            self.service = service.clone();
        }
        if let Some(pages_dir) = &args.pages_dir {
            self.pages_dir = pages_dir.clone();
        }
        if let Some(build_dir) = &args.build_dir {
            self.build_dir = build_dir.clone();
        }
        if let Some(out_dir) = &args.out_dir {
            self.out_dir = out_dir.clone();
        }
        if let Some(routes) = &args.routes {
            self.routes = Some(routes.clone());
        }
        if let Some(template) = &args.template {
            self.template = Some(template.clone());
        }
        if let Some(runtime) = &args.runtime {
            self.runtime = runtime.clone();
        }
        if let Some(memory_size) = args.memory_size {
            self.memory_size = memory_size;
        }
        if let Some(timeout) = args.timeout {
            self.timeout = timeout;
        }
        if let Some(cwd) = &args.cwd {
            self.cwd = Some(cwd.clone());
        }
    }
}

fn resolve(path: &Path, base: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
