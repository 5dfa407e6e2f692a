//! Configuration validation.
//!
//! Schema-level checks only - filesystem checks happen where the values are
//! used, so `check` and `package` report them against resolved paths.

use crate::config::LiftConfig;
use crate::error::{ConfigError, Result};

impl LiftConfig {
    /// Validate field values after all sources are merged.
    pub fn validate(&self) -> Result<()> {
        if self.service.is_empty()
            || !self
                .service
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-')
        {
            return Err(ConfigError::InvalidValue {
                field: "service".to_string(),
                value: self.service.clone(),
                hint: "Service names use letters, digits and '-' only".to_string(),
            }
            .into());
        }

        if self.build_dir.is_empty()
            || self.build_dir.starts_with('/')
            || self.build_dir.ends_with('/')
        {
            return Err(ConfigError::InvalidValue {
                field: "buildDir".to_string(),
                value: self.build_dir.clone(),
                hint: "The build prefix is a relative archive path without leading or trailing '/'"
                    .to_string(),
            }
            .into());
        }

        if !(128..=10240).contains(&self.memory_size) {
            return Err(ConfigError::InvalidValue {
                field: "memorySize".to_string(),
                value: self.memory_size.to_string(),
                hint: "Function memory must be between 128 and 10240 MB".to_string(),
            }
            .into());
        }

        if !(1..=900).contains(&self.timeout) {
            return Err(ConfigError::InvalidValue {
                field: "timeout".to_string(),
                value: self.timeout.to_string(),
                hint: "Function timeout must be between 1 and 900 seconds".to_string(),
            }
            .into());
        }

        if self.default_methods.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "defaultMethods".to_string(),
                value: "[]".to_string(),
                hint: "At least one HTTP method is required for routes without their own"
                    .to_string(),
            }
            .into());
        }

        Ok(())
    }
}
