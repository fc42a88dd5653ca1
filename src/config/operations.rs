//! Config loading and validation.

use super::header::compile_excludes;
use super::model::Config;
use crate::error::{LicsyncError, Result};
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(LicsyncError::ConfigurationError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            LicsyncError::ConfigurationError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content).map_err(|e| {
            LicsyncError::ConfigurationError(format!("{}: {}", path.display(), e))
        })
    }

    /// Load config from a YAML file, falling back to defaults if it does not exist.
    ///
    /// A file that exists but cannot be parsed is still an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            log::info!(
                "config file '{}' not found, using defaults",
                path.display()
            );
            return Ok(Self::default());
        }

        Self::load(path)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes as unit, not as an empty mapping
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml).map_err(|e| {
            LicsyncError::ConfigurationError(format!("failed to parse config YAML: {}", e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `inception_year`, when set, must be positive
    /// - `line_length` must be positive
    /// - `fetch_timeout_secs` must be positive
    /// - `license.excludes` entries must be valid globs
    ///
    /// Required-when-used fields (`license.source_url`, output paths) are
    /// checked when a task resolves its settings, not here.
    pub fn validate(&self) -> Result<()> {
        if let Some(year) = self.inception_year
            && year <= 0
        {
            return Err(LicsyncError::ConfigurationError(format!(
                "config validation failed: inception_year must be a positive year (found {})",
                year
            )));
        }

        if self.line_length == 0 {
            return Err(LicsyncError::ConfigurationError(
                "config validation failed: line_length must be greater than 0".to_string(),
            ));
        }

        if self.fetch_timeout_secs == 0 {
            return Err(LicsyncError::ConfigurationError(
                "config validation failed: fetch_timeout_secs must be greater than 0".to_string(),
            ));
        }

        compile_excludes(&self.license.excludes)?;

        Ok(())
    }
}
