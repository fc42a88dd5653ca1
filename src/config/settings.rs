//! Per-task settings resolved from the project config.
//!
//! Each task resolves its own settings immediately before it runs, from a
//! freshly loaded [`Config`]. Fields a task cannot work without are checked
//! here so the task fails before touching the network or the filesystem.

use super::model::Config;
use crate::context::ProjectContext;
use crate::error::{LicsyncError, Result};
use std::path::PathBuf;
use std::time::Duration;

/// Inputs of the `licenseTemplateUpdate` task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSettings {
    /// URL of the canonical license document.
    pub source_url: String,
    /// Copyright holder; `None` leaves `[fullname]` in place.
    pub copyright_name: Option<String>,
    pub inception_year: Option<i32>,
    /// Output path of the template.
    pub template_file: PathBuf,
    /// Reflow width, set only when line wrapping is enabled.
    pub wrap_width: Option<usize>,
    pub fetch_timeout: Duration,
}

/// Inputs of the `licenseUpdate` task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceSettings {
    pub template_file: PathBuf,
    pub license_file: PathBuf,
}

impl Config {
    /// Resolve the settings of the template update task.
    pub fn template_settings(&self, ctx: &ProjectContext) -> Result<TemplateSettings> {
        let source_url = self
            .license
            .source_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .ok_or_else(|| {
                LicsyncError::ConfigurationError(
                    "license.source_url must be set to download the license template".to_string(),
                )
            })?;

        let copyright_name = Some(self.organization.name.trim())
            .filter(|name| !name.is_empty())
            .map(str::to_string);

        Ok(TemplateSettings {
            source_url: source_url.to_string(),
            copyright_name,
            inception_year: self.inception_year,
            template_file: required_path(ctx, &self.template_file, "template_file")?,
            wrap_width: self.wrap_lines.then_some(self.line_length),
            fetch_timeout: Duration::from_secs(self.fetch_timeout_secs),
        })
    }

    /// Resolve the settings of the license update task.
    pub fn instance_settings(&self, ctx: &ProjectContext) -> Result<InstanceSettings> {
        Ok(InstanceSettings {
            template_file: required_path(ctx, &self.template_file, "template_file")?,
            license_file: required_path(ctx, &self.license_file, "license_file")?,
        })
    }
}

fn required_path(ctx: &ProjectContext, value: &str, field: &str) -> Result<PathBuf> {
    let value = value.trim();
    if value.is_empty() {
        return Err(LicsyncError::ConfigurationError(format!(
            "{} must be set",
            field
        )));
    }
    Ok(ctx.resolve_path(value))
}
