//! Instancing of the license template into the project license file.

use super::year::YEAR_VARIABLE;
use crate::config::InstanceSettings;
use crate::error::{LicsyncError, Result};
use crate::fs::atomic_write_file;
use log::info;
use std::io::ErrorKind;
use std::path::PathBuf;

/// The resolved project license file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseFile {
    pub path: PathBuf,
    pub text: String,
}

/// Replace every `${year}` in the template text with `year`.
pub fn instance_text(template: &str, year: i32) -> String {
    template.replace(YEAR_VARIABLE, &year.to_string())
}

/// Read the template, resolve its year, and write the license file.
///
/// No network access. The license file is always overwritten.
pub fn update_license(settings: &InstanceSettings, current_year: i32) -> Result<LicenseFile> {
    let template = std::fs::read_to_string(&settings.template_file).map_err(|e| {
        let hint = if e.kind() == ErrorKind::NotFound {
            " (run `licsync license-template-update` to create it)"
        } else {
            ""
        };
        LicsyncError::IoError(format!(
            "failed to read license template '{}': {}{}",
            settings.template_file.display(),
            e,
            hint
        ))
    })?;

    let text = instance_text(&template, current_year);

    atomic_write_file(&settings.license_file, &text)?;
    info!(
        "wrote {} from {}",
        settings.license_file.display(),
        settings.template_file.display()
    );

    Ok(LicenseFile {
        path: settings.license_file.clone(),
        text,
    })
}
