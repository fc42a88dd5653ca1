//! Generation of the license template from the canonical document.

use super::fetch::{LicenseSource, parse_source_url};
use super::normalize::{normalize, wrap_long_lines};
use super::substitute::{Variables, substitute_variables};
use super::year::year_expression;
use crate::config::TemplateSettings;
use crate::error::Result;
use crate::fs::atomic_write_file;
use log::info;
use std::path::PathBuf;

/// A generated license template: holder resolved, year left as `${year}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseTemplate {
    pub path: PathBuf,
    pub text: String,
}

/// Turn a downloaded license document into template text.
///
/// Strips the preamble, unindents, substitutes `[fullname]` and `[year]`
/// (the latter with a year expression, not a concrete year), and reflows
/// long lines when a wrap width is configured.
pub fn render_template(raw: &str, settings: &TemplateSettings, current_year: i32) -> String {
    let year = year_expression(settings.inception_year, current_year);
    let variables = Variables {
        fullname: settings.copyright_name.as_deref(),
        year: Some(&year),
    };

    let text = substitute_variables(&normalize(raw), &variables);

    match settings.wrap_width {
        Some(width) => wrap_long_lines(&text, width),
        None => text,
    }
}

/// Download the configured license and write it as the template file.
///
/// The template file is only written after the download and rendering
/// succeeded; it is always overwritten.
pub fn update_template(
    source: &dyn LicenseSource,
    settings: &TemplateSettings,
    current_year: i32,
) -> Result<LicenseTemplate> {
    let url = parse_source_url(&settings.source_url)?;

    info!("downloading license from {}", url);
    let raw = source.fetch(&url)?;
    let text = render_template(&raw, settings, current_year);

    atomic_write_file(&settings.template_file, &text)?;
    info!("wrote license template {}", settings.template_file.display());

    Ok(LicenseTemplate {
        path: settings.template_file.clone(),
        text,
    })
}
