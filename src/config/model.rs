//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Project configuration for licsync.
///
/// This struct represents the contents of `licsync.yaml` in the project root.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Project metadata
    // =========================================================================
    /// Organization owning the copyright.
    #[serde(default)]
    pub organization: OrganizationConfig,

    /// First year of copyright. Unset means "current year only".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inception_year: Option<i32>,

    /// Canonical license source and header excludes.
    #[serde(default)]
    pub license: LicenseConfig,

    // =========================================================================
    // Output paths (relative paths resolve against the project root)
    // =========================================================================
    /// Where `licenseTemplateUpdate` writes the license template.
    #[serde(default = "default_template_file")]
    pub template_file: String,

    /// Where `licenseUpdate` writes the instanced license file.
    #[serde(default = "default_license_file")]
    pub license_file: String,

    /// Build output directory, excluded from header checks.
    #[serde(default = "default_build_dir")]
    pub build_dir: String,

    // =========================================================================
    // Formatting
    // =========================================================================
    /// Target line length for reflow.
    #[serde(default = "default_line_length")]
    pub line_length: usize,

    /// Reflow lines longer than `line_length` when generating the template.
    #[serde(default)]
    pub wrap_lines: bool,

    // =========================================================================
    // Fetch and build
    // =========================================================================
    /// Timeout for the license download, in seconds.
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,

    /// Command run by the `assemble` task after the license file is updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assemble_command: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            organization: OrganizationConfig::default(),
            inception_year: None,
            license: LicenseConfig::default(),
            template_file: default_template_file(),
            license_file: default_license_file(),
            build_dir: default_build_dir(),
            line_length: default_line_length(),
            wrap_lines: false,
            fetch_timeout_secs: default_fetch_timeout_secs(),
            assemble_command: None,
        }
    }
}
