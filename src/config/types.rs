//! Configuration types and defaults for licsync.
//!
//! This module defines the nested config sections and the default value
//! functions used by the Config struct.

use serde::{Deserialize, Serialize};

/// Organization owning the project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrganizationConfig {
    /// Copyright holder name substituted for `[fullname]`.
    pub name: String,
}

/// Where the canonical license lives and which files the header tool skips.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LicenseConfig {
    /// URL of the canonical license document (http, https or file).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,

    /// Extra glob patterns excluded from license header checks, in order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub excludes: Vec<String>,
}

/// Glob that is always excluded from header checks, ahead of configured ones.
pub const ALWAYS_EXCLUDED: &str = "**/*.json";

// Default value functions for serde
pub(crate) fn default_template_file() -> String {
    "docs/templates/LICENSE.txt".to_string()
}
pub(crate) fn default_license_file() -> String {
    "LICENSE.txt".to_string()
}
pub(crate) fn default_line_length() -> usize {
    76
}
pub(crate) fn default_fetch_timeout_secs() -> u64 {
    30
}
pub(crate) fn default_build_dir() -> String {
    "target".to_string()
}
