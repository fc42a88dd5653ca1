//! Settings handed to the external license header tool.
//!
//! licsync does not insert or verify headers itself. It only decides which
//! file serves as the header text and which paths the header tool must skip:
//! JSON files always, then the configured excludes in order, then the build
//! output directory.

use super::model::Config;
use super::types::ALWAYS_EXCLUDED;
use crate::context::ProjectContext;
use crate::error::{LicsyncError, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Resolved header configuration for one project.
#[derive(Debug, Clone, Serialize)]
pub struct HeaderSettings {
    /// File whose text is used as the source file header.
    pub header: PathBuf,

    /// Exclude globs, relative to the project root, in application order.
    pub excludes: Vec<String>,

    #[serde(skip)]
    matcher: GlobSet,
}

impl HeaderSettings {
    /// Resolve header settings from the project config.
    pub fn resolve(config: &Config, ctx: &ProjectContext) -> Result<Self> {
        if config.license_file.trim().is_empty() {
            return Err(LicsyncError::ConfigurationError(
                "license_file must be set".to_string(),
            ));
        }

        let mut excludes = vec![ALWAYS_EXCLUDED.to_string()];
        excludes.extend(config.license.excludes.iter().cloned());

        let build_dir = config.build_dir.trim().trim_end_matches('/');
        if !build_dir.is_empty() {
            excludes.push(format!("{}/**", build_dir));
        }

        let matcher = compile_excludes(&excludes)?;

        Ok(Self {
            header: ctx.resolve_path(&config.license_file),
            excludes,
            matcher,
        })
    }

    /// Whether the header tool should skip `path` (relative to the project root).
    pub fn is_excluded<P: AsRef<Path>>(&self, path: P) -> bool {
        self.matcher.is_match(path.as_ref())
    }
}

/// Compile exclude globs, rejecting invalid patterns by name.
pub fn compile_excludes(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();

    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|e| {
            LicsyncError::ConfigurationError(format!(
                "invalid glob in license.excludes '{}': {}",
                pattern, e
            ))
        })?;
        builder.add(glob);
    }

    builder.build().map_err(|e| {
        LicsyncError::ConfigurationError(format!("failed to build exclude set: {}", e))
    })
}
