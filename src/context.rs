//! Project context resolution for licsync.
//!
//! This module resolves the project root and the config file location once
//! per invocation. Everything else (config contents, template, license file)
//! is read fresh by each task through this context.

use crate::config::Config;
use crate::error::{LicsyncError, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Default config file name in the project root.
pub const DEFAULT_CONFIG_FILE: &str = "licsync.yaml";

/// Resolved paths for one project.
///
/// All paths are absolute.
#[derive(Debug, Clone)]
pub struct ProjectContext {
    /// Absolute path to the project root.
    pub project_root: PathBuf,

    /// Absolute path to the config file (default: `{project_root}/licsync.yaml`).
    pub config_path: PathBuf,
}

impl ProjectContext {
    /// Resolve the project context from CLI options.
    ///
    /// `project_dir` defaults to the current working directory; relative
    /// values are taken relative to it. `config_file`, when relative, is
    /// taken relative to the current working directory as well.
    pub fn resolve(project_dir: Option<&Path>, config_file: Option<&Path>) -> Result<Self> {
        let cwd = env::current_dir().map_err(|e| {
            LicsyncError::IoError(format!("failed to get current working directory: {}", e))
        })?;

        let project_root = match project_dir {
            Some(dir) => cwd.join(dir),
            None => cwd.clone(),
        };
        let config_file = config_file.map(|file| cwd.join(file));

        Self::resolve_from(project_root, config_file.as_deref())
    }

    /// Resolve the project context from a specific project root.
    ///
    /// This is useful for testing or when the project root is known.
    pub fn resolve_from<P: AsRef<Path>>(project_root: P, config_file: Option<&Path>) -> Result<Self> {
        let project_root = project_root.as_ref();

        if !project_root.is_dir() {
            return Err(LicsyncError::ConfigurationError(format!(
                "project directory '{}' does not exist or is not a directory",
                project_root.display()
            )));
        }

        let config_path = match config_file {
            Some(file) => project_root.join(file),
            None => project_root.join(DEFAULT_CONFIG_FILE),
        };

        Ok(Self {
            project_root: project_root.to_path_buf(),
            config_path,
        })
    }

    /// Resolve a configured path against the project root.
    ///
    /// Absolute paths are returned unchanged.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        self.project_root.join(path)
    }

    /// Load the project config, falling back to defaults if the file is absent.
    ///
    /// Called by every task right before it runs so edits between tasks are
    /// picked up.
    pub fn load_config(&self) -> Result<Config> {
        Config::load_or_default(&self.config_path)
    }
}
