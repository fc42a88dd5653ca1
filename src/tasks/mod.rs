//! Build tasks exposed by licsync.
//!
//! Three tasks make up the graph:
//!
//! - `licenseTemplateUpdate`: download the canonical license into the
//!   template file. Opt-in, since it touches the network.
//! - `licenseUpdate`: instance the template into the project license file.
//! - `assemble`: the project's default build step. It depends on
//!   `licenseUpdate`, so every build ships an up-to-date license file.
//!
//! Requested tasks run together with their dependencies, in dependency
//! order, each at most once, stopping at the first failure.

mod assemble;
mod graph;
mod runner;


pub use graph::TaskGraph;
pub use runner::{TaskReport, TaskRunner};

use crate::error::{LicsyncError, Result};
use serde::Serialize;
use std::fmt;

/// A task known to the task graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum TaskName {
    #[serde(rename = "licenseTemplateUpdate")]
    LicenseTemplateUpdate,
    #[serde(rename = "licenseUpdate")]
    LicenseUpdate,
    #[serde(rename = "assemble")]
    Assemble,
}

impl TaskName {
    /// All tasks, in listing order.
    pub const ALL: [TaskName; 3] = [
        TaskName::LicenseTemplateUpdate,
        TaskName::LicenseUpdate,
        TaskName::Assemble,
    ];

    /// The task's name as used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            TaskName::LicenseTemplateUpdate => "licenseTemplateUpdate",
            TaskName::LicenseUpdate => "licenseUpdate",
            TaskName::Assemble => "assemble",
        }
    }

    /// One-line description shown by `licsync tasks`.
    pub fn description(self) -> &'static str {
        match self {
            TaskName::LicenseTemplateUpdate => {
                "Download configured license into license template file"
            }
            TaskName::LicenseUpdate => "Update license file from template",
            TaskName::Assemble => "Assemble the project outputs",
        }
    }

    /// Parse a task name.
    ///
    /// Accepts the camelCase task name and the kebab-case subcommand
    /// spelling (`licenseUpdate` or `license-update`).
    pub fn parse(name: &str) -> Result<Self> {
        TaskName::ALL
            .into_iter()
            .find(|task| task.name() == name || kebab_case(task.name()) == name)
            .ok_or_else(|| {
                let known: Vec<&str> = TaskName::ALL.iter().map(|t| t.name()).collect();
                LicsyncError::ConfigurationError(format!(
                    "unknown task '{}' (known tasks: {})",
                    name,
                    known.join(", ")
                ))
            })
    }
}

impl fmt::Display for TaskName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
