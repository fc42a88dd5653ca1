//! Command implementations for licsync.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod header;
mod list;
mod run;


use crate::cli::{Cli, Command};
use crate::context::ProjectContext;
use crate::error::Result;
use crate::tasks::TaskName;

/// Dispatch a command to its implementation.
///
/// Every command that touches the project resolves the same context from the
/// global options; `tasks` needs no project at all.
pub fn dispatch(cli: Cli) -> Result<()> {
    let resolve = || ProjectContext::resolve(cli.project_dir.as_deref(), cli.config.as_deref());

    match cli.command {
        Command::LicenseTemplateUpdate => {
            run::run_tasks(&resolve()?, &[TaskName::LicenseTemplateUpdate])
        }
        Command::LicenseUpdate => run::run_tasks(&resolve()?, &[TaskName::LicenseUpdate]),
        Command::Assemble => run::run_tasks(&resolve()?, &[TaskName::Assemble]),
        Command::Run(args) => run::cmd_run(&resolve()?, &args.tasks),
        Command::HeaderConfig(args) => header::cmd_header_config(&resolve()?, args),
        Command::Tasks(args) => list::cmd_tasks(args),
    }
}
