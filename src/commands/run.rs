//! Implementation of the task commands (`run`, `license-template-update`,
//! `license-update`, `assemble`).

use crate::context::ProjectContext;
use crate::error::Result;
use crate::license::current_year;
use crate::tasks::{TaskName, TaskRunner};

/// Execute the `licsync run` command.
///
/// Task names are validated before anything runs, so a typo in the last
/// name does not leave the earlier tasks half applied.
pub fn cmd_run(ctx: &ProjectContext, names: &[String]) -> Result<()> {
    let tasks = names
        .iter()
        .map(|name| TaskName::parse(name))
        .collect::<Result<Vec<_>>>()?;

    run_tasks(ctx, &tasks)
}

/// Run tasks with their dependencies and print what each one did.
pub fn run_tasks(ctx: &ProjectContext, tasks: &[TaskName]) -> Result<()> {
    let reports = TaskRunner::new(ctx, current_year()).run(tasks)?;

    for report in &reports {
        println!("{}: {}", report.task, report.summary);
    }

    Ok(())
}
