//! Implementation of the `licsync tasks` command.

use crate::cli::TasksArgs;
use crate::error::{LicsyncError, Result};
use crate::tasks::{TaskGraph, TaskName};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct TaskEntry {
    name: TaskName,
    description: &'static str,
    depends_on: Vec<TaskName>,
}

/// Execute the `licsync tasks` command.
pub fn cmd_tasks(args: TasksArgs) -> Result<()> {
    print!("{}", render_task_list(args.json)?);
    Ok(())
}

/// Render the task listing as text or JSON.
pub fn render_task_list(json: bool) -> Result<String> {
    let graph = TaskGraph::standard();
    let entries: Vec<TaskEntry> = TaskName::ALL
        .into_iter()
        .map(|task| TaskEntry {
            name: task,
            description: task.description(),
            depends_on: graph.dependencies(task).to_vec(),
        })
        .collect();

    if json {
        let mut out = serde_json::to_string_pretty(&entries).map_err(|e| {
            LicsyncError::IoError(format!("failed to serialize task list: {}", e))
        })?;
        out.push('\n');
        return Ok(out);
    }

    let width = entries
        .iter()
        .map(|entry| entry.name.name().len())
        .max()
        .unwrap_or(0);

    let mut out = String::from("Tasks\n-----\n");
    for entry in &entries {
        out.push_str(&format!(
            "{:width$} - {}",
            entry.name.name(),
            entry.description,
            width = width
        ));
        if !entry.depends_on.is_empty() {
            let deps: Vec<&str> = entry.depends_on.iter().map(|t| t.name()).collect();
            out.push_str(&format!(" (depends on: {})", deps.join(", ")));
        }
        out.push('\n');
    }

    Ok(out)
}
