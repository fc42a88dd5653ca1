//! Task execution.
//!
//! Each task loads the project config and resolves its settings right before
//! it runs; nothing resolved for one task is reused by the next.

use super::assemble::run_assemble_command;
use super::{TaskGraph, TaskName};
use crate::context::ProjectContext;
use crate::error::Result;
use crate::license::{LicenseSource, UrlSource, update_license, update_template};
use log::info;

/// What a finished task did, for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskReport {
    pub task: TaskName,
    pub summary: String,
}

/// Runs tasks of the standard graph against one project.
pub struct TaskRunner<'a> {
    ctx: &'a ProjectContext,
    graph: TaskGraph,
    current_year: i32,
    source: Option<Box<dyn LicenseSource + 'a>>,
}

impl<'a> TaskRunner<'a> {
    /// Create a runner that resolves `${year}` to `current_year`.
    pub fn new(ctx: &'a ProjectContext, current_year: i32) -> Self {
        Self {
            ctx,
            graph: TaskGraph::standard(),
            current_year,
            source: None,
        }
    }

    /// Read license text from `source` instead of fetching the configured URL.
    #[cfg(test)]
    pub fn with_source(mut self, source: impl LicenseSource + 'a) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Run `requested` and its dependencies, stopping at the first failure.
    ///
    /// Returns one report per task that ran, in execution order.
    pub fn run(&self, requested: &[TaskName]) -> Result<Vec<TaskReport>> {
        let order = self.graph.execution_order(requested)?;
        let mut reports = Vec::with_capacity(order.len());

        for task in order {
            info!("> Task :{}", task);
            let summary = self.execute(task)?;
            reports.push(TaskReport { task, summary });
        }

        Ok(reports)
    }

    fn execute(&self, task: TaskName) -> Result<String> {
        let config = self.ctx.load_config()?;

        match task {
            TaskName::LicenseTemplateUpdate => {
                let settings = config.template_settings(self.ctx)?;
                let template = match &self.source {
                    Some(source) => update_template(source.as_ref(), &settings, self.current_year)?,
                    None => {
                        let source = UrlSource::new(settings.fetch_timeout);
                        update_template(&source, &settings, self.current_year)?
                    }
                };
                Ok(format!(
                    "wrote license template {} ({} lines)",
                    template.path.display(),
                    template.text.lines().count()
                ))
            }
            TaskName::LicenseUpdate => {
                let settings = config.instance_settings(self.ctx)?;
                let license = update_license(&settings, self.current_year)?;
                Ok(format!(
                    "wrote {} ({} lines)",
                    license.path.display(),
                    license.text.lines().count()
                ))
            }
            TaskName::Assemble => match config
                .assemble_command
                .as_deref()
                .filter(|command| !command.trim().is_empty())
            {
                Some(command) => {
                    run_assemble_command(command, &self.ctx.project_root)?;
                    Ok(format!("ran '{}'", command))
                }
                None => Ok("no assemble_command configured".to_string()),
            },
        }
    }
}
