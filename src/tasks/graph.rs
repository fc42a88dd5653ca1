//! Task dependency graph and execution order.

use super::TaskName;
use crate::error::{LicsyncError, Result};
use std::collections::{BTreeMap, BTreeSet};

/// Dependencies between tasks.
#[derive(Debug, Clone)]
pub struct TaskGraph {
    dependencies: BTreeMap<TaskName, Vec<TaskName>>,
}

impl TaskGraph {
    /// The graph licsync ships with: `assemble` depends on `licenseUpdate`.
    ///
    /// `licenseTemplateUpdate` has no dependents; it only runs when asked for.
    pub fn standard() -> Self {
        let mut dependencies = BTreeMap::new();
        dependencies.insert(TaskName::Assemble, vec![TaskName::LicenseUpdate]);
        Self { dependencies }
    }

    /// Declare that `task` depends on `dependency`.
    #[cfg(test)]
    pub fn with_dependency(mut self, task: TaskName, dependency: TaskName) -> Self {
        self.dependencies.entry(task).or_default().push(dependency);
        self
    }

    /// Direct dependencies of `task`.
    pub fn dependencies(&self, task: TaskName) -> &[TaskName] {
        self.dependencies
            .get(&task)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Order in which to run `requested` and everything it depends on.
    ///
    /// Dependencies come before dependents; requested tasks otherwise keep
    /// their order; every task appears once.
    pub fn execution_order(&self, requested: &[TaskName]) -> Result<Vec<TaskName>> {
        let mut order = Vec::new();
        let mut done = BTreeSet::new();
        let mut path = Vec::new();

        for &task in requested {
            self.visit(task, &mut done, &mut path, &mut order)?;
        }

        Ok(order)
    }

    fn visit(
        &self,
        task: TaskName,
        done: &mut BTreeSet<TaskName>,
        path: &mut Vec<TaskName>,
        order: &mut Vec<TaskName>,
    ) -> Result<()> {
        if done.contains(&task) {
            return Ok(());
        }

        if let Some(start) = path.iter().position(|&t| t == task) {
            let cycle: Vec<&str> = path[start..]
                .iter()
                .chain(std::iter::once(&task))
                .map(|t| t.name())
                .collect();
            return Err(LicsyncError::ConfigurationError(format!(
                "task dependency cycle: {}",
                cycle.join(" -> ")
            )));
        }

        path.push(task);
        for &dependency in self.dependencies(task) {
            self.visit(dependency, done, path, order)?;
        }
        path.pop();

        done.insert(task);
        order.push(task);
        Ok(())
    }
}
