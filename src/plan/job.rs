// src/plan/job.rs

use crate::plan::task::{MigrationTask, TaskRef};

/// Run-wide settings carried by a [`Job`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobSettings {
    /// Human-readable job name, used in reports and log fields.
    pub name: String,
}

impl Default for JobSettings {
    fn default() -> Self {
        Self {
            name: "migration".to_string(),
        }
    }
}

/// The ordered plan of migration tasks for one run.
///
/// A `Job` is only ever populated by [`crate::plan::JobBuilder`]; once
/// `build` returns there is no way to reorder or mutate it, so it can be
/// shared freely (e.g. behind an `Arc`) with whatever executes the tasks.
#[derive(Debug, Clone)]
pub struct Job {
    settings: JobSettings,
    tasks: Vec<MigrationTask>,
}

impl Job {
    pub(crate) fn new(settings: JobSettings, tasks: Vec<MigrationTask>) -> Self {
        Self { settings, tasks }
    }

    pub fn settings(&self) -> &JobSettings {
        &self.settings
    }

    pub fn name(&self) -> &str {
        &self.settings.name
    }

    /// Tasks in execution order.
    pub fn tasks(&self) -> &[MigrationTask] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Entity names in execution order.
    pub fn task_names(&self) -> Vec<&str> {
        self.tasks.iter().map(|t| t.name()).collect()
    }

    pub fn get(&self, position: usize) -> Option<TaskRef<'_>> {
        if position < self.tasks.len() {
            Some(TaskRef::new(self, position))
        } else {
            None
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = TaskRef<'_>> {
        (0..self.tasks.len()).map(move |pos| TaskRef::new(self, pos))
    }

    /// Position of the task for `name`, if the entity is part of this job.
    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.tasks.iter().position(|t| t.name() == name)
    }

    /// Number of read-only tasks at the front of the plan.
    pub fn readonly_prefix_len(&self) -> usize {
        self.tasks
            .iter()
            .take_while(|t| t.entity().is_readonly())
            .count()
    }
}
