// src/plan/task.rs

//! Migration tasks and the borrowed view used to navigate back to their job.

use crate::plan::entity::EntityDescriptor;
use crate::plan::job::Job;

/// The scheduled unit of work for one entity.
///
/// A task does not know its own position; that is its index in
/// [`Job::tasks`]. Use [`TaskRef`] when the position or the owning job is
/// needed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationTask {
    entity: EntityDescriptor,
}

impl MigrationTask {
    pub fn new(entity: EntityDescriptor) -> Self {
        Self { entity }
    }

    pub fn entity(&self) -> &EntityDescriptor {
        &self.entity
    }

    pub fn name(&self) -> &str {
        self.entity.name()
    }
}

/// A task seen through the job that owns it.
#[derive(Debug, Clone, Copy)]
pub struct TaskRef<'a> {
    job: &'a Job,
    position: usize,
}

impl<'a> TaskRef<'a> {
    pub(crate) fn new(job: &'a Job, position: usize) -> Self {
        Self { job, position }
    }

    pub fn job(&self) -> &'a Job {
        self.job
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn task(&self) -> &'a MigrationTask {
        &self.job.tasks()[self.position]
    }

    pub fn entity(&self) -> &'a EntityDescriptor {
        self.task().entity()
    }

    pub fn name(&self) -> &'a str {
        self.entity().name()
    }

    /// The task executed immediately before this one, if any.
    pub fn previous(&self) -> Option<TaskRef<'a>> {
        self.position
            .checked_sub(1)
            .and_then(|pos| self.job.get(pos))
    }

    /// The task executed immediately after this one, if any.
    pub fn next(&self) -> Option<TaskRef<'a>> {
        self.job.get(self.position + 1)
    }
}
