// src/plan/placement.rs

//! Step-by-step result types for the job builder.

use std::fmt;

use serde::Serialize;

use crate::plan::entity::EntityName;

/// Why the builder put an entity where it did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlacementReason {
    /// Read-only entity, pushed onto the front of the plan.
    ReadonlyPrefix,
    /// The plan was empty.
    FirstTask,
    /// No task already in the plan depends on this entity.
    Appended,
    /// Inserted directly ahead of the earliest task that lists this entity as
    /// a parent.
    BeforeDependent { dependent: EntityName },
}

/// Structured result of a single [`crate::plan::JobBuilder::insert`] call.
///
/// `position` is the index at insertion time; later insertions ahead of it
/// shift the entity towards the back of the plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Placement {
    pub entity: EntityName,
    pub position: usize,
    pub reason: PlacementReason,
    /// Tasks that depend on this entity but were not jumped because they are
    /// also strong parents of it.
    pub skipped_strong: Vec<EntityName>,
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> #{}", self.entity, self.position)?;
        match &self.reason {
            PlacementReason::ReadonlyPrefix => write!(f, " (read-only, front of plan)")?,
            PlacementReason::FirstTask => write!(f, " (first task)")?,
            PlacementReason::Appended => write!(f, " (appended)")?,
            PlacementReason::BeforeDependent { dependent } => {
                write!(f, " (before dependent {dependent})")?
            }
        }
        if !self.skipped_strong.is_empty() {
            write!(
                f,
                " [kept after strong parents: {}]",
                self.skipped_strong.join(", ")
            )?;
        }
        Ok(())
    }
}
