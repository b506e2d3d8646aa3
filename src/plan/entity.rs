// src/plan/entity.rs

//! Entity descriptors: one per object taking part in a migration job.

use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};

use serde::Serialize;

use crate::types::Operation;

/// Canonical entity name type used throughout the planner.
pub type EntityName = String;

/// One object type in the job together with its resolved relationships.
///
/// `strong_parents` is always a subset of `parents`: the only way to add a
/// strong parent is [`EntityDescriptor::add_strong_parent`], which records it
/// in both sets.
///
/// Two descriptors are equal when their names are equal.
#[derive(Debug, Clone, Serialize)]
pub struct EntityDescriptor {
    name: EntityName,
    operation: Operation,
    parents: BTreeSet<EntityName>,
    strong_parents: BTreeSet<EntityName>,
}

impl EntityDescriptor {
    pub fn new(name: impl Into<EntityName>, operation: Operation) -> Self {
        Self {
            name: name.into(),
            operation,
            parents: BTreeSet::new(),
            strong_parents: BTreeSet::new(),
        }
    }

    /// Shorthand for a writable (`upsert`) entity.
    pub fn writable(name: impl Into<EntityName>) -> Self {
        Self::new(name, Operation::Upsert)
    }

    /// Shorthand for a read-only entity.
    pub fn readonly(name: impl Into<EntityName>) -> Self {
        Self::new(name, Operation::Readonly)
    }

    pub fn with_parent(mut self, parent: impl Into<EntityName>) -> Self {
        self.add_parent(parent);
        self
    }

    pub fn with_strong_parent(mut self, parent: impl Into<EntityName>) -> Self {
        self.add_strong_parent(parent);
        self
    }

    pub fn add_parent(&mut self, parent: impl Into<EntityName>) {
        self.parents.insert(parent.into());
    }

    pub fn add_strong_parent(&mut self, parent: impl Into<EntityName>) {
        let parent = parent.into();
        self.parents.insert(parent.clone());
        self.strong_parents.insert(parent);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn is_readonly(&self) -> bool {
        self.operation.is_readonly()
    }

    pub fn parents(&self) -> &BTreeSet<EntityName> {
        &self.parents
    }

    pub fn strong_parents(&self) -> &BTreeSet<EntityName> {
        &self.strong_parents
    }

    /// Is `name` a declared parent (weak or strong) of this entity?
    pub fn has_parent(&self, name: &str) -> bool {
        self.parents.contains(name)
    }

    /// Is `name` a strong (master-detail) parent of this entity?
    pub fn has_strong_parent(&self, name: &str) -> bool {
        self.strong_parents.contains(name)
    }
}

impl PartialEq for EntityDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for EntityDescriptor {}

impl Hash for EntityDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}
