// src/plan/builder.rs

use tracing::{debug, trace};

use crate::plan::entity::{EntityDescriptor, EntityName};
use crate::plan::job::{Job, JobSettings};
use crate::plan::placement::{Placement, PlacementReason};
use crate::plan::task::MigrationTask;

/// Builds an ordered [`Job`] from entities given in declaration order.
///
/// Ordering rules, applied one entity at a time:
///
/// - read-only entities are pushed onto the front of the plan, so they form
///   a prefix in *reverse* declaration order;
/// - every other entity goes after that prefix, directly ahead of the
///   earliest task that lists it as a parent, unless that task is also one of
///   its strong parents; with no such task it is appended.
///
/// This is a greedy single pass. An entity is only compared against tasks
/// already in the plan, so transitive chains can still end up with a parent
/// after its child, and cycles are not detected. See
/// [`crate::plan::analysis`] for reporting those cases.
///
/// The reversed read-only prefix is kept as-is because existing plans depend
/// on it; it looks like an accident of always inserting at the front rather
/// than an intended ordering.
#[derive(Debug, Default)]
pub struct JobBuilder {
    settings: JobSettings,
    tasks: Vec<MigrationTask>,
    /// Number of read-only tasks at the front; writable tasks live at
    /// `readonly_count..`.
    readonly_count: usize,
}

impl JobBuilder {
    pub fn new(settings: JobSettings) -> Self {
        Self {
            settings,
            tasks: Vec::new(),
            readonly_count: 0,
        }
    }

    /// Build a job from `entities` in one pass.
    pub fn from_entities<I>(settings: JobSettings, entities: I) -> Job
    where
        I: IntoIterator<Item = EntityDescriptor>,
    {
        let mut builder = Self::new(settings);
        for entity in entities {
            builder.insert(entity);
        }
        builder.build()
    }

    /// Like [`JobBuilder::from_entities`], also returning every placement in
    /// the order the entities were processed.
    pub fn build_explained<I>(settings: JobSettings, entities: I) -> (Job, Vec<Placement>)
    where
        I: IntoIterator<Item = EntityDescriptor>,
    {
        let mut builder = Self::new(settings);
        let placements = entities
            .into_iter()
            .map(|entity| builder.insert(entity))
            .collect();
        (builder.build(), placements)
    }

    /// Number of tasks placed so far.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Place one entity and report where it went.
    pub fn insert(&mut self, entity: EntityDescriptor) -> Placement {
        let name = entity.name().to_string();

        let (position, reason, skipped_strong) = if entity.is_readonly() {
            self.readonly_count += 1;
            (0, PlacementReason::ReadonlyPrefix, Vec::new())
        } else if self.tasks.is_empty() {
            (0, PlacementReason::FirstTask, Vec::new())
        } else {
            let scan = scan_writable_region(&self.tasks, self.readonly_count, &entity);
            let reason = match scan.dependent {
                Some(dependent) => PlacementReason::BeforeDependent { dependent },
                None => PlacementReason::Appended,
            };
            (scan.position, reason, scan.skipped_strong)
        };

        for strong in &skipped_strong {
            trace!(
                entity = %name,
                strong_parent = %strong,
                "dependent is a strong parent; not moving ahead of it"
            );
        }

        self.tasks.insert(position, MigrationTask::new(entity));

        let placement = Placement {
            entity: name,
            position,
            reason,
            skipped_strong,
        };
        debug!(
            job = %self.settings.name,
            entity = %placement.entity,
            position = placement.position,
            reason = ?placement.reason,
            "placed entity"
        );
        placement
    }

    /// Finish the pass. The returned job is never modified again.
    pub fn build(self) -> Job {
        debug!(
            job = %self.settings.name,
            tasks = self.tasks.len(),
            readonly = self.readonly_count,
            "job built"
        );
        Job::new(self.settings, self.tasks)
    }
}

/// Build a job from `entities` (declaration order) in one pass.
pub fn build_job<I>(settings: JobSettings, entities: I) -> Job
where
    I: IntoIterator<Item = EntityDescriptor>,
{
    JobBuilder::from_entities(settings, entities)
}

struct WritableScan {
    position: usize,
    dependent: Option<EntityName>,
    skipped_strong: Vec<EntityName>,
}

/// Walk the writable region `start..tasks.len()` from the back and find the
/// smallest index whose task depends on `entity`, ignoring tasks that are
/// strong parents of `entity`. Defaults to appending.
fn scan_writable_region(
    tasks: &[MigrationTask],
    start: usize,
    entity: &EntityDescriptor,
) -> WritableScan {
    let mut scan = WritableScan {
        position: tasks.len(),
        dependent: None,
        skipped_strong: Vec::new(),
    };

    for index in (start..tasks.len()).rev() {
        let existing = tasks[index].entity();
        if !existing.has_parent(entity.name()) {
            continue;
        }
        if entity.has_strong_parent(existing.name()) {
            scan.skipped_strong.push(existing.name().to_string());
            continue;
        }
        scan.position = index;
        scan.dependent = Some(existing.name().to_string());
    }

    scan
}
