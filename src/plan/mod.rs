// src/plan/mod.rs

//! Migration job planning.
//!
//! - [`entity`] holds the per-object descriptors and their relationships.
//! - [`task`] and [`job`] are the ordered plan produced for one run.
//! - [`builder`] is the ordering pass that turns declaration order into
//!   execution order.
//! - [`placement`] describes individual builder steps.
//! - [`analysis`] reports ordering problems the builder leaves behind.

pub mod analysis;
pub mod builder;
pub mod entity;
pub mod job;
pub mod placement;
pub mod task;

pub use analysis::{OrderingViolation, PlanDiagnostics, diagnose};
pub use builder::{JobBuilder, build_job};
pub use entity::{EntityDescriptor, EntityName};
pub use job::{Job, JobSettings};
pub use placement::{Placement, PlacementReason};
pub use task::{MigrationTask, TaskRef};
