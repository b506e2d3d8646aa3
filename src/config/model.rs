// src/config/model.rs

use serde::Deserialize;

use crate::plan::{EntityDescriptor, JobSettings};
use crate::types::{Operation, UnresolvedParentPolicy};

/// Top-level job spec as read from a TOML file.
///
/// ```toml
/// [config]
/// name = "sales"
/// unresolved_parents = "error"
///
/// [[object]]
/// name = "Account"
/// operation = "upsert"
///
/// [[object]]
/// name = "Contact"
/// lookups = ["Account"]
///
/// [[object]]
/// name = "RecordType"
/// operation = "readonly"
/// ```
///
/// `[[object]]` tables are kept in file order; that order is the declaration
/// order the planner works from.
#[derive(Debug, Clone, Deserialize)]
pub struct RawJobSpec {
    /// Global settings from `[config]`.
    #[serde(default)]
    pub config: ConfigSection,

    /// All `[[object]]` tables, in declaration order.
    #[serde(default, rename = "object")]
    pub objects: Vec<ObjectConfig>,
}

/// Validated job spec: objects resolved into entity descriptors.
///
/// Only obtainable through `TryFrom<RawJobSpec>` (see `validate.rs`) or the
/// loader functions.
#[derive(Debug, Clone)]
pub struct JobSpec {
    config: ConfigSection,
    entities: Vec<EntityDescriptor>,
}

impl JobSpec {
    pub(crate) fn new_unchecked(config: ConfigSection, entities: Vec<EntityDescriptor>) -> Self {
        Self { config, entities }
    }

    pub fn config(&self) -> &ConfigSection {
        &self.config
    }

    /// Resolved entities in declaration order, excluded objects removed.
    pub fn entities(&self) -> &[EntityDescriptor] {
        &self.entities
    }

    pub fn settings(&self) -> JobSettings {
        JobSettings {
            name: self.config.name.clone(),
        }
    }

    pub fn into_entities(self) -> Vec<EntityDescriptor> {
        self.entities
    }
}

/// `[config]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigSection {
    /// Job name shown in reports and logs.
    #[serde(default = "default_job_name")]
    pub name: String,

    /// `"error"` (default) or `"ignore"`.
    #[serde(default)]
    pub unresolved_parents: UnresolvedParentPolicy,
}

fn default_job_name() -> String {
    JobSettings::default().name
}

impl Default for ConfigSection {
    fn default() -> Self {
        Self {
            name: default_job_name(),
            unresolved_parents: UnresolvedParentPolicy::default(),
        }
    }
}

/// One `[[object]]` table.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ObjectConfig {
    /// Object (entity) name, unique within the job.
    pub name: String,

    /// What happens to the object's records; defaults to `upsert`.
    #[serde(default)]
    pub operation: Operation,

    /// Weak parents: objects this one looks up.
    #[serde(default)]
    pub lookups: Vec<String>,

    /// Strong parents: master objects in a master-detail relationship.
    /// These count as parents too.
    #[serde(default)]
    pub master_details: Vec<String>,

    /// Excluded objects stay in the file but are left out of the plan.
    #[serde(default)]
    pub excluded: bool,
}
