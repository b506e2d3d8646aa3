// src/config/validate.rs

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::config::model::{JobSpec, ObjectConfig, RawJobSpec};
use crate::errors::{PlanError, Result};
use crate::plan::EntityDescriptor;
use crate::types::UnresolvedParentPolicy;

impl TryFrom<RawJobSpec> for JobSpec {
    type Error = crate::errors::PlanError;

    fn try_from(raw: RawJobSpec) -> std::result::Result<Self, Self::Error> {
        validate_raw_spec(&raw)?;
        let entities = resolve_entities(&raw)?;
        Ok(JobSpec::new_unchecked(raw.config, entities))
    }
}

fn validate_raw_spec(spec: &RawJobSpec) -> Result<()> {
    validate_global_config(spec)?;
    ensure_has_objects(spec)?;
    validate_object_names(spec)?;
    Ok(())
}

fn validate_global_config(spec: &RawJobSpec) -> Result<()> {
    if spec.config.name.trim().is_empty() {
        return Err(PlanError::ConfigError(
            "[config].name must not be empty".to_string(),
        ));
    }
    Ok(())
}

fn ensure_has_objects(spec: &RawJobSpec) -> Result<()> {
    if !spec.objects.iter().any(|o| !o.excluded) {
        return Err(PlanError::ConfigError(
            "job spec must contain at least one [[object]] that is not excluded".to_string(),
        ));
    }
    Ok(())
}

fn validate_object_names(spec: &RawJobSpec) -> Result<()> {
    let mut seen = HashSet::new();
    for object in spec.objects.iter() {
        if object.name.trim().is_empty() {
            return Err(PlanError::ConfigError(
                "every [[object]] needs a non-empty `name`".to_string(),
            ));
        }
        if !seen.insert(object.name.as_str()) {
            return Err(PlanError::DuplicateEntity(object.name.clone()));
        }
    }
    Ok(())
}

/// Turn the non-excluded objects into entity descriptors, in declaration
/// order, keeping only parent references that point at planned objects.
fn resolve_entities(spec: &RawJobSpec) -> Result<Vec<EntityDescriptor>> {
    let declared: HashSet<&str> = spec.objects.iter().map(|o| o.name.as_str()).collect();
    let excluded: HashSet<&str> = spec
        .objects
        .iter()
        .filter(|o| o.excluded)
        .map(|o| o.name.as_str())
        .collect();

    let resolver = ParentResolver {
        declared: &declared,
        excluded: &excluded,
        policy: spec.config.unresolved_parents,
    };

    let mut entities = Vec::new();
    for object in spec.objects.iter().filter(|o| !o.excluded) {
        entities.push(resolver.resolve(object)?);
    }

    debug!(
        entities = entities.len(),
        excluded = excluded.len(),
        "resolved job spec objects"
    );
    Ok(entities)
}

struct ParentResolver<'a> {
    declared: &'a HashSet<&'a str>,
    excluded: &'a HashSet<&'a str>,
    policy: UnresolvedParentPolicy,
}

impl ParentResolver<'_> {
    fn resolve(&self, object: &ObjectConfig) -> Result<EntityDescriptor> {
        let mut entity = EntityDescriptor::new(object.name.clone(), object.operation);

        for parent in object.lookups.iter() {
            if self.keep_reference(object, parent)? {
                entity.add_parent(parent.clone());
            }
        }
        for parent in object.master_details.iter() {
            if self.keep_reference(object, parent)? {
                entity.add_strong_parent(parent.clone());
            }
        }

        Ok(entity)
    }

    fn keep_reference(&self, object: &ObjectConfig, parent: &str) -> Result<bool> {
        if parent == object.name {
            // An object cannot be scheduled before itself.
            debug!(object = %object.name, "ignoring self reference");
            return Ok(false);
        }
        if self.excluded.contains(parent) {
            warn!(
                object = %object.name,
                parent = %parent,
                "parent object is excluded; dropping reference"
            );
            return Ok(false);
        }
        if !self.declared.contains(parent) {
            return match self.policy {
                UnresolvedParentPolicy::Error => Err(PlanError::UnknownParent {
                    entity: object.name.clone(),
                    parent: parent.to_string(),
                }),
                UnresolvedParentPolicy::Ignore => {
                    warn!(
                        object = %object.name,
                        parent = %parent,
                        "parent object is not part of the job; dropping reference"
                    );
                    Ok(false)
                }
            };
        }
        Ok(true)
    }
}
