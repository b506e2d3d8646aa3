#![allow(dead_code)]

use migplan::config::{ConfigSection, JobSpec, ObjectConfig, RawJobSpec};
use migplan::types::{Operation, UnresolvedParentPolicy};

/// Builder for `RawJobSpec` / `JobSpec` to simplify test setup.
pub struct JobSpecBuilder {
    spec: RawJobSpec,
}

impl JobSpecBuilder {
    pub fn new() -> Self {
        Self {
            spec: RawJobSpec {
                config: ConfigSection::default(),
                objects: Vec::new(),
            },
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.spec.config.name = name.to_string();
        self
    }

    pub fn unresolved_parents(mut self, policy: UnresolvedParentPolicy) -> Self {
        self.spec.config.unresolved_parents = policy;
        self
    }

    pub fn with_object(mut self, object: ObjectConfig) -> Self {
        self.spec.objects.push(object);
        self
    }

    pub fn build_raw(self) -> RawJobSpec {
        self.spec
    }

    pub fn build(self) -> JobSpec {
        JobSpec::try_from(self.spec).expect("Failed to build valid job spec from builder")
    }
}

impl Default for JobSpecBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `ObjectConfig`.
pub struct ObjectConfigBuilder {
    object: ObjectConfig,
}

impl ObjectConfigBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            object: ObjectConfig {
                name: name.to_string(),
                operation: Operation::Upsert,
                lookups: vec![],
                master_details: vec![],
                excluded: false,
            },
        }
    }

    pub fn operation(mut self, operation: Operation) -> Self {
        self.object.operation = operation;
        self
    }

    pub fn readonly(self) -> Self {
        self.operation(Operation::Readonly)
    }

    pub fn lookup(mut self, parent: &str) -> Self {
        self.object.lookups.push(parent.to_string());
        self
    }

    pub fn master_detail(mut self, parent: &str) -> Self {
        self.object.master_details.push(parent.to_string());
        self
    }

    pub fn excluded(mut self) -> Self {
        self.object.excluded = true;
        self
    }

    pub fn build(self) -> ObjectConfig {
        self.object
    }
}
