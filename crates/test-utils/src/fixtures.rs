#![allow(dead_code)]

use migplan::plan::{EntityDescriptor, Job, JobSettings, build_job};

/// Writable entity with the given weak parents.
pub fn entity(name: &str, parents: &[&str]) -> EntityDescriptor {
    parents
        .iter()
        .fold(EntityDescriptor::writable(name), |e, p| e.with_parent(*p))
}

/// Read-only entity without parents.
pub fn readonly(name: &str) -> EntityDescriptor {
    EntityDescriptor::readonly(name)
}

/// Build a job with default settings.
pub fn plan(entities: Vec<EntityDescriptor>) -> Job {
    build_job(JobSettings::default(), entities)
}

/// Entity names of a job in execution order, owned for easy comparison.
pub fn names(job: &Job) -> Vec<String> {
    job.task_names().into_iter().map(str::to_string).collect()
}

/// A small sales-cloud style job in declaration order:
/// Account, Contact -> Account, RecordType (read-only),
/// OpportunityLineItem -> Opportunity, Opportunity -> Account.
pub fn sales_entities() -> Vec<EntityDescriptor> {
    vec![
        entity("Account", &[]),
        entity("Contact", &["Account"]),
        readonly("RecordType"),
        entity("OpportunityLineItem", &["Opportunity"]),
        entity("Opportunity", &["Account"]),
    ]
}
