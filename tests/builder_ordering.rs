mod common;
use crate::common::{entity, init_tracing, names, plan, readonly, sales_entities};

use migplan::plan::{
    EntityDescriptor, JobBuilder, JobSettings, PlacementReason, build_job,
};

#[test]
fn every_entity_is_planned_exactly_once() {
    init_tracing();

    let job = plan(sales_entities());

    assert_eq!(job.len(), 5);
    let mut planned = names(&job);
    planned.sort();
    assert_eq!(
        planned,
        vec!["Account", "Contact", "Opportunity", "OpportunityLineItem", "RecordType"]
    );
}

#[test]
fn empty_input_gives_empty_job() {
    init_tracing();

    let job = plan(vec![]);
    assert!(job.is_empty());
    assert_eq!(job.readonly_prefix_len(), 0);
}

#[test]
fn readonly_entities_form_reversed_prefix() {
    init_tracing();

    let job = plan(vec![
        readonly("R1"),
        entity("W1", &[]),
        readonly("R2"),
        entity("W2", &[]),
        readonly("R3"),
    ]);

    assert_eq!(names(&job), vec!["R3", "R2", "R1", "W1", "W2"]);
    assert_eq!(job.readonly_prefix_len(), 3);
}

#[test]
fn parent_declared_after_child_moves_ahead_of_it() {
    init_tracing();

    let job = plan(vec![entity("Contact", &["Account"]), entity("Account", &[])]);
    assert_eq!(names(&job), vec!["Account", "Contact"]);
}

#[test]
fn parent_declared_before_child_stays_ahead() {
    init_tracing();

    let job = plan(vec![entity("Account", &[]), entity("Contact", &["Account"])]);
    assert_eq!(names(&job), vec!["Account", "Contact"]);
}

#[test]
fn earliest_dependent_wins() {
    init_tracing();

    let job = plan(vec![
        entity("X", &["N"]),
        entity("Y", &[]),
        entity("Z", &["N"]),
        entity("N", &[]),
    ]);

    assert_eq!(names(&job), vec!["N", "X", "Y", "Z"]);
}

#[test]
fn strong_parent_is_not_jumped() {
    init_tracing();

    let b = EntityDescriptor::writable("B").with_parent("A");
    let a = EntityDescriptor::writable("A").with_strong_parent("B");

    let (job, placements) =
        JobBuilder::build_explained(JobSettings::default(), vec![b.clone(), a]);

    assert_eq!(names(&job), vec!["B", "A"]);
    assert_eq!(placements[1].reason, PlacementReason::Appended);
    assert_eq!(placements[1].skipped_strong, vec!["B".to_string()]);

    // Without the strong back-reference A is moved in front of B.
    let job = plan(vec![b, EntityDescriptor::writable("A")]);
    assert_eq!(names(&job), vec!["A", "B"]);
}

#[test]
fn readonly_dependents_are_never_reordered() {
    init_tracing();

    let lookup = EntityDescriptor::readonly("Lookup").with_parent("Account");
    let job = plan(vec![lookup, entity("Account", &[])]);

    assert_eq!(names(&job), vec!["Lookup", "Account"]);
}

#[test]
fn sales_job_order() {
    init_tracing();

    let (job, placements) =
        JobBuilder::build_explained(JobSettings::default(), sales_entities());

    assert_eq!(
        names(&job),
        vec![
            "RecordType",
            "Account",
            "Contact",
            "Opportunity",
            "OpportunityLineItem",
        ]
    );

    let reasons: Vec<_> = placements.iter().map(|p| p.reason.clone()).collect();
    assert_eq!(
        reasons,
        vec![
            PlacementReason::FirstTask,
            PlacementReason::Appended,
            PlacementReason::ReadonlyPrefix,
            PlacementReason::Appended,
            PlacementReason::BeforeDependent {
                dependent: "OpportunityLineItem".to_string()
            },
        ]
    );
    assert_eq!(placements[4].position, 3);
}

#[test]
fn rebuilding_gives_identical_order() {
    init_tracing();

    let first = build_job(JobSettings::default(), sales_entities());
    let second = build_job(JobSettings::default(), sales_entities());

    assert_eq!(first.tasks(), second.tasks());
    assert_eq!(first.task_names(), second.task_names());
}

#[test]
fn incremental_inserts_match_one_shot_build() {
    init_tracing();

    let mut builder = JobBuilder::new(JobSettings {
        name: "sales".to_string(),
    });
    for e in sales_entities() {
        builder.insert(e);
    }
    assert_eq!(builder.len(), 5);
    let job = builder.build();

    assert_eq!(job.name(), "sales");
    assert_eq!(names(&job), names(&plan(sales_entities())));
}

#[test]
fn transitive_chain_is_best_effort() {
    init_tracing();

    // D -> C -> P, declared D, P, C. When C arrives it is moved ahead of D,
    // which also puts it ahead of its own parent P.
    let job = plan(vec![
        entity("D", &["C"]),
        entity("P", &[]),
        entity("C", &["P"]),
    ]);

    assert_eq!(names(&job), vec!["C", "D", "P"]);
}
