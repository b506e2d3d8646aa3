mod common;
use crate::common::{init_tracing, plan, sales_entities};

use std::sync::Arc;
use std::thread;

#[test]
fn task_refs_navigate_back_to_their_job() {
    init_tracing();

    let job = plan(sales_entities());

    let contact = job.get(job.position_of("Contact").unwrap()).unwrap();
    assert_eq!(contact.position(), 2);
    assert_eq!(contact.name(), "Contact");
    assert!(std::ptr::eq(contact.job(), &job));
    assert!(contact.entity().has_parent("Account"));

    assert_eq!(contact.previous().unwrap().name(), "Account");
    assert_eq!(contact.next().unwrap().name(), "Opportunity");

    let first = job.get(0).unwrap();
    assert!(first.previous().is_none());
    let last = job.get(job.len() - 1).unwrap();
    assert!(last.next().is_none());
    assert!(job.get(job.len()).is_none());
}

#[test]
fn iteration_follows_execution_order() {
    init_tracing();

    let job = plan(sales_entities());

    let positions: Vec<usize> = job.iter().map(|t| t.position()).collect();
    assert_eq!(positions, vec![0, 1, 2, 3, 4]);

    let from_iter: Vec<&str> = job.iter().map(|t| t.name()).collect();
    assert_eq!(from_iter, job.task_names());
    assert_eq!(job.position_of("Nope"), None);
}

#[test]
fn built_job_can_be_shared_across_threads() {
    init_tracing();

    let job = Arc::new(plan(sales_entities()));
    let expected: Vec<String> = job.task_names().into_iter().map(str::to_string).collect();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let job = Arc::clone(&job);
            thread::spawn(move || {
                job.iter()
                    .map(|t| t.name().to_string())
                    .collect::<Vec<String>>()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
