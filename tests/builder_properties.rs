use std::collections::HashMap;

use proptest::prelude::*;
use migplan::plan::{EntityDescriptor, JobSettings, build_job};

// Strategy producing a declaration-order entity list with arbitrary
// relationships between the entities (cycles included). Entity `i` is named
// `e{i}`; self references are skipped.
fn entities_strategy(max_entities: usize) -> impl Strategy<Value = Vec<EntityDescriptor>> {
    (1..=max_entities).prop_flat_map(|n| {
        let per_entity = (
            any::<bool>(),
            proptest::collection::vec((0..n, any::<bool>()), 0..4),
        );

        proptest::collection::vec(per_entity, n).prop_map(|specs| {
            specs
                .into_iter()
                .enumerate()
                .map(|(i, (is_readonly, parents))| {
                    let name = format!("e{i}");
                    let mut entity = if is_readonly {
                        EntityDescriptor::readonly(name)
                    } else {
                        EntityDescriptor::writable(name)
                    };
                    for (p, strong) in parents {
                        if p == i {
                            continue;
                        }
                        if strong {
                            entity.add_strong_parent(format!("e{p}"));
                        } else {
                            entity.add_parent(format!("e{p}"));
                        }
                    }
                    entity
                })
                .collect()
        })
    })
}

proptest! {
    #[test]
    fn no_entity_lost_or_duplicated(entities in entities_strategy(12)) {
        let job = build_job(JobSettings::default(), entities.clone());

        prop_assert_eq!(job.len(), entities.len());
        let mut planned: Vec<&str> = job.task_names();
        planned.sort();
        let mut declared: Vec<&str> = entities.iter().map(|e| e.name()).collect();
        declared.sort();
        prop_assert_eq!(planned, declared);
    }

    #[test]
    fn readonly_prefix_in_reverse_declaration_order(entities in entities_strategy(12)) {
        let job = build_job(JobSettings::default(), entities.clone());

        let prefix = job.readonly_prefix_len();
        prop_assert!(job.tasks()[prefix..].iter().all(|t| !t.entity().is_readonly()));

        let mut expected: Vec<&str> = entities
            .iter()
            .filter(|e| e.is_readonly())
            .map(|e| e.name())
            .collect();
        expected.reverse();
        prop_assert_eq!(job.task_names()[..prefix].to_vec(), expected);
    }

    #[test]
    fn build_is_deterministic(entities in entities_strategy(12)) {
        let first = build_job(JobSettings::default(), entities.clone());
        let second = build_job(JobSettings::default(), entities);
        prop_assert_eq!(first.task_names(), second.task_names());
    }

    #[test]
    fn late_parent_runs_before_earlier_child(entities in entities_strategy(12)) {
        let job = build_job(JobSettings::default(), entities.clone());
        let positions: HashMap<&str, usize> = job
            .tasks()
            .iter()
            .enumerate()
            .map(|(pos, t)| (t.name(), pos))
            .collect();

        for (i, child) in entities.iter().enumerate() {
            for parent in entities.iter().skip(i + 1) {
                let writable = !child.is_readonly() && !parent.is_readonly();
                if writable
                    && child.has_parent(parent.name())
                    && !parent.has_strong_parent(child.name())
                {
                    prop_assert!(
                        positions[parent.name()] < positions[child.name()],
                        "{} declared after its child {} but planned later",
                        parent.name(),
                        child.name()
                    );
                }
            }
        }
    }
}
