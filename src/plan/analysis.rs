// src/plan/analysis.rs

//! Read-only diagnostics over a built [`Job`].
//!
//! The builder is a greedy single pass, so a finished plan can still run a
//! child before one of its parents (transitive chains, diamonds) and it never
//! notices dependency cycles. Nothing here changes the order; it only reports.

use std::collections::HashMap;

use petgraph::algo::tarjan_scc;
use petgraph::graphmap::DiGraphMap;
use serde::Serialize;

use crate::plan::entity::EntityName;
use crate::plan::job::Job;

/// A parent that runs after one of its dependents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderingViolation {
    pub child: EntityName,
    pub child_position: usize,
    pub parent: EntityName,
    pub parent_position: usize,
    /// Whether the relationship is a strong (master-detail) one.
    pub strong: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PlanDiagnostics {
    pub violations: Vec<OrderingViolation>,
    /// Each entry is one strongly connected group of entities, names sorted.
    pub cycles: Vec<Vec<EntityName>>,
}

impl PlanDiagnostics {
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty() && self.cycles.is_empty()
    }
}

pub fn diagnose(job: &Job) -> PlanDiagnostics {
    PlanDiagnostics {
        violations: ordering_violations(job),
        cycles: dependency_cycles(job),
    }
}

/// Every (child, parent) pair where the parent is scheduled later than the
/// child, in child order. Parents outside the job are ignored.
pub fn ordering_violations(job: &Job) -> Vec<OrderingViolation> {
    let positions: HashMap<&str, usize> = job
        .tasks()
        .iter()
        .enumerate()
        .map(|(pos, task)| (task.name(), pos))
        .collect();

    let mut violations = Vec::new();
    for task in job.iter() {
        let entity = task.entity();
        for parent in entity.parents() {
            let Some(&parent_position) = positions.get(parent.as_str()) else {
                continue;
            };
            if parent_position > task.position() {
                violations.push(OrderingViolation {
                    child: entity.name().to_string(),
                    child_position: task.position(),
                    parent: parent.clone(),
                    parent_position,
                    strong: entity.has_strong_parent(parent),
                });
            }
        }
    }
    violations
}

/// Groups of entities that (transitively) depend on each other.
pub fn dependency_cycles(job: &Job) -> Vec<Vec<EntityName>> {
    // Edge direction: parent -> child.
    let mut graph: DiGraphMap<&str, ()> = DiGraphMap::new();
    for task in job.tasks() {
        graph.add_node(task.name());
    }
    for task in job.tasks() {
        for parent in task.entity().parents() {
            graph.add_edge(parent.as_str(), task.name(), ());
        }
    }

    let mut cycles: Vec<Vec<EntityName>> = tarjan_scc(&graph)
        .into_iter()
        .filter(|scc| scc.len() > 1 || graph.contains_edge(scc[0], scc[0]))
        .map(|scc| {
            let mut names: Vec<EntityName> = scc.into_iter().map(str::to_string).collect();
            names.sort();
            names
        })
        .collect();
    cycles.sort();
    cycles
}
