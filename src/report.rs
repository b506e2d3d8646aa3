// src/report.rs

//! Rendering a built job for humans (text) or tools (JSON).

use std::fmt::Write as _;

use serde::Serialize;

use crate::errors::Result;
use crate::plan::{EntityDescriptor, Job, PlanDiagnostics, Placement};

/// Everything the CLI prints about one plan.
#[derive(Debug, Serialize)]
pub struct PlanReport<'a> {
    pub job: &'a str,
    pub tasks: Vec<TaskEntry<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placements: Option<&'a [Placement]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostics: Option<&'a PlanDiagnostics>,
}

#[derive(Debug, Serialize)]
pub struct TaskEntry<'a> {
    pub position: usize,
    pub readonly: bool,
    #[serde(flatten)]
    pub entity: &'a EntityDescriptor,
}

impl<'a> PlanReport<'a> {
    pub fn new(job: &'a Job) -> Self {
        let tasks = job
            .iter()
            .map(|task| TaskEntry {
                position: task.position(),
                readonly: task.entity().is_readonly(),
                entity: task.entity(),
            })
            .collect();

        Self {
            job: job.name(),
            tasks,
            placements: None,
            diagnostics: None,
        }
    }

    pub fn with_placements(mut self, placements: &'a [Placement]) -> Self {
        self.placements = Some(placements);
        self
    }

    pub fn with_diagnostics(mut self, diagnostics: &'a PlanDiagnostics) -> Self {
        self.diagnostics = Some(diagnostics);
        self
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_text(&self) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "migplan job '{}'", self.job);
        let _ = writeln!(out);
        let _ = writeln!(out, "tasks ({}):", self.tasks.len());
        for entry in &self.tasks {
            let entity = entry.entity;
            let _ = writeln!(
                out,
                "  {:>3}. {} [{}]",
                entry.position + 1,
                entity.name(),
                entity.operation()
            );
            let weak: Vec<&str> = entity
                .parents()
                .iter()
                .filter(|p| !entity.has_strong_parent(p))
                .map(String::as_str)
                .collect();
            if !weak.is_empty() {
                let _ = writeln!(out, "       lookups: {}", weak.join(", "));
            }
            if !entity.strong_parents().is_empty() {
                let strong: Vec<&str> = entity.strong_parents().iter().map(String::as_str).collect();
                let _ = writeln!(out, "       master_details: {}", strong.join(", "));
            }
        }

        if let Some(placements) = self.placements {
            let _ = writeln!(out);
            let _ = writeln!(out, "placements (declaration order):");
            for placement in placements {
                let _ = writeln!(out, "  - {placement}");
            }
        }

        if let Some(diagnostics) = self.diagnostics {
            let _ = writeln!(out);
            if diagnostics.is_clean() {
                let _ = writeln!(out, "check: every parent runs before its dependents");
            }
            for v in &diagnostics.violations {
                let _ = writeln!(
                    out,
                    "check: {} (#{}) runs before its {}parent {} (#{})",
                    v.child,
                    v.child_position + 1,
                    if v.strong { "master " } else { "" },
                    v.parent,
                    v.parent_position + 1
                );
            }
            for cycle in &diagnostics.cycles {
                let _ = writeln!(out, "check: dependency cycle: {}", cycle.join(" <-> "));
            }
        }

        out
    }
}
