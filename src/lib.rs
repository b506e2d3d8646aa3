// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod logging;
pub mod plan;
pub mod report;
pub mod types;

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::cli::{CliArgs, OutputFormat};
use crate::config::load_and_validate_async;
use crate::plan::{JobBuilder, PlanDiagnostics, diagnose};
use crate::report::PlanReport;

/// Exit status used when `--check` finds parents scheduled after children.
pub const EXIT_ORDERING_VIOLATIONS: i32 = 2;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - job spec loading and resolution
/// - the ordering pass
/// - optional diagnostics
/// - plan output on stdout
///
/// Returns the process exit status.
pub async fn run(args: CliArgs) -> Result<i32> {
    let config_path = PathBuf::from(&args.config);
    let spec = load_and_validate_async(&config_path)
        .await
        .with_context(|| format!("loading job spec from {:?}", config_path))?;

    let settings = spec.settings();
    info!(
        job = %settings.name,
        objects = spec.entities().len(),
        "building migration job"
    );

    let (job, placements) = JobBuilder::build_explained(settings, spec.into_entities());

    let diagnostics = if args.check {
        let diagnostics = diagnose(&job);
        log_diagnostics(&diagnostics);
        Some(diagnostics)
    } else {
        None
    };

    let mut report = PlanReport::new(&job);
    if args.explain {
        report = report.with_placements(&placements);
    }
    if let Some(ref diagnostics) = diagnostics {
        report = report.with_diagnostics(diagnostics);
    }

    match args.format {
        OutputFormat::Text => print!("{}", report.to_text()),
        OutputFormat::Json => println!("{}", report.to_json()?),
    }

    debug!(tasks = job.len(), "plan printed");

    let has_violations = diagnostics
        .as_ref()
        .is_some_and(|d| !d.violations.is_empty());
    Ok(if has_violations {
        EXIT_ORDERING_VIOLATIONS
    } else {
        0
    })
}

fn log_diagnostics(diagnostics: &PlanDiagnostics) {
    for v in &diagnostics.violations {
        warn!(
            child = %v.child,
            parent = %v.parent,
            strong = v.strong,
            "parent is scheduled after its dependent"
        );
    }
    for cycle in &diagnostics.cycles {
        warn!(?cycle, "dependency cycle between objects");
    }
    if diagnostics.is_clean() {
        info!("plan check passed");
    }
}
