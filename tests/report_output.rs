mod common;
use crate::common::{entity, init_tracing, plan, sales_entities};

use std::error::Error;

use migplan::plan::{JobBuilder, JobSettings, diagnose};
use migplan::report::PlanReport;
use serde_json::Value;

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn json_report_lists_tasks_in_order() -> TestResult {
    init_tracing();

    let job = plan(sales_entities());
    let json: Value = serde_json::from_str(&PlanReport::new(&job).to_json()?)?;

    assert_eq!(json["job"], "migration");
    let tasks = json["tasks"].as_array().expect("tasks array");
    assert_eq!(tasks.len(), 5);

    assert_eq!(tasks[0]["name"], "RecordType");
    assert_eq!(tasks[0]["readonly"], true);
    assert_eq!(tasks[0]["operation"], "readonly");

    assert_eq!(tasks[3]["position"], 3);
    assert_eq!(tasks[3]["name"], "Opportunity");
    assert_eq!(tasks[3]["parents"], serde_json::json!(["Account"]));
    assert_eq!(tasks[3]["strong_parents"], serde_json::json!([]));

    assert!(json.get("placements").is_none());
    assert!(json.get("diagnostics").is_none());
    Ok(())
}

#[test]
fn json_report_includes_placements_and_diagnostics() -> TestResult {
    init_tracing();

    let (job, placements) = JobBuilder::build_explained(
        JobSettings::default(),
        vec![entity("A", &["B"]), entity("B", &["A"])],
    );
    let diagnostics = diagnose(&job);
    let report = PlanReport::new(&job)
        .with_placements(&placements)
        .with_diagnostics(&diagnostics);
    let json: Value = serde_json::from_str(&report.to_json()?)?;

    let placements = json["placements"].as_array().expect("placements array");
    assert_eq!(placements[0]["reason"]["kind"], "first_task");
    assert_eq!(placements[1]["reason"]["kind"], "before_dependent");
    assert_eq!(placements[1]["reason"]["dependent"], "A");

    assert_eq!(json["diagnostics"]["cycles"], serde_json::json!([["A", "B"]]));
    assert_eq!(json["diagnostics"]["violations"][0]["child"], "B");
    Ok(())
}

#[test]
fn text_report_shows_order_and_relationships() {
    init_tracing();

    let (job, placements) =
        JobBuilder::build_explained(JobSettings::default(), sales_entities());
    let diagnostics = diagnose(&job);
    let text = PlanReport::new(&job)
        .with_placements(&placements)
        .with_diagnostics(&diagnostics)
        .to_text();

    assert!(text.starts_with("migplan job 'migration'"));
    assert!(text.contains("tasks (5):"));
    assert!(text.contains("  1. RecordType [readonly]"));
    assert!(text.contains("  4. Opportunity [upsert]"));
    assert!(text.contains("lookups: Account"));
    assert!(text.contains("Opportunity -> #3 (before dependent OpportunityLineItem)"));
    assert!(text.contains("check: every parent runs before its dependents"));
}
