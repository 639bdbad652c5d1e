//! Tests for the planner module.

use std::sync::Arc;

use jiff::civil::date;

use super::*;
use crate::{advisor::mock::ScriptedGenerator, error::PlannerError, models::ProjectType};

fn plain_planner() -> Planner {
    PlannerBuilder::new()
        .build()
        .expect("Failed to create planner")
}

#[tokio::test]
async fn test_product_launch_six_weeks() {
    let planner = plain_planner();
    let plan = planner
        .generate_plan_from("Launch a product in 6 weeks", date(2024, 3, 1))
        .await
        .expect("Failed to generate plan");

    assert_eq!(plan.project_type, ProjectType::ProductLaunch);
    assert_eq!(plan.total_duration, 42);
    assert_eq!(plan.start_date, date(2024, 3, 1));
    assert_eq!(plan.end_date, date(2024, 4, 11));

    let durations: Vec<u32> = plan.phases.iter().map(|p| p.duration).collect();
    assert_eq!(durations, vec![5, 6, 12, 8, 6, 5]);
    assert_eq!(
        plan.milestones,
        vec![
            "Planning Complete (2024-03-05)",
            "Testing Complete (2024-03-31)",
            "Deployment Complete (2024-04-11)",
        ]
    );
    assert!(plan.advisory.is_empty());
    assert!(!plan.ai_enhanced);
    assert!(plan.remarks.starts_with("Optimized Product Launch plan with 6 phases across 42 days."));
}

#[tokio::test]
async fn test_app_without_duration_defaults_to_two_weeks() {
    let planner = plain_planner();
    let plan = planner
        .generate_plan_from("Build an app", date(2024, 1, 1))
        .await
        .expect("Failed to generate plan");

    assert_eq!(plan.project_type, ProjectType::AppDevelopment);
    assert_eq!(plan.total_duration, 14);
    assert_eq!(plan.end_date, date(2024, 1, 14));
    assert_eq!(plan.phases[1].name, "UI/UX Design");
}

#[tokio::test]
async fn test_empty_goal_is_input_error() {
    let planner = plain_planner();
    for goal in ["", "   "] {
        let err = planner
            .generate_plan_from(goal, date(2024, 1, 1))
            .await
            .expect_err("empty goal should fail");
        assert!(err.is_input_error());
        assert_eq!(err.to_string(), "Goal is required");
    }
}

#[tokio::test]
async fn test_phases_chain_without_gaps() {
    let planner = plain_planner();
    let plan = planner
        .generate_plan_from("Organize a conference in 2 months", date(2024, 9, 1))
        .await
        .expect("Failed to generate plan");

    let mut expected_start = plan.start_date;
    for phase in &plan.phases {
        assert_eq!(phase.start_date, expected_start, "phase {}", phase.name);
        let span: u32 = phase.tasks.iter().map(|t| t.duration).sum();
        assert_eq!(span, phase.duration);
        expected_start = phase.completion_date().tomorrow().unwrap();
    }
    assert_eq!(expected_start, plan.end_date.tomorrow().unwrap());
}

#[tokio::test]
async fn test_one_day_goal_keeps_exact_sum() {
    let planner = plain_planner();
    let plan = planner
        .generate_plan_from("Ship the release in 1 day", date(2024, 1, 1))
        .await
        .expect("Failed to generate plan");

    assert_eq!(plan.total_duration, 1);
    assert_eq!(plan.start_date, plan.end_date);
    assert_eq!(plan.phases.len(), 6);
    assert_eq!(plan.phases[0].tasks.len(), 1);
    assert!(plan.phases[1..].iter().all(|p| p.tasks.is_empty()));
    // Empty phases report their start date, which is the day after the plan.
    assert_eq!(plan.milestones[2], "Deployment Complete (2024-01-02)");
}

#[tokio::test]
async fn test_advisory_text_is_attached() {
    let generator = Arc::new(ScriptedGenerator::replying("  Lock scope early.  "));
    let planner = PlannerBuilder::new()
        .with_advisor(generator.clone())
        .build()
        .expect("Failed to create planner");

    let plan = planner
        .generate_plan_from("Plan a meetup in 3 weeks", date(2024, 1, 1))
        .await
        .expect("Failed to generate plan");

    assert_eq!(generator.call_count(), 1);
    assert!(plan.ai_enhanced);
    assert_eq!(plan.advisory, "Lock scope early.");
    assert!(plan.remarks.ends_with("allocation. Lock scope early."));
}

#[tokio::test]
async fn test_advisory_failure_does_not_fail_generation() {
    let planner = PlannerBuilder::new()
        .with_advisor(Arc::new(ScriptedGenerator::failing()))
        .build()
        .expect("Failed to create planner");

    let plan = planner
        .generate_plan_from("Plan a meetup in 3 weeks", date(2024, 1, 1))
        .await
        .expect("Failed to generate plan");

    assert!(plan.ai_enhanced);
    assert!(plan.advisory.is_empty());
    assert!(plan.remarks.ends_with("realistic task allocation."));
}

#[tokio::test]
async fn test_advisory_does_not_change_structure() {
    let start = date(2024, 4, 1);
    let goal = "Release the product in 30 days";
    let plain = plain_planner()
        .generate_plan_from(goal, start)
        .await
        .expect("Failed to generate plan");
    let annotated = PlannerBuilder::new()
        .with_advisor(Arc::new(ScriptedGenerator::replying("Watch the budget.")))
        .build()
        .expect("Failed to create planner")
        .generate_plan_from(goal, start)
        .await
        .expect("Failed to generate plan");

    assert_eq!(plain.phases, annotated.phases);
    assert_eq!(plain.milestones, annotated.milestones);
    assert_eq!(plain.end_date, annotated.end_date);
}

#[tokio::test]
async fn test_calendar_overflow_is_internal_error() {
    let err = plain_planner()
        .generate_plan_from("Launch in 3 weeks", date(9999, 12, 20))
        .await
        .expect_err("should overflow the calendar");
    assert!(matches!(err, PlannerError::DateOutOfRange { .. }));
    assert!(!err.is_input_error());
}

#[tokio::test]
async fn test_suggest_without_advisor_returns_hint() {
    let suggestion = plain_planner().suggest_goal("Build a website").await;
    assert_eq!(suggestion, "AI suggestions require Google API setup");
}

#[tokio::test]
async fn test_suggest_short_input_skips_service() {
    let generator = Arc::new(ScriptedGenerator::replying("anything"));
    let planner = PlannerBuilder::new()
        .with_advisor(generator.clone())
        .build()
        .expect("Failed to create planner");

    assert_eq!(planner.suggest_goal("app").await, "");
    assert_eq!(generator.call_count(), 0);
}

#[tokio::test]
async fn test_suggest_cleans_reply() {
    let planner = PlannerBuilder::new()
        .with_advisor(Arc::new(ScriptedGenerator::replying(
            "\"Build a mobile app in 3 weeks\"",
        )))
        .build()
        .expect("Failed to create planner");

    assert_eq!(
        planner.suggest_goal("build a mobile").await,
        "Build a mobile app in 3 weeks"
    );
}

#[tokio::test]
async fn test_suggest_failure_is_empty() {
    let planner = PlannerBuilder::new()
        .with_advisor(Arc::new(ScriptedGenerator::failing()))
        .build()
        .expect("Failed to create planner");
    assert_eq!(planner.suggest_goal("build a mobile").await, "");
}

#[test]
fn test_status_reports_ai_availability() {
    let status = plain_planner().status();
    assert_eq!(status.status, "online");
    assert!(!status.ai_available);
    assert_eq!(status.version, env!("CARGO_PKG_VERSION"));
}
