//! Tests for the planner module.

use std::sync::Arc;

use super::*;
use crate::{
    error::PlannerError,
    llm::client::mock::{MockCompletionClient, MockReply},
    models::{Plan, Priority},
    params::{GeneratePlan, Id},
    parser::JsonGrammar,
    planner::generation::FALLBACK_RISK,
};

const REPLY: &str = "\
TASK 1: Research competitors
Description: Compare the top five delivery apps
Duration: 2 days
Dependencies: None
Priority: High
Risks:
- Limited public data
Deliverables:
- Comparison table
END TASK

TASK 2: Design the ordering flow
Duration: 3 days
Dependencies: 1
Priority: Medium
END TASK

TASK 3: Build the prototype
Duration: 1 week
Dependencies: 1, 2
Priority: Low
END TASK

OVERALL RISKS: Payment integration may slip.
";

/// Helper function to create a planner backed by a mock client
fn create_test_planner(client: MockCompletionClient) -> (Arc<MockCompletionClient>, Planner) {
    let client = Arc::new(client);
    let planner = PlannerBuilder::new()
        .with_client(client.clone())
        .build()
        .expect("Failed to create planner");
    (client, planner)
}

fn request() -> GeneratePlan {
    GeneratePlan::new("Launch a mobile food delivery app").with_timeframe("2 weeks")
}

#[tokio::test]
async fn test_generate_plan_stores_parsed_plan() {
    let (client, planner) = create_test_planner(MockCompletionClient::text(REPLY));

    let outcome = planner
        .generate_plan(&request())
        .await
        .expect("Failed to generate plan");

    assert!(!outcome.is_degraded());
    assert_eq!(client.call_count(), 1);

    let plan = outcome.plan();
    assert_eq!(plan.id.len(), 8);
    assert_eq!(plan.goal, "Launch a mobile food delivery app");
    assert_eq!(plan.timeframe, "2 weeks");
    assert_eq!(plan.total_tasks(), 3);
    assert_eq!(plan.tasks[2].dependencies, vec!["1", "2"]);
    assert_eq!(
        plan.overall_risk_notes.as_deref(),
        Some("Payment integration may slip.")
    );

    let stored = planner.get_plan(&Id::new(&plan.id)).expect("Failed to get plan");
    assert_eq!(&stored, plan);
}

#[tokio::test]
async fn test_empty_goal_is_rejected_without_model_call() {
    let (client, planner) = create_test_planner(MockCompletionClient::text(REPLY));

    for goal in ["", "   \n\t"] {
        let err = planner
            .generate_plan(&GeneratePlan::new(goal))
            .await
            .unwrap_err();
        assert!(matches!(err, PlannerError::InvalidInput { ref field, .. } if field == "goal"));
    }

    assert_eq!(client.call_count(), 0);
    assert_eq!(planner.stats().total_plans, 0);
}

#[tokio::test]
async fn test_upstream_timeout_degrades_to_fallback() {
    let (_client, planner) = create_test_planner(MockCompletionClient::new(vec![MockReply::Timeout]));

    let outcome = planner
        .generate_plan(&request())
        .await
        .expect("Degraded generation should not fail");

    let PlanOutcome::Degraded { plan, reason } = &outcome else {
        panic!("expected a degraded outcome, got {outcome:?}");
    };
    assert!(reason.contains("Timeout"), "unexpected reason: {reason}");

    assert_eq!(plan.total_tasks(), 1);
    let task = &plan.tasks[0];
    assert_eq!(task.title, "Launch a mobile food delivery app");
    assert_eq!(task.priority, Priority::Medium);
    assert!(task.dependencies.is_empty());
    assert_eq!(task.duration_estimate, "2 weeks");
    assert_eq!(task.risks, vec![FALLBACK_RISK]);
    assert!(
        plan.overall_risk_notes
            .as_deref()
            .is_some_and(|notes| notes.contains("Automatic task breakdown failed"))
    );

    // Fallback plans are stored like any other
    assert!(planner.get_plan(&Id::new(&plan.id)).is_ok());
}

#[tokio::test]
async fn test_upstream_status_error_degrades() {
    let (_client, planner) =
        create_test_planner(MockCompletionClient::new(vec![MockReply::Status(503)]));

    let outcome = planner.generate_plan(&request()).await.unwrap();
    assert!(outcome.is_degraded());
    assert!(outcome.reason().is_some_and(|reason| reason.contains("503")));
}

#[tokio::test]
async fn test_unparseable_reply_degrades() {
    let (_client, planner) =
        create_test_planner(MockCompletionClient::text("Sorry, I can't help with that."));

    let outcome = planner.generate_plan(&request()).await.unwrap();
    assert!(outcome.is_degraded());
    assert_eq!(outcome.plan().total_tasks(), 1);
}

#[tokio::test]
async fn test_reply_with_only_untitled_blocks_degrades() {
    let (_client, planner) = create_test_planner(MockCompletionClient::text("TASK 1:\nEND TASK"));

    let outcome = planner.generate_plan(&request()).await.unwrap();
    assert!(outcome.is_degraded());
}

#[tokio::test]
async fn test_without_credentials_no_client_is_used() {
    let planner = PlannerBuilder::new()
        .build()
        .expect("Failed to create planner");
    assert!(!planner.has_client());

    let outcome = planner.generate_plan(&request()).await.unwrap();
    assert!(outcome.is_degraded());
    assert!(outcome.reason().is_some_and(|reason| reason.contains("API key")));
}

#[tokio::test]
async fn test_regeneration_produces_new_plan() {
    let (client, planner) = create_test_planner(MockCompletionClient::text(REPLY));

    let first = planner.generate_plan(&request()).await.unwrap().into_plan();
    let second = planner.generate_plan(&request()).await.unwrap().into_plan();

    assert_ne!(first.id, second.id);
    assert_eq!(client.call_count(), 2);
    assert_eq!(planner.get_plan(&Id::new(&first.id)).unwrap(), first);

    let stats = planner.stats();
    assert_eq!(stats.total_plans, 2);
    assert_eq!(stats.total_tasks, 6);

    let summaries = planner.list_plans();
    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].id, first.id);
    assert_eq!(summaries[1].id, second.id);
}

#[tokio::test]
async fn test_export_round_trip() {
    let (_client, planner) = create_test_planner(MockCompletionClient::text(REPLY));
    let plan = planner.generate_plan(&request()).await.unwrap().into_plan();

    let json = planner
        .export_plan_json(&Id::new(&plan.id))
        .expect("Failed to export plan");
    let parsed = Plan::from_json(&json).expect("Failed to parse export");
    assert_eq!(parsed, plan);
}

#[tokio::test]
async fn test_format_plan_output() {
    let (_client, planner) = create_test_planner(MockCompletionClient::text(REPLY));
    let plan = planner.generate_plan(&request()).await.unwrap().into_plan();

    let output = planner.format_plan_output(&Id::new(&plan.id)).unwrap();
    assert!(output.contains("## High priority"));
    assert!(output.contains("### 3. Build the prototype"));
    assert!(output.contains("#1 Research competitors, #2 Design the ordering flow"));
}

#[test]
fn test_unknown_plan_id() {
    let planner = PlannerBuilder::new().build().unwrap();

    let err = planner.get_plan(&Id::new("nope1234")).unwrap_err();
    assert!(matches!(err, PlannerError::PlanNotFound { .. }));
    assert!(matches!(
        planner.export_plan_json(&Id::new("nope1234")),
        Err(PlannerError::PlanNotFound { .. })
    ));
    assert!(planner.format_plan_output(&Id::new("nope1234")).is_err());
}

#[tokio::test]
async fn test_custom_grammars() {
    let client = Arc::new(MockCompletionClient::text(REPLY));
    let planner = PlannerBuilder::new()
        .with_client(client)
        .with_grammars(vec![Box::new(JsonGrammar)])
        .build()
        .unwrap();

    // The delimited reply is not JSON, so only the fallback is possible.
    let outcome = planner.generate_plan(&request()).await.unwrap();
    assert!(outcome.is_degraded());
}
