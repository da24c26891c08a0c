#[cfg(test)]
mod model_tests {
    use jiff::Timestamp;

    use crate::models::{Plan, PlanDraft, PlanSummary, Priority, Task, UNSPECIFIED};

    fn create_test_task(title: &str, duration: &str, priority: Priority) -> Task {
        Task {
            title: title.to_string(),
            description: format!("Work on {title}"),
            duration_estimate: duration.to_string(),
            dependencies: Vec::new(),
            priority,
            risks: vec!["Scope creep".to_string()],
            deliverables: vec![format!("{title} done")],
        }
    }

    fn create_test_plan() -> Plan {
        let mut build = create_test_task("Build backend", "1 week", Priority::High);
        build.add_dependency(1);
        Plan {
            id: "c0ffee42".to_string(),
            goal: "Launch a mobile food delivery app".to_string(),
            timeframe: "2 weeks".to_string(),
            context: Some("Two developers".to_string()),
            created_at: Timestamp::from_second(1640995200).unwrap(), // 2022-01-01 00:00:00 UTC
            tasks: vec![
                create_test_task("Market research", "2 days", Priority::Medium),
                build,
                create_test_task("Polish", "unspecified", Priority::Low),
            ],
            overall_risk_notes: Some("Tight deadline".to_string()),
        }
    }

    #[test]
    fn test_task_new_defaults() {
        let task = Task::new("Write docs");
        assert_eq!(task.title, "Write docs");
        assert_eq!(task.priority, Priority::Medium);
        assert_eq!(task.duration_estimate, UNSPECIFIED);
        assert!(task.dependencies.is_empty());
        assert!(task.risks.is_empty());
        assert!(task.deliverables.is_empty());
    }

    #[test]
    fn test_add_dependency_deduplicates() {
        let mut task = Task::new("Deploy");
        task.add_dependency(2);
        task.add_dependency(1);
        task.add_dependency(2);
        assert_eq!(task.dependencies, vec!["2".to_string(), "1".to_string()]);
        assert_eq!(task.dependency_ids().collect::<Vec<_>>(), vec![2, 1]);
    }

    #[test]
    fn test_task_lookup_is_one_based() {
        let plan = create_test_plan();
        assert!(plan.task(0).is_none());
        assert_eq!(plan.task(1).unwrap().title, "Market research");
        assert_eq!(plan.task(3).unwrap().title, "Polish");
        assert!(plan.task(4).is_none());

        let ids: Vec<usize> = plan.tasks_with_ids().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_estimated_total() {
        let plan = create_test_plan();
        // 16h + 40h, the unspecified task is ignored
        assert_eq!(plan.estimated_total(), "1 week");
        assert_eq!(plan.total_tasks(), 3);
    }

    #[test]
    fn test_json_export_shape() {
        let plan = create_test_plan();
        let json = plan.to_json().expect("Failed to serialize plan");
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let object = value.as_object().unwrap();
        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec![
                "context",
                "created_at",
                "goal",
                "id",
                "overall_risk_notes",
                "tasks",
                "timeframe"
            ]
        );
        assert_eq!(value["created_at"], "2022-01-01T00:00:00Z");

        let task = value["tasks"][1].as_object().unwrap();
        let mut task_keys: Vec<&str> = task.keys().map(String::as_str).collect();
        task_keys.sort_unstable();
        assert_eq!(
            task_keys,
            vec![
                "deliverables",
                "dependencies",
                "description",
                "duration_estimate",
                "priority",
                "risks",
                "title"
            ]
        );
        assert_eq!(task["priority"], "High");
        assert_eq!(task["dependencies"], serde_json::json!(["1"]));
    }

    #[test]
    fn test_json_nulls_for_missing_optionals() {
        let mut plan = create_test_plan();
        plan.context = None;
        plan.overall_risk_notes = None;
        let value: serde_json::Value =
            serde_json::from_str(&plan.to_json().unwrap()).unwrap();
        assert!(value["context"].is_null());
        assert!(value["overall_risk_notes"].is_null());
    }

    #[test]
    fn test_json_round_trip() {
        let plan = create_test_plan();
        let restored = Plan::from_json(&plan.to_json().unwrap()).expect("Failed to parse export");
        assert_eq!(restored, plan);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(Plan::from_json("{\"id\": 3}").is_err());
        assert!(Plan::from_json("not json").is_err());
    }

    #[test]
    fn test_draft_conversion() {
        let plan = create_test_plan();
        let draft = plan.clone().into_draft();
        assert_eq!(draft.goal, plan.goal);
        assert_eq!(draft.tasks, plan.tasks);

        let rebuilt = Plan::from_draft(plan.id.clone(), plan.created_at, draft);
        assert_eq!(rebuilt, plan);

        let empty = PlanDraft::default();
        assert!(empty.tasks.is_empty());
    }

    #[test]
    fn test_plan_summary_from_plan() {
        let plan = create_test_plan();
        let summary = PlanSummary::from(&plan);
        assert_eq!(summary.id, "c0ffee42");
        assert_eq!(summary.goal, plan.goal);
        assert_eq!(summary.total_tasks, 3);
        assert_eq!(summary.estimated_total, "1 week");
    }
}
