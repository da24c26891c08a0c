//! Display implementations for domain models.
//!
//! This module contains the Display trait implementations for the core domain
//! models, kept apart from the model definitions so the data structures stay
//! free of presentation concerns.
//!
//! All output is markdown for rich terminal display. The plan layout is
//! deterministic: a metadata header, then tasks grouped by priority (High,
//! Medium, Low) in parser order within each group, then the overall risk
//! notes.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{Plan, PlanSummary, Priority, Stats, Task};

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Plan {}: {}", self.id, self.goal)?;
        writeln!(f)?;

        writeln!(f, "- **Timeframe**: {}", self.timeframe)?;
        if let Some(context) = &self.context {
            writeln!(f, "- **Context**: {context}")?;
        }
        writeln!(f, "- **Created**: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- **Tasks**: {}", self.total_tasks())?;
        writeln!(f, "- **Estimated total**: {}", self.estimated_total())?;

        if self.tasks.is_empty() {
            writeln!(f, "\nNo tasks in this plan.")?;
        }

        for priority in Priority::ALL {
            let mut group = self
                .tasks_with_ids()
                .filter(|(_, task)| task.priority == priority)
                .peekable();
            if group.peek().is_none() {
                continue;
            }

            writeln!(f, "\n## {priority} priority")?;
            for (id, task) in group {
                writeln!(f)?;
                fmt_task(self, id, task, f)?;
            }
        }

        if let Some(notes) = &self.overall_risk_notes {
            writeln!(f, "\n## Overall risks")?;
            writeln!(f)?;
            writeln!(f, "{notes}")?;
        }

        Ok(())
    }
}

/// One task entry; dependencies are shown with their sibling's title.
fn fmt_task(plan: &Plan, id: usize, task: &Task, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "### {id}. {} ({})", task.title, task.priority.with_icon())?;
    writeln!(f)?;

    if !task.description.is_empty() {
        writeln!(f, "{}", task.description)?;
        writeln!(f)?;
    }

    writeln!(f, "- **Duration**: {}", task.duration_estimate)?;

    if !task.dependencies.is_empty() {
        let names: Vec<String> = task
            .dependency_ids()
            .map(|dep| match plan.task(dep) {
                Some(sibling) => format!("#{dep} {}", sibling.title),
                None => format!("#{dep}"),
            })
            .collect();
        writeln!(f, "- **Depends on**: {}", names.join(", "))?;
    }

    fmt_list(f, "Risks", &task.risks)?;
    fmt_list(f, "Deliverables", &task.deliverables)
}

fn fmt_list(f: &mut fmt::Formatter<'_>, label: &str, items: &[String]) -> fmt::Result {
    if items.is_empty() {
        return Ok(());
    }
    writeln!(f, "- **{label}**:")?;
    for item in items {
        writeln!(f, "  - {item}")?;
    }
    Ok(())
}

impl fmt::Display for PlanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} (ID: {})", self.goal, self.id)?;
        writeln!(f)?;
        writeln!(f, "- **Timeframe**: {}", self.timeframe)?;
        writeln!(
            f,
            "- **Tasks**: {} (estimated {})",
            self.total_tasks, self.estimated_total
        )?;
        writeln!(f, "- **Created**: {}", LocalDateTime(&self.created_at))?;
        writeln!(f)?;

        Ok(())
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Plans generated: {}, total tasks: {}",
            self.total_plans, self.total_tasks
        )
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;

    fn task(title: &str, priority: Priority, duration: &str) -> Task {
        let mut task = Task::new(title);
        task.priority = priority;
        task.duration_estimate = duration.to_string();
        task
    }

    fn create_test_plan() -> Plan {
        let research = task("Market research", Priority::High, "2 days");
        let mut backend = task("Build backend", Priority::Medium, "1 week");
        backend.description = "Orders and payments".to_string();
        backend.add_dependency(1);
        backend.risks = vec!["Payment approval delays".to_string()];
        backend.deliverables = vec!["Deployed API".to_string(), "API docs".to_string()];
        let mut launch = task("Beta launch", Priority::High, "3 days");
        launch.add_dependency(1);
        launch.add_dependency(2);
        let polish = task("Polish", Priority::Low, "unspecified");

        Plan {
            id: "0badc0de".to_string(),
            goal: "Launch a food delivery app".to_string(),
            timeframe: "2 weeks".to_string(),
            context: Some("Two developers".to_string()),
            created_at: Timestamp::from_second(1640995200).unwrap(), // 2022-01-01 00:00:00 UTC
            tasks: vec![research, backend, launch, polish],
            overall_risk_notes: Some("Very tight schedule".to_string()),
        }
    }

    #[test]
    fn test_plan_display_header() {
        let output = create_test_plan().to_string();

        assert!(output.starts_with("# Plan 0badc0de: Launch a food delivery app\n"));
        assert!(output.contains("- **Timeframe**: 2 weeks"));
        assert!(output.contains("- **Context**: Two developers"));
        assert!(output.contains("- **Tasks**: 4"));
        // 2 days + 1 week + 3 days = 80 hours
        assert!(output.contains("- **Estimated total**: 2 weeks"));
    }

    #[test]
    fn test_plan_display_groups_by_priority() {
        let output = create_test_plan().to_string();

        let high = output.find("## High priority").unwrap();
        let medium = output.find("## Medium priority").unwrap();
        let low = output.find("## Low priority").unwrap();
        assert!(high < medium && medium < low);

        // Insertion order within a group
        let research = output.find("### 1. Market research").unwrap();
        let launch = output.find("### 3. Beta launch").unwrap();
        assert!(high < research && research < launch && launch < medium);

        let backend = output.find("### 2. Build backend").unwrap();
        assert!(medium < backend && backend < low);
    }

    #[test]
    fn test_plan_display_task_details() {
        let output = create_test_plan().to_string();

        assert!(output.contains("### 1. Market research (▲ High)"));
        assert!(output.contains("Orders and payments"));
        assert!(output.contains("- **Duration**: 1 week"));
        assert!(output.contains("- **Depends on**: #1 Market research, #2 Build backend"));
        assert!(output.contains("- **Risks**:\n  - Payment approval delays\n"));
        assert!(output.contains("- **Deliverables**:\n  - Deployed API\n  - API docs\n"));
        assert!(output.trim_end().ends_with("## Overall risks\n\nVery tight schedule"));
    }

    #[test]
    fn test_plan_display_skips_empty_groups() {
        let mut plan = create_test_plan();
        plan.tasks.retain(|task| task.priority != Priority::Medium);
        plan.tasks.iter_mut().for_each(|task| task.dependencies.clear());
        plan.overall_risk_notes = None;

        let output = plan.to_string();
        assert!(!output.contains("## Medium priority"));
        assert!(!output.contains("## Overall risks"));
    }

    #[test]
    fn test_plan_display_without_tasks() {
        let mut plan = create_test_plan();
        plan.tasks.clear();
        plan.context = None;

        let output = plan.to_string();
        assert!(output.contains("No tasks in this plan."));
        assert!(output.contains("- **Estimated total**: unspecified"));
        assert!(!output.contains("Context"));
    }

    #[test]
    fn test_plan_display_is_deterministic() {
        let plan = create_test_plan();
        assert_eq!(plan.to_string(), plan.clone().to_string());
    }

    #[test]
    fn test_summary_and_stats_display() {
        let summary = PlanSummary::from(&create_test_plan());
        let output = summary.to_string();
        assert!(output.contains("## Launch a food delivery app (ID: 0badc0de)"));
        assert!(output.contains("- **Tasks**: 4 (estimated 2 weeks)"));

        let stats = Stats {
            total_plans: 2,
            total_tasks: 9,
        };
        assert_eq!(stats.to_string(), "Plans generated: 2, total tasks: 9");
    }
}
