//! Task model definition and related functionality.

use serde::{Deserialize, Serialize};

use super::{Priority, duration::UNSPECIFIED};

/// One unit of work within a plan.
///
/// A task's identifier is its 1-based position in [`super::Plan::tasks`];
/// it is not stored on the task itself, so reordering can never leave a
/// stale id behind. Dependencies refer to sibling tasks by that id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    /// Short title of the task
    pub title: String,

    /// What needs to be done
    #[serde(default)]
    pub description: String,

    /// Normalized duration estimate, or `"unspecified"`
    #[serde(default = "unspecified")]
    pub duration_estimate: String,

    /// Ids of sibling tasks this task depends on
    #[serde(default)]
    pub dependencies: Vec<String>,

    /// Task priority
    #[serde(default)]
    pub priority: Priority,

    /// Potential issues, in the order the model listed them
    #[serde(default)]
    pub risks: Vec<String>,

    /// Expected outputs
    #[serde(default)]
    pub deliverables: Vec<String>,
}

fn unspecified() -> String {
    UNSPECIFIED.to_string()
}

impl Task {
    /// Create a task with a title and defaults for everything else.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            duration_estimate: unspecified(),
            dependencies: Vec::new(),
            priority: Priority::default(),
            risks: Vec::new(),
            deliverables: Vec::new(),
        }
    }

    /// Add a dependency on the sibling task with the given 1-based id.
    ///
    /// Duplicates are ignored so the dependency list behaves like an
    /// insertion-ordered set.
    pub fn add_dependency(&mut self, id: usize) {
        let id = id.to_string();
        if !self.dependencies.contains(&id) {
            self.dependencies.push(id);
        }
    }

    /// Dependency ids that parse as positions, in declaration order.
    pub fn dependency_ids(&self) -> impl Iterator<Item = usize> + '_ {
        self.dependencies.iter().filter_map(|dep| dep.parse().ok())
    }
}
