//! Task priority levels.

use std::str::FromStr;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Type-safe enumeration of task priorities.
///
/// Serialized with the capitalized variant names (`"High"`, `"Medium"`,
/// `"Low"`) used by the JSON export.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub enum Priority {
    /// Must happen early; other work tends to depend on it
    High,

    /// Normal priority, also the fallback for missing labels
    #[default]
    Medium,

    /// Can slip without blocking the goal
    Low,
}

impl Priority {
    /// All priorities, most urgent first.
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    /// Leniently match a free-form priority label.
    ///
    /// Matching is case-insensitive and ignores surrounding punctuation, so
    /// `"**HIGH**"`, `"high."` and `"H"` all resolve to [`Priority::High`].
    /// Returns `None` when nothing recognizable is found.
    pub fn from_label(label: &str) -> Option<Self> {
        let word: String = label
            .trim()
            .trim_matches(|c: char| !c.is_alphanumeric())
            .split(|c: char| !c.is_alphanumeric())
            .next()?
            .to_lowercase();

        match word.as_str() {
            "high" | "h" | "critical" | "urgent" => Some(Priority::High),
            "medium" | "med" | "m" | "moderate" | "normal" => Some(Priority::Medium),
            "low" | "l" | "minor" => Some(Priority::Low),
            _ => None,
        }
    }

    /// Canonical label, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }

    /// Priority with a marker for markdown output.
    pub fn with_icon(&self) -> &'static str {
        match self {
            Priority::High => "▲ High",
            Priority::Medium => "◆ Medium",
            Priority::Low => "▼ Low",
        }
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| format!("Invalid priority: {s}"))
    }
}
