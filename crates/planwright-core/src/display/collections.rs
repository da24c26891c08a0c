//! Collection wrapper types for displaying groups of domain objects.

use std::{fmt, ops::Index};

use crate::models::PlanSummary;

/// Newtype wrapper for displaying a list of plan summaries.
///
/// Titles are left to the caller; an empty collection renders a single
/// "No plans found." line.
///
/// # Examples
///
/// ```rust
/// use planwright_core::{display::PlanSummaries, models::PlanSummary};
/// use jiff::Timestamp;
///
/// let summary = PlanSummary {
///     id: "1a2b3c4d".to_string(),
///     goal: "Plan a wedding".to_string(),
///     timeframe: "6 weeks".to_string(),
///     created_at: Timestamp::now(),
///     total_tasks: 8,
///     estimated_total: "5 weeks".to_string(),
/// };
///
/// let output = PlanSummaries(vec![summary]).to_string();
/// assert!(output.contains("Plan a wedding"));
/// ```
pub struct PlanSummaries(pub Vec<PlanSummary>);

impl PlanSummaries {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl From<Vec<PlanSummary>> for PlanSummaries {
    fn from(summaries: Vec<PlanSummary>) -> Self {
        Self(summaries)
    }
}

impl Index<usize> for PlanSummaries {
    type Output = PlanSummary;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl fmt::Display for PlanSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No plans found.")
        } else {
            for summary in &self.0 {
                write!(f, "{summary}")?;
            }
            Ok(())
        }
    }
}
