//! Parsing of model replies into plan drafts.
//!
//! Parsing is a pure function from text to a [`PlanDraft`]. Each accepted
//! reply layout is a [`ResponseGrammar`] that scans the text into loosely
//! typed [`RawTask`]s; [`parse_response`] then resolves those into tasks:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Reply text    │───▶│    Grammars     │───▶│   Resolution    │
//! │                 │    │ (delimited,json)│    │ (dedupe, deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Resolution is shared by every grammar:
//!
//! - blocks without a title are skipped
//! - a block repeating an earlier (normalized) title is skipped; a block that
//!   reuses an earlier task number under a new title is kept, but can only be
//!   referenced by title
//! - at most [`MAX_TASKS`] tasks are kept
//! - dependencies given by model task number or by title are remapped to the
//!   final 1-based positions; anything that does not resolve, and
//!   self-references, are dropped
//! - priorities default to Medium, durations outside the grammar become
//!   `"unspecified"`

use std::{
    collections::{HashMap, HashSet},
    sync::LazyLock,
};

use log::{debug, warn};
use regex::Regex;

use crate::{
    error::{PlannerError, Result},
    models::{PlanDraft, Priority, Task, duration::normalize_duration},
    params::GeneratePlan,
    prompt::MAX_TASKS,
};

pub mod delimited;
pub mod json;


pub use delimited::DelimitedGrammar;
pub use json::JsonGrammar;

static TASK_NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:task|step)?\s*#?\s*(\d+)$").expect("task number pattern is valid")
});

static LIST_SPLIT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\s*(?:,|;|\band\b)\s*").expect("list split pattern is valid")
});

/// A task block as scanned from a reply, before resolution.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTask {
    /// The number the model gave the task, if any
    pub number: Option<usize>,
    pub title: String,
    pub description: String,
    pub duration: String,
    /// Dependency entries as written: a task number, a title, or a list of
    /// either
    pub dependencies: Vec<String>,
    pub priority: Option<Priority>,
    pub risks: Vec<String>,
    pub deliverables: Vec<String>,
}

/// Everything a grammar recognized in a reply.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawResponse {
    pub tasks: Vec<RawTask>,
    pub overall_risk_notes: Option<String>,
}

/// A reply layout the parser understands.
pub trait ResponseGrammar: Send + Sync {
    /// Short name used in log messages.
    fn name(&self) -> &'static str;

    /// Scan the reply, returning `None` when no task block is recognizable.
    fn scan(&self, text: &str) -> Option<RawResponse>;
}

/// Grammars tried in order; the first that recognizes a task block wins.
pub fn default_grammars() -> Vec<Box<dyn ResponseGrammar>> {
    vec![Box::new(DelimitedGrammar), Box::new(JsonGrammar)]
}

/// Parse a model reply with the default grammars.
///
/// # Errors
///
/// Returns `PlannerError::Parse` when no grammar recognizes a task block.
pub fn parse_response(text: &str, params: &GeneratePlan) -> Result<PlanDraft> {
    parse_with(&default_grammars(), text, params)
}

/// Parse a model reply with an explicit grammar list.
pub fn parse_with(
    grammars: &[Box<dyn ResponseGrammar>],
    text: &str,
    params: &GeneratePlan,
) -> Result<PlanDraft> {
    for grammar in grammars {
        match grammar.scan(text) {
            Some(raw) if !raw.tasks.is_empty() => {
                debug!(
                    "parse_with: {} grammar recognized {} blocks",
                    grammar.name(),
                    raw.tasks.len()
                );
                return Ok(resolve(raw, params));
            }
            _ => debug!("parse_with: {} grammar found no task blocks", grammar.name()),
        }
    }

    Err(PlannerError::parse("response contained no recognizable task block"))
}

/// Turn scanned blocks into a plan draft.
fn resolve(raw: RawResponse, params: &GeneratePlan) -> PlanDraft {
    let mut kept: Vec<RawTask> = Vec::new();
    let mut seen_numbers = HashSet::new();
    let mut seen_titles = HashSet::new();

    for (ordinal, mut block) in raw.tasks.into_iter().enumerate() {
        block.title = clean_inline(&block.title);
        if block.title.is_empty() {
            debug!("resolve: skipping block {} without a title", ordinal + 1);
            continue;
        }

        if !seen_titles.insert(normalize_title(&block.title)) {
            debug!("resolve: skipping duplicate block '{}'", block.title);
            continue;
        }

        if kept.len() == MAX_TASKS {
            warn!("resolve: reply has more than {MAX_TASKS} tasks, ignoring the rest");
            break;
        }

        if let Some(number) = block.number
            && !seen_numbers.insert(number)
        {
            debug!(
                "resolve: task number {number} reused by '{}', it keeps only its position",
                block.title
            );
            block.number = None;
        }
        kept.push(block);
    }

    // Model numbers and titles both map to final 1-based positions.
    let mut by_number = HashMap::new();
    let mut by_title = HashMap::new();
    for (index, block) in kept.iter().enumerate() {
        if let Some(number) = block.number {
            by_number.insert(number, index + 1);
        }
        by_title.insert(normalize_title(&block.title), index + 1);
    }

    let tasks = kept
        .into_iter()
        .enumerate()
        .map(|(index, block)| {
            let position = index + 1;
            let mut task = Task::new(block.title);
            task.description = block.description.trim().to_string();
            task.duration_estimate = normalize_duration(&block.duration);
            task.priority = block.priority.unwrap_or_default();
            task.risks = block.risks;
            task.deliverables = block.deliverables;

            for entry in &block.dependencies {
                for (reference, target) in resolve_entry(entry, &by_number, &by_title) {
                    match target {
                        Some(target) if target != position => task.add_dependency(target),
                        _ => warn!(
                            "resolve: dropping dependency '{reference}' of task {position}, it does not name another task in this plan"
                        ),
                    }
                }
            }
            task
        })
        .collect();

    PlanDraft {
        goal: params.goal.clone(),
        timeframe: params.timeframe.clone(),
        context: params.context.clone(),
        tasks,
        overall_risk_notes: raw
            .overall_risk_notes
            .map(|notes| notes.trim().to_string())
            .filter(|notes| !notes.is_empty()),
    }
}

/// Resolve one dependency entry to final positions.
///
/// An entry that is exactly a sibling's title wins over splitting, so titles
/// containing `and` or commas stay intact. Otherwise the entry is split into
/// references, each resolved by task number or by title.
fn resolve_entry(
    entry: &str,
    by_number: &HashMap<usize, usize>,
    by_title: &HashMap<String, usize>,
) -> Vec<(String, Option<usize>)> {
    if reference_number(entry).is_none()
        && let Some(&target) = by_title.get(&normalize_title(entry))
    {
        return vec![(entry.to_string(), Some(target))];
    }

    split_references(entry)
        .into_iter()
        .map(|reference| {
            let target = match reference_number(&reference) {
                Some(number) => by_number.get(&number).copied(),
                None => by_title.get(&normalize_title(&reference)).copied(),
            };
            (reference, target)
        })
        .collect()
}

/// Task number named by a dependency reference like `3`, `#3` or `Task 3`.
fn reference_number(reference: &str) -> Option<usize> {
    TASK_NUMBER_RE
        .captures(reference.trim())
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Split a dependency list like `1, 2 and Task 4` into references.
///
/// Placeholders such as `None` or `N/A` yield nothing.
pub fn split_references(text: &str) -> Vec<String> {
    LIST_SPLIT_RE
        .split(text)
        .map(clean_inline)
        .filter(|item| !item.is_empty() && !is_placeholder(item))
        .collect()
}

/// Whether a value is one of the "nothing here" placeholders models emit.
pub fn is_placeholder(value: &str) -> bool {
    let value = value.trim().trim_end_matches('.').to_lowercase();
    matches!(
        value.as_str(),
        "" | "none" | "n/a" | "na" | "nil" | "-" | "no dependencies" | "none identified"
    )
}

/// Strip markdown emphasis, quotes and surrounding whitespace.
pub fn clean_inline(text: &str) -> String {
    text.trim()
        .trim_matches(|c: char| matches!(c, '*' | '_' | '`' | '"' | '#') || c.is_whitespace())
        .to_string()
}

/// Comparison key that ignores case, punctuation and spacing differences.
pub fn normalize_title(title: &str) -> String {
    title
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}
