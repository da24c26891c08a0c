//! The delimiter-based layout requested by the prompt.
//!
//! ```text
//! TASK 1: Market research
//! Description: Survey competitors
//! Duration: 2 days
//! Dependencies: None
//! Priority: High
//! Risks:
//! - Limited data
//! Deliverables:
//! - Research report
//! END TASK
//! OVERALL RISKS: Tight schedule
//! ```
//!
//! Headers tolerate markdown decoration (`## Task 1 - Title`,
//! `**Task 1:** Title`) and labels are matched case-insensitively.

use std::sync::LazyLock;

use regex::Regex;

use super::{
    RawResponse, RawTask, ResponseGrammar, clean_inline, is_placeholder, reference_number,
    split_references,
};
use crate::models::Priority;

static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^\s*(?:#{1,6}\s*)?[*_]*\s*task\s*#?\s*(?P<number>\d+)\s*[*_]*\s*[:.)\-–]\s*[*_]*\s*(?P<title>.*?)[*_\s]*$",
    )
    .expect("header pattern is valid")
});

static END_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*[*_]*\s*end\s*(?:of\s*)?task\b").expect("end pattern is valid")
});

static OVERALL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^\s*(?:#{1,6}\s*)?[*_]*\s*overall\s+risks?(?:\s+notes?)?\s*[*_]*\s*(?::\s*[*_]*\s*(?P<text>.*?))?[*_\s]*$",
    )
    .expect("overall pattern is valid")
});

static FIELD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?ix)^\s*(?:[-*•+]\s+)?[*_]*\s*
        (?P<label>title|name|description|details|estimated\s+duration|duration|time\s+estimate|estimate
            |dependencies|dependency|depends\s+on|prerequisites|priority|potential\s+risks|risks?
            |deliverables?|outputs?)
        \s*[*_]*\s*:\s*[*_]*\s*(?P<value>.*?)\s*$",
    )
    .expect("field pattern is valid")
});

static BULLET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:[-*•+]|\d+[.)])\s+(?P<item>.+?)\s*$").expect("bullet pattern is valid")
});

/// Which labeled field continuation lines belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Description,
    Dependencies,
    Risks,
    Deliverables,
    Scalar,
}

impl Field {
    fn from_label(label: &str) -> (Self, &'static str) {
        let label = label.to_lowercase();
        if label.starts_with("title") || label.starts_with("name") {
            (Field::Scalar, "title")
        } else if label.starts_with("description") || label.starts_with("details") {
            (Field::Description, "description")
        } else if label.contains("duration") || label.contains("estimate") {
            (Field::Scalar, "duration")
        } else if label.starts_with("depend") || label.starts_with("prerequisites") {
            (Field::Dependencies, "dependencies")
        } else if label.starts_with("priority") {
            (Field::Scalar, "priority")
        } else if label.contains("risk") {
            (Field::Risks, "risks")
        } else {
            (Field::Deliverables, "deliverables")
        }
    }
}

/// Grammar for `TASK n:` ... `END TASK` blocks.
#[derive(Debug, Clone, Copy, Default)]
pub struct DelimitedGrammar;

impl ResponseGrammar for DelimitedGrammar {
    fn name(&self) -> &'static str {
        "delimited"
    }

    fn scan(&self, text: &str) -> Option<RawResponse> {
        let mut scanner = Scanner::default();
        for line in text.lines() {
            scanner.line(line);
        }
        scanner.finish()
    }
}

#[derive(Default)]
struct Scanner {
    tasks: Vec<RawTask>,
    current: Option<RawTask>,
    field: Option<Field>,
    overall: Option<Vec<String>>,
    in_overall: bool,
}

impl Scanner {
    fn line(&mut self, line: &str) {
        if let Some(caps) = HEADER_RE.captures(line) {
            self.close();
            self.in_overall = false;
            self.current = Some(RawTask {
                number: caps["number"].parse().ok(),
                title: clean_inline(&caps["title"]),
                ..RawTask::default()
            });
            return;
        }

        if END_RE.is_match(line) {
            self.close();
            return;
        }

        if let Some(caps) = OVERALL_RE.captures(line) {
            self.close();
            self.in_overall = true;
            let notes = self.overall.get_or_insert_with(Vec::new);
            let text = caps.name("text").map_or_else(String::new, |m| clean_inline(m.as_str()));
            if !text.is_empty() {
                notes.push(text);
            }
            return;
        }

        if self.in_overall {
            let text = bullet_item(line).unwrap_or_else(|| clean_inline(line));
            if !text.is_empty()
                && let Some(notes) = self.overall.as_mut()
            {
                notes.push(text);
            }
            return;
        }

        let Some(task) = self.current.as_mut() else {
            return;
        };

        if let Some(caps) = FIELD_RE.captures(line) {
            let (field, key) = Field::from_label(&caps["label"]);
            let value = clean_inline(&caps["value"]);
            apply_field(task, key, &value);
            self.field = Some(field);
            return;
        }

        if line.trim().is_empty() {
            return;
        }

        let item = bullet_item(line);
        match (self.field, item) {
            (Some(Field::Risks), Some(item)) => task.risks.push(item),
            (Some(Field::Deliverables), Some(item)) => task.deliverables.push(item),
            (Some(Field::Risks), None) => append_to_last(&mut task.risks, line),
            (Some(Field::Deliverables), None) => append_to_last(&mut task.deliverables, line),
            (Some(Field::Dependencies), Some(item)) => push_reference(task, &item),
            // A bare line under Dependencies counts only when it is a list of
            // task numbers; prose there is description text.
            (Some(Field::Dependencies), None) if is_number_list(line) => {
                push_reference(task, &clean_inline(line))
            }
            _ => append_text(&mut task.description, line),
        }
    }

    /// Finish the block being collected, if any.
    fn close(&mut self) {
        if let Some(task) = self.current.take() {
            self.tasks.push(task);
        }
        self.field = None;
    }

    fn finish(mut self) -> Option<RawResponse> {
        self.close();
        if self.tasks.is_empty() {
            return None;
        }
        Some(RawResponse {
            tasks: self.tasks,
            overall_risk_notes: self
                .overall
                .filter(|notes| !notes.is_empty())
                .map(|notes| notes.join("; ")),
        })
    }
}

fn apply_field(task: &mut RawTask, key: &str, value: &str) {
    match key {
        "title" => {
            if task.title.is_empty() {
                task.title = value.to_string();
            }
        }
        "description" => append_text(&mut task.description, value),
        "duration" => task.duration = value.to_string(),
        "dependencies" => push_reference(task, value),
        "priority" => task.priority = Priority::from_label(value),
        "risks" => task.risks.extend(split_items(value)),
        _ => task.deliverables.extend(split_items(value)),
    }
}

/// Inline list values are separated by semicolons; commas stay inside items.
fn split_items(value: &str) -> Vec<String> {
    value
        .split(';')
        .map(clean_inline)
        .filter(|item| !item.is_empty() && !is_placeholder(item))
        .collect()
}

/// Keep a dependency entry whole; it is split into references when the plan
/// is resolved, after sibling titles are known.
fn push_reference(task: &mut RawTask, value: &str) {
    if !is_placeholder(value) {
        task.dependencies.push(value.to_string());
    }
}

fn is_number_list(line: &str) -> bool {
    let references = split_references(line);
    !references.is_empty()
        && references
            .iter()
            .all(|reference| reference_number(reference).is_some())
}

fn bullet_item(line: &str) -> Option<String> {
    BULLET_RE
        .captures(line)
        .map(|caps| clean_inline(&caps["item"]))
        .filter(|item| !item.is_empty())
}

fn append_text(target: &mut String, line: &str) {
    let line = line.trim();
    if line.is_empty() {
        return;
    }
    if !target.is_empty() {
        target.push(' ');
    }
    target.push_str(line);
}

fn append_to_last(items: &mut Vec<String>, line: &str) {
    match items.last_mut() {
        Some(last) => append_text(last, line),
        None => {
            let item = clean_inline(line);
            if !item.is_empty() && !is_placeholder(&item) {
                items.push(item);
            }
        }
    }
}
