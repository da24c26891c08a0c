//! JSON replies: an array of task objects, or an object with a `tasks` array.
//!
//! Models asked for a text layout still answer in JSON now and then,
//! usually inside a ```` ```json ```` fence. Field names follow the common
//! `name`/`duration`/`dependencies` vocabulary; scalar strings are accepted
//! wherever a list is expected.

use serde_json::{Map, Value};

use super::{RawResponse, RawTask, ResponseGrammar, clean_inline, is_placeholder};
use crate::models::Priority;

/// Grammar for JSON task lists.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonGrammar;

impl ResponseGrammar for JsonGrammar {
    fn name(&self) -> &'static str {
        "json"
    }

    fn scan(&self, text: &str) -> Option<RawResponse> {
        let value: Value = serde_json::from_str(extract_json(text)?).ok()?;

        let (items, overall) = match value {
            Value::Array(items) => (items, None),
            Value::Object(mut object) => {
                let overall = ["overall_risk_notes", "overall_risks", "risk_notes"]
                    .iter()
                    .find_map(|key| object.get(*key).and_then(Value::as_str).map(str::to_string));
                match object.remove("tasks") {
                    Some(Value::Array(items)) => (items, overall),
                    _ => return None,
                }
            }
            _ => return None,
        };

        let tasks: Vec<RawTask> = items
            .iter()
            .enumerate()
            .filter_map(|(index, item)| item.as_object().map(|object| raw_task(index, object)))
            .collect();

        if tasks.is_empty() {
            return None;
        }

        Some(RawResponse {
            tasks,
            overall_risk_notes: overall,
        })
    }
}

/// Locate the JSON document inside a reply.
///
/// Prefers a ```` ```json ```` fence, then any fence, then the outermost
/// bracketed span.
fn extract_json(text: &str) -> Option<&str> {
    if let Some((_, rest)) = text.split_once("```json") {
        return rest.split("```").next().map(str::trim);
    }
    if let Some((_, rest)) = text.split_once("```") {
        let body = rest.split("```").next()?;
        // Skip a language tag on the fence line.
        let body = match body.split_once('\n') {
            Some((tag, body)) if !tag.trim_start().starts_with(['[', '{']) => body,
            _ => body,
        };
        return Some(body.trim());
    }

    let start = text.find(['[', '{'])?;
    let end = text.rfind([']', '}'])?;
    (end > start).then(|| text[start..=end].trim())
}

fn raw_task(index: usize, object: &Map<String, Value>) -> RawTask {
    let get = |names: &[&str]| field(object, names);
    let text = |names: &[&str]| get(names).map(value_text).unwrap_or_default();

    let number = get(&["id", "number", "task_number"])
        .and_then(|value| match value {
            Value::Number(n) => n.as_u64().and_then(|n| usize::try_from(n).ok()),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        })
        .or(Some(index + 1));

    let dependencies = match get(&["dependencies", "depends_on", "prerequisites"]) {
        Some(Value::Array(items)) => items.iter().map(value_text).collect(),
        Some(value) => vec![value_text(value)],
        None => Vec::new(),
    }
    .into_iter()
    .map(|entry| clean_inline(&entry))
    .filter(|entry| !is_placeholder(entry))
    .collect();

    RawTask {
        number,
        title: clean_inline(&text(&["name", "title", "task"])),
        description: text(&["description", "details"]),
        duration: text(&["duration", "duration_estimate", "estimate"]),
        dependencies,
        priority: get(&["priority"])
            .map(value_text)
            .and_then(|label| Priority::from_label(&label)),
        risks: get(&["risks", "risk"]).map(value_items).unwrap_or_default(),
        deliverables: get(&["deliverables", "outputs", "deliverable"])
            .map(value_items)
            .unwrap_or_default(),
    }
}

/// First of several alternative keys present in the object.
fn field<'a>(object: &'a Map<String, Value>, names: &[&str]) -> Option<&'a Value> {
    names.iter().find_map(|name| object.get(*name))
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.trim().to_string(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn value_items(value: &Value) -> Vec<String> {
    let items: Vec<String> = match value {
        Value::Array(items) => items.iter().map(value_text).collect(),
        other => vec![value_text(other)],
    };
    items
        .into_iter()
        .map(|item| clean_inline(&item))
        .filter(|item| !item.is_empty() && !is_placeholder(item))
        .collect()
}
