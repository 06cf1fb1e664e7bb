//! Display model for an execution trace.
//!
//! Steps are open records, so nothing here destructures known fields: every
//! block lists every key the backend sent, in the order it sent them.

use chat_types::TraceStep;
use serde_json::Value;

/// Keys tried, in order, for a block's title. Presentational only.
const TITLE_KEYS: [&str; 4] = ["step", "name", "type", "tool"];

/// Longest title suffix taken from a step before it is cut.
const MAX_TITLE_CHARS: usize = 60;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceField {
    pub key: String,
    pub value: String,
    /// Pretty JSON or multi-line text, rendered preformatted.
    pub block: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceBlock {
    /// 1-based position in the trace.
    pub index: usize,
    pub title: String,
    pub fields: Vec<TraceField>,
    /// Structural serialization of the whole record.
    pub raw: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracePresentation {
    pub step_count: usize,
    pub blocks: Vec<TraceBlock>,
}

impl TracePresentation {
    pub fn label(&self, expanded: bool) -> String {
        let marker = if expanded { "▼" } else { "▶" };
        format!("{marker} Execution trace ({} steps)", self.step_count)
    }
}

/// Build the display model for `steps`. Nothing to show (no control at all)
/// when the trace is absent or empty.
pub fn present(steps: Option<&[TraceStep]>) -> Option<TracePresentation> {
    let steps = steps.filter(|s| !s.is_empty())?;
    let blocks = steps
        .iter()
        .enumerate()
        .map(|(i, step)| present_step(i + 1, step))
        .collect();
    Some(TracePresentation {
        step_count: steps.len(),
        blocks,
    })
}

fn present_step(index: usize, step: &TraceStep) -> TraceBlock {
    let fields = step
        .iter()
        .map(|(key, value)| {
            let value = render_value(value);
            TraceField {
                key: key.clone(),
                block: value.contains('\n'),
                value,
            }
        })
        .collect();

    TraceBlock {
        index,
        title: step_title(index, step),
        fields,
        raw: pretty_json(&step.to_value()),
    }
}

fn step_title(index: usize, step: &TraceStep) -> String {
    let summary = TITLE_KEYS
        .iter()
        .filter_map(|key| step.get(key).and_then(Value::as_str))
        .map(str::trim)
        .find(|s| !s.is_empty());

    match summary {
        Some(summary) => format!("Step {index}: {}", truncate_chars(summary, MAX_TITLE_CHARS)),
        None => format!("Step {index}"),
    }
}

/// Strings are shown as-is unless they hold a JSON object or array, which is
/// pretty-printed. Everything else is pretty JSON.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::String(raw) => decode_embedded_json(raw)
            .map(|decoded| pretty_json(&decoded))
            .unwrap_or_else(|| raw.clone()),
        other => pretty_json(other),
    }
}

fn decode_embedded_json(raw: &str) -> Option<Value> {
    let trimmed = raw.trim_start();
    if !(trimmed.starts_with('{') || trimmed.starts_with('[')) {
        return None;
    }
    serde_json::from_str::<Value>(raw)
        .ok()
        .filter(|v| v.is_object() || v.is_array())
}

pub fn pretty_json(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        _ => serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string()),
    }
}

fn truncate_chars(text: &str, max: usize) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(max).collect();
    if chars.next().is_some() {
        format!("{head}…")
    } else {
        head
    }
}

/// Open/closed state of one trace control. Purely local to the view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraceToggle {
    expanded: bool,
    raw: bool,
}

impl TraceToggle {
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Whether expanded blocks show the raw record instead of key/value rows.
    pub fn shows_raw(&self) -> bool {
        self.raw
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    pub fn toggle_raw(&mut self) {
        self.raw = !self.raw;
    }
}
