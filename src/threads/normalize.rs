//! Turns the loosely-typed `threads` list of a configuration into [`ThreadGroup`]s.
//!
//! All defaulting lives here. Two entry shapes are accepted and may be mixed:
//!
//! - `{color, paths: [{start, end}, ...]}`
//! - `{color, start, end}` (legacy single segment)
//!
//! Missing `start`/`end` become `(0, 0)` and a missing `color` becomes `black`.
//! Nothing in this module fails.

use serde_json::Value;

use crate::{
    foundation::core::GridPoint,
    threads::model::{DEFAULT_THREAD_COLOR, PathSegment, ThreadGroup, is_skip_color},
};

/// Normalize the `threads` key of a loaded configuration document.
///
/// A document without a `threads` sequence has no threads.
pub fn threads_from_document(doc: &Value) -> Vec<ThreadGroup> {
    match doc.get("threads") {
        Some(Value::Array(entries)) => normalize_threads(entries),
        Some(Value::Null) | None => Vec::new(),
        Some(other) => {
            tracing::warn!(kind = value_kind(other), "`threads` is not a sequence; ignoring");
            Vec::new()
        }
    }
}

/// Normalize raw thread entries, preserving their order.
pub fn normalize_threads(entries: &[Value]) -> Vec<ThreadGroup> {
    entries
        .iter()
        .enumerate()
        .filter_map(|(idx, entry)| {
            let group = normalize_entry(entry);
            if group.is_none() {
                tracing::warn!(
                    index = idx,
                    kind = value_kind(entry),
                    "thread entry is not a mapping; skipping"
                );
            }
            group
        })
        .collect()
}

fn normalize_entry(entry: &Value) -> Option<ThreadGroup> {
    let map = entry.as_object()?;
    let color = entry_color(map.get("color"));

    // Raw (start, end) values, one pair per segment.
    let raw_segments: Vec<(Option<&Value>, Option<&Value>)> = match map.get("paths") {
        Some(paths) => match paths.as_array() {
            Some(items) => items
                .iter()
                .filter_map(|item| match item.as_object() {
                    Some(p) => Some((p.get("start"), p.get("end"))),
                    None => {
                        tracing::warn!(kind = value_kind(item), "path is not a mapping; skipping");
                        None
                    }
                })
                .collect(),
            None => {
                tracing::warn!(kind = value_kind(paths), "`paths` is not a sequence; ignoring");
                Vec::new()
            }
        },
        None => vec![(map.get("start"), map.get("end"))],
    };

    if is_skip_color(&color) {
        let points = raw_segments
            .iter()
            .flat_map(|(start, end)| [*start, *end])
            .filter_map(coerce_endpoint)
            .collect();
        return Some(ThreadGroup::EraseRegion { points });
    }

    let paths = raw_segments
        .iter()
        .filter_map(|(start, end)| {
            match (coerce_endpoint(*start), coerce_endpoint(*end)) {
                (Some(start), Some(end)) => Some(PathSegment { start, end }),
                _ => {
                    tracing::warn!(color = %color, "path endpoint is not a grid coordinate; skipping");
                    None
                }
            }
        })
        .collect();

    Some(ThreadGroup::Drawable { color, paths })
}

fn entry_color(raw: Option<&Value>) -> String {
    match raw {
        Some(Value::String(s)) => s.clone(),
        None | Some(Value::Null) => DEFAULT_THREAD_COLOR.to_owned(),
        Some(other) => {
            tracing::warn!(kind = value_kind(other), "thread color is not a string; using black");
            DEFAULT_THREAD_COLOR.to_owned()
        }
    }
}

/// Coerce a `start`/`end` value. Absent (or null) means the origin; a value that is
/// present but not a coordinate pair yields `None`.
fn coerce_endpoint(raw: Option<&Value>) -> Option<GridPoint> {
    match raw {
        None | Some(Value::Null) => Some(GridPoint::ORIGIN),
        Some(Value::Array(items)) if items.len() >= 2 => {
            let x = coerce_int(&items[0])?;
            let y = coerce_int(&items[1])?;
            Some(GridPoint { x, y })
        }
        Some(_) => None,
    }
}

/// Integer coercion: integers, floats (truncated), booleans and integer strings.
pub(crate) fn coerce_int(v: &Value) -> Option<i64> {
    match v {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.abs() < i64::MAX as f64)
                .map(|f| f.trunc() as i64)
        }),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        Value::Bool(b) => Some(i64::from(*b)),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn value_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "sequence",
        Value::Object(_) => "mapping",
    }
}

#[cfg(test)]
#[path = "../../tests/unit/threads/normalize.rs"]
mod tests;
