//! Dashboard normalization for raw DevRev parts.
//!
//! Every display field is resolved from an ordered list of candidate paths; the first
//! candidate holding a non-empty value wins, otherwise the field's placeholder is used.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use serde_json::Value;

pub const PLACEHOLDER: &str = "N/A";
pub const NO_UPDATE: &str = "No update available";

/// Path of object keys from the record root.
pub type FieldPath = &'static [&'static str];

pub const TITLE: &[FieldPath] = &[&["name"], &["title"]];
pub const STAGE: &[FieldPath] = &[
    &["stage_v2", "stage", "name"],
    &["custom_fields", "tnt__stage"],
];
pub const CURRENT_RAG: &[FieldPath] = &[
    &["custom_fields", "tnt__current_rag"],
    &["custom_fields", "current_rag"],
];
pub const QUARTER_RAG: &[FieldPath] = &[
    &["custom_fields", "tnt__quarter_rag"],
    &["custom_fields", "quarter_rag"],
];
pub const WEEKLY_UPDATE: &[FieldPath] = &[
    &["custom_fields", "tnt__weekly_update"],
    &["custom_fields", "weekly_update"],
    &["custom_fields", "latest_update"],
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectSummary {
    pub id: Option<String>,
    pub title: Option<String>,
    pub stage: String,
    pub current_rag: String,
    pub quarter_rag: String,
    pub target_close_date: String,
    pub weekly_update: String,
    pub last_modified: String,
    pub url: Option<String>,
    pub raw_data: Value,
}

/// Flattens a raw part into a dashboard row. `app_base` prefixes the part link.
pub fn summarize(record: Value, app_base: &str) -> ProjectSummary {
    let id = display_id(&record).map(str::to_string);
    let url = id
        .as_deref()
        .map(|id| format!("{}/parts/{id}", app_base.trim_end_matches('/')));

    ProjectSummary {
        title: first_present(&record, TITLE),
        stage: resolve_or(&record, STAGE, PLACEHOLDER),
        current_rag: resolve_or(&record, CURRENT_RAG, PLACEHOLDER),
        quarter_rag: resolve_or(&record, QUARTER_RAG, PLACEHOLDER),
        target_close_date: format_date(record.get("target_close_date")),
        weekly_update: resolve_or(&record, WEEKLY_UPDATE, NO_UPDATE),
        last_modified: format_date(record.get("modified_date")),
        id,
        url,
        raw_data: record,
    }
}

pub fn display_id(record: &Value) -> Option<&str> {
    record.get("display_id").and_then(Value::as_str)
}

/// Walks `path` through nested objects. Any missing key or non-object hop yields `None`.
pub fn lookup<'a>(record: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter().try_fold(record, |node, key| node.get(*key))
}

/// Text of the first candidate path holding a non-empty value.
pub fn first_present(record: &Value, candidates: &[FieldPath]) -> Option<String> {
    candidates
        .iter()
        .find_map(|path| lookup(record, path).and_then(present_text))
}

fn resolve_or(record: &Value, candidates: &[FieldPath], fallback: &str) -> String {
    first_present(record, candidates).unwrap_or_else(|| fallback.to_string())
}

// Empty strings, zero, false and null count as absent.
fn present_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::Bool(true) => Some("true".to_string()),
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::Number(n) => Some(n.to_string()),
        other => Some(other.to_string()),
    }
}

/// Renders a timestamp as its UTC calendar date (`YYYY-MM-DD`), or [`PLACEHOLDER`].
///
/// Accepts RFC 3339 strings, bare `YYYY-MM-DD` dates and epoch milliseconds.
pub fn format_date(value: Option<&Value>) -> String {
    parse_date(value)
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

fn parse_date(value: Option<&Value>) -> Option<NaiveDate> {
    match value? {
        Value::String(raw) => {
            let raw = raw.trim();
            if raw.is_empty() {
                return None;
            }
            DateTime::parse_from_rfc3339(raw)
                .map(|ts| ts.with_timezone(&Utc).date_naive())
                .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
                .ok()
        }
        Value::Number(n) => n
            .as_i64()
            .and_then(DateTime::<Utc>::from_timestamp_millis)
            .map(|ts| ts.date_naive()),
        _ => None,
    }
}
