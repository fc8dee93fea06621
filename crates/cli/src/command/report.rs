use anyhow::{Context, Result};
use ops_devrev::normalize::PLACEHOLDER;
use ops_devrev::ProjectSummary;
use std::fmt::Write;

const RULE_WIDTH: usize = 120;
pub const JSON_MARKER: &str = "=== JSON OUTPUT ===";

/// Numbered human-readable status list followed by the JSON rows.
pub fn render(dashboard_name: &str, rows: &[ProjectSummary]) -> Result<String> {
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = String::new();

    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "{}", dashboard_name.to_uppercase());
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out);

    for (idx, row) in rows.iter().enumerate() {
        let _ = writeln!(
            out,
            "{}. {} - {}",
            idx + 1,
            row.id.as_deref().unwrap_or(PLACEHOLDER),
            row.title.as_deref().unwrap_or(PLACEHOLDER)
        );
        let _ = writeln!(out, "   Stage: {}", row.stage);
        let _ = writeln!(
            out,
            "   Current RAG: {} | Quarter RAG: {}",
            row.current_rag, row.quarter_rag
        );
        let _ = writeln!(out, "   Target Close: {}", row.target_close_date);
        let _ = writeln!(out, "   Last Modified: {}", row.last_modified);
        let _ = writeln!(out);
    }

    let json = ops_protocol::serialize_json(rows).context("serialize report rows")?;
    let _ = writeln!(out);
    let _ = writeln!(out, "{JSON_MARKER}");
    let _ = writeln!(out, "{json}");
    Ok(out)
}
