use super::super::{CallToolResult, Content};
use ops_protocol::ErrorEnvelope;
use ops_querybook::QuerybookError;
use serde_json::json;

pub(in crate::tools::dispatch) fn tool_error_envelope(
    text: String,
    error: ErrorEnvelope,
) -> CallToolResult {
    let mut result = CallToolResult::error(vec![Content::text(text)]);
    result.structured_content = Some(json!({ "error": error }));
    result
}

pub(in crate::tools::dispatch) fn unknown_tool(name: &str) -> CallToolResult {
    let message = format!("Unknown tool: {name}");
    tool_error_envelope(
        message.clone(),
        ErrorEnvelope::new("unknown_tool", message).with_details(json!({ "tool": name })),
    )
}

pub(in crate::tools::dispatch) fn invalid_request(
    tool: &str,
    message: impl Into<String>,
) -> CallToolResult {
    let message = message.into();
    tool_error_envelope(
        format!("Error: {message}"),
        ErrorEnvelope::new("invalid_request", message)
            .with_details(json!({ "tool": tool }))
            .with_hint("Check the tool's inputSchema for required arguments."),
    )
}

pub(in crate::tools::dispatch) fn internal_error(message: impl Into<String>) -> CallToolResult {
    let message = message.into();
    tool_error_envelope(
        format!("Error: {message}"),
        ErrorEnvelope::new("internal", message),
    )
}

pub(in crate::tools::dispatch) fn querybook_error(err: &QuerybookError) -> CallToolResult {
    let message = err.to_string();
    let mut envelope = ErrorEnvelope::new(err.code(), message.clone());
    match err {
        QuerybookError::Api { status, .. } => {
            envelope = envelope.with_details(json!({ "status": status }));
        }
        QuerybookError::ExecutionFailed { status } => {
            envelope = envelope.with_details(json!({ "status": status }));
        }
        QuerybookError::ExecutionTimedOut { status, attempts } => {
            envelope = envelope
                .with_details(json!({ "status": status, "attempts": attempts }))
                .with_hint("Poll get_query_execution_status for the execution instead.");
        }
        _ => {}
    }
    tool_error_envelope(format!("Error: {message}"), envelope)
}
