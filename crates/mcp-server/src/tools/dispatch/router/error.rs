use super::super::{CallToolResult, Content};
use netpage_capture::SourceError;
use netpage_protocol::ErrorEnvelope;
use serde::Serialize;

pub(in crate::tools::dispatch) fn tool_error(
    code: &str,
    message: impl Into<String>,
    hint: Option<String>,
) -> CallToolResult {
    let envelope = ErrorEnvelope {
        code: code.to_string(),
        message: message.into(),
        hint: hint.filter(|hint| !hint.trim().is_empty()),
    };

    let mut text = format!("Error: {}", envelope.message);
    if let Some(hint) = envelope.hint.as_deref() {
        text.push_str("\nHint: ");
        text.push_str(hint);
    }

    let mut result = CallToolResult::error(vec![Content::text(text)]);
    result.structured_content = serde_json::to_value(&envelope).ok();
    result
}

pub(in crate::tools::dispatch) fn invalid_request(
    message: impl Into<String>,
    hint: Option<String>,
) -> CallToolResult {
    tool_error("invalid_request", message, hint)
}

pub(in crate::tools::dispatch) fn source_unavailable(err: &SourceError) -> CallToolResult {
    tool_error(
        "source_unavailable",
        err.to_string(),
        Some("Check that the capture log is readable and contains one JSON record per line.".into()),
    )
}

pub(in crate::tools::dispatch) fn attach_structured_content<T: Serialize>(
    mut result: CallToolResult,
    payload: &T,
    tool: &'static str,
) -> CallToolResult {
    match serde_json::to_value(payload) {
        Ok(value) => {
            result.structured_content = Some(value);
            result
        }
        Err(err) => tool_error(
            "internal",
            format!("failed to serialize {tool} structured_content ({err})"),
            None,
        ),
    }
}
