//! Helpers for building tool response envelopes
//!
//! Successful results carry a single pretty-printed text block; failures
//! carry `Error: <message>` with the error flag set. No tool call is
//! allowed to escape the dispatcher as a raw exception.

use rmcp::model::{CallToolResult, Content};
use serde::Serialize;

/// Pretty-printed JSON success envelope.
///
/// A value that cannot be serialized degrades to the generic
/// "Unknown error" envelope instead of propagating.
pub fn json_success<T: Serialize>(data: &T) -> CallToolResult {
    match serde_json::to_string_pretty(data) {
        Ok(json) => CallToolResult::success(vec![Content::text(json)]),
        Err(_) => error_message("Unknown error"),
    }
}

/// Plain text success envelope.
pub fn text_success(text: impl Into<String>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text.into())])
}

/// Error envelope: `Error: <message>`, error flag set.
pub fn error_message(message: impl std::fmt::Display) -> CallToolResult {
    CallToolResult::error(vec![Content::text(format!("Error: {}", message))])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct TestData {
        name: String,
        value: i32,
    }

    #[test]
    fn test_json_success_is_pretty_printed() {
        let data = TestData {
            name: "test".to_string(),
            value: 42,
        };
        let result = json_success(&data);
        assert!(!result.is_error.unwrap_or(false));
        let text = &result.content[0].as_text().unwrap().text;
        assert_eq!(text, &serde_json::to_string_pretty(&data).unwrap());
    }

    #[test]
    fn test_text_success() {
        let result = text_success("Task task-1 deleted successfully");
        assert!(!result.is_error.unwrap_or(false));
        assert_eq!(
            result.content[0].as_text().unwrap().text,
            "Task task-1 deleted successfully"
        );
    }

    #[test]
    fn test_error_message_sets_flag_and_prefix() {
        let result = error_message("boom");
        assert!(result.is_error.unwrap_or(false));
        assert_eq!(result.content[0].as_text().unwrap().text, "Error: boom");
    }
}
