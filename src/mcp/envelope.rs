use super::dto::{ContentBlock, ToolResponse};
use crate::error::YokatlasError;
use crate::provider::Payload;
use serde_json::{json, Value};

pub fn build_success(payload: &Payload) -> ToolResponse {
    let text = match payload {
        Payload::Structured(value) => pretty(value),
        Payload::Text(text) => text.clone(),
    };
    single_block(text, false)
}

/// Only the error's summary reaches the caller; details stay in the log.
pub fn build_failure(error: &YokatlasError) -> ToolResponse {
    single_block(pretty(&json!({ "error": error.to_string() })), true)
}

fn single_block(text: String, is_error: bool) -> ToolResponse {
    ToolResponse {
        content: vec![ContentBlock::Text { text }],
        is_error,
    }
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
