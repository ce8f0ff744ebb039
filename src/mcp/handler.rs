use super::dto::{McpRequest, McpResponse, ToolCall};
use crate::server::YokatlasServer;
use serde_json::{json, Value};

pub const PROTOCOL_VERSION: &str = "2024-11-05";

/// Dispatches one JSON-RPC request. Notifications get no response.
pub async fn handle_request(server: &YokatlasServer, request: McpRequest) -> Option<McpResponse> {
    if request.method.starts_with("notifications/") {
        tracing::debug!("Notification received: {}", request.method);
        return None;
    }

    let response = match request.method.as_str() {
        "initialize" => McpResponse::success(
            request.id,
            json!({
                "protocolVersion": PROTOCOL_VERSION,
                "capabilities": { "tools": {} },
                "serverInfo": {
                    "name": env!("CARGO_PKG_NAME"),
                    "version": env!("CARGO_PKG_VERSION")
                }
            }),
        ),
        "tools/list" => McpResponse::success(request.id, json!({ "tools": server.get_tools() })),
        "tools/call" => match request.params {
            Some(params) => match serde_json::from_value::<ToolCall>(params) {
                Ok(tool_call) => {
                    let result = server.handle_tool_call(tool_call).await;
                    match serde_json::to_value(result) {
                        Ok(value) => McpResponse::success(request.id, value),
                        Err(e) => McpResponse::failure(
                            request.id,
                            -32603,
                            format!("Failed to encode tool result: {}", e),
                        ),
                    }
                }
                Err(_) => McpResponse::failure(request.id, -32602, "Invalid tool call parameters"),
            },
            None => McpResponse::failure(request.id, -32602, "Missing parameters"),
        },
        "ping" => McpResponse::success(request.id, json!({})),
        _ => McpResponse::failure(
            request.id,
            -32601,
            format!("Method not found: {}", request.method),
        ),
    };

    Some(response)
}

/// Response for a line that is not a JSON-RPC request at all.
pub fn parse_error(details: impl std::fmt::Display) -> McpResponse {
    let mut response = McpResponse::failure(None, -32700, "Parse error");
    if let Some(error) = response.error.as_mut() {
        error.data = Some(json!({ "details": details.to_string() }));
    }
    response
}

/// Response for valid JSON that is not a JSON-RPC request object.
pub fn invalid_request(id: Option<Value>, details: impl std::fmt::Display) -> McpResponse {
    let mut response = McpResponse::failure(id, -32600, "Invalid Request");
    if let Some(error) = response.error.as_mut() {
        error.data = Some(json!({ "details": details.to_string() }));
    }
    response
}

/// Decodes one transport frame, distinguishing unparseable JSON from JSON
/// that does not form a request.
pub fn decode_request(frame: &str) -> std::result::Result<McpRequest, McpResponse> {
    let value: Value = serde_json::from_str(frame).map_err(parse_error)?;
    let id = value.get("id").cloned().filter(|id| !id.is_null());
    serde_json::from_value(value).map_err(|e| invalid_request(id, e))
}
