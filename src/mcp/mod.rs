pub mod dto;
pub mod envelope;
pub mod handler;

pub use dto::{ContentBlock, McpError, McpRequest, McpResponse, Tool, ToolCall, ToolResponse};
pub use envelope::{build_failure, build_success};
