use serde_json::Value;

/// What the helper printed on standard output, decoded per the operation's
/// output mode.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Structured(Value),
    Text(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExternalCallResult {
    pub stdout_payload: Payload,
    pub exit_status: i32,
    pub stderr_text: String,
}
