use super::dto::Payload;
use crate::error::{Result, YokatlasError};
use crate::tools::OutputMode;
use serde_json::Value;

/// Decodes the helper's standard output.
///
/// The helper prints `json.dumps(result)`, so text results usually arrive as
/// a JSON string literal and are unwrapped. A text-mode operation that answers
/// with an object (its in-band error report) keeps that object. Anything else,
/// including text that merely looks like a JSON scalar, is passed through.
pub(crate) fn decode_stdout(mode: OutputMode, raw: &str) -> Result<Payload> {
    let trimmed = raw.trim();
    match mode {
        OutputMode::Json => serde_json::from_str::<Value>(trimmed)
            .map(Payload::Structured)
            .map_err(|e| YokatlasError::MalformedOutput {
                detail: e.to_string(),
                raw: raw.to_string(),
            }),
        OutputMode::Text => match serde_json::from_str::<Value>(trimmed) {
            Ok(Value::String(text)) => Ok(Payload::Text(text)),
            Ok(object @ Value::Object(_)) => Ok(Payload::Structured(object)),
            _ => Ok(Payload::Text(raw.trim_end_matches(['\r', '\n']).to_string())),
        },
    }
}
