use thiserror::Error;

pub type Result<T> = std::result::Result<T, YokatlasError>;

#[derive(Error, Debug)]
pub enum YokatlasError {
    #[error("Invalid argument '{field}': {message}")]
    Validation { field: String, message: String },

    #[error("Failed to launch Python helper: {0}")]
    ProcessLaunch(String),

    #[error("Python process exited with code {code}: {stderr}")]
    ExternalProcess { code: i32, stderr: String },

    /// `raw` is kept for the diagnostics log and never shown to the caller.
    #[error("Failed to parse Python output: {detail}")]
    MalformedOutput { detail: String, raw: String },

    #[error("Python process timed out after {seconds}s")]
    Timeout { seconds: u64 },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl YokatlasError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        YokatlasError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn launch(msg: impl Into<String>) -> Self {
        YokatlasError::ProcessLaunch(msg.into())
    }

    pub fn config_error(msg: impl Into<String>) -> Self {
        YokatlasError::ConfigError(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        YokatlasError::Internal(msg.into())
    }

    /// Short label used in lifecycle log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            YokatlasError::Validation { .. } => "validation",
            YokatlasError::ProcessLaunch(_) => "process_launch",
            YokatlasError::ExternalProcess { .. } => "external_process",
            YokatlasError::MalformedOutput { .. } => "malformed_output",
            YokatlasError::Timeout { .. } => "timeout",
            YokatlasError::SerializationError(_) => "serialization",
            YokatlasError::ConfigError(_) => "config",
            YokatlasError::Internal(_) => "internal",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn external_process_message_carries_code_and_stderr() {
        let err = YokatlasError::ExternalProcess {
            code: 1,
            stderr: "program not found".into(),
        };
        assert_eq!(
            err.to_string(),
            "Python process exited with code 1: program not found"
        );
    }

    #[test]
    fn malformed_output_hides_raw_text() {
        let err = YokatlasError::MalformedOutput {
            detail: "expected value at line 1 column 1".into(),
            raw: "Traceback (most recent call last)".into(),
        };
        assert!(!err.to_string().contains("Traceback"));
    }
}
