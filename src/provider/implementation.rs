use super::dto::ExternalCallResult;
use super::helpers::decode_stdout;
use super::DataProvider;
use crate::config::HelperConfig;
use crate::error::{Result, YokatlasError};
use crate::tools::{Operation, TranslatedQuery};
use async_trait::async_trait;
use std::path::PathBuf;
use std::process::Stdio;
use std::sync::Arc;
use std::time::Duration;
use tokio::process::Command;
use tokio::sync::Semaphore;

/// Runs the YÖK Atlas Python helper once per call:
/// `<interpreter> <script> <operation> <json arguments>`.
#[derive(Clone)]
pub struct ProcessProvider {
    interpreter: String,
    script_path: PathBuf,
    timeout: Option<Duration>,
    permits: Option<Arc<Semaphore>>,
}

impl ProcessProvider {
    pub fn new(config: &HelperConfig) -> Self {
        let timeout = (config.timeout_secs > 0).then(|| config.timeout());
        let permits = (config.max_concurrent_calls > 0)
            .then(|| Arc::new(Semaphore::new(config.max_concurrent_calls)));
        Self {
            interpreter: config.interpreter.clone(),
            script_path: config.script_path.clone(),
            timeout,
            permits,
        }
    }

    fn command(&self, operation: Operation, arguments: &str) -> Command {
        let mut command = Command::new(&self.interpreter);
        command
            .arg(&self.script_path)
            .arg(operation.as_str())
            .arg(arguments)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        command
    }
}

#[async_trait]
impl DataProvider for ProcessProvider {
    async fn invoke(
        &self,
        operation: Operation,
        query: &TranslatedQuery,
    ) -> Result<ExternalCallResult> {
        let arguments = query.to_json_string()?;

        let script_is_file = tokio::fs::metadata(&self.script_path)
            .await
            .map(|meta| meta.is_file())
            .unwrap_or(false);
        if !script_is_file {
            return Err(YokatlasError::launch(format!(
                "helper script not found at {}",
                self.script_path.display()
            )));
        }

        let _permit = match &self.permits {
            Some(permits) => Some(
                Arc::clone(permits)
                    .acquire_owned()
                    .await
                    .map_err(|_| YokatlasError::internal("helper call limiter closed"))?,
            ),
            None => None,
        };

        tracing::debug!(
            interpreter = %self.interpreter,
            script = %self.script_path.display(),
            %operation,
            "Spawning Python helper"
        );

        let child = self.command(operation, &arguments).spawn().map_err(|e| {
            YokatlasError::launch(format!("could not start {}: {}", self.interpreter, e))
        })?;

        // Dropping the wait future on timeout drops the child, which kills it.
        let waited = child.wait_with_output();
        let output = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, waited)
                .await
                .map_err(|_| YokatlasError::Timeout {
                    seconds: limit.as_secs(),
                })?,
            None => waited.await,
        }
        .map_err(|e| YokatlasError::internal(format!("failed to collect helper output: {}", e)))?;

        let exit_status = output.status.code().unwrap_or(-1);
        let stderr_text = String::from_utf8_lossy(&output.stderr).trim().to_string();

        if !output.status.success() {
            return Err(YokatlasError::ExternalProcess {
                code: exit_status,
                stderr: stderr_text,
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stdout_payload = decode_stdout(operation.output_mode(), &stdout)?;

        Ok(ExternalCallResult {
            stdout_payload,
            exit_status,
            stderr_text,
        })
    }
}
