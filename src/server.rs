use crate::config::YokatlasConfig;
use crate::error::{Result, YokatlasError};
use crate::mcp::dto::{Tool, ToolCall, ToolResponse};
use crate::mcp::envelope::{build_failure, build_success};
use crate::provider::{DataProvider, Payload, ProcessProvider};
use crate::tools::{self, Operation, SchemaRegistry, ToolArguments};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use std::time::Instant;
use tracing::Instrument;

/// Where a call was when it stopped. Every call ends in `Done` exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallStage {
    Received,
    Validating,
    Translating,
    CallingExternal,
    Enveloping,
    Done,
}

impl fmt::Display for CallStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CallStage::Received => "received",
            CallStage::Validating => "validating",
            CallStage::Translating => "translating",
            CallStage::CallingExternal => "calling_external",
            CallStage::Enveloping => "enveloping",
            CallStage::Done => "done",
        };
        f.write_str(label)
    }
}

pub struct YokatlasServer {
    config: YokatlasConfig,
    schemas: SchemaRegistry,
    provider: Arc<dyn DataProvider>,
}

impl YokatlasServer {
    pub fn new(config: YokatlasConfig) -> Result<Self> {
        let provider = Arc::new(ProcessProvider::new(&config.helper));
        Self::with_provider(config, provider)
    }

    pub fn with_provider(config: YokatlasConfig, provider: Arc<dyn DataProvider>) -> Result<Self> {
        Ok(Self {
            config,
            schemas: SchemaRegistry::new()?,
            provider,
        })
    }

    pub fn config(&self) -> &YokatlasConfig {
        &self.config
    }

    pub fn get_tools(&self) -> Vec<Tool> {
        Operation::ALL
            .into_iter()
            .map(|op| Tool {
                name: op.as_str().to_string(),
                description: op.description().to_string(),
                input_schema: op.input_schema(),
            })
            .collect()
    }

    /// Runs one tool call to completion. Never fails: errors at any stage
    /// come back as an `is_error` envelope.
    pub async fn handle_tool_call(&self, tool_call: ToolCall) -> ToolResponse {
        let span = tracing::info_span!("tool_call", tool = %tool_call.name);
        async move {
            let started = Instant::now();
            tracing::info!(stage = %CallStage::Received, "Handling tool call");

            let response = match self.execute(tool_call).await {
                Ok(payload) => {
                    tracing::debug!(stage = %CallStage::Enveloping, "Building success envelope");
                    build_success(&payload)
                }
                Err((stage, error)) => {
                    log_failure(stage, &error);
                    build_failure(&error)
                }
            };

            tracing::info!(
                stage = %CallStage::Done,
                elapsed_ms = started.elapsed().as_millis() as u64,
                is_error = response.is_error,
                "Tool call finished"
            );
            response
        }
        .instrument(span)
        .await
    }

    async fn execute(
        &self,
        tool_call: ToolCall,
    ) -> std::result::Result<Payload, (CallStage, YokatlasError)> {
        let at = |stage: CallStage| move |error: YokatlasError| (stage, error);

        let operation: Operation = tool_call.name.parse().map_err(at(CallStage::Validating))?;
        let arguments = match tool_call.arguments {
            Value::Null => Value::Object(Default::default()),
            other => other,
        };
        self.schemas
            .validate(operation, &arguments)
            .map_err(at(CallStage::Validating))?;
        let arguments =
            ToolArguments::parse(operation, arguments).map_err(at(CallStage::Validating))?;
        tracing::debug!(stage = %CallStage::Validating, "Arguments validated");

        let query = tools::translate(&arguments).map_err(at(CallStage::Translating))?;
        tracing::debug!(
            stage = %CallStage::Translating,
            query = %query.to_json_string().unwrap_or_default(),
            "Arguments translated"
        );

        let result = self
            .provider
            .invoke(operation, &query)
            .await
            .map_err(at(CallStage::CallingExternal))?;
        tracing::debug!(
            stage = %CallStage::CallingExternal,
            exit_status = result.exit_status,
            stderr = %result.stderr_text,
            "Python helper finished"
        );

        Ok(result.stdout_payload)
    }
}

fn log_failure(stage: CallStage, error: &YokatlasError) {
    match error {
        YokatlasError::MalformedOutput { detail, raw } => tracing::error!(
            %stage,
            kind = error.kind(),
            %detail,
            raw_output = %raw,
            "Tool call failed"
        ),
        YokatlasError::ExternalProcess { code, stderr } => tracing::error!(
            %stage,
            kind = error.kind(),
            code,
            %stderr,
            "Tool call failed"
        ),
        _ => tracing::error!(%stage, kind = error.kind(), error = %error, "Tool call failed"),
    }
}
