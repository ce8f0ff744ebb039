#![allow(dead_code)]

use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use yokatlas_mcp::config::HelperConfig;
use yokatlas_mcp::provider::{DataProvider, ExternalCallResult, Payload};
use yokatlas_mcp::tools::{Operation, TranslatedQuery};
use yokatlas_mcp::{Result, YokatlasConfig, YokatlasError, YokatlasServer};

/// In-memory collaborator that records every query it receives.
pub struct RecordingProvider {
    calls: Mutex<Vec<(Operation, TranslatedQuery)>>,
    reply: Box<dyn Fn(Operation) -> Result<Payload> + Send + Sync>,
}

impl RecordingProvider {
    pub fn replying(reply: impl Fn(Operation) -> Result<Payload> + Send + Sync + 'static) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            reply: Box::new(reply),
        })
    }

    pub fn ok_json(value: serde_json::Value) -> Arc<Self> {
        Self::replying(move |_| Ok(Payload::Structured(value.clone())))
    }

    pub fn calls(&self) -> Vec<(Operation, TranslatedQuery)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last_query(&self) -> TranslatedQuery {
        self.calls().last().expect("provider was not called").1.clone()
    }
}

#[async_trait]
impl DataProvider for RecordingProvider {
    async fn invoke(&self, operation: Operation, query: &TranslatedQuery) -> Result<ExternalCallResult> {
        self.calls.lock().unwrap().push((operation, query.clone()));
        let stdout_payload = (self.reply)(operation)?;
        Ok(ExternalCallResult {
            stdout_payload,
            exit_status: 0,
            stderr_text: String::new(),
        })
    }
}

pub fn server_with(provider: Arc<RecordingProvider>) -> YokatlasServer {
    YokatlasServer::with_provider(YokatlasConfig::default(), provider).unwrap()
}

pub fn process_error(code: i32, stderr: &str) -> YokatlasError {
    YokatlasError::ExternalProcess {
        code,
        stderr: stderr.to_string(),
    }
}

/// A throwaway helper script run by `sh` in place of the Python helper.
/// `$1` is the operation name and `$2` the JSON arguments.
pub struct ShellHelper {
    _dir: tempfile::TempDir,
    pub path: PathBuf,
}

impl ShellHelper {
    pub fn new(body: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("helper.sh");
        std::fs::write(&path, body).unwrap();
        Self { _dir: dir, path }
    }

    pub fn config(&self) -> HelperConfig {
        HelperConfig {
            interpreter: "sh".to_string(),
            script_path: self.path.clone(),
            timeout_secs: 10,
            max_concurrent_calls: 4,
        }
    }
}
