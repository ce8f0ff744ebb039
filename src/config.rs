use crate::error::{Result, YokatlasError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YokatlasConfig {
    pub server: ServerConfig,
    pub helper: HelperConfig,
    pub logging: LoggingConfig,
    pub auth: AuthConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub log_level: String,
    pub transport: String, // "stdio", "http"
}

/// How the external data-access helper is launched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HelperConfig {
    pub interpreter: String,
    pub script_path: PathBuf,
    pub timeout_secs: u64,
    /// 0 disables the cap.
    pub max_concurrent_calls: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub directory: PathBuf,
    pub file_prefix: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    pub enabled: bool,
    pub allowed_keys: Vec<String>,
    pub header_name: String,
}

impl HelperConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for YokatlasConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                port: 8080,
                log_level: "info".to_string(),
                transport: "stdio".to_string(),
            },
            helper: HelperConfig {
                interpreter: "python3".to_string(),
                script_path: PathBuf::from("python_helpers/yokatlas_helper.py"),
                timeout_secs: 120,
                max_concurrent_calls: 8,
            },
            logging: LoggingConfig {
                directory: PathBuf::from("logs"),
                file_prefix: "yokatlas-mcp.log".to_string(),
            },
            auth: AuthConfig {
                enabled: false,
                allowed_keys: vec![],
                header_name: "x-api-key".to_string(),
            },
        }
    }
}

impl YokatlasConfig {
    pub fn from_env() -> Result<Self> {
        let base = match std::env::var("YOKATLAS_MCP_CONFIG") {
            Ok(path) if !path.trim().is_empty() => Self::from_file(&path)?,
            _ => Self::default(),
        };
        base.with_env_overrides(|key| std::env::var(key).ok())
    }

    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            YokatlasError::config_error(format!("Failed to read config file: {}", e))
        })?;

        let config: YokatlasConfig = toml::from_str(&content).map_err(|e| {
            YokatlasError::config_error(format!("Failed to parse config file: {}", e))
        })?;

        Ok(config)
    }

    /// Applies `YOKATLAS_*` overrides read through `lookup`.
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup("YOKATLAS_MCP_PORT") {
            self.server.port = parse_number(&port, "YOKATLAS_MCP_PORT")?;
        }

        if let Some(log_level) = lookup("YOKATLAS_MCP_LOG_LEVEL") {
            self.server.log_level = log_level;
        }

        if let Some(transport) = lookup("YOKATLAS_MCP_TRANSPORT") {
            self.server.transport = transport;
        }

        if let Some(interpreter) = lookup("YOKATLAS_PYTHON") {
            if !interpreter.trim().is_empty() {
                self.helper.interpreter = interpreter;
            }
        }
        if let Some(script) = lookup("YOKATLAS_HELPER_SCRIPT") {
            if !script.trim().is_empty() {
                self.helper.script_path = PathBuf::from(script);
            }
        }
        if let Some(timeout) = lookup("YOKATLAS_CALL_TIMEOUT_SECS") {
            self.helper.timeout_secs = parse_number(&timeout, "YOKATLAS_CALL_TIMEOUT_SECS")?;
        }
        if let Some(cap) = lookup("YOKATLAS_MAX_CONCURRENT_CALLS") {
            self.helper.max_concurrent_calls =
                parse_number(&cap, "YOKATLAS_MAX_CONCURRENT_CALLS")?;
        }

        if let Some(dir) = lookup("YOKATLAS_LOG_DIR") {
            self.logging.directory = PathBuf::from(dir);
        }
        if let Some(prefix) = lookup("YOKATLAS_LOG_FILE_PREFIX") {
            self.logging.file_prefix = prefix;
        }

        // Auth configuration
        if let Some(enabled) = lookup("YOKATLAS_MCP_AUTH_ENABLED") {
            self.auth.enabled = matches!(enabled.as_str(), "1" | "true" | "TRUE" | "yes" | "on");
        }
        if let Some(keys) = lookup("YOKATLAS_MCP_API_KEYS") {
            let list = keys
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>();
            if !list.is_empty() {
                self.auth.allowed_keys = list;
            }
        }
        if let Some(header_name) = lookup("YOKATLAS_MCP_AUTH_HEADER") {
            if !header_name.trim().is_empty() {
                self.auth.header_name = header_name;
            }
        }

        Ok(self)
    }
}

fn parse_number<T: std::str::FromStr>(value: &str, var: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| YokatlasError::config_error(format!("Invalid {}", var)))
}
