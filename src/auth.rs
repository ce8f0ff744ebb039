use crate::config::AuthConfig;
use axum::http::HeaderMap;

/// API-key gate for the HTTP transport. Stdio is never authenticated.
#[derive(Clone, Debug)]
pub struct ApiKeyAuth {
    enabled: bool,
    header_name: String,
    allowed: Vec<String>,
}

impl ApiKeyAuth {
    pub fn new(cfg: &AuthConfig) -> Self {
        Self {
            enabled: cfg.enabled,
            header_name: cfg.header_name.to_ascii_lowercase(),
            allowed: cfg.allowed_keys.clone(),
        }
    }

    pub fn header_name(&self) -> &str {
        &self.header_name
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn validate(&self, presented: Option<&str>) -> bool {
        if !self.enabled {
            return true;
        }
        match presented {
            Some(key) if !key.is_empty() => self
                .allowed
                .iter()
                .any(|allowed| constant_time_eq(allowed.as_bytes(), key.as_bytes())),
            _ => false,
        }
    }

    pub fn authorize(&self, headers: &HeaderMap) -> bool {
        let presented = headers
            .get(self.header_name.as_str())
            .and_then(|value| value.to_str().ok());
        self.validate(presented)
    }
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.len() == b.len() && a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
