//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::warn;

use crate::core::errors::{Result, TranslationError};

/// Default GLM API base URL
pub const DEFAULT_BASE_URL: &str = "https://open.bigmodel.cn/api/paas/v4";

/// Configuration for the address translator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslatorConfig {
    /// Value sent verbatim as the `Authorization` header
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// No timeout when unset; the transport default applies
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
            timeout_ms: None,
        }
    }
}

impl TranslatorConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("ZHIPU_API_KEY").unwrap_or_default();

        let base_url = std::env::var("ZHIPU_BASE_URL").unwrap_or_else(|_| default_base_url());

        let timeout_ms = match std::env::var("REQUEST_TIMEOUT_MS") {
            Ok(raw) => Some(raw.parse::<u64>().map_err(|e| TranslationError::Config {
                message: format!("REQUEST_TIMEOUT_MS: {}", e),
            })?),
            Err(_) => None,
        };

        Ok(Self {
            api_key,
            base_url,
            timeout_ms,
        })
    }

    /// Load from a JSON or YAML file, chosen by extension
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;

        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Ok(serde_json::from_str(&content)?),
            Some("yaml") | Some("yml") => Ok(serde_yaml::from_str(&content)?),
            other => Err(TranslationError::Config {
                message: format!(
                    "Unsupported config format: {}",
                    other.unwrap_or("<none>")
                ),
            }),
        }
    }

    /// Save configuration to a JSON file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.base_url.is_empty() {
            return Err(TranslationError::Config {
                message: "Base URL is required".to_string(),
            });
        }

        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(TranslationError::Config {
                message: format!("Base URL must be http(s): {}", self.base_url),
            });
        }

        if self.timeout_ms == Some(0) {
            return Err(TranslationError::Config {
                message: "timeout_ms must be greater than 0".to_string(),
            });
        }

        if !self.has_api_key() {
            warn!("No API key configured, the remote service will reject requests");
        }

        Ok(())
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }

    /// Full chat-completion endpoint
    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}
