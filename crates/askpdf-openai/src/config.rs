//! OpenAI configuration

use serde::{Deserialize, Serialize};
use std::env;
use url::Url;

use askpdf_core::{Error, Result};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Configuration for the OpenAI client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAiConfig {
    pub api_key: String,
    pub base_url: String,
}

impl OpenAiConfig {
    /// Create configuration from environment variables.
    ///
    /// `.env` loading is the caller's job; this only reads the process
    /// environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Create configuration from any key/value source
    pub fn from_lookup<F>(get: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = get("OPENAI_API_KEY").filter(|key| !key.is_empty()).ok_or_else(|| {
            Error::Configuration("OPENAI_API_KEY environment variable not found".to_string())
        })?;

        let base_url = get("OPENAI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Self::with_base_url(api_key, base_url)
    }

    /// Create configuration with explicit values
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Create configuration against a custom endpoint, e.g. a proxy or a mock server
    pub fn with_base_url(api_key: String, base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        Url::parse(&base_url).map_err(|e| {
            Error::Configuration(format!("Invalid OPENAI_BASE_URL '{}': {}", base_url, e))
        })?;

        Ok(Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Full URL of an API endpoint below the base URL
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}
