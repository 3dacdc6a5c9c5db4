//! Groq API configuration.

use serde::Deserialize;
use url::Url;

/// Connection and model parameters for the Groq chat-completion endpoint.
///
/// Deserialized from the optional `[api]` table of the config file; every
/// field has a default so a missing file yields a working configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct GroqApiConfig {
    /// Chat-completion endpoint URL.
    #[serde(default = "default_api_url")]
    pub api_url: Url,
    /// Model identifier.
    #[serde(default = "default_model")]
    pub model: String,
    /// Sampling temperature.
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Retry attempts after the first request fails transiently.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    /// Base delay between retries in milliseconds (doubles per attempt).
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
    /// Request timeout in seconds. `None` lets the call run to completion.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for GroqApiConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            model: default_model(),
            temperature: default_temperature(),
            max_retries: default_max_retries(),
            retry_delay_ms: default_retry_delay_ms(),
            timeout_secs: None,
        }
    }
}

fn default_api_url() -> Url {
    Url::parse("https://api.groq.com/openai/v1/chat/completions")
        .expect("default endpoint URL is valid")
}

fn default_model() -> String {
    "llama-3.3-70b-versatile".to_string()
}

fn default_temperature() -> f32 {
    0.7
}

fn default_max_retries() -> u32 {
    2
}

fn default_retry_delay_ms() -> u64 {
    500
}
