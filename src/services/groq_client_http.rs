//! Groq chat-completion client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{AppError, GroqApiConfig};
use crate::ports::{CompletionClient, CompletionRequest, CompletionResponse};
use crate::services::credentials::{self, CredentialSource};

/// HTTP client for the Groq OpenAI-compatible chat-completion API.
#[derive(Clone)]
pub struct HttpGroqClient {
    api_key: String,
    api_url: Url,
    model: String,
    temperature: f32,
    max_retries: u32,
    retry_delay_ms: u64,
    client: Client,
}

impl std::fmt::Debug for HttpGroqClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpGroqClient")
            .field("api_url", &self.api_url)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("max_retries", &self.max_retries)
            .field("retry_delay_ms", &self.retry_delay_ms)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl HttpGroqClient {
    /// Create a new HTTP client with the given API key and configuration.
    pub fn new(api_key: String, config: &GroqApiConfig) -> Result<Self, AppError> {
        // reqwest's blocking client defaults to a 30s timeout; the service
        // contract is no client-side timeout unless one is configured.
        let timeout = config.timeout_secs.map(Duration::from_secs);
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            api_key,
            api_url: config.api_url.clone(),
            model: config.model.clone(),
            temperature: config.temperature,
            max_retries: config.max_retries,
            retry_delay_ms: config.retry_delay_ms,
            client,
        })
    }

    /// Create from the `GROQ_API_KEY` environment variable with default configuration.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_env_with_config(&GroqApiConfig::default())
    }

    /// Create from the `GROQ_API_KEY` environment variable with custom configuration.
    pub fn from_env_with_config(config: &GroqApiConfig) -> Result<Self, AppError> {
        let api_key = credentials::resolve_api_key(None, CredentialSource::ExplicitThenEnv)?;
        Self::new(api_key, config)
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionPayload {
    model: String,
    temperature: f32,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionReply {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

impl CompletionClient for HttpGroqClient {
    fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AppError> {
        let payload = ChatCompletionPayload {
            model: self.model.clone(),
            temperature: self.temperature,
            messages: vec![
                ChatMessage { role: "system".to_string(), content: request.system },
                ChatMessage { role: "user".to_string(), content: request.user },
            ],
        };

        let mut last_error = None;
        // max_retries counts attempts after the first one.
        let max_attempts = self.max_retries + 1;

        for attempt in 0..max_attempts {
            if attempt > 0 {
                // Exponential backoff: base * 2^(attempt-1)
                let delay = self.retry_delay_ms * 2_u64.pow(attempt.saturating_sub(1));
                std::thread::sleep(Duration::from_millis(delay));
                eprintln!("Retrying... (attempt {}/{})", attempt + 1, max_attempts);
            }

            match self.send_request(&payload) {
                Ok(response) => return Ok(response),
                Err(e) => {
                    if Self::is_retryable(&e) {
                        last_error = Some(e);
                        continue;
                    }
                    return Err(e);
                }
            }
        }

        Err(last_error
            .unwrap_or_else(|| AppError::Service("Request failed after all retries".into())))
    }
}

impl HttpGroqClient {
    fn send_request(&self, payload: &ChatCompletionPayload) -> Result<CompletionResponse, AppError> {
        let response = self
            .client
            .post(self.api_url.clone())
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(CONTENT_TYPE, "application/json")
            .json(payload)
            .send()
            .map_err(|e| AppError::Service(format!("HTTP request failed: {}", e)))?;

        let status = response.status();

        if status.is_success() {
            let reply: ChatCompletionReply = response
                .json()
                .map_err(|e| AppError::Service(format!("Failed to parse response: {}", e)))?;

            let text = reply
                .choices
                .into_iter()
                .next()
                .map(|choice| choice.message.content)
                .ok_or_else(|| AppError::Service("No completion choices in response".into()))?;

            Ok(CompletionResponse { text })
        } else if status.as_u16() == 401 || status.as_u16() == 403 {
            let error_text = response.text().unwrap_or_else(|_| "Unknown error".to_string());
            Err(AppError::CredentialRejected(format!("({}) {}", status.as_u16(), error_text)))
        } else if status.as_u16() == 429 {
            Err(AppError::Service("Rate limited (429)".into()))
        } else if status.is_server_error() {
            Err(AppError::Service(format!("Server error ({})", status.as_u16())))
        } else {
            let error_text = response.text().unwrap_or_else(|_| "Unknown error".to_string());
            Err(AppError::Service(format!("API error ({}): {}", status.as_u16(), error_text)))
        }
    }

    fn is_retryable(error: &AppError) -> bool {
        match error {
            AppError::Service(msg) => {
                msg.contains("429")
                    || msg.contains("Server error")
                    || msg.contains("HTTP request failed")
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;

    fn test_config(server: &mockito::Server) -> GroqApiConfig {
        GroqApiConfig {
            api_url: Url::parse(&server.url()).unwrap(),
            retry_delay_ms: 1,
            ..Default::default()
        }
    }

    fn test_request() -> CompletionRequest {
        CompletionRequest { system: "sys".to_string(), user: "write about yoga".to_string() }
    }

    #[test]
    fn complete_returns_raw_text_unmodified() {
        let mut server = mockito::Server::new();
        let _m = server
            .mock("POST", "/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "choices": [{"message": {"role": "assistant", "content": "  \"Try yoga!\" \n"}}]
                })
                .to_string(),
            )
            .create();

        let client = HttpGroqClient::new("gsk-fake".to_string(), &test_config(&server)).unwrap();
        let response = client.complete(test_request()).unwrap();
        // No trimming, no quote-stripping.
        assert_eq!(response.text, "  \"Try yoga!\" \n");
    }

    #[test]
    fn complete_sends_bearer_auth_and_chat_payload() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/")
            .match_header("authorization", "Bearer gsk-fake")
            .match_header("content-type", "application/json")
            .match_body(Matcher::PartialJson(json!({
                "model": "llama-3.3-70b-versatile",
                "temperature": 0.7,
                "messages": [
                    {"role": "system", "content": "sys"},
                    {"role": "user", "content": "write about yoga"}
                ]
            })))
            .with_status(200)
            .with_body(r#"{"choices": [{"message": {"role": "assistant", "content": "ok"}}]}"#)
            .create();

        let client = HttpGroqClient::new("gsk-fake".to_string(), &test_config(&server)).unwrap();
        client.complete(test_request()).unwrap();
        mock.assert();
    }

    #[test]
    fn complete_retries_on_500_then_exhausts() {
        let mut server = mockito::Server::new();
        // Default max_retries is 2: one initial attempt plus two retries.
        let mock = server.mock("POST", "/").with_status(500).expect(3).create();

        let client = HttpGroqClient::new("gsk-fake".to_string(), &test_config(&server)).unwrap();
        let result = client.complete(test_request());
        assert!(matches!(result, Err(AppError::Service(_))));
        mock.assert();
    }

    #[test]
    fn complete_recovers_when_a_retry_succeeds() {
        let mut server = mockito::Server::new();
        let failing = server.mock("POST", "/").with_status(429).expect(1).create();
        let succeeding = server
            .mock("POST", "/")
            .with_status(200)
            .with_body(r#"{"choices": [{"message": {"role": "assistant", "content": "ok"}}]}"#)
            .expect(1)
            .create();

        let client = HttpGroqClient::new("gsk-fake".to_string(), &test_config(&server)).unwrap();
        let response = client.complete(test_request()).unwrap();
        assert_eq!(response.text, "ok");
        failing.assert();
        succeeding.assert();
    }

    #[test]
    fn complete_fails_fast_on_400() {
        let mut server = mockito::Server::new();
        let mock =
            server.mock("POST", "/").with_status(400).with_body("Bad Request").expect(1).create();

        let client = HttpGroqClient::new("gsk-fake".to_string(), &test_config(&server)).unwrap();
        let result = client.complete(test_request());
        assert!(matches!(result, Err(AppError::Service(_))));
        mock.assert();
    }

    #[test]
    fn complete_reports_rejected_credential_without_retrying() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/")
            .with_status(401)
            .with_body("Invalid API Key")
            .expect(1)
            .create();

        let client = HttpGroqClient::new("gsk-bad".to_string(), &test_config(&server)).unwrap();
        let result = client.complete(test_request());
        assert!(matches!(result, Err(AppError::CredentialRejected(_))));
        mock.assert();
    }

    #[test]
    fn empty_choices_is_a_service_error() {
        let mut server = mockito::Server::new();
        let _m = server.mock("POST", "/").with_status(200).with_body(r#"{"choices": []}"#).create();

        let client = HttpGroqClient::new("gsk-fake".to_string(), &test_config(&server)).unwrap();
        let result = client.complete(test_request());
        assert!(matches!(result, Err(AppError::Service(_))));
    }

    #[test]
    fn debug_output_redacts_the_api_key() {
        let config = GroqApiConfig::default();
        let client = HttpGroqClient::new("gsk-secret".to_string(), &config).unwrap();
        let debug = format!("{:?}", client);
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("gsk-secret"));
    }
}
