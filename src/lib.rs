//! copygen: compile content-generation parameters into a chat prompt and send
//! it to the Groq completion service.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

pub use app::commands::generate::GenerateOutcome;
pub use domain::{
    AppError, Audience, CompiledPrompt, GenerationRequest, GroqApiConfig, Length, Platform, Tone,
};
pub use ports::{CompletionClient, CompletionRequest, CompletionResponse};
pub use services::{API_KEY_ENV_VAR, CredentialSource, HttpGroqClient, resolve_api_key};

/// Compile a generation request into its chat prompt without sending it.
pub fn compile_prompt(request: &GenerationRequest) -> Result<CompiledPrompt, AppError> {
    services::compile_prompt(request)
}

/// Generate content for a request using the given key and configuration.
///
/// Blocking: the call runs until the service responds, fails, or the
/// configured retries are exhausted. Returns the model's raw text.
pub fn generate(
    request: &GenerationRequest,
    api_key: &str,
    config: &GroqApiConfig,
) -> Result<String, AppError> {
    let client = HttpGroqClient::new(api_key.to_string(), config)?;
    let outcome = app::commands::generate::execute(request, &client)?;
    Ok(outcome.text)
}
