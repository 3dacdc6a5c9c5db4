//! Service adapters: prompt compilation, credential resolution, and the HTTP
//! completion client.

pub mod credentials;
mod groq_client_http;
mod prompt_compiler;

pub use credentials::{API_KEY_ENV_VAR, CredentialSource, resolve_api_key};
pub use groq_client_http::HttpGroqClient;
pub use prompt_compiler::compile_prompt;
