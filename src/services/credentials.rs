//! API key resolution.
//!
//! The key is resolved to plain data up front and passed into the client
//! constructor; nothing here mutates process-wide state, and no network call
//! happens until a key has been resolved.

use std::env;

use crate::domain::AppError;

/// Environment variable consulted as the fallback credential source.
pub const API_KEY_ENV_VAR: &str = "GROQ_API_KEY";

/// Where the API key may come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CredentialSource {
    /// Explicitly supplied key first, then the `GROQ_API_KEY` environment
    /// variable.
    #[default]
    ExplicitThenEnv,
    /// Explicitly supplied key only; the environment is ignored.
    ExplicitOnly,
}

/// Resolve the API key from the configured sources.
///
/// A blank explicit key counts as absent, matching the behavior of an empty
/// input field. Returns [`AppError::MissingApiKey`] when no source yields a
/// usable key.
pub fn resolve_api_key(
    explicit: Option<&str>,
    source: CredentialSource,
) -> Result<String, AppError> {
    if let Some(key) = explicit
        && !key.trim().is_empty()
    {
        return Ok(key.trim().to_string());
    }

    if source == CredentialSource::ExplicitThenEnv
        && let Ok(key) = env::var(API_KEY_ENV_VAR)
        && !key.trim().is_empty()
    {
        return Ok(key.trim().to_string());
    }

    Err(AppError::MissingApiKey)
}
