use std::io;

use thiserror::Error;

/// Library-wide error type for copygen operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Input validation failure.
    #[error("{0}")]
    Validation(String),

    /// Topic field is required and must not be blank.
    #[error("Topic must not be empty")]
    EmptyTopic,

    /// No API key could be resolved from any configured source.
    #[error("No Groq API key available. Pass --api-key or set GROQ_API_KEY.")]
    MissingApiKey,

    /// Completion service rejected the supplied credential.
    #[error("Groq API key was rejected: {0}")]
    CredentialRejected(String),

    /// Completion request failed after the configured retries.
    #[error("Content generation failed: {0}")]
    Service(String),

    /// A choice field received a value outside its enum.
    #[error("Invalid {field} '{name}': must be one of {valid}")]
    InvalidChoice { field: &'static str, name: String, valid: String },

    /// Prompt template failed to render.
    #[error("Prompt template error: {0}")]
    Template(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::Validation(_)
            | AppError::EmptyTopic
            | AppError::InvalidChoice { .. }
            | AppError::Template(_)
            | AppError::TomlParse(_) => io::ErrorKind::InvalidInput,
            AppError::MissingApiKey => io::ErrorKind::NotFound,
            AppError::CredentialRejected(_) => io::ErrorKind::PermissionDenied,
            AppError::Service(_) => io::ErrorKind::Other,
        }
    }
}
