//! Completion service port definition.

use crate::domain::AppError;

/// A single chat-completion exchange: fixed system instruction plus the
/// compiled user instruction.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// System message content.
    pub system: String,
    /// User message content.
    pub user: String,
}

/// Response from the completion service.
#[derive(Debug, Clone)]
pub struct CompletionResponse {
    /// The model's raw text, unmodified.
    pub text: String,
}

/// Client for a hosted chat-completion service.
pub trait CompletionClient {
    /// Send one completion request and return the generated text.
    ///
    /// Blocking; runs to completion, service error, or retry exhaustion.
    fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AppError>;
}
