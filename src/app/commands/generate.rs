//! Generate command orchestration.

use crate::domain::{AppError, CompiledPrompt, GenerationRequest};
use crate::ports::{CompletionClient, CompletionRequest};
use crate::services::compile_prompt;

/// Result of one generation action.
#[derive(Debug, Clone)]
pub struct GenerateOutcome {
    /// The compiled two-message prompt that was sent.
    pub prompt: CompiledPrompt,
    /// The model's raw text response, unmodified.
    pub text: String,
}

/// Compile the request and send it through the completion client.
///
/// Validation failures surface before the client is touched. The response
/// text is returned exactly as the service produced it.
pub fn execute<C: CompletionClient>(
    request: &GenerationRequest,
    client: &C,
) -> Result<GenerateOutcome, AppError> {
    let prompt = compile_prompt(request)?;

    let response = client.complete(CompletionRequest {
        system: prompt.system.clone(),
        user: prompt.user.clone(),
    })?;

    Ok(GenerateOutcome { prompt, text: response.text })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::CompletionResponse;
    use std::cell::RefCell;

    /// Records the requests it receives and replies with a canned text.
    struct RecordingClient {
        requests: RefCell<Vec<CompletionRequest>>,
        reply: String,
    }

    impl RecordingClient {
        fn new(reply: &str) -> Self {
            Self { requests: RefCell::new(Vec::new()), reply: reply.to_string() }
        }
    }

    impl CompletionClient for RecordingClient {
        fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AppError> {
            self.requests.borrow_mut().push(request);
            Ok(CompletionResponse { text: self.reply.clone() })
        }
    }

    #[test]
    fn forwards_the_compiled_prompt_as_two_messages() {
        let client = RecordingClient::new("generated copy");
        let request =
            GenerationRequest { topic: "mental health".to_string(), ..Default::default() };

        let outcome = execute(&request, &client).unwrap();
        assert_eq!(outcome.text, "generated copy");

        let sent = client.requests.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].system, outcome.prompt.system);
        assert_eq!(sent[0].user, outcome.prompt.user);
        assert!(sent[0].user.contains("mental health"));
    }

    #[test]
    fn empty_topic_never_reaches_the_client() {
        let client = RecordingClient::new("unused");
        let request = GenerationRequest::default();

        let result = execute(&request, &client);
        assert!(matches!(result, Err(AppError::EmptyTopic)));
        assert!(client.requests.borrow().is_empty());
    }
}
