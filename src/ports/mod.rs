//! Ports: trait seams between the application core and its adapters.

mod completion_client;

pub use completion_client::{CompletionClient, CompletionRequest, CompletionResponse};
