//! Domain types: requests, configuration, and errors.

mod api_config;
mod error;
mod prompt;
mod request;

pub use api_config::GroqApiConfig;
pub use error::AppError;
pub use prompt::{CompiledPrompt, SYSTEM_INSTRUCTION};
pub use request::{Audience, GenerationRequest, Length, Platform, Tone};

pub(crate) use request::valid_names;
