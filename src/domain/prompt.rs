//! Compiled prompt value type.

/// Fixed system instruction sent with every completion request.
pub const SYSTEM_INSTRUCTION: &str =
    "You are a digital marketing expert specialized in SEO and persuasive copywriting.";

/// The two-message chat payload produced by prompt compilation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledPrompt {
    /// System instruction (fixed).
    pub system: String,
    /// User instruction compiled from the generation request.
    pub user: String,
}
