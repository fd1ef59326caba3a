//! Completion provider abstraction.
//!
//! The hosted chat-completions API sits behind this trait so the generation
//! pipeline (and the HTTP layer above it) can run against a stub in tests.

use async_trait::async_trait;

use crate::error::GenerationError;

/// A text-completion backend: one system message plus one user prompt in,
/// the raw reply text out.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Model identifier reported in logs
    fn model_name(&self) -> &str;

    /// Send one prompt and return the raw reply text
    async fn complete(&self, system: &str, prompt: &str) -> Result<String, GenerationError>;
}
