//! Brandgen Services Layer
//!
//! This crate is the **generation service layer**: it turns validated brand
//! parameters into a prompt, sends it to a completion provider, and cleans the
//! reply into a single HTML document. Keep HTTP handling in brandgen-api and
//! persistence in brandgen-storage.

pub mod error;
pub mod generator;
pub mod openai;
pub mod prompt;
pub mod provider;
pub mod sanitize;

pub use error::GenerationError;
pub use generator::GenerationService;
pub use openai::OpenAiClient;
pub use prompt::{build_prompt, style_techniques, tone_phrase, SYSTEM_PROMPT};
pub use provider::CompletionProvider;
pub use sanitize::{sanitize, validate_html, SanitizeOptions};
