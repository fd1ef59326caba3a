use brandgen_core::AppError;
use thiserror::Error;

/// Failures talking to the completion provider
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Completion provider is not configured: {0}")]
    NotConfigured(String),

    #[error("Request to completion provider failed: {0}")]
    Request(String),

    #[error("Completion provider returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Completion provider returned no content")]
    EmptyResponse,

    #[error("Failed to parse completion response: {0}")]
    InvalidResponse(String),
}

impl From<GenerationError> for AppError {
    fn from(err: GenerationError) -> Self {
        AppError::UpstreamGeneration(err.to_string())
    }
}
