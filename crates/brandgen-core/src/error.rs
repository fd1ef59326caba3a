//! Error types module
//!
//! All errors that can reach a client are unified under the `AppError` enum.
//! Crate-local errors (validation, generation, storage) convert into it, and the
//! `ErrorMetadata` trait describes how each variant is presented over HTTP.

use std::io;

use crate::validation::ValidationError;

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Warning level - for degraded but understood states like missing configuration
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// Metadata for error responses - defines how an error should be presented
pub trait ErrorMetadata {
    /// HTTP status code to return
    fn http_status_code(&self) -> u16;

    /// Machine-readable error code (e.g., "VALIDATION_ERROR")
    fn error_code(&self) -> &'static str;

    /// Whether this error is recoverable (can be retried)
    fn is_recoverable(&self) -> bool;

    /// Suggested action for the client
    fn suggested_action(&self) -> Option<&'static str>;

    /// Client-facing message (may differ from internal error message)
    fn client_message(&self) -> String;

    /// Whether details should be hidden in production
    fn is_sensitive(&self) -> bool;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Upstream generation failed: {0}")]
    UpstreamGeneration(String),

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Storage provider error ({code}): {message}")]
    StorageProvider { code: String, message: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Internal error with source")]
    InternalWithSource {
        message: String,
        #[source]
        source: anyhow::Error,
    },
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::InternalWithSource {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<io::Error> for AppError {
    fn from(err: io::Error) -> Self {
        AppError::Internal(format!("IO error: {}", err))
    }
}

/// Static metadata for each variant: (http_status, error_code, recoverable, suggested_action, sensitive, log_level).
fn app_error_static_metadata(
    err: &AppError,
) -> (
    u16,
    &'static str,
    bool,
    Option<&'static str>,
    bool,
    LogLevel,
) {
    match err {
        AppError::Validation(_) => (
            400,
            "VALIDATION_ERROR",
            false,
            Some("Check request parameters against the allowed values"),
            false,
            LogLevel::Debug,
        ),
        AppError::InvalidInput(_) => (
            400,
            "INVALID_INPUT",
            false,
            Some("Check request format and parameters"),
            false,
            LogLevel::Debug,
        ),
        AppError::UpstreamGeneration(_) => (
            500,
            "UPSTREAM_GENERATION_ERROR",
            true,
            Some("Retry after a short delay"),
            false,
            LogLevel::Error,
        ),
        AppError::StorageUnavailable(_) => (
            500,
            "STORAGE_UNAVAILABLE",
            false,
            Some("Configure storage credentials and bucket name"),
            false,
            LogLevel::Warn,
        ),
        AppError::StorageProvider { .. } => (
            500,
            "STORAGE_PROVIDER_ERROR",
            true,
            Some("Retry after a short delay"),
            false,
            LogLevel::Error,
        ),
        AppError::NotFound(_) => (
            404,
            "NOT_FOUND",
            false,
            Some("Verify the resource name exists"),
            false,
            LogLevel::Debug,
        ),
        AppError::Internal(_) | AppError::InternalWithSource { .. } => (
            500,
            "INTERNAL_ERROR",
            true,
            Some("Retry after a short delay"),
            true,
            LogLevel::Error,
        ),
    }
}

impl AppError {
    /// Get the error type name for detailed error responses
    pub fn error_type(&self) -> &str {
        match self {
            AppError::Validation(_) => "ValidationError",
            AppError::InvalidInput(_) => "InvalidInput",
            AppError::UpstreamGeneration(_) => "UpstreamGenerationError",
            AppError::StorageUnavailable(_) => "StorageUnavailable",
            AppError::StorageProvider { .. } => "StorageProviderError",
            AppError::NotFound(_) => "NotFound",
            AppError::Internal(_) | AppError::InternalWithSource { .. } => "Internal",
        }
    }

    /// Get detailed error information including error chain
    pub fn detailed_message(&self) -> String {
        use std::error::Error;

        let mut details = self.to_string();

        let mut source = self.source();
        let mut depth = 0;
        while let Some(err) = source {
            depth += 1;
            if depth > 5 {
                details.push_str("\n  ... (truncated)");
                break;
            }
            details.push_str(&format!("\n  Caused by: {}", err));
            source = err.source();
        }

        details
    }

    /// Offending request field, for validation failures
    pub fn field(&self) -> Option<&str> {
        match self {
            AppError::Validation(e) => Some(e.field()),
            _ => None,
        }
    }

    /// Accepted values, for validation failures on enumerated fields
    pub fn allowed_values(&self) -> Option<&[&'static str]> {
        match self {
            AppError::Validation(e) => e.allowed_values(),
            _ => None,
        }
    }
}

impl ErrorMetadata for AppError {
    fn http_status_code(&self) -> u16 {
        app_error_static_metadata(self).0
    }

    fn error_code(&self) -> &'static str {
        app_error_static_metadata(self).1
    }

    fn is_recoverable(&self) -> bool {
        app_error_static_metadata(self).2
    }

    fn suggested_action(&self) -> Option<&'static str> {
        app_error_static_metadata(self).3
    }

    fn client_message(&self) -> String {
        match self {
            AppError::Validation(e) => e.to_string(),
            AppError::InvalidInput(msg) => msg.clone(),
            AppError::UpstreamGeneration(msg) => format!("Error generating content: {}", msg),
            AppError::StorageUnavailable(msg) => msg.clone(),
            AppError::StorageProvider { message, .. } => format!("Storage request failed: {}", message),
            AppError::NotFound(msg) => msg.clone(),
            AppError::Internal(_) | AppError::InternalWithSource { .. } => {
                "An internal error occurred".to_string()
            }
        }
    }

    fn is_sensitive(&self) -> bool {
        app_error_static_metadata(self).4
    }

    fn log_level(&self) -> LogLevel {
        app_error_static_metadata(self).5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_metadata() {
        let err: AppError = ValidationError::InvalidColor {
            value: "red".to_string(),
        }
        .into();

        assert_eq!(err.http_status_code(), 400);
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
        assert_eq!(err.field(), Some("primary_color"));
        assert!(err.allowed_values().is_none());
        assert_eq!(err.log_level(), LogLevel::Debug);
    }

    #[test]
    fn test_storage_errors_are_distinguishable() {
        let unavailable = AppError::StorageUnavailable("S3_BUCKET_NAME not set".to_string());
        let provider = AppError::StorageProvider {
            code: "AccessDenied".to_string(),
            message: "denied".to_string(),
        };

        assert_eq!(unavailable.http_status_code(), 500);
        assert_eq!(provider.http_status_code(), 500);
        assert_ne!(unavailable.error_code(), provider.error_code());
        assert_eq!(unavailable.error_type(), "StorageUnavailable");
        assert_eq!(provider.error_type(), "StorageProviderError");
    }

    #[test]
    fn test_upstream_message_carries_provider_text() {
        let err = AppError::UpstreamGeneration("rate limit reached".to_string());
        assert_eq!(err.http_status_code(), 500);
        assert!(err.client_message().contains("rate limit reached"));
    }

    #[test]
    fn test_internal_errors_hide_details() {
        let err = AppError::from(anyhow::anyhow!("disk on fire"));
        assert!(err.is_sensitive());
        assert_eq!(err.client_message(), "An internal error occurred");
        assert!(err.detailed_message().contains("disk on fire"));
    }

    #[test]
    fn test_io_error_maps_to_internal() {
        let err = AppError::from(io::Error::other("no space left"));
        assert_eq!(err.http_status_code(), 500);
        assert_eq!(err.error_code(), "INTERNAL_ERROR");
    }
}
