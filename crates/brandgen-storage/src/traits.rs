//! Storage abstraction trait
//!
//! This module defines the `SiteStorage` trait implemented by the bucket backend.

use std::collections::BTreeMap;

use async_trait::async_trait;
use brandgen_core::{AppError, StorageRecord, StorageStatus};
use thiserror::Error;

/// Caller-supplied object metadata, in key order
pub type SiteMetadata = BTreeMap<String, String>;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    /// Credentials or bucket missing; nothing was attempted
    #[error("Storage is not configured: {0}")]
    Unavailable(String),

    /// The provider was contacted and rejected or failed the request
    #[error("Storage provider error ({code}): {message}")]
    Provider { code: String, message: String },

    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Unavailable(message) => AppError::StorageUnavailable(message),
            StorageError::Provider { code, message } => AppError::StorageProvider { code, message },
            StorageError::NotFound(name) => AppError::NotFound(format!("File {} not found", name)),
            StorageError::InvalidKey(message) => AppError::InvalidInput(message),
            StorageError::IoError(e) => AppError::from(e),
        }
    }
}

/// Remote storage for generated websites.
///
/// Implementations receive their configuration explicitly at construction and
/// never read ambient process state.
#[async_trait]
pub trait SiteStorage: Send + Sync {
    /// Store one HTML document under `brand-websites/{slug}_{timestamp}.html`
    /// and return its record with a pre-signed retrieval URL.
    async fn upload(
        &self,
        html: &str,
        company_name: &str,
        metadata: &SiteMetadata,
    ) -> StorageResult<StorageRecord>;

    /// Report which settings are present and whether the bucket answers.
    /// Never fails; problems are reported as flags.
    async fn check_configuration(&self) -> StorageStatus;

    /// List up to `max_items` objects whose key starts with `prefix`, each with
    /// a fresh pre-signed URL.
    async fn list(&self, prefix: &str, max_items: usize) -> StorageResult<Vec<StorageRecord>>;
}
