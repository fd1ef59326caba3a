//! Brandgen Core Library
//!
//! This crate provides the domain models, parameter validation, error types and
//! configuration shared across all Brandgen components.

pub mod config;
pub mod error;
pub mod models;
pub mod validation;

// Re-export commonly used types
pub use config::{Config, OpenAiConfig, OutputConfig, S3Config, ServerConfig};
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use models::{
    BrandParameters, BrandingRequest, DesignStyle, GeneratedDocument, HexColor, LocalFile,
    StorageRecord, StorageStatus, Tone,
};
pub use validation::ValidationError;
