//! Brandgen API Library
//!
//! This crate provides the HTTP handlers, error rendering and application setup
//! for the brand website generator.

// Module declarations
mod api_doc;
mod handlers;
mod telemetry;

// Public modules
pub mod error;
pub mod setup;
pub mod state;

// Re-exports
pub use error::{ErrorResponse, HttpAppError};
pub use state::AppState;
