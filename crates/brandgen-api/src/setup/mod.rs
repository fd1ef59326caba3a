//! Application setup and initialization
//!
//! This module contains all application initialization logic extracted from main.rs
//! for better organization and testability.

pub mod routes;
pub mod server;

use crate::state::AppState;
use anyhow::{Context, Result};
use brandgen_core::Config;
use brandgen_services::{GenerationService, OpenAiClient, SanitizeOptions};
use brandgen_storage::{create_storage, LocalStorage};
use std::sync::Arc;

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    // Initialize telemetry first
    crate::telemetry::init_telemetry(&config.server.log_format)
        .map_err(|e| anyhow::anyhow!("Failed to initialize telemetry: {}", e))?;

    // Validate configuration - fail fast on misconfiguration
    config
        .validate()
        .context("Configuration validation failed")?;

    tracing::info!(
        config = ?config,
        "Configuration loaded and validated successfully"
    );

    let provider =
        OpenAiClient::new(&config.openai).context("Failed to create completion client")?;
    let generator = GenerationService::new(
        Arc::new(provider),
        SanitizeOptions {
            strip_escape_sequences: config.openai.strip_escape_sequences,
        },
    );

    let storage = create_storage(&config);
    let local = LocalStorage::new(config.output.dir.clone())
        .await
        .context("Failed to prepare output directory")?;

    let state = Arc::new(AppState {
        config: config.clone(),
        generator,
        storage,
        local,
    });

    let router = routes::setup_routes(&config, state.clone())?;

    Ok((state, router))
}
