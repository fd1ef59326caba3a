use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::state::AppState;
use axum::{
    extract::State,
    response::{Html, IntoResponse},
    Json,
};
use brandgen_core::{
    AppError, BrandParameters, BrandingRequest, ErrorMetadata, GeneratedDocument, LocalFile,
    StorageRecord,
};
use brandgen_storage::SiteMetadata;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

/// Storage leg failure reported alongside an otherwise successful generation
#[derive(Debug, Serialize, ToSchema)]
pub struct StorageErrorNote {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GenerationResponse {
    pub status: String,
    pub message: String,
    pub parameters_used: BrandParameters,
    pub html_length: usize,
    /// False when the reply does not look like a complete HTML document
    pub html_valid: bool,
    pub html_content: String,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_file: Option<LocalFile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage: Option<StorageRecord>,
    /// Human readable validity of `storage.retrieval_url`, e.g. "7 days"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_expires_in: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_error: Option<StorageErrorNote>,
}

/// Metadata attached to uploaded objects, beyond what the storage layer adds itself
fn upload_metadata(params: &BrandParameters, model: &str) -> SiteMetadata {
    let mut metadata = SiteMetadata::new();
    metadata.insert("tone".to_string(), params.tone().to_string());
    metadata.insert("design_style".to_string(), params.design_style().to_string());
    metadata.insert("primary_color".to_string(), params.primary_color().to_string());
    metadata.insert("generated_by".to_string(), model.to_string());
    metadata
}

async fn generate_document(
    state: &AppState,
    request: BrandingRequest,
) -> Result<GeneratedDocument, HttpAppError> {
    let params = request.into_parameters()?;
    let document = state.generator.generate(&params).await?;
    Ok(document)
}

#[utoipa::path(
    post,
    path = "/generate-brand-content",
    tag = "generation",
    request_body = BrandingRequest,
    responses(
        (status = 200, description = "Website generated", body = GenerationResponse),
        (status = 400, description = "Invalid brand parameters", body = ErrorResponse),
        (status = 500, description = "Generation or storage failure", body = ErrorResponse)
    )
)]
#[tracing::instrument(
    skip(state, request),
    fields(company = %request.company_name, operation = "generate_brand_content")
)]
pub async fn generate_brand_content(
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<BrandingRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    let document = generate_document(&state, request).await?;
    let params = &document.source_parameters;

    let local_file = if state.config.output.save_local_copy {
        Some(
            state
                .local
                .save(&document.html, params.company_name(), document.created_at)
                .await?,
        )
    } else {
        None
    };

    let mut storage = None;
    let mut storage_error = None;

    if state.upload_enabled() {
        let metadata = upload_metadata(params, state.generator.model_name());
        match state
            .storage
            .upload(&document.html, params.company_name(), &metadata)
            .await
        {
            Ok(record) => storage = Some(record),
            Err(e) => {
                let app_error = AppError::from(e);
                // Without a local copy the upload was the only way to keep the site
                if local_file.is_none() {
                    return Err(app_error.into());
                }
                tracing::warn!(
                    error = %app_error,
                    code = app_error.error_code(),
                    "Upload failed, returning local copy only"
                );
                storage_error = Some(StorageErrorNote {
                    code: app_error.error_code().to_string(),
                    message: app_error.client_message(),
                });
            }
        }
    }

    let url_expires_in = storage.as_ref().map(StorageRecord::url_expires_in);

    Ok(Json(GenerationResponse {
        status: "success".to_string(),
        message: "Brand website generated successfully".to_string(),
        parameters_used: document.source_parameters.clone(),
        html_length: document.html.len(),
        html_valid: document.well_formed,
        created_at: document.created_at,
        html_content: document.html,
        local_file,
        storage,
        url_expires_in,
        storage_error,
    }))
}

#[utoipa::path(
    post,
    path = "/generate-brand-content-preview",
    tag = "generation",
    request_body = BrandingRequest,
    responses(
        (status = 200, description = "Generated website", content_type = "text/html"),
        (status = 400, description = "Invalid brand parameters", body = ErrorResponse),
        (status = 500, description = "Generation failure", body = ErrorResponse)
    )
)]
#[tracing::instrument(
    skip(state, request),
    fields(company = %request.company_name, operation = "generate_brand_content_preview")
)]
pub async fn generate_brand_content_preview(
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<BrandingRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    let document = generate_document(&state, request).await?;
    Ok(Html(document.html))
}
