use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
};
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/download/{filename}",
    tag = "files",
    params(
        ("filename" = String, Path, description = "Name of a previously saved website, e.g. acme_co_20250101_120000.html")
    ),
    responses(
        (status = 200, description = "Saved website", content_type = "text/html"),
        (status = 400, description = "Invalid filename", body = ErrorResponse),
        (status = 404, description = "File not found", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(operation = "download_website"))]
pub async fn download_website(
    State(state): State<Arc<AppState>>,
    Path(filename): Path<String>,
) -> Result<impl IntoResponse, HttpAppError> {
    let html = state.local.read(&filename).await?;

    tracing::debug!(filename = %filename, size_bytes = html.len(), "Serving saved website");

    let content_disposition = format!("attachment; filename=\"{}\"", filename);

    Ok((
        [
            (header::CONTENT_TYPE, "text/html; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, content_disposition),
        ],
        html,
    ))
}
