//! Liveness endpoints.

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

#[derive(Serialize)]
pub(super) struct RootResponse {
    pub message: &'static str,
}

#[derive(Serialize)]
pub(super) struct HealthCheckResponse {
    pub status: &'static str,
}

/// Root probe - confirms the API is up.
pub async fn root() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(RootResponse {
            message: "Brand Content Generator API is running",
        }),
    )
}

/// Health probe - the process is running and serving requests.
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(HealthCheckResponse { status: "healthy" }))
}
