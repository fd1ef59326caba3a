use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use brandgen_core::{StorageRecord, StorageStatus};
use brandgen_storage::DEFAULT_PREFIX;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};

const DEFAULT_MAX_ITEMS: usize = 100;
const MAX_ITEMS_LIMIT: usize = 1000;

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListFilesQuery {
    /// Maximum number of objects to return (1-1000, default 100)
    pub max_items: Option<usize>,
    /// Key prefix to list under (default "brand-websites/")
    pub prefix: Option<String>,
}

impl ListFilesQuery {
    fn max_items(&self) -> usize {
        self.max_items
            .unwrap_or(DEFAULT_MAX_ITEMS)
            .clamp(1, MAX_ITEMS_LIMIT)
    }

    fn prefix(&self) -> &str {
        self.prefix.as_deref().unwrap_or(DEFAULT_PREFIX)
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FileListResponse {
    pub files: Vec<StorageRecord>,
    pub count: usize,
}

#[utoipa::path(
    get,
    path = "/s3/config",
    tag = "storage",
    responses(
        (status = 200, description = "Storage configuration status", body = StorageStatus)
    )
)]
#[tracing::instrument(skip(state), fields(operation = "storage_config"))]
pub async fn storage_config(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.storage.check_configuration().await)
}

#[utoipa::path(
    get,
    path = "/s3/files",
    tag = "storage",
    params(ListFilesQuery),
    responses(
        (status = 200, description = "Uploaded websites", body = FileListResponse),
        (status = 500, description = "Storage unavailable or provider failure", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(operation = "list_files"))]
pub async fn list_files(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListFilesQuery>,
) -> Result<impl IntoResponse, HttpAppError> {
    let files = state.storage.list(query.prefix(), query.max_items()).await?;

    Ok(Json(FileListResponse {
        count: files.len(),
        files,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_query_defaults_and_clamping() {
        let query = ListFilesQuery {
            max_items: None,
            prefix: None,
        };
        assert_eq!(query.max_items(), 100);
        assert_eq!(query.prefix(), "brand-websites/");

        let query = ListFilesQuery {
            max_items: Some(0),
            prefix: Some("brand-websites/acme".to_string()),
        };
        assert_eq!(query.max_items(), 1);
        assert_eq!(query.prefix(), "brand-websites/acme");

        let query = ListFilesQuery {
            max_items: Some(50_000),
            prefix: None,
        };
        assert_eq!(query.max_items(), 1000);
    }
}
