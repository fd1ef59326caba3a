//! OpenAPI documentation, served at `/api/openapi.json` and rendered at `/docs`.

use utoipa::OpenApi;

use crate::error;
use crate::handlers;
use brandgen_core::models;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Brand Content Generator API",
        version = "0.1.0",
        description = "Generates single-page brand websites from company parameters using a hosted language model. Generated pages can be saved locally and uploaded to S3-compatible storage with pre-signed retrieval links."
    ),
    paths(
        handlers::generate::generate_brand_content,
        handlers::generate::generate_brand_content_preview,
        handlers::download::download_website,
        handlers::storage::storage_config,
        handlers::storage::list_files,
    ),
    components(schemas(
        models::BrandingRequest,
        models::BrandParameters,
        models::Tone,
        models::DesignStyle,
        models::HexColor,
        models::LocalFile,
        models::StorageRecord,
        models::StorageStatus,
        handlers::generate::GenerationResponse,
        handlers::generate::StorageErrorNote,
        handlers::storage::FileListResponse,
        error::ErrorResponse,
    )),
    tags(
        (name = "generation", description = "Website generation"),
        (name = "files", description = "Locally saved websites"),
        (name = "storage", description = "S3 storage status and listing")
    )
)]
pub struct ApiDoc;

pub fn get_openapi_spec() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_every_endpoint() {
        let spec = get_openapi_spec();
        for path in [
            "/generate-brand-content",
            "/generate-brand-content-preview",
            "/download/{filename}",
            "/s3/config",
            "/s3/files",
        ] {
            assert!(spec.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
