use crate::{S3Storage, SiteStorage};
use brandgen_core::Config;
use std::sync::Arc;

/// Create the bucket storage from configuration.
///
/// Missing settings do not fail here: the returned storage reports them via
/// `check_configuration` and rejects uploads as unavailable.
pub fn create_storage(config: &Config) -> Arc<dyn SiteStorage> {
    let storage = S3Storage::new(&config.s3);

    tracing::info!(
        bucket = config.s3.bucket.as_deref().unwrap_or("<unset>"),
        region = %config.s3.region,
        endpoint = config.s3.endpoint.as_deref().unwrap_or("<aws>"),
        credentials_present = config.s3.credentials_present(),
        "Storage backend initialized"
    );

    Arc::new(storage)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_storage_without_settings_reports_gaps() {
        let config = Config::for_tests(std::env::temp_dir());
        let storage = create_storage(&config);

        let status = storage.check_configuration().await;
        assert!(!status.credentials_present);
        assert!(!status.bucket_reachable);
    }
}
