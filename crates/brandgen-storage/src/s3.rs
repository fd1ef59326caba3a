use crate::keys::{
    normalize_metadata_key, normalize_metadata_value, site_filename, site_key,
};
use crate::traits::{SiteMetadata, SiteStorage, StorageError, StorageResult};
use async_trait::async_trait;
use brandgen_core::{S3Config, StorageRecord, StorageStatus};
use bytes::Bytes;
use chrono::{DateTime, Utc};
use futures::{StreamExt, TryStreamExt};
use http::Method;
use object_store::aws::{AmazonS3, AmazonS3Builder};
use object_store::path::Path;
use object_store::signer::Signer;
use object_store::Error as ObjectStoreError;
use object_store::{
    Attribute, Attributes, ObjectMeta, ObjectStore, PutOptions, PutPayload, RetryConfig,
};

const CONTENT_TYPE: &str = "text/html";

enum Backend {
    Ready { store: AmazonS3, bucket: String },
    Unavailable(String),
}

/// S3 storage implementation.
///
/// Always constructible: when credentials or the bucket are missing the
/// storage stays in an unavailable state, reports it through
/// `check_configuration` and fails uploads with `StorageError::Unavailable`.
pub struct S3Storage {
    backend: Backend,
    config: S3Config,
}

impl S3Storage {
    /// Create a new S3Storage from explicit settings.
    ///
    /// `config.endpoint` selects an S3-compatible provider
    /// (e.g. "http://localhost:9000" for MinIO); plain `http://` endpoints are allowed.
    pub fn new(config: &S3Config) -> Self {
        let backend = match Self::build_store(config) {
            Ok((store, bucket)) => Backend::Ready { store, bucket },
            Err(reason) => {
                tracing::warn!(reason = %reason, "S3 storage unavailable");
                Backend::Unavailable(reason)
            }
        };

        S3Storage {
            backend,
            config: config.clone(),
        }
    }

    fn build_store(config: &S3Config) -> Result<(AmazonS3, String), String> {
        let (Some(access_key_id), Some(secret_access_key)) =
            (&config.access_key_id, &config.secret_access_key)
        else {
            return Err("AWS credentials are not set".to_string());
        };
        let Some(bucket) = &config.bucket else {
            return Err("S3_BUCKET_NAME is not set".to_string());
        };

        let retry = RetryConfig {
            max_retries: config.max_retries,
            ..Default::default()
        };

        let mut builder = AmazonS3Builder::new()
            .with_access_key_id(access_key_id)
            .with_secret_access_key(secret_access_key)
            .with_region(config.region.clone())
            .with_bucket_name(bucket.clone())
            .with_retry(retry);

        if let Some(ref endpoint) = config.endpoint {
            let allow_http = endpoint.starts_with("http://");
            builder = builder
                .with_endpoint(endpoint.clone())
                .with_allow_http(allow_http);
        }

        let store = builder.build().map_err(|e| e.to_string())?;
        Ok((store, bucket.clone()))
    }

    fn ready(&self) -> StorageResult<(&AmazonS3, &str)> {
        match &self.backend {
            Backend::Ready { store, bucket } => Ok((store, bucket.as_str())),
            Backend::Unavailable(reason) => Err(StorageError::Unavailable(reason.clone())),
        }
    }

    /// Pre-signed GET URL for `key`, valid for the configured expiration
    pub async fn presigned_url(&self, key: &str) -> StorageResult<String> {
        let (store, _) = self.ready()?;
        let location = Path::from(key);

        let url = store
            .signed_url(Method::GET, &location, self.config.url_expiry())
            .await
            .map_err(provider_error)?;

        Ok(url.to_string())
    }

    /// Object metadata sent with every upload, caller entries last
    fn object_metadata(
        company_name: &str,
        uploaded_at: DateTime<Utc>,
        extra: &SiteMetadata,
    ) -> SiteMetadata {
        let mut metadata = SiteMetadata::new();
        metadata.insert(
            "company-name".to_string(),
            normalize_metadata_value(company_name),
        );
        metadata.insert("upload-timestamp".to_string(), uploaded_at.to_rfc3339());
        metadata.insert("content-type".to_string(), CONTENT_TYPE.to_string());

        for (key, value) in extra {
            let key = normalize_metadata_key(key);
            if !key.is_empty() {
                metadata.insert(key, normalize_metadata_value(value));
            }
        }

        metadata
    }

    async fn record_for(&self, meta: ObjectMeta) -> StorageResult<StorageRecord> {
        let (_, bucket) = self.ready()?;
        let key = meta.location.to_string();
        let retrieval_url = self.presigned_url(&key).await?;

        Ok(StorageRecord {
            key,
            bucket: bucket.to_string(),
            region: self.config.region.clone(),
            retrieval_url,
            url_expiry: self.config.url_expiry(),
            size: meta.size,
            last_modified: meta.last_modified,
        })
    }
}

/// Map an object_store failure to a provider error with a short machine code
fn provider_error(err: ObjectStoreError) -> StorageError {
    let code = match &err {
        ObjectStoreError::NotFound { .. } => "NotFound",
        ObjectStoreError::PermissionDenied { .. } => "AccessDenied",
        ObjectStoreError::Unauthenticated { .. } => "Unauthenticated",
        ObjectStoreError::AlreadyExists { .. } => "AlreadyExists",
        ObjectStoreError::Precondition { .. } => "PreconditionFailed",
        ObjectStoreError::NotSupported { .. } => "NotSupported",
        _ => "RequestFailed",
    };

    StorageError::Provider {
        code: code.to_string(),
        message: err.to_string(),
    }
}

#[async_trait]
impl SiteStorage for S3Storage {
    async fn upload(
        &self,
        html: &str,
        company_name: &str,
        metadata: &SiteMetadata,
    ) -> StorageResult<StorageRecord> {
        let (store, bucket) = self.ready()?;

        let uploaded_at = Utc::now();
        let key = site_key(&site_filename(company_name, uploaded_at));
        let location = Path::from(key.as_str());
        let size = html.len() as u64;

        let mut attributes = Attributes::new();
        attributes.insert(Attribute::ContentType, CONTENT_TYPE.into());
        attributes.insert(Attribute::ContentDisposition, "inline".into());
        for (name, value) in Self::object_metadata(company_name, uploaded_at, metadata) {
            attributes.insert(Attribute::Metadata(name.into()), value.into());
        }
        let opts = PutOptions {
            attributes,
            ..Default::default()
        };

        let start = std::time::Instant::now();

        store
            .put_opts(
                &location,
                PutPayload::from(Bytes::from(html.to_owned())),
                opts,
            )
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    bucket = %bucket,
                    key = %key,
                    size_bytes = size,
                    duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                    "S3 upload failed"
                );
                provider_error(e)
            })?;

        let retrieval_url = self.presigned_url(&key).await.map_err(|e| {
            // The object is already stored at this point
            tracing::error!(
                error = %e,
                bucket = %bucket,
                key = %key,
                size_bytes = size,
                "S3 object stored but URL signing failed"
            );
            e
        })?;

        tracing::info!(
            bucket = %bucket,
            key = %key,
            size_bytes = size,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "S3 upload successful"
        );

        Ok(StorageRecord {
            key,
            bucket: bucket.to_string(),
            region: self.config.region.clone(),
            retrieval_url,
            url_expiry: self.config.url_expiry(),
            size,
            last_modified: uploaded_at,
        })
    }

    async fn check_configuration(&self) -> StorageStatus {
        let mut status = StorageStatus {
            access_key_present: self.config.access_key_id.is_some(),
            secret_key_present: self.config.secret_access_key.is_some(),
            credentials_present: self.config.credentials_present(),
            bucket_name_present: self.config.bucket.is_some(),
            region: self.config.region.clone(),
            bucket_reachable: false,
        };

        if let Backend::Ready { store, bucket } = &self.backend {
            let start = std::time::Instant::now();
            status.bucket_reachable = match store.list(None).next().await {
                Some(Err(e)) => {
                    tracing::warn!(
                        error = %e,
                        bucket = %bucket,
                        duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                        "S3 bucket not reachable"
                    );
                    false
                }
                _ => true,
            };
        }

        status
    }

    async fn list(&self, prefix: &str, max_items: usize) -> StorageResult<Vec<StorageRecord>> {
        let (store, bucket) = self.ready()?;
        let start = std::time::Instant::now();

        // object_store lists by directory, so list the prefix's parent and filter by name
        let prefix = prefix.trim_start_matches('/');
        let root = prefix.rfind('/').map(|idx| Path::from(&prefix[..idx]));

        let objects: Vec<ObjectMeta> = store
            .list(root.as_ref())
            .try_filter(|meta| futures::future::ready(meta.location.as_ref().starts_with(prefix)))
            .take(max_items)
            .try_collect()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    bucket = %bucket,
                    prefix = %prefix,
                    duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                    "S3 list failed"
                );
                provider_error(e)
            })?;

        let mut records = Vec::with_capacity(objects.len());
        for meta in objects {
            records.push(self.record_for(meta).await?);
        }

        tracing::info!(
            bucket = %bucket,
            prefix = %prefix,
            count = records.len(),
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "S3 list successful"
        );

        Ok(records)
    }
}
