//! Shared application state.
//!
//! Built once at startup and read-only afterwards; handlers receive it as
//! `State<Arc<AppState>>`.

use brandgen_core::Config;
use brandgen_services::GenerationService;
use brandgen_storage::{LocalStorage, SiteStorage};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub generator: GenerationService,
    /// Bucket storage; reports itself unavailable when not configured
    pub storage: Arc<dyn SiteStorage>,
    /// Output directory for local copies and downloads
    pub local: LocalStorage,
}

impl AppState {
    /// Whether generated sites should be sent to the bucket.
    ///
    /// Uploads are attempted as soon as a bucket name is set, so missing
    /// credentials surface as an unavailable-storage error instead of a silent skip.
    pub fn upload_enabled(&self) -> bool {
        self.config.s3.bucket.is_some()
    }
}
