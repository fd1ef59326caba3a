//! Test helpers: build AppState and router for integration tests.
//!
//! The completion provider and bucket storage are replaced with in-process
//! fakes, so these tests need no network access. Run with
//! `cargo test -p brandgen-api`.

#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use brandgen_api::setup::routes;
use brandgen_api::AppState;
use brandgen_core::{Config, StorageRecord, StorageStatus};
use brandgen_services::{CompletionProvider, GenerationError, GenerationService, SanitizeOptions};
use brandgen_storage::{site_filename, site_key, LocalStorage, SiteMetadata, SiteStorage, StorageError};
use chrono::Utc;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tempfile::TempDir;

pub const PAGE: &str = "<!DOCTYPE html>\n<html>\n<head><title>Acme Co</title></head>\n<body><h1>Acme Co</h1></body>\n</html>";

/// Completion provider that replays a canned reply and records prompts
pub struct FakeProvider {
    reply: Result<String, String>,
    pub prompts: Mutex<Vec<String>>,
}

impl FakeProvider {
    pub fn replying(reply: impl Into<String>) -> Self {
        Self {
            reply: Ok(reply.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            reply: Err(message.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl CompletionProvider for FakeProvider {
    fn model_name(&self) -> &str {
        "fake-model"
    }

    async fn complete(&self, _system: &str, prompt: &str) -> Result<String, GenerationError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match &self.reply {
            Ok(reply) => Ok(reply.clone()),
            Err(message) => Err(GenerationError::Api {
                status: 429,
                message: message.clone(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageMode {
    Healthy,
    Unavailable,
    ProviderFailure,
}

/// In-memory bucket storage
pub struct FakeStorage {
    mode: StorageMode,
    pub uploads: Mutex<Vec<(StorageRecord, SiteMetadata)>>,
    pub list_calls: Mutex<Vec<(String, usize)>>,
}

impl FakeStorage {
    pub fn new(mode: StorageMode) -> Self {
        Self {
            mode,
            uploads: Mutex::new(Vec::new()),
            list_calls: Mutex::new(Vec::new()),
        }
    }

    pub fn upload_count(&self) -> usize {
        self.uploads.lock().unwrap().len()
    }

    fn failure(&self) -> Option<StorageError> {
        match self.mode {
            StorageMode::Healthy => None,
            StorageMode::Unavailable => Some(StorageError::Unavailable(
                "AWS credentials are not set".to_string(),
            )),
            StorageMode::ProviderFailure => Some(StorageError::Provider {
                code: "AccessDenied".to_string(),
                message: "Access Denied".to_string(),
            }),
        }
    }
}

#[async_trait]
impl SiteStorage for FakeStorage {
    async fn upload(
        &self,
        html: &str,
        company_name: &str,
        metadata: &SiteMetadata,
    ) -> Result<StorageRecord, StorageError> {
        if let Some(err) = self.failure() {
            return Err(err);
        }

        let now = Utc::now();
        let key = site_key(&site_filename(company_name, now));
        let record = StorageRecord {
            retrieval_url: format!("https://test-bucket.example.com/{}?X-Amz-Expires=604800", key),
            key,
            bucket: "test-bucket".to_string(),
            region: "us-east-1".to_string(),
            url_expiry: Duration::from_secs(604_800),
            size: html.len() as u64,
            last_modified: now,
        };
        self.uploads
            .lock()
            .unwrap()
            .push((record.clone(), metadata.clone()));
        Ok(record)
    }

    async fn check_configuration(&self) -> StorageStatus {
        let healthy = self.mode == StorageMode::Healthy;
        StorageStatus {
            access_key_present: healthy,
            secret_key_present: healthy,
            credentials_present: healthy,
            bucket_name_present: true,
            region: "us-east-1".to_string(),
            bucket_reachable: healthy,
        }
    }

    async fn list(&self, prefix: &str, max_items: usize) -> Result<Vec<StorageRecord>, StorageError> {
        self.list_calls
            .lock()
            .unwrap()
            .push((prefix.to_string(), max_items));

        if let Some(err) = self.failure() {
            return Err(err);
        }

        Ok(self
            .uploads
            .lock()
            .unwrap()
            .iter()
            .map(|(record, _)| record.clone())
            .filter(|record| record.key.starts_with(prefix))
            .take(max_items)
            .collect())
    }
}

/// Knobs for building a test application
pub struct TestOptions {
    pub reply: Result<String, String>,
    pub storage_mode: StorageMode,
    pub bucket: Option<String>,
    pub save_local_copy: bool,
}

impl Default for TestOptions {
    fn default() -> Self {
        Self {
            reply: Ok(format!("```html\n{}\n```", PAGE)),
            storage_mode: StorageMode::Healthy,
            bucket: Some("test-bucket".to_string()),
            save_local_copy: true,
        }
    }
}

/// Test application: server plus handles on the fakes and owned resources.
pub struct TestApp {
    pub server: TestServer,
    pub provider: Arc<FakeProvider>,
    pub storage: Arc<FakeStorage>,
    pub temp_dir: TempDir,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }

    /// Names of the files written to the output directory
    pub fn saved_files(&self) -> Vec<String> {
        let dir = self.temp_dir.path().join("generated_websites");
        let Ok(entries) = std::fs::read_dir(dir) else {
            return Vec::new();
        };
        entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect()
    }
}

pub async fn setup_test_app() -> TestApp {
    setup_test_app_with(TestOptions::default()).await
}

pub async fn setup_test_app_with(options: TestOptions) -> TestApp {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output_dir = temp_dir.path().join("generated_websites");

    let mut config = Config::for_tests(&output_dir);
    config.s3.bucket = options.bucket;
    config.output.save_local_copy = options.save_local_copy;

    let provider = Arc::new(match options.reply {
        Ok(reply) => FakeProvider::replying(reply),
        Err(message) => FakeProvider::failing(message),
    });
    let storage = Arc::new(FakeStorage::new(options.storage_mode));

    let state = Arc::new(AppState {
        generator: GenerationService::new(provider.clone(), SanitizeOptions::default()),
        storage: storage.clone(),
        local: LocalStorage::new(&output_dir)
            .await
            .expect("Failed to create output dir"),
        config: config.clone(),
    });

    let router = routes::setup_routes(&config, state).expect("Failed to build routes");
    let server = TestServer::new(router).expect("Failed to start test server");

    TestApp {
        server,
        provider,
        storage,
        temp_dir,
    }
}

/// A valid generation request body
pub fn acme_request() -> serde_json::Value {
    serde_json::json!({
        "company_name": "Acme Co",
        "brand_identity": "Rockets and anvils for discerning coyotes",
        "tone": "CASUAL",
        "design_style": "Modern",
        "primary_color": "#abc"
    })
}
