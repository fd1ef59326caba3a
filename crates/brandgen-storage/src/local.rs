use std::path::PathBuf;

use brandgen_core::LocalFile;
use chrono::{DateTime, Utc};
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::keys::site_filename;
use crate::traits::{StorageError, StorageResult};

/// Output directory holding local copies of generated websites
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    /// Create a new LocalStorage, creating `base_path` if it does not exist
    pub async fn new(base_path: impl Into<PathBuf>) -> StorageResult<Self> {
        let base_path = base_path.into();

        fs::create_dir_all(&base_path).await.map_err(|e| {
            StorageError::IoError(std::io::Error::new(
                e.kind(),
                format!(
                    "Failed to create output directory {}: {}",
                    base_path.display(),
                    e
                ),
            ))
        })?;

        Ok(LocalStorage { base_path })
    }

    pub fn base_path(&self) -> &std::path::Path {
        &self.base_path
    }

    /// Resolve a bare filename inside the output directory.
    ///
    /// Only flat `*.html` names are accepted; anything that could address a
    /// path outside the directory is rejected.
    fn filename_to_path(&self, filename: &str) -> StorageResult<PathBuf> {
        if filename.is_empty()
            || filename.contains('/')
            || filename.contains('\\')
            || filename.contains("..")
        {
            return Err(StorageError::InvalidKey(
                "Filename contains invalid characters".to_string(),
            ));
        }

        if !filename.ends_with(".html") {
            return Err(StorageError::InvalidKey(
                "Only .html files can be downloaded".to_string(),
            ));
        }

        Ok(self.base_path.join(filename))
    }

    /// Write `html` as `{slug}_{timestamp}.html`, replacing any same-named file
    pub async fn save(
        &self,
        html: &str,
        company_name: &str,
        at: DateTime<Utc>,
    ) -> StorageResult<LocalFile> {
        let filename = site_filename(company_name, at);
        let path = self.filename_to_path(&filename)?;
        let start = std::time::Instant::now();

        let mut file = fs::File::create(&path).await?;
        file.write_all(html.as_bytes()).await?;
        file.sync_all().await?;

        tracing::info!(
            path = %path.display(),
            filename = %filename,
            size_bytes = html.len(),
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Local copy saved"
        );

        Ok(LocalFile {
            download_url: format!("/download/{}", filename),
            path: path.display().to_string(),
            filename,
        })
    }

    /// Read back a previously saved document
    pub async fn read(&self, filename: &str) -> StorageResult<String> {
        let path = self.filename_to_path(filename)?;

        if !fs::try_exists(&path).await.unwrap_or(false) {
            return Err(StorageError::NotFound(filename.to_string()));
        }

        let html = fs::read_to_string(&path).await?;

        tracing::debug!(
            path = %path.display(),
            size_bytes = html.len(),
            "Local copy read"
        );

        Ok(html)
    }
}
