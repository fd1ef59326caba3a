//! Brandgen Storage Library
//!
//! Persistence for generated websites: an S3-compatible bucket behind the
//! `SiteStorage` trait, and a plain output directory for local copies.
//!
//! # Key format
//!
//! Both backends share one naming scheme, built in the `keys` module:
//!
//! - **Filename**: `{slug}_{YYYYMMDD_HHMMSS}.html` (UTC timestamp)
//! - **Bucket key**: `brand-websites/{filename}`
//!
//! Local filenames must not contain path separators or `..`.

pub mod factory;
pub mod keys;
pub mod local;
pub mod s3;
pub mod traits;

// Re-export commonly used types
pub use factory::create_storage;
pub use keys::{site_filename, site_key, slugify, DEFAULT_PREFIX};
pub use local::LocalStorage;
pub use s3::S3Storage;
pub use traits::{SiteMetadata, SiteStorage, StorageError, StorageResult};
