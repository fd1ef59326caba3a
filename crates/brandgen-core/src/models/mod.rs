pub mod brand;
pub mod document;
pub mod storage;

pub use brand::{BrandParameters, BrandingRequest, DesignStyle, HexColor, Tone};
pub use document::{GeneratedDocument, LocalFile};
pub use storage::{StorageRecord, StorageStatus};
