use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use std::time::Duration;
use utoipa::ToSchema;

/// An object in the bucket together with a time-limited retrieval URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct StorageRecord {
    pub key: String,
    pub bucket: String,
    pub region: String,
    pub retrieval_url: String,
    /// Validity of `retrieval_url`, in seconds
    #[serde(rename = "url_expires_in_secs", serialize_with = "serialize_secs")]
    #[schema(value_type = u64)]
    pub url_expiry: Duration,
    pub size: u64,
    pub last_modified: DateTime<Utc>,
}

impl StorageRecord {
    /// Human readable expiry, e.g. "7 days"
    pub fn url_expires_in(&self) -> String {
        humanize_duration(self.url_expiry)
    }
}

/// Result of probing the storage configuration. Never an error: problems are flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct StorageStatus {
    pub access_key_present: bool,
    pub secret_key_present: bool,
    pub credentials_present: bool,
    pub bucket_name_present: bool,
    pub region: String,
    pub bucket_reachable: bool,
}

fn serialize_secs<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(value.as_secs())
}

pub fn humanize_duration(duration: Duration) -> String {
    const DAY: u64 = 24 * 60 * 60;
    const HOUR: u64 = 60 * 60;

    let secs = duration.as_secs();
    let (count, unit) = if secs >= DAY && secs % DAY == 0 {
        (secs / DAY, "day")
    } else if secs >= HOUR && secs % HOUR == 0 {
        (secs / HOUR, "hour")
    } else {
        (secs, "second")
    };

    if count == 1 {
        format!("1 {}", unit)
    } else {
        format!("{} {}s", count, unit)
    }
}
