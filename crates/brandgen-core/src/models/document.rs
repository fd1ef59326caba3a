use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use super::brand::BrandParameters;

/// One generated website: the cleaned HTML plus the parameters that produced it
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct GeneratedDocument {
    pub html: String,
    pub source_parameters: BrandParameters,
    pub created_at: DateTime<Utc>,
    /// Whether the HTML starts with a doctype/html tag and ends with `</html>`
    pub well_formed: bool,
}

/// Location of a copy written to the local output directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct LocalFile {
    pub filename: String,
    pub path: String,
    pub download_url: String,
}
