//! Shared naming for stored websites.
//!
//! Filename format: `{slug}_{YYYYMMDD_HHMMSS}.html`; bucket keys prefix it with
//! `brand-websites/`. Both backends must use these helpers so local copies and
//! uploaded objects carry the same name.

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;

/// Bucket prefix under which every website is stored
pub const DEFAULT_PREFIX: &str = "brand-websites/";

/// Slug used when a company name has no usable characters
const FALLBACK_SLUG: &str = "site";

static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s-]").expect("slug pattern is valid"));

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s").expect("whitespace pattern is valid"));

/// Turn a company name into a filename-safe slug: drop everything except word
/// characters, whitespace and `-`, trim, replace each whitespace character
/// (tabs and newlines included) with `_`, lowercase.
pub fn slugify(name: &str) -> String {
    let stripped = NON_WORD.replace_all(name, "");
    let slug = WHITESPACE
        .replace_all(stripped.trim(), "_")
        .to_lowercase();
    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug
    }
}

/// Timestamp component of generated names
pub fn timestamp(at: DateTime<Utc>) -> String {
    at.format("%Y%m%d_%H%M%S").to_string()
}

/// `{slug}_{YYYYMMDD_HHMMSS}.html`
pub fn site_filename(company_name: &str, at: DateTime<Utc>) -> String {
    format!("{}_{}.html", slugify(company_name), timestamp(at))
}

/// Bucket key for a generated filename
pub fn site_key(filename: &str) -> String {
    format!("{}{}", DEFAULT_PREFIX, filename)
}

/// Metadata keys are sent lowercased with `_` replaced by `-`
pub fn normalize_metadata_key(key: &str) -> String {
    key.trim().to_lowercase().replace('_', "-")
}

/// Object metadata travels as HTTP headers, so values keep printable ASCII only
pub fn normalize_metadata_value(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_ascii() && !c.is_ascii_control())
        .collect::<String>()
        .trim()
        .to_string()
}
