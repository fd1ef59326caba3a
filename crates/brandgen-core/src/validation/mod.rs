//! Validation of raw branding input
//!
//! Tone and design style are matched case-insensitively and normalized to
//! lowercase; colors must be `#` followed by 3 or 6 hex digits and are
//! normalized to uppercase. Company name and brand identity are free text that
//! only has to be present.

use std::sync::LazyLock;

use regex::Regex;
use validator::Validate;

use crate::models::{BrandParameters, BrandingRequest, DesignStyle, HexColor, Tone};

static HEX_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#(?:[0-9a-fA-F]{3}){1,2}$").expect("hex color pattern is valid")
});

/// Input validation failures. Each names the offending field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Tone must be one of: {}", .allowed.join(", "))]
    InvalidTone {
        value: String,
        allowed: Vec<&'static str>,
    },

    #[error("Design style must be one of: {}", .allowed.join(", "))]
    InvalidDesignStyle {
        value: String,
        allowed: Vec<&'static str>,
    },

    #[error("Primary color must be a valid HEX color (e.g., #FF5733 or #F57), got '{value}'")]
    InvalidColor { value: String },

    #[error("{field} must not be empty")]
    MissingField { field: String },

    #[error("{message}")]
    InvalidField { field: String, message: String },
}

impl ValidationError {
    /// Name of the request field that failed validation
    pub fn field(&self) -> &str {
        match self {
            ValidationError::InvalidTone { .. } => "tone",
            ValidationError::InvalidDesignStyle { .. } => "design_style",
            ValidationError::InvalidColor { .. } => "primary_color",
            ValidationError::MissingField { field } => field.as_str(),
            ValidationError::InvalidField { field, .. } => field.as_str(),
        }
    }

    /// Accepted values for enumerated fields
    pub fn allowed_values(&self) -> Option<&[&'static str]> {
        match self {
            ValidationError::InvalidTone { allowed, .. }
            | ValidationError::InvalidDesignStyle { allowed, .. } => Some(allowed.as_slice()),
            _ => None,
        }
    }
}

impl From<validator::ValidationErrors> for ValidationError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut failures: Vec<(String, String)> = errors
            .field_errors()
            .into_iter()
            .map(|(field, errs)| {
                let message = errs
                    .first()
                    .and_then(|e| e.message.as_ref())
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field));
                (field.to_string(), message)
            })
            .collect();
        failures.sort();

        match failures.into_iter().next() {
            Some((field, message)) => ValidationError::InvalidField { field, message },
            None => ValidationError::InvalidField {
                field: "body".to_string(),
                message: errors.to_string(),
            },
        }
    }
}

pub fn is_hex_color(raw: &str) -> bool {
    HEX_COLOR.is_match(raw)
}

pub fn validate_tone(raw: &str) -> Result<Tone, ValidationError> {
    raw.parse()
}

pub fn validate_design_style(raw: &str) -> Result<DesignStyle, ValidationError> {
    raw.parse()
}

pub fn validate_hex_color(raw: &str) -> Result<HexColor, ValidationError> {
    HexColor::parse(raw)
}

/// Reject free-text fields that are blank once surrounding whitespace is removed
pub(crate) fn require_text(field: &str, value: String) -> Result<String, ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField {
            field: field.to_string(),
        });
    }
    Ok(value)
}

impl BrandingRequest {
    /// Validate and normalize into [`BrandParameters`], failing on the first bad field
    pub fn into_parameters(self) -> Result<BrandParameters, ValidationError> {
        self.validate()?;

        let tone = validate_tone(&self.tone)?;
        let design_style = validate_design_style(&self.design_style)?;
        let primary_color = validate_hex_color(&self.primary_color)?;

        BrandParameters::new(
            self.company_name,
            self.brand_identity,
            tone,
            design_style,
            primary_color,
        )
    }
}
