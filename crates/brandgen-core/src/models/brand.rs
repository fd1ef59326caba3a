use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;
use utoipa::ToSchema;
use validator::Validate;

use crate::validation::{self, ValidationError};

/// Tone of voice for the generated copy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Formal,
    Semiformal,
    Casual,
    Playful,
}

impl Tone {
    pub const ALL: [Tone; 4] = [Tone::Formal, Tone::Semiformal, Tone::Casual, Tone::Playful];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Formal => "formal",
            Tone::Semiformal => "semiformal",
            Tone::Casual => "casual",
            Tone::Playful => "playful",
        }
    }

    pub fn allowed_values() -> Vec<&'static str> {
        Self::ALL.iter().map(Tone::as_str).collect()
    }
}

impl FromStr for Tone {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|tone| tone.as_str() == lowered)
            .ok_or_else(|| ValidationError::InvalidTone {
                value: s.to_string(),
                allowed: Self::allowed_values(),
            })
    }
}

impl Display for Tone {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Visual design direction for the generated page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DesignStyle {
    Modern,
    Minimalistic,
    Corporate,
    Artistic,
}

impl DesignStyle {
    pub const ALL: [DesignStyle; 4] = [
        DesignStyle::Modern,
        DesignStyle::Minimalistic,
        DesignStyle::Corporate,
        DesignStyle::Artistic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DesignStyle::Modern => "modern",
            DesignStyle::Minimalistic => "minimalistic",
            DesignStyle::Corporate => "corporate",
            DesignStyle::Artistic => "artistic",
        }
    }

    pub fn allowed_values() -> Vec<&'static str> {
        Self::ALL.iter().map(DesignStyle::as_str).collect()
    }
}

impl FromStr for DesignStyle {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|style| style.as_str() == lowered)
            .ok_or_else(|| ValidationError::InvalidDesignStyle {
                value: s.to_string(),
                allowed: Self::allowed_values(),
            })
    }
}

impl Display for DesignStyle {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Hex color normalized to uppercase with a leading `#` (e.g. `#FF5733`, `#F57`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, ToSchema)]
#[serde(transparent)]
pub struct HexColor(String);

impl HexColor {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        if !validation::is_hex_color(raw) {
            return Err(ValidationError::InvalidColor {
                value: raw.to_string(),
            });
        }
        Ok(HexColor(raw.to_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for HexColor {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HexColor::parse(s)
    }
}

impl Display for HexColor {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

/// Raw branding input as submitted by a client
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct BrandingRequest {
    /// Name of the company
    #[validate(length(
        min = 1,
        max = 200,
        message = "Company name must be between 1 and 200 characters"
    ))]
    pub company_name: String,
    /// Brand identity description
    #[validate(length(
        min = 1,
        max = 2000,
        message = "Brand identity must be between 1 and 2000 characters"
    ))]
    pub brand_identity: String,
    /// Tone of voice: formal, semiformal, casual, or playful
    pub tone: String,
    /// Design style: modern, minimalistic, corporate, or artistic
    pub design_style: String,
    /// Primary color in HEX format (e.g., #FF5733)
    pub primary_color: String,
}

/// Validated, normalized branding parameters.
///
/// Only obtainable through validation, so every instance satisfies the enum and
/// color invariants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct BrandParameters {
    company_name: String,
    brand_identity: String,
    tone: Tone,
    design_style: DesignStyle,
    primary_color: HexColor,
}

impl BrandParameters {
    pub fn new(
        company_name: impl Into<String>,
        brand_identity: impl Into<String>,
        tone: Tone,
        design_style: DesignStyle,
        primary_color: HexColor,
    ) -> Result<Self, ValidationError> {
        let company_name = validation::require_text("company_name", company_name.into())?;
        let brand_identity = validation::require_text("brand_identity", brand_identity.into())?;

        Ok(Self {
            company_name,
            brand_identity,
            tone,
            design_style,
            primary_color,
        })
    }

    pub fn company_name(&self) -> &str {
        &self.company_name
    }

    pub fn brand_identity(&self) -> &str {
        &self.brand_identity
    }

    pub fn tone(&self) -> Tone {
        self.tone
    }

    pub fn design_style(&self) -> DesignStyle {
        self.design_style
    }

    pub fn primary_color(&self) -> &HexColor {
        &self.primary_color
    }
}
