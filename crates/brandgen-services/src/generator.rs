//! Website generation pipeline: prompt, completion, cleanup, well-formedness check.

use std::sync::Arc;

use brandgen_core::{BrandParameters, GeneratedDocument};
use chrono::Utc;

use crate::error::GenerationError;
use crate::prompt::{build_prompt, SYSTEM_PROMPT};
use crate::provider::CompletionProvider;
use crate::sanitize::{sanitize, validate_html, SanitizeOptions};

#[derive(Clone)]
pub struct GenerationService {
    provider: Arc<dyn CompletionProvider>,
    options: SanitizeOptions,
}

impl GenerationService {
    pub fn new(provider: Arc<dyn CompletionProvider>, options: SanitizeOptions) -> Self {
        Self { provider, options }
    }

    pub fn model_name(&self) -> &str {
        self.provider.model_name()
    }

    /// Generate one website document for the given parameters.
    ///
    /// A reply that is not a complete HTML page is still returned, flagged
    /// with `well_formed: false`.
    pub async fn generate(
        &self,
        params: &BrandParameters,
    ) -> Result<GeneratedDocument, GenerationError> {
        let start = std::time::Instant::now();
        let prompt = build_prompt(params);

        tracing::debug!(
            company = %params.company_name(),
            tone = %params.tone(),
            design_style = %params.design_style(),
            prompt_chars = prompt.len(),
            "Requesting website generation"
        );

        let raw = self.provider.complete(SYSTEM_PROMPT, &prompt).await?;
        let html = sanitize(&raw, &self.options);
        let well_formed = validate_html(&html);

        if !well_formed {
            tracing::warn!(
                company = %params.company_name(),
                html_length = html.len(),
                "Generated content is not a complete HTML document"
            );
        }

        tracing::info!(
            company = %params.company_name(),
            model = %self.provider.model_name(),
            raw_length = raw.len(),
            html_length = html.len(),
            well_formed,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Website generated"
        );

        Ok(GeneratedDocument {
            html,
            source_parameters: params.clone(),
            created_at: Utc::now(),
            well_formed,
        })
    }
}
