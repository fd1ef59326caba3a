//! Prompt construction for website generation.
//!
//! `build_prompt` is a pure function of the parameters: the same input always
//! yields a byte-identical prompt.

use brandgen_core::{BrandParameters, DesignStyle, Tone};

/// System message sent alongside every generation prompt
pub const SYSTEM_PROMPT: &str = "You are an expert web developer and brand designer. \
You reply with a single complete HTML5 document and nothing else.";

/// Descriptive phrase for the copywriting voice
pub fn tone_phrase(tone: Tone) -> &'static str {
    match tone {
        Tone::Formal => {
            "professional, authoritative and polished, using complete sentences and no slang"
        }
        Tone::Semiformal => "friendly yet professional, approachable while remaining credible",
        Tone::Casual => "relaxed and conversational, as if talking to a friend",
        Tone::Playful => "fun, energetic and witty, with lighthearted wording and wordplay",
    }
}

/// CSS techniques that characterize each design style
pub fn style_techniques(style: DesignStyle) -> &'static str {
    match style {
        DesignStyle::Modern => {
            "CSS grid and flexbox layouts, bold sans-serif typography, generous whitespace, \
             subtle linear gradients and smooth hover transitions"
        }
        DesignStyle::Minimalistic => {
            "a restrained two-color palette, ample whitespace, simple typography, \
             thin borders and no decorative clutter"
        }
        DesignStyle::Corporate => {
            "a structured grid of sections, a clear navigation bar, conservative serif headings, \
             card-based service listings and soft box shadows"
        }
        DesignStyle::Artistic => {
            "asymmetric layouts, expressive display typography, clip-path shapes, \
             layered gradients and creative keyframe animations"
        }
    }
}

/// Build the instruction text for one website
pub fn build_prompt(params: &BrandParameters) -> String {
    let parts = [
        format!(
            "Create a complete, single-page website for a company named \"{}\".",
            params.company_name()
        ),
        format!("Brand identity: {}", params.brand_identity()),
        format!(
            "Tone of voice ({}): the copy should be {}.",
            params.tone(),
            tone_phrase(params.tone())
        ),
        format!(
            "Design style ({}): use {}.",
            params.design_style(),
            style_techniques(params.design_style())
        ),
        format!(
            "Primary color: {}. Use it for the main accents, buttons and headings, \
             and derive a harmonious palette from it.",
            params.primary_color()
        ),
        String::new(),
        "Requirements:".to_string(),
        "- Return one self-contained HTML5 document.".to_string(),
        "- Put all CSS inline in a single <style> element in the <head>; no external stylesheets, fonts or scripts.".to_string(),
        "- Do not reference external images; use CSS shapes, gradients or inline SVG instead.".to_string(),
        "- Include a header with navigation, a hero section, an about section, a services section, a contact section and a footer.".to_string(),
        "- Make the layout responsive with media queries.".to_string(),
        "- Do not wrap the output in markdown code fences and do not add explanations.".to_string(),
        "- The response must start with <!DOCTYPE html> and end with </html>.".to_string(),
        "- Do not emit literal escape sequences such as \\n or \\t; use real line breaks.".to_string(),
    ];

    parts.join("\n")
}
