//! Instruction assembly and tag derivation for generation requests.
//!
//! The provider receives a natural-language instruction built from the user's
//! prompt and an optional style. The two shapes are deliberately distinct:
//! a styled request names the style and subject explicitly so the model
//! weights the style over the subject's own adjectives; an unstyled request
//! leans on photographic-quality qualifiers instead.
//!
//! Tags are a display affordance for the library view: the style id plus the
//! first word of the prompt, with empty entries dropped.

use crate::types::AspectRatio;

/// Built-in style identifiers offered by the create form.
///
/// Any free-form style string is accepted by [`Instruction::resolve`]; this
/// list only drives CLI help and the styles listing.
pub const STYLES: [&str; 6] = [
    "cinematic",
    "minimalist",
    "cyberpunk",
    "anime",
    "watercolor",
    "surreal",
];

/// User inputs for one generation request.
#[derive(Debug, Clone)]
pub struct GenerationParams {
    pub prompt: String,
    pub aspect_ratio: AspectRatio,
    pub style: Option<String>,
}

/// A resolved instruction, with the optional-style branch decided up front.
#[derive(Debug, Clone, PartialEq)]
pub enum Instruction {
    /// Style-led request: names the style and subject explicitly.
    WithStyle { style: String, subject: String },
    /// No style selected: generic photographic-quality request.
    Generic { subject: String },
}

impl Instruction {
    /// Resolve prompt + optional style into an instruction variant.
    ///
    /// A blank or whitespace-only style counts as absent.
    pub fn resolve(prompt: &str, style: Option<&str>) -> Self {
        match style.map(str::trim).filter(|s| !s.is_empty()) {
            Some(style) => Instruction::WithStyle {
                style: style.to_string(),
                subject: prompt.to_string(),
            },
            None => Instruction::Generic {
                subject: prompt.to_string(),
            },
        }
    }

    /// The full instruction text sent to the provider.
    pub fn to_prompt_text(&self) -> String {
        match self {
            Instruction::WithStyle { style, subject } => format!(
                "A high-resolution, artistic wallpaper. Style: {style}. Subject: {subject}. \
                 High detail, 8k resolution, cinematic lighting."
            ),
            Instruction::Generic { subject } => format!(
                "A breathtaking high-resolution wallpaper of {subject}. \
                 Professional photography, vibrant colors, stunning detail."
            ),
        }
    }
}

/// Derive display tags for a record: `[style, first prompt word]`.
///
/// Either part may be missing (no style selected, empty prompt); missing and
/// empty parts are dropped, so the result never contains an empty string.
pub fn derive_tags(style: Option<&str>, prompt: &str) -> Vec<String> {
    let style = style.map(str::trim).filter(|s| !s.is_empty());
    let first_word = prompt.split_whitespace().next();
    [style, first_word]
        .into_iter()
        .flatten()
        .map(String::from)
        .collect()
}
