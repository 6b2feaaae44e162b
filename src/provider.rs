//! Gemini generation client.
//!
//! One awaited POST to the `generateContent` endpoint per request — no retry,
//! no backoff, no timeout, no idempotency key. Provider and transport
//! failures propagate to the caller unchanged; the only condition translated
//! locally is a well-formed response that carries no inline image
//! ([`ProviderError::NoImage`]).
//!
//! The successful result is a `data:<mime>;base64,<payload>` string built
//! from the first inline-data fragment in the response, usable directly as
//! an image source and storable as a [`Wallpaper::url`](crate::types::Wallpaper).

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::ProviderConfig;
use crate::prompt::{GenerationParams, Instruction};

/// Environment variable holding the Gemini API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("{API_KEY_ENV} is not set")]
    MissingApiKey,
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("provider returned {status}: {message}")]
    Api { status: StatusCode, message: String },
    #[error("no image was generated in the response")]
    NoImage,
}

/// Client for the Gemini image-generation endpoint.
pub struct GeminiClient {
    http: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: String, config: &ProviderConfig) -> Self {
        Self {
            http: Client::new(),
            api_key,
            model: config.model.clone(),
            base_url: config.base_url.clone(),
        }
    }

    /// Build a client with the API key taken from [`API_KEY_ENV`].
    pub fn from_env(config: &ProviderConfig) -> Result<Self, ProviderError> {
        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|k| !k.is_empty())
            .ok_or(ProviderError::MissingApiKey)?;
        Ok(Self::new(api_key, config))
    }

    /// Generate one image and return it as a data URL.
    pub async fn generate(&self, params: &GenerationParams) -> Result<String, ProviderError> {
        let instruction = Instruction::resolve(&params.prompt, params.style.as_deref());
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![TextPart {
                    text: instruction.to_prompt_text(),
                }],
            }],
            generation_config: GenerationConfig {
                image_config: ImageConfig {
                    aspect_ratio: params.aspect_ratio.as_str().to_string(),
                },
            },
        };

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        );
        log::debug!("generateContent → {} ({})", self.model, params.aspect_ratio);

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api { status, message });
        }

        let parsed: GenerateContentResponse = response.json().await?;
        extract_data_url(&parsed).ok_or(ProviderError::NoImage)
    }
}

// ============================================================================
// Wire types
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<TextPart>,
}

#[derive(Debug, Serialize)]
struct TextPart {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    image_config: ImageConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ImageConfig {
    aspect_ratio: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

/// A response fragment; text and inline-data parts can be interleaved.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponsePart {
    inline_data: Option<InlineData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

/// Scan response fragments in order and build a data URL from the first one
/// carrying inline image data.
fn extract_data_url(response: &GenerateContentResponse) -> Option<String> {
    response
        .candidates
        .iter()
        .filter_map(|c| c.content.as_ref())
        .flat_map(|c| c.parts.iter())
        .find_map(|part| {
            let inline = part.inline_data.as_ref()?;
            Some(format!("data:{};base64,{}", inline.mime_type, inline.data))
        })
}
