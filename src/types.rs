//! Shared types for the wallpaper collection.
//!
//! These types are serialized to the collection file as a JSON array and
//! must stay field-compatible with what previous versions wrote. Field names
//! are camelCase on disk (`aspectRatio`, `createdAt`), matching the original
//! persisted format.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Target width:height proportion for generated images.
///
/// A closed set — the provider only accepts these five ratios, so the type
/// system enforces the invariant instead of a runtime check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AspectRatio {
    /// 1:1 — square
    #[serde(rename = "1:1")]
    Square,
    /// 3:4 — portrait
    #[serde(rename = "3:4")]
    Portrait,
    /// 4:3 — landscape
    #[serde(rename = "4:3")]
    Landscape,
    /// 9:16 — tall widescreen (phones)
    #[serde(rename = "9:16")]
    Tall,
    /// 16:9 — widescreen (desktops)
    #[serde(rename = "16:9")]
    Wide,
}

impl AspectRatio {
    /// All supported ratios, in display order.
    pub const ALL: [AspectRatio; 5] = [
        AspectRatio::Square,
        AspectRatio::Portrait,
        AspectRatio::Landscape,
        AspectRatio::Tall,
        AspectRatio::Wide,
    ];

    /// The `W:H` string form used on the wire and in the CLI.
    pub fn as_str(&self) -> &'static str {
        match self {
            AspectRatio::Square => "1:1",
            AspectRatio::Portrait => "3:4",
            AspectRatio::Landscape => "4:3",
            AspectRatio::Tall => "9:16",
            AspectRatio::Wide => "16:9",
        }
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AspectRatio {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AspectRatio::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| {
                let valid: Vec<&str> = AspectRatio::ALL.iter().map(|r| r.as_str()).collect();
                format!(
                    "unknown aspect ratio '{s}' (expected one of {})",
                    valid.join(", ")
                )
            })
    }
}

/// One generated or curated wallpaper entry.
///
/// `url` is either a remote reference (curated samples) or a
/// `data:<mime>;base64,<payload>` data URL (generated images).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wallpaper {
    /// UUID v4, assigned at creation time.
    pub id: String,
    pub url: String,
    /// The literal user-submitted prompt text.
    pub prompt: String,
    pub aspect_ratio: AspectRatio,
    /// Milliseconds since the Unix epoch.
    pub created_at: i64,
    /// Short labels: style id + first prompt token. Never contains
    /// an empty string.
    pub tags: Vec<String>,
}

impl Wallpaper {
    /// Create a new record with a fresh id and the current timestamp.
    pub fn new(url: String, prompt: String, aspect_ratio: AspectRatio, tags: Vec<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            url,
            prompt,
            aspect_ratio,
            created_at: chrono::Utc::now().timestamp_millis(),
            tags,
        }
    }
}
