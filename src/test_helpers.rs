//! Shared fixtures for the lumina test suite.

use crate::prompt::derive_tags;
use crate::types::{AspectRatio, Wallpaper};

/// Build a wallpaper with a known id and prompt.
///
/// Defaults mirror a real generated record: 16:9, watercolor style, a small
/// PNG data URL, a fixed timestamp so formatted dates stay stable. Tests
/// needing other fields mutate the result.
pub fn wallpaper(id: &str, prompt: &str) -> Wallpaper {
    Wallpaper {
        id: id.to_string(),
        url: "data:image/png;base64,aGVsbG8=".to_string(),
        prompt: prompt.to_string(),
        aspect_ratio: AspectRatio::Wide,
        created_at: 1_700_000_000_000,
        tags: derive_tags(Some("watercolor"), prompt),
    }
}
