//! CLI output formatting.
//!
//! # Information-First Display
//!
//! Output is information-centric: the primary line for every wallpaper is
//! its positional index plus the prompt (its semantic identity), with the
//! id, ratio, tags, and source shown as indented context lines. Ids are
//! UUIDs — useful for `remove`/`export`, unreadable as headers.
//!
//! ```text
//! Collection (2 wallpapers)
//! 001 A misty forest at dawn
//!     Id: 3e9f...
//!     Ratio: 16:9  Tags: watercolor, A
//!     Created: 2026-08-27
//!     Source: generated (data URL, 412 KB)
//! 002 Cyberpunk alley in the rain
//!     ...
//! ```
//!
//! # Architecture
//!
//! Each surface has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.

use crate::collection::Collection;
use crate::curated::FEATURED_COLLECTIONS;
use crate::types::Wallpaper;

const PROMPT_DISPLAY_MAX: usize = 60;

// ============================================================================
// Shared entity display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

/// Entity header: positional index + prompt.
fn entity_header(index: usize, wallpaper: &Wallpaper) -> String {
    format!(
        "{} {}",
        format_index(index),
        truncate(&wallpaper.prompt, PROMPT_DISPLAY_MAX)
    )
}

/// Indented context lines below an entity header.
fn context_lines(wallpaper: &Wallpaper) -> Vec<String> {
    let mut lines = vec![format!("    Id: {}", wallpaper.id)];

    let mut ratio_line = format!("    Ratio: {}", wallpaper.aspect_ratio);
    if !wallpaper.tags.is_empty() {
        ratio_line.push_str(&format!("  Tags: {}", wallpaper.tags.join(", ")));
    }
    lines.push(ratio_line);

    if let Some(date) = chrono::DateTime::from_timestamp_millis(wallpaper.created_at)
        .filter(|_| wallpaper.created_at > 0)
    {
        lines.push(format!("    Created: {}", date.format("%Y-%m-%d")));
    }

    lines.push(format!("    Source: {}", describe_source(&wallpaper.url)));
    lines
}

/// Human description of where the image bytes live.
fn describe_source(url: &str) -> String {
    if url.starts_with("data:") {
        // base64 inflates by 4/3; report the decoded size
        format!("generated (data URL, {} KB)", url.len() * 3 / 4 / 1024)
    } else {
        url.to_string()
    }
}

// ============================================================================
// Collection listing
// ============================================================================

/// Format the personal collection, most-recent-first.
pub fn format_collection(collection: &Collection) -> Vec<String> {
    if collection.is_empty() {
        return vec!["Collection is empty — try `lumina generate`".to_string()];
    }

    let noun = if collection.len() == 1 {
        "wallpaper"
    } else {
        "wallpapers"
    };
    let mut lines = vec![format!("Collection ({} {})", collection.len(), noun)];
    for (i, wallpaper) in collection.iter().enumerate() {
        lines.push(entity_header(i + 1, wallpaper));
        lines.extend(context_lines(wallpaper));
    }
    lines
}

pub fn print_collection(collection: &Collection) {
    for line in format_collection(collection) {
        println!("{line}");
    }
}

// ============================================================================
// Curated browse
// ============================================================================

/// Format the curated sample set plus featured collection names.
pub fn format_curated(curated: &[Wallpaper]) -> Vec<String> {
    let mut lines = vec![format!("Curated ({} wallpapers)", curated.len())];
    for (i, wallpaper) in curated.iter().enumerate() {
        lines.push(entity_header(i + 1, wallpaper));
        lines.push(format!("    Id: {}", wallpaper.id));
        lines.push(format!("    Ratio: {}", wallpaper.aspect_ratio));
        lines.push(format!("    Source: {}", wallpaper.url));
    }
    lines.push(String::new());
    lines.push(format!("Featured: {}", FEATURED_COLLECTIONS.join(" · ")));
    lines
}

pub fn print_curated(curated: &[Wallpaper]) {
    for line in format_curated(curated) {
        println!("{line}");
    }
}

// ============================================================================
// Generation result
// ============================================================================

/// Format the outcome of a successful generation.
pub fn format_generated(wallpaper: &Wallpaper) -> Vec<String> {
    let mut lines = vec![format!(
        "Generated \"{}\"",
        truncate(&wallpaper.prompt, PROMPT_DISPLAY_MAX)
    )];
    lines.extend(context_lines(wallpaper));
    lines
}

pub fn print_generated(wallpaper: &Wallpaper) {
    for line in format_generated(wallpaper) {
        println!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curated::curated_wallpapers;
    use crate::test_helpers::wallpaper;

    #[test]
    fn empty_collection_prints_hint() {
        let lines = format_collection(&Collection::empty());
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("empty"));
    }

    #[test]
    fn collection_lists_entities_with_context() {
        let mut c = Collection::empty();
        c.append(wallpaper("a", "first prompt"));
        c.append(wallpaper("b", "second prompt"));

        let lines = format_collection(&c);
        assert_eq!(lines[0], "Collection (2 wallpapers)");
        // most-recent-first: "b" was appended last
        assert_eq!(lines[1], "001 second prompt");
        assert_eq!(lines[2], "    Id: b");
        assert!(lines.iter().any(|l| l.contains("Ratio: 16:9")));
        assert!(lines.iter().any(|l| l.contains("Tags: watercolor, second")));
    }

    #[test]
    fn singular_noun_for_one_wallpaper() {
        let mut c = Collection::empty();
        c.append(wallpaper("a", "p"));
        assert_eq!(format_collection(&c)[0], "Collection (1 wallpaper)");
    }

    #[test]
    fn long_prompts_are_truncated_in_header() {
        let mut c = Collection::empty();
        c.append(wallpaper("a", &"x".repeat(100)));
        let header = &format_collection(&c)[1];
        assert!(header.ends_with("..."));
        assert!(header.len() < 100);
    }

    #[test]
    fn data_urls_described_not_dumped() {
        let mut w = wallpaper("a", "p");
        w.url = format!("data:image/png;base64,{}", "A".repeat(8192));
        let lines = context_lines(&w);
        let source = lines.last().unwrap();
        assert!(source.contains("generated (data URL"));
        assert!(source.len() < 80);
    }

    #[test]
    fn curated_output_ends_with_featured() {
        let lines = format_curated(&curated_wallpapers());
        assert_eq!(lines[0], "Curated (12 wallpapers)");
        assert!(lines.last().unwrap().starts_with("Featured: "));
    }
}
