//! Static HTML gallery of the personal collection.
//!
//! Renders the library view as one self-contained `index.html` using Maud:
//! compile-time checked markup, auto-escaped interpolation, inline CSS, no
//! JavaScript. Generated wallpapers are data URLs, so they embed directly in
//! the page and the file works offline; curated imports keep their remote
//! references.

use maud::{DOCTYPE, Markup, html};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::collection::Collection;
use crate::types::Wallpaper;

const CSS: &str = include_str!("../static/gallery.css");

#[derive(Error, Debug)]
pub enum GalleryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Render the collection and write it as `index.html` under `out_dir`.
pub fn write_gallery(collection: &Collection, out_dir: &Path) -> Result<PathBuf, GalleryError> {
    let wallpapers: Vec<&Wallpaper> = collection.iter().collect();
    let page = render_gallery(&wallpapers);

    std::fs::create_dir_all(out_dir)?;
    let path = out_dir.join("index.html");
    std::fs::write(&path, page.into_string())?;
    Ok(path)
}

/// Render the full gallery page.
pub fn render_gallery(wallpapers: &[&Wallpaper]) -> Markup {
    base_document(
        "Lumina — My Wallpapers",
        html! {
            header.gallery-header {
                h1 { "My Wallpapers" }
                p.subtitle { (wallpapers.len()) " in collection" }
            }
            @if wallpapers.is_empty() {
                p.empty { "Nothing here yet. Generate your first wallpaper with "
                          code { "lumina generate" } "." }
            } @else {
                main.wallpaper-grid {
                    @for wallpaper in wallpapers {
                        (render_card(wallpaper))
                    }
                }
            }
        },
    )
}

/// Renders the base HTML document structure.
fn base_document(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (maud::PreEscaped(CSS)) }
            }
            body {
                (content)
            }
        }
    }
}

/// Renders one wallpaper card: image, prompt caption, ratio badge, tag chips.
fn render_card(wallpaper: &Wallpaper) -> Markup {
    html! {
        figure.card {
            img src=(wallpaper.url) alt=(wallpaper.prompt) loading="lazy";
            figcaption {
                p.prompt { (wallpaper.prompt) }
                div.meta {
                    span.ratio { (wallpaper.aspect_ratio) }
                    @for tag in &wallpaper.tags {
                        span.tag { (tag) }
                    }
                }
                @if let Some(date) = format_created(wallpaper.created_at) {
                    time.created { (date) }
                }
            }
        }
    }
}

/// Human date for the card footer; `None` for out-of-range timestamps
/// (curated placeholders carry 0).
fn format_created(millis: i64) -> Option<String> {
    if millis <= 0 {
        return None;
    }
    chrono::DateTime::from_timestamp_millis(millis).map(|dt| dt.format("%Y-%m-%d").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::wallpaper;
    use tempfile::TempDir;

    #[test]
    fn card_embeds_url_prompt_and_tags() {
        let w = wallpaper("a", "A misty forest at dawn");
        let html = render_gallery(&[&w]).into_string();
        assert!(html.contains(&w.url));
        assert!(html.contains("A misty forest at dawn"));
        assert!(html.contains(r#"<span class="tag">watercolor</span>"#));
        assert!(html.contains("16:9"));
    }

    #[test]
    fn prompt_text_is_escaped() {
        let mut w = wallpaper("a", "p");
        w.prompt = "<script>alert(1)</script>".to_string();
        let html = render_gallery(&[&w]).into_string();
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn empty_collection_renders_placeholder() {
        let html = render_gallery(&[]).into_string();
        assert!(html.contains("Nothing here yet"));
        assert!(!html.contains("<figure"));
    }

    #[test]
    fn write_gallery_produces_index_html() {
        let tmp = TempDir::new().unwrap();
        let mut c = Collection::empty();
        c.append(wallpaper("a", "dunes"));

        let path = write_gallery(&c, tmp.path()).unwrap();
        assert_eq!(path.file_name().unwrap(), "index.html");
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("<!DOCTYPE html>"));
        assert!(content.contains("dunes"));
    }
}
