//! Writing wallpapers out as local image files.
//!
//! The CLI counterpart of the original download action: generated wallpapers
//! are data URLs whose payload is decoded and written directly; curated
//! samples are remote URLs that get fetched first. Either way the output is
//! `lumina-<id>.<ext>` in the chosen directory, with the extension derived
//! from the image MIME type.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use reqwest::StatusCode;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::types::Wallpaper;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("malformed data URL: {0}")]
    BadDataUrl(String),
    #[error("fetch failed with status {0}")]
    Fetch(StatusCode),
}

/// Write a wallpaper's image bytes to `dir` and return the written path.
pub async fn export(wallpaper: &Wallpaper, dir: &Path) -> Result<PathBuf, ExportError> {
    let (mime, bytes) = if wallpaper.url.starts_with("data:") {
        parse_data_url(&wallpaper.url)?
    } else {
        fetch_remote(&wallpaper.url).await?
    };

    std::fs::create_dir_all(dir)?;
    let path = dir.join(format!(
        "lumina-{}.{}",
        wallpaper.id,
        extension_for_mime(&mime)
    ));
    std::fs::write(&path, bytes)?;
    Ok(path)
}

/// Split a `data:<mime>;base64,<payload>` URL into MIME type and raw bytes.
fn parse_data_url(url: &str) -> Result<(String, Vec<u8>), ExportError> {
    let bad = || ExportError::BadDataUrl(truncate(url, 64));
    let rest = url.strip_prefix("data:").ok_or_else(bad)?;
    let (header, payload) = rest.split_once(',').ok_or_else(bad)?;
    let mime = header.strip_suffix(";base64").ok_or_else(bad)?;
    if mime.is_empty() {
        return Err(bad());
    }
    let bytes = BASE64.decode(payload).map_err(|_| bad())?;
    Ok((mime.to_string(), bytes))
}

async fn fetch_remote(url: &str) -> Result<(String, Vec<u8>), ExportError> {
    let response = reqwest::get(url).await?;
    if !response.status().is_success() {
        return Err(ExportError::Fetch(response.status()));
    }
    let mime = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.split(';').next().unwrap_or(v).trim().to_string())
        .unwrap_or_else(|| "image/jpeg".to_string());
    let bytes = response.bytes().await?.to_vec();
    Ok((mime, bytes))
}

/// File extension for an image MIME type. Unrecognized subtypes fall back
/// to the subtype itself, which is correct for png/webp/avif/gif.
fn extension_for_mime(mime: &str) -> &str {
    match mime {
        "image/jpeg" => "jpg",
        "image/svg+xml" => "svg",
        _ => mime.split('/').next_back().unwrap_or("png"),
    }
}

fn truncate(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => format!("{}...", &s[..idx]),
        None => s.to_string(),
    }
}
