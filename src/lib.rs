//! # Lumina
//!
//! A command-line studio for AI-generated wallpapers: browse a curated
//! sample set, generate new wallpapers from text prompts via the Gemini
//! image API, and manage a personal collection persisted as a local JSON
//! file.
//!
//! # Architecture: One Call, One List
//!
//! The core is deliberately small — a single awaited provider call feeding a
//! flat, persisted list:
//!
//! ```text
//! prompt + style + ratio
//!        │
//!        ▼
//! 1. Assemble   instruction text + tags          (prompt)
//! 2. Generate   one generateContent call         (provider)
//! 3. Store      data URL → front of collection   (collection)
//! 4. Surface    list / export / HTML gallery     (output, export, gallery)
//! ```
//!
//! There is no retry, queue, or cache layer: a generation either yields a
//! data URL or fails, and every collection mutation rewrites the whole file.
//! At personal-collection scale that is the honest design — anything fancier
//! would be machinery without a workload.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`types`] | `Wallpaper` record and the closed `AspectRatio` set |
//! | [`prompt`] | Instruction assembly (styled vs. generic) and tag derivation |
//! | [`provider`] | Gemini `generateContent` client, inline-image extraction |
//! | [`collection`] | The persisted list: load once, save on every mutation |
//! | [`curated`] | Built-in sample set for the browse surface |
//! | [`export`] | Decode/fetch a wallpaper into a local image file |
//! | [`gallery`] | Static HTML rendering of the collection (Maud) |
//! | [`config`] | `config.toml` loading and the documented stock config |
//! | [`output`] | Information-first CLI text output |
//!
//! # Design Decisions
//!
//! ## Data URLs as the storage format
//!
//! Generated images are stored inline in the collection file as
//! `data:<mime>;base64,...` strings rather than as separate files. One blob
//! means one thing to back up, no orphaned-file bookkeeping, and the HTML
//! gallery embeds images with zero path resolution. The cost — a collection
//! file measured in megabytes — is acceptable for a personal library.
//!
//! ## Corruption falls back to empty
//!
//! The collection file is user-editable JSON. If it fails to parse we log a
//! warning and start empty instead of refusing to run; the tool must never
//! hold the user's workflow hostage to a stray comma. Config files are the
//! opposite: those the user wrote deliberately, so parse errors there are
//! hard failures.
//!
//! ## Maud over template engines
//!
//! The gallery is generated with [Maud](https://maud.lambda.xyz/):
//! compile-time checked markup, auto-escaped interpolation (prompts are
//! arbitrary user text), and no template files to ship.
//!
//! ## The provider boundary stays thin
//!
//! [`provider`] translates exactly one condition — a well-formed response
//! with no inline image — into its own error. Everything else (transport
//! failures, non-success statuses) passes through unchanged so the user sees
//! what the API actually said.

pub mod collection;
pub mod config;
pub mod curated;
pub mod export;
pub mod gallery;
pub mod output;
pub mod prompt;
pub mod provider;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
