//! The personal wallpaper collection.
//!
//! A flat, ordered list of [`Wallpaper`] records with two external
//! touchpoints: load once at startup, persist in full after every mutation.
//! No incremental diffing, no transactional guarantees, no concurrent-writer
//! protection — single process, single thread.
//!
//! # Storage
//!
//! The collection is one JSON array on disk (most-recent-first). A missing
//! file is a first run; an unparseable file is discarded with a warning and
//! the collection starts empty. There is no partial-recovery logic: the blob
//! either parses or it doesn't.
//!
//! The store is an explicit object passed by reference to callers — no
//! process-wide state.

use std::io;
use std::path::Path;

use crate::types::Wallpaper;

/// Default collection file name within the data directory.
pub const COLLECTION_FILENAME: &str = "wallpapers.json";

/// An ordered, mutable wallpaper list, most-recent-first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Collection {
    wallpapers: Vec<Wallpaper>,
}

impl Collection {
    /// Create an empty collection.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load from a collection file. Returns an empty collection if the file
    /// doesn't exist or can't be parsed (corruption is logged, not surfaced).
    pub fn load(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(_) => return Self::empty(),
        };
        match serde_json::from_str::<Vec<Wallpaper>>(&content) {
            Ok(wallpapers) => Self { wallpapers },
            Err(e) => {
                log::warn!(
                    "discarding unparseable collection at {}: {e}",
                    path.display()
                );
                Self::empty()
            }
        }
    }

    /// Save the full collection to `path`, creating parent directories as
    /// needed. Callers persist after every mutation.
    pub fn save(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.wallpapers)?;
        std::fs::write(path, json)
    }

    /// Insert a record at the front (most-recent-first ordering).
    pub fn append(&mut self, wallpaper: Wallpaper) {
        self.wallpapers.insert(0, wallpaper);
    }

    /// Remove the record with the given id. Returns whether anything was
    /// removed; an absent id is a silent no-op.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.wallpapers.len();
        self.wallpapers.retain(|w| w.id != id);
        self.wallpapers.len() != before
    }

    /// Look up a record by id.
    pub fn get(&self, id: &str) -> Option<&Wallpaper> {
        self.wallpapers.iter().find(|w| w.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Wallpaper> {
        self.wallpapers.iter()
    }

    pub fn len(&self) -> usize {
        self.wallpapers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wallpapers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::wallpaper;
    use std::fs;
    use tempfile::TempDir;

    fn collection_path(tmp: &TempDir) -> std::path::PathBuf {
        tmp.path().join(COLLECTION_FILENAME)
    }

    // =========================================================================
    // Ordering and mutation
    // =========================================================================

    #[test]
    fn append_is_most_recent_first() {
        let mut c = Collection::empty();
        c.append(wallpaper("a", "first"));
        c.append(wallpaper("b", "second"));
        c.append(wallpaper("c", "third"));

        let ids: Vec<&str> = c.iter().map(|w| w.id.as_str()).collect();
        assert_eq!(ids, ["c", "b", "a"]);
    }

    #[test]
    fn remove_preserves_order_of_rest() {
        let mut c = Collection::empty();
        for id in ["a", "b", "c", "d"] {
            c.append(wallpaper(id, "p"));
        }
        assert!(c.remove("c"));

        assert_eq!(c.len(), 3);
        let ids: Vec<&str> = c.iter().map(|w| w.id.as_str()).collect();
        assert_eq!(ids, ["d", "b", "a"]);
    }

    #[test]
    fn remove_absent_id_is_noop() {
        let mut c = Collection::empty();
        c.append(wallpaper("a", "p"));
        assert!(!c.remove("nope"));
        assert_eq!(c.len(), 1);
    }

    #[test]
    fn get_finds_by_id() {
        let mut c = Collection::empty();
        c.append(wallpaper("a", "dunes"));
        assert_eq!(c.get("a").map(|w| w.prompt.as_str()), Some("dunes"));
        assert!(c.get("b").is_none());
    }

    // =========================================================================
    // Save / Load
    // =========================================================================

    #[test]
    fn save_and_load_roundtrip() {
        let tmp = TempDir::new().unwrap();
        let path = collection_path(&tmp);

        let mut c = Collection::empty();
        c.append(wallpaper("a", "first"));
        c.append(wallpaper("b", "second"));
        c.save(&path).unwrap();

        let loaded = Collection::load(&path);
        assert_eq!(loaded, c);
    }

    #[test]
    fn save_creates_parent_directories() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested/dir").join(COLLECTION_FILENAME);

        Collection::empty().save(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn load_missing_file_is_empty() {
        let tmp = TempDir::new().unwrap();
        let c = Collection::load(&collection_path(&tmp));
        assert!(c.is_empty());
    }

    #[test]
    fn load_corrupt_file_is_empty() {
        let tmp = TempDir::new().unwrap();
        let path = collection_path(&tmp);
        fs::write(&path, "{ not json").unwrap();

        let c = Collection::load(&path);
        assert!(c.is_empty());
    }

    #[test]
    fn load_wrong_shape_is_empty() {
        let tmp = TempDir::new().unwrap();
        let path = collection_path(&tmp);
        // Valid JSON, but an object instead of the expected array
        fs::write(&path, r#"{"wallpapers": []}"#).unwrap();

        let c = Collection::load(&path);
        assert!(c.is_empty());
    }

    #[test]
    fn on_disk_format_is_a_bare_array() {
        let tmp = TempDir::new().unwrap();
        let path = collection_path(&tmp);

        let mut c = Collection::empty();
        c.append(wallpaper("a", "p"));
        c.save(&path).unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert!(raw.is_array());
        assert_eq!(raw[0]["id"], "a");
    }
}
