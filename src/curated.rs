//! The built-in curated sample set.
//!
//! The explore surface needs content before the user has generated anything.
//! These samples are deterministic remote references (stable seeds, stable
//! ids), so `browse` output is reproducible and `import` always resolves the
//! same id to the same image.

use crate::types::{AspectRatio, Wallpaper};

/// Featured collection names shown alongside the curated grid.
pub const FEATURED_COLLECTIONS: [&str; 5] = [
    "Nebula & Galaxies",
    "Minimalist Architecture",
    "Cyberpunk Streets",
    "Macro Nature",
    "Abstract Flow",
];

/// Number of curated samples.
const CURATED_COUNT: usize = 12;

/// The curated sample wallpapers, alternating desktop and phone ratios.
///
/// Ids are `curated-0` through `curated-11`. These records never enter the
/// personal collection directly; [`import`](crate::curated::find) + a fresh
/// record does.
pub fn curated_wallpapers() -> Vec<Wallpaper> {
    (0..CURATED_COUNT)
        .map(|i| {
            let landscape = i % 2 == 0;
            Wallpaper {
                id: format!("curated-{i}"),
                url: format!(
                    "https://picsum.photos/seed/wall-{i}/1200/{}",
                    if landscape { 800 } else { 1600 }
                ),
                prompt: "A beautiful curated scene".to_string(),
                aspect_ratio: if landscape {
                    AspectRatio::Wide
                } else {
                    AspectRatio::Tall
                },
                created_at: 0,
                tags: vec!["curated".to_string()],
            }
        })
        .collect()
}

/// Look up a curated sample by id.
pub fn find(id: &str) -> Option<Wallpaper> {
    curated_wallpapers().into_iter().find(|w| w.id == id)
}
