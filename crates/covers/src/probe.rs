//! Local cover probe — pure filesystem checks, no network.

use std::path::{Path, PathBuf};

/// Extensions accepted as an existing cover. Downloads always write `.jpg`,
/// but a user may have dropped in art of another format by hand.
pub const COVER_EXTENSIONS: [&str; 3] = ["jpg", "png", "jpeg"];

/// Returns true if a cover for `slug` already exists in `cache_dir`.
pub fn cover_exists(cache_dir: &Path, slug: &str) -> bool {
    COVER_EXTENSIONS
        .iter()
        .any(|ext| cache_dir.join(format!("{slug}.{ext}")).is_file())
}

/// The canonical write path for a downloaded cover.
///
/// The extension is always `.jpg`, whatever the source image's true format:
/// Lutris resolves covers by filename stem and existing setups key on the
/// `.jpg` name.
pub fn cover_path(cache_dir: &Path, slug: &str) -> PathBuf {
    cache_dir.join(format!("{slug}.jpg"))
}
