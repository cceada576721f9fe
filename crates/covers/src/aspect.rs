//! Cover-art aspect profiles.
//!
//! Lutris keeps landscape banners and portrait covers in different
//! directories, and SteamGridDB filters grids by exact pixel dimensions.
//! Exactly one profile is active per run.

use std::path::{Path, PathBuf};

/// One of the two cover-art shapes Lutris understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AspectProfile {
    /// Landscape Steam banner, 460x215.
    Banner,
    /// Portrait cover, 600x900.
    Vertical,
}

impl AspectProfile {
    /// The exact `dimensions` filter value sent to the grids endpoint.
    pub fn dimensions(self) -> &'static str {
        match self {
            Self::Banner => "460x215",
            Self::Vertical => "600x900",
        }
    }

    /// Human-readable label used in the selection prompt.
    pub fn label(self) -> &'static str {
        match self {
            Self::Banner => "Banner (460x215)",
            Self::Vertical => "Vertical (600x900)",
        }
    }

    /// The Lutris directory covers of this shape are read from.
    pub fn cache_dir(self, home: &Path) -> PathBuf {
        match self {
            Self::Banner => home.join(".local").join("share").join("lutris").join("banners"),
            Self::Vertical => home.join(".cache").join("lutris").join("coverart"),
        }
    }
}
