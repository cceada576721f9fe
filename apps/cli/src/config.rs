//! Run configuration.
//!
//! One immutable value built at startup from the environment, the CLI
//! arguments, and the selected aspect profile, then passed by parameter —
//! no component reads globals.

use std::path::PathBuf;

use covergrab_covers::AspectProfile;

use crate::args::Args;

/// Everything a run needs, resolved once.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Session username (greeting and logs only).
    pub username: String,
    /// The user's home directory; Lutris paths hang off it.
    pub home: PathBuf,
    /// Lutris database to enumerate.
    pub db_path: PathBuf,
    /// The one aspect profile active for this run.
    pub aspect: AspectProfile,
    /// Directory covers are probed in and written to.
    pub cache_dir: PathBuf,
    /// API token file.
    pub token_path: PathBuf,
}

impl RunConfig {
    /// Resolves defaults against `home` and applies CLI overrides.
    pub fn new(home: PathBuf, username: String, aspect: AspectProfile, args: &Args) -> Self {
        let db_path = args.database.clone().unwrap_or_else(|| {
            home.join(".local")
                .join("share")
                .join("lutris")
                .join("pga.db")
        });
        let cache_dir = args
            .cache_dir
            .clone()
            .unwrap_or_else(|| aspect.cache_dir(&home));

        Self {
            username,
            home,
            db_path,
            aspect,
            cache_dir,
            token_path: args.token_file.clone(),
        }
    }
}

/// Returns the session username.
///
/// Identity resolution failure is fatal to the program.
pub fn resolve_username() -> Option<String> {
    std::env::var("USER")
        .or_else(|_| std::env::var("LOGNAME"))
        .ok()
        .filter(|u| !u.is_empty())
}

/// Returns the user's home directory.
pub fn resolve_home() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .filter(|h| !h.is_empty())
        .map(PathBuf::from)
}
