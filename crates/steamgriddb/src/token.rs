//! On-disk bearer-token store.
//!
//! The token is kept as a single plain-text file (`apikey.txt` by default).
//! A stored token is only ever written after it passed validation, so a
//! successful [`TokenStore::load`] can be used without re-checking.

use std::path::{Path, PathBuf};

/// Reads and writes the SteamGridDB API token.
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    /// Creates a store backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the stored token, or `None` if the file is missing or empty.
    pub fn load(&self) -> Option<String> {
        let content = std::fs::read_to_string(&self.path).ok()?;
        let token = content.trim();
        if token.is_empty() {
            None
        } else {
            Some(token.to_string())
        }
    }

    /// Persists the raw token string, overwriting prior contents.
    ///
    /// Creates parent directories as needed. Permissions are restricted
    /// on Unix (the file holds a credential).
    pub fn save(&self, token: &str) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&self.path, token)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&self.path, std::fs::Permissions::from_mode(0o600))?;
        }

        tracing::debug!(path = %self.path.display(), "API token saved");
        Ok(())
    }
}
