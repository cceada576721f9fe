//! Error types for library database access.

/// Errors produced while reading the game library.
#[derive(Debug, thiserror::Error)]
pub enum LibraryError {
    /// The database file is missing, corrupt, or unreadable. Fatal: there
    /// is no fallback library source.
    #[error("library database unavailable: {0}")]
    Unavailable(String),

    #[error("library query failed: {0}")]
    Query(String),
}
