//! Error type for cover pipeline operations.

/// Errors produced while resolving or fetching a single cover.
///
/// These never abort the run; the pipeline records them per game.
#[derive(Debug, thiserror::Error)]
pub enum CoverError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("catalog error: {0}")]
    Provider(String),
}
