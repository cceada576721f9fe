//! Cover pipeline for the Lutris library.
//!
//! This crate implements the per-game cover logic with no UI or HTTP
//! dependencies — the CLI provides an [`ArtworkProvider`] implementation
//! that bridges to the actual SteamGridDB client.
//!
//! # Per-game flow
//!
//! - **Probe** — skip any slug that already has a local cover
//! - **Resolve** — search the catalog, trust the first (best-ranked) match
//! - **Fetch** — list grids at the run's dimensions, download the first,
//!   write `{slug}.jpg`
//!
//! A failure in any step is recorded against that game only; the run
//! always continues to the next slug.

pub mod aspect;
pub mod error;
pub mod pipeline;
pub mod probe;
pub mod provider;

pub use aspect::AspectProfile;
pub use error::CoverError;
pub use pipeline::{CoverOutcome, CoverPipeline, RunSummary, display_name};
pub use provider::{ArtworkProvider, CatalogMatch};
