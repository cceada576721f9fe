//! Artwork catalog seam.

use std::future::Future;
use std::pin::Pin;

use crate::error::CoverError;

/// A search hit from the artwork catalog, in service ranking order.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogMatch {
    /// Opaque catalog identifier used to look up images.
    pub id: i32,
    /// Catalog display name (status output only).
    pub name: String,
}

/// Abstract artwork catalog used by the cover pipeline.
///
/// The CLI implements this trait on top of the SteamGridDB client; tests
/// use recording stubs so no network is involved.
pub trait ArtworkProvider: Send + Sync {
    /// Searches the catalog by free-text query.
    ///
    /// Results keep the service's own relevance order; the pipeline trusts
    /// the first entry.
    fn search_game(
        &self,
        term: &str,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<CatalogMatch>, CoverError>> + Send + '_>>;

    /// Returns image URLs for a catalog id at exact dimensions,
    /// in service order.
    fn grid_urls(
        &self,
        game_id: i32,
        dimensions: &str,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<String>, CoverError>> + Send + '_>>;

    /// Downloads one image as raw bytes.
    fn download(
        &self,
        url: &str,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<u8>, CoverError>> + Send + '_>>;
}
