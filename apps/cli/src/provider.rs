//! SteamGridDB-backed artwork provider.

use std::future::Future;
use std::pin::Pin;

use covergrab_covers::{ArtworkProvider, CatalogMatch, CoverError};
use covergrab_steamgriddb::Client;

/// Bridges the cover pipeline to the SteamGridDB client.
pub struct GridDbProvider {
    client: Client,
}

impl GridDbProvider {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl ArtworkProvider for GridDbProvider {
    fn search_game(
        &self,
        term: &str,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<CatalogMatch>, CoverError>> + Send + '_>> {
        let term = term.to_string();
        Box::pin(async move {
            let results = self
                .client
                .search(&term)
                .await
                .map_err(|e| CoverError::Provider(e.to_string()))?;
            Ok(results
                .into_iter()
                .map(|r| CatalogMatch {
                    id: r.id,
                    name: r.name,
                })
                .collect())
        })
    }

    fn grid_urls(
        &self,
        game_id: i32,
        dimensions: &str,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<String>, CoverError>> + Send + '_>> {
        let dimensions = dimensions.to_string();
        Box::pin(async move {
            let grids = self
                .client
                .grids(game_id, &dimensions)
                .await
                .map_err(|e| CoverError::Provider(e.to_string()))?;
            Ok(grids.into_iter().map(|g| g.url).collect())
        })
    }

    fn download(
        &self,
        url: &str,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<u8>, CoverError>> + Send + '_>> {
        let url = url.to_string();
        Box::pin(async move {
            self.client
                .download_image(&url)
                .await
                .map_err(|e| CoverError::Provider(e.to_string()))
        })
    }
}
