//! SteamGridDB API client.
//!
//! Async HTTP client using `reqwest` with Bearer token authentication.
//! Grid image URLs point at public asset hosting, so downloads go through
//! a separate client that carries no credentials.

use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};

use crate::types::{ApiResponse, GridImage, SearchResult};

const DEFAULT_BASE_URL: &str = "https://www.steamgriddb.com/api/v2";

/// Errors from the SteamGridDB client.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error {status}: {body}")]
    Api { status: u16, body: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid API key")]
    InvalidKey,
}

/// SteamGridDB API client.
pub struct Client {
    api: reqwest::Client,
    assets: reqwest::Client,
    base_url: String,
}

impl Client {
    /// Creates a new client with the given API key.
    pub fn new(api_key: &str) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {api_key}")).map_err(|_| Error::InvalidKey)?,
        );

        let api = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;
        let assets = reqwest::Client::new();

        Ok(Self {
            api,
            assets,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Sets a custom base URL (for testing).
    #[cfg(test)]
    pub(crate) fn with_base_url(mut self, url: String) -> Self {
        self.base_url = url;
        self
    }

    /// Performs an authenticated GET request.
    async fn get(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<Vec<u8>, Error> {
        let url = format!("{}{}", self.base_url, endpoint);
        let resp = self.api.get(&url).query(params).send().await?;
        let status = resp.status();

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(resp.bytes().await?.to_vec())
    }

    /// Searches for games by name.
    ///
    /// Results come back in the service's own relevance order.
    pub async fn search(&self, term: &str) -> Result<Vec<SearchResult>, Error> {
        let encoded = utf8_percent_encode(term, NON_ALPHANUMERIC).to_string();
        let body = self
            .get(&format!("/search/autocomplete/{encoded}"), &[])
            .await?;
        let resp: ApiResponse<Vec<SearchResult>> = serde_json::from_slice(&body)?;
        Ok(resp.data)
    }

    /// Returns grid images for a game, filtered by exact dimensions
    /// (e.g. `"460x215"` or `"600x900"`).
    pub async fn grids(&self, game_id: i32, dimensions: &str) -> Result<Vec<GridImage>, Error> {
        let body = self
            .get(
                &format!("/grids/game/{game_id}"),
                &[("dimensions", dimensions)],
            )
            .await?;
        let resp: ApiResponse<Vec<GridImage>> = serde_json::from_slice(&body)?;
        Ok(resp.data)
    }

    /// Checks whether the configured API key is accepted by the service.
    ///
    /// Issues one cheap read-only request (grids for game 1) and reports
    /// plain success or failure; transport errors count as invalid.
    pub async fn validate_key(&self) -> bool {
        let url = format!("{}/grids/game/1", self.base_url);
        match self
            .api
            .get(&url)
            .query(&[("dimensions", "600x900")])
            .send()
            .await
        {
            Ok(resp) => resp.status().is_success(),
            Err(e) => {
                tracing::debug!(error = %e, "key validation request failed");
                false
            }
        }
    }

    /// Downloads image data from a URL.
    ///
    /// Asset URLs are public; no Authorization header is sent.
    pub async fn download_image(&self, url: &str) -> Result<Vec<u8>, Error> {
        let resp = self.assets.get(url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Api {
                status: status.as_u16(),
                body: "download failed".into(),
            });
        }
        Ok(resp.bytes().await?.to_vec())
    }
}
