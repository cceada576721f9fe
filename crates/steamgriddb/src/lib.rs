//! SteamGridDB API client for cover-art search and download.
//!
//! Provides an async client for the [SteamGridDB](https://www.steamgriddb.com)
//! API v2, plus the on-disk bearer-token store used by the CLI.

pub mod client;
pub mod token;
pub mod types;

pub use client::{Client, Error};
pub use token::TokenStore;
pub use types::{GridImage, SearchResult};
