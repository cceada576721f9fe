//! Pipeline driver — per-game resolve/fetch with failure isolation.

use std::path::PathBuf;

use tracing::{debug, warn};

use crate::aspect::AspectProfile;
use crate::error::CoverError;
use crate::probe;
use crate::provider::ArtworkProvider;

/// What happened to a single game during a run.
#[derive(Debug, Clone, PartialEq)]
pub enum CoverOutcome {
    /// A local cover was already present; the provider was never invoked.
    AlreadyExists,
    /// A cover was fetched and written to the cache directory.
    Downloaded,
    /// The catalog search returned no match (or failed; the two are
    /// indistinguishable to the rest of the run).
    NotFound,
    /// The game matched but has no grid at the requested dimensions.
    NoGridAtSize,
    /// Download or write failed for this game only.
    Failed(String),
}

/// Outcome tallies for a completed run.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RunSummary {
    pub downloaded: usize,
    pub already_present: usize,
    pub not_found: usize,
    pub no_grid: usize,
    pub failed: usize,
}

impl RunSummary {
    /// Total number of games considered.
    pub fn total(&self) -> usize {
        self.downloaded + self.already_present + self.not_found + self.no_grid + self.failed
    }

    fn record(&mut self, outcome: &CoverOutcome) {
        match outcome {
            CoverOutcome::AlreadyExists => self.already_present += 1,
            CoverOutcome::Downloaded => self.downloaded += 1,
            CoverOutcome::NotFound => self.not_found += 1,
            CoverOutcome::NoGridAtSize => self.no_grid += 1,
            CoverOutcome::Failed(_) => self.failed += 1,
        }
    }
}

/// Formats a slug for status output: hyphens become spaces, words are
/// title-cased. Never used for queries or filenames.
pub fn display_name(slug: &str) -> String {
    slug.split('-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Sequential cover pipeline for one aspect profile and cache directory.
pub struct CoverPipeline {
    aspect: AspectProfile,
    cache_dir: PathBuf,
}

impl CoverPipeline {
    /// Creates a pipeline writing covers of `aspect` shape into `cache_dir`.
    pub fn new(aspect: AspectProfile, cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            aspect,
            cache_dir: cache_dir.into(),
        }
    }

    /// Processes every slug in order, one game start-to-finish at a time.
    ///
    /// Per-game failures are recorded and the loop continues; nothing in
    /// here aborts the run.
    pub async fn run(&self, provider: &dyn ArtworkProvider, slugs: &[String]) -> RunSummary {
        let mut summary = RunSummary::default();
        for slug in slugs {
            let outcome = self.process_game(provider, slug).await;
            debug!(slug, ?outcome, "game processed");
            summary.record(&outcome);
        }
        summary
    }

    /// Runs the probe → resolve → fetch sequence for one game.
    pub async fn process_game(&self, provider: &dyn ArtworkProvider, slug: &str) -> CoverOutcome {
        let title = display_name(slug);

        if probe::cover_exists(&self.cache_dir, slug) {
            println!("Cover for {title} already exists");
            return CoverOutcome::AlreadyExists;
        }

        // The literal slug is the query; a transport failure here means no
        // usable match for this game, same as an empty result.
        let matches = match provider.search_game(slug).await {
            Ok(matches) => matches,
            Err(e) => {
                warn!(slug, error = %e, "catalog search failed");
                println!("Could not find a cover for {title}");
                return CoverOutcome::NotFound;
            }
        };

        let Some(hit) = matches.first() else {
            println!("Could not find a cover for {title}");
            return CoverOutcome::NotFound;
        };
        println!("Found game {title}");

        match self.fetch_cover(provider, slug, hit.id).await {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!(slug, error = %e, "cover fetch failed");
                println!("Failed to download cover for {title}");
                CoverOutcome::Failed(e.to_string())
            }
        }
    }

    /// Grid lookup, download, and write for a resolved catalog id.
    async fn fetch_cover(
        &self,
        provider: &dyn ArtworkProvider,
        slug: &str,
        game_id: i32,
    ) -> Result<CoverOutcome, CoverError> {
        let urls = provider.grid_urls(game_id, self.aspect.dimensions()).await?;

        let Some(url) = urls.first() else {
            println!(
                "No {} cover available for {}",
                self.aspect.dimensions(),
                display_name(slug)
            );
            return Ok(CoverOutcome::NoGridAtSize);
        };

        println!("Downloading cover for {}", display_name(slug));
        let bytes = provider.download(url).await?;

        std::fs::create_dir_all(&self.cache_dir)?;
        std::fs::write(probe::cover_path(&self.cache_dir, slug), &bytes)?;

        Ok(CoverOutcome::Downloaded)
    }
}
