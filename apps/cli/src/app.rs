//! Run orchestration.
//!
//! Fatal preconditions (identity, credential, database) bubble out as
//! errors and end the process with a non-zero exit; everything after the
//! pipeline starts is per-game and never aborts the run.

use anyhow::{Context, bail};
use covergrab_covers::{AspectProfile, CoverPipeline};
use covergrab_library::Library;
use covergrab_steamgriddb::{Client, TokenStore};
use tracing::info;

use crate::args::Args;
use crate::config::{self, RunConfig};
use crate::prompts::{ChoicePrompt, TerminalPrompt};
use crate::provider::GridDbProvider;
use crate::setup::{self, ApiKeyValidator};

pub async fn run(args: Args) -> anyhow::Result<()> {
    let username =
        config::resolve_username().context("could not determine the session username")?;
    let home = config::resolve_home().context("could not determine the home directory")?;

    println!("Welcome {username} to the Lutris cover art downloader!\n");

    let prompt = TerminalPrompt;
    let aspect = select_aspect(&args, &prompt)?;
    println!("Cover type set to {}\n", aspect.label());

    let config = RunConfig::new(home, username, aspect, &args);

    let store = TokenStore::new(&config.token_path);
    let token =
        setup::obtain_token(&store, &prompt, &ApiKeyValidator, args.non_interactive).await?;

    let client = Client::new(&token).context("could not build the SteamGridDB client")?;
    let provider = GridDbProvider::new(client);

    let library = Library::open(&config.db_path).await?;
    let games = library.game_slugs().await?;
    library.close().await;

    if games.is_empty() {
        println!("No games found in the Lutris library. Nothing to do.");
        return Ok(());
    }

    info!(
        user = %config.username,
        games = games.len(),
        dimensions = config.aspect.dimensions(),
        cache_dir = %config.cache_dir.display(),
        "starting cover run"
    );

    let pipeline = CoverPipeline::new(config.aspect, &config.cache_dir);
    let summary = pipeline.run(&provider, &games).await;

    println!(
        "\n{} downloaded, {} already present, {} not found, {} without a {} cover, {} failed.",
        summary.downloaded,
        summary.already_present,
        summary.not_found,
        summary.no_grid,
        config.aspect.dimensions(),
        summary.failed,
    );
    println!("All done! Restart Lutris for the changes to take effect");

    Ok(())
}

/// Resolves the aspect profile from the flag or the interactive prompt.
///
/// Exactly one profile is active per run.
fn select_aspect(args: &Args, prompt: &dyn ChoicePrompt) -> anyhow::Result<AspectProfile> {
    if let Some(aspect) = args.aspect {
        return Ok(aspect.into());
    }
    if args.non_interactive {
        bail!("--aspect is required with --non-interactive");
    }

    let items = [
        AspectProfile::Banner.label(),
        AspectProfile::Vertical.label(),
    ];
    let choice = prompt.choose(
        "Would you like to download Steam banners or Steam vertical covers?",
        &items,
    )?;
    Ok(match choice {
        0 => AspectProfile::Banner,
        _ => AspectProfile::Vertical,
    })
}
