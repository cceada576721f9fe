//! Lutris cover-art downloader entry point.

mod app;
mod args;
mod config;
mod prompts;
mod provider;
mod setup;

use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr so they never mix with the status lines.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = args::Args::parse();

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(app::run(args))
}
