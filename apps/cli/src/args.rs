//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use covergrab_covers::AspectProfile;

/// Downloads missing Lutris cover art from SteamGridDB.
#[derive(Debug, Parser)]
#[command(name = "covergrab", version, about)]
pub struct Args {
    /// Path to the Lutris database (default: ~/.local/share/lutris/pga.db).
    #[arg(long)]
    pub database: Option<PathBuf>,

    /// Cover shape to download (prompted interactively when omitted).
    #[arg(long, value_enum)]
    pub aspect: Option<AspectArg>,

    /// Directory covers are written to (default depends on the aspect).
    #[arg(long)]
    pub cache_dir: Option<PathBuf>,

    /// File holding the SteamGridDB API token.
    #[arg(long, default_value = "apikey.txt")]
    pub token_file: PathBuf,

    /// Fail instead of prompting (for scripted use).
    #[arg(long)]
    pub non_interactive: bool,
}

/// `--aspect` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AspectArg {
    Banner,
    Vertical,
}

impl From<AspectArg> for AspectProfile {
    fn from(arg: AspectArg) -> Self {
        match arg {
            AspectArg::Banner => AspectProfile::Banner,
            AspectArg::Vertical => AspectProfile::Vertical,
        }
    }
}
