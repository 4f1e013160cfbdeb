//! m3ugen - Generate M3U playlists from folders of tagged MP3 files

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod playlist;
mod utils;

use cli::commands::BatchOptions;
use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        cli::commands::completion(shell);
        return Ok(());
    }

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.loglevel.filter().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let json = cli.json.context("No job file given (use --json)")?;

    cli::commands::generate_playlists(
        &json,
        BatchOptions {
            dry_run: cli.dry_run,
            keep_going: cli.keep_going,
        },
    )
}
