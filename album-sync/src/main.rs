//! album-sync — create Immich albums from a folder structure and link
//! existing assets by filename.
//!
//! Each immediate subdirectory of the root folder names an album; the
//! files inside it are matched against the remote library by exact
//! original filename and attached in one batch per album. Nothing is
//! uploaded and nothing is deleted.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use album_sync::AlbumSynchronizer;
use immich_client::ImmichClient;

/// Create Immich albums from folder structure and add existing assets by filename.
#[derive(Debug, Parser)]
#[command(name = "album-sync", version)]
struct Args {
    /// Root folder containing album subfolders
    #[arg(long)]
    root_folder: PathBuf,

    /// Base URL of the Immich instance, e.g. http://localhost:2283/api
    #[arg(long)]
    immich_url: String,

    /// Immich API key or access token
    #[arg(long)]
    api_key: String,

    /// Simulate actions without making changes
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let client = ImmichClient::new(&args.immich_url, &args.api_key)
        .context("failed to construct Immich client")?;
    let synchronizer = AlbumSynchronizer::new(client, args.dry_run);

    let reports = synchronizer.run(&args.root_folder).await?;

    let attached: usize = reports.iter().map(|report| report.attached).sum();
    let unmatched: usize = reports.iter().map(|report| report.unmatched.len()).sum();
    tracing::info!(
        albums = reports.len(),
        attached,
        unmatched,
        dry_run = args.dry_run,
        "Run complete"
    );

    Ok(())
}
