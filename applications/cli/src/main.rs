//! Setlist - terminal playlist manager

use anyhow::Context;
use clap::Parser;
use setlist_cli::{build_manager, AppConfig, Menu, ProcessPlayer};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "setlist")]
#[command(about = "Manage and play a playlist from a numbered menu", long_about = None)]
#[command(version)]
struct Cli {
    /// Playlist file to load at start and save to
    #[arg(short, long, env = "SETLIST_PLAYLIST")]
    playlist: Option<PathBuf>,

    /// Configuration file (defaults to setlist.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Playlist name shown in the menu header
    #[arg(short, long, default_value = "My Playlist")]
    name: String,

    /// External player program
    #[arg(long)]
    player: Option<String>,

    /// Start empty even if the playlist file exists
    #[arg(long)]
    no_load: bool,
}

fn main() -> anyhow::Result<()> {
    // Menu output owns stdout
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "setlist=info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(playlist) = cli.playlist {
        config.storage.playlist_path = playlist;
    }
    if let Some(program) = cli.player {
        config.player.program = program;
        config.player.args.clear();
    }
    config.validate()?;

    let player = ProcessPlayer::from_settings(&config.player);
    tracing::info!(player = %player.program(), "Starting setlist");

    let manager = build_manager(&config, &cli.name, player, !cli.no_load).with_context(|| {
        format!(
            "Failed to load playlist from {}",
            config.storage.playlist_path.display()
        )
    })?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut menu = Menu::new(
        manager,
        stdin.lock(),
        stdout.lock(),
        config.storage.playlist_path.clone(),
    );
    menu.run()?;

    Ok(())
}
