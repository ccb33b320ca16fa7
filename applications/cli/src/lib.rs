//! Setlist - Menu Front End
//!
//! Wires the playlist engine to a numbered terminal menu, an external player
//! process and the playlist file.

pub mod config;
pub mod error;
pub mod menu;
pub mod player;

pub use config::AppConfig;
pub use error::{CliError, Result};
pub use menu::{Action, Menu};
pub use player::ProcessPlayer;

use setlist_playback::{PlaybackManager, Player};

/// Build the session's manager, loading the configured playlist file if asked
///
/// A missing file is not an error: the session starts empty and Save creates
/// it. An existing file that cannot be read or parsed is.
pub fn build_manager(
    config: &AppConfig,
    name: &str,
    player: impl Player + 'static,
    load_existing: bool,
) -> Result<PlaybackManager> {
    let mut manager = PlaybackManager::with_player(config.playback.clone(), player).named(name);

    let path = &config.storage.playlist_path;
    if !load_existing {
        tracing::info!("Starting with an empty playlist");
    } else if path.exists() {
        for entry in setlist_storage::load_playlist(path)? {
            manager.add(entry);
        }
    } else {
        tracing::info!("No playlist at {}, starting empty", path.display());
    }

    manager.drain_events();
    Ok(manager)
}
