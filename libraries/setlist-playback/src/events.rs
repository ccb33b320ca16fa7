//! Playback events
//!
//! The engine never writes to the console. Each state change is pushed as a
//! structured event and the front end drains and renders them.

use crate::types::PlaybackState;
use serde::{Deserialize, Serialize};

/// Events emitted by the playback manager
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackEvent {
    /// Playback state changed
    StateChanged {
        /// The new playback state
        state: PlaybackState,
    },

    /// The current cursor moved to another entry, or cleared
    CurrentChanged {
        /// Title of the new current entry, `None` when the playlist emptied
        title: Option<String>,
    },

    /// A playback request was handed to the player
    PlaybackRequested {
        title: String,
        path: String,
    },

    /// Entries were added, removed, edited or reordered
    CollectionChanged {
        /// New playlist length
        length: usize,
    },

    /// Shuffle mode switched
    ShuffleChanged { enabled: bool },

    /// Repeat flag switched
    RepeatChanged { enabled: bool },
}
