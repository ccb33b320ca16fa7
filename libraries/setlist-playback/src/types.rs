//! Core types for the playlist engine

use serde::{Deserialize, Serialize};
use std::fmt;

/// One playable item
///
/// The title doubles as the lookup key for remove/modify/favorite operations.
/// Titles are not required to be unique; lookups act on the first match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Song title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Album name
    pub album: String,

    /// Length in whole seconds
    pub duration_secs: u32,

    /// Marked as favorite by the user
    pub favorite: bool,

    /// File path handed to the external player, never inspected by the engine
    pub path: String,
}

impl Entry {
    /// Create a non-favorite entry
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        album: impl Into<String>,
        duration_secs: u32,
        path: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            album: album.into(),
            duration_secs,
            favorite: false,
            path: path.into(),
        }
    }

    /// Builder-style favorite flag
    #[must_use]
    pub fn with_favorite(mut self, favorite: bool) -> Self {
        self.favorite = favorite;
        self
    }

    /// Case-sensitive substring match on title or artist
    pub fn matches(&self, query: &str) -> bool {
        self.title.contains(query) || self.artist.contains(query)
    }
}

/// Stable handle to an entry inside one collection
///
/// Handles are assigned on insertion and never reused, so the shuffle
/// permutation can refer to entries without copying them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntryId(pub(crate) u64);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An entry as seen while listing the playlist
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryView<'a> {
    pub entry: &'a Entry,

    /// Whether this entry is the current cursor target
    pub is_current: bool,
}

/// Playback state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackState {
    /// Nothing has been played yet
    Stopped,

    /// A playback request was issued for the current entry
    Playing,

    /// Reserved; no operation transitions into it
    Paused,
}

impl fmt::Display for PlaybackState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Stopped => "stopped",
            Self::Playing => "playing",
            Self::Paused => "paused",
        };
        f.write_str(label)
    }
}

/// Default number of plays kept in history
pub const DEFAULT_HISTORY_SIZE: usize = 10;

/// Configuration for the playback manager
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Maximum history size (default: 10)
    #[serde(default = "default_history_size")]
    pub history_size: usize,

    /// Initial repeat flag (default: false)
    #[serde(default)]
    pub repeat: bool,

    /// Fixed seed for the shuffle generator; OS entropy when absent
    #[serde(default)]
    pub shuffle_seed: Option<u64>,
}

fn default_history_size() -> usize {
    DEFAULT_HISTORY_SIZE
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            history_size: DEFAULT_HISTORY_SIZE,
            repeat: false,
            shuffle_seed: None,
        }
    }
}
