//! Setlist - Playlist Engine
//!
//! This crate provides:
//! - Ordered playlist storage with a current cursor
//! - Lookup, edit and removal by title (first match wins)
//! - Shuffle mode with its own cursor over a fresh random permutation
//! - Repeat flag that wraps navigation at either end
//! - Bounded play history (10 entries by default)
//!
//! # Architecture
//!
//! The engine is synchronous and has no console or audio dependencies:
//! - Playback is delegated to a [`Player`] that receives a file path
//! - State changes are reported as [`PlaybackEvent`]s for the front end to
//!   render
//! - Every operation returns a [`Result`] instead of printing
//!
//! # Example
//!
//! ```rust
//! use setlist_playback::{Entry, PlaybackManager};
//!
//! let mut manager = PlaybackManager::default();
//! manager.add(Entry::new("A", "Artist", "Album", 180, "/music/a.mp3"));
//! manager.add(Entry::new("B", "Artist", "Album", 200, "/music/b.mp3"));
//!
//! manager.next().unwrap();
//! assert_eq!(manager.current().unwrap().title, "B");
//!
//! // At the tail with repeat off the cursor stays and B plays again
//! manager.next().unwrap();
//! assert_eq!(manager.history().titles(), vec!["B", "B"]);
//! ```

mod collection;
mod error;
mod events;
mod history;
mod manager;
mod player;
mod shuffle;
pub mod types;

// Public exports
pub use collection::{Collection, Removed};
pub use error::{PlaybackError, Result};
pub use events::PlaybackEvent;
pub use history::History;
pub use manager::{PlaybackManager, DEFAULT_PLAYLIST_NAME};
pub use player::{NullPlayer, Player};
pub use shuffle::ShuffleView;
pub use types::{Entry, EntryId, EntryView, PlaybackConfig, PlaybackState, DEFAULT_HISTORY_SIZE};
