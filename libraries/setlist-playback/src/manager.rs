//! Playback manager - core orchestration
//!
//! Owns the collection, the shuffle view, the history and the player, and
//! keeps the linear cursor and the shuffle cursor pointing at the same entry.

use crate::{
    collection::Collection,
    error::{PlaybackError, Result},
    events::PlaybackEvent,
    history::History,
    player::{NullPlayer, Player},
    shuffle::ShuffleView,
    types::{Entry, EntryId, EntryView, PlaybackConfig, PlaybackState},
};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Default playlist name
pub const DEFAULT_PLAYLIST_NAME: &str = "New Playlist";

/// Playlist with playback control
///
/// While shuffle is enabled the current entry is always the one under the
/// shuffle cursor; otherwise it is the collection's cursor alone.
pub struct PlaybackManager {
    name: String,
    collection: Collection,
    shuffle: ShuffleView,
    history: History,
    state: PlaybackState,
    repeat: bool,
    player: Box<dyn Player>,
    rng: StdRng,

    // Event queue for the front end
    pending_events: Vec<PlaybackEvent>,
}

impl PlaybackManager {
    /// Create a manager that discards playback requests
    pub fn new(config: PlaybackConfig) -> Self {
        Self::with_player(config, NullPlayer)
    }

    /// Create a manager that hands playback requests to `player`
    pub fn with_player(config: PlaybackConfig, player: impl Player + 'static) -> Self {
        let rng = match config.shuffle_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            name: DEFAULT_PLAYLIST_NAME.to_string(),
            collection: Collection::new(),
            shuffle: ShuffleView::new(),
            history: History::new(config.history_size),
            state: PlaybackState::Stopped,
            repeat: config.repeat,
            player: Box::new(player),
            rng,
            pending_events: Vec::new(),
        }
    }

    /// Builder-style playlist name
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    // ===== Collection =====

    /// Append an entry
    pub fn add(&mut self, entry: Entry) -> EntryId {
        let was_empty = self.collection.is_empty();
        tracing::debug!(title = %entry.title, "Adding entry");

        let id = self.collection.add(entry);
        self.shuffle.push(id);
        if was_empty && self.shuffle.is_enabled() {
            self.shuffle.seek(id);
        }

        self.emit_collection_changed();
        if was_empty {
            self.emit_current_changed();
        }
        id
    }

    /// Remove the first entry titled `title`
    pub fn remove(&mut self, title: &str) -> Result<Entry> {
        let removed = self
            .collection
            .remove(title)
            .ok_or_else(|| PlaybackError::NotFound(title.to_string()))?;
        tracing::debug!(title, id = %removed.id, "Removed entry");

        if self.shuffle.is_enabled() {
            if let Some(replacement) = self.shuffle.remove(removed.id) {
                self.collection.set_current(replacement);
            }
        }

        self.emit_collection_changed();
        if removed.was_current {
            self.emit_current_changed();
        }
        Ok(removed.entry)
    }

    /// Replace the first entry titled `title`, keeping its position
    pub fn modify(&mut self, title: &str, entry: Entry) -> Result<()> {
        let new_title = entry.title.clone();
        let id = self
            .collection
            .modify(title, entry)
            .ok_or_else(|| PlaybackError::NotFound(title.to_string()))?;
        tracing::debug!(title, new_title = %new_title, "Modified entry");

        self.emit_collection_changed();
        if self.collection.current_id() == Some(id) {
            self.emit_current_changed();
        }
        Ok(())
    }

    /// Entries whose title or artist contains `query` (case-sensitive)
    pub fn search<'a>(&'a self, query: &'a str) -> impl Iterator<Item = &'a Entry> + 'a {
        self.collection.search(query)
    }

    /// Sort by title and move the cursor to the new head
    ///
    /// Shuffle mode stays as it is; the shuffle cursor follows the new head.
    pub fn sort_by_title(&mut self) {
        self.collection.sort_by_title();
        if let Some(head) = self.collection.head_id() {
            self.shuffle.seek(head);
        }
        tracing::debug!(len = self.collection.len(), "Sorted by title");

        self.emit_collection_changed();
        self.emit_current_changed();
    }

    /// Sum of all durations in seconds
    pub fn total_duration(&self) -> u64 {
        self.collection.total_duration()
    }

    /// Flip the favorite flag of the first entry titled `title`
    pub fn toggle_favorite(&mut self, title: &str) -> Result<bool> {
        let favorite = self
            .collection
            .toggle_favorite(title)
            .ok_or_else(|| PlaybackError::NotFound(title.to_string()))?;
        tracing::debug!(title, favorite, "Toggled favorite");

        self.emit_collection_changed();
        Ok(favorite)
    }

    /// Every entry in playlist order, with the current one marked
    pub fn all(&self) -> impl Iterator<Item = EntryView<'_>> {
        self.collection.all()
    }

    /// Every entry in playlist order
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.collection.entries()
    }

    pub fn find(&self, title: &str) -> Option<&Entry> {
        self.collection.find(title)
    }

    pub fn len(&self) -> usize {
        self.collection.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collection.is_empty()
    }

    // ===== Playback Control =====

    /// Request playback of the current entry
    ///
    /// Records the entry in history and hands its path to the player. The
    /// player's outcome does not affect the state transition.
    pub fn play(&mut self) -> Result<()> {
        let entry = self
            .collection
            .current()
            .cloned()
            .ok_or(PlaybackError::EmptyCollection)?;

        if self.state != PlaybackState::Playing {
            self.state = PlaybackState::Playing;
            self.pending_events.push(PlaybackEvent::StateChanged {
                state: PlaybackState::Playing,
            });
        }

        tracing::info!(title = %entry.title, artist = %entry.artist, "Playing");
        if let Err(e) = self.player.request_playback(&entry.path) {
            tracing::warn!(path = %entry.path, "Failed to launch player: {}", e);
        }

        self.pending_events.push(PlaybackEvent::PlaybackRequested {
            title: entry.title.clone(),
            path: entry.path.clone(),
        });
        self.history.record(entry);
        Ok(())
    }

    /// Move forward and play
    ///
    /// At the end of the active order the cursor wraps to its start when
    /// repeat is on and otherwise stays put. Either way the resulting current
    /// entry is played, so a stuck cursor replays the same entry.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<()> {
        let before = self
            .collection
            .current_id()
            .ok_or(PlaybackError::EmptyCollection)?;

        let target = if self.shuffle.is_enabled() {
            match self.shuffle.advance() {
                Some(id) => Some(id),
                None if self.repeat => self.shuffle.wrap_to_start(),
                None => None,
            }
        } else {
            match self.collection.successor_id() {
                Some(id) => Some(id),
                None if self.repeat => self.collection.head_id(),
                None => None,
            }
        };

        self.move_cursor(before, target);
        self.play()
    }

    /// Move backward and play
    ///
    /// Mirror of [`next`](Self::next): wraps to the end under repeat.
    pub fn prev(&mut self) -> Result<()> {
        let before = self
            .collection
            .current_id()
            .ok_or(PlaybackError::EmptyCollection)?;

        let target = if self.shuffle.is_enabled() {
            match self.shuffle.retreat() {
                Some(id) => Some(id),
                None if self.repeat => self.shuffle.wrap_to_end(),
                None => None,
            }
        } else {
            match self.collection.predecessor_id() {
                Some(id) => Some(id),
                None if self.repeat => self.collection.tail_id(),
                None => None,
            }
        };

        self.move_cursor(before, target);
        self.play()
    }

    // ===== Shuffle & Repeat =====

    pub fn toggle_repeat(&mut self, enabled: bool) {
        self.repeat = enabled;
        tracing::debug!(enabled, "Repeat");
        self.pending_events
            .push(PlaybackEvent::RepeatChanged { enabled });
    }

    /// Enter or leave shuffle mode
    ///
    /// Entering always draws a new permutation and starts at its first entry.
    /// Leaving always returns to the head of the linear order, not to wherever
    /// the cursor was before shuffling.
    pub fn toggle_shuffle(&mut self, enabled: bool) {
        if enabled {
            let ids = self.collection.ids();
            if let Some(first) = self.shuffle.enable(ids, &mut self.rng) {
                self.collection.set_current(first);
            }
        } else {
            self.shuffle.disable();
            if let Some(head) = self.collection.head_id() {
                self.collection.set_current(head);
            }
        }
        tracing::debug!(enabled, "Shuffle");

        self.pending_events
            .push(PlaybackEvent::ShuffleChanged { enabled });
        self.emit_current_changed();
    }

    // ===== State Queries =====

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn current(&self) -> Option<&Entry> {
        self.collection.current()
    }

    pub fn is_repeat(&self) -> bool {
        self.repeat
    }

    pub fn is_shuffled(&self) -> bool {
        self.shuffle.is_enabled()
    }

    /// Entry under the shuffle cursor, `None` when shuffle is off
    ///
    /// While shuffle is on this is always the same entry as [`current`](Self::current).
    pub fn shuffle_current(&self) -> Option<&Entry> {
        if !self.shuffle.is_enabled() {
            return None;
        }
        self.shuffle.current().and_then(|id| self.collection.get(id))
    }

    /// Current shuffle permutation as entries, empty when shuffle is off
    pub fn shuffle_order(&self) -> Vec<&Entry> {
        self.shuffle
            .order()
            .iter()
            .filter_map(|id| self.collection.get(*id))
            .collect()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Take all events emitted since the last call
    pub fn drain_events(&mut self) -> Vec<PlaybackEvent> {
        std::mem::take(&mut self.pending_events)
    }

    // ===== Internal =====

    fn move_cursor(&mut self, before: EntryId, target: Option<EntryId>) {
        let Some(id) = target else {
            tracing::debug!("At boundary, replaying current entry");
            return;
        };
        self.collection.set_current(id);
        if id != before {
            self.emit_current_changed();
        }
    }

    fn emit_current_changed(&mut self) {
        let title = self.collection.current().map(|entry| entry.title.clone());
        self.pending_events
            .push(PlaybackEvent::CurrentChanged { title });
    }

    fn emit_collection_changed(&mut self) {
        let length = self.collection.len();
        self.pending_events
            .push(PlaybackEvent::CollectionChanged { length });
    }
}

impl Default for PlaybackManager {
    fn default() -> Self {
        Self::new(PlaybackConfig::default())
    }
}
