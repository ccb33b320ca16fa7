//! Ordered entry storage with a current cursor
//!
//! Entries live in a single vector in traversal order. Each one carries a
//! stable [`EntryId`] so other views (the shuffle permutation) can point at
//! entries without holding copies. The cursor is a position into the vector.

use crate::types::{Entry, EntryId, EntryView};

#[derive(Debug, Clone)]
struct Slot {
    id: EntryId,
    entry: Entry,
}

/// Result of removing an entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Removed {
    pub id: EntryId,
    pub entry: Entry,

    /// The removed entry was the current cursor target
    pub was_current: bool,
}

/// Ordered collection of entries
///
/// Invariant: `current` is `Some` iff the collection is non-empty, and always
/// indexes a live slot.
#[derive(Debug, Clone, Default)]
pub struct Collection {
    slots: Vec<Slot>,
    current: Option<usize>,
    next_id: u64,
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry
    ///
    /// The first entry added to an empty collection becomes current.
    pub fn add(&mut self, entry: Entry) -> EntryId {
        let id = EntryId(self.next_id);
        self.next_id += 1;
        self.slots.push(Slot { id, entry });
        if self.current.is_none() {
            self.current = Some(self.slots.len() - 1);
        }
        id
    }

    /// Remove the first entry with a matching title
    ///
    /// If the removed entry was current, the cursor moves to its successor,
    /// then its predecessor, then nowhere.
    pub fn remove(&mut self, title: &str) -> Option<Removed> {
        let position = self.position_of(title)?;
        let Slot { id, entry } = self.slots.remove(position);

        let was_current = self.current == Some(position);
        self.current = match self.current {
            _ if self.slots.is_empty() => None,
            // successor slid into `position`; fall back to predecessor at the tail
            Some(current) if current == position => Some(position.min(self.slots.len() - 1)),
            Some(current) if current > position => Some(current - 1),
            other => other,
        };

        Some(Removed {
            id,
            entry,
            was_current,
        })
    }

    /// Replace the first entry with a matching title, keeping its position
    pub fn modify(&mut self, title: &str, entry: Entry) -> Option<EntryId> {
        let position = self.position_of(title)?;
        let slot = &mut self.slots[position];
        slot.entry = entry;
        Some(slot.id)
    }

    /// Entries whose title or artist contains `query`
    pub fn search<'a>(&'a self, query: &'a str) -> impl Iterator<Item = &'a Entry> + 'a {
        self.slots
            .iter()
            .map(|slot| &slot.entry)
            .filter(move |entry| entry.matches(query))
    }

    /// Stable sort by title; the cursor resets to the new head
    pub fn sort_by_title(&mut self) {
        self.slots.sort_by(|a, b| a.entry.title.cmp(&b.entry.title));
        self.current = if self.slots.is_empty() { None } else { Some(0) };
    }

    /// Sum of all durations in seconds
    pub fn total_duration(&self) -> u64 {
        self.slots
            .iter()
            .map(|slot| u64::from(slot.entry.duration_secs))
            .sum()
    }

    /// Flip the favorite flag on the first match, returning the new value
    pub fn toggle_favorite(&mut self, title: &str) -> Option<bool> {
        let position = self.position_of(title)?;
        let entry = &mut self.slots[position].entry;
        entry.favorite = !entry.favorite;
        Some(entry.favorite)
    }

    /// All entries in order, annotated with the cursor
    pub fn all(&self) -> impl Iterator<Item = EntryView<'_>> {
        self.slots
            .iter()
            .enumerate()
            .map(move |(position, slot)| EntryView {
                entry: &slot.entry,
                is_current: self.current == Some(position),
            })
    }

    /// All entries in order
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.slots.iter().map(|slot| &slot.entry)
    }

    /// Handles in traversal order
    pub fn ids(&self) -> Vec<EntryId> {
        self.slots.iter().map(|slot| slot.id).collect()
    }

    pub fn find(&self, title: &str) -> Option<&Entry> {
        self.position_of(title).map(|position| &self.slots[position].entry)
    }

    pub fn get(&self, id: EntryId) -> Option<&Entry> {
        self.slots
            .iter()
            .find(|slot| slot.id == id)
            .map(|slot| &slot.entry)
    }

    pub fn current(&self) -> Option<&Entry> {
        self.current.map(|position| &self.slots[position].entry)
    }

    pub fn current_id(&self) -> Option<EntryId> {
        self.current.map(|position| self.slots[position].id)
    }

    /// Point the cursor at `id`; returns false if the handle is unknown
    pub fn set_current(&mut self, id: EntryId) -> bool {
        match self.slots.iter().position(|slot| slot.id == id) {
            Some(position) => {
                self.current = Some(position);
                true
            }
            None => false,
        }
    }

    pub fn head_id(&self) -> Option<EntryId> {
        self.slots.first().map(|slot| slot.id)
    }

    pub fn tail_id(&self) -> Option<EntryId> {
        self.slots.last().map(|slot| slot.id)
    }

    /// Entry after the cursor in traversal order
    pub fn successor_id(&self) -> Option<EntryId> {
        let current = self.current?;
        self.slots.get(current + 1).map(|slot| slot.id)
    }

    /// Entry before the cursor in traversal order
    pub fn predecessor_id(&self) -> Option<EntryId> {
        let current = self.current?;
        let previous = current.checked_sub(1)?;
        self.slots.get(previous).map(|slot| slot.id)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    fn position_of(&self, title: &str) -> Option<usize> {
        self.slots.iter().position(|slot| slot.entry.title == title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(title: &str, duration_secs: u32) -> Entry {
        Entry::new(title, "Artist", "Album", duration_secs, format!("/music/{title}.mp3"))
    }

    fn collection_of(titles: &[&str]) -> Collection {
        let mut collection = Collection::new();
        for title in titles {
            collection.add(entry(title, 100));
        }
        collection
    }

    fn titles(collection: &Collection) -> Vec<&str> {
        collection.entries().map(|e| e.title.as_str()).collect()
    }

    fn current_title(collection: &Collection) -> Option<&str> {
        collection.current().map(|e| e.title.as_str())
    }

    #[test]
    fn first_add_becomes_current() {
        let mut collection = Collection::new();
        assert!(collection.current().is_none());

        collection.add(entry("A", 180));
        collection.add(entry("B", 200));

        assert_eq!(current_title(&collection), Some("A"));
        assert_eq!(titles(&collection), vec!["A", "B"]);
    }

    #[test]
    fn handles_are_not_reused() {
        let mut collection = Collection::new();
        let a = collection.add(entry("A", 1));
        collection.remove("A");
        let b = collection.add(entry("A", 1));
        assert_ne!(a, b);
    }

    #[test]
    fn remove_current_moves_to_successor() {
        let mut collection = collection_of(&["A", "B", "C"]);
        collection.set_current(collection.ids()[1]);

        let removed = collection.remove("B").expect("removed");
        assert!(removed.was_current);
        assert_eq!(current_title(&collection), Some("C"));
    }

    #[test]
    fn remove_current_head_moves_to_successor() {
        let mut collection = collection_of(&["A", "B", "C"]);

        collection.remove("A");
        assert_eq!(current_title(&collection), Some("B"));
    }

    #[test]
    fn remove_current_tail_falls_back_to_predecessor() {
        let mut collection = collection_of(&["A", "B", "C"]);
        collection.set_current(collection.ids()[2]);

        collection.remove("C");
        assert_eq!(current_title(&collection), Some("B"));
    }

    #[test]
    fn remove_sole_entry_clears_cursor() {
        let mut collection = collection_of(&["A"]);

        let removed = collection.remove("A").expect("removed");
        assert!(removed.was_current);
        assert!(collection.is_empty());
        assert!(collection.current().is_none());
    }

    #[test]
    fn remove_before_current_keeps_cursor_on_same_entry() {
        let mut collection = collection_of(&["A", "B", "C"]);
        collection.set_current(collection.ids()[2]);

        let removed = collection.remove("A").expect("removed");
        assert!(!removed.was_current);
        assert_eq!(current_title(&collection), Some("C"));
    }

    #[test]
    fn remove_missing_title_is_none() {
        let mut collection = collection_of(&["A"]);
        assert!(collection.remove("Z").is_none());
        assert_eq!(collection.len(), 1);
    }

    #[test]
    fn remove_acts_on_first_match() {
        let mut collection = Collection::new();
        collection.add(Entry::new("Same", "First", "X", 1, "1.mp3"));
        collection.add(Entry::new("Same", "Second", "X", 1, "2.mp3"));

        let removed = collection.remove("Same").expect("removed");
        assert_eq!(removed.entry.artist, "First");
        assert_eq!(collection.find("Same").map(|e| e.artist.as_str()), Some("Second"));
    }

    #[test]
    fn modify_replaces_in_place() {
        let mut collection = collection_of(&["A", "B", "C"]);
        let id = collection.ids()[1];

        let modified = collection.modify("B", entry("Beta", 321));
        assert_eq!(modified, Some(id));
        assert_eq!(titles(&collection), vec!["A", "Beta", "C"]);
        assert_eq!(collection.get(id).map(|e| e.duration_secs), Some(321));
        assert!(collection.modify("B", entry("Again", 1)).is_none());
    }

    #[test]
    fn search_matches_title_and_artist_and_restarts() {
        let mut collection = Collection::new();
        collection.add(Entry::new("Hello", "Adele", "25", 295, "a.mp3"));
        collection.add(Entry::new("Yellow", "Coldplay", "Parachutes", 266, "b.mp3"));
        collection.add(Entry::new("Someone Like You", "Adele", "21", 285, "c.mp3"));

        let found: Vec<&str> = collection.search("ello").map(|e| e.title.as_str()).collect();
        assert_eq!(found, vec!["Hello", "Yellow"]);

        let by_artist: Vec<&str> = collection.search("Adele").map(|e| e.title.as_str()).collect();
        assert_eq!(by_artist, vec!["Hello", "Someone Like You"]);

        assert_eq!(collection.search("adele").count(), 0);
        // a fresh call scans from the start again
        assert_eq!(collection.search("ello").count(), 2);
        assert_eq!(current_title(&collection), Some("Hello"));
    }

    #[test]
    fn sort_by_title_is_stable_and_resets_cursor() {
        let mut collection = Collection::new();
        collection.add(Entry::new("b", "first", "x", 1, "1"));
        collection.add(Entry::new("a", "only", "x", 1, "2"));
        collection.add(Entry::new("b", "second", "x", 1, "3"));
        collection.set_current(collection.ids()[2]);

        collection.sort_by_title();

        let order: Vec<(&str, &str)> = collection
            .entries()
            .map(|e| (e.title.as_str(), e.artist.as_str()))
            .collect();
        assert_eq!(order, vec![("a", "only"), ("b", "first"), ("b", "second")]);
        assert_eq!(collection.current().map(|e| e.artist.as_str()), Some("only"));
    }

    #[test]
    fn sort_uses_byte_order() {
        let mut collection = collection_of(&["beta", "Alpha", "alpha"]);
        collection.sort_by_title();
        assert_eq!(titles(&collection), vec!["Alpha", "alpha", "beta"]);
    }

    #[test]
    fn total_duration_sums_entries() {
        let mut collection = Collection::new();
        assert_eq!(collection.total_duration(), 0);

        collection.add(entry("A", 180));
        collection.add(entry("B", 200));
        assert_eq!(collection.total_duration(), 380);
    }

    #[test]
    fn toggle_favorite_flips_first_match() {
        let mut collection = collection_of(&["A", "B"]);

        assert_eq!(collection.toggle_favorite("B"), Some(true));
        assert_eq!(collection.toggle_favorite("B"), Some(false));
        assert_eq!(collection.toggle_favorite("Z"), None);
    }

    #[test]
    fn all_marks_current() {
        let mut collection = collection_of(&["A", "B", "C"]);
        collection.set_current(collection.ids()[1]);

        let marks: Vec<(&str, bool)> = collection
            .all()
            .map(|view| (view.entry.title.as_str(), view.is_current))
            .collect();
        assert_eq!(marks, vec![("A", false), ("B", true), ("C", false)]);
    }

    #[test]
    fn neighbours_of_cursor() {
        let collection = collection_of(&["A", "B"]);
        let ids = collection.ids();

        assert_eq!(collection.predecessor_id(), None);
        assert_eq!(collection.successor_id(), Some(ids[1]));
        assert_eq!(collection.head_id(), Some(ids[0]));
        assert_eq!(collection.tail_id(), Some(ids[1]));
    }
}
