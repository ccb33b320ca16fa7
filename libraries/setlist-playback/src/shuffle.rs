//! Shuffled traversal order
//!
//! A permutation of entry handles, generated fresh every time shuffle mode is
//! switched on, with a cursor of its own. The permutation never owns entries.

use crate::types::EntryId;
use rand::seq::SliceRandom;
use rand::Rng;

/// Shuffle permutation plus cursor
#[derive(Debug, Clone, Default)]
pub struct ShuffleView {
    order: Vec<EntryId>,
    cursor: usize,
    enabled: bool,
}

impl ShuffleView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Turn shuffle on with a fresh uniform permutation of `ids`
    ///
    /// Fisher-Yates: every permutation is equally likely. The cursor resets to
    /// the start and the first handle of the new order is returned.
    pub fn enable<R: Rng + ?Sized>(&mut self, mut ids: Vec<EntryId>, rng: &mut R) -> Option<EntryId> {
        ids.shuffle(rng);
        self.order = ids;
        self.cursor = 0;
        self.enabled = true;
        self.order.first().copied()
    }

    /// Turn shuffle off and forget the permutation
    pub fn disable(&mut self) {
        self.order.clear();
        self.cursor = 0;
        self.enabled = false;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Handle under the cursor
    pub fn current(&self) -> Option<EntryId> {
        self.order.get(self.cursor).copied()
    }

    /// Step forward, unless already at the last position
    pub fn advance(&mut self) -> Option<EntryId> {
        if self.cursor + 1 < self.order.len() {
            self.cursor += 1;
            self.current()
        } else {
            None
        }
    }

    /// Step back, unless already at the first position
    pub fn retreat(&mut self) -> Option<EntryId> {
        if self.cursor > 0 && !self.order.is_empty() {
            self.cursor -= 1;
            self.current()
        } else {
            None
        }
    }

    pub fn wrap_to_start(&mut self) -> Option<EntryId> {
        self.cursor = 0;
        self.current()
    }

    pub fn wrap_to_end(&mut self) -> Option<EntryId> {
        self.cursor = self.order.len().saturating_sub(1);
        self.current()
    }

    /// Add a handle at the end of the permutation
    pub fn push(&mut self, id: EntryId) {
        if self.enabled {
            self.order.push(id);
        }
    }

    /// Move the cursor onto `id`; returns false if it is not in the order
    pub fn seek(&mut self, id: EntryId) -> bool {
        match self.order.iter().position(|candidate| *candidate == id) {
            Some(position) => {
                self.cursor = position;
                true
            }
            None => false,
        }
    }

    /// Drop `id` from the permutation
    ///
    /// Returns the handle now under the cursor when the removed handle was the
    /// one under it: the next in shuffle order, else the previous one. Handles
    /// elsewhere only shift the cursor so it keeps pointing at the same entry.
    pub fn remove(&mut self, id: EntryId) -> Option<EntryId> {
        let position = self.order.iter().position(|candidate| *candidate == id)?;
        self.order.remove(position);

        if position < self.cursor {
            self.cursor -= 1;
            return None;
        }
        if position > self.cursor {
            return None;
        }

        if self.cursor >= self.order.len() {
            self.cursor = self.order.len().saturating_sub(1);
        }
        self.current()
    }

    /// Permutation in play order
    pub fn order(&self) -> &[EntryId] {
        &self.order
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn ids(count: u64) -> Vec<EntryId> {
        (0..count).map(EntryId).collect()
    }

    fn enabled_view(count: u64) -> ShuffleView {
        let mut view = ShuffleView::new();
        let mut rng = StdRng::seed_from_u64(7);
        view.enable(ids(count), &mut rng);
        view
    }

    #[test]
    fn enable_produces_permutation() {
        let view = enabled_view(20);

        let seen: HashSet<EntryId> = view.order().iter().copied().collect();
        assert_eq!(seen.len(), 20);
        assert_eq!(view.order().len(), 20);
        assert_eq!(view.cursor(), 0);
        assert!(view.is_enabled());
    }

    #[test]
    fn enable_returns_first_of_order() {
        let mut view = ShuffleView::new();
        let mut rng = StdRng::seed_from_u64(1);
        let first = view.enable(ids(5), &mut rng);
        assert_eq!(first, Some(view.order()[0]));
    }

    #[test]
    fn enable_on_empty_has_no_current() {
        let mut view = ShuffleView::new();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(view.enable(Vec::new(), &mut rng), None);
        assert!(view.is_enabled());
        assert_eq!(view.advance(), None);
        assert_eq!(view.retreat(), None);
        assert_eq!(view.wrap_to_end(), None);
    }

    #[test]
    fn reenable_regenerates_and_resets_cursor() {
        let mut view = enabled_view(30);
        view.advance();
        view.advance();
        let first_order = view.order().to_vec();

        let mut rng = StdRng::seed_from_u64(99);
        view.enable(ids(30), &mut rng);

        assert_eq!(view.cursor(), 0);
        // 1/30! chance of the same order
        assert_ne!(view.order(), first_order.as_slice());
    }

    #[test]
    fn advance_and_retreat_stop_at_bounds() {
        let mut view = enabled_view(3);
        let order = view.order().to_vec();

        assert_eq!(view.retreat(), None);
        assert_eq!(view.advance(), Some(order[1]));
        assert_eq!(view.advance(), Some(order[2]));
        assert_eq!(view.advance(), None);
        assert_eq!(view.current(), Some(order[2]));
        assert_eq!(view.wrap_to_start(), Some(order[0]));
        assert_eq!(view.wrap_to_end(), Some(order[2]));
    }

    #[test]
    fn remove_under_cursor_moves_to_next_then_previous() {
        let mut view = enabled_view(3);
        let order = view.order().to_vec();
        view.advance();

        assert_eq!(view.remove(order[1]), Some(order[2]));
        assert_eq!(view.remove(order[2]), Some(order[0]));
        assert_eq!(view.remove(order[0]), None);
        assert!(view.order().is_empty());
    }

    #[test]
    fn remove_before_cursor_keeps_same_target() {
        let mut view = enabled_view(4);
        let order = view.order().to_vec();
        view.seek(order[2]);

        assert_eq!(view.remove(order[0]), None);
        assert_eq!(view.current(), Some(order[2]));

        assert_eq!(view.remove(order[3]), None);
        assert_eq!(view.current(), Some(order[2]));
    }

    #[test]
    fn push_only_while_enabled() {
        let mut view = ShuffleView::new();
        view.push(EntryId(1));
        assert!(view.order().is_empty());

        let mut view = enabled_view(2);
        view.push(EntryId(10));
        assert_eq!(view.order().last(), Some(&EntryId(10)));
    }

    #[test]
    fn disable_discards_order() {
        let mut view = enabled_view(5);
        view.disable();
        assert!(!view.is_enabled());
        assert!(view.order().is_empty());
        assert_eq!(view.current(), None);
    }
}
