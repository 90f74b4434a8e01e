#![forbid(unsafe_code)]

//! Open/closed state, the exclusivity coordinator, and key handling.

use crate::accordion::focus::{NavKey, next_focus_index};
use crate::accordion::item::AccordionItem;
use vitrine_core::{KeyCode, KeyEvent};

use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_GROUP_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque per-widget-instance token coordinating exclusivity.
///
/// Drawn from a process-wide counter, so values are unique across
/// instances and stable for the instance's lifetime. The counter
/// replaces a random suffix to keep widget output reproducible; tests
/// assert uniqueness, never concrete values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupId(u64);

impl GroupId {
    fn next() -> Self {
        Self(NEXT_GROUP_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw token value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

/// Outcome of routing a key event through [`AccordionState::handle_key`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccordionKeyResult {
    /// A navigation key was consumed; the host must move input focus to
    /// this header index and suppress default key handling.
    FocusMoved(usize),
    /// Enter/Space toggled this item.
    Toggled(usize),
    /// The event was not for this widget; let it propagate.
    Ignored,
}

/// Per-instance accordion state: one open flag per item position, the
/// exclusivity flag, and the instance's group token.
///
/// State is keyed by item position. If the caller replaces the item
/// sequence, [`reset_from`](Self::reset_from) re-derives every flag
/// from the new items' defaults; open state never migrates across a
/// reorder (known limitation of positional identity).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccordionState {
    open: Vec<bool>,
    exclusive: bool,
    group: GroupId,
}

impl AccordionState {
    /// Create state seeded from each item's default-open flag.
    #[must_use]
    pub fn from_items(items: &[AccordionItem]) -> Self {
        Self {
            open: items.iter().map(AccordionItem::is_expanded_by_default).collect(),
            exclusive: false,
            group: GroupId::next(),
        }
    }

    /// Builder: set the exclusivity flag at construction.
    #[must_use]
    pub fn with_exclusive(mut self, exclusive: bool) -> Self {
        self.exclusive = exclusive;
        self
    }

    /// Re-derive open state after the item sequence was replaced.
    ///
    /// Positional reset: flag `i` comes from the new item `i`'s
    /// default, regardless of what was open before.
    pub fn reset_from(&mut self, items: &[AccordionItem]) {
        self.open.clear();
        self.open
            .extend(items.iter().map(AccordionItem::is_expanded_by_default));
    }

    /// Number of items this state tracks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.open.len()
    }

    /// True when no items are tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    /// Whether item `index` is open. Out-of-bounds reads as closed.
    #[must_use]
    pub fn is_open(&self, index: usize) -> bool {
        self.open.get(index).copied().unwrap_or(false)
    }

    /// Indices of all currently open items.
    pub fn open_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.open
            .iter()
            .enumerate()
            .filter_map(|(i, open)| open.then_some(i))
    }

    /// This instance's group token.
    #[must_use]
    pub const fn group_id(&self) -> GroupId {
        self.group
    }

    /// Whether at most one item may be open.
    #[must_use]
    pub const fn exclusive(&self) -> bool {
        self.exclusive
    }

    /// Change the exclusivity flag.
    ///
    /// Enabling it does not close anything immediately; the invariant
    /// is enforced on the next open. Disabling it never reopens items
    /// that were auto-closed earlier.
    pub fn set_exclusive(&mut self, exclusive: bool) {
        self.exclusive = exclusive;
    }

    /// Open item `index`. No-op when out of bounds.
    ///
    /// With exclusivity on, every other item closes as part of the same
    /// call, so observers never see two items open.
    pub fn open(&mut self, index: usize) {
        if index >= self.open.len() {
            return;
        }
        if self.exclusive {
            self.open.fill(false);
        }
        self.open[index] = true;
        #[cfg(feature = "tracing")]
        tracing::trace!(group = self.group.value(), index, "accordion item opened");
    }

    /// Close item `index`. Only ever affects that one item.
    pub fn close(&mut self, index: usize) {
        if let Some(flag) = self.open.get_mut(index) {
            *flag = false;
            #[cfg(feature = "tracing")]
            tracing::trace!(group = self.group.value(), index, "accordion item closed");
        }
    }

    /// Flip item `index` between open and closed. No-op out of bounds.
    pub fn toggle(&mut self, index: usize) {
        if index >= self.open.len() {
            return;
        }
        if self.open[index] {
            self.close(index);
        } else {
            self.open(index);
        }
    }

    /// Route a key event raised on the header at `focused`.
    ///
    /// Navigation keys yield the index focus must move to; Enter/Space
    /// toggle the focused item. Events raised with `focused` outside
    /// the header list (not a header) and key releases are ignored.
    pub fn handle_key(&mut self, event: KeyEvent, focused: usize) -> AccordionKeyResult {
        if !event.is_press() || focused >= self.open.len() {
            return AccordionKeyResult::Ignored;
        }
        if let Some(nav) = NavKey::from_key(event.code) {
            return AccordionKeyResult::FocusMoved(next_focus_index(
                focused,
                nav,
                self.open.len(),
            ));
        }
        match event.code {
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.toggle(focused);
                AccordionKeyResult::Toggled(focused)
            }
            _ => AccordionKeyResult::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn items(defaults: &[bool]) -> Vec<AccordionItem> {
        defaults
            .iter()
            .enumerate()
            .map(|(i, &open)| {
                AccordionItem::new(format!("Q{i}"), format!("A{i}")).expanded_by_default(open)
            })
            .collect()
    }

    #[test]
    fn initial_state_matches_defaults() {
        let state = AccordionState::from_items(&items(&[false, true, false]));
        assert!(!state.is_open(0));
        assert!(state.is_open(1));
        assert!(!state.is_open(2));
    }

    #[test]
    fn group_ids_are_unique_and_stable() {
        let list = items(&[false]);
        let a = AccordionState::from_items(&list);
        let b = AccordionState::from_items(&list);
        assert_ne!(a.group_id(), b.group_id());
        assert_eq!(a.group_id(), a.clone().group_id());
    }

    #[test]
    fn toggle_twice_restores_state() {
        let mut state = AccordionState::from_items(&items(&[false, true]));
        let before = state.clone();
        state.toggle(0);
        state.toggle(0);
        assert_eq!(state, before);
    }

    #[test]
    fn toggle_out_of_bounds_is_noop() {
        let mut state = AccordionState::from_items(&items(&[false]));
        let before = state.clone();
        state.toggle(5);
        assert_eq!(state, before);
    }

    #[test]
    fn non_exclusive_allows_multiple_open() {
        let mut state = AccordionState::from_items(&items(&[false, false, false]));
        state.open(0);
        state.open(2);
        let open: Vec<usize> = state.open_indices().collect();
        assert_eq!(open, vec![0, 2]);
    }

    #[test]
    fn exclusive_open_closes_siblings() {
        let mut state =
            AccordionState::from_items(&items(&[false, false, false])).with_exclusive(true);
        state.open(0);
        state.open(2);
        let open: Vec<usize> = state.open_indices().collect();
        assert_eq!(open, vec![2]);
    }

    #[test]
    fn close_only_affects_one_item() {
        let mut state = AccordionState::from_items(&items(&[true, true]));
        state.close(0);
        assert!(!state.is_open(0));
        assert!(state.is_open(1));
    }

    #[test]
    fn disabling_exclusive_does_not_reopen() {
        let mut state =
            AccordionState::from_items(&items(&[true, false])).with_exclusive(true);
        state.open(1); // auto-closes item 0
        state.set_exclusive(false);
        assert!(!state.is_open(0));
        assert!(state.is_open(1));
    }

    #[test]
    fn reset_from_reseeds_by_position() {
        let mut state = AccordionState::from_items(&items(&[false, false]));
        state.open(0);
        state.reset_from(&items(&[true, false, false]));
        assert_eq!(state.len(), 3);
        assert!(state.is_open(0));
        assert!(!state.is_open(1));
    }

    #[test]
    fn handle_key_navigation_moves_focus() {
        let mut state = AccordionState::from_items(&items(&[false, false, false]));
        assert_eq!(
            state.handle_key(KeyEvent::new(KeyCode::Down), 1),
            AccordionKeyResult::FocusMoved(2)
        );
        assert_eq!(
            state.handle_key(KeyEvent::new(KeyCode::End), 0),
            AccordionKeyResult::FocusMoved(2)
        );
        // Navigation never mutates open state.
        assert_eq!(state.open_indices().count(), 0);
    }

    #[test]
    fn handle_key_enter_and_space_toggle() {
        let mut state = AccordionState::from_items(&items(&[false, false]));
        assert_eq!(
            state.handle_key(KeyEvent::new(KeyCode::Enter), 0),
            AccordionKeyResult::Toggled(0)
        );
        assert!(state.is_open(0));
        assert_eq!(
            state.handle_key(KeyEvent::new(KeyCode::Char(' ')), 0),
            AccordionKeyResult::Toggled(0)
        );
        assert!(!state.is_open(0));
    }

    #[test]
    fn handle_key_ignores_non_headers_and_other_keys() {
        let mut state = AccordionState::from_items(&items(&[false]));
        assert_eq!(
            state.handle_key(KeyEvent::new(KeyCode::Enter), 9),
            AccordionKeyResult::Ignored
        );
        assert_eq!(
            state.handle_key(KeyEvent::new(KeyCode::Char('x')), 0),
            AccordionKeyResult::Ignored
        );
        assert!(!state.is_open(0));
    }

    proptest! {
        #[test]
        fn exclusive_invariant_holds_under_any_toggle_sequence(
            count in 1usize..8,
            ops in prop::collection::vec(0usize..10, 0..40),
        ) {
            let list = items(&vec![false; count]);
            let mut state = AccordionState::from_items(&list).with_exclusive(true);
            for index in ops {
                state.toggle(index);
                prop_assert!(state.open_indices().count() <= 1);
            }
        }

        #[test]
        fn toggle_is_an_involution_without_exclusivity(
            count in 1usize..8,
            index in 0usize..8,
        ) {
            let list = items(&vec![false; count]);
            let mut state = AccordionState::from_items(&list);
            let before = state.clone();
            state.toggle(index);
            state.toggle(index);
            prop_assert_eq!(state, before);
        }
    }
}
