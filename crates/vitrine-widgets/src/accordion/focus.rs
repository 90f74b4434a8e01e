#![forbid(unsafe_code)]

//! Keyboard focus movement across accordion headers.
//!
//! The navigator is a pure, total function over an ordered header list.
//! It computes the index focus should move to; the caller owns the
//! actual focus cursor and is responsible for suppressing the host's
//! default handling of the four navigation keys. Enter/Space are toggle
//! triggers and are never routed through here.

use vitrine_core::KeyCode;

/// The four keys that move focus between headers.
///
/// Constructing a `NavKey` via [`NavKey::from_key`] is the filtering
/// step: any other key code simply never reaches
/// [`next_focus_index`], which keeps the function total without an
/// "unknown key" escape hatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavKey {
    /// Move focus to the previous header.
    Up,
    /// Move focus to the next header.
    Down,
    /// Jump to the first header.
    Home,
    /// Jump to the last header.
    End,
}

impl NavKey {
    /// Filter a key code down to a navigation key.
    #[must_use]
    pub const fn from_key(code: KeyCode) -> Option<Self> {
        match code {
            KeyCode::Up => Some(Self::Up),
            KeyCode::Down => Some(Self::Down),
            KeyCode::Home => Some(Self::Home),
            KeyCode::End => Some(Self::End),
            _ => None,
        }
    }
}

/// Compute the header index focus should move to.
///
/// Movement clamps at both ends: `Down` on the last header and `Up` on
/// the first are no-ops. With `count == 0` there are no headers to
/// focus, so `current` is returned unchanged (defensive; an empty item
/// list renders no headers and raises no key events).
#[must_use]
pub const fn next_focus_index(current: usize, key: NavKey, count: usize) -> usize {
    if count == 0 {
        return current;
    }
    let last = count - 1;
    match key {
        NavKey::Down => {
            if current < last {
                current + 1
            } else {
                last
            }
        }
        NavKey::Up => current.saturating_sub(1),
        NavKey::Home => 0,
        NavKey::End => last,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn down_advances() {
        assert_eq!(next_focus_index(1, NavKey::Down, 3), 2);
    }

    #[test]
    fn down_clamps_at_last() {
        assert_eq!(next_focus_index(2, NavKey::Down, 3), 2);
    }

    #[test]
    fn up_clamps_at_first() {
        assert_eq!(next_focus_index(0, NavKey::Up, 3), 0);
    }

    #[test]
    fn home_jumps_to_first() {
        assert_eq!(next_focus_index(1, NavKey::Home, 3), 0);
    }

    #[test]
    fn end_jumps_to_last() {
        assert_eq!(next_focus_index(1, NavKey::End, 3), 2);
    }

    #[test]
    fn zero_count_returns_current() {
        assert_eq!(next_focus_index(7, NavKey::Down, 0), 7);
        assert_eq!(next_focus_index(7, NavKey::Home, 0), 7);
    }

    #[test]
    fn from_key_filters_non_navigation() {
        assert_eq!(NavKey::from_key(KeyCode::Down), Some(NavKey::Down));
        assert_eq!(NavKey::from_key(KeyCode::Enter), None);
        assert_eq!(NavKey::from_key(KeyCode::Char('j')), None);
    }

    proptest! {
        #[test]
        fn result_always_within_bounds(
            current in 0usize..100,
            count in 1usize..100,
            key in prop_oneof![
                Just(NavKey::Up),
                Just(NavKey::Down),
                Just(NavKey::Home),
                Just(NavKey::End),
            ],
        ) {
            let next = next_focus_index(current, key, count);
            prop_assert!(next < count || next == current);
        }

        #[test]
        fn in_bounds_input_stays_in_bounds(
            count in 1usize..100,
            key in prop_oneof![
                Just(NavKey::Up),
                Just(NavKey::Down),
                Just(NavKey::Home),
                Just(NavKey::End),
            ],
            seed in 0usize..100,
        ) {
            let current = seed % count;
            prop_assert!(next_focus_index(current, key, count) < count);
        }
    }
}
