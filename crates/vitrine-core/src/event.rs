#![forbid(unsafe_code)]

//! Canonical input event types.
//!
//! Every interaction in vitrine arrives as an [`Event`]. The types here
//! are terminal-agnostic; [`Event::from_crossterm`] converts the backend
//! representation at the process boundary so the rest of the workspace
//! never touches crossterm directly.
//!
//! Mouse coordinates are 0-indexed with the origin at the top-left cell.

use bitflags::bitflags;
use crossterm::event as cte;

/// Canonical input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A keyboard event.
    Key(KeyEvent),

    /// A mouse event.
    Mouse(MouseEvent),

    /// Terminal was resized.
    Resize {
        /// New terminal width in columns.
        width: u16,
        /// New terminal height in rows.
        height: u16,
    },

    /// Focus gained (`true`) or lost (`false`).
    Focus(bool),
}

impl Event {
    /// Convert a crossterm event into a vitrine [`Event`].
    ///
    /// Returns `None` for backend events with no canonical counterpart
    /// (e.g. bracketed paste, key codes this workspace never consumes).
    #[must_use]
    pub fn from_crossterm(event: cte::Event) -> Option<Self> {
        match event {
            cte::Event::Key(key) => map_key_event(key).map(Event::Key),
            cte::Event::Mouse(mouse) => map_mouse_event(mouse).map(Event::Mouse),
            cte::Event::Resize(width, height) => Some(Event::Resize { width, height }),
            cte::Event::FocusGained => Some(Event::Focus(true)),
            cte::Event::FocusLost => Some(Event::Focus(false)),
            cte::Event::Paste(_) => None,
        }
    }
}

/// A keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key code that was pressed.
    pub code: KeyCode,

    /// Modifier keys held during the event.
    pub modifiers: Modifiers,

    /// The type of key event (press, repeat, or release).
    pub kind: KeyEventKind,
}

impl KeyEvent {
    /// Create a new key event with default modifiers and Press kind.
    #[must_use]
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::NONE,
            kind: KeyEventKind::Press,
        }
    }

    /// Create a key event with modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Check if this is a specific character key.
    #[must_use]
    pub fn is_char(&self, c: char) -> bool {
        matches!(self.code, KeyCode::Char(ch) if ch == c)
    }

    /// Check if Ctrl modifier is held.
    #[must_use]
    pub const fn ctrl(&self) -> bool {
        self.modifiers.contains(Modifiers::CTRL)
    }

    /// Check if Shift modifier is held.
    #[must_use]
    pub const fn shift(&self) -> bool {
        self.modifiers.contains(Modifiers::SHIFT)
    }

    /// True for press/repeat events, false for releases.
    ///
    /// Widgets act on presses only; release events exist so hosts on
    /// kitty-protocol terminals can ignore them uniformly.
    #[must_use]
    pub const fn is_press(&self) -> bool {
        matches!(self.kind, KeyEventKind::Press | KeyEventKind::Repeat)
    }
}

/// Key codes for keyboard events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A regular character key.
    Char(char),
    /// Enter/Return key.
    Enter,
    /// Escape key.
    Escape,
    /// Backspace key.
    Backspace,
    /// Tab key.
    Tab,
    /// Shift+Tab (back-tab).
    BackTab,
    /// Delete key.
    Delete,
    /// Home key.
    Home,
    /// End key.
    End,
    /// Page Up key.
    PageUp,
    /// Page Down key.
    PageDown,
    /// Up arrow key.
    Up,
    /// Down arrow key.
    Down,
    /// Left arrow key.
    Left,
    /// Right arrow key.
    Right,
    /// Function key (F1-F12).
    F(u8),
}

/// The type of key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyEventKind {
    /// Key was pressed (default when not distinguishable).
    #[default]
    Press,
    /// Key is being held (repeat event).
    Repeat,
    /// Key was released.
    Release,
}

bitflags! {
    /// Modifier keys that can be held during a key event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// No modifiers.
        const NONE  = 0b0000;
        /// Shift key.
        const SHIFT = 0b0001;
        /// Alt/Option key.
        const ALT   = 0b0010;
        /// Control key.
        const CTRL  = 0b0100;
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::NONE
    }
}

/// A mouse event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseEvent {
    /// Button press, release, or scroll.
    pub kind: MouseEventKind,

    /// X coordinate (0-indexed, leftmost column is 0).
    pub x: u16,

    /// Y coordinate (0-indexed, topmost row is 0).
    pub y: u16,

    /// Modifier keys held during the event.
    pub modifiers: Modifiers,
}

impl MouseEvent {
    /// Create a new mouse event.
    #[must_use]
    pub const fn new(kind: MouseEventKind, x: u16, y: u16) -> Self {
        Self {
            kind,
            x,
            y,
            modifiers: Modifiers::NONE,
        }
    }

    /// Get the position as a tuple.
    #[must_use]
    pub const fn position(&self) -> (u16, u16) {
        (self.x, self.y)
    }
}

/// The type of mouse event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseEventKind {
    /// Mouse button pressed down.
    Down(MouseButton),
    /// Mouse button released.
    Up(MouseButton),
    /// Mouse wheel scrolled up.
    ScrollUp,
    /// Mouse wheel scrolled down.
    ScrollDown,
}

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button.
    Left,
    /// Right mouse button.
    Right,
    /// Middle mouse button.
    Middle,
}

fn map_key_event(event: cte::KeyEvent) -> Option<KeyEvent> {
    let code = map_key_code(event.code)?;
    Some(KeyEvent {
        code,
        modifiers: map_modifiers(event.modifiers),
        kind: map_key_kind(event.kind),
    })
}

fn map_key_code(code: cte::KeyCode) -> Option<KeyCode> {
    match code {
        cte::KeyCode::Char(c) => Some(KeyCode::Char(c)),
        cte::KeyCode::Enter => Some(KeyCode::Enter),
        cte::KeyCode::Esc => Some(KeyCode::Escape),
        cte::KeyCode::Backspace => Some(KeyCode::Backspace),
        cte::KeyCode::Tab => Some(KeyCode::Tab),
        cte::KeyCode::BackTab => Some(KeyCode::BackTab),
        cte::KeyCode::Delete => Some(KeyCode::Delete),
        cte::KeyCode::Home => Some(KeyCode::Home),
        cte::KeyCode::End => Some(KeyCode::End),
        cte::KeyCode::PageUp => Some(KeyCode::PageUp),
        cte::KeyCode::PageDown => Some(KeyCode::PageDown),
        cte::KeyCode::Up => Some(KeyCode::Up),
        cte::KeyCode::Down => Some(KeyCode::Down),
        cte::KeyCode::Left => Some(KeyCode::Left),
        cte::KeyCode::Right => Some(KeyCode::Right),
        cte::KeyCode::F(n) if (1..=12).contains(&n) => Some(KeyCode::F(n)),
        _ => None,
    }
}

fn map_key_kind(kind: cte::KeyEventKind) -> KeyEventKind {
    match kind {
        cte::KeyEventKind::Press => KeyEventKind::Press,
        cte::KeyEventKind::Repeat => KeyEventKind::Repeat,
        cte::KeyEventKind::Release => KeyEventKind::Release,
    }
}

fn map_modifiers(modifiers: cte::KeyModifiers) -> Modifiers {
    let mut out = Modifiers::NONE;
    if modifiers.contains(cte::KeyModifiers::SHIFT) {
        out |= Modifiers::SHIFT;
    }
    if modifiers.contains(cte::KeyModifiers::ALT) {
        out |= Modifiers::ALT;
    }
    if modifiers.contains(cte::KeyModifiers::CONTROL) {
        out |= Modifiers::CTRL;
    }
    out
}

fn map_mouse_event(event: cte::MouseEvent) -> Option<MouseEvent> {
    let kind = match event.kind {
        cte::MouseEventKind::Down(b) => MouseEventKind::Down(map_mouse_button(b)),
        cte::MouseEventKind::Up(b) => MouseEventKind::Up(map_mouse_button(b)),
        cte::MouseEventKind::ScrollUp => MouseEventKind::ScrollUp,
        cte::MouseEventKind::ScrollDown => MouseEventKind::ScrollDown,
        _ => return None,
    };
    Some(MouseEvent {
        kind,
        x: event.column,
        y: event.row,
        modifiers: map_modifiers(event.modifiers),
    })
}

fn map_mouse_button(button: cte::MouseButton) -> MouseButton {
    match button {
        cte::MouseButton::Left => MouseButton::Left,
        cte::MouseButton::Right => MouseButton::Right,
        cte::MouseButton::Middle => MouseButton::Middle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_event_builder() {
        let ev = KeyEvent::new(KeyCode::Enter).with_modifiers(Modifiers::CTRL);
        assert_eq!(ev.code, KeyCode::Enter);
        assert!(ev.ctrl());
        assert!(!ev.shift());
        assert!(ev.is_press());
    }

    #[test]
    fn is_char_matches_only_same_char() {
        let ev = KeyEvent::new(KeyCode::Char('x'));
        assert!(ev.is_char('x'));
        assert!(!ev.is_char('y'));
        assert!(!KeyEvent::new(KeyCode::Enter).is_char('x'));
    }

    #[test]
    fn crossterm_key_maps_to_canonical() {
        let ct = cte::Event::Key(cte::KeyEvent::new(
            cte::KeyCode::Down,
            cte::KeyModifiers::NONE,
        ));
        assert_eq!(
            Event::from_crossterm(ct),
            Some(Event::Key(KeyEvent::new(KeyCode::Down)))
        );
    }

    #[test]
    fn crossterm_resize_maps() {
        let ev = Event::from_crossterm(cte::Event::Resize(80, 24));
        assert_eq!(
            ev,
            Some(Event::Resize {
                width: 80,
                height: 24
            })
        );
    }

    #[test]
    fn unhandled_key_codes_are_dropped() {
        let ct = cte::Event::Key(cte::KeyEvent::new(
            cte::KeyCode::CapsLock,
            cte::KeyModifiers::NONE,
        ));
        assert_eq!(Event::from_crossterm(ct), None);
    }

    #[test]
    fn mouse_down_maps_with_position() {
        let ct = cte::Event::Mouse(cte::MouseEvent {
            kind: cte::MouseEventKind::Down(cte::MouseButton::Left),
            column: 3,
            row: 7,
            modifiers: cte::KeyModifiers::NONE,
        });
        match Event::from_crossterm(ct) {
            Some(Event::Mouse(m)) => {
                assert_eq!(m.kind, MouseEventKind::Down(MouseButton::Left));
                assert_eq!(m.position(), (3, 7));
            }
            other => panic!("unexpected mapping: {other:?}"),
        }
    }
}
