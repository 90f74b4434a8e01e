#![forbid(unsafe_code)]

//! Navigational sidebar: a vertical menu with one highlighted entry.
//!
//! The sidebar only renders the menu the host hands it; deriving
//! entries from a route tree (or anything else) is the host's concern.

use crate::{StatefulWidget, draw_text_span};
use vitrine_core::geometry::Rect;
use vitrine_render::Buffer;
use vitrine_style::Style;

/// One sidebar entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarEntry {
    label: String,
    hotkey: Option<char>,
}

impl SidebarEntry {
    /// Create an entry with a display label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            hotkey: None,
        }
    }

    /// Attach a hotkey hint rendered after the label.
    #[must_use]
    pub fn with_hotkey(mut self, key: char) -> Self {
        self.hotkey = Some(key);
        self
    }

    /// The display label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The hotkey hint, if any.
    #[must_use]
    pub const fn hotkey(&self) -> Option<char> {
        self.hotkey
    }
}

/// Selection state for a [`Sidebar`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SidebarState {
    /// Index of the active entry.
    pub selected: usize,
}

impl SidebarState {
    /// Move selection down, clamped to the last entry.
    pub fn select_next(&mut self, count: usize) {
        if count == 0 {
            return;
        }
        self.selected = (self.selected + 1).min(count - 1);
    }

    /// Move selection up, clamped to the first entry.
    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Jump to an entry, clamped into range.
    pub fn select(&mut self, index: usize, count: usize) {
        if count == 0 {
            return;
        }
        self.selected = index.min(count - 1);
    }
}

/// A vertical menu of labeled entries.
#[derive(Debug, Clone)]
pub struct Sidebar<'a> {
    entries: &'a [SidebarEntry],
    title: Option<&'a str>,
    style: Style,
    selected_style: Style,
}

impl<'a> Sidebar<'a> {
    /// Create a sidebar over the given entries.
    #[must_use]
    pub fn new(entries: &'a [SidebarEntry]) -> Self {
        Self {
            entries,
            title: None,
            style: Style::new(),
            selected_style: Style::new().reverse(),
        }
    }

    /// Add a title row above the entries.
    #[must_use]
    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    /// Style for unselected entries.
    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Style for the selected entry.
    #[must_use]
    pub fn selected_style(mut self, style: Style) -> Self {
        self.selected_style = style;
        self
    }
}

impl StatefulWidget for Sidebar<'_> {
    type State = SidebarState;

    fn render(&self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        if area.is_empty() {
            return;
        }
        if !self.entries.is_empty() && state.selected >= self.entries.len() {
            state.selected = self.entries.len() - 1;
        }

        let mut y = area.y;
        if let Some(title) = self.title {
            draw_text_span(buf, area.x + 1, y, title, self.style.bold(), area.right());
            y = y.saturating_add(2);
        }

        for (i, entry) in self.entries.iter().enumerate() {
            if y >= area.bottom() {
                break;
            }
            let selected = i == state.selected;
            let style = if selected { self.selected_style } else { self.style };
            let marker = if selected { '\u{258C}' } else { ' ' }; // ▌
            let mut line = String::new();
            line.push(marker);
            line.push(' ');
            line.push_str(entry.label());
            if let Some(key) = entry.hotkey() {
                line.push_str("  [");
                line.push(key);
                line.push(']');
            }
            draw_text_span(buf, area.x, y, &line, style, area.right());
            if selected {
                buf.set_style(Rect::new(area.x, y, area.width, 1), style);
            }
            y += 1;
        }
    }
}
