#![forbid(unsafe_code)]

//! Shared UI chrome: sidebar region, content region, and status line.

use crate::screens::ScreenId;
use crate::settings::ShowcaseSettings;
use crate::theme::ChromeStyles;
use vitrine_core::geometry::{Rect, Sides};
use vitrine_render::{Buffer, Cell};
use vitrine_widgets::sidebar::{Sidebar, SidebarEntry, SidebarState};
use vitrine_widgets::{StatefulWidget, draw_text};

const SIDEBAR_WIDTH: u16 = 18;

/// The three chrome regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChromeLayout {
    /// Left navigation column.
    pub sidebar: Rect,
    /// Main content area (already inset).
    pub content: Rect,
    /// Bottom status line.
    pub status: Rect,
}

/// Split the terminal area into chrome regions.
#[must_use]
pub fn layout(area: Rect) -> ChromeLayout {
    let (main, status) = area.split_bottom(1);
    let (sidebar, content) = main.split_left(SIDEBAR_WIDTH);
    ChromeLayout {
        sidebar,
        content: content.inner(Sides::new(1, 2, 1, 2)),
        status,
    }
}

/// Render the navigation sidebar.
pub fn render_sidebar(
    buf: &mut Buffer,
    area: Rect,
    state: &mut SidebarState,
    styles: &ChromeStyles,
) {
    buf.fill(area, {
        let mut cell = Cell::default();
        cell.apply_style(styles.sidebar);
        cell
    });
    let entries: Vec<SidebarEntry> = ScreenId::ALL
        .iter()
        .map(|id| SidebarEntry::new(id.label()).with_hotkey(id.hotkey()))
        .collect();
    Sidebar::new(&entries)
        .title("vitrine")
        .style(styles.sidebar)
        .selected_style(styles.sidebar_selected)
        .render(area, buf, state);
}

/// Render the status line: active toggles plus key hints.
pub fn render_status(
    buf: &mut Buffer,
    area: Rect,
    settings: ShowcaseSettings,
    styles: &ChromeStyles,
) {
    buf.fill(area, {
        let mut cell = Cell::default();
        cell.apply_style(styles.status);
        cell
    });
    let mut line = String::from(" d:dark  r:rtl  tab:screen  q:quit");
    if settings.dark_mode {
        line.push_str("  [dark]");
    }
    if settings.rtl {
        line.push_str("  [rtl]");
    }
    draw_text(buf, area.x, area.y, &line, styles.status, area.right());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_partitions_the_area() {
        let chrome = layout(Rect::from_size(80, 24));
        assert_eq!(chrome.sidebar, Rect::new(0, 0, 18, 23));
        assert_eq!(chrome.status, Rect::new(0, 23, 80, 1));
        assert!(chrome.content.x >= 20);
        assert!(chrome.content.width <= 58);
    }

    #[test]
    fn layout_survives_tiny_terminals() {
        let chrome = layout(Rect::from_size(10, 2));
        assert!(chrome.content.is_empty() || chrome.content.width <= 10);
        assert_eq!(chrome.status.height, 1);
    }
}
