#![forbid(unsafe_code)]

//! Chrome styles resolved from the adaptive palette.
//!
//! Everything visual in the showcase funnels through [`ChromeStyles`],
//! so flipping dark mode is one call to [`ChromeStyles::resolve`].

use vitrine_style::{Palette, Style};

/// The resolved style set for one dark-mode value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChromeStyles {
    /// Page background fill.
    pub base: Style,
    /// Accordion header text.
    pub header: Style,
    /// Accordion body text.
    pub body: Style,
    /// Borders and divider rules.
    pub border: Style,
    /// Focused-header highlight.
    pub focus: Style,
    /// Sidebar entries.
    pub sidebar: Style,
    /// Selected sidebar entry.
    pub sidebar_selected: Style,
    /// Status line.
    pub status: Style,
    /// Page headline.
    pub headline: Style,
}

impl ChromeStyles {
    /// Resolve the default palette against the dark-mode flag.
    #[must_use]
    pub fn resolve(dark: bool) -> Self {
        let palette = Palette::default();
        let text = palette.text.resolve(dark);
        let muted = palette.muted.resolve(dark);
        let background = palette.background.resolve(dark);
        let surface = palette.surface.resolve(dark);
        let border = palette.border.resolve(dark);
        let accent = palette.accent.resolve(dark);

        Self {
            base: Style::new().bg(background),
            header: Style::new().fg(text).bg(background),
            body: Style::new().fg(muted).bg(background),
            border: Style::new().fg(border).bg(background),
            focus: Style::new().fg(background).bg(accent),
            sidebar: Style::new().fg(muted).bg(surface),
            sidebar_selected: Style::new().fg(accent).bg(surface).bold(),
            status: Style::new().fg(muted).bg(surface),
            headline: Style::new().fg(text).bg(background).bold(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_and_light_resolve_differently() {
        assert_ne!(ChromeStyles::resolve(false), ChromeStyles::resolve(true));
    }

    #[test]
    fn resolve_is_stable_per_mode() {
        assert_eq!(ChromeStyles::resolve(true), ChromeStyles::resolve(true));
    }
}
