#![forbid(unsafe_code)]

//! A single terminal cell.

use vitrine_style::{Color, Style, StyleFlags};

/// One cell of the render grid: a character plus resolved style.
///
/// Wide glyphs occupy their first cell normally; the following cell is
/// marked as a continuation so presenters skip it instead of emitting a
/// stray space that would shift the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// The character displayed in this cell.
    pub ch: char,
    /// Foreground color, if any style applied.
    pub fg: Option<Color>,
    /// Background color, if any style applied.
    pub bg: Option<Color>,
    /// Attribute flags.
    pub attrs: StyleFlags,
    /// True when this cell is covered by a wide glyph to its left.
    pub continuation: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: None,
            bg: None,
            attrs: StyleFlags::empty(),
            continuation: false,
        }
    }
}

impl Cell {
    /// Create an unstyled cell holding `ch`.
    #[must_use]
    pub fn from_char(ch: char) -> Self {
        Self {
            ch,
            ..Self::default()
        }
    }

    /// Create the continuation cell that trails a wide glyph.
    #[must_use]
    pub fn continuation() -> Self {
        Self {
            continuation: true,
            ..Self::default()
        }
    }

    /// True when the cell holds no visible content.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.ch == ' ' && self.bg.is_none() && !self.continuation
    }

    /// Apply a style, overwriting only the parts it specifies.
    pub fn apply_style(&mut self, style: Style) {
        if let Some(fg) = style.fg {
            self.fg = Some(fg);
        }
        if let Some(bg) = style.bg {
            self.bg = Some(bg);
        }
        if let Some(attrs) = style.attrs {
            self.attrs |= attrs;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_cell_is_blank() {
        assert!(Cell::default().is_blank());
        assert!(!Cell::from_char('x').is_blank());
    }

    #[test]
    fn apply_style_layers() {
        let mut cell = Cell::from_char('a');
        cell.apply_style(Style::new().fg(Color::rgb(1, 2, 3)));
        cell.apply_style(Style::new().bold());
        assert_eq!(cell.fg, Some(Color::rgb(1, 2, 3)));
        assert!(cell.attrs.contains(StyleFlags::BOLD));
    }

    #[test]
    fn continuation_is_not_blank() {
        assert!(!Cell::continuation().is_blank());
    }
}
