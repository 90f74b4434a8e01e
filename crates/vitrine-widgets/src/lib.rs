#![forbid(unsafe_code)]

//! Widgets for the vitrine showcase.

pub mod accordion;
pub mod sidebar;

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;
use vitrine_core::geometry::Rect;
use vitrine_render::{Buffer, Cell};
use vitrine_style::Style;

/// A `Widget` is a renderable component.
///
/// Widgets render themselves into a `Buffer` within a given `Rect` and
/// must clip to it; drawing outside the area is a bug in the widget,
/// not in the buffer (which also bounds-checks).
pub trait Widget {
    /// Render the widget into the buffer at the given area.
    fn render(&self, area: Rect, buf: &mut Buffer);
}

/// A `StatefulWidget` is a widget that renders based on mutable state.
pub trait StatefulWidget {
    /// The state this widget reads and updates while rendering.
    type State;

    /// Render the widget into the buffer with mutable state.
    fn render(&self, area: Rect, buf: &mut Buffer, state: &mut Self::State);
}

/// Horizontal layout direction.
///
/// Right-to-left flips header alignment and the disclosure marker side;
/// it does not reorder items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Left-to-right (default).
    #[default]
    Ltr,
    /// Right-to-left.
    Rtl,
}

impl Direction {
    /// True for right-to-left.
    #[must_use]
    pub const fn is_rtl(self) -> bool {
        matches!(self, Self::Rtl)
    }
}

/// Draw a single line of text into a buffer, clipped at `max_x`.
///
/// Returns the x position after the last drawn grapheme. Hosts use
/// this for chrome text that doesn't warrant a widget.
pub fn draw_text(
    buf: &mut Buffer,
    x: u16,
    y: u16,
    content: &str,
    style: Style,
    max_x: u16,
) -> u16 {
    draw_text_span(buf, x, y, content, style, max_x)
}

/// Draw a text span into a buffer at the given position.
///
/// Returns the x position after the last drawn grapheme.
/// Stops at `max_x` (exclusive). Wide graphemes leave a continuation
/// cell behind their first column.
pub(crate) fn draw_text_span(
    buf: &mut Buffer,
    mut x: u16,
    y: u16,
    content: &str,
    style: Style,
    max_x: u16,
) -> u16 {
    for grapheme in content.graphemes(true) {
        if x >= max_x {
            break;
        }
        let w = UnicodeWidthStr::width(grapheme);
        if w == 0 {
            continue;
        }
        if x + w as u16 > max_x {
            break;
        }
        if let Some(c) = grapheme.chars().next() {
            let mut cell = Cell::from_char(c);
            cell.apply_style(style);
            buf.set(x, y, cell);
            if w > 1 {
                buf.set(x + 1, y, Cell::continuation());
            }
        }
        x = x.saturating_add(w as u16);
    }
    x
}

/// Draw a text span ending at `end_x` (exclusive), right-aligned.
///
/// Used for right-to-left header layout. Truncates from the end when
/// the span is wider than the space between `min_x` and `end_x`.
pub(crate) fn draw_text_span_rtl(
    buf: &mut Buffer,
    min_x: u16,
    y: u16,
    content: &str,
    style: Style,
    end_x: u16,
) -> u16 {
    let width = UnicodeWidthStr::width(content) as u16;
    let avail = end_x.saturating_sub(min_x);
    let start = if width >= avail {
        min_x
    } else {
        end_x - width
    };
    draw_text_span(buf, start, y, content, style, end_x);
    start
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_style::Color;

    #[test]
    fn draw_text_span_basic() {
        let mut buf = Buffer::new(10, 1);
        let end_x = draw_text_span(&mut buf, 0, 0, "ABC", Style::default(), 10);

        assert_eq!(end_x, 3);
        assert_eq!(buf.get(0, 0).unwrap().ch, 'A');
        assert_eq!(buf.get(1, 0).unwrap().ch, 'B');
        assert_eq!(buf.get(2, 0).unwrap().ch, 'C');
    }

    #[test]
    fn draw_text_span_clipped_at_max_x() {
        let mut buf = Buffer::new(10, 1);
        let end_x = draw_text_span(&mut buf, 0, 0, "ABCDEF", Style::default(), 3);

        assert_eq!(end_x, 3);
        assert_eq!(buf.get(2, 0).unwrap().ch, 'C');
        assert!(buf.get(3, 0).unwrap().is_blank());
    }

    #[test]
    fn draw_text_span_applies_style() {
        let mut buf = Buffer::new(5, 1);
        let style = Style::new().fg(Color::rgb(255, 128, 0));
        draw_text_span(&mut buf, 0, 0, "A", style, 5);

        assert_eq!(buf.get(0, 0).unwrap().fg, Some(Color::rgb(255, 128, 0)));
    }

    #[test]
    fn draw_text_span_wide_glyph_leaves_continuation() {
        let mut buf = Buffer::new(5, 1);
        let end_x = draw_text_span(&mut buf, 0, 0, "你a", Style::default(), 5);

        assert_eq!(end_x, 3);
        assert_eq!(buf.get(0, 0).unwrap().ch, '你');
        assert!(buf.get(1, 0).unwrap().continuation);
        assert_eq!(buf.get(2, 0).unwrap().ch, 'a');
    }

    #[test]
    fn draw_text_span_rtl_right_aligns() {
        let mut buf = Buffer::new(10, 1);
        let start = draw_text_span_rtl(&mut buf, 0, 0, "AB", Style::default(), 10);

        assert_eq!(start, 8);
        assert_eq!(buf.get(8, 0).unwrap().ch, 'A');
        assert_eq!(buf.get(9, 0).unwrap().ch, 'B');
    }

    #[test]
    fn draw_text_span_rtl_truncates_from_left_edge() {
        let mut buf = Buffer::new(4, 1);
        let start = draw_text_span_rtl(&mut buf, 0, 0, "ABCDEF", Style::default(), 4);

        assert_eq!(start, 0);
        assert_eq!(buf.get(0, 0).unwrap().ch, 'A');
        assert_eq!(buf.get(3, 0).unwrap().ch, 'D');
    }
}
