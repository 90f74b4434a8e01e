#![forbid(unsafe_code)]

//! The accordion renderer.

use crate::accordion::item::AccordionItem;
use crate::accordion::mode::{AccordionMode, StyleIntent};
use crate::accordion::state::AccordionState;
use crate::{Direction, StatefulWidget, draw_text_span, draw_text_span_rtl};
use vitrine_core::geometry::{Rect, Sides};
use vitrine_render::{Buffer, Cell};
use vitrine_style::Style;

const MARKER_OPEN: char = '\u{25BE}'; // ▾
const MARKER_CLOSED_LTR: char = '\u{25B8}'; // ▸
const MARKER_CLOSED_RTL: char = '\u{25C2}'; // ◂

/// An accordion over a borrowed item sequence.
///
/// The widget reads items, never mutates them; open/closed state lives
/// in [`AccordionState`]. All layout comes from the mode's resolved
/// [`StyleIntent`] and is independent of which items are open — opening
/// an item adds its body rows but never restyles headers.
#[derive(Debug, Clone)]
pub struct Accordion<'a> {
    items: &'a [AccordionItem],
    mode: AccordionMode,
    focused: Option<usize>,
    direction: Direction,
    header_style: Style,
    body_style: Style,
    focus_style: Style,
    border_style: Style,
}

impl<'a> Accordion<'a> {
    /// Create an accordion over an item sequence.
    #[must_use]
    pub fn new(items: &'a [AccordionItem]) -> Self {
        Self {
            items,
            mode: AccordionMode::default(),
            focused: None,
            direction: Direction::default(),
            header_style: Style::new(),
            body_style: Style::new(),
            focus_style: Style::new().reverse(),
            border_style: Style::new(),
        }
    }

    /// Set the display mode.
    #[must_use]
    pub fn mode(mut self, mode: AccordionMode) -> Self {
        self.mode = mode;
        self
    }

    /// Highlight the header at this index as focused.
    #[must_use]
    pub fn focused(mut self, focused: Option<usize>) -> Self {
        self.focused = focused;
        self
    }

    /// Set the layout direction.
    #[must_use]
    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Style for header text.
    #[must_use]
    pub fn header_style(mut self, style: Style) -> Self {
        self.header_style = style;
        self
    }

    /// Style for body text.
    #[must_use]
    pub fn body_style(mut self, style: Style) -> Self {
        self.body_style = style;
        self
    }

    /// Style layered onto the focused header row.
    #[must_use]
    pub fn focus_style(mut self, style: Style) -> Self {
        self.focus_style = style;
        self
    }

    /// Style for header borders and divider rules.
    #[must_use]
    pub fn border_style(mut self, style: Style) -> Self {
        self.border_style = style;
        self
    }

    /// Total height in rows for the current state at the given width.
    #[must_use]
    pub fn content_height(&self, state: &AccordionState) -> u16 {
        // Width does not affect height (no wrapping); a generous probe
        // area lets layout() run unclipped.
        let probe = Rect::from_size(u16::MAX, u16::MAX);
        self.layout(probe, state)
            .last()
            .map(|slot| slot.bottom_y)
            .unwrap_or(0)
    }

    /// The item whose header contains the given buffer position, if any.
    ///
    /// Recomputes the same layout `render` uses, so hosts can route
    /// mouse clicks to [`AccordionState::toggle`].
    #[must_use]
    pub fn header_at(
        &self,
        area: Rect,
        state: &AccordionState,
        x: u16,
        y: u16,
    ) -> Option<usize> {
        self.layout(area, state)
            .iter()
            .enumerate()
            .find(|(_, slot)| slot.header.contains(x, y))
            .map(|(i, _)| i)
    }

    fn layout(&self, area: Rect, state: &AccordionState) -> Vec<ItemSlot> {
        let intent = StyleIntent::resolve(self.mode);
        let content = if intent.flush_margins {
            area
        } else {
            area.inner(Sides::horizontal(1))
        };

        let mut slots = Vec::with_capacity(self.items.len());
        let mut y = area.y;
        for (i, item) in self.items.iter().enumerate() {
            if y >= area.bottom() {
                break;
            }
            let header = Rect::new(content.x, y, content.width, intent.header_height());
            y = y.saturating_add(intent.header_height());

            let body = if state.is_open(i) {
                let lines = item.body_lines().count() as u16;
                let height = lines.saturating_add(intent.body_padding.vertical_sum());
                let rect = Rect::new(content.x, y, content.width, height);
                y = y.saturating_add(height);
                Some(rect)
            } else {
                None
            };

            let divider = if intent.container_dividers && i + 1 < self.items.len() {
                let row = y;
                y = y.saturating_add(1);
                Some(row)
            } else {
                None
            };
            if divider.is_none() && i + 1 < self.items.len() {
                y = y.saturating_add(intent.container_spacing);
            }

            slots.push(ItemSlot {
                header,
                body,
                divider,
                bottom_y: y,
            });
        }
        slots
    }

    fn render_header(
        &self,
        buf: &mut Buffer,
        area: Rect,
        slot: &ItemSlot,
        item: &AccordionItem,
        index: usize,
        open: bool,
        intent: &StyleIntent,
    ) {
        let header = slot.header;
        let text_row = if intent.header_border {
            self.render_header_border(buf, area, header);
            header.y + 1
        } else {
            header.y
        };
        if text_row >= area.bottom() {
            return;
        }

        let mut style = self.header_style;
        if intent.header_dense {
            style = style.dim();
        }

        let border_inset: u16 = if intent.header_border { 1 } else { 0 };
        let min_x = header.x + border_inset + intent.header_padding.left;
        let max_x = header
            .right()
            .saturating_sub(border_inset + intent.header_padding.right)
            .min(area.right());

        let marker = if open {
            MARKER_OPEN
        } else if self.direction.is_rtl() {
            MARKER_CLOSED_RTL
        } else {
            MARKER_CLOSED_LTR
        };

        let mut label = String::new();
        if let Some(icon) = item.icon() {
            label.push(icon);
            label.push(' ');
        }
        label.push_str(item.title());

        if self.direction.is_rtl() {
            // Marker sits at the right edge, label right-aligned beside it.
            let marker_x = max_x.saturating_sub(1);
            draw_text_span(buf, marker_x, text_row, &marker.to_string(), style, max_x);
            draw_text_span_rtl(buf, min_x, text_row, &label, style, marker_x.saturating_sub(1));
        } else {
            let mut x = draw_text_span(buf, min_x, text_row, &marker.to_string(), style, max_x);
            x = x.saturating_add(1);
            draw_text_span(buf, x, text_row, &label, style, max_x);
        }

        if self.focused == Some(index) {
            let row = Rect::new(
                header.x + border_inset,
                text_row,
                header.width.saturating_sub(border_inset * 2),
                1,
            );
            buf.set_style(row, self.focus_style);
        }
    }

    fn render_header_border(&self, buf: &mut Buffer, area: Rect, header: Rect) {
        if header.width < 2 || header.height < 3 {
            return;
        }
        let (top, mid, bottom) = (header.y, header.y + 1, header.y + 2);
        let right = header.right().min(area.right()).saturating_sub(1);
        let mut put = |x: u16, y: u16, ch: char| {
            if y < area.bottom() {
                let mut cell = Cell::from_char(ch);
                cell.apply_style(self.border_style);
                buf.set(x, y, cell);
            }
        };
        for x in header.x + 1..right {
            put(x, top, '\u{2500}');
            put(x, bottom, '\u{2500}');
        }
        put(header.x, top, '\u{250C}');
        put(right, top, '\u{2510}');
        put(header.x, mid, '\u{2502}');
        put(right, mid, '\u{2502}');
        put(header.x, bottom, '\u{2514}');
        put(right, bottom, '\u{2518}');
    }

    fn render_body(
        &self,
        buf: &mut Buffer,
        area: Rect,
        body: Rect,
        item: &AccordionItem,
        intent: &StyleIntent,
    ) {
        let inner = body.inner(intent.body_padding);
        let mut y = inner.y;
        for line in item.body_lines() {
            if y >= inner.bottom() || y >= area.bottom() {
                break;
            }
            if self.direction.is_rtl() {
                draw_text_span_rtl(buf, inner.x, y, line, self.body_style, inner.right());
            } else {
                draw_text_span(buf, inner.x, y, line, self.body_style, inner.right());
            }
            y += 1;
        }
    }

    fn render_divider(&self, buf: &mut Buffer, area: Rect, row: u16) {
        if row >= area.bottom() {
            return;
        }
        for x in area.x..area.right() {
            let mut cell = Cell::from_char('\u{2500}');
            cell.apply_style(self.border_style);
            buf.set(x, row, cell);
        }
    }
}

impl StatefulWidget for Accordion<'_> {
    type State = AccordionState;

    fn render(&self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        if area.is_empty() || self.items.is_empty() {
            return;
        }
        // State created against a different item sequence is re-seeded
        // here, so callers that swap items don't have to remember to.
        if state.len() != self.items.len() {
            state.reset_from(self.items);
        }

        let intent = StyleIntent::resolve(self.mode);
        let slots = self.layout(area, state);
        for (i, slot) in slots.iter().enumerate() {
            let item = &self.items[i];
            self.render_header(buf, area, slot, item, i, state.is_open(i), &intent);
            if let Some(body) = slot.body {
                self.render_body(buf, area, body, item, &intent);
            }
            if let Some(row) = slot.divider {
                self.render_divider(buf, area, row);
            }
        }
    }
}

/// Computed placement for one item.
#[derive(Debug, Clone, Copy)]
struct ItemSlot {
    header: Rect,
    body: Option<Rect>,
    divider: Option<u16>,
    bottom_y: u16,
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_style::StyleFlags;

    fn buf_to_lines(buf: &Buffer) -> Vec<String> {
        (0..buf.height())
            .map(|y| buf.row(y).iter().map(|c| c.ch).collect::<String>())
            .collect()
    }

    fn sample_items() -> Vec<AccordionItem> {
        vec![
            AccordionItem::new("First", "body one"),
            AccordionItem::new("Second", "body two").expanded_by_default(true),
            AccordionItem::new("Third", "body three"),
        ]
    }

    #[test]
    fn renders_one_header_per_item() {
        let items = sample_items();
        let mut state = AccordionState::from_items(&items);
        let mut buf = Buffer::new(30, 20);
        Accordion::new(&items)
            .mode(AccordionMode::Divided)
            .render(buf.area(), &mut buf, &mut state);

        let lines = buf_to_lines(&buf);
        let headers = lines.iter().filter(|l| {
            l.contains(MARKER_CLOSED_LTR) || l.contains(MARKER_OPEN)
        });
        assert_eq!(headers.count(), items.len());
    }

    #[test]
    fn default_open_item_shows_body() {
        let items = sample_items();
        let mut state = AccordionState::from_items(&items);
        let mut buf = Buffer::new(30, 24);
        Accordion::new(&items).render(buf.area(), &mut buf, &mut state);

        let text = buf_to_lines(&buf).join("\n");
        assert!(text.contains("body two"));
        assert!(!text.contains("body one"));
        assert!(!text.contains("body three"));
    }

    #[test]
    fn simple_mode_draws_header_boxes() {
        let items = sample_items();
        let mut state = AccordionState::from_items(&items);
        let mut buf = Buffer::new(30, 24);
        Accordion::new(&items)
            .mode(AccordionMode::Simple)
            .render(buf.area(), &mut buf, &mut state);

        let text = buf_to_lines(&buf).join("\n");
        assert!(text.contains('\u{250C}'));
        assert!(text.contains('\u{2518}'));
    }

    #[test]
    fn divided_mode_draws_rules_not_boxes() {
        let items = sample_items();
        let mut state = AccordionState::from_items(&items);
        let mut buf = Buffer::new(30, 24);
        Accordion::new(&items)
            .mode(AccordionMode::Divided)
            .render(buf.area(), &mut buf, &mut state);

        let lines = buf_to_lines(&buf);
        let rules = lines
            .iter()
            .filter(|l| l.chars().all(|c| c == '\u{2500}'))
            .count();
        assert_eq!(rules, items.len() - 1);
        assert!(!lines.join("").contains('\u{250C}'));
    }

    #[test]
    fn compact_headers_are_dim() {
        let items = sample_items();
        let mut state = AccordionState::from_items(&items);
        let mut buf = Buffer::new(30, 10);
        Accordion::new(&items)
            .mode(AccordionMode::Compact)
            .render(buf.area(), &mut buf, &mut state);

        // First header row starts at y=0 in compact mode (no border).
        let marker_cell = buf
            .row(0)
            .iter()
            .find(|c| c.ch == MARKER_CLOSED_LTR)
            .expect("marker rendered");
        assert!(marker_cell.attrs.contains(StyleFlags::DIM));
    }

    #[test]
    fn focused_header_gets_focus_style() {
        let items = sample_items();
        let mut state = AccordionState::from_items(&items);
        let mut buf = Buffer::new(30, 10);
        Accordion::new(&items)
            .mode(AccordionMode::Compact)
            .focused(Some(0))
            .render(buf.area(), &mut buf, &mut state);

        let styled = buf
            .row(0)
            .iter()
            .any(|c| c.attrs.contains(StyleFlags::REVERSE));
        assert!(styled);
    }

    #[test]
    fn rtl_places_marker_at_right_edge() {
        let items = vec![AccordionItem::new("T", "b")];
        let mut state = AccordionState::from_items(&items);
        let mut buf = Buffer::new(20, 3);
        Accordion::new(&items)
            .mode(AccordionMode::Divided)
            .direction(Direction::Rtl)
            .render(buf.area(), &mut buf, &mut state);

        let line = buf_to_lines(&buf).remove(0);
        let marker_pos = line.find(MARKER_CLOSED_RTL).expect("marker rendered");
        let title_pos = line.find('T').expect("title rendered");
        assert!(marker_pos > title_pos);
    }

    #[test]
    fn header_at_maps_positions_to_indices() {
        let items = sample_items();
        let mut state = AccordionState::from_items(&items);
        state.close(1);
        let widget = Accordion::new(&items).mode(AccordionMode::Compact);
        let area = Rect::from_size(30, 10);

        // Compact: no borders, no spacing; headers stack at y = 0, 1, 2.
        assert_eq!(widget.header_at(area, &state, 2, 0), Some(0));
        assert_eq!(widget.header_at(area, &state, 2, 1), Some(1));
        assert_eq!(widget.header_at(area, &state, 2, 2), Some(2));
        assert_eq!(widget.header_at(area, &state, 2, 3), None);
    }

    #[test]
    fn render_reseeds_state_when_item_count_changed() {
        let items = sample_items();
        let mut state = AccordionState::from_items(&items[..1]);
        let mut buf = Buffer::new(30, 24);
        Accordion::new(&items).render(buf.area(), &mut buf, &mut state);
        assert_eq!(state.len(), 3);
        assert!(state.is_open(1));
    }

    #[test]
    fn empty_area_renders_nothing() {
        let items = sample_items();
        let mut state = AccordionState::from_items(&items);
        let mut buf = Buffer::new(10, 5);
        Accordion::new(&items).render(Rect::default(), &mut buf, &mut state);
        assert!(buf.row(0).iter().all(|c| c.is_blank()));
    }

    #[test]
    fn content_height_grows_when_item_opens() {
        let items = sample_items();
        let mut state = AccordionState::from_items(&items);
        let widget = Accordion::new(&items).mode(AccordionMode::Simple);
        let closed_all = {
            let mut s = state.clone();
            s.close(1);
            widget.content_height(&s)
        };
        let h = widget.content_height(&state);
        assert!(h > closed_all);
        state.open(0);
        assert!(widget.content_height(&state) > h);
    }
}
