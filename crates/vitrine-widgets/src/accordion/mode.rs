#![forbid(unsafe_code)]

//! Display modes and their resolved style intent.
//!
//! Mode is a visual-density choice, independent of open/closed state.
//! [`StyleIntent::resolve`] is a pure `const fn`: equal input always
//! yields the identical intent, so callers may memoize freely.

use vitrine_core::Sides;

/// Visual mode of an accordion. Closed enumeration; every consumption
/// site matches exhaustively and the unrecognized-input fallback is
/// `Simple` (covered here by `Default`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AccordionMode {
    /// Spaced list of bordered headers.
    #[default]
    Simple,
    /// Tight spacing, dense headers.
    Compact,
    /// Flush list with divider lines between items, no header borders.
    Divided,
}

impl AccordionMode {
    /// All modes, in display order.
    pub const ALL: &'static [AccordionMode] = &[
        AccordionMode::Simple,
        AccordionMode::Compact,
        AccordionMode::Divided,
    ];

    /// Human-readable name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            AccordionMode::Simple => "simple",
            AccordionMode::Compact => "compact",
            AccordionMode::Divided => "divided",
        }
    }
}

/// Resolved per-mode layout intent for the three accordion regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleIntent {
    /// Blank rows between items.
    pub container_spacing: u16,
    /// Whether a divider rule separates adjacent items.
    pub container_dividers: bool,
    /// Whether the list renders flush to the container edge instead of
    /// inset by one column (the divided mode's outward margin).
    pub flush_margins: bool,
    /// Whether each header gets a box border.
    pub header_border: bool,
    /// Whether header text renders in the dense (dim) affordance.
    pub header_dense: bool,
    /// Padding inside the header region.
    pub header_padding: Sides,
    /// Padding around the body region.
    pub body_padding: Sides,
}

impl StyleIntent {
    /// Resolve the intent for a mode.
    #[must_use]
    pub const fn resolve(mode: AccordionMode) -> Self {
        match mode {
            AccordionMode::Simple => Self {
                container_spacing: 1,
                container_dividers: false,
                flush_margins: false,
                header_border: true,
                header_dense: false,
                header_padding: Sides::horizontal(2),
                body_padding: Sides::new(1, 2, 1, 2),
            },
            AccordionMode::Compact => Self {
                container_spacing: 0,
                container_dividers: false,
                flush_margins: false,
                header_border: false,
                header_dense: true,
                header_padding: Sides::horizontal(1),
                body_padding: Sides::all(1),
            },
            AccordionMode::Divided => Self {
                container_spacing: 0,
                container_dividers: true,
                flush_margins: true,
                header_border: false,
                header_dense: false,
                header_padding: Sides::horizontal(2),
                body_padding: Sides::vertical(1),
            },
        }
    }

    /// Header height in rows, including any border.
    #[must_use]
    pub const fn header_height(&self) -> u16 {
        if self.header_border { 3 } else { 1 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_mode_is_simple() {
        assert_eq!(AccordionMode::default(), AccordionMode::Simple);
    }

    #[test]
    fn resolve_is_referentially_stable() {
        assert_eq!(
            StyleIntent::resolve(AccordionMode::Compact),
            StyleIntent::resolve(AccordionMode::Compact)
        );
    }

    #[test]
    fn simple_is_spaced_and_bordered() {
        let intent = StyleIntent::resolve(AccordionMode::Simple);
        assert_eq!(intent.container_spacing, 1);
        assert!(intent.header_border);
        assert!(!intent.container_dividers);
        assert_eq!(intent.header_height(), 3);
    }

    #[test]
    fn compact_header_padding_smaller_than_simple() {
        let simple = StyleIntent::resolve(AccordionMode::Simple);
        let compact = StyleIntent::resolve(AccordionMode::Compact);
        assert!(
            compact.header_padding.horizontal_sum() < simple.header_padding.horizontal_sum()
        );
        assert!(compact.header_dense);
        assert_eq!(compact.container_spacing, 0);
    }

    #[test]
    fn divided_has_dividers_and_no_header_border() {
        let intent = StyleIntent::resolve(AccordionMode::Divided);
        assert!(intent.container_dividers);
        assert!(!intent.header_border);
        assert!(intent.flush_margins);
        assert_eq!(intent.container_spacing, 0);
        assert_eq!(intent.header_height(), 1);
    }

    #[test]
    fn divided_body_padding_is_vertical_only() {
        let intent = StyleIntent::resolve(AccordionMode::Divided);
        assert_eq!(intent.body_padding.horizontal_sum(), 0);
        assert!(intent.body_padding.vertical_sum() > 0);
    }
}
