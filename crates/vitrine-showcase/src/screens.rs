#![forbid(unsafe_code)]

//! Screen registry: one showroom page per accordion configuration.

use vitrine_widgets::accordion::{AccordionItem, AccordionMode, AccordionState};

/// The showroom pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenId {
    /// Simple mode demo.
    Simple,
    /// Compact mode demo.
    Compact,
    /// Divided mode demo.
    Divided,
    /// Exclusive (one-open) demo in simple mode.
    Exclusive,
}

impl ScreenId {
    /// All screens, in sidebar order.
    pub const ALL: &'static [ScreenId] = &[
        ScreenId::Simple,
        ScreenId::Compact,
        ScreenId::Divided,
        ScreenId::Exclusive,
    ];

    /// Sidebar label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            ScreenId::Simple => "Simple",
            ScreenId::Compact => "Compact",
            ScreenId::Divided => "Divided",
            ScreenId::Exclusive => "Exclusive",
        }
    }

    /// Headline shown above the accordion.
    #[must_use]
    pub const fn headline(self) -> &'static str {
        match self {
            ScreenId::Simple => "Accordion — simple mode",
            ScreenId::Compact => "Accordion — compact mode",
            ScreenId::Divided => "Accordion — divided mode",
            ScreenId::Exclusive => "Accordion — exclusive group",
        }
    }

    /// Accordion mode this screen demonstrates.
    #[must_use]
    pub const fn mode(self) -> AccordionMode {
        match self {
            ScreenId::Simple | ScreenId::Exclusive => AccordionMode::Simple,
            ScreenId::Compact => AccordionMode::Compact,
            ScreenId::Divided => AccordionMode::Divided,
        }
    }

    /// Whether the screen's accordion is exclusive.
    #[must_use]
    pub const fn exclusive(self) -> bool {
        matches!(self, ScreenId::Exclusive)
    }

    /// Number-key hotkey (1-indexed).
    #[must_use]
    pub const fn hotkey(self) -> char {
        match self {
            ScreenId::Simple => '1',
            ScreenId::Compact => '2',
            ScreenId::Divided => '3',
            ScreenId::Exclusive => '4',
        }
    }
}

/// One mounted screen: its items, open state, and focus cursor.
#[derive(Debug)]
pub struct Screen {
    /// Which page this is.
    pub id: ScreenId,
    /// The demo item sequence.
    pub items: Vec<AccordionItem>,
    /// Accordion open/closed state.
    pub state: AccordionState,
    /// Index of the focused header.
    pub focused: usize,
}

impl Screen {
    /// Mount a screen with its demo content.
    #[must_use]
    pub fn mount(id: ScreenId) -> Self {
        let items = demo_items(id);
        let state = AccordionState::from_items(&items).with_exclusive(id.exclusive());
        Self {
            id,
            items,
            state,
            focused: 0,
        }
    }
}

fn demo_items(id: ScreenId) -> Vec<AccordionItem> {
    match id {
        ScreenId::Exclusive => vec![
            AccordionItem::new("Billing", "Invoices are issued on the first of each month."),
            AccordionItem::new("Shipping", "Orders leave the warehouse within two days.")
                .with_icon_class("info"),
            AccordionItem::new("Returns", "Thirty day return window, no questions asked."),
        ],
        _ => vec![
            AccordionItem::new(
                "What is vitrine?",
                "A terminal showroom for reusable widgets.",
            )
            .with_icon_class("question"),
            AccordionItem::new(
                "How do modes work?",
                "Each mode is a visual density preset.\nOpen state is unaffected by the mode.",
            )
            .expanded_by_default(true),
            AccordionItem::new("Is there keyboard support?", "Arrows, Home, End, Enter, Space.")
                .with_icon_glyph('\u{2328}'),
        ],
    }
}
