#![forbid(unsafe_code)]

//! Facade crate: one `use vitrine::...` for the whole workspace.

pub use vitrine_core as core;
pub use vitrine_render as render;
pub use vitrine_style as style;
pub use vitrine_widgets as widgets;

pub use vitrine_core::{Event, KeyCode, KeyEvent, Rect, Sides};
pub use vitrine_render::{Buffer, Cell};
pub use vitrine_style::{AdaptiveColor, Color, Palette, Style};
pub use vitrine_widgets::accordion::{
    Accordion, AccordionItem, AccordionKeyResult, AccordionMode, AccordionState, StyleIntent,
};
pub use vitrine_widgets::sidebar::{Sidebar, SidebarEntry, SidebarState};
pub use vitrine_widgets::{Direction, StatefulWidget, Widget};
