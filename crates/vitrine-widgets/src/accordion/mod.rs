#![forbid(unsafe_code)]

//! Expandable accordion: a list of headers, each toggling a body region.
//!
//! The accordion is split into small, independently testable parts:
//!
//! - [`item`] — passive per-entry data ([`AccordionItem`]).
//! - [`mode`] — the visual mode enumeration and its resolved
//!   [`StyleIntent`] (pure, no state).
//! - [`focus`] — keyboard focus movement across headers (pure).
//! - [`state`] — open/closed state per item, the exclusivity
//!   coordinator, and the key-handling entry point.
//! - [`widget`] — the renderer tying the parts together.
//!
//! # Example
//!
//! ```
//! use vitrine_widgets::accordion::{Accordion, AccordionItem, AccordionMode, AccordionState};
//!
//! let items = vec![
//!     AccordionItem::new("Shipping", "3-5 business days."),
//!     AccordionItem::new("Returns", "30 day window.").expanded_by_default(true),
//! ];
//! let mut state = AccordionState::from_items(&items);
//! assert!(!state.is_open(0));
//! assert!(state.is_open(1));
//!
//! state.toggle(0);
//! assert!(state.is_open(0));
//! ```

pub mod focus;
pub mod item;
pub mod mode;
pub mod state;
pub mod widget;

pub use focus::{NavKey, next_focus_index};
pub use item::AccordionItem;
pub use mode::{AccordionMode, StyleIntent};
pub use state::{AccordionKeyResult, AccordionState, GroupId};
pub use widget::Accordion;
