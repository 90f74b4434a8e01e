#![forbid(unsafe_code)]

//! Core input and geometry types for vitrine.
//!
//! This crate is the dependency root of the workspace: canonical event
//! types (keyboard, mouse, resize, focus) plus the geometric primitives
//! widgets render into.

pub mod event;
pub mod geometry;

pub use event::{Event, KeyCode, KeyEvent, KeyEventKind, Modifiers, MouseButton, MouseEvent};
pub use geometry::{Rect, Sides};
