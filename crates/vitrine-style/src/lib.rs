#![forbid(unsafe_code)]

//! Styling primitives for vitrine: colors, text styles, and the
//! light/dark-adaptive theme palette.

pub mod color;
pub mod style;
pub mod theme;

pub use color::Color;
pub use style::{Style, StyleFlags};
pub use theme::{AdaptiveColor, Palette};
