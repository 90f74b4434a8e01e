#![forbid(unsafe_code)]

//! Render target for vitrine widgets: a grid of styled cells.

pub mod buffer;
pub mod cell;

pub use buffer::Buffer;
pub use cell::Cell;
