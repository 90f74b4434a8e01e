#![forbid(unsafe_code)]

//! Text style: optional foreground/background colors plus attribute flags.
//!
//! A `Style` leaves unset fields as `None` so styles can be layered:
//! applying a style to a cell only overwrites the parts it specifies.

use crate::color::Color;
use bitflags::bitflags;

bitflags! {
    /// Text attribute flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct StyleFlags: u8 {
        /// Bold text.
        const BOLD      = 0b0000_0001;
        /// Dim/faint text.
        const DIM       = 0b0000_0010;
        /// Italic text.
        const ITALIC    = 0b0000_0100;
        /// Underlined text.
        const UNDERLINE = 0b0000_1000;
        /// Reversed foreground/background.
        const REVERSE   = 0b0001_0000;
    }
}

/// A composable text style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    /// Foreground color, if set.
    pub fg: Option<Color>,
    /// Background color, if set.
    pub bg: Option<Color>,
    /// Attribute flags, if set.
    pub attrs: Option<StyleFlags>,
}

impl Style {
    /// Create an empty style.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            attrs: None,
        }
    }

    /// Set the foreground color.
    #[must_use]
    pub const fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    /// Set the background color.
    #[must_use]
    pub const fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    /// Add bold.
    #[must_use]
    pub fn bold(self) -> Self {
        self.with_flag(StyleFlags::BOLD)
    }

    /// Add dim.
    #[must_use]
    pub fn dim(self) -> Self {
        self.with_flag(StyleFlags::DIM)
    }

    /// Add underline.
    #[must_use]
    pub fn underline(self) -> Self {
        self.with_flag(StyleFlags::UNDERLINE)
    }

    /// Add reverse video.
    #[must_use]
    pub fn reverse(self) -> Self {
        self.with_flag(StyleFlags::REVERSE)
    }

    fn with_flag(mut self, flag: StyleFlags) -> Self {
        self.attrs = Some(self.attrs.unwrap_or(StyleFlags::empty()) | flag);
        self
    }

    /// True when the style specifies nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.attrs.is_none()
    }

    /// Layer `other` over `self`; `other`'s set fields win.
    #[must_use]
    pub fn patch(mut self, other: Style) -> Self {
        if other.fg.is_some() {
            self.fg = other.fg;
        }
        if other.bg.is_some() {
            self.bg = other.bg;
        }
        if let Some(attrs) = other.attrs {
            self.attrs = Some(self.attrs.unwrap_or(StyleFlags::empty()) | attrs);
        }
        self
    }
}
