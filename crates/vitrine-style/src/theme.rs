#![forbid(unsafe_code)]

//! Adaptive colors and the semantic palette.
//!
//! An [`AdaptiveColor`] carries a light and a dark variant and resolves
//! against the caller's dark-mode flag. The [`Palette`] groups the
//! semantic slots the showcase chrome and widgets draw from, so flipping
//! dark mode is a single boolean at the call site.
//!
//! # Example
//! ```
//! use vitrine_style::{AdaptiveColor, Color, Palette};
//!
//! let palette = Palette::default();
//! let light_text = palette.text.resolve(false);
//! let dark_text = palette.text.resolve(true);
//! assert_ne!(light_text, dark_text);
//! ```

use crate::color::Color;

/// A color that can change based on light/dark mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdaptiveColor {
    /// A fixed color that ignores the mode.
    Fixed(Color),
    /// A color with light and dark variants.
    Adaptive {
        /// Color used in light mode.
        light: Color,
        /// Color used in dark mode.
        dark: Color,
    },
}

impl AdaptiveColor {
    /// Create a fixed color.
    #[inline]
    pub const fn fixed(color: Color) -> Self {
        Self::Fixed(color)
    }

    /// Create an adaptive color with light/dark variants.
    #[inline]
    pub const fn adaptive(light: Color, dark: Color) -> Self {
        Self::Adaptive { light, dark }
    }

    /// Resolve the color for the given mode.
    #[inline]
    pub const fn resolve(&self, is_dark: bool) -> Color {
        match self {
            Self::Fixed(c) => *c,
            Self::Adaptive { light, dark } => {
                if is_dark {
                    *dark
                } else {
                    *light
                }
            }
        }
    }
}

/// Semantic color slots shared by the showcase and its widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Primary text.
    pub text: AdaptiveColor,
    /// Secondary/muted text.
    pub muted: AdaptiveColor,
    /// Page background.
    pub background: AdaptiveColor,
    /// Raised surface background (headers, sidebar).
    pub surface: AdaptiveColor,
    /// Border and divider lines.
    pub border: AdaptiveColor,
    /// Accent for the focused/active element.
    pub accent: AdaptiveColor,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            text: AdaptiveColor::adaptive(Color::rgb(17, 24, 39), Color::rgb(243, 244, 246)),
            muted: AdaptiveColor::adaptive(Color::rgb(107, 114, 128), Color::rgb(156, 163, 175)),
            background: AdaptiveColor::adaptive(
                Color::rgb(249, 250, 251),
                Color::rgb(17, 24, 39),
            ),
            surface: AdaptiveColor::adaptive(Color::rgb(255, 255, 255), Color::rgb(31, 41, 55)),
            border: AdaptiveColor::adaptive(Color::rgb(229, 231, 235), Color::rgb(55, 65, 81)),
            accent: AdaptiveColor::adaptive(Color::rgb(37, 99, 235), Color::rgb(96, 165, 250)),
        }
    }
}
