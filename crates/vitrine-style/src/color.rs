#![forbid(unsafe_code)]

//! Color type and luminance helpers.

/// An opaque 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    /// Red channel (0-255).
    pub r: u8,
    /// Green channel (0-255).
    pub g: u8,
    /// Blue channel (0-255).
    pub b: u8,
}

impl Color {
    /// Create a color from RGB channels.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Compute perceived luminance (BT.709) as a `u8` (0 = black, 255 = white).
    #[must_use]
    pub fn luminance_u8(self) -> u8 {
        // ITU-R BT.709 luma: 0.2126 R + 0.7152 G + 0.0722 B
        let luma = 2126 * self.r as u32 + 7152 * self.g as u32 + 722 * self.b as u32;
        ((luma + 5000) / 10_000) as u8
    }

    /// True when text drawn over this color should be dark.
    #[must_use]
    pub fn is_light(self) -> bool {
        self.luminance_u8() >= 128
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn luminance_extremes() {
        assert_eq!(Color::rgb(0, 0, 0).luminance_u8(), 0);
        assert_eq!(Color::rgb(255, 255, 255).luminance_u8(), 255);
    }

    #[test]
    fn green_dominates_luminance() {
        let green = Color::rgb(0, 200, 0).luminance_u8();
        let blue = Color::rgb(0, 0, 200).luminance_u8();
        assert!(green > blue);
    }

    #[test]
    fn light_detection() {
        assert!(Color::rgb(240, 240, 240).is_light());
        assert!(!Color::rgb(20, 20, 30).is_light());
    }
}
