#![forbid(unsafe_code)]

//! Geometric primitives.

/// A rectangle in terminal coordinates (0-indexed, origin top-left).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    /// Left edge (inclusive).
    pub x: u16,
    /// Top edge (inclusive).
    pub y: u16,
    /// Width in cells.
    pub width: u16,
    /// Height in cells.
    pub height: u16,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle at the origin with the given size.
    #[inline]
    pub const fn from_size(width: u16, height: u16) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    /// Check if the rectangle has zero area.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    pub const fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Shrink the rectangle inward by the given margin on each side.
    pub fn inner(&self, margin: Sides) -> Rect {
        Rect {
            x: self.x.saturating_add(margin.left),
            y: self.y.saturating_add(margin.top),
            width: self
                .width
                .saturating_sub(margin.left)
                .saturating_sub(margin.right),
            height: self
                .height
                .saturating_sub(margin.top)
                .saturating_sub(margin.bottom),
        }
    }

    /// Split off the leftmost `width` columns, returning `(left, rest)`.
    pub fn split_left(&self, width: u16) -> (Rect, Rect) {
        let w = width.min(self.width);
        (
            Rect::new(self.x, self.y, w, self.height),
            Rect::new(self.x + w, self.y, self.width - w, self.height),
        )
    }

    /// Split off the bottom `height` rows, returning `(top, bottom)`.
    pub fn split_bottom(&self, height: u16) -> (Rect, Rect) {
        let h = height.min(self.height);
        (
            Rect::new(self.x, self.y, self.width, self.height - h),
            Rect::new(self.x, self.y + self.height - h, self.width, h),
        )
    }
}

/// Per-side spacing for padding and margins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sides {
    /// Top spacing in rows.
    pub top: u16,
    /// Right spacing in columns.
    pub right: u16,
    /// Bottom spacing in rows.
    pub bottom: u16,
    /// Left spacing in columns.
    pub left: u16,
}

impl Sides {
    /// Equal spacing on all four sides.
    #[inline]
    pub const fn all(val: u16) -> Self {
        Self::new(val, val, val, val)
    }

    /// Spacing on left and right only.
    #[inline]
    pub const fn horizontal(val: u16) -> Self {
        Self::new(0, val, 0, val)
    }

    /// Spacing on top and bottom only.
    #[inline]
    pub const fn vertical(val: u16) -> Self {
        Self::new(val, 0, val, 0)
    }

    /// Explicit per-side spacing (top, right, bottom, left).
    #[inline]
    pub const fn new(top: u16, right: u16, bottom: u16, left: u16) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Combined left + right spacing.
    #[inline]
    pub const fn horizontal_sum(&self) -> u16 {
        self.left.saturating_add(self.right)
    }

    /// Combined top + bottom spacing.
    #[inline]
    pub const fn vertical_sum(&self) -> u16 {
        self.top.saturating_add(self.bottom)
    }
}
