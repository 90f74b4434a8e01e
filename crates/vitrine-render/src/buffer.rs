#![forbid(unsafe_code)]

//! A row-major grid of cells widgets render into.
//!
//! All access is bounds-checked; out-of-range coordinates are silent
//! no-ops so a misbehaving widget cannot corrupt neighboring rows.

use crate::cell::Cell;
use vitrine_core::Rect;
use vitrine_style::Style;

/// A rectangular cell grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    /// Create a buffer of blank cells.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width as usize * height as usize],
        }
    }

    /// Buffer width in columns.
    #[must_use]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Buffer height in rows.
    #[must_use]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// The full buffer area as a [`Rect`].
    #[must_use]
    pub const fn area(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Get a cell, or `None` when out of bounds.
    #[must_use]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// Get a mutable cell, or `None` when out of bounds.
    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        self.index(x, y).map(move |i| &mut self.cells[i])
    }

    /// Write a cell; silent no-op when out of bounds.
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = cell;
        }
    }

    /// Apply a style over an area, preserving cell content.
    pub fn set_style(&mut self, area: Rect, style: Style) {
        if style.is_empty() {
            return;
        }
        for y in area.y..area.bottom().min(self.height) {
            for x in area.x..area.right().min(self.width) {
                if let Some(cell) = self.get_mut(x, y) {
                    cell.apply_style(style);
                }
            }
        }
    }

    /// Fill an area with a cell.
    pub fn fill(&mut self, area: Rect, cell: Cell) {
        for y in area.y..area.bottom().min(self.height) {
            for x in area.x..area.right().min(self.width) {
                self.set(x, y, cell);
            }
        }
    }

    /// Reset every cell to blank.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    /// All cells of row `y`, or an empty slice when out of range.
    #[must_use]
    pub fn row(&self, y: u16) -> &[Cell] {
        if y < self.height {
            let start = y as usize * self.width as usize;
            &self.cells[start..start + self.width as usize]
        } else {
            &[]
        }
    }

    /// Resize the buffer, discarding previous content.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.cells.clear();
        self.cells
            .resize(width as usize * height as usize, Cell::default());
    }
}
