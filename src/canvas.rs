//! Fixed-size character canvas.
//!
//! A row-major grid of two-state cells. Cells are mutated only through
//! [`Canvas::set_cell`] (directly or via the rasterizers) and [`Canvas::clear`];
//! emission reads rows from the top (`y = height - 1`) down to row 0.

use std::fmt;

use crate::error::{Error, Result};
use crate::geometry::{Bounds, Point, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::output::Marks;

/// State of a single canvas cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    /// Untouched background.
    #[default]
    Background,
    /// Covered by a rasterized primitive.
    Set,
}

impl Cell {
    /// Returns true if the cell has been set.
    #[must_use]
    pub const fn is_set(self) -> bool {
        matches!(self, Self::Set)
    }
}

/// Fixed-size grid of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    /// Width in cells.
    width: i32,
    /// Height in cells.
    height: i32,
    /// Cells in row-major order, row 0 first.
    cells: Vec<Cell>,
}

impl Canvas {
    /// Create a new canvas with every cell set to background.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is not positive.
    ///
    /// # Example
    ///
    /// ```
    /// use shape_canvas::canvas::Canvas;
    ///
    /// let canvas = Canvas::new(120, 50).unwrap();
    /// assert_eq!(canvas.width(), 120);
    /// assert_eq!(canvas.height(), 50);
    /// ```
    pub fn new(width: i32, height: i32) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(Error::InvalidDimensions { width, height });
        }

        let bounds = Bounds::new(width, height);
        Ok(Self { width, height, cells: vec![Cell::Background; bounds.area()] })
    }

    /// Get the width in cells.
    #[must_use]
    pub const fn width(&self) -> i32 {
        self.width
    }

    /// Get the height in cells.
    #[must_use]
    pub const fn height(&self) -> i32 {
        self.height
    }

    /// Get the canvas extent.
    #[must_use]
    pub const fn bounds(&self) -> Bounds {
        Bounds::new(self.width, self.height)
    }

    /// Check if a cell lies on the canvas.
    #[must_use]
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        self.bounds().contains(Point::new(x, y))
    }

    /// Reset every cell to background.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Background);
    }

    /// Mark the cell at `(x, y)` as set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if the cell is outside the canvas. The
    /// canvas is left untouched in that case.
    pub fn set_cell(&mut self, x: i32, y: i32) -> Result<()> {
        let idx = self.cell_index(x, y).ok_or(Error::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        })?;
        self.cells[idx] = Cell::Set;
        Ok(())
    }

    /// Mark a cell given as a point.
    ///
    /// # Errors
    ///
    /// See [`Canvas::set_cell`].
    pub fn put_point(&mut self, p: Point) -> Result<()> {
        self.set_cell(p.x, p.y)
    }

    /// Get the cell at a coordinate.
    ///
    /// Returns `None` if the coordinates are out of bounds.
    #[must_use]
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.cell_index(x, y).map(|idx| self.cells[idx])
    }

    /// Returns true if the cell at `(x, y)` is on the canvas and set.
    #[must_use]
    pub fn is_set(&self, x: i32, y: i32) -> bool {
        self.get(x, y).is_some_and(Cell::is_set)
    }

    /// Get a row of cells, left to right.
    #[must_use]
    pub fn row(&self, y: i32) -> Option<&[Cell]> {
        if y < 0 || y >= self.height {
            return None;
        }
        let start = (y as usize) * (self.width as usize);
        Some(&self.cells[start..start + self.width as usize])
    }

    /// Iterate rows in emission order: topmost row first.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks_exact(self.width as usize).rev()
    }

    /// Number of set cells.
    #[must_use]
    pub fn set_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_set()).count()
    }

    /// Coordinates of every set cell, row 0 first.
    #[must_use]
    pub fn set_points(&self) -> Vec<Point> {
        let width = self.width as usize;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_set())
            .map(|(i, _)| Point::new((i % width) as i32, (i / width) as i32))
            .collect()
    }

    /// Calculate the cell index for a coordinate.
    #[inline]
    fn cell_index(&self, x: i32, y: i32) -> Option<usize> {
        if !self.contains(x, y) {
            return None;
        }
        Some((y as usize) * (self.width as usize) + x as usize)
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            cells: vec![Cell::Background; Bounds::default().area()],
        }
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marks = Marks::default();
        for row in self.rows() {
            for &cell in row {
                write!(f, "{}", marks.glyph(cell))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
