//! Axis-aligned rectangle outline.

use super::{Rotatable, Shape};
use crate::canvas::Canvas;
use crate::error::Result;
use crate::geometry::{mid, Point};
use crate::render::draw_line;

/// Horizontal cells per vertical cell, used when width and height trade places.
const CELL_ASPECT: i32 = 2;

/// An axis-aligned box stored as its south-west and north-east corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rectangle {
    sw: Point,
    ne: Point,
}

impl Rectangle {
    /// Create a rectangle from its south-west and north-east corners.
    #[must_use]
    pub const fn new(sw: Point, ne: Point) -> Self {
        Self { sw, ne }
    }

    /// Horizontal extent `ne.x - sw.x`.
    #[must_use]
    pub const fn width(&self) -> i32 {
        self.ne.x - self.sw.x
    }

    /// Vertical extent `ne.y - sw.y`.
    #[must_use]
    pub const fn height(&self) -> i32 {
        self.ne.y - self.sw.y
    }

    /// Centre cell, truncated.
    #[must_use]
    pub const fn center(&self) -> Point {
        self.sw.midpoint(self.ne)
    }
}

impl Shape for Rectangle {
    fn name(&self) -> &'static str {
        "rectangle"
    }

    fn north(&self) -> Point {
        Point::new(mid(self.sw.x, self.ne.x), self.ne.y)
    }

    fn south(&self) -> Point {
        Point::new(mid(self.sw.x, self.ne.x), self.sw.y)
    }

    fn east(&self) -> Point {
        Point::new(self.ne.x, mid(self.sw.y, self.ne.y))
    }

    fn west(&self) -> Point {
        Point::new(self.sw.x, mid(self.sw.y, self.ne.y))
    }

    fn north_east(&self) -> Point {
        self.ne
    }

    fn south_east(&self) -> Point {
        Point::new(self.ne.x, self.sw.y)
    }

    fn north_west(&self) -> Point {
        Point::new(self.sw.x, self.ne.y)
    }

    fn south_west(&self) -> Point {
        self.sw
    }

    fn draw(&mut self, canvas: &mut Canvas) -> Result<()> {
        draw_line(canvas, self.north_west(), self.ne)?;
        draw_line(canvas, self.ne, self.south_east())?;
        draw_line(canvas, self.south_east(), self.sw)?;
        draw_line(canvas, self.sw, self.north_west())
    }

    fn move_by(&mut self, dx: i32, dy: i32) {
        self.sw = self.sw.offset(dx, dy);
        self.ne = self.ne.offset(dx, dy);
    }

    /// Grow away from the south-west corner.
    fn resize(&mut self, factor: i32) {
        let grow = factor - 1;
        self.ne = self.ne.offset(self.width() * grow, self.height() * grow);
    }

    fn as_rotatable(&mut self) -> Option<&mut dyn Rotatable> {
        Some(self)
    }
}

/// Width and height swap roles with the cell aspect applied: the new width is
/// twice the old height and the new height is half the old width (truncated),
/// so repeated rotation is lossy for odd widths.
impl Rotatable for Rectangle {
    /// Pivot on the south-west corner.
    fn rotate_left(&mut self) {
        let (w, h) = (self.width(), self.height());
        self.ne.x = self.sw.x + h * CELL_ASPECT;
        self.ne.y = self.sw.y + w / CELL_ASPECT;
    }

    /// Pivot on the south-east corner.
    fn rotate_right(&mut self) {
        let (w, h) = (self.width(), self.height());
        self.sw.x = self.ne.x - h * CELL_ASPECT;
        self.ne.y = self.sw.y + w / CELL_ASPECT;
    }
}
