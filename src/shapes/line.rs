//! Straight segment.

use super::Shape;
use crate::canvas::Canvas;
use crate::error::Result;
use crate::geometry::{mid, Point};
use crate::render::draw_line;

/// A segment between two endpoints.
///
/// Anchors are computed by comparing the endpoints: `north` sits above the
/// midpoint column at the height of the higher endpoint, `east` sits at the
/// midpoint row at the column of the rightmost endpoint, and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    w: Point,
    e: Point,
}

impl Line {
    /// Create a segment between two points.
    #[must_use]
    pub const fn new(w: Point, e: Point) -> Self {
        Self { w, e }
    }

    /// Horizontal segment of `len` cells starting at `start` and running right.
    #[must_use]
    pub const fn horizontal(start: Point, len: i32) -> Self {
        Self::new(Point::new(start.x + len - 1, start.y), start)
    }

    /// The first endpoint.
    #[must_use]
    pub const fn start(&self) -> Point {
        self.w
    }

    /// The second endpoint.
    #[must_use]
    pub const fn end(&self) -> Point {
        self.e
    }

    const fn top(&self) -> i32 {
        if self.e.y < self.w.y { self.w.y } else { self.e.y }
    }

    const fn bottom(&self) -> i32 {
        if self.e.y < self.w.y { self.e.y } else { self.w.y }
    }

    const fn right(&self) -> i32 {
        if self.e.x < self.w.x { self.w.x } else { self.e.x }
    }

    const fn left(&self) -> i32 {
        if self.e.x < self.w.x { self.e.x } else { self.w.x }
    }
}

impl Shape for Line {
    fn name(&self) -> &'static str {
        "line"
    }

    fn north(&self) -> Point {
        Point::new(mid(self.w.x, self.e.x), self.top())
    }

    fn south(&self) -> Point {
        Point::new(mid(self.w.x, self.e.x), self.bottom())
    }

    fn east(&self) -> Point {
        Point::new(self.right(), mid(self.w.y, self.e.y))
    }

    fn west(&self) -> Point {
        Point::new(self.left(), mid(self.w.y, self.e.y))
    }

    fn north_east(&self) -> Point {
        Point::new(self.right(), self.top())
    }

    fn south_east(&self) -> Point {
        Point::new(self.right(), self.bottom())
    }

    fn north_west(&self) -> Point {
        Point::new(self.left(), self.top())
    }

    fn south_west(&self) -> Point {
        Point::new(self.left(), self.bottom())
    }

    fn draw(&mut self, canvas: &mut Canvas) -> Result<()> {
        draw_line(canvas, self.w, self.e)
    }

    fn move_by(&mut self, dx: i32, dy: i32) {
        self.w = self.w.offset(dx, dy);
        self.e = self.e.offset(dx, dy);
    }

    /// Stretch away from the first endpoint so the segment is `factor` times as long.
    fn resize(&mut self, factor: i32) {
        let grow = factor - 1;
        self.e = self.e.offset((self.e.x - self.w.x) * grow, (self.e.y - self.w.y) * grow);
    }
}
