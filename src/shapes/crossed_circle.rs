//! Circle inscribed in a box together with the box's two diagonals.
//!
//! ```text
//!              ............
//! (up_left)    *...****...*    (up_right)
//!              .***....***.
//!              *....**....*
//!              *....**....*
//!              .***....***.
//! (down_left)  *...****...*    (down_right)
//!              ............
//! ```

use tracing::warn;

use super::Shape;
use crate::canvas::Canvas;
use crate::error::Result;
use crate::geometry::{Bounds, Point};
use crate::render::{draw_circle, draw_line, CircleStrategy};

/// Where every tracked point lands when the shape collapses.
const DEGENERATE_POINT: Point = Point::new(1, 1);

/// Radius after collapsing.
const DEGENERATE_RADIUS: i32 = 1;

/// A circle plus both diagonals of its bounding box.
///
/// The circle uses the membership-scan strategy. Whenever drawing or moving
/// would leave the canvas the shape does not fail; it collapses instead, with
/// every tracked point at `(1, 1)` and radius 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrossedCircle {
    up_left: Point,
    down_right: Point,
    down_left: Point,
    up_right: Point,
    middle: Point,
    radius: i32,
    bounds: Bounds,
}

impl CrossedCircle {
    /// Create a crossed circle on the default 120x50 canvas.
    ///
    /// The corners may be given in any order; they are normalised so that
    /// `up_left` is the upper-left corner.
    #[must_use]
    pub fn new(up_left: Point, down_right: Point) -> Self {
        Self::within(Bounds::default(), up_left, down_right)
    }

    /// Create a crossed circle whose moves are validated against `bounds`.
    #[must_use]
    pub fn within(bounds: Bounds, up_left: Point, down_right: Point) -> Self {
        let (mut up_left, mut down_right) = (up_left, down_right);
        if up_left.y < down_right.y {
            std::mem::swap(&mut up_left.y, &mut down_right.y);
        }
        if up_left.x > down_right.x {
            std::mem::swap(&mut up_left.x, &mut down_right.x);
        }

        Self {
            up_left,
            down_right,
            down_left: Point::new(up_left.x, down_right.y),
            up_right: Point::new(down_right.x, up_left.y),
            middle: up_left.midpoint(down_right),
            radius: (down_right.x - up_left.x) / 2,
            bounds,
        }
    }

    /// Circle radius.
    #[must_use]
    pub const fn radius(&self) -> i32 {
        self.radius
    }

    /// Circle centre.
    #[must_use]
    pub const fn middle(&self) -> Point {
        self.middle
    }

    /// Bounds used to validate moves.
    #[must_use]
    pub const fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// The four corners: up-left, up-right, down-left, down-right.
    #[must_use]
    pub const fn corners(&self) -> [Point; 4] {
        [self.up_left, self.up_right, self.down_left, self.down_right]
    }

    /// Returns true once the shape has collapsed.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.radius == DEGENERATE_RADIUS
            && self.middle == DEGENERATE_POINT
            && self.corners().iter().all(|&p| p == DEGENERATE_POINT)
    }

    fn tracked_points(&self) -> [Point; 5] {
        [self.up_left, self.up_right, self.down_left, self.down_right, self.middle]
    }

    fn collapse(&mut self) {
        self.radius = DEGENERATE_RADIUS;
        self.up_left = DEGENERATE_POINT;
        self.up_right = DEGENERATE_POINT;
        self.down_left = DEGENERATE_POINT;
        self.down_right = DEGENERATE_POINT;
        self.middle = DEGENERATE_POINT;
    }

    fn rasterize(&self, canvas: &mut Canvas) -> Result<()> {
        draw_circle(canvas, self.middle, self.radius, CircleStrategy::MembershipScan)?;
        draw_line(canvas, self.up_left, self.down_right)?;
        draw_line(canvas, self.up_right, self.down_left)
    }
}

impl Shape for CrossedCircle {
    fn name(&self) -> &'static str {
        "crossed-circle"
    }

    fn north(&self) -> Point {
        Point::new(self.middle.x, self.up_left.y)
    }

    fn south(&self) -> Point {
        Point::new(self.middle.x, self.down_left.y)
    }

    fn east(&self) -> Point {
        Point::new(self.up_right.x, self.middle.y)
    }

    fn west(&self) -> Point {
        Point::new(self.up_left.x, self.middle.y)
    }

    fn north_east(&self) -> Point {
        self.up_right
    }

    fn south_east(&self) -> Point {
        self.down_right
    }

    fn north_west(&self) -> Point {
        self.up_left
    }

    fn south_west(&self) -> Point {
        self.down_left
    }

    /// Out-of-bounds failures are recovered here: the canvas is cleared, the
    /// old centre is plotted if it is on the canvas, and the shape collapses.
    fn draw(&mut self, canvas: &mut Canvas) -> Result<()> {
        match self.rasterize(canvas) {
            Err(err) if err.is_out_of_bounds() => {
                warn!(shape = self.name(), %err, "draw left the canvas; collapsing");
                canvas.clear();
                // The centre may itself be off-canvas; nothing more to recover then.
                let _ = canvas.put_point(self.middle);
                self.collapse();
                Ok(())
            }
            other => other,
        }
    }

    /// Moves only if all five tracked points stay on the canvas; otherwise the
    /// move is discarded and the shape collapses.
    fn move_by(&mut self, dx: i32, dy: i32) {
        let fits = self.tracked_points().iter().all(|p| self.bounds.contains(p.offset(dx, dy)));
        if !fits {
            warn!(shape = self.name(), dx, dy, "move would leave the canvas; collapsing");
            self.collapse();
            return;
        }

        self.up_left = self.up_left.offset(dx, dy);
        self.up_right = self.up_right.offset(dx, dy);
        self.down_left = self.down_left.offset(dx, dy);
        self.down_right = self.down_right.offset(dx, dy);
        self.middle = self.middle.offset(dx, dy);
    }

    /// Fixed size: resizing has no effect.
    fn resize(&mut self, _factor: i32) {}

    fn bind_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalizes_inverted_corners() {
        let c = CrossedCircle::new(Point::new(10, 0), Point::new(0, 10));
        assert_eq!(c.north_west(), Point::new(0, 10));
        assert_eq!(c.south_east(), Point::new(10, 0));
        assert_eq!(c.radius(), 5);
        assert_eq!(c.middle(), Point::new(5, 5));
        assert!(!c.is_degenerate());
    }

    #[test]
    fn test_normalizes_swapped_x_only() {
        let c = CrossedCircle::new(Point::new(37, 30), Point::new(33, 26));
        assert_eq!(c.north_west(), Point::new(33, 30));
        assert_eq!(c.south_east(), Point::new(37, 26));
        assert_eq!(c.radius(), 2);
    }

    #[test]
    fn test_anchors() {
        let c = CrossedCircle::new(Point::new(16, 44), Point::new(26, 34));
        assert_eq!(c.north(), Point::new(21, 44));
        assert_eq!(c.south(), Point::new(21, 34));
        assert_eq!(c.east(), Point::new(26, 39));
        assert_eq!(c.west(), Point::new(16, 39));
        assert_eq!(c.north_east(), Point::new(26, 44));
        assert_eq!(c.south_west(), Point::new(16, 34));
    }

    #[test]
    fn test_move_within_bounds() {
        let mut c = CrossedCircle::new(Point::new(0, 10), Point::new(10, 0));
        c.move_by(3, 4);
        assert_eq!(c.north_west(), Point::new(3, 14));
        assert_eq!(c.middle(), Point::new(8, 9));
        assert_eq!(c.radius(), 5);
    }

    #[test]
    fn test_move_off_canvas_collapses() {
        let mut c = CrossedCircle::new(Point::new(0, 10), Point::new(10, 0));
        c.move_by(-1, -1);
        assert!(c.is_degenerate());
        assert_eq!(c.radius(), 1);
        assert_eq!(c.corners(), [Point::new(1, 1); 4]);
        assert_eq!(c.middle(), Point::new(1, 1));
    }

    #[test]
    fn test_move_past_right_edge_collapses() {
        let mut c = CrossedCircle::new(Point::new(100, 40), Point::new(110, 30));
        c.move_by(10, 0);
        assert!(c.is_degenerate());
    }

    #[test]
    fn test_move_respects_custom_bounds() {
        let mut c = CrossedCircle::within(Bounds::new(20, 20), Point::new(0, 10), Point::new(10, 0));
        c.move_by(9, 0);
        assert!(!c.is_degenerate());
        c.move_by(1, 0);
        assert!(c.is_degenerate());
    }

    #[test]
    fn test_bind_bounds_replaces_default_canvas() {
        let mut c = CrossedCircle::new(Point::new(0, 10), Point::new(10, 0));
        c.bind_bounds(Bounds::new(30, 12));
        assert_eq!(c.bounds(), Bounds::new(30, 12));

        c.move_by(25, 0);
        assert!(c.is_degenerate());
    }

    #[test]
    fn test_draw_inside() {
        let mut canvas = Canvas::default();
        let mut c = CrossedCircle::new(Point::new(0, 10), Point::new(10, 0));
        c.draw(&mut canvas).unwrap();

        assert!(canvas.is_set(0, 10));
        assert!(canvas.is_set(10, 0));
        assert!(canvas.is_set(5, 5));
        // On the circle, off both diagonals
        assert!(canvas.is_set(10, 5));
        assert!(!c.is_degenerate());
    }

    #[test]
    fn test_draw_off_canvas_recovers() {
        let mut canvas = Canvas::default();
        canvas.set_cell(60, 20).unwrap();

        let mut c = CrossedCircle::new(Point::new(-3, 2), Point::new(10, 5));
        c.draw(&mut canvas).unwrap();

        assert!(c.is_degenerate());
        // Canvas cleared, then the old centre plotted
        assert!(!canvas.is_set(60, 20));
        assert_eq!(canvas.set_points(), vec![Point::new(3, 3)]);
    }

    #[test]
    fn test_draw_after_collapse_is_small() {
        let mut canvas = Canvas::default();
        let mut c = CrossedCircle::new(Point::new(0, 10), Point::new(10, 0));
        c.move_by(-50, 0);
        c.draw(&mut canvas).unwrap();
        assert!(canvas.is_set(1, 1));
        assert!(canvas.set_points().iter().all(|p| p.x <= 2 && p.y <= 2));
    }

    #[test]
    fn test_resize_is_noop() {
        let mut c = CrossedCircle::new(Point::new(0, 10), Point::new(10, 0));
        let before = c.clone();
        c.resize(3);
        assert_eq!(c, before);
    }
}
