//! Flattened half circle inside a rectangular box.

use super::{Rectangle, Reflectable, Rotatable, Shape};
use crate::canvas::Canvas;
use crate::error::Result;
use crate::geometry::{mid, Point};
use crate::render::{draw_circle, ArcSide, CircleStrategy, HALF_ARC_SQUASH};

/// A half circle drawn with the incremental strategy.
///
/// The box supplies anchors, movement, resizing and rotation. The arc is
/// centred on the box's middle column with radius `width / 2`; it rises from
/// the south edge ([`ArcSide::Above`]) or hangs from the north edge
/// ([`ArcSide::Below`]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HalfCircle {
    frame: Rectangle,
    side: ArcSide,
}

impl HalfCircle {
    /// Create a half circle rising from the south edge of the box `sw`..`ne`.
    #[must_use]
    pub const fn new(sw: Point, ne: Point) -> Self {
        Self::with_side(sw, ne, ArcSide::Above)
    }

    /// Create a half circle on the given side of its box.
    #[must_use]
    pub const fn with_side(sw: Point, ne: Point, side: ArcSide) -> Self {
        Self { frame: Rectangle::new(sw, ne), side }
    }

    /// Current arc side.
    #[must_use]
    pub const fn side(&self) -> ArcSide {
        self.side
    }

    /// Arc radius.
    #[must_use]
    pub const fn radius(&self) -> i32 {
        self.frame.width() / 2
    }

    /// Centre of the arc: middle column, on the base edge.
    #[must_use]
    pub fn arc_center(&self) -> Point {
        let x = mid(self.frame.south_west().x, self.frame.north_east().x);
        let y = match self.side {
            ArcSide::Above => self.frame.south_west().y,
            ArcSide::Below => self.frame.north_east().y,
        };
        Point::new(x, y)
    }
}

impl Shape for HalfCircle {
    fn name(&self) -> &'static str {
        "half-circle"
    }

    fn north(&self) -> Point {
        self.frame.north()
    }

    fn south(&self) -> Point {
        self.frame.south()
    }

    fn east(&self) -> Point {
        self.frame.east()
    }

    fn west(&self) -> Point {
        self.frame.west()
    }

    fn north_east(&self) -> Point {
        self.frame.north_east()
    }

    fn south_east(&self) -> Point {
        self.frame.south_east()
    }

    fn north_west(&self) -> Point {
        self.frame.north_west()
    }

    fn south_west(&self) -> Point {
        self.frame.south_west()
    }

    fn draw(&mut self, canvas: &mut Canvas) -> Result<()> {
        let strategy = CircleStrategy::Incremental { squash: HALF_ARC_SQUASH, side: self.side };
        draw_circle(canvas, self.arc_center(), self.radius(), strategy)
    }

    fn move_by(&mut self, dx: i32, dy: i32) {
        self.frame.move_by(dx, dy);
    }

    fn resize(&mut self, factor: i32) {
        self.frame.resize(factor);
    }

    fn as_rotatable(&mut self) -> Option<&mut dyn Rotatable> {
        Some(self)
    }

    fn as_reflectable(&mut self) -> Option<&mut dyn Reflectable> {
        Some(self)
    }
}

impl Rotatable for HalfCircle {
    fn rotate_left(&mut self) {
        self.frame.rotate_left();
    }

    fn rotate_right(&mut self) {
        self.frame.rotate_right();
    }
}

impl Reflectable for HalfCircle {
    /// The arc is symmetric about its middle column.
    fn flip_horizontally(&mut self) {}

    fn flip_vertically(&mut self) {
        self.side = self.side.flipped();
    }
}
