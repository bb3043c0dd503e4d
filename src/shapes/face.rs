//! Composite face: a rectangular outline with eyes, mouth and a nose.

use super::{Line, Rectangle, Shape};
use crate::canvas::Canvas;
use crate::error::Result;
use crate::geometry::Point;

/// A face built from a rectangle outline and three owned lines.
///
/// Anchors are the outline's. The nose is not a part: it is a single cell
/// plotted at the outline's centre on every draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Face {
    outline: Rectangle,
    left_eye: Line,
    right_eye: Line,
    mouth: Line,
}

impl Face {
    /// Create a face filling the box `sw`..`ne`.
    #[must_use]
    pub fn new(sw: Point, ne: Point) -> Self {
        let outline = Rectangle::new(sw, ne);
        let origin = outline.south_west();
        let w = outline.width() + 1;
        let h = outline.height() + 1;

        Self {
            outline,
            left_eye: Line::horizontal(Point::new(origin.x + 2, origin.y + h * 3 / 4), 2),
            right_eye: Line::horizontal(Point::new(origin.x + w - 4, origin.y + h * 3 / 4), 2),
            mouth: Line::horizontal(Point::new(origin.x + 2, origin.y + h / 4), w - 4),
        }
    }

    /// Where the nose is plotted.
    #[must_use]
    pub const fn nose(&self) -> Point {
        self.outline.center()
    }

    /// The owned parts in draw order: left eye, right eye, mouth.
    #[must_use]
    pub const fn parts(&self) -> [&Line; 3] {
        [&self.left_eye, &self.right_eye, &self.mouth]
    }
}

impl Shape for Face {
    fn name(&self) -> &'static str {
        "face"
    }

    fn north(&self) -> Point {
        self.outline.north()
    }

    fn south(&self) -> Point {
        self.outline.south()
    }

    fn east(&self) -> Point {
        self.outline.east()
    }

    fn west(&self) -> Point {
        self.outline.west()
    }

    fn north_east(&self) -> Point {
        self.outline.north_east()
    }

    fn south_east(&self) -> Point {
        self.outline.south_east()
    }

    fn north_west(&self) -> Point {
        self.outline.north_west()
    }

    fn south_west(&self) -> Point {
        self.outline.south_west()
    }

    fn draw(&mut self, canvas: &mut Canvas) -> Result<()> {
        self.outline.draw(canvas)?;
        canvas.put_point(self.nose())?;
        self.left_eye.draw(canvas)?;
        self.right_eye.draw(canvas)?;
        self.mouth.draw(canvas)
    }

    fn move_by(&mut self, dx: i32, dy: i32) {
        self.outline.move_by(dx, dy);
        self.left_eye.move_by(dx, dy);
        self.right_eye.move_by(dx, dy);
        self.mouth.move_by(dx, dy);
    }

    /// Features are laid out for the original size, so the face keeps it.
    fn resize(&mut self, _factor: i32) {}
}
