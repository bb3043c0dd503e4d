//! Shape library.
//!
//! Every shape exposes eight anchor points computed from its current geometry,
//! draws itself onto a [`Canvas`], and can be moved and resized in place.
//! Optional capabilities ([`Rotatable`], [`Reflectable`]) are discovered through
//! [`Shape::as_rotatable`] and [`Shape::as_reflectable`].
//!
//! ```text
//! nw ------- n ------- ne
//! |                     |
//! w                     e
//! |                     |
//! sw ------- s ------- se
//! ```

mod crossed_circle;
mod face;
mod half_circle;
mod line;
mod rectangle;

use std::fmt;

use crate::canvas::Canvas;
use crate::error::Result;
use crate::geometry::{Anchor, Bounds, Point};

pub use crossed_circle::CrossedCircle;
pub use face::Face;
pub use half_circle::HalfCircle;
pub use line::Line;
pub use rectangle::Rectangle;

/// Common behaviour for all shapes.
pub trait Shape: fmt::Debug {
    /// Short name of the concrete variant.
    fn name(&self) -> &'static str;

    /// Top middle.
    fn north(&self) -> Point;
    /// Bottom middle.
    fn south(&self) -> Point;
    /// Right middle.
    fn east(&self) -> Point;
    /// Left middle.
    fn west(&self) -> Point;
    /// Top-right corner.
    fn north_east(&self) -> Point;
    /// Bottom-right corner.
    fn south_east(&self) -> Point;
    /// Top-left corner.
    fn north_west(&self) -> Point;
    /// Bottom-left corner.
    fn south_west(&self) -> Point;

    /// Rasterize onto the canvas.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::OutOfBounds`] if the shape does not fit and the
    /// variant has no local recovery.
    fn draw(&mut self, canvas: &mut Canvas) -> Result<()>;

    /// Translate all owned geometry by `(dx, dy)`.
    fn move_by(&mut self, dx: i32, dy: i32);

    /// Scale the shape's extent by an integer factor.
    fn resize(&mut self, factor: i32);

    /// Rotation capability, if supported.
    fn as_rotatable(&mut self) -> Option<&mut dyn Rotatable> {
        None
    }

    /// Reflection capability, if supported.
    fn as_reflectable(&mut self) -> Option<&mut dyn Reflectable> {
        None
    }

    /// Adopt the extent of the canvas the shape is drawn on. Shapes that
    /// validate their own moves check them against these bounds.
    fn bind_bounds(&mut self, _bounds: Bounds) {}

    /// Look up an anchor by name.
    fn anchor(&self, anchor: Anchor) -> Point {
        match anchor {
            Anchor::North => self.north(),
            Anchor::South => self.south(),
            Anchor::East => self.east(),
            Anchor::West => self.west(),
            Anchor::NorthEast => self.north_east(),
            Anchor::SouthEast => self.south_east(),
            Anchor::NorthWest => self.north_west(),
            Anchor::SouthWest => self.south_west(),
        }
    }
}

/// Shapes that can be turned a quarter step.
pub trait Rotatable {
    /// Rotate counter-clockwise.
    fn rotate_left(&mut self);
    /// Rotate clockwise.
    fn rotate_right(&mut self);
}

/// Shapes that can be mirrored.
pub trait Reflectable {
    /// Mirror left to right.
    fn flip_horizontally(&mut self);
    /// Mirror top to bottom.
    fn flip_vertically(&mut self);
}

impl<S: Shape + ?Sized> Shape for Box<S> {
    fn name(&self) -> &'static str {
        (**self).name()
    }
    fn north(&self) -> Point {
        (**self).north()
    }
    fn south(&self) -> Point {
        (**self).south()
    }
    fn east(&self) -> Point {
        (**self).east()
    }
    fn west(&self) -> Point {
        (**self).west()
    }
    fn north_east(&self) -> Point {
        (**self).north_east()
    }
    fn south_east(&self) -> Point {
        (**self).south_east()
    }
    fn north_west(&self) -> Point {
        (**self).north_west()
    }
    fn south_west(&self) -> Point {
        (**self).south_west()
    }
    fn draw(&mut self, canvas: &mut Canvas) -> Result<()> {
        (**self).draw(canvas)
    }
    fn move_by(&mut self, dx: i32, dy: i32) {
        (**self).move_by(dx, dy);
    }
    fn resize(&mut self, factor: i32) {
        (**self).resize(factor);
    }
    fn as_rotatable(&mut self) -> Option<&mut dyn Rotatable> {
        (**self).as_rotatable()
    }
    fn as_reflectable(&mut self) -> Option<&mut dyn Reflectable> {
        (**self).as_reflectable()
    }
    fn bind_bounds(&mut self, bounds: Bounds) {
        (**self).bind_bounds(bounds);
    }
}
