//! Primitive rasterization functions.
//!
//! Every `draw_*` function forwards cells to [`Canvas::put_point`] in order and
//! stops at the first out-of-bounds cell. Cells set before the failure stay set.

use crate::canvas::Canvas;
use crate::error::Result;
use crate::geometry::{Bounds, Point};

/// Vertical squash applied to the half-circle arc to compensate for tall cells.
pub const HALF_ARC_SQUASH: f64 = 0.7;

// ============================================================================
// Line Drawing
// ============================================================================

/// Lazy sequence of cells approximating a segment (Bresenham).
///
/// Exactly one cell is produced per integer step along the dominant axis, both
/// endpoints included. Ties on the minor axis are broken relative to the
/// lexicographically smaller endpoint, so a segment and its reverse cover the
/// same cells.
#[derive(Debug, Clone)]
pub struct LinePoints {
    current: Point,
    major: Point,
    minor: Point,
    /// Distance along the dominant axis.
    a: i32,
    /// Distance along the minor axis.
    b: i32,
    /// Scaled error `2a * (exact_minor - plotted_minor)`.
    eps: i32,
    /// Step the minor axis when `eps == a`.
    step_on_tie: bool,
    remaining: u32,
}

impl LinePoints {
    /// Start rasterizing the segment from `p0` to `p1`.
    #[must_use]
    pub fn new(p0: Point, p1: Point) -> Self {
        let dx = p1.x - p0.x;
        let dy = p1.y - p0.y;
        let sx = dx.signum();
        let sy = dy.signum();

        let (a, b, major, minor) = if dx.abs() >= dy.abs() {
            (dx.abs(), dy.abs(), Point::new(sx, 0), Point::new(0, sy))
        } else {
            (dy.abs(), dx.abs(), Point::new(0, sy), Point::new(sx, 0))
        };

        Self {
            current: p0,
            major,
            minor,
            a,
            b,
            eps: 0,
            // Walking away from the smaller endpoint rounds half up; walking
            // back toward it must round half down to land on the same cells.
            step_on_tie: p0 <= p1,
            remaining: a.unsigned_abs() + 1,
        }
    }
}

impl Iterator for LinePoints {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let cell = self.current;

        if self.remaining > 0 {
            self.current = self.current.offset(self.major.x, self.major.y);
            self.eps += 2 * self.b;
            let step_minor =
                if self.step_on_tie { self.eps >= self.a } else { self.eps > self.a };
            if step_minor {
                self.current = self.current.offset(self.minor.x, self.minor.y);
                self.eps -= 2 * self.a;
            }
        }

        Some(cell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for LinePoints {}

/// Cells of the segment from `p0` to `p1`.
#[must_use]
pub fn line_points(p0: Point, p1: Point) -> LinePoints {
    LinePoints::new(p0, p1)
}

/// Draw a segment onto the canvas.
///
/// # Errors
///
/// Returns [`crate::Error::OutOfBounds`] at the first cell outside the canvas.
/// Cells already plotted by this call are not rolled back.
pub fn draw_line(canvas: &mut Canvas, p0: Point, p1: Point) -> Result<()> {
    line_points(p0, p1).try_for_each(|p| canvas.put_point(p))
}

// ============================================================================
// Circle Drawing
// ============================================================================

/// Which half of the bounding box an incremental arc occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArcSide {
    /// Arc rises from the base row.
    #[default]
    Above,
    /// Arc hangs below the base row.
    Below,
}

impl ArcSide {
    /// The opposite side.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Above => Self::Below,
            Self::Below => Self::Above,
        }
    }
}

/// Circle rasterization strategy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CircleStrategy {
    /// Integer midpoint stepping, mirrored about the vertical axis, with the
    /// vertical component scaled by `squash`.
    Incremental {
        /// Vertical scale applied before plotting.
        squash: f64,
        /// Half of the circle to plot.
        side: ArcSide,
    },
    /// Every canvas cell whose truncated distance to the centre equals the radius.
    MembershipScan,
}

/// Cells of a half circle from incremental stepping.
///
/// Starts at the top of the arc (`x = 0, y = radius`) and walks outward until
/// `y` drops below zero, emitting the mirrored pair `centre.x ± x` at each
/// step. The plotted row is `centre.y ± y * squash`, truncated toward zero.
#[must_use]
pub fn half_arc_points(center: Point, radius: i32, squash: f64, side: ArcSide) -> Vec<Point> {
    let mut points = Vec::new();
    let (mut x, mut y) = (0, radius);
    let mut delta = 2 - 2 * radius;

    while y >= 0 {
        let dy = f64::from(y) * squash;
        let row = match side {
            ArcSide::Above => (f64::from(center.y) + dy) as i32,
            ArcSide::Below => (f64::from(center.y) - dy) as i32,
        };
        points.push(Point::new(center.x + x, row));
        points.push(Point::new(center.x - x, row));

        let error = 2 * (delta + y) - 1;
        if delta < 0 && error <= 0 {
            x += 1;
            delta += 2 * x + 1;
            continue;
        }
        let error = 2 * (delta - x) - 1;
        if delta > 0 && error > 0 {
            y -= 1;
            delta += 1 - 2 * y;
            continue;
        }
        x += 1;
        delta += 2 * (x - y);
        y -= 1;
    }

    points
}

/// Draw an incremental half circle.
///
/// # Errors
///
/// Returns [`crate::Error::OutOfBounds`] at the first cell outside the canvas.
pub fn draw_half_arc(
    canvas: &mut Canvas,
    center: Point,
    radius: i32,
    squash: f64,
    side: ArcSide,
) -> Result<()> {
    half_arc_points(center, radius, squash, side).into_iter().try_for_each(|p| canvas.put_point(p))
}

/// Cells of a circle by scanning the whole grid.
///
/// A cell belongs to the circle when its Euclidean distance to `center`,
/// truncated to an integer, equals `radius`. Cost is proportional to the grid
/// area; only on-grid cells are ever produced.
pub fn circle_scan_points(
    bounds: Bounds,
    center: Point,
    radius: i32,
) -> impl Iterator<Item = Point> {
    (0..bounds.height)
        .flat_map(move |y| (0..bounds.width).map(move |x| Point::new(x, y)))
        .filter(move |p| p.distance(center) as i32 == radius)
}

/// Draw a circle outline with the membership scan.
///
/// # Errors
///
/// Never fails for a well-formed canvas; the signature matches the other
/// rasterizers.
pub fn draw_circle_scan(canvas: &mut Canvas, center: Point, radius: i32) -> Result<()> {
    let bounds = canvas.bounds();
    circle_scan_points(bounds, center, radius).try_for_each(|p| canvas.put_point(p))
}

/// Draw a circle with the given strategy.
///
/// # Errors
///
/// Returns [`crate::Error::OutOfBounds`] when the incremental strategy leaves
/// the canvas.
pub fn draw_circle(
    canvas: &mut Canvas,
    center: Point,
    radius: i32,
    strategy: CircleStrategy,
) -> Result<()> {
    match strategy {
        CircleStrategy::Incremental { squash, side } => {
            draw_half_arc(canvas, center, radius, squash, side)
        }
        CircleStrategy::MembershipScan => draw_circle_scan(canvas, center, radius),
    }
}

// ============================================================================
// Tests
// ============================================================================


// ============================================================================
// Property-based tests with proptest
// ============================================================================
