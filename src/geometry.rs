//! Geometric primitives on the integer grid.
//!
//! Provides the grid point type, canvas bounds, and the eight anchor names
//! every shape exposes for alignment.

use std::fmt;

/// Default canvas width in cells.
pub const DEFAULT_WIDTH: i32 = 120;

/// Default canvas height in cells.
pub const DEFAULT_HEIGHT: i32 = 50;

/// Midpoint of two coordinates, rounded down.
///
/// Floor division keeps anchors translation-invariant: shifting both inputs
/// by `d` shifts the result by exactly `d`, also across negative coordinates.
#[must_use]
pub const fn mid(a: i32, b: i32) -> i32 {
    (a + b).div_euclid(2)
}

/// A grid point with integer coordinates.
///
/// `y` grows upward: row 0 is the bottom of the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Point {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The point translated by `(dx, dy)`.
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Integer midpoint, rounded down on each axis.
    #[must_use]
    pub const fn midpoint(self, other: Self) -> Self {
        Self::new(mid(self.x, other.x), mid(self.y, other.y))
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        let dx = f64::from(self.x - other.x);
        let dy = f64::from(self.y - other.y);
        dx.hypot(dy)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Extent of a canvas: valid cells are `[0, width) x [0, height)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    /// Number of columns.
    pub width: i32,
    /// Number of rows.
    pub height: i32,
}

impl Bounds {
    /// Create bounds of the given size.
    #[must_use]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Check whether a cell lies on the canvas.
    #[must_use]
    pub const fn contains(&self, p: Point) -> bool {
        0 <= p.x && p.x < self.width && 0 <= p.y && p.y < self.height
    }

    /// Number of cells covered.
    #[must_use]
    pub const fn area(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

/// The eight named reference points of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    /// Top middle.
    North,
    /// Bottom middle.
    South,
    /// Right middle.
    East,
    /// Left middle.
    West,
    /// Top-right corner.
    NorthEast,
    /// Bottom-right corner.
    SouthEast,
    /// Top-left corner.
    NorthWest,
    /// Bottom-left corner.
    SouthWest,
}

impl Anchor {
    /// All anchors, compass points first.
    pub const ALL: [Self; 8] = [
        Self::North,
        Self::South,
        Self::East,
        Self::West,
        Self::NorthEast,
        Self::SouthEast,
        Self::NorthWest,
        Self::SouthWest,
    ];

    /// Short compass label (`n`, `ne`, ...).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::North => "n",
            Self::South => "s",
            Self::East => "e",
            Self::West => "w",
            Self::NorthEast => "ne",
            Self::SouthEast => "se",
            Self::NorthWest => "nw",
            Self::SouthWest => "sw",
        }
    }
}
