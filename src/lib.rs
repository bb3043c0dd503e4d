//! # Shape-Canvas
//!
//! Scan-converted vector shapes on a fixed character grid.
//!
//! Shapes expose eight named anchor points and are composed by moving one
//! shape's anchor onto another's ("put the hat on top of the brim, touching").
//! A [`Scene`](scene::Scene) owns the canvas and repaints every registered
//! shape in order on each refresh.
//!
//! ## Features
//!
//! - **Integer rasterization**: Bresenham lines, an incremental squashed
//!   half-circle and a membership-scan circle
//! - **Polymorphic shapes**: lines, rectangles, half circles, crossed circles
//!   and composite faces behind one [`Shape`](shapes::Shape) trait
//! - **Capabilities**: rotation and reflection discovered at runtime
//! - **Composition**: `up` / `down` operators driven purely by anchors
//!
//! ## Quick Start
//!
//! ```rust
//! use shape_canvas::prelude::*;
//!
//! let mut scene = Scene::new(Canvas::new(30, 12)?);
//! let base = scene.add(Rectangle::new(Point::new(2, 1), Point::new(12, 5)));
//! let hat = scene.add(Line::horizontal(Point::new(20, 0), 7));
//! scene.up(hat, base)?;
//!
//! let text = scene.render()?;
//! assert_eq!(text.lines().count(), 12);
//! # Ok::<(), shape_canvas::Error>(())
//! ```
//!
//! ## References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Bresenham, J. E. (1977). "A linear algorithm for incremental digital display of circular arcs."

#![warn(missing_docs)]
// Allow unwrap() in tests only
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Grid coordinates are i32 and buffer indices are usize
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Fixed-size character canvas.
pub mod canvas;

/// Geometric primitives (points, bounds, anchors).
pub mod geometry;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Rasterization of lines and circles.
pub mod render;

/// Output encoders (terminal).
pub mod output;

// ============================================================================
// Shape Modules
// ============================================================================

/// Shape trait, capabilities and concrete shapes.
pub mod shapes;

/// Anchor-based composition operators.
pub mod compose;

/// Shape registry and refresh cycle.
pub mod scene;

/// YAML scene configuration.
pub mod config;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for shape-canvas operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use shape_canvas::prelude::*;
/// ```
pub mod prelude {
    pub use crate::canvas::{Canvas, Cell};
    pub use crate::compose::{down, up};
    pub use crate::config::SceneConfig;
    pub use crate::error::{Error, Result};
    pub use crate::geometry::{Anchor, Bounds, Point};
    pub use crate::output::{Marks, TerminalEncoder};
    pub use crate::render::{ArcSide, CircleStrategy};
    pub use crate::scene::{Scene, ShapeId};
    pub use crate::shapes::{
        CrossedCircle, Face, HalfCircle, Line, Rectangle, Reflectable, Rotatable, Shape,
    };
}

// ============================================================================
// Tests
// ============================================================================
