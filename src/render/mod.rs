//! Rasterization of continuous primitives onto the canvas.
//!
//! # Algorithms
//!
//! - **Bresenham's Line**: integer incremental stepping along the dominant axis
//! - **Incremental Half-Circle**: integer circle stepping with a vertical squash,
//!   used for flattened decorative arcs
//! - **Membership Scan**: whole-canvas test of the truncated distance to a centre,
//!   closed even for small radii
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Bresenham, J. E. (1977). "A linear algorithm for incremental digital display of circular arcs."

mod primitives;

pub use primitives::{
    circle_scan_points, draw_circle, draw_circle_scan, draw_half_arc, draw_line, half_arc_points,
    line_points, ArcSide, CircleStrategy, LinePoints, HALF_ARC_SQUASH,
};
