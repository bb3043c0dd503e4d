//! Error types for shape-canvas operations.

use std::io;
use thiserror::Error;

use crate::scene::ShapeId;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while rasterizing, composing, or emitting a scene.
#[derive(Error, Debug)]
pub enum Error {
    /// A cell outside the canvas was asked to be set.
    #[error("cell ({x}, {y}) is outside the {width}x{height} canvas")]
    OutOfBounds {
        /// Column of the rejected cell.
        x: i32,
        /// Row of the rejected cell.
        y: i32,
        /// Canvas width.
        width: i32,
        /// Canvas height.
        height: i32,
    },

    /// Invalid dimensions for a canvas.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: i32,
        /// Height value.
        height: i32,
    },

    /// A scene handle that does not name any registered shape.
    #[error("no shape registered under {0}")]
    UnknownShape(ShapeId),

    /// Configuration parsing error with line number.
    #[error("configuration error at line {line}: {message}")]
    ConfigParse {
        /// Line number where the error occurred (1-indexed).
        line: usize,
        /// Error message describing the issue.
        message: String,
    },

    /// Configuration file not found.
    #[error("configuration file not found: {0}")]
    ConfigNotFound(String),

    /// Invalid configuration value.
    #[error("invalid configuration value for '{key}': {message}")]
    InvalidConfig {
        /// The configuration key with invalid value.
        key: String,
        /// Error message describing why the value is invalid.
        message: String,
    },

    /// I/O error while emitting the canvas.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Returns true for the out-of-bounds error kind.
    #[must_use]
    pub const fn is_out_of_bounds(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. })
    }
}
