//! Scene registry and refresh cycle.
//!
//! A [`Scene`] owns its canvas and every registered shape. Shapes are painted
//! in registration order on each refresh, so later shapes overwrite earlier
//! ones where they overlap.

use std::fmt;
use std::io::Write;

use tracing::{debug, trace};

use crate::canvas::Canvas;
use crate::compose;
use crate::config::SceneConfig;
use crate::error::{Error, Result};
use crate::output::TerminalEncoder;
use crate::shapes::{Reflectable, Rotatable, Shape};

/// Handle to a shape registered in a [`Scene`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeId(usize);

impl ShapeId {
    pub(crate) const fn from_index(index: usize) -> Self {
        Self(index)
    }

    /// Registration position, starting at zero.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "shape #{}", self.0)
    }
}

/// An ordered, append-only collection of shapes and the canvas they paint.
#[derive(Debug, Default)]
pub struct Scene {
    canvas: Canvas,
    shapes: Vec<Box<dyn Shape>>,
    encoder: TerminalEncoder,
}

impl Scene {
    /// Create an empty scene drawing onto `canvas`.
    #[must_use]
    pub fn new(canvas: Canvas) -> Self {
        Self { canvas, shapes: Vec::new(), encoder: TerminalEncoder::new() }
    }

    /// Create an empty scene sized and marked according to `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn with_config(config: &SceneConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config.canvas()?).with_encoder(config.encoder()))
    }

    /// Replace the encoder used by [`Scene::refresh`] and [`Scene::render`].
    #[must_use]
    pub fn with_encoder(mut self, encoder: TerminalEncoder) -> Self {
        self.encoder = encoder;
        self
    }

    /// Register a shape; it is painted after every shape added before it.
    ///
    /// The shape is bound to this scene's canvas bounds.
    pub fn add<S: Shape + 'static>(&mut self, mut shape: S) -> ShapeId {
        shape.bind_bounds(self.canvas.bounds());
        let id = ShapeId(self.shapes.len());
        debug!(%id, shape = shape.name(), "registered");
        self.shapes.push(Box::new(shape));
        id
    }

    /// Number of registered shapes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Returns true if no shape is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Handles of all shapes in paint order.
    pub fn ids(&self) -> impl Iterator<Item = ShapeId> {
        (0..self.shapes.len()).map(ShapeId)
    }

    /// Borrow a shape.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownShape`] if the handle is not from this scene.
    pub fn get(&self, id: ShapeId) -> Result<&dyn Shape> {
        self.shapes.get(id.0).map(|shape| &**shape).ok_or(Error::UnknownShape(id))
    }

    /// Mutably borrow a shape.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownShape`] if the handle is not from this scene.
    pub fn get_mut(&mut self, id: ShapeId) -> Result<&mut dyn Shape> {
        match self.shapes.get_mut(id.0) {
            Some(shape) => Ok(&mut **shape),
            None => Err(Error::UnknownShape(id)),
        }
    }

    /// The rotation capability of a shape, if it has one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownShape`] if the handle is not from this scene.
    pub fn rotatable_mut(&mut self, id: ShapeId) -> Result<Option<&mut dyn Rotatable>> {
        Ok(self.get_mut(id)?.as_rotatable())
    }

    /// The reflection capability of a shape, if it has one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownShape`] if the handle is not from this scene.
    pub fn reflectable_mut(&mut self, id: ShapeId) -> Result<Option<&mut dyn Reflectable>> {
        Ok(self.get_mut(id)?.as_reflectable())
    }

    /// Translate a shape.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownShape`] if the handle is not from this scene.
    pub fn move_by(&mut self, id: ShapeId, dx: i32, dy: i32) -> Result<()> {
        self.get_mut(id)?.move_by(dx, dy);
        Ok(())
    }

    /// Resize a shape.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownShape`] if the handle is not from this scene.
    pub fn resize(&mut self, id: ShapeId, factor: i32) -> Result<()> {
        self.get_mut(id)?.resize(factor);
        Ok(())
    }

    /// Place shape `p` directly on top of shape `q`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownShape`] if either handle is not from this scene.
    pub fn up(&mut self, p: ShapeId, q: ShapeId) -> Result<()> {
        let (dx, dy) = compose::up_offset(self.get(p)?, self.get(q)?);
        self.move_by(p, dx, dy)
    }

    /// Place shape `p` directly under shape `q`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownShape`] if either handle is not from this scene.
    pub fn down(&mut self, p: ShapeId, q: ShapeId) -> Result<()> {
        let (dx, dy) = compose::down_offset(self.get(p)?, self.get(q)?);
        self.move_by(p, dx, dy)
    }

    /// The encoder used for emission.
    #[must_use]
    pub const fn encoder(&self) -> &TerminalEncoder {
        &self.encoder
    }

    /// The canvas as of the last redraw.
    #[must_use]
    pub const fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Clear the canvas and draw every shape in registration order.
    ///
    /// # Errors
    ///
    /// Returns the first error a shape does not recover from. Shapes drawn
    /// before it stay on the canvas; later shapes are not drawn.
    pub fn redraw(&mut self) -> Result<&Canvas> {
        debug!(shapes = self.shapes.len(), "redrawing scene");
        self.canvas.clear();

        for (index, shape) in self.shapes.iter_mut().enumerate() {
            trace!(id = index, shape = shape.name(), "draw");
            shape.draw(&mut self.canvas)?;
        }

        Ok(&self.canvas)
    }

    /// Redraw and write the canvas to `out`.
    ///
    /// # Errors
    ///
    /// Returns drawing errors from [`Scene::redraw`] or write errors.
    pub fn refresh<W: Write>(&mut self, out: W) -> Result<()> {
        self.redraw()?;
        self.encoder.write_to(&self.canvas, out)
    }

    /// Redraw and render the canvas to a string.
    ///
    /// # Errors
    ///
    /// Returns drawing errors from [`Scene::redraw`].
    pub fn render(&mut self) -> Result<String> {
        self.redraw()?;
        Ok(self.encoder.render(&self.canvas))
    }
}
