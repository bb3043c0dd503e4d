//! Terminal output encoder.
//!
//! Renders a canvas as plain text, one character per cell, topmost row first.
//! Any `std::io::Write` sink works; stdout is the usual consumer.

use std::io::Write;

use crate::canvas::{Canvas, Cell};
use crate::error::Result;

/// The two characters used to render cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marks {
    /// Glyph for set cells.
    pub set: char,
    /// Glyph for background cells.
    pub background: char,
}

impl Marks {
    /// Create a mark pair.
    #[must_use]
    pub const fn new(set: char, background: char) -> Self {
        Self { set, background }
    }

    /// Glyph for a cell.
    #[must_use]
    pub const fn glyph(&self, cell: Cell) -> char {
        match cell {
            Cell::Set => self.set,
            Cell::Background => self.background,
        }
    }
}

impl Default for Marks {
    fn default() -> Self {
        Self::new('*', '.')
    }
}

/// Terminal encoder configuration.
#[derive(Debug, Clone, Default)]
pub struct TerminalEncoder {
    marks: Marks,
    invert: bool,
}

impl TerminalEncoder {
    /// Create a new terminal encoder with the default `*` / `.` marks.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set both marks.
    #[must_use]
    pub fn marks(mut self, marks: Marks) -> Self {
        self.marks = marks;
        self
    }

    /// Swap the set and background glyphs.
    #[must_use]
    pub fn invert(mut self, invert: bool) -> Self {
        self.invert = invert;
        self
    }

    /// The marks in effect after inversion.
    #[must_use]
    pub fn effective_marks(&self) -> Marks {
        if self.invert {
            Marks::new(self.marks.background, self.marks.set)
        } else {
            self.marks
        }
    }

    /// Render a canvas to a string.
    #[must_use]
    pub fn render(&self, canvas: &Canvas) -> String {
        let marks = self.effective_marks();
        let mut output =
            String::with_capacity((canvas.width() as usize + 1) * canvas.height() as usize);

        for row in canvas.rows() {
            output.extend(row.iter().map(|&cell| marks.glyph(cell)));
            output.push('\n');
        }

        output
    }

    /// Write the rendered canvas to a sink.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink rejects the write.
    pub fn write_to<W: Write>(&self, canvas: &Canvas, mut out: W) -> Result<()> {
        out.write_all(self.render(canvas).as_bytes())?;
        out.flush()?;
        Ok(())
    }
}
