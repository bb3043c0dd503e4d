//! Scene configuration.
//!
//! Supports YAML configuration with precedence: CLI > file > defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::canvas::Canvas;
use crate::error::{Error, Result};
use crate::geometry::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::output::{Marks, TerminalEncoder};

/// Canvas size settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CanvasConfig {
    /// Number of columns.
    #[serde(default = "default_width")]
    pub width: i32,

    /// Number of rows.
    #[serde(default = "default_height")]
    pub height: i32,
}

fn default_width() -> i32 {
    DEFAULT_WIDTH
}
fn default_height() -> i32 {
    DEFAULT_HEIGHT
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self { width: default_width(), height: default_height() }
    }
}

/// Output glyph settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MarksConfig {
    /// Glyph for set cells.
    #[serde(default = "default_set")]
    pub set: char,

    /// Glyph for background cells.
    #[serde(default = "default_background")]
    pub background: char,

    /// Swap the two glyphs on output.
    #[serde(default)]
    pub invert: bool,
}

fn default_set() -> char {
    '*'
}
fn default_background() -> char {
    '.'
}

impl Default for MarksConfig {
    fn default() -> Self {
        Self { set: default_set(), background: default_background(), invert: false }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SceneConfig {
    /// Configuration version.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Canvas settings.
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Output glyphs.
    #[serde(default)]
    pub marks: MarksConfig,
}

fn default_version() -> u32 {
    1
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            canvas: CanvasConfig::default(),
            marks: MarksConfig::default(),
        }
    }
}

impl SceneConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Per-user configuration file, if the platform has a config directory.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("shape-canvas").join("config.yaml"))
    }

    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .map_err(|_| Error::ConfigNotFound(path.display().to_string()))?;

        Self::parse(&content)
    }

    /// Parses configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with line number if parsing fails.
    pub fn parse(yaml: &str) -> Result<Self> {
        serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map(|l| l.line()).unwrap_or(0);
            Error::ConfigParse { line, message: e.to_string() }
        })
    }

    /// Loads configuration with fallback to defaults.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(path).unwrap_or_default()
    }

    /// Checks that the canvas is non-empty and the two glyphs differ.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] naming the offending key.
    pub fn validate(&self) -> Result<()> {
        if self.canvas.width <= 0 {
            return Err(Error::InvalidConfig {
                key: "canvas.width".to_string(),
                message: format!("must be positive, got {}", self.canvas.width),
            });
        }
        if self.canvas.height <= 0 {
            return Err(Error::InvalidConfig {
                key: "canvas.height".to_string(),
                message: format!("must be positive, got {}", self.canvas.height),
            });
        }
        if self.marks.set == self.marks.background {
            return Err(Error::InvalidConfig {
                key: "marks".to_string(),
                message: format!("set and background are both '{}'", self.marks.set),
            });
        }
        Ok(())
    }

    /// A blank canvas of the configured size.
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions are not positive.
    pub fn canvas(&self) -> Result<Canvas> {
        Canvas::new(self.canvas.width, self.canvas.height)
    }

    /// An encoder using the configured glyphs.
    #[must_use]
    pub fn encoder(&self) -> TerminalEncoder {
        TerminalEncoder::new()
            .marks(Marks::new(self.marks.set, self.marks.background))
            .invert(self.marks.invert)
    }
}
