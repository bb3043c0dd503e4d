//! shape-scene: assemble a figure from primitive shapes
//!
//! Builds the demo scene in three stages and prints the canvas after each:
//! - Generated: every shape at its initial position
//! - Prepared: hat rotated, brim stretched, beard flipped
//! - Assembled: brim, hat and beard stacked on the face
//!
//! Run: `shape-scene --stage all`

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use shape_canvas::prelude::*;

/// shape-scene: assemble a figure from primitive shapes
#[derive(Parser, Debug)]
#[command(name = "shape-scene")]
#[command(author = "PAIML Team")]
#[command(version)]
#[command(about = "Render the composed-shapes demo scene as text", long_about = None)]
struct Cli {
    /// Config file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Canvas width in cells (overrides config)
    #[arg(long)]
    width: Option<i32>,

    /// Canvas height in cells (overrides config)
    #[arg(long)]
    height: Option<i32>,

    /// Swap the set and background glyphs (overrides config)
    #[arg(long)]
    invert: bool,

    /// Which stage(s) to print
    #[arg(short, long, value_enum, default_value_t = Stage::All)]
    stage: Stage,

    /// Render only the inverted-corner crossed circle
    #[arg(long)]
    bad_input: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Stage {
    Generated,
    Prepared,
    Assembled,
    All,
}

impl Stage {
    fn shows(self, stage: Self) -> bool {
        self == Self::All || self == stage
    }

    fn banner(self) -> &'static str {
        match self {
            Self::Generated => "=== Generated... ===",
            Self::Prepared => "=== Prepared... ===",
            Self::Assembled | Self::All => "=== Ready! ===",
        }
    }
}

/// Handles of the shapes the stages manipulate.
struct Figure {
    hat: ShapeId,
    brim: ShapeId,
    face: ShapeId,
    beard: ShapeId,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { tracing::Level::DEBUG } else { tracing::Level::WARN };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();

    let config = resolve_config(&cli)?;
    info!(width = config.canvas.width, height = config.canvas.height, "canvas configured");

    let mut scene = Scene::with_config(&config).context("invalid scene configuration")?;
    let mut out = io::stdout().lock();

    if cli.bad_input {
        scene.add(CrossedCircle::new(Point::new(10, 0), Point::new(0, 10)));
        scene.refresh(&mut out)?;
        writeln!(out)?;
        return Ok(());
    }

    let figure = generate(&mut scene);
    show(&mut scene, &mut out, cli.stage, Stage::Generated)?;

    prepare(&mut scene, &figure)?;
    show(&mut scene, &mut out, cli.stage, Stage::Prepared)?;

    assemble(&mut scene, &figure)?;
    show(&mut scene, &mut out, cli.stage, Stage::Assembled)?;

    Ok(())
}

/// Config precedence: `--config` > per-user file > defaults, then CLI size flags.
fn resolve_config(cli: &Cli) -> Result<SceneConfig> {
    let mut config = match &cli.config {
        Some(path) => SceneConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => SceneConfig::default_path().map(SceneConfig::load_or_default).unwrap_or_default(),
    };

    if let Some(width) = cli.width {
        config.canvas.width = width;
    }
    if let Some(height) = cli.height {
        config.canvas.height = height;
    }
    if cli.invert {
        config.marks.invert = true;
    }

    config.validate()?;
    Ok(config)
}

fn generate(scene: &mut Scene) -> Figure {
    let figure = Figure {
        hat: scene.add(Rectangle::new(Point::new(0, 0), Point::new(14, 5))),
        brim: scene.add(Line::horizontal(Point::new(0, 15), 17)),
        face: scene.add(Face::new(Point::new(15, 10), Point::new(27, 18))),
        beard: scene.add(HalfCircle::new(Point::new(40, 10), Point::new(50, 20))),
    };

    for (up_left, down_right) in [
        ((33, 30), (37, 26)),
        ((16, 44), (26, 34)),
        ((5, 33), (12, 26)),
        ((18, 11), (24, 1)),
    ] {
        scene.add(CrossedCircle::new(up_left.into(), down_right.into()));
    }

    figure
}

fn prepare(scene: &mut Scene, figure: &Figure) -> Result<()> {
    if let Some(hat) = scene.rotatable_mut(figure.hat)? {
        hat.rotate_right();
    }
    scene.resize(figure.brim, 2)?;
    scene.resize(figure.face, 2)?;
    if let Some(beard) = scene.reflectable_mut(figure.beard)? {
        beard.flip_vertically();
    }
    Ok(())
}

fn assemble(scene: &mut Scene, figure: &Figure) -> Result<()> {
    scene.up(figure.brim, figure.face)?;
    scene.up(figure.hat, figure.brim)?;
    scene.down(figure.beard, figure.face)?;
    for id in [figure.hat, figure.brim, figure.face, figure.beard] {
        scene.move_by(id, 0, 6)?;
    }
    Ok(())
}

/// Refresh and print one stage. A shape that leaves the canvas ends the pass;
/// the partial canvas is still printed and the next stage proceeds.
fn show<W: Write>(scene: &mut Scene, out: &mut W, selected: Stage, stage: Stage) -> Result<()> {
    if !selected.shows(stage) {
        return Ok(());
    }

    if let Err(err) = scene.redraw() {
        error!(stage = stage.banner(), %err, "draw pass aborted");
    }
    write!(out, "{}", scene.encoder().render(scene.canvas()))?;
    writeln!(out, "{}", stage.banner())?;
    Ok(())
}
