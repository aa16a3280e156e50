//! Common utilities shared across CLI commands.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::{Args, ValueEnum};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, warn};

use circle_pack::{Canvas, CircleSpec, Layout, PlacementConfig, SvgStyle};

use super::recipe::{Recipe, default_background};

/// Output format for generated patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Svg,
    Json,
}

/// Canvas, circle and placement options shared by `generate` and `benchmark`.
#[derive(Args, Debug, Clone)]
pub struct PatternArgs {
    /// YAML recipe with canvas, circles and placement settings
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Canvas width (overrides the recipe)
    #[arg(short = 'W', long, allow_negative_numbers = true)]
    pub width: Option<f64>,

    /// Canvas height (overrides the recipe)
    #[arg(short = 'H', long, allow_negative_numbers = true)]
    pub height: Option<f64>,

    /// Circle type as DIAMETER:COUNT:COLOR; repeat for more types (replaces the recipe's circles)
    #[arg(short = 'c', long = "circle", value_name = "D:N:COLOR")]
    pub circles: Vec<CircleSpec>,

    /// Clear gap between circles and the canvas edge [default: 20]
    #[arg(long, allow_negative_numbers = true)]
    pub edge_margin: Option<f64>,

    /// Clear gap between any two circles [default: 20]
    #[arg(long, allow_negative_numbers = true)]
    pub min_distance: Option<f64>,

    /// Random positions tried per circle before it is dropped [default: 50]
    #[arg(long)]
    pub max_attempts: Option<usize>,

    /// Seed for a reproducible layout (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,
}

/// A fully resolved pattern request: recipe values with flag overrides applied.
#[derive(Debug, Clone)]
pub struct PatternRequest {
    pub name: String,
    pub canvas: Canvas,
    pub specs: Vec<CircleSpec>,
    pub config: PlacementConfig,
    pub seed: Option<u64>,
    pub background: String,
}

impl PatternArgs {
    /// Merge the recipe (if any) with command-line overrides.
    pub fn resolve(&self) -> Result<PatternRequest> {
        let recipe = match &self.config {
            Some(path) => Some(Recipe::load(path)?),
            None => None,
        };

        let width = self.width.or(recipe.as_ref().and_then(|r| r.canvas.width));
        let height = self.height.or(recipe.as_ref().and_then(|r| r.canvas.height));
        let (Some(width), Some(height)) = (width, height) else {
            bail!("canvas size required: pass --width and --height or a --config recipe");
        };

        let specs = if !self.circles.is_empty() {
            self.circles.clone()
        } else {
            recipe.as_ref().map(|r| r.circles.clone()).unwrap_or_default()
        };

        let mut config = recipe.as_ref().map(|r| r.placement).unwrap_or_default();
        if let Some(edge_margin) = self.edge_margin {
            config = config.with_edge_margin(edge_margin);
        }
        if let Some(min_distance) = self.min_distance {
            config = config.with_min_distance(min_distance);
        }
        if let Some(max_attempts) = self.max_attempts {
            config = config.with_max_attempts(max_attempts);
        }

        Ok(PatternRequest {
            name: recipe.as_ref().map(|r| r.name.clone()).unwrap_or_else(|| "pattern".to_string()),
            canvas: Canvas::new(width, height),
            specs,
            config,
            seed: self.seed.or(recipe.as_ref().and_then(|r| r.seed)),
            background: recipe
                .map(|r| r.canvas.background)
                .unwrap_or_else(default_background),
        })
    }
}

impl PatternRequest {
    pub fn style(&self, preview: bool) -> SvgStyle {
        let style = if preview {
            SvgStyle::preview(self.config.edge_margin)
        } else {
            SvgStyle::default()
        };
        style.with_background(self.background.clone())
    }
}

/// Seeded generator when a seed is given, OS entropy otherwise.
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Print the placed/requested summary the way the pattern preview shows it.
pub fn report_layout(layout: &Layout, elapsed: Duration) {
    eprintln!("Canvas: {} × {}", layout.canvas.width, layout.canvas.height);
    eprintln!("Circles placed: {} / {} requested", layout.placed(), layout.requested);
    info!(elapsed_ms = elapsed.as_secs_f64() * 1000.0, "placement finished");

    if layout.requested > 0 && !layout.is_complete() {
        eprintln!(
            "Only {} of {} circles could fit. Try smaller circles, fewer circles, a larger canvas, or another seed.",
            layout.placed(),
            layout.requested
        );
        warn!(
            placed = layout.placed(),
            requested = layout.requested,
            "layout incomplete"
        );
    } else if layout.placed() > 0 {
        eprintln!("All circles placed.");
    }
}

/// Write to a file, or to stdout when no path (or `-`) is given.
pub fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(p) if p != Path::new("-") => {
            fs::write(p, content).with_context(|| format!("failed to write {}", p.display()))?;
            eprintln!("Wrote: {}", p.display());
        }
        _ => print!("{}", content),
    }
    Ok(())
}

/// Rasterize an SVG document to PNG with resvg.
pub fn render_png(svg: &str, canvas: Canvas, scale: f64, path: &Path) -> Result<()> {
    if !(scale.is_finite() && scale > 0.0) {
        bail!("PNG scale must be positive, got {}", scale);
    }

    let options = usvg::Options::default();
    let tree = usvg::Tree::from_str(svg, &options).context("failed to parse generated SVG")?;

    let width = (canvas.width * scale).ceil() as u32;
    let height = (canvas.height * scale).ceil() as u32;
    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .with_context(|| format!("could not create a {}x{} pixmap", width, height))?;

    pixmap.fill(tiny_skia::Color::WHITE);
    let transform = tiny_skia::Transform::from_scale(scale as f32, scale as f32);
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    pixmap
        .save_png(path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    eprintln!("Wrote: {} ({}x{})", path.display(), width, height);
    Ok(())
}
