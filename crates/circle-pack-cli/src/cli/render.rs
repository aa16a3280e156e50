//! Render a saved pattern record without regenerating it.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use circle_pack::{PatternRecord, SvgStyle, layout_to_svg};

use super::common::{render_png, write_output};

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Pattern record JSON written by `generate --record`
    pub record: PathBuf,

    /// Output SVG file (stdout when omitted or `-`)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Preview styling: solid circles and a dashed edge-margin guide
    #[arg(long)]
    pub preview: bool,

    /// Edge margin drawn by the --preview guide
    #[arg(long, default_value_t = circle_pack::config::DEFAULT_EDGE_MARGIN)]
    pub edge_margin: f64,

    /// Background color
    #[arg(long, default_value = "#ffffff")]
    pub background: String,

    /// Also rasterize to this PNG file
    #[arg(long, value_name = "FILE")]
    pub png: Option<PathBuf>,

    /// Pixels per canvas unit for --png
    #[arg(long, default_value_t = 1.0)]
    pub png_scale: f64,
}

/// Execute the render command.
pub fn cmd_render(args: RenderArgs) -> Result<()> {
    let record = PatternRecord::load(&args.record)
        .with_context(|| format!("failed to load pattern record {}", args.record.display()))?;
    let canvas = record.canvas();

    match record.created_at {
        Some(created) => eprintln!("Pattern: {} ({})", record.name, created.format("%Y-%m-%d %H:%M")),
        None => eprintln!("Pattern: {}", record.name),
    }
    eprintln!(
        "Circles: {} / {} requested",
        record.placed_circles.len(),
        record.requested()
    );

    let style = if args.preview {
        SvgStyle::preview(args.edge_margin)
    } else {
        SvgStyle::default()
    }
    .with_background(args.background);

    let svg = layout_to_svg(canvas, &record.placed_circles, &style);
    write_output(args.output.as_deref(), &svg)?;

    if let Some(png) = &args.png {
        render_png(&svg, canvas, args.png_scale, png)?;
    }
    Ok(())
}
