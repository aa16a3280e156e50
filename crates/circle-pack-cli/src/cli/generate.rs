//! Generate command implementation.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Args;
use tracing::debug;

use circle_pack::{PatternRecord, generate_layout, layout_to_svg};

use super::common::{OutputFormat, PatternArgs, make_rng, render_png, report_layout, write_output};

#[derive(Args, Debug)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub pattern: PatternArgs,

    /// Output file (stdout when omitted or `-`)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Svg)]
    pub format: OutputFormat,

    /// Preview styling: solid circles and a dashed edge-margin guide
    #[arg(long)]
    pub preview: bool,

    /// Also rasterize the SVG to this PNG file
    #[arg(long, value_name = "FILE")]
    pub png: Option<PathBuf>,

    /// Pixels per canvas unit for --png
    #[arg(long, default_value_t = 1.0)]
    pub png_scale: f64,

    /// Save the request and placed circles as a JSON pattern record
    #[arg(long, value_name = "FILE")]
    pub record: Option<PathBuf>,

    /// Name stored in the pattern record (defaults to the recipe name)
    #[arg(long)]
    pub name: Option<String>,
}

/// Execute the generate command.
pub fn cmd_generate(args: GenerateArgs) -> Result<()> {
    let request = args.pattern.resolve()?;
    debug!(?request, "resolved pattern request");

    let mut rng = make_rng(request.seed);
    let start = Instant::now();
    let layout = generate_layout(request.canvas, &request.specs, &request.config, &mut rng)?;
    report_layout(&layout, start.elapsed());

    let svg = layout_to_svg(layout.canvas, &layout.circles, &request.style(args.preview));

    match args.format {
        OutputFormat::Svg => write_output(args.output.as_deref(), &svg)?,
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&layout).context("failed to serialize layout")?;
            write_output(args.output.as_deref(), &(json + "\n"))?;
        }
    }

    if let Some(png) = &args.png {
        render_png(&svg, layout.canvas, args.png_scale, png)?;
    }

    if let Some(path) = &args.record {
        let name = args.name.unwrap_or(request.name);
        PatternRecord::from_layout(name, &request.specs, &layout)
            .save(path)
            .with_context(|| format!("failed to save pattern record {}", path.display()))?;
        eprintln!("Wrote: {}", path.display());
    }

    Ok(())
}
