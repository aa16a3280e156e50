//! Verify command implementation.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Args;

use circle_pack::config::{DEFAULT_EDGE_MARGIN, DEFAULT_MIN_DISTANCE};
use circle_pack::{PatternRecord, PlacementConfig, check_layout, read_svg_layout};

#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Exported SVG, or a `.json` pattern record
    pub input: PathBuf,

    /// Required clear gap to the canvas edge
    #[arg(long, default_value_t = DEFAULT_EDGE_MARGIN, allow_negative_numbers = true)]
    pub edge_margin: f64,

    /// Required clear gap between circles
    #[arg(long, default_value_t = DEFAULT_MIN_DISTANCE, allow_negative_numbers = true)]
    pub min_distance: f64,
}

/// Execute the verify command.
pub fn cmd_verify(args: VerifyArgs) -> Result<()> {
    let config = PlacementConfig::default()
        .with_edge_margin(args.edge_margin)
        .with_min_distance(args.min_distance);
    config.validate()?;

    let is_record = args
        .input
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let (canvas, circles) = if is_record {
        let record = PatternRecord::load(&args.input)
            .with_context(|| format!("failed to load pattern record {}", args.input.display()))?;
        (record.canvas(), record.placed_circles)
    } else {
        let svg = fs::read_to_string(&args.input)
            .with_context(|| format!("failed to read {}", args.input.display()))?;
        read_svg_layout(&svg).with_context(|| format!("failed to parse {}", args.input.display()))?
    };

    let violations = check_layout(canvas, &circles, &config);
    if violations.is_empty() {
        println!(
            "OK: {} circles on {} × {}, no violations (edge margin {}, min distance {})",
            circles.len(),
            canvas.width,
            canvas.height,
            config.edge_margin,
            config.min_distance
        );
        return Ok(());
    }

    for violation in &violations {
        println!("  {}", violation);
    }
    bail!(
        "{} violation(s) in {} circles from {}",
        violations.len(),
        circles.len(),
        args.input.display()
    );
}
