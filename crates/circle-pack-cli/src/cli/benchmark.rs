//! Benchmark command implementation.

use std::time::{Duration, Instant};

use anyhow::{Context, Result, bail};
use clap::Args;
use serde::Serialize;

use circle_pack::{generate_layout, requested_total};

use super::common::{PatternArgs, make_rng};

#[derive(Args, Debug)]
pub struct BenchmarkArgs {
    #[command(flatten)]
    pub pattern: PatternArgs,

    /// Number of generation runs
    #[arg(short = 'n', long, default_value_t = 50)]
    pub trials: usize,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct BenchmarkReport {
    trials: usize,
    requested: usize,
    mean_placed: f64,
    min_placed: usize,
    max_placed: usize,
    complete_runs: usize,
    total_ms: f64,
    mean_ms: f64,
}

/// Execute the benchmark command.
///
/// With `--seed`, run `i` uses seed `seed + i`, so the whole benchmark replays.
pub fn cmd_benchmark(args: BenchmarkArgs) -> Result<()> {
    if args.trials == 0 {
        bail!("--trials must be at least 1");
    }

    let request = args.pattern.resolve()?;
    let requested = requested_total(&request.specs);
    let mut shared_rng = make_rng(None);

    let mut placed_counts = Vec::with_capacity(args.trials);
    let mut elapsed = Duration::ZERO;

    for i in 0..args.trials {
        let start = Instant::now();
        let layout = match request.seed {
            Some(seed) => {
                let mut rng = make_rng(Some(seed.wrapping_add(i as u64)));
                generate_layout(request.canvas, &request.specs, &request.config, &mut rng)
            }
            None => generate_layout(request.canvas, &request.specs, &request.config, &mut shared_rng),
        }?;
        elapsed += start.elapsed();
        placed_counts.push(layout.placed());
    }

    let total: usize = placed_counts.iter().sum();
    let total_ms = elapsed.as_secs_f64() * 1000.0;
    let report = BenchmarkReport {
        trials: args.trials,
        requested,
        mean_placed: total as f64 / args.trials as f64,
        min_placed: placed_counts.iter().copied().min().unwrap_or(0),
        max_placed: placed_counts.iter().copied().max().unwrap_or(0),
        complete_runs: placed_counts.iter().filter(|&&p| p == requested).count(),
        total_ms,
        mean_ms: total_ms / args.trials as f64,
    };

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("failed to serialize report")?
        );
        return Ok(());
    }

    println!();
    println!("═══════════════════════════════════════════════");
    println!("  CIRCLE PACK BENCHMARK: {}", request.name.to_uppercase());
    println!("═══════════════════════════════════════════════");
    println!("  Canvas: {} × {}", request.canvas.width, request.canvas.height);
    println!("  Circles requested: {}", report.requested);
    println!("  Trials: {}", report.trials);
    println!(
        "  Placed (mean / min / max): {:.1} / {} / {}",
        report.mean_placed, report.min_placed, report.max_placed
    );
    println!("  Complete runs: {} / {}", report.complete_runs, report.trials);
    println!("  Time (ms): {:.2}", report.total_ms);
    println!("  Avg per run: {:.3}ms", report.mean_ms);
    println!("═══════════════════════════════════════════════");
    Ok(())
}
