//! circle-pack - generate non-overlapping circle patterns
//!
//! Usage:
//!   circle-pack generate -W 800 -H 600 -c 100:5:#FF0000 -o out.svg
//!   circle-pack generate --config recipe.yaml --png out.png
//!   circle-pack render saved.json -o out.svg
//!   circle-pack verify out.svg
//!   circle-pack benchmark -W 500 -H 500 -c 50:20:red -n 100

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cli;

use cli::{BenchmarkArgs, GenerateArgs, RenderArgs, VerifyArgs};

/// Generate non-overlapping circle patterns.
#[derive(Parser)]
#[command(name = "circle-pack")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a new pattern and export it as SVG (or JSON)
    Generate(GenerateArgs),
    /// Re-export a saved pattern record without regenerating
    Render(RenderArgs),
    /// Check an exported SVG or saved record for overlaps and margin violations
    Verify(VerifyArgs),
    /// Time repeated generation runs and report how many circles fit
    Benchmark(BenchmarkArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse().command {
        Commands::Generate(args) => cli::cmd_generate(args),
        Commands::Render(args) => cli::cmd_render(args),
        Commands::Verify(args) => cli::cmd_verify(args),
        Commands::Benchmark(args) => cli::cmd_benchmark(args),
    }
}
