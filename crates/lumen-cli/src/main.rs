//! lumen - inspect 8-bit intensity mappings
//!
//! Prints the transfer table a mapping resolves to, or maps individual
//! sample values, without touching any image file.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "lumen")]
#[command(author, version, about = "Inspect 8-bit intensity mappings")]
#[command(long_about = "
Resolve an intensity mapping (piecewise-linear curve, log transform,
negative, gamma, threshold, brightness/contrast) and inspect the result.

Examples:
  lumen table                                   # default piecewise stretch
  lumen table -m piecewise --r 0,70,150,255 --s 0,50,200,255
  lumen table -m log --max 100 --format csv
  lumen eval -m negative 0 128 255
  lumen eval --config curve.yaml 10 110 250
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the 256-entry transfer table of a mapping
    #[command(visible_alias = "t")]
    Table(TableArgs),

    /// Map individual sample values
    #[command(visible_alias = "e")]
    Eval(EvalArgs),
}

/// Mapping selection shared by all commands.
#[derive(Args)]
struct MappingArgs {
    /// Mapping config (YAML); overrides the mapping flags below
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Mode: piecewise, log, negative, gamma, threshold, brightness_contrast
    #[arg(short, long, default_value = "piecewise")]
    mode: String,

    /// Piecewise input levels (comma separated)
    #[arg(long = "r", value_delimiter = ',', allow_negative_numbers = true)]
    r_vals: Option<Vec<i64>>,

    /// Piecewise output levels (comma separated)
    #[arg(long = "s", value_delimiter = ',', allow_negative_numbers = true)]
    s_vals: Option<Vec<i64>>,

    /// Gamma exponent
    #[arg(short, long)]
    gamma: Option<f64>,

    /// Threshold level (samples above become 255)
    #[arg(short, long)]
    threshold: Option<i64>,

    /// Brightness offset in levels
    #[arg(short, long, allow_negative_numbers = true)]
    brightness: Option<f64>,

    /// Contrast gain
    #[arg(long)]
    contrast: Option<f64>,
}

#[derive(Args)]
struct TableArgs {
    #[command(flatten)]
    mapping: MappingArgs,

    /// Image maximum to assume for the log transform
    #[arg(long, default_value = "255")]
    max: u8,

    /// Output format: plain, csv
    #[arg(short, long, default_value = "plain")]
    format: String,
}

#[derive(Args)]
struct EvalArgs {
    #[command(flatten)]
    mapping: MappingArgs,

    /// Image maximum for the log transform (default: largest given sample)
    #[arg(long)]
    max: Option<u8>,

    /// Sample values (0-255)
    #[arg(required = true)]
    samples: Vec<u8>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    match cli.command {
        Commands::Table(args) => commands::table::run(args),
        Commands::Eval(args) => commands::eval::run(args),
    }
}
