//! rt - demo renders driving the rt-rs kernel
//!
//! Each subcommand builds a scene out of the kernel's pieces and writes a
//! PPM file; all the geometry lives in `rt-math`/`rt-render`, this binary
//! is orchestration only.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "rt")]
#[command(author, version, about = "Ray tracer kernel demo renders")]
#[command(long_about = "
Demo renders driving the rt-rs ray tracer kernel.

Examples:
  rt clock                              # Clock-face plot to clock.ppm
  rt clock --width 400 --height 400 -o face.ppm
  rt sphere                             # Sphere silhouette to sphere.ppm
  rt sphere --shaded                    # Point-light shading
  rt sphere --scale 1,0.5,1 --shaded    # Squashed sphere
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Plot a clock face by rotating a point around the y axis
    Clock(ClockArgs),

    /// Render a single sphere, one ray per pixel
    Sphere(SphereArgs),
}

/// Arguments for the `clock` command.
#[derive(Args)]
struct ClockArgs {
    /// Canvas width
    #[arg(long, default_value = "800")]
    width: u32,

    /// Canvas height
    #[arg(long, default_value = "600")]
    height: u32,

    /// Output PPM file
    #[arg(short, long, default_value = "clock.ppm")]
    output: PathBuf,
}

/// Arguments for the `sphere` command.
#[derive(Args)]
struct SphereArgs {
    /// Canvas size (the render is square)
    #[arg(long, default_value = "400")]
    size: u32,

    /// Scale the sphere by x,y,z before rendering
    #[arg(long, value_parser = parse_scale)]
    scale: Option<[f64; 3]>,

    /// Shade with a point light instead of a flat silhouette
    #[arg(long)]
    shaded: bool,

    /// Output PPM file
    #[arg(short, long, default_value = "sphere.ppm")]
    output: PathBuf,
}

/// Parses a `x,y,z` scale triple.
fn parse_scale(s: &str) -> std::result::Result<[f64; 3], String> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != 3 {
        return Err(format!("expected x,y,z, got '{s}'"));
    }
    let mut out = [0.0; 3];
    for (slot, part) in out.iter_mut().zip(&parts) {
        *slot = part
            .trim()
            .parse()
            .map_err(|_| format!("not a number: '{part}'"))?;
    }
    Ok(out)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    match cli.command {
        Commands::Clock(args) => commands::clock::run(args),
        Commands::Sphere(args) => commands::sphere::run(args),
    }
}
