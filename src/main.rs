// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line entry point.
//!
//! ```text
//! mosaic catalog <INPUT> <OUTPUT> [--config FILE] [--step-limit-factor N]
//! mosaic generate <SIZE> <OUTPUT>
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use legendrian_mosaics::batch::BatchDriver;
use legendrian_mosaics::config::Config;
use legendrian_mosaics::predicates::generate;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mosaic")]
#[command(about = "Catalogue Legendrian knot mosaics by their classical invariants")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Catalogue mosaics, keeping the first of each (knot, tb, rot)
    Catalog {
        /// Mosaics, one per line, headed by the empty mosaic of the target size
        input: PathBuf,
        /// Catalogue output, one entry per line
        output: PathBuf,
        /// Optional JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,
        /// Abandon a walk after this many connections per tile
        #[arg(long)]
        step_limit_factor: Option<usize>,
    },
    /// Enumerate every suitably connected mosaic of a given size
    Generate {
        /// Edge length n of the n×n grid
        #[arg(value_parser = clap::value_parser!(u16).range(1..))]
        size: u16,
        /// Mosaic output, one per line
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let cli = Cli::parse();
    let started = Instant::now();

    match cli.command {
        Commands::Catalog {
            input,
            output,
            config,
            step_limit_factor,
        } => {
            let mut config = match config {
                Some(path) => Config::load(&path)
                    .with_context(|| format!("failed to load config {}", path.display()))?,
                None => Config::default(),
            };
            if let Some(factor) = step_limit_factor {
                config.step_limit_factor = factor;
            }

            let reader = File::open(&input)
                .with_context(|| format!("failed to open input {}", input.display()))?;
            let writer = File::create(&output)
                .with_context(|| format!("failed to create output {}", output.display()))?;

            let mut driver = BatchDriver::new(&config, config.oracle());
            let summary = driver
                .run(BufReader::new(reader), BufWriter::new(writer))
                .with_context(|| format!("cataloguing {} failed", input.display()))?;
            driver.statistics().log();
            println!("{}", summary.knots);
        }
        Commands::Generate { size, output } => {
            let writer = File::create(&output)
                .with_context(|| format!("failed to create output {}", output.display()))?;
            let count = generate(usize::from(size), BufWriter::new(writer))
                .with_context(|| format!("failed to write {}", output.display()))?;
            println!("{}", count);
        }
    }

    info!(elapsed_ms = started.elapsed().as_millis() as u64, "done");
    Ok(())
}
