// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Command-line entry point for scalemaker.
//!
//! Batch pipeline: load all definitions, validate the whole set, report
//! every diagnostic, then emit all interval files. Only Error-severity
//! diagnostics produce a nonzero exit; warnings never block output.

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};

use scalemaker::config::Config;
use scalemaker::diagnostics::Diagnostics;
use scalemaker::music::extend;
use scalemaker::output;
use scalemaker::parser;
use scalemaker::validate;

/// Compile scale definition files into pitch interval files
#[derive(Parser)]
#[command(name = "scalemaker", version)]
struct Args {
    /// The file containing the scale definitions
    #[arg(long)]
    scalefile: PathBuf,

    /// The folder to write the interval files to
    #[arg(long)]
    outfolder: PathBuf,

    /// Optional TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Honor /-prefixed cycle-start markers
    #[arg(long)]
    enforce_cycle_start: bool,

    /// Print each scale extended to N pitches from root C
    #[arg(long, value_name = "N")]
    preview: Option<usize>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if args.enforce_cycle_start {
        config.enforce_cycle_start = true;
    }

    let mut diagnostics = Diagnostics::new();
    let scales = parser::load_definitions(&args.scalefile, &config, &mut diagnostics)?;
    info!(
        "loaded {} scale definitions from {:?}",
        scales.len(),
        args.scalefile
    );

    diagnostics.extend(validate::validate(&scales));

    for diagnostic in diagnostics.iter() {
        eprintln!("{}: {}", diagnostic.severity(), diagnostic);
    }

    if let Some(count) = args.preview {
        for scale in &scales {
            let extended: Vec<_> = extend::extend(scale, 0, count).collect();
            println!("{}: {:?}", scale.name(), extended);
        }
    }

    output::write_scale_files(&scales, &args.outfolder)?;
    info!(
        "wrote {} interval files to {:?}",
        scales.len(),
        args.outfolder
    );

    if diagnostics.has_errors() {
        eprintln!(
            "{} error(s), {} warning(s)",
            diagnostics.error_count(),
            diagnostics.warning_count()
        );
        process::exit(1);
    }
    Ok(())
}
