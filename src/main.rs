// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use weighted_levenshtein::{batch, load_weights, Metric, WeightTable};

mod cli;
use cli::display::{describe_weights, render_batch_line, render_single, DistanceRecord};
use cli::{Cli, Commands, DistanceOptions};

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli.log);

    if let Err(e) = run(cli.command) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so stdout stays machine-readable.
fn init_tracing(default_directive: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Distance {
            source,
            target,
            options,
        } => run_distance(&source, &target, &options),
        Commands::Batch { options } => run_batch(&options),
        Commands::CheckWeights { file } => {
            let weights = load_weights(&file)
                .with_context(|| format!("checking {}", file.display()))?;
            println!("✓ {}", file.display());
            println!("{}", describe_weights(&weights));
            Ok(())
        }
    }
}

fn weight_table(options: &DistanceOptions) -> Result<WeightTable> {
    match (&options.weights, options.alphabet_size) {
        (Some(path), _) => {
            let weights = load_weights(path)?;
            info!(path = %path.display(), "using weights file");
            Ok(weights)
        }
        (None, Some(alphabet_size)) => {
            let weights = WeightTable::new(alphabet_size);
            weights.validate()?;
            Ok(weights)
        }
        (None, None) => Ok(WeightTable::default()),
    }
}

fn run_distance(source: &str, target: &str, options: &DistanceOptions) -> Result<()> {
    let weights = weight_table(options)?;
    let metric = Metric::from(options.metric);
    let distance = metric
        .distance(source, target, &weights)
        .with_context(|| format!("{} distance between {:?} and {:?}", metric, source, target))?;

    let record = DistanceRecord {
        metric,
        source,
        target,
        distance,
    };
    println!("{}", render_single(&record, options.format)?);
    Ok(())
}

/// Split `source<TAB>target` lines; empty lines are skipped. Whitespace is
/// part of the sequences, so `"\t"` is the pair `("", "")`.
fn parse_pairs(input: impl BufRead) -> Result<Vec<(String, String)>> {
    let mut pairs = Vec::new();
    // lines() strips "\n" and "\r\n" alike
    for (number, line) in input.lines().enumerate() {
        let line = line.context("reading stdin")?;
        if line.is_empty() {
            continue;
        }
        match line.split_once('\t') {
            Some((source, target)) => pairs.push((source.to_string(), target.to_string())),
            None => bail!("line {}: expected source<TAB>target", number + 1),
        }
    }
    Ok(pairs)
}

fn run_batch(options: &DistanceOptions) -> Result<()> {
    let weights = weight_table(options)?;
    let metric = Metric::from(options.metric);
    let pairs = parse_pairs(io::stdin().lock())?;
    info!(%metric, pairs = pairs.len(), "read batch");

    let distances = batch::distances(metric, &pairs, &weights)?;

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    for ((source, target), distance) in pairs.iter().zip(distances) {
        let record = DistanceRecord {
            metric,
            source,
            target,
            distance,
        };
        writeln!(out, "{}", render_batch_line(&record, options.format)?)?;
    }
    out.flush()?;
    Ok(())
}
