// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the wlev command-line interface.
//!
//! Three subcommands: `distance` for one pair, `batch` for tab-separated pairs
//! on stdin, and `check-weights` to validate a weights file before using it.

pub mod display;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use weighted_levenshtein::Metric;

#[derive(Parser)]
#[command(
    name = "wlev",
    about = "Weighted Levenshtein, OSA and Damerau-Levenshtein distances",
    version
)]
pub struct Cli {
    /// Log filter directive (RUST_LOG takes precedence when set)
    #[arg(long, global = true, default_value = "warn")]
    pub log: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute the distance between two strings
    Distance {
        /// String to transform
        source: String,

        /// String to transform it into
        target: String,

        #[command(flatten)]
        options: DistanceOptions,
    },

    /// Compute distances for tab-separated `source<TAB>target` lines on stdin
    ///
    /// Results are printed one per line in input order. With the `parallel`
    /// feature the pairs are computed on all cores.
    Batch {
        #[command(flatten)]
        options: DistanceOptions,
    },

    /// Validate a weights file and summarize what it configures
    CheckWeights {
        /// Path to a JSON weights file
        file: PathBuf,
    },
}

#[derive(Args)]
pub struct DistanceOptions {
    /// Distance to compute
    #[arg(short, long, value_enum, default_value_t = MetricArg::Lev)]
    pub metric: MetricArg,

    /// JSON weights file (unlisted costs default to 1.0)
    #[arg(short, long)]
    pub weights: Option<PathBuf>,

    /// Alphabet size for unit weights (ignored with --weights)
    #[arg(long, conflicts_with = "weights")]
    pub alphabet_size: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum MetricArg {
    /// Levenshtein: insert, delete, substitute
    Lev,
    /// Optimal string alignment: adds restricted adjacent transposition
    Osa,
    /// Damerau-Levenshtein: adds unrestricted transposition
    DamLev,
}

impl From<MetricArg> for Metric {
    fn from(arg: MetricArg) -> Self {
        match arg {
            MetricArg::Lev => Metric::Levenshtein,
            MetricArg::Osa => Metric::Osa,
            MetricArg::DamLev => Metric::DamerauLevenshtein,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Plain text
    Text,
    /// One JSON object per result
    Json,
}
