// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Output formatting for the wlev CLI.
//!
//! Text output is meant for pipelines: the bare distance for a single pair,
//! `source<TAB>target<TAB>distance` for a batch. JSON output is one object per
//! line either way.

use serde::Serialize;
use weighted_levenshtein::{Metric, PairCosts, SymbolCosts, WeightTable};

use super::Format;

/// One computed distance.
#[derive(Debug, Serialize)]
pub struct DistanceRecord<'a> {
    pub metric: Metric,
    pub source: &'a str,
    pub target: &'a str,
    pub distance: f64,
}

/// Render a single-pair result.
pub fn render_single(record: &DistanceRecord<'_>, format: Format) -> serde_json::Result<String> {
    match format {
        Format::Text => Ok(record.distance.to_string()),
        Format::Json => serde_json::to_string(record),
    }
}

/// Render one line of batch output.
pub fn render_batch_line(record: &DistanceRecord<'_>, format: Format) -> serde_json::Result<String> {
    match format {
        Format::Text => Ok(format!(
            "{}\t{}\t{}",
            record.source, record.target, record.distance
        )),
        Format::Json => serde_json::to_string(record),
    }
}

/// Human summary of a weight table, for `check-weights`.
pub fn describe_weights(weights: &WeightTable) -> String {
    let mut lines = vec![format!("alphabet size: {}", weights.alphabet_size())];

    let symbol_overrides = |costs: Option<&SymbolCosts>| match costs {
        None => "unset (1.0)".to_string(),
        Some(costs) => {
            let changed = costs.as_slice().iter().filter(|&&c| c != 1.0).count();
            format!("{} entries differ from 1.0", changed)
        }
    };
    let pair_overrides = |costs: Option<&PairCosts>| match costs {
        None => "unset (1.0)".to_string(),
        Some(costs) => {
            let changed = costs.as_slice().iter().filter(|&&c| c != 1.0).count();
            format!("{} entries differ from 1.0", changed)
        }
    };

    lines.push(format!("insert:     {}", symbol_overrides(weights.insert_costs())));
    lines.push(format!("delete:     {}", symbol_overrides(weights.delete_costs())));
    lines.push(format!("substitute: {}", pair_overrides(weights.substitute_costs())));
    lines.push(format!("transpose:  {}", pair_overrides(weights.transpose_costs())));
    lines.join("\n")
}
