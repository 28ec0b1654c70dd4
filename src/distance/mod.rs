// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Weighted edit distances.
//!
//! Three engines, one skeleton. Each fills a cost matrix row by row where cell
//! `(i, j)` holds the cheapest way to turn `x[..i]` into `y[..j]`, then returns
//! the bottom-right cell:
//!
//! | Engine                   | Operations                               | Matrix       |
//! |--------------------------|------------------------------------------|--------------|
//! | [`lev`]                  | insert, delete, substitute               | 2 rows       |
//! | [`osa`]                  | + adjacent transposition, edited once    | 3 rows       |
//! | [`dam_lev`]              | + transposition composable with edits    | full         |
//!
//! Every engine validates the weight table and both sequences before allocating
//! anything, so the only failures are up-front [`WeightError`]s.

mod damerau;
mod levenshtein;
mod osa;

pub use damerau::dam_lev;
pub use levenshtein::{lev, lev_within};
pub use osa::osa;

pub(crate) use damerau::damerau_impl;
pub(crate) use levenshtein::levenshtein_impl;
pub(crate) use osa::osa_impl;

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::contracts::check_result;
use crate::error::WeightError;
use crate::types::{Sequence, Symbol};
use crate::weights::WeightTable;

/// Validate the table and both inputs, returning their symbol buffers.
pub(crate) fn prepare<X, Y>(
    metric: Metric,
    x: &X,
    y: &Y,
    weights: &WeightTable,
) -> Result<(Vec<Symbol>, Vec<Symbol>), WeightError>
where
    X: Sequence + ?Sized,
    Y: Sequence + ?Sized,
{
    let x = x.symbols();
    let y = y.symbols();
    check_inputs(metric, &x, &y, weights)?;
    Ok((x, y))
}

/// Table shape first, then each sequence against the alphabet.
pub(crate) fn check_inputs(
    metric: Metric,
    x: &[Symbol],
    y: &[Symbol],
    weights: &WeightTable,
) -> Result<(), WeightError> {
    let checked = weights
        .validate()
        .and_then(|()| weights.check_sequence(x))
        .and_then(|()| weights.check_sequence(y));
    match &checked {
        Ok(()) => trace!(%metric, source_len = x.len(), target_len = y.len(), "computing distance"),
        Err(error) => debug!(%metric, %error, "rejected distance inputs"),
    }
    checked
}

/// Which distance to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Metric {
    /// Insert, delete, substitute.
    #[cfg_attr(feature = "serde", serde(rename = "lev", alias = "levenshtein"))]
    Levenshtein,
    /// Levenshtein plus restricted adjacent transposition.
    #[cfg_attr(feature = "serde", serde(rename = "osa", alias = "optimal-string-alignment"))]
    Osa,
    /// Levenshtein plus unrestricted transposition.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "dam-lev", alias = "damerau-levenshtein")
    )]
    DamerauLevenshtein,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::Levenshtein, Metric::Osa, Metric::DamerauLevenshtein];

    /// Compute this metric between `x` and `y`.
    pub fn distance<X, Y>(self, x: &X, y: &Y, weights: &WeightTable) -> Result<f64, WeightError>
    where
        X: Sequence + ?Sized,
        Y: Sequence + ?Sized,
    {
        match self {
            Metric::Levenshtein => lev(x, y, weights),
            Metric::Osa => osa(x, y, weights),
            Metric::DamerauLevenshtein => dam_lev(x, y, weights),
        }
    }

    /// Run the engine on sequences already checked by [`check_inputs`].
    pub(crate) fn distance_checked(self, x: &[Symbol], y: &[Symbol], weights: &WeightTable) -> f64 {
        let distance = match self {
            Metric::Levenshtein => levenshtein_impl(x, y, weights),
            Metric::Osa => osa_impl(x, y, weights),
            Metric::DamerauLevenshtein => damerau_impl(x, y, weights),
        };
        check_result(distance, x, y, weights);
        distance
    }

    /// Short name, as accepted by [`Metric::from_str`].
    pub fn as_str(self) -> &'static str {
        match self {
            Metric::Levenshtein => "lev",
            Metric::Osa => "osa",
            Metric::DamerauLevenshtein => "dam-lev",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an unrecognised metric name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMetric(pub String);

impl fmt::Display for UnknownMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown metric '{}' (expected lev, osa or dam-lev)", self.0)
    }
}

impl std::error::Error for UnknownMetric {}

impl FromStr for Metric {
    type Err = UnknownMetric;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lev" | "levenshtein" => Ok(Metric::Levenshtein),
            "osa" | "optimal-string-alignment" => Ok(Metric::Osa),
            "dam-lev" | "dam_lev" | "damerau" | "damerau-levenshtein" => {
                Ok(Metric::DamerauLevenshtein)
            }
            _ => Err(UnknownMetric(s.to_string())),
        }
    }
}
