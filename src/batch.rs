// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Many distances at once.
//!
//! Every distance call is independent and the weight table is read-only, so a
//! batch is embarrassingly parallel: with the `parallel` feature each pair (or
//! each row of a pairwise matrix) runs on the rayon pool against one shared
//! `&WeightTable`. Without it the same code runs sequentially.
//!
//! Inputs are checked before any distance is computed. The first bad input in
//! order fails the whole batch, so the result never mixes distances and errors.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::debug;

use crate::distance::{check_inputs, Metric};
use crate::error::WeightError;
use crate::types::{Sequence, Symbol};
use crate::weights::WeightTable;

fn to_symbols<S: Sequence>(items: &[S]) -> Vec<Vec<Symbol>> {
    items.iter().map(Sequence::symbols).collect()
}

/// Distance for each `(source, target)` pair, in input order.
///
/// ```
/// use weighted_levenshtein::{batch, Metric, WeightTable};
///
/// let pairs = [("ab", "ba"), ("kitten", "sitting")];
/// let distances = batch::distances(Metric::Osa, &pairs, &WeightTable::default()).unwrap();
/// assert_eq!(distances, vec![1.0, 3.0]);
/// ```
pub fn distances<X, Y>(
    metric: Metric,
    pairs: &[(X, Y)],
    weights: &WeightTable,
) -> Result<Vec<f64>, WeightError>
where
    X: Sequence + Sync,
    Y: Sequence + Sync,
{
    weights.validate()?;
    let prepared: Vec<(Vec<Symbol>, Vec<Symbol>)> = pairs
        .iter()
        .map(|(x, y)| {
            let (x, y) = (x.symbols(), y.symbols());
            check_inputs(metric, &x, &y, weights).map(|()| (x, y))
        })
        .collect::<Result<_, _>>()?;

    debug!(%metric, pairs = prepared.len(), "computing batch");

    #[cfg(feature = "parallel")]
    let iter = prepared.par_iter();
    #[cfg(not(feature = "parallel"))]
    let iter = prepared.iter();

    Ok(iter
        .map(|(x, y)| metric.distance_checked(x, y, weights))
        .collect())
}

/// Full `sources × targets` distance matrix: `result[i][j]` is the distance
/// from `sources[i]` to `targets[j]`.
pub fn pairwise<X, Y>(
    metric: Metric,
    sources: &[X],
    targets: &[Y],
    weights: &WeightTable,
) -> Result<Vec<Vec<f64>>, WeightError>
where
    X: Sequence + Sync,
    Y: Sequence + Sync,
{
    weights.validate()?;
    let sources = to_symbols(sources);
    let targets = to_symbols(targets);
    for x in &sources {
        weights.check_sequence(x)?;
    }
    for y in &targets {
        weights.check_sequence(y)?;
    }

    debug!(
        %metric,
        sources = sources.len(),
        targets = targets.len(),
        "computing pairwise matrix"
    );

    #[cfg(feature = "parallel")]
    let rows = sources.par_iter();
    #[cfg(not(feature = "parallel"))]
    let rows = sources.iter();

    Ok(rows
        .map(|x| {
            targets
                .iter()
                .map(|y| metric.distance_checked(x, y, weights))
                .collect::<Vec<f64>>()
        })
        .collect())
}
