// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Weighted Levenshtein distance.
//!
//! Wagner-Fischer with per-symbol costs and two rolling rows. The bounded
//! variant [`lev_within`] abandons the DP as soon as a whole row exceeds the
//! budget: costs are non-negative, so no later row can come back under it.

use crate::contracts::check_result;
use crate::error::WeightError;
use crate::types::{Sequence, Symbol};
use crate::weights::WeightTable;

use super::{prepare, Metric};

/// Weighted Levenshtein distance between `x` and `y`.
///
/// ```
/// use weighted_levenshtein::{lev, WeightTable};
///
/// let weights = WeightTable::default();
/// assert_eq!(lev("1234", "12", &weights).unwrap(), 2.0);
/// assert_eq!(lev("1111", "1", &weights).unwrap(), 3.0);
/// ```
pub fn lev<X, Y>(x: &X, y: &Y, weights: &WeightTable) -> Result<f64, WeightError>
where
    X: Sequence + ?Sized,
    Y: Sequence + ?Sized,
{
    let (x, y) = prepare(Metric::Levenshtein, x, y, weights)?;
    Ok(Metric::Levenshtein.distance_checked(&x, &y, weights))
}

/// Is the weighted Levenshtein distance at most `max`?
///
/// Returns `Some(distance)` when it is, `None` otherwise. Two rows, plus an
/// early exit once the cheapest cell of a row is over budget.
pub fn lev_within<X, Y>(
    x: &X,
    y: &Y,
    weights: &WeightTable,
    max: f64,
) -> Result<Option<f64>, WeightError>
where
    X: Sequence + ?Sized,
    Y: Sequence + ?Sized,
{
    let (x, y) = prepare(Metric::Levenshtein, x, y, weights)?;
    let n = y.len();

    let mut prev = first_row(&y, weights);
    if x.is_empty() {
        return Ok(Some(prev[n]).filter(|&d| d <= max));
    }
    let mut curr = vec![0.0; n + 1];

    for &a in &x {
        let delete = weights.del(a);
        curr[0] = prev[0] + delete;
        let mut min_row = curr[0];

        for (j, &b) in y.iter().enumerate() {
            let substitute = if a == b { 0.0 } else { weights.sub(a, b) };
            curr[j + 1] = (prev[j + 1] + delete)
                .min(curr[j] + weights.ins(b))
                .min(prev[j] + substitute);
            min_row = min_row.min(curr[j + 1]);
        }

        if min_row > max {
            return Ok(None);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    let distance = prev[n];
    check_result(distance, &x, &y, weights);
    Ok(Some(distance).filter(|&d| d <= max))
}

/// Row 0: the cost of inserting each prefix of `y`.
pub(crate) fn first_row(y: &[Symbol], weights: &WeightTable) -> Vec<f64> {
    let mut row = Vec::with_capacity(y.len() + 1);
    row.push(0.0);
    let mut acc = 0.0;
    for &b in y {
        acc += weights.ins(b);
        row.push(acc);
    }
    row
}

pub(crate) fn levenshtein_impl(x: &[Symbol], y: &[Symbol], weights: &WeightTable) -> f64 {
    let n = y.len();
    let mut prev = first_row(y, weights);
    let mut curr = vec![0.0; n + 1];

    for &a in x {
        let delete = weights.del(a);
        curr[0] = prev[0] + delete;
        for (j, &b) in y.iter().enumerate() {
            let substitute = if a == b { 0.0 } else { weights.sub(a, b) };
            curr[j + 1] = (prev[j + 1] + delete) // deletion
                .min(curr[j] + weights.ins(b)) // insertion
                .min(prev[j] + substitute); // substitution or match
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}
