// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Weighted Optimal String Alignment distance.
//!
//! Levenshtein plus one more candidate: when the last two symbols of both
//! prefixes are an adjacent swap (`x[i-2..i] == reverse(y[j-2..j])`), cell
//! `(i, j)` may come from `(i-2, j-2)` for the cost of transposing the pair.
//! The swapped pair is then final. Nothing else may touch either symbol, which
//! is why `osa("ca", "abc")` is 3 and not 2, and why OSA is not a metric: the
//! triangle inequality can fail.
//!
//! Reaching back two rows needs three rolling rows instead of two.

use crate::error::WeightError;
use crate::types::{Sequence, Symbol};
use crate::weights::WeightTable;

use super::levenshtein::first_row;
use super::{prepare, Metric};

/// Weighted OSA distance between `x` and `y`.
///
/// ```
/// use weighted_levenshtein::{osa, WeightTable};
///
/// let mut weights = WeightTable::default();
/// weights.set_transpose_cost(b'a'.into(), b'z'.into(), 1.5).unwrap();
///
/// assert_eq!(osa("az", "za", &weights).unwrap(), 1.5);
/// assert_eq!(osa("az", "zfa", &weights).unwrap(), 3.0);
/// ```
pub fn osa<X, Y>(x: &X, y: &Y, weights: &WeightTable) -> Result<f64, WeightError>
where
    X: Sequence + ?Sized,
    Y: Sequence + ?Sized,
{
    let (x, y) = prepare(Metric::Osa, x, y, weights)?;
    Ok(Metric::Osa.distance_checked(&x, &y, weights))
}

pub(crate) fn osa_impl(x: &[Symbol], y: &[Symbol], weights: &WeightTable) -> f64 {
    let n = y.len();

    let mut two_ago = vec![0.0; n + 1];
    let mut prev = first_row(y, weights);
    let mut curr = vec![0.0; n + 1];

    for i in 1..=x.len() {
        let a = x[i - 1];
        let delete = weights.del(a);
        curr[0] = prev[0] + delete;

        for j in 1..=n {
            let b = y[j - 1];
            let substitute = if a == b { 0.0 } else { weights.sub(a, b) };
            let mut best = (prev[j] + delete) // deletion
                .min(curr[j - 1] + weights.ins(b)) // insertion
                .min(prev[j - 1] + substitute); // substitution or match

            // Adjacent swap: x[i-2] x[i-1] == y[j-1] y[j-2]
            if i > 1 && j > 1 && a == y[j - 2] && x[i - 2] == b {
                best = best.min(two_ago[j - 2] + weights.tra(x[i - 2], a));
            }

            curr[j] = best;
        }

        // Rotate: two_ago <- prev <- curr, recycle the oldest buffer
        std::mem::swap(&mut two_ago, &mut prev);
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}
