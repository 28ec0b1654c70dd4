// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Weighted (unrestricted) Damerau-Levenshtein distance.
//!
//! Lowrance-Wagner with weights. A transposition may be separated by other
//! edits: in `ab -> bca` the `a`/`b` swap happens around an inserted `c`. At
//! cell `(i, j)` the engine looks up
//!
//! - `k`: the last row `< i` whose symbol `x[k-1]` equals `y[j-1]`
//!   (`last_row`, one slot per alphabet symbol), and
//! - `l`: the last column `< j` whose symbol `y[l-1]` equals `x[i-1]`
//!   (`last_match_col`, reset every row),
//!
//! and offers the candidate
//!
//! ```text
//! D[k-1][l-1] + delete(x[k..i-1]) + transpose(x[k-1], x[i-1]) + insert(y[l..j-1])
//! ```
//!
//! The skipped symbols are charged their own delete/insert costs, read off prefix
//! sums so each candidate is O(1). The candidate reaches arbitrarily far back,
//! so the whole cost matrix stays resident.

use std::ops::{Index, IndexMut};

use crate::error::WeightError;
use crate::types::{Sequence, Symbol};
use crate::weights::WeightTable;

use super::{prepare, Metric};

/// Weighted Damerau-Levenshtein distance between `x` and `y`.
///
/// ```
/// use weighted_levenshtein::{dam_lev, WeightTable};
///
/// let mut weights = WeightTable::default();
/// assert_eq!(dam_lev("ab", "bca", &weights).unwrap(), 2.0);
///
/// weights.set_insert_cost(b'c'.into(), 1.9).unwrap();
/// assert!((dam_lev("ab", "bca", &weights).unwrap() - 2.9).abs() < 1e-9);
/// ```
pub fn dam_lev<X, Y>(x: &X, y: &Y, weights: &WeightTable) -> Result<f64, WeightError>
where
    X: Sequence + ?Sized,
    Y: Sequence + ?Sized,
{
    let (x, y) = prepare(Metric::DamerauLevenshtein, x, y, weights)?;
    Ok(Metric::DamerauLevenshtein.distance_checked(&x, &y, weights))
}

/// Dense `(rows × cols)` DP table, row-major.
struct CostMatrix {
    cols: usize,
    cells: Vec<f64>,
}

impl CostMatrix {
    fn new(rows: usize, cols: usize) -> Self {
        Self {
            cols,
            cells: vec![0.0; rows * cols],
        }
    }
}

impl Index<(usize, usize)> for CostMatrix {
    type Output = f64;

    #[inline(always)]
    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        &self.cells[i * self.cols + j]
    }
}

impl IndexMut<(usize, usize)> for CostMatrix {
    #[inline(always)]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut f64 {
        &mut self.cells[i * self.cols + j]
    }
}

/// `sums[k]` is the total cost of the first `k` symbols.
fn prefix_sums(symbols: &[Symbol], cost: impl Fn(Symbol) -> f64) -> Vec<f64> {
    let mut sums = Vec::with_capacity(symbols.len() + 1);
    sums.push(0.0);
    let mut acc = 0.0;
    for &s in symbols {
        acc += cost(s);
        sums.push(acc);
    }
    sums
}

pub(crate) fn damerau_impl(x: &[Symbol], y: &[Symbol], weights: &WeightTable) -> f64 {
    let (m, n) = (x.len(), y.len());

    let deleted = prefix_sums(x, |s| weights.del(s));
    let inserted = prefix_sums(y, |s| weights.ins(s));

    let mut d = CostMatrix::new(m + 1, n + 1);
    for i in 1..=m {
        d[(i, 0)] = deleted[i];
    }
    for j in 1..=n {
        d[(0, j)] = inserted[j];
    }

    // 0 = symbol not seen yet; rows are 1-based
    let mut last_row = vec![0usize; weights.alphabet_size()];

    for i in 1..=m {
        let a = x[i - 1];
        let delete = weights.del(a);
        let mut last_match_col = 0;

        for j in 1..=n {
            let b = y[j - 1];
            let k = last_row[b as usize];
            let l = last_match_col;

            let substitute = if a == b {
                last_match_col = j;
                0.0
            } else {
                weights.sub(a, b)
            };

            let mut best = (d[(i - 1, j)] + delete) // deletion
                .min(d[(i, j - 1)] + weights.ins(b)) // insertion
                .min(d[(i - 1, j - 1)] + substitute); // substitution or match

            if k > 0 && l > 0 {
                // x[k-1] == b and y[l-1] == a: swap them, paying for everything in between
                let skipped_deletes = deleted[i - 1] - deleted[k];
                let skipped_inserts = inserted[j - 1] - inserted[l];
                let transposed = d[(k - 1, l - 1)]
                    + skipped_deletes
                    + weights.tra(x[k - 1], a)
                    + skipped_inserts;
                best = best.min(transposed);
            }

            d[(i, j)] = best;
        }

        last_row[a as usize] = i;
    }

    d[(m, n)]
}
