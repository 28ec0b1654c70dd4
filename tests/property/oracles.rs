//! Reference oracles for differential testing.
//!
//! Full-matrix recurrences written for clarity rather than speed. They read
//! costs through the checked public lookups, so a disagreement points at the
//! engines' row bookkeeping rather than at table access.

use weighted_levenshtein::{Symbol, WeightTable};

fn ins(weights: &WeightTable, s: Symbol) -> f64 {
    weights.insert_cost(s).unwrap()
}

fn del(weights: &WeightTable, s: Symbol) -> f64 {
    weights.delete_cost(s).unwrap()
}

fn sub(weights: &WeightTable, a: Symbol, b: Symbol) -> f64 {
    if a == b {
        0.0
    } else {
        weights.substitute_cost(a, b).unwrap()
    }
}

fn tra(weights: &WeightTable, a: Symbol, b: Symbol) -> f64 {
    weights.transpose_cost(a, b).unwrap()
}

/// The whole `(|x|+1) × (|y|+1)` table with row 0 and column 0 filled in.
fn border(x: &[Symbol], y: &[Symbol], weights: &WeightTable) -> Vec<Vec<f64>> {
    let mut d = vec![vec![0.0; y.len() + 1]; x.len() + 1];
    for i in 1..=x.len() {
        d[i][0] = d[i - 1][0] + del(weights, x[i - 1]);
    }
    for j in 1..=y.len() {
        d[0][j] = d[0][j - 1] + ins(weights, y[j - 1]);
    }
    d
}

fn edit_step(d: &[Vec<f64>], x: &[Symbol], y: &[Symbol], i: usize, j: usize, w: &WeightTable) -> f64 {
    (d[i - 1][j] + del(w, x[i - 1]))
        .min(d[i][j - 1] + ins(w, y[j - 1]))
        .min(d[i - 1][j - 1] + sub(w, x[i - 1], y[j - 1]))
}

/// Wagner-Fischer over the full matrix.
pub fn oracle_lev(x: &[Symbol], y: &[Symbol], weights: &WeightTable) -> f64 {
    let mut d = border(x, y, weights);
    for i in 1..=x.len() {
        for j in 1..=y.len() {
            d[i][j] = edit_step(&d, x, y, i, j, weights);
        }
    }
    d[x.len()][y.len()]
}

/// Wagner-Fischer plus a swap of the last two symbols of each prefix.
pub fn oracle_osa(x: &[Symbol], y: &[Symbol], weights: &WeightTable) -> f64 {
    let mut d = border(x, y, weights);
    for i in 1..=x.len() {
        for j in 1..=y.len() {
            d[i][j] = edit_step(&d, x, y, i, j, weights);
            if i > 1 && j > 1 && x[i - 1] == y[j - 2] && x[i - 2] == y[j - 1] {
                let swap = d[i - 2][j - 2] + tra(weights, x[i - 2], x[i - 1]);
                d[i][j] = d[i][j].min(swap);
            }
        }
    }
    d[x.len()][y.len()]
}

/// Unrestricted transpositions, trying every earlier matching pair.
///
/// For a swap ending at `(i, j)`, `k` is any row whose symbol equals
/// `y[j-1]` and `l` any column whose symbol equals `x[i-1]`. Everything
/// between them is deleted from `x` and inserted into `y` symbol by symbol.
pub fn oracle_dam_lev(x: &[Symbol], y: &[Symbol], weights: &WeightTable) -> f64 {
    let mut d = border(x, y, weights);
    for i in 1..=x.len() {
        for j in 1..=y.len() {
            let mut best = edit_step(&d, x, y, i, j, weights);
            for k in 1..i {
                if x[k - 1] != y[j - 1] {
                    continue;
                }
                for l in 1..j {
                    if y[l - 1] != x[i - 1] {
                        continue;
                    }
                    let deleted: f64 = x[k..i - 1].iter().map(|&s| del(weights, s)).sum();
                    let inserted: f64 = y[l..j - 1].iter().map(|&s| ins(weights, s)).sum();
                    let swap =
                        d[k - 1][l - 1] + deleted + tra(weights, x[k - 1], x[i - 1]) + inserted;
                    best = best.min(swap);
                }
            }
            d[i][j] = best;
        }
    }
    d[x.len()][y.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::codes;

    #[test]
    fn oracles_are_consistent() {
        let weights = WeightTable::default();
        let (x, y) = (codes("ca"), codes("abc"));
        assert_eq!(oracle_lev(&x, &y, &weights), 3.0);
        assert_eq!(oracle_osa(&x, &y, &weights), 3.0);
        assert_eq!(oracle_dam_lev(&x, &y, &weights), 2.0);
    }
}
