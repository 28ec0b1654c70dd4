// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::Symbol;
use crate::weights::WeightTable;

/// Tolerance for comparing distances built from non-integer costs.
pub const TOLERANCE: f64 = 1e-9;

/// Symbol code of a character.
pub fn code(c: char) -> Symbol {
    Symbol::from(c)
}

/// Assert two distances agree within [`TOLERANCE`].
#[track_caller]
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() <= TOLERANCE,
        "expected {}, got {}",
        expected,
        actual
    );
}

/// ASCII table with every entry explicitly set to 1.0, mirroring a caller that
/// materializes all four components up front.
pub fn explicit_unit_weights() -> WeightTable {
    let mut weights = WeightTable::default();
    weights.insert_costs_mut();
    weights.delete_costs_mut();
    weights.substitute_costs_mut();
    weights.transpose_costs_mut();
    weights
}

/// A symmetric table over the first `alphabet_size` symbols with costs drawn
/// from `costs` (cycled), zero substitution diagonal.
pub fn symmetric_weights(alphabet_size: usize, costs: &[f64]) -> WeightTable {
    let mut weights = WeightTable::new(alphabet_size);
    let mut next = costs.iter().copied().cycle();
    let mut take = || next.next().unwrap_or(1.0);

    for s in 0..alphabet_size as Symbol {
        let indel = take();
        weights
            .set_insert_cost(s, indel)
            .and_then(|()| weights.set_delete_cost(s, indel))
            .expect("costs in range");
    }
    for a in 0..alphabet_size as Symbol {
        weights.set_substitute_cost(a, a, 0.0).expect("diagonal");
        for b in (a + 1)..alphabet_size as Symbol {
            let sub = take();
            let tra = take();
            weights.set_substitute_cost(a, b, sub).expect("pair in range");
            weights.set_substitute_cost(b, a, sub).expect("pair in range");
            weights.set_transpose_cost(a, b, tra).expect("pair in range");
            weights.set_transpose_cost(b, a, tra).expect("pair in range");
        }
    }
    weights
}
