// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the three distance engines.
//!
//! Random byte sequences over the full 256-symbol alphabet, with a handful of
//! random costs written into the table. Every call must succeed, and the
//! results must be finite, ordered dam_lev <= osa <= lev, and zero on equal
//! inputs.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use weighted_levenshtein::{dam_lev, lev, lev_within, osa, WeightTable};

/// One cost override: which component, which symbols, what price.
#[derive(Debug, Arbitrary)]
struct Override {
    component: u8,
    first: u8,
    second: u8,
    /// Quarter units, so costs stay in [0, 64).
    quarters: u8,
}

#[derive(Debug, Arbitrary)]
struct DistanceInput {
    source: Vec<u8>,
    target: Vec<u8>,
    overrides: Vec<Override>,
}

fuzz_target!(|input: DistanceInput| {
    // Cap lengths to avoid timeouts in the quadratic engines
    let x = &input.source[..input.source.len().min(64)];
    let y = &input.target[..input.target.len().min(64)];

    let mut weights = WeightTable::new(256);
    for o in input.overrides.iter().take(32) {
        let cost = f64::from(o.quarters) * 0.25;
        let (a, b) = (u32::from(o.first), u32::from(o.second));
        let set = match o.component % 4 {
            0 => weights.set_insert_cost(a, cost),
            1 => weights.set_delete_cost(a, cost),
            2 => weights.set_substitute_cost(a, b, cost),
            _ => weights.set_transpose_cost(a, b, cost),
        };
        assert!(set.is_ok(), "every byte is inside a 256 alphabet");
    }

    let l = lev(x, y, &weights).expect("byte input fits the alphabet");
    let o = osa(x, y, &weights).expect("byte input fits the alphabet");
    let d = dam_lev(x, y, &weights).expect("byte input fits the alphabet");

    assert!(l.is_finite() && o.is_finite() && d.is_finite());
    assert!(d <= o && o <= l, "dam_lev {} osa {} lev {}", d, o, l);

    assert_eq!(lev_within(x, y, &weights, l).ok().flatten(), Some(l));

    if x == y {
        assert_eq!((l, o, d), (0.0, 0.0, 0.0));
    }
});
