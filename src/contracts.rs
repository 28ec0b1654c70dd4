// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the distance engines.
//!
//! Debug-mode assertions that every engine result must satisfy. They compile to
//! nothing in release builds and trip the moment a recurrence goes wrong while
//! tests run.
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function             | Property                                     |
//! |-------------------------------|----------------------------------------------|
//! | `check_distance_finite`       | Result is finite and `≥ 0`                   |
//! | `check_distance_upper_bound`  | Result `≤` delete-all-then-insert-all cost   |
//! | `check_identity`              | `x == y` implies distance `0`                |

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

const _: () = {
    use crate::types::{DEFAULT_ALPHABET_SIZE, MAX_ALPHABET_SIZE};

    // The default alphabet must be constructible.
    assert!(DEFAULT_ALPHABET_SIZE > 0);
    assert!(DEFAULT_ALPHABET_SIZE <= MAX_ALPHABET_SIZE);
};

use crate::types::Symbol;
use crate::weights::WeightTable;

/// Slack for float comparisons in contracts; sums of many costs drift.
const EPSILON: f64 = 1e-9;

/// Check that a distance is a usable cost.
///
/// # Panics (debug builds only)
/// Panics if `distance` is negative, NaN or infinite.
#[inline]
pub fn check_distance_finite(distance: f64) {
    debug_assert!(
        distance.is_finite() && distance >= 0.0,
        "Contract violation: distance {} is not a finite non-negative cost",
        distance
    );
}

/// Check that a distance never exceeds the trivial edit script: delete every
/// symbol of `x`, then insert every symbol of `y`.
///
/// # Panics (debug builds only)
/// Panics if `distance` exceeds that script's cost.
#[inline]
pub fn check_distance_upper_bound(distance: f64, x: &[Symbol], y: &[Symbol], weights: &WeightTable) {
    if cfg!(debug_assertions) {
        let bound: f64 =
            x.iter().map(|&s| weights.del(s)).sum::<f64>() + y.iter().map(|&s| weights.ins(s)).sum::<f64>();
        debug_assert!(
            distance <= bound + EPSILON * (1.0 + bound),
            "Contract violation: distance {} exceeds delete-all/insert-all bound {}",
            distance,
            bound
        );
    }
}

/// Check that identical sequences are at distance zero.
///
/// # Panics (debug builds only)
/// Panics if `x == y` and `distance != 0`.
#[inline]
pub fn check_identity(distance: f64, x: &[Symbol], y: &[Symbol]) {
    debug_assert!(
        x != y || distance == 0.0,
        "Contract violation: identical sequences at distance {}",
        distance
    );
}

/// All engine result contracts at once.
#[inline]
pub(crate) fn check_result(distance: f64, x: &[Symbol], y: &[Symbol], weights: &WeightTable) {
    check_distance_finite(distance);
    check_distance_upper_bound(distance, x, y, weights);
    check_identity(distance, x, y);
}
