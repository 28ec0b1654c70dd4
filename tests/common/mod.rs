//! Shared test utilities and fixtures.

#![allow(dead_code)]

use weighted_levenshtein::{Symbol, WeightTable};

// Re-export canonical test utilities from weighted_levenshtein::testing
pub use weighted_levenshtein::testing::{assert_close, code, explicit_unit_weights};

// ============================================================================
// FIXTURES
// ============================================================================

/// Pairs whose unit-cost distances are known for all three metrics.
///
/// Columns: source, target, lev, osa, dam_lev.
pub const UNIT_CASES: &[(&str, &str, f64, f64, f64)] = &[
    ("", "", 0.0, 0.0, 0.0),
    ("", "abc", 3.0, 3.0, 3.0),
    ("abc", "", 3.0, 3.0, 3.0),
    ("abc", "abc", 0.0, 0.0, 0.0),
    ("1234", "14", 2.0, 2.0, 2.0),
    ("1234", "1243", 2.0, 1.0, 1.0),
    ("ab", "ba", 2.0, 1.0, 1.0),
    ("ca", "abc", 3.0, 3.0, 2.0),
    ("ab", "bca", 3.0, 3.0, 2.0),
    ("kitten", "sitting", 3.0, 3.0, 3.0),
    ("a cat", "an act", 3.0, 2.0, 2.0),
];

/// Build an ASCII table through a closure, failing the test on any setter error.
pub fn weights_with(configure: impl FnOnce(&mut WeightTable)) -> WeightTable {
    let mut weights = WeightTable::default();
    configure(&mut weights);
    weights
}

/// Symbol codes of a string.
pub fn codes(s: &str) -> Vec<Symbol> {
    s.chars().map(code).collect()
}
