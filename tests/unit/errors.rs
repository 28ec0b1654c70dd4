//! Inputs rejected before any distance is computed.

use super::common::code;
use weighted_levenshtein::{
    batch, dam_lev, lev, osa, Component, Metric, PairCosts, SymbolCosts, WeightError, WeightTable,
};

#[test]
fn test_non_ascii_symbol_with_default_alphabet() {
    let weights = WeightTable::default();
    let err = lev("abé", "abe", &weights).unwrap_err();
    assert_eq!(
        err,
        WeightError::InvalidSymbol {
            symbol: 0xE9,
            position: Some(2),
            alphabet_size: 128,
        }
    );
}

#[test]
fn test_every_metric_checks_the_target_too() {
    let weights = WeightTable::default();
    for metric in Metric::ALL {
        let err = metric.distance("abc", "ab€", &weights).unwrap_err();
        assert!(
            matches!(err, WeightError::InvalidSymbol { symbol: 0x20AC, position: Some(2), .. }),
            "{}: {:?}",
            metric,
            err
        );
    }
}

#[test]
fn test_wider_alphabet_accepts_latin1() {
    let weights = WeightTable::new(256);
    assert_eq!(lev("abé", "abe", &weights), Ok(1.0));
}

#[test]
fn test_short_insert_table() {
    let weights = WeightTable::default().with_insert_costs(SymbolCosts::ones(64));
    assert_eq!(
        osa("a", "b", &weights),
        Err(WeightError::MalformedWeightTable {
            component: Component::Insert,
            expected: 128,
            found: 64,
        })
    );
}

#[test]
fn test_non_square_transpose_table() {
    let rows = vec![vec![1.0; 127]; 128];
    let weights = WeightTable::default().with_transpose_costs(PairCosts::from_rows(rows).unwrap());
    assert_eq!(
        dam_lev("ab", "ba", &weights),
        Err(WeightError::MalformedWeightTable {
            component: Component::Transpose,
            expected: 128,
            found: 127,
        })
    );
}

#[test]
fn test_malformed_table_reported_even_for_empty_inputs() {
    let weights = WeightTable::default().with_delete_costs(SymbolCosts::ones(3));
    assert!(matches!(
        lev("", "", &weights),
        Err(WeightError::MalformedWeightTable { component: Component::Delete, .. })
    ));
}

#[test]
fn test_rejected_costs() {
    let mut weights = WeightTable::default();
    assert!(matches!(
        weights.set_insert_cost(code('a'), -1.0),
        Err(WeightError::InvalidCost { .. })
    ));
    assert!(matches!(
        weights.set_substitute_cost(code('a'), code('b'), f64::NAN),
        Err(WeightError::InvalidCost { .. })
    ));
    assert!(matches!(
        weights.set_transpose_cost(200, code('b'), 1.0),
        Err(WeightError::InvalidSymbol { symbol: 200, position: None, .. })
    ));
}

#[test]
fn test_batch_fails_before_computing() {
    let weights = WeightTable::default();
    let pairs = [("ab", "ba"), ("ok", "fine"), ("bad", "ñ")];
    let err = batch::distances(Metric::Osa, &pairs, &weights).unwrap_err();
    assert!(matches!(err, WeightError::InvalidSymbol { symbol: 0xF1, .. }));
}
