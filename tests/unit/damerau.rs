//! Unrestricted Damerau-Levenshtein with prefix-summed gap costs.

use super::common::{assert_close, code, explicit_unit_weights, weights_with, UNIT_CASES};
use weighted_levenshtein::{dam_lev, osa, Symbol, WeightTable, MAX_ALPHABET_SIZE};

#[test]
fn test_unit_costs() {
    for weights in [WeightTable::default(), explicit_unit_weights()] {
        assert_eq!(dam_lev("", "", &weights), Ok(0.0));
        assert_eq!(dam_lev("", "a", &weights), Ok(1.0));
        assert_eq!(dam_lev("a", "", &weights), Ok(1.0));
        assert_eq!(dam_lev("a", "b", &weights), Ok(1.0));
        assert_eq!(dam_lev("a", "ab", &weights), Ok(1.0));
        assert_eq!(dam_lev("ab", "ba", &weights), Ok(1.0));
        assert_eq!(dam_lev("ab", "bca", &weights), Ok(2.0));
        assert_eq!(dam_lev("bca", "ab", &weights), Ok(2.0));
        assert_eq!(dam_lev("ab", "bdca", &weights), Ok(3.0));
        assert_eq!(dam_lev("bdca", "ab", &weights), Ok(3.0));
    }
}

#[test]
fn test_known_cases() {
    let weights = WeightTable::default();
    for &(x, y, _, _, expected) in UNIT_CASES {
        assert_eq!(dam_lev(x, y, &weights), Ok(expected), "dam_lev({:?}, {:?})", x, y);
    }
}

#[test]
fn test_inserted_gap_uses_insert_weights() {
    let mut weights = explicit_unit_weights();
    weights.set_insert_cost(code('c'), 1.9).unwrap();

    assert_close(dam_lev("ab", "bca", &weights).unwrap(), 2.9);
    assert_close(dam_lev("ab", "bdca", &weights).unwrap(), 3.9);
    assert_eq!(dam_lev("bca", "ab", &weights), Ok(2.0));
}

#[test]
fn test_deleted_gap_uses_delete_weights() {
    let mut weights = explicit_unit_weights();
    weights.set_delete_cost(code('c'), 1.9).unwrap();

    assert_close(dam_lev("bca", "ab", &weights).unwrap(), 2.9);
    assert_close(dam_lev("bdca", "ab", &weights).unwrap(), 3.9);
    assert_eq!(dam_lev("ab", "bca", &weights), Ok(2.0));
}

#[test]
fn test_transpose_weight_is_keyed_by_source_order() {
    let weights = weights_with(|w| w.set_transpose_cost(code('a'), code('b'), 1.5).unwrap());
    assert_eq!(dam_lev("ab", "bca", &weights), Ok(2.5));
    assert_eq!(dam_lev("bca", "ab", &weights), Ok(2.0));

    let weights = weights_with(|w| w.set_transpose_cost(code('b'), code('a'), 1.5).unwrap());
    assert_eq!(dam_lev("ab", "bca", &weights), Ok(2.0));
    assert_eq!(dam_lev("bca", "ab", &weights), Ok(2.5));
}

#[test]
fn test_never_exceeds_osa() {
    let weights = WeightTable::default();
    for (x, y) in [("ca", "abc"), ("abcdef", "badcfe"), ("tuesday", "teusdya")] {
        assert!(dam_lev(x, y, &weights).unwrap() <= osa(x, y, &weights).unwrap());
    }
}

#[test]
fn test_full_byte_alphabet() {
    let weights = WeightTable::new(MAX_ALPHABET_SIZE);
    let x: Vec<u8> = vec![0, 255, 7];
    let y: Vec<u8> = vec![255, 0, 7];
    assert_eq!(dam_lev(x.as_slice(), y.as_slice(), &weights), Ok(1.0));

    let codes: Vec<Symbol> = vec![255, 9, 0];
    assert_eq!(dam_lev(codes.as_slice(), &[0u32, 9, 255][..], &weights), Ok(2.0));
}
