//! Levenshtein with insertion, deletion and substitution weights.

use super::common::{assert_close, code, explicit_unit_weights, UNIT_CASES};
use weighted_levenshtein::{lev, lev_within, WeightTable};

#[test]
fn test_unit_costs() {
    for weights in [WeightTable::default(), explicit_unit_weights()] {
        assert_eq!(lev("1234", "1234", &weights), Ok(0.0));
        assert_eq!(lev("", "1234", &weights), Ok(4.0));
        assert_eq!(lev("1234", "", &weights), Ok(4.0));
        assert_eq!(lev("", "", &weights), Ok(0.0));
        assert_eq!(lev("1234", "12", &weights), Ok(2.0));
        assert_eq!(lev("1234", "14", &weights), Ok(2.0));
        assert_eq!(lev("1111", "1", &weights), Ok(3.0));
    }
}

#[test]
fn test_known_cases() {
    let weights = WeightTable::default();
    for &(x, y, expected, _, _) in UNIT_CASES {
        assert_eq!(lev(x, y, &weights), Ok(expected), "lev({:?}, {:?})", x, y);
    }
}

#[test]
fn test_insert_weight() {
    let mut weights = explicit_unit_weights();
    weights.set_insert_cost(code('a'), 5.0).unwrap();

    assert_eq!(lev("", "a", &weights), Ok(5.0));
    assert_eq!(lev("a", "", &weights), Ok(1.0));
    assert_eq!(lev("", "aa", &weights), Ok(10.0));
    assert_eq!(lev("a", "aa", &weights), Ok(5.0));
    assert_eq!(lev("aa", "a", &weights), Ok(1.0));
    assert_eq!(lev("asdf", "asdf", &weights), Ok(0.0));
    assert_eq!(lev("xyz", "abc", &weights), Ok(3.0));
    assert_eq!(lev("xyz", "axyz", &weights), Ok(5.0));
    assert_eq!(lev("x", "ax", &weights), Ok(5.0));
}

#[test]
fn test_delete_weight() {
    let mut weights = explicit_unit_weights();
    weights.set_delete_cost(code('z'), 7.5).unwrap();

    assert_eq!(lev("", "z", &weights), Ok(1.0));
    assert_eq!(lev("z", "", &weights), Ok(7.5));
    assert_eq!(lev("xyz", "zzxz", &weights), Ok(3.0));
    assert_eq!(lev("zzxzzz", "xyz", &weights), Ok(18.0));
}

#[test]
fn test_substitute_weight() {
    let mut weights = explicit_unit_weights();
    weights.set_substitute_cost(code('a'), code('z'), 1.2).unwrap();
    weights.set_substitute_cost(code('z'), code('a'), 0.1).unwrap();

    assert_close(lev("a", "z", &weights).unwrap(), 1.2);
    assert_close(lev("z", "a", &weights).unwrap(), 0.1);
    assert_eq!(lev("a", "", &weights), Ok(1.0));
    assert_eq!(lev("", "a", &weights), Ok(1.0));
    assert_close(lev("asdf", "zzzz", &weights).unwrap(), 4.2);
    assert_close(lev("asdf", "zz", &weights).unwrap(), 4.0);
    assert_close(lev("asdf", "zsdf", &weights).unwrap(), 1.2);
    assert_close(lev("zsdf", "asdf", &weights).unwrap(), 0.1);
}

#[test]
fn test_cheap_substitution_beats_indel_pair() {
    let mut weights = WeightTable::default();
    weights.set_substitute_cost(code('a'), code('b'), 3.0).unwrap();
    // delete a + insert b is cheaper than the substitution
    assert_eq!(lev("a", "b", &weights), Ok(2.0));
}

#[test]
fn test_byte_and_char_inputs_agree() {
    let weights = WeightTable::new(256);
    assert_eq!(
        lev(b"kitten".as_slice(), b"sitting".as_slice(), &weights),
        lev("kitten", "sitting", &weights)
    );
    let chars: Vec<char> = "flaw".chars().collect();
    assert_eq!(lev(chars.as_slice(), "lawn", &weights), Ok(2.0));
}

#[test]
fn test_within_threshold() {
    let weights = WeightTable::default();
    assert_eq!(lev_within("kitten", "sitting", &weights, 3.0), Ok(Some(3.0)));
    assert_eq!(lev_within("kitten", "sitting", &weights, 2.5), Ok(None));
    assert_eq!(lev_within("", "", &weights, 0.0), Ok(Some(0.0)));
}

#[test]
fn test_within_uses_weights() {
    let mut weights = WeightTable::default();
    weights.set_insert_cost(code('a'), 5.0).unwrap();
    assert_eq!(lev_within("x", "ax", &weights, 4.0), Ok(None));
    assert_eq!(lev_within("x", "ax", &weights, 5.0), Ok(Some(5.0)));
}
