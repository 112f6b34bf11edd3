use pretty_assertions::assert_eq;

use super::*;

#[test]
fn from_error_count_returns_some_for_nonzero() {
    assert!(LoweringErrorGuaranteed::from_error_count(1).is_some());
    assert!(LoweringErrorGuaranteed::from_error_count(100).is_some());
}

#[test]
fn from_error_count_returns_none_for_zero() {
    assert!(LoweringErrorGuaranteed::from_error_count(0).is_none());
}

#[test]
fn display_shows_a_fixed_message() {
    let guarantee = LoweringErrorGuaranteed::from_error_count(1).unwrap();
    assert_eq!(guarantee.to_string(), "lowering error(s) emitted");
}

#[test]
fn guarantee_is_copy_and_eq() {
    let g1 = LoweringErrorGuaranteed::from_error_count(1).unwrap();
    let g2 = g1;
    assert_eq!(g1, g2);
}
