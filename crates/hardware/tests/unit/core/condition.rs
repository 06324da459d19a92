//! Condition code tests.

use std::cmp::Ordering;

use proptest::prelude::*;
use rstest::rstest;
use s360_core::core::arch::ConditionCode;

#[rstest]
#[case(1, 1, ConditionCode::Equal)]
#[case(-1, 1, ConditionCode::Less)]
#[case(1, -1, ConditionCode::Greater)]
#[case(i32::MIN, i32::MAX, ConditionCode::Less)]
fn compare_is_signed(#[case] a: i32, #[case] b: i32, #[case] cc: ConditionCode) {
    assert_eq!(ConditionCode::compare(a, b), cc);
}

#[test]
fn numeric_values_match_mask_bits() {
    assert_eq!(ConditionCode::Equal.bits(), 0);
    assert_eq!(ConditionCode::Less.bits(), 1);
    assert_eq!(ConditionCode::Greater.bits(), 2);
}

#[test]
fn default_is_zero() {
    assert_eq!(ConditionCode::default(), ConditionCode::Equal);
}

proptest! {
    #[test]
    fn compare_agrees_with_signed_ordering(a in any::<i32>(), b in any::<i32>()) {
        let expected = match a.cmp(&b) {
            Ordering::Equal => ConditionCode::Equal,
            Ordering::Less => ConditionCode::Less,
            Ordering::Greater => ConditionCode::Greater,
        };
        prop_assert_eq!(ConditionCode::compare(a, b), expected);
        prop_assert_eq!(ConditionCode::from_result(a), ConditionCode::compare(a, 0));
    }
}

#[test]
fn displays_as_number() {
    assert_eq!(ConditionCode::Greater.to_string(), "2");
}
