//! Tests for loose-JSON field validation

use core_kernel::fields::{is_alpha, require_alpha, require_int, require_number, require_string};
use core_kernel::CoreError;
use proptest::prelude::*;
use serde_json::{json, Value};

#[test]
fn missing_field_reads_as_null_and_fails() {
    let payload = json!({ "name": "John Doe" });
    let absent = payload.get("policyholder_id").unwrap_or(&Value::Null);
    let err = require_int(absent, "Policyholder ID must be a number").unwrap_err();
    assert!(matches!(err, CoreError::Validation(_)));
    assert_eq!(err.message(), "Policyholder ID must be a number");
}

#[test]
fn int_rejects_strings_and_booleans() {
    assert!(require_int(&json!("101"), "m").is_err());
    assert!(require_int(&json!(true), "m").is_err());
    assert!(require_int(&json!(null), "m").is_err());
}

#[test]
fn number_rejects_non_numeric() {
    assert!(require_number(&json!("5000"), "m").is_err());
    assert!(require_number(&json!({"amount": 5000}), "m").is_err());
}

#[test]
fn string_accepts_any_text() {
    assert_eq!(
        require_string(&json!("John Doe 3rd"), "m").unwrap(),
        "John Doe 3rd"
    );
    assert!(require_string(&json!(42), "m").is_err());
}

#[test]
fn alpha_rejects_spaces_and_punctuation() {
    assert!(require_alpha(&json!("Health Insurance"), "m").is_err());
    assert!(require_alpha(&json!("Auto-Theft"), "m").is_err());
    assert!(require_alpha(&json!("Pending"), "m").is_ok());
}

#[test]
fn alpha_accepts_unicode_letters() {
    assert!(is_alpha("Sant\u{e9}"));
}

proptest! {
    #[test]
    fn any_i64_round_trips_through_require_int(n in any::<i64>()) {
        prop_assert_eq!(require_int(&json!(n), "m").unwrap(), n);
    }

    #[test]
    fn ascii_letter_strings_pass_alpha(s in "[A-Za-z]{1,24}") {
        prop_assert!(require_alpha(&json!(s), "m").is_ok());
    }

    #[test]
    fn strings_with_a_digit_fail_alpha(prefix in "[A-Za-z]{0,8}", d in 0u8..=9, suffix in "[A-Za-z]{0,8}") {
        let s = format!("{prefix}{d}{suffix}");
        prop_assert!(require_alpha(&json!(s), "m").is_err());
    }

    #[test]
    fn finite_floats_pass_require_number(x in prop::num::f64::NORMAL) {
        prop_assert!(require_number(&json!(x), "m").is_ok());
    }
}
