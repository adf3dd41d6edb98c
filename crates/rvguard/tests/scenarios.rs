//! End-to-end scenarios through the public entry points.

use rvguard::{ParseError, SemanticVersion, build_range, check_expression};

#[test]
fn scenario_bounded_range_is_compliant() {
    let range = build_range("1.3", "1.5").unwrap();
    assert!(check_expression(&range, ">= 1.3, < 2.0", ()).unwrap().compliant);
}

#[test]
fn scenario_open_lower_bound_below_min_is_not_compliant() {
    let range = build_range("1.3", "1.5").unwrap();
    assert_eq!(range.floor_exclusion(), &SemanticVersion::new(1, 2, 999));
    assert!(!check_expression(&range, ">= 1.0", ()).unwrap().compliant);
}

#[test]
fn scenario_pessimistic_minor_is_compliant() {
    let range = build_range("1.3", "1.5").unwrap();
    assert!(check_expression(&range, "~> 1.4", ()).unwrap().compliant);
}

#[test]
fn scenario_malformed_operand_is_named() {
    let range = build_range("1.3", "1.5").unwrap();
    let err = check_expression(&range, ">= abc", ()).unwrap_err();
    assert!(matches!(err, ParseError::InvalidClause { .. }));
    assert!(err.to_string().contains("\"abc\""));
}

#[test]
fn scenario_minor_zero_minimum() {
    let range = build_range("1.0", "2.0").unwrap();
    assert_eq!(range.floor_exclusion(), &SemanticVersion::new(0, 999, 999));
    assert!(check_expression(&range, ">= 1.0", ()).unwrap().compliant);
}

#[test]
fn zero_minimum_is_a_config_error() {
    let err = build_range("0.0", "1.5").unwrap_err();
    assert!(err.to_string().contains("cannot be reduced below zero"));
}
