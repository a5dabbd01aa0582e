//! Tests for error constants
//! This ensures all error constants are referenced and validated

use std::collections::HashSet;

use fixed_array_error::{codes, Error, ErrorCategory};

#[test]
fn test_all_error_constants_are_unique() {
    let mut seen_codes = HashSet::new();

    let all_codes = [codes::INDEX_OUT_OF_RANGE, codes::LENGTH_MISMATCH, codes::UNKNOWN];

    for code in &all_codes {
        assert!(seen_codes.insert(*code), "Duplicate error code: {}", code);
    }
}

#[test]
fn test_error_code_ranges() {
    assert!((1000..2000).contains(&codes::INDEX_OUT_OF_RANGE));
    assert!((2000..3000).contains(&codes::LENGTH_MISMATCH));
    assert!((9000..10000).contains(&codes::UNKNOWN));
}

#[test]
fn test_constant_errors_match_codes() {
    assert_eq!(Error::INDEX_OUT_OF_RANGE.code, codes::INDEX_OUT_OF_RANGE);
    assert_eq!(Error::INDEX_OUT_OF_RANGE.category, ErrorCategory::Memory);
    assert_eq!(Error::LENGTH_MISMATCH.code, codes::LENGTH_MISMATCH);
    assert_eq!(Error::LENGTH_MISMATCH.category, ErrorCategory::Capacity);
    assert_eq!(Error::unknown("u").category, ErrorCategory::Unknown);
}

#[test]
fn test_describe_known_and_unknown_codes() {
    assert_eq!(codes::describe(codes::INDEX_OUT_OF_RANGE), "index out of range");
    assert_eq!(codes::describe(codes::LENGTH_MISMATCH), "length mismatch");
    assert_eq!(codes::describe(codes::UNKNOWN), "unknown error");
    assert_eq!(codes::describe(42), "unknown error");
}
