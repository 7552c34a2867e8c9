//! Integration tests for the prelude module.
//!
//! Verifies that `use passform_validator::prelude::*` brings in everything
//! the form engine composes its field rules from.

use passform_validator::foundation::validate_with_all;
use passform_validator::prelude::*;
use pretty_assertions::assert_eq;

#[test]
fn prelude_import_provides_validate_trait() {
    let v = min_length(3).and(max_length(20));
    assert!(v.validate("hello").is_ok());
    assert!(v.validate("hi").is_err());
}

#[test]
fn first_failure_wins_across_a_chain() {
    let v = not_empty()
        .with_message("required")
        .and(min_length(6).with_message("too short"))
        .and(max_length(60).with_message("too long"));

    assert_eq!(v.validate("").unwrap_err().message, "required");
    assert_eq!(v.validate("abc").unwrap_err().message, "too short");
    assert_eq!(v.validate(&"x".repeat(61)).unwrap_err().message, "too long");
    assert!(v.validate("secret1").is_ok());
}

#[test]
fn conditional_cross_field_rule() {
    let current = "secret1";
    let v = DiffersFrom::new(current).when(|_: &str| !current.is_empty());
    assert!(v.validate("secret2").is_ok());
    assert_eq!(v.validate("secret1").unwrap_err().code, "same_as");
}

#[test]
fn validate_with_all_collects_every_failure() {
    let min = min_length(6);
    let shape = email_shape();
    let rules: [&dyn Validate<Input = str>; 2] = [&min, &shape];

    let errors = validate_with_all("abc", &rules).unwrap_err();
    let codes: Vec<&str> = errors.errors().iter().map(|e| e.code.as_ref()).collect();
    assert_eq!(codes, vec!["min_length", "invalid_format"]);

    assert!(validate_with_all("a@b.com", &rules).is_ok());
}
