//! Property-based tests for passform-validator.

use passform_validator::prelude::*;
use proptest::prelude::*;

// ============================================================================
// IDEMPOTENCY: validate(x) == validate(x)
// ============================================================================

proptest! {
    #[test]
    fn length_range_idempotent(s in ".*") {
        let v = length_range(5, 50).unwrap();
        prop_assert_eq!(v.validate(&*s), v.validate(&*s));
    }

    #[test]
    fn email_shape_idempotent(s in ".*") {
        let v = email_shape();
        prop_assert_eq!(v.validate(&*s), v.validate(&*s));
    }
}

// ============================================================================
// COMBINATOR LAWS
// ============================================================================

proptest! {
    #[test]
    fn and_fails_iff_either_fails(s in ".{0,30}") {
        let a = min_length(3);
        let b = max_length(10);
        let combined = a.and(b);

        let a_ok = a.validate(&*s).is_ok();
        let b_ok = b.validate(&*s).is_ok();
        prop_assert_eq!(combined.validate(&*s).is_ok(), a_ok && b_ok);
    }

    #[test]
    fn with_message_preserves_outcome(s in ".{0,12}") {
        let plain = min_length(6);
        let wrapped = min_length(6).with_message("too short");
        prop_assert_eq!(plain.validate(&*s).is_ok(), wrapped.validate(&*s).is_ok());
    }

    #[test]
    fn equals_field_matches_string_equality(a in ".{0,8}", b in ".{0,8}") {
        let rule = EqualsField::new("other", &b);
        prop_assert_eq!(rule.validate(&*a).is_ok(), a == b);
        prop_assert_eq!(DiffersFrom::new(&b).validate(&*a).is_ok(), a != b);
    }
}

// ============================================================================
// SHAPE PROPERTIES
// ============================================================================

proptest! {
    #[test]
    fn email_shape_never_accepts_whitespace(
        local in "[a-z]{1,5}",
        space in "[ \t\n]",
        domain in "[a-z]{1,5}",
    ) {
        let candidate = format!("{local}{space}@{domain}.com");
        prop_assert!(email_shape().validate(&*candidate).is_err());
    }

    #[test]
    fn email_shape_accepts_simple_addresses(
        local in "[a-z0-9._]{1,10}",
        domain in "[a-z0-9]{1,10}",
        tld in "[a-z]{2,4}",
    ) {
        let candidate = format!("{local}@{domain}.{tld}");
        prop_assert!(email_shape().validate(&*candidate).is_ok());
    }
}
