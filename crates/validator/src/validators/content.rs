//! String content validators

use std::sync::LazyLock;

use crate::foundation::ValidationError;

/// `local@domain.tld`: exactly one `@`, no whitespace anywhere, and a `.`
/// after the `@` with text on both sides of it.
static EMAIL_SHAPE_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email shape pattern is valid")
});

// ============================================================================
// EMAIL SHAPE VALIDATOR
// ============================================================================

crate::validator! {
    /// Validates the coarse shape of an email address.
    ///
    /// This is a shape check for form feedback, not an RFC 5322 parser.
    pub EmailShape for str;
    rule(input) { EMAIL_SHAPE_REGEX.is_match(input) }
    error(input) { ValidationError::invalid_format("", "email") }
    fn email_shape();
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;
    use rstest::rstest;

    #[rstest]
    #[case("a@b.co")]
    #[case("user@example.com")]
    #[case("first.last@sub.domain.org")]
    #[case("a@b.c.d")]
    fn test_email_shape_accepts(#[case] input: &str) {
        assert!(email_shape().validate(input).is_ok());
    }

    #[rstest]
    #[case("not-an-email")]
    #[case("@example.com")]
    #[case("user@")]
    #[case("user@example")]
    #[case("user@.com")]
    #[case("user@example.")]
    #[case("us er@example.com")]
    #[case("a@b@c.com")]
    #[case("")]
    fn test_email_shape_rejects(#[case] input: &str) {
        let err = EmailShape.validate(input).unwrap_err();
        assert_eq!(err.code, "invalid_format");
        assert_eq!(err.param("expected"), Some("email"));
    }
}
