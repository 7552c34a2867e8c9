//! String length validators
//!
//! By default, length is measured in Unicode scalar values (chars).
//! Use the `.bytes()` constructors for byte-length counting.

use crate::foundation::{Validate, ValidationError};

// ============================================================================
// LENGTH MODE
// ============================================================================

/// How to count string length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LengthMode {
    /// Count bytes.
    Bytes,
    /// Count Unicode scalar values.
    #[default]
    Chars,
}

impl LengthMode {
    /// Measures the length of a string according to this mode.
    #[inline]
    #[must_use]
    pub fn measure(self, input: &str) -> usize {
        match self {
            LengthMode::Bytes => input.len(),
            LengthMode::Chars => input.chars().count(),
        }
    }
}

// ============================================================================
// NOT EMPTY
// ============================================================================

crate::validator! {
    /// Validates that a string is not empty.
    ///
    /// Whitespace counts as content; trim before validating when that matters.
    pub NotEmpty for str;
    rule(input) { !input.is_empty() }
    error(input) { ValidationError::new("not_empty", "String must not be empty") }
    fn not_empty();
}

// ============================================================================
// MIN LENGTH
// ============================================================================

crate::validator! {
    /// Validates that a string has at least a minimum length.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MinLength { min: usize, mode: LengthMode } for str;
    rule(self, input) { self.mode.measure(input) >= self.min }
    error(self, input) { ValidationError::min_length("", self.min, self.mode.measure(input)) }
    new(min: usize) { Self { min, mode: LengthMode::Chars } }
    fn min_length(min: usize);
}

impl MinLength {
    /// Creates a minimum length validator that counts bytes.
    #[must_use]
    pub fn bytes(min: usize) -> Self {
        Self {
            min,
            mode: LengthMode::Bytes,
        }
    }
}

// ============================================================================
// MAX LENGTH
// ============================================================================

crate::validator! {
    /// Validates that a string does not exceed a maximum length.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MaxLength { max: usize, mode: LengthMode } for str;
    rule(self, input) { self.mode.measure(input) <= self.max }
    error(self, input) { ValidationError::max_length("", self.max, self.mode.measure(input)) }
    new(max: usize) { Self { max, mode: LengthMode::Chars } }
    fn max_length(max: usize);
}

impl MaxLength {
    /// Creates a maximum length validator that counts bytes.
    #[must_use]
    pub fn bytes(max: usize) -> Self {
        Self {
            max,
            mode: LengthMode::Bytes,
        }
    }
}

// ============================================================================
// LENGTH RANGE
// ============================================================================

/// Validates that a string length is within an inclusive range.
///
/// Reports a single `length_range` error for both ends, unlike
/// `min_length().and(max_length())` which distinguishes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LengthRange {
    /// Minimum length (inclusive).
    pub min: usize,
    /// Maximum length (inclusive).
    pub max: usize,
    /// How to count length.
    pub mode: LengthMode,
}

impl LengthRange {
    /// Creates a new length range validator (counts Unicode chars).
    ///
    /// Returns an error if `min > max`.
    pub fn new(min: usize, max: usize) -> Result<Self, ValidationError> {
        if min > max {
            return Err(ValidationError::new("invalid_range", "min must be <= max"));
        }
        Ok(Self {
            min,
            max,
            mode: LengthMode::Chars,
        })
    }
}

impl Validate for LengthRange {
    type Input = str;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        let len = self.mode.measure(input);
        if (self.min..=self.max).contains(&len) {
            Ok(())
        } else {
            Err(ValidationError::new(
                "length_range",
                format!(
                    "String length must be between {} and {}",
                    self.min, self.max
                ),
            )
            .with_param("min", self.min.to_string())
            .with_param("max", self.max.to_string())
            .with_param("actual", len.to_string()))
        }
    }
}

/// Creates a length range validator.
pub fn length_range(min: usize, max: usize) -> Result<LengthRange, ValidationError> {
    LengthRange::new(min, max)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("hello", true)]
    #[case("hello world", true)]
    #[case("hi", false)]
    #[case("", false)]
    fn test_min_length(#[case] input: &str, #[case] ok: bool) {
        assert_eq!(MinLength::new(5).validate(input).is_ok(), ok);
    }

    #[rstest]
    #[case("hello", true)]
    #[case("helloworld", true)]
    #[case("verylongstring", false)]
    fn test_max_length(#[case] input: &str, #[case] ok: bool) {
        assert_eq!(MaxLength::new(10).validate(input).is_ok(), ok);
    }

    #[test]
    fn test_min_length_error_params() {
        let err = min_length(6).validate("abc12").unwrap_err();
        assert_eq!(err.code, "min_length");
        assert_eq!(err.param("min"), Some("6"));
        assert_eq!(err.param("actual"), Some("5"));
    }

    #[test]
    fn test_length_range_boundaries() {
        let validator = LengthRange::new(5, 50).unwrap();
        assert!(validator.validate("a@b.c").is_ok());
        assert!(validator.validate(&"x".repeat(50)).is_ok());
        assert!(validator.validate("a@bc").is_err());

        let err = validator.validate(&"x".repeat(51)).unwrap_err();
        assert_eq!(err.code, "length_range");
        assert_eq!(err.param("actual"), Some("51"));
    }

    #[test]
    fn test_length_range_invalid() {
        assert!(length_range(10, 5).is_err());
    }

    #[test]
    fn test_not_empty() {
        assert!(not_empty().validate("hello").is_ok());
        assert!(NotEmpty.validate(" ").is_ok()); // whitespace is not empty
        assert!(NotEmpty.validate("").is_err());
    }

    #[test]
    fn test_unicode_handling() {
        // Default mode counts Unicode chars, not bytes
        let validator = MinLength::new(5);
        assert!(validator.validate("\u{1f44b}\u{1f30d}").is_err()); // 2 chars < 5

        let byte_validator = MinLength::bytes(5);
        assert!(byte_validator.validate("\u{1f44b}\u{1f30d}").is_ok()); // 8 bytes >= 5

        assert!(MaxLength::new(5).validate("h\u{e9}llo").is_ok());
        assert!(MaxLength::bytes(5).validate("h\u{e9}llo").is_err());
    }

    #[test]
    fn test_composition() {
        use crate::foundation::ValidateExt;

        let validator = min_length(6).and(max_length(60));
        assert!(validator.validate("secret1").is_ok());
        assert_eq!(validator.validate("abc").unwrap_err().code, "min_length");
        assert_eq!(
            validator.validate(&"x".repeat(61)).unwrap_err().code,
            "max_length"
        );
    }
}
