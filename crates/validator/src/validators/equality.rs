//! Cross-field equality validators
//!
//! Both rules borrow the sibling value they compare against, so they are
//! built per evaluation from the current form values.

use crate::foundation::{Validate, ValidationError};

// ============================================================================
// EQUALS FIELD
// ============================================================================

/// Validates that the input is byte-for-byte identical to another field's value.
///
/// # Examples
///
/// ```rust
/// use passform_validator::prelude::*;
///
/// let rule = EqualsField::new("new_password", "alpha12");
/// assert!(rule.validate("alpha12").is_ok());
/// assert_eq!(rule.validate("beta123").unwrap_err().code, "mismatch");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EqualsField<'a> {
    /// Name of the field being compared against.
    pub other_field: &'static str,
    /// Current value of that field.
    pub other: &'a str,
}

impl<'a> EqualsField<'a> {
    /// Creates a new equality rule against `other_field`'s current value.
    #[must_use]
    pub fn new(other_field: &'static str, other: &'a str) -> Self {
        Self { other_field, other }
    }
}

impl Validate for EqualsField<'_> {
    type Input = str;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if input == self.other {
            Ok(())
        } else {
            Err(ValidationError::new(
                "mismatch",
                format!("Value must match '{}'", self.other_field),
            )
            .with_param("other_field", self.other_field))
        }
    }
}

// ============================================================================
// DIFFERS FROM
// ============================================================================

/// Validates that the input differs from a reference value.
///
/// An empty reference is still compared; gate with `.when(..)` when an empty
/// sibling should disable the rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffersFrom<'a> {
    /// Value the input must not equal.
    pub other: &'a str,
}

impl<'a> DiffersFrom<'a> {
    /// Creates a new inequality rule.
    #[must_use]
    pub fn new(other: &'a str) -> Self {
        Self { other }
    }
}

impl Validate for DiffersFrom<'_> {
    type Input = str;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if input == self.other {
            Err(ValidationError::new(
                "same_as",
                "Value must differ from the previous one",
            ))
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equals_is_exact() {
        let rule = EqualsField::new("new_password", "alpha12");
        assert!(rule.validate("alpha12").is_ok());
        assert!(rule.validate("alpha12 ").is_err());
        assert!(rule.validate("ALPHA12").is_err());
    }

    #[test]
    fn test_equals_error_names_field() {
        let err = EqualsField::new("new_password", "x").validate("y").unwrap_err();
        assert_eq!(err.param("other_field"), Some("new_password"));
    }

    #[test]
    fn test_differs_from() {
        let rule = DiffersFrom::new("secret1");
        assert!(rule.validate("secret2").is_ok());
        assert_eq!(rule.validate("secret1").unwrap_err().code, "same_as");
    }
}
