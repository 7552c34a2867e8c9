//! Core validation types and traits
//!
//! This module contains the fundamental building blocks of the validation system:
//!
//! - **Traits**: `Validate`, `ValidateExt`
//! - **Errors**: `ValidationError`, `ValidationErrors`
//!
//! Validators are generic over their input type and compose with logical
//! combinators:
//!
//! ```rust
//! use passform_validator::prelude::*;
//!
//! let validator = min_length(5).and(max_length(20));
//! assert!(validator.validate("hello").is_ok());
//! assert!(validator.validate("hi").is_err());
//! ```
//!
//! Errors are structured and carry a stable code next to the message:
//!
//! ```rust
//! use passform_validator::foundation::ValidationError;
//!
//! let error = ValidationError::new("min_length", "Too short")
//!     .with_field("new_password")
//!     .with_param("min", "6");
//! assert_eq!(error.param("min"), Some("6"));
//! ```

pub mod error;
pub mod traits;

pub use error::{ValidationError, ValidationErrors};
pub use traits::{Validate, ValidateExt};

// ============================================================================
// UTILITIES
// ============================================================================

/// Validates a value with several validators and collects every failure.
///
/// Unlike [`ValidateExt::and`], this does not stop at the first failure.
pub fn validate_with_all<V>(value: &V::Input, validators: &[&V]) -> Result<(), ValidationErrors>
where
    V: Validate + ?Sized,
{
    validators
        .iter()
        .filter_map(|validator| validator.validate(value).err())
        .collect::<ValidationErrors>()
        .into_result(())
}

/// A validation result using the standard `ValidationError`.
pub type ValidationResult<T> = Result<T, ValidationError>;
