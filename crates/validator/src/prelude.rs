//! Prelude module for convenient imports.
//!
//! Provides a single `use passform_validator::prelude::*;` import that brings
//! in the traits, error types, validators, and combinators.
//!
//! # Examples
//!
//! ```rust
//! use passform_validator::prelude::*;
//!
//! let email = not_empty().and(email_shape()).and(length_range(5, 50).unwrap());
//! assert!(email.validate("a@b.co").is_ok());
//! ```

// ============================================================================
// FOUNDATION: Core traits and errors
// ============================================================================

pub use crate::foundation::{Validate, ValidateExt, ValidationError, ValidationErrors};

// ============================================================================
// VALIDATORS: All built-in validators
// ============================================================================

pub use crate::validators::*;

// ============================================================================
// COMBINATORS: Composition functions and types
// ============================================================================

pub use crate::combinators::{And, When, WithMessage, and, when, with_message};
