//! WHEN combinator - conditional validation
//!
//! The wrapped validator only runs when the condition returns `true`;
//! otherwise validation succeeds without running it.
//!
//! # Examples
//!
//! ```rust
//! use passform_validator::prelude::*;
//!
//! // Only enforce the minimum once something has been typed
//! let validator = when(min_length(6), |s: &str| !s.is_empty());
//! assert!(validator.validate("").is_ok()); // skipped
//! assert!(validator.validate("abc").is_err()); // validated, too short
//! ```

use crate::foundation::{Validate, ValidationError};

/// Conditionally applies a validator based on a predicate.
#[derive(Debug, Clone, Copy)]
pub struct When<V, C> {
    pub(crate) validator: V,
    pub(crate) condition: C,
}

impl<V, C> When<V, C> {
    /// Creates a new `When` combinator.
    pub fn new(validator: V, condition: C) -> Self {
        Self {
            validator,
            condition,
        }
    }

    /// Returns a reference to the inner validator.
    pub fn validator(&self) -> &V {
        &self.validator
    }
}

impl<V, C> Validate for When<V, C>
where
    V: Validate,
    C: Fn(&V::Input) -> bool,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if (self.condition)(input) {
            self.validator.validate(input)
        } else {
            Ok(())
        }
    }
}

/// Creates a `When` combinator from a validator and condition.
pub fn when<V, C>(validator: V, condition: C) -> When<V, C>
where
    V: Validate,
    C: Fn(&V::Input) -> bool,
{
    When::new(validator, condition)
}
