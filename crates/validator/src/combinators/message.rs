//! MESSAGE combinator - custom error messages

use std::borrow::Cow;

use crate::foundation::{Validate, ValidationError};

// ============================================================================
// WITH MESSAGE COMBINATOR
// ============================================================================

/// Replaces the error message of a validator.
///
/// The replaced error is attached as the single nested error so the
/// original code and parameters stay reachable through
/// [`ValidationError::root_cause`].
///
/// # Examples
///
/// ```rust
/// use passform_validator::prelude::*;
///
/// let validator = WithMessage::new(min_length(6), "Password must be at least 6 characters long.");
///
/// let err = validator.validate("short").unwrap_err();
/// assert_eq!(err.message, "Password must be at least 6 characters long.");
/// assert_eq!(err.root_cause().code, "min_length");
/// ```
#[derive(Debug, Clone)]
pub struct WithMessage<V> {
    inner: V,
    message: Cow<'static, str>,
    code: Option<Cow<'static, str>>,
}

impl<V> WithMessage<V> {
    /// Creates a new WithMessage combinator with a custom message.
    pub fn new(inner: V, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            inner,
            message: message.into(),
            code: None,
        }
    }

    /// Also replaces the error code.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_code(mut self, code: impl Into<Cow<'static, str>>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Returns a reference to the inner validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }

    /// Returns the custom message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the custom code, if set.
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }
}

impl<V> Validate for WithMessage<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.inner.validate(input).map_err(|original| {
            let code = self.code.clone().unwrap_or_else(|| original.code.clone());
            let mut error = ValidationError::new(code, self.message.clone());
            error.field.clone_from(&original.field);
            error.with_nested_error(original)
        })
    }
}

/// Creates a WithMessage combinator.
pub fn with_message<V>(validator: V, message: impl Into<Cow<'static, str>>) -> WithMessage<V> {
    WithMessage::new(validator, message)
}
