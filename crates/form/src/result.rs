//! Validation outcomes for a single field and for the whole form.

use std::collections::BTreeMap;

use passform_validator::foundation::ValidationError;
use serde::{Deserialize, Serialize};

use crate::field::FieldId;

/// Which rule a field failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The value is empty.
    Required,
    /// The email does not have the `local@domain.tld` shape.
    Format,
    /// The email length is outside its bounds.
    Length,
    /// A password is shorter than its minimum.
    TooShort,
    /// The new password is longer than its maximum.
    TooLong,
    /// The new password equals the current password.
    SameAsCurrent,
    /// The confirmation differs from the new password.
    Mismatch,
}

impl FailureKind {
    /// Classifies a rule failure by the code of the rule that actually failed.
    ///
    /// Unrecognised codes come from custom rules and are reported as [`Format`](Self::Format).
    #[must_use]
    pub fn classify(error: &ValidationError) -> Self {
        match error.root_cause().code.as_ref() {
            "not_empty" | "required" => FailureKind::Required,
            "length_range" => FailureKind::Length,
            "min_length" => FailureKind::TooShort,
            "max_length" => FailureKind::TooLong,
            "same_as" => FailureKind::SameAsCurrent,
            "mismatch" => FailureKind::Mismatch,
            _ => FailureKind::Format,
        }
    }
}

/// Pass/fail verdict for one field plus the message to display.
///
/// Produced fresh by every validation; never updated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    valid: bool,
    message: String,
    failure: Option<FailureKind>,
}

impl ValidationResult {
    /// A passing result with an empty message.
    #[must_use]
    pub fn valid() -> Self {
        Self {
            valid: true,
            message: String::new(),
            failure: None,
        }
    }

    /// A failing result.
    pub fn invalid(failure: FailureKind, message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: message.into(),
            failure: Some(failure),
        }
    }

    /// Converts a rule-chain outcome, keeping the chain's message.
    #[must_use]
    pub fn from_outcome(outcome: Result<(), ValidationError>) -> Self {
        match outcome {
            Ok(()) => Self::valid(),
            Err(error) => Self::invalid(FailureKind::classify(&error), error.message),
        }
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// The message to display; empty when valid.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn failure(&self) -> Option<FailureKind> {
        self.failure
    }
}

/// Latest [`ValidationResult`] per field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormValidityState {
    results: BTreeMap<FieldId, ValidationResult>,
}

impl FormValidityState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Result for `field`, if it has been validated.
    #[must_use]
    pub fn get(&self, field: FieldId) -> Option<&ValidationResult> {
        self.results.get(&field)
    }

    /// Records a result, replacing any previous one for the field.
    pub fn insert(&mut self, field: FieldId, result: ValidationResult) {
        self.results.insert(field, result);
    }

    /// True only when all four fields have a valid result.
    #[must_use]
    pub fn is_all_valid(&self) -> bool {
        FieldId::ALL
            .iter()
            .all(|id| self.get(*id).is_some_and(ValidationResult::is_valid))
    }

    /// Fields whose latest result is invalid, in form order.
    #[must_use]
    pub fn invalid_fields(&self) -> Vec<FieldId> {
        self.iter()
            .filter(|(_, result)| !result.is_valid())
            .map(|(id, _)| id)
            .collect()
    }

    /// Iterates recorded results in form order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldId, &ValidationResult)> {
        self.results.iter().map(|(id, result)| (*id, result))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

impl FromIterator<(FieldId, ValidationResult)> for FormValidityState {
    fn from_iter<I: IntoIterator<Item = (FieldId, ValidationResult)>>(iter: I) -> Self {
        Self {
            results: iter.into_iter().collect(),
        }
    }
}
