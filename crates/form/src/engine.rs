//! Field and whole-form validation.
//!
//! The engine owns the four [`FieldPolicy`] values and the latest
//! [`FormValidityState`]. Values are passed in on every call; nothing is
//! memoised, so repeated calls with the same values give the same results.
//!
//! # Cascade
//!
//! When the new password validates successfully and the confirmation already
//! holds text, the confirmation is re-validated too. This keeps a mismatch
//! error in sync when the user edits the new password after typing the
//! confirmation. [`validate_all`](ValidationEngine::validate_all) evaluates every
//! field directly and does not cascade.

use crate::config::PolicyConfig;
use crate::field::{FieldId, FieldValues};
use crate::policy::FieldPolicy;
use crate::result::{FormValidityState, ValidationResult};

/// Holds the field policies and the latest per-field results.
#[derive(Debug)]
pub struct ValidationEngine {
    policies: [FieldPolicy; 4],
    state: FormValidityState,
}

impl ValidationEngine {
    /// Builds all four policies from `config`.
    #[must_use]
    pub fn new(config: &PolicyConfig) -> Self {
        Self {
            policies: FieldId::ALL.map(|id| FieldPolicy::for_field(id, config)),
            state: FormValidityState::new(),
        }
    }

    /// The policy for `field`.
    #[must_use]
    pub fn policy(&self, field: FieldId) -> &FieldPolicy {
        &self.policies[field.index()]
    }

    /// Evaluates `field` against the current values without recording the result.
    #[must_use]
    pub fn evaluate(&self, field: FieldId, values: &FieldValues) -> ValidationResult {
        let related = field.related().map(|other| values.get(other));
        self.policy(field).evaluate(values.get(field), related)
    }

    /// Validates one field, applying the cascade, and returns its result.
    pub fn validate_field(&mut self, field: FieldId, values: &FieldValues) -> ValidationResult {
        self.run_field(field, values).0
    }

    /// Validates one field and any field it cascades to.
    ///
    /// Returns every fresh result, the requested field first, so a view can
    /// update each of them.
    pub fn revalidate(
        &mut self,
        field: FieldId,
        values: &FieldValues,
    ) -> Vec<(FieldId, ValidationResult)> {
        let (result, cascaded) = self.run_field(field, values);
        std::iter::once((field, result)).chain(cascaded).collect()
    }

    fn run_field(
        &mut self,
        field: FieldId,
        values: &FieldValues,
    ) -> (ValidationResult, Option<(FieldId, ValidationResult)>) {
        let result = self.evaluate(field, values);
        tracing::debug!(
            field = %field,
            valid = result.is_valid(),
            failure = ?result.failure(),
            "field validated"
        );
        self.state.insert(field, result.clone());

        let cascaded = field
            .cascades_to()
            .filter(|dependent| result.is_valid() && !values.get(*dependent).is_empty())
            .map(|dependent| {
                let dependent_result = self.evaluate(dependent, values);
                tracing::debug!(
                    from = %field,
                    to = %dependent,
                    valid = dependent_result.is_valid(),
                    "cascade re-validated dependent field"
                );
                self.state.insert(dependent, dependent_result.clone());
                (dependent, dependent_result)
            });

        (result, cascaded)
    }

    /// Evaluates all four fields from scratch and records the complete state.
    pub fn validate_all(&mut self, values: &FieldValues) -> FormValidityState {
        let state: FormValidityState = FieldId::ALL
            .into_iter()
            .map(|id| (id, self.evaluate(id, values)))
            .collect();
        self.state = state.clone();
        state
    }

    /// The latest recorded results.
    #[must_use]
    pub fn state(&self) -> &FormValidityState {
        &self.state
    }
}
