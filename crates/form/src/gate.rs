//! Submit-control enablement.
//!
//! The gate looks only at whether each raw value is non-empty. It does not
//! consult validation results: four non-empty but invalid values still enable
//! submission, and the failures surface when the user submits.

use crate::field::{FieldId, FieldValues};

/// Tracks whether the submit control should be enabled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormGate {
    enabled: bool,
}

impl FormGate {
    /// Starts disabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True iff all four raw values are non-empty.
    #[must_use]
    pub fn compute_enabled(values: &FieldValues) -> bool {
        FieldId::ALL
            .into_iter()
            .all(|id| !values.get(id).is_empty())
    }

    /// Recomputes from `values` and returns the new state.
    pub fn update(&mut self, values: &FieldValues) -> bool {
        let enabled = Self::compute_enabled(values);
        if enabled != self.enabled {
            tracing::trace!(enabled, "submit gate changed");
        }
        self.enabled = enabled;
        enabled
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}
