//! Submit-time validation and the success sequence.
//!
//! On submit every field is validated fresh. Only when all four pass does the
//! coordinator touch the environment: the trimmed email is written to the
//! store (failures are logged and swallowed), and under a redirect policy a
//! one-shot navigation is scheduled [`REDIRECT_DELAY`] later.

use std::fmt;
use std::sync::Arc;

use crate::config::{PolicyConfig, REDIRECT_DELAY};
use crate::engine::ValidationEngine;
use crate::field::{FieldId, FieldValues};
use crate::ports::{KeyValueStore, Navigator, RedirectHandle, RedirectScheduler};
use crate::result::FormValidityState;

/// Result of a submit attempt.
#[derive(Debug)]
pub enum SubmissionOutcome {
    /// At least one field failed. Carries all four results.
    Rejected(FormValidityState),
    /// Every field passed and the success sequence ran.
    Accepted(Acceptance),
}

impl SubmissionOutcome {
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }
}

/// Details of an accepted submission.
#[derive(Debug)]
pub struct Acceptance {
    email: String,
    redirect: Option<RedirectHandle>,
}

impl Acceptance {
    /// The trimmed email that was persisted.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// The pending redirect, under a redirect policy.
    #[must_use]
    pub fn redirect(&self) -> Option<&RedirectHandle> {
        self.redirect.as_ref()
    }

    #[must_use]
    pub fn into_redirect(self) -> Option<RedirectHandle> {
        self.redirect
    }
}

/// Runs the submit algorithm against the environment ports.
pub struct SubmissionCoordinator {
    storage_key: String,
    redirect_url: Option<String>,
    store: Arc<dyn KeyValueStore>,
    navigator: Arc<dyn Navigator>,
    scheduler: Arc<dyn RedirectScheduler>,
}

impl SubmissionCoordinator {
    #[must_use]
    pub fn new(
        config: &PolicyConfig,
        store: Arc<dyn KeyValueStore>,
        navigator: Arc<dyn Navigator>,
        scheduler: Arc<dyn RedirectScheduler>,
    ) -> Self {
        Self {
            storage_key: config.storage_key.clone(),
            redirect_url: config.redirect_url().map(str::to_owned),
            store,
            navigator,
            scheduler,
        }
    }

    /// Validates all fields and, if they all pass, runs the success sequence.
    ///
    /// A rejected submission has no side effects.
    pub fn on_submit(
        &self,
        engine: &mut ValidationEngine,
        values: &FieldValues,
    ) -> SubmissionOutcome {
        let state = engine.validate_all(values);
        if !state.is_all_valid() {
            tracing::info!(invalid = ?state.invalid_fields(), "submission rejected");
            return SubmissionOutcome::Rejected(state);
        }

        let email = values.get(FieldId::Email).trim().to_owned();
        tracing::info!(
            email = %email,
            current_password_len = values.get(FieldId::CurrentPassword).chars().count(),
            new_password_len = values.get(FieldId::NewPassword).chars().count(),
            "submission accepted"
        );

        if let Err(e) = self.store.set(&self.storage_key, &email) {
            tracing::warn!(key = %self.storage_key, error = %e, "failed to persist email");
        }

        let redirect = self.redirect_url.as_ref().map(|url| {
            self.scheduler
                .schedule(url.clone(), REDIRECT_DELAY, Arc::clone(&self.navigator))
        });

        SubmissionOutcome::Accepted(Acceptance { email, redirect })
    }
}

impl fmt::Debug for SubmissionCoordinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubmissionCoordinator")
            .field("storage_key", &self.storage_key)
            .field("redirect_url", &self.redirect_url)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{LogNavigator, MemoryStore, TokioScheduler, UnavailableStore};
    use pretty_assertions::assert_eq;

    fn coordinator(config: &PolicyConfig, store: Arc<dyn KeyValueStore>) -> SubmissionCoordinator {
        SubmissionCoordinator::new(
            config,
            store,
            Arc::new(LogNavigator),
            Arc::new(TokioScheduler::current().unwrap()),
        )
    }

    #[tokio::test]
    async fn test_rejected_submission_leaves_store_untouched() {
        let config = PolicyConfig::strict();
        let store = Arc::new(MemoryStore::new());
        let coordinator = coordinator(&config, store.clone());
        let mut engine = ValidationEngine::new(&config);

        let values = FieldValues::new("a@b.co", "secret1", "secret2", "secret3");
        let outcome = coordinator.on_submit(&mut engine, &values);

        let SubmissionOutcome::Rejected(state) = outcome else {
            panic!("expected rejection");
        };
        assert_eq!(state.len(), 4);
        assert_eq!(state.invalid_fields(), vec![FieldId::ConfirmNewPassword]);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_accepted_submission_persists_trimmed_email() {
        let config = PolicyConfig::strict();
        let store = Arc::new(MemoryStore::new());
        let coordinator = coordinator(&config, store.clone());
        let mut engine = ValidationEngine::new(&config);

        let values = FieldValues::new("  a@b.co ", "secret1", "secret2", "secret2");
        let SubmissionOutcome::Accepted(acceptance) = coordinator.on_submit(&mut engine, &values)
        else {
            panic!("expected acceptance");
        };

        assert_eq!(acceptance.email(), "a@b.co");
        assert!(acceptance.redirect().is_none());
        assert_eq!(store.get("userEmail").as_deref(), Some("a@b.co"));
    }

    #[tokio::test]
    async fn test_storage_failure_does_not_block_acceptance() {
        let config = PolicyConfig::lenient();
        let coordinator = coordinator(&config, Arc::new(UnavailableStore));
        let mut engine = ValidationEngine::new(&config);

        let values = FieldValues::new("a@b.co", "x", "secret2", "secret2");
        let outcome = coordinator.on_submit(&mut engine, &values);
        assert!(outcome.is_accepted());
    }
}
