//! Event adapter between a host UI and the validation core.
//!
//! A [`FormSession`] owns the four field values. Each [`FormEvent`] is handled
//! to completion before the next one; the session turns it into engine, gate,
//! and coordinator calls and pushes the results to its [`FormView`].
//!
//! | Event | Effect |
//! |---|---|
//! | value changed | store value; validate new password (with cascade) or confirmation; recompute gate |
//! | blur | validate email or current password |
//! | focus | clear the field's error marker |
//! | submit | validate all; show every result, or the submitted state |
//!
//! After an accepted submission the session is closed and ignores further events.

use std::fmt;
use std::sync::Arc;

use tokio::sync::mpsc;

use crate::config::PolicyConfig;
use crate::engine::ValidationEngine;
use crate::error::SessionError;
use crate::field::{FieldId, FieldValues};
use crate::gate::FormGate;
use crate::ports::{
    KeyValueStore, LogNavigator, MemoryStore, Navigator, RedirectScheduler, TokioScheduler,
};
use crate::result::{FormValidityState, ValidationResult};
use crate::submit::{Acceptance, SubmissionCoordinator, SubmissionOutcome};
use crate::view::FormView;

/// An input from the host UI.
#[derive(Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// The text of `field` is now `value`.
    ValueChanged { field: FieldId, value: String },
    Focus(FieldId),
    Blur(FieldId),
    SubmitAttempted,
}

impl FormEvent {
    /// Shorthand for [`FormEvent::ValueChanged`].
    pub fn input(field: FieldId, value: impl Into<String>) -> Self {
        Self::ValueChanged {
            field,
            value: value.into(),
        }
    }
}

impl fmt::Debug for FormEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ValueChanged { field, value } if field.is_secret() => f
                .debug_struct("ValueChanged")
                .field("field", field)
                .field("value", &format_args!("<{} chars>", value.chars().count()))
                .finish(),
            Self::ValueChanged { field, value } => f
                .debug_struct("ValueChanged")
                .field("field", field)
                .field("value", value)
                .finish(),
            Self::Focus(field) => f.debug_tuple("Focus").field(field).finish(),
            Self::Blur(field) => f.debug_tuple("Blur").field(field).finish(),
            Self::SubmitAttempted => f.write_str("SubmitAttempted"),
        }
    }
}

/// One change-password form bound to a view.
#[derive(Debug)]
pub struct FormSession<V: FormView> {
    values: FieldValues,
    engine: ValidationEngine,
    gate: FormGate,
    coordinator: SubmissionCoordinator,
    view: V,
    outcome: Option<SubmissionOutcome>,
}

impl<V: FormView> FormSession<V> {
    /// Creates a session with empty fields and the submit control disabled.
    ///
    /// Field rules and the success sequence both come from `config`.
    pub fn new(
        config: &PolicyConfig,
        store: Arc<dyn KeyValueStore>,
        navigator: Arc<dyn Navigator>,
        scheduler: Arc<dyn RedirectScheduler>,
        mut view: V,
    ) -> Self {
        view.set_submit_enabled(false);
        Self {
            values: FieldValues::default(),
            engine: ValidationEngine::new(config),
            gate: FormGate::new(),
            coordinator: SubmissionCoordinator::new(config, store, navigator, scheduler),
            view,
            outcome: None,
        }
    }

    /// Session with an in-memory store, a logging navigator, and redirects on
    /// the current tokio runtime.
    pub fn headless(config: &PolicyConfig, view: V) -> Result<Self, SessionError> {
        Ok(Self::new(
            config,
            Arc::new(MemoryStore::new()),
            Arc::new(LogNavigator),
            Arc::new(TokioScheduler::current()?),
            view,
        ))
    }

    /// Handles one event. Returns the submission outcome for a submit event.
    pub fn handle(&mut self, event: FormEvent) -> Option<&SubmissionOutcome> {
        if self.is_submitted() {
            tracing::trace!(?event, "session closed, event ignored");
            return None;
        }

        match event {
            FormEvent::ValueChanged { field, value } => {
                self.values.set(field, value);
                if field.validates_on_input() {
                    for (id, result) in self.engine.revalidate(field, &self.values) {
                        render(&mut self.view, id, &result);
                    }
                }
                let enabled = self.gate.update(&self.values);
                self.view.set_submit_enabled(enabled);
                None
            }
            FormEvent::Blur(field) => {
                if field.validates_on_blur() {
                    let result = self.engine.validate_field(field, &self.values);
                    render(&mut self.view, field, &result);
                }
                None
            }
            FormEvent::Focus(field) => {
                self.view.clear_error(field);
                None
            }
            FormEvent::SubmitAttempted => {
                let outcome = self.coordinator.on_submit(&mut self.engine, &self.values);
                match &outcome {
                    SubmissionOutcome::Rejected(state) => {
                        for (id, result) in state.iter() {
                            render(&mut self.view, id, result);
                        }
                    }
                    SubmissionOutcome::Accepted(_) => self.view.show_submitted(),
                }
                self.outcome = Some(outcome);
                self.outcome.as_ref()
            }
        }
    }

    /// Handles events from `events` until the form is submitted or the channel
    /// closes, then returns the session.
    pub async fn run(mut self, mut events: mpsc::Receiver<FormEvent>) -> Self {
        while let Some(event) = events.recv().await {
            self.handle(event);
            if self.is_submitted() {
                break;
            }
        }
        self
    }

    #[must_use]
    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    /// Latest per-field results.
    #[must_use]
    pub fn validity(&self) -> &FormValidityState {
        self.engine.state()
    }

    #[must_use]
    pub fn is_submit_enabled(&self) -> bool {
        self.gate.is_enabled()
    }

    /// True once a submission has been accepted.
    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.acceptance().is_some()
    }

    /// The accepted submission, including any pending redirect.
    #[must_use]
    pub fn acceptance(&self) -> Option<&Acceptance> {
        match &self.outcome {
            Some(SubmissionOutcome::Accepted(acceptance)) => Some(acceptance),
            _ => None,
        }
    }

    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }
}

fn render<V: FormView>(view: &mut V, field: FieldId, result: &ValidationResult) {
    if result.is_valid() {
        view.show_success(field);
    } else {
        view.show_error(field, result.message());
    }
}
