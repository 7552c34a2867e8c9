//! Host UI boundary.
//!
//! A [`FormView`] receives display updates; it never decides anything.
//! [`RecordingView`] keeps the commands in order for headless hosts and tests.

use crate::field::FieldId;

/// Display operations the session drives.
pub trait FormView {
    /// Marks `field` as invalid and shows `message` next to it.
    fn show_error(&mut self, field: FieldId, message: &str);

    /// Marks `field` as valid and clears its message.
    fn show_success(&mut self, field: FieldId);

    /// Removes only the error marker from `field`.
    fn clear_error(&mut self, field: FieldId);

    fn set_submit_enabled(&mut self, enabled: bool);

    /// Hides the form and shows the success panel.
    fn show_submitted(&mut self);
}

impl<T: FormView + ?Sized> FormView for &mut T {
    fn show_error(&mut self, field: FieldId, message: &str) {
        (**self).show_error(field, message);
    }

    fn show_success(&mut self, field: FieldId) {
        (**self).show_success(field);
    }

    fn clear_error(&mut self, field: FieldId) {
        (**self).clear_error(field);
    }

    fn set_submit_enabled(&mut self, enabled: bool) {
        (**self).set_submit_enabled(enabled);
    }

    fn show_submitted(&mut self) {
        (**self).show_submitted();
    }
}

/// One display update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewCommand {
    ShowError { field: FieldId, message: String },
    ShowSuccess(FieldId),
    ClearError(FieldId),
    SetSubmitEnabled(bool),
    ShowSubmitted,
}

/// A view that records every command.
#[derive(Debug, Clone, Default)]
pub struct RecordingView {
    commands: Vec<ViewCommand>,
}

impl RecordingView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn commands(&self) -> &[ViewCommand] {
        &self.commands
    }

    /// Returns the recorded commands and starts a fresh log.
    pub fn take(&mut self) -> Vec<ViewCommand> {
        std::mem::take(&mut self.commands)
    }

    /// The message currently shown for `field`, replaying the log.
    #[must_use]
    pub fn error_for(&self, field: FieldId) -> Option<&str> {
        self.commands.iter().fold(None, |shown, command| match command {
            ViewCommand::ShowError { field: f, message } if *f == field => Some(message.as_str()),
            ViewCommand::ShowSuccess(f) | ViewCommand::ClearError(f) if *f == field => None,
            _ => shown,
        })
    }

    /// The last submit-control state set, if any.
    #[must_use]
    pub fn submit_enabled(&self) -> Option<bool> {
        self.commands.iter().rev().find_map(|command| match command {
            ViewCommand::SetSubmitEnabled(enabled) => Some(*enabled),
            _ => None,
        })
    }
}

impl FormView for RecordingView {
    fn show_error(&mut self, field: FieldId, message: &str) {
        self.commands.push(ViewCommand::ShowError {
            field,
            message: message.to_owned(),
        });
    }

    fn show_success(&mut self, field: FieldId) {
        self.commands.push(ViewCommand::ShowSuccess(field));
    }

    fn clear_error(&mut self, field: FieldId) {
        self.commands.push(ViewCommand::ClearError(field));
    }

    fn set_submit_enabled(&mut self, enabled: bool) {
        self.commands.push(ViewCommand::SetSubmitEnabled(enabled));
    }

    fn show_submitted(&mut self) {
        self.commands.push(ViewCommand::ShowSubmitted);
    }
}
