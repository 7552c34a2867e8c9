//! End-to-end event flows through a [`FormSession`].

use passform::prelude::*;
use pretty_assertions::assert_eq;
use tokio::sync::mpsc;

fn session(config: &PolicyConfig) -> FormSession<RecordingView> {
    FormSession::headless(config, RecordingView::new()).unwrap()
}

fn type_into(session: &mut FormSession<RecordingView>, field: FieldId, value: &str) {
    session.handle(FormEvent::input(field, value));
}

#[tokio::test]
async fn test_confirmation_error_follows_new_password_edits() {
    let mut session = session(&PolicyConfig::strict());
    type_into(&mut session, FieldId::NewPassword, "alpha12");
    type_into(&mut session, FieldId::ConfirmNewPassword, "alpha12");
    assert_eq!(session.view().error_for(FieldId::ConfirmNewPassword), None);
    session.view_mut().take();

    type_into(&mut session, FieldId::NewPassword, "beta123");

    assert_eq!(
        session.view().commands(),
        &[
            ViewCommand::ShowSuccess(FieldId::NewPassword),
            ViewCommand::ShowError {
                field: FieldId::ConfirmNewPassword,
                message: "Passwords do not match.".into(),
            },
            ViewCommand::SetSubmitEnabled(false),
        ]
    );
    assert_eq!(
        session
            .validity()
            .get(FieldId::ConfirmNewPassword)
            .and_then(ValidationResult::failure),
        Some(FailureKind::Mismatch)
    );
}

#[tokio::test]
async fn test_editing_current_password_does_not_recheck_new() {
    let mut session = session(&PolicyConfig::strict());
    type_into(&mut session, FieldId::CurrentPassword, "secret1");
    type_into(&mut session, FieldId::NewPassword, "secret2");
    session.view_mut().take();

    type_into(&mut session, FieldId::CurrentPassword, "secret2");
    session.handle(FormEvent::Blur(FieldId::CurrentPassword));

    assert_eq!(session.view().error_for(FieldId::NewPassword), None);
    assert!(
        session
            .validity()
            .get(FieldId::NewPassword)
            .is_some_and(ValidationResult::is_valid)
    );
}

#[tokio::test]
async fn test_rejected_submit_renders_all_fields() {
    let mut session = session(&PolicyConfig::strict());
    type_into(&mut session, FieldId::Email, "not-an-email");
    type_into(&mut session, FieldId::CurrentPassword, "abc");
    type_into(&mut session, FieldId::NewPassword, "secret2");
    type_into(&mut session, FieldId::ConfirmNewPassword, "secret2");
    assert!(session.is_submit_enabled());
    session.view_mut().take();

    let outcome = session.handle(FormEvent::SubmitAttempted);
    assert!(matches!(outcome, Some(SubmissionOutcome::Rejected(_))));

    let view = session.view();
    assert_eq!(view.commands().len(), 4);
    assert_eq!(
        view.error_for(FieldId::Email),
        Some("Please enter a valid email address.")
    );
    assert_eq!(
        view.error_for(FieldId::CurrentPassword),
        Some("Password must be at least 6 characters long.")
    );
    assert_eq!(view.error_for(FieldId::NewPassword), None);
    assert_eq!(view.error_for(FieldId::ConfirmNewPassword), None);
    assert!(!session.is_submitted());
}

#[tokio::test]
async fn test_run_stops_after_acceptance() {
    let (tx, rx) = mpsc::channel(16);
    for event in [
        FormEvent::input(FieldId::Email, "user@example.com"),
        FormEvent::Blur(FieldId::Email),
        FormEvent::input(FieldId::CurrentPassword, "secret1"),
        FormEvent::input(FieldId::NewPassword, "secret2"),
        FormEvent::input(FieldId::ConfirmNewPassword, "secret2"),
        FormEvent::SubmitAttempted,
        FormEvent::input(FieldId::Email, "late@example.com"),
    ] {
        tx.send(event).await.unwrap();
    }

    let session = session(&PolicyConfig::strict()).run(rx).await;

    assert!(session.is_submitted());
    assert_eq!(
        session.acceptance().map(Acceptance::email),
        Some("user@example.com")
    );
    assert_eq!(session.values().get(FieldId::Email), "user@example.com");
    assert_eq!(
        session.into_view().commands().last(),
        Some(&ViewCommand::ShowSubmitted)
    );
}

#[tokio::test]
async fn test_run_returns_when_channel_closes() {
    let (tx, rx) = mpsc::channel(4);
    tx.send(FormEvent::input(FieldId::Email, "a")).await.unwrap();
    drop(tx);

    let session = session(&PolicyConfig::lenient()).run(rx).await;
    assert!(!session.is_submitted());
    assert_eq!(session.values().get(FieldId::Email), "a");
}
