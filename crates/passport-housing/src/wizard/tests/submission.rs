use super::common::*;
use crate::wizard::{SimulatedSubmission, WizardState, WizardStep};
use serde_json::Value;
use std::time::Duration;

#[tokio::test]
async fn submit_is_a_noop_before_the_acknowledgements() {
    let mut wizard = wizard_at_review();
    wizard.draft_mut().expect("draft editable").acknowledge_accuracy = false;

    let port = RecordingPort::default();
    let state = wizard.submit(&port).await;

    assert_eq!(state, WizardState::InProgress(WizardStep::Review));
    assert!(port.received().is_empty(), "nothing should leave the wizard");
}

#[tokio::test]
async fn submit_is_a_noop_before_the_review_step() {
    let mut wizard = wizard();
    fill_personal(wizard.draft_mut().expect("draft editable"));

    let port = RecordingPort::default();
    let state = wizard.submit(&port).await;

    assert_eq!(state, WizardState::InProgress(WizardStep::Personal));
    assert!(port.received().is_empty());
}

#[tokio::test]
async fn accepted_submission_reaches_the_terminal_state() {
    let mut wizard = wizard_at_review();
    let port = RecordingPort::default();

    let state = wizard.submit(&port).await;

    assert_eq!(state, WizardState::Submitted);
    assert_eq!(port.received().len(), 1);
    assert!(wizard.last_rejection().is_none());

    let summary = wizard.submitted().expect("confirmation view available");
    assert_eq!(summary.applicant_name, "Dana Okafor");
    assert_eq!(summary.property_address.as_deref(), Some("2419 Lee Road"));
    assert_eq!(summary.move_in_date, Some(move_in()));
}

#[tokio::test]
async fn submitted_wizard_is_immutable() {
    let mut wizard = wizard_at_review();
    let port = RecordingPort::default();
    wizard.submit(&port).await;

    assert!(wizard.draft_mut().is_none());
    assert_eq!(wizard.advance(), WizardState::Submitted);
    assert_eq!(wizard.retreat(), WizardState::Submitted);
    assert_eq!(wizard.submit(&port).await, WizardState::Submitted);
    assert_eq!(port.received().len(), 1, "no second delivery");
}

#[tokio::test]
async fn rejection_reopens_the_review_step_with_the_reason() {
    let mut wizard = wizard_at_review();
    let port = RecordingPort::rejecting("Backend is down for maintenance");

    let state = wizard.submit(&port).await;

    assert_eq!(state, WizardState::InProgress(WizardStep::Review));
    assert_eq!(
        wizard.last_rejection(),
        Some("Backend is down for maintenance")
    );
    assert!(wizard.submitted().is_none());
    assert!(wizard.draft_mut().is_some(), "draft stays editable");
}

#[tokio::test]
async fn resubmission_after_a_rejection_can_succeed() {
    let mut wizard = wizard_at_review();

    let rejecting = RecordingPort::rejecting("Transient error");
    wizard.submit(&rejecting).await;
    assert_eq!(wizard.state(), WizardState::InProgress(WizardStep::Review));

    let accepting = RecordingPort::default();
    let state = wizard.submit(&accepting).await;
    assert_eq!(state, WizardState::Submitted);
    assert!(wizard.last_rejection().is_none(), "rejection cleared");
}

#[tokio::test]
async fn payload_carries_the_form_type_and_resolved_address() {
    let mut wizard = wizard_at_review();
    let port = RecordingPort::default();
    wizard.submit(&port).await;

    let payload = port.received().remove(0);
    assert_eq!(payload.form_type, "rental-application");
    assert_eq!(payload.name.as_deref(), Some("Dana Okafor"));
    assert_eq!(payload.email.as_deref(), Some("dana.okafor@example.edu"));
    assert_eq!(
        payload.data.get("preferredProperty"),
        Some(&Value::String("lee-road-2419".to_string()))
    );
    assert_eq!(
        payload.data.get("preferredPropertyAddress"),
        Some(&Value::String("2419 Lee Road".to_string()))
    );
}

#[tokio::test(start_paused = true)]
async fn simulated_delivery_waits_its_fixed_delay_then_accepts() {
    let mut wizard = wizard_at_review();
    let port = SimulatedSubmission::new(Duration::from_millis(1500));

    // Paused time auto-advances through the sleep.
    let state = wizard.submit(&port).await;
    assert_eq!(state, WizardState::Submitted);
}
