use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::catalog::Catalog;
use crate::wizard::{
    ApplicationDraft, ApplicationWizard, FormSubmission, SubmissionOutcome, SubmissionPort,
    WizardStep,
};

pub(super) fn catalog() -> Arc<Catalog> {
    Arc::new(Catalog::standard())
}

pub(super) fn wizard() -> ApplicationWizard {
    ApplicationWizard::new(catalog())
}

pub(super) fn move_in() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 1).expect("valid move-in date")
}

pub(super) fn fill_personal(draft: &mut ApplicationDraft) {
    draft.first_name = "Dana".to_string();
    draft.last_name = "Okafor".to_string();
    draft.email = "dana.okafor@example.edu".to_string();
    draft.phone = "216-555-0142".to_string();
}

pub(super) fn fill_address(draft: &mut ApplicationDraft) {
    draft.current_address = "11900 Carlton Road".to_string();
    draft.current_city = "Cleveland".to_string();
    draft.current_state = "OH".to_string();
}

pub(super) fn fill_student_employment(draft: &mut ApplicationDraft) {
    draft.university = "Case Western Reserve University".to_string();
    draft.graduation_year = "2027".to_string();
}

pub(super) fn fill_tenancy(draft: &mut ApplicationDraft) {
    draft.preferred_property = "lee-road-2419".to_string();
    draft.move_in_date = Some(move_in());
}

pub(super) fn acknowledge_all(draft: &mut ApplicationDraft) {
    draft.acknowledge_credit = true;
    draft.acknowledge_deposit = true;
    draft.acknowledge_accuracy = true;
}

/// Wizard advanced to the review step with valid minimal data and all
/// acknowledgements checked.
pub(super) fn wizard_at_review() -> ApplicationWizard {
    let mut wizard = wizard();
    {
        let draft = wizard.draft_mut().expect("draft editable");
        fill_personal(draft);
        fill_address(draft);
        fill_student_employment(draft);
        fill_tenancy(draft);
        acknowledge_all(draft);
    }
    for _ in 0..4 {
        wizard.advance();
    }
    assert_eq!(wizard.current_step(), Some(WizardStep::Review));
    wizard
}

/// Port that resolves instantly, records every payload, and rejects
/// with a configured reason when told to.
#[derive(Default)]
pub(super) struct RecordingPort {
    received: Mutex<Vec<FormSubmission>>,
    reject_with: Option<String>,
}

impl RecordingPort {
    pub(super) fn rejecting(reason: &str) -> Self {
        Self {
            received: Mutex::new(Vec::new()),
            reject_with: Some(reason.to_string()),
        }
    }

    pub(super) fn received(&self) -> Vec<FormSubmission> {
        self.received.lock().expect("port mutex poisoned").clone()
    }
}

#[async_trait]
impl SubmissionPort for RecordingPort {
    async fn submit(&self, submission: FormSubmission) -> SubmissionOutcome {
        self.received
            .lock()
            .expect("port mutex poisoned")
            .push(submission);
        match &self.reject_with {
            Some(reason) => SubmissionOutcome::Rejected {
                reason: reason.clone(),
            },
            None => SubmissionOutcome::Accepted,
        }
    }
}
